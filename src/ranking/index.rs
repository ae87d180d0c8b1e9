use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Records sharing one score, kept in ordinal (byte-wise) ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    records: Vec<String>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the binary-search insertion point. Equal texts are kept, so
    /// duplicates land adjacent to each other.
    pub fn insert(&mut self, record: String) {
        let position = match self
            .records
            .binary_search_by(|probe| probe.as_bytes().cmp(record.as_bytes()))
        {
            Ok(found) => found,
            Err(insert_at) => insert_at,
        };
        self.records.insert(position, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }
}

impl IntoIterator for Bucket {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Score to bucket mapping, iterated highest score first.
///
/// Keys are wrapped in `Reverse` so the map's natural order is descending,
/// which keeps `i64::MIN` last without any negation overflow.
#[derive(Debug, Default)]
pub struct RankingIndex {
    buckets: BTreeMap<Reverse<i64>, Bucket>,
    len: usize,
}

impl RankingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, score: i64, record: String) {
        self.buckets.entry(Reverse(score)).or_default().insert(record);
        self.len += 1;
    }

    /// Number of records held across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket(&self, score: i64) -> Option<&Bucket> {
        self.buckets.get(&Reverse(score))
    }

    /// Scores in drain order.
    pub fn scores(&self) -> impl Iterator<Item = i64> + '_ {
        self.buckets.keys().map(|Reverse(score)| *score)
    }

    /// Consume the index, yielding every record by descending score and then
    /// in bucket order.
    pub fn drain(self) -> impl Iterator<Item = String> {
        self.buckets.into_values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_keeps_ordinal_order() {
        let mut bucket = Bucket::new();
        for record in ["KING, MADISON, 88", "BUNDY, TERESSA, 88", "ADAMS, AL, 88"] {
            bucket.insert(record.to_string());
        }
        assert_eq!(
            bucket.records(),
            ["ADAMS, AL, 88", "BUNDY, TERESSA, 88", "KING, MADISON, 88"]
        );
    }

    #[test]
    fn test_bucket_ordinal_not_case_insensitive() {
        let mut bucket = Bucket::new();
        bucket.insert("b, 1".to_string());
        bucket.insert("B, 1".to_string());
        bucket.insert("a, 1".to_string());
        // Uppercase ASCII sorts before lowercase byte-wise.
        assert_eq!(bucket.records(), ["B, 1", "a, 1", "b, 1"]);
    }

    #[test]
    fn test_bucket_keeps_duplicates() {
        let mut bucket = Bucket::new();
        bucket.insert("SAME, 1".to_string());
        bucket.insert("OTHER, 1".to_string());
        bucket.insert("SAME, 1".to_string());
        assert_eq!(bucket.len(), 3);
        assert_eq!(bucket.records(), ["OTHER, 1", "SAME, 1", "SAME, 1"]);
    }

    #[test]
    fn test_index_iterates_descending_over_full_range() {
        let mut index = RankingIndex::new();
        for score in [0, i64::MIN, 1, i64::MAX, -1] {
            index.insert(score, format!("R, {}", score));
        }
        let scores: Vec<i64> = index.scores().collect();
        assert_eq!(scores, vec![i64::MAX, 1, 0, -1, i64::MIN]);
    }

    #[test]
    fn test_index_groups_equal_scores() {
        let mut index = RankingIndex::new();
        index.insert(88, "KING, MADISON, 88".to_string());
        index.insert(70, "SMITH, ALLAN, 70".to_string());
        index.insert(88, "BUNDY, TERESSA, 88".to_string());

        assert_eq!(index.len(), 3);
        assert_eq!(index.bucket_count(), 2);
        assert_eq!(index.bucket(88).map(Bucket::len), Some(2));
        assert!(index.bucket(85).is_none());
    }

    #[test]
    fn test_drain_order() {
        let mut index = RankingIndex::new();
        index.insert(88, "BUNDY, TERESSA, 88".to_string());
        index.insert(70, "SMITH, ALLAN, 70".to_string());
        index.insert(88, "KING, MADISON, 88".to_string());
        index.insert(85, "SMITH, FRANCIS, 85".to_string());

        let drained: Vec<String> = index.drain().collect();
        assert_eq!(
            drained,
            vec![
                "BUNDY, TERESSA, 88",
                "KING, MADISON, 88",
                "SMITH, FRANCIS, 85",
                "SMITH, ALLAN, 70",
            ]
        );
    }

    #[test]
    fn test_empty_index_drains_nothing() {
        let index = RankingIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.drain().count(), 0);
    }
}
