/// Separator between the free-form fields and the trailing score field.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Pulls a ranking score out of a raw record line.
pub trait ScoreExtractor {
    /// Returns the score carried by `source`, or `None` when the line has no
    /// usable score. An absent line never has a score.
    fn try_read_score(&self, source: Option<&str>) -> Option<i64>;
}

impl<T: ScoreExtractor + ?Sized> ScoreExtractor for &T {
    fn try_read_score(&self, source: Option<&str>) -> Option<i64> {
        (**self).try_read_score(source)
    }
}

/// Reads the score from the text after the *last* separator occurrence.
///
/// Earlier separators belong to the free-form fields, so
/// `"9,223,372,036,854,775,807"` yields `807`. The score text may carry
/// surrounding whitespace and a single leading `+` or `-`; anything else
/// (grouping, decimal points, exponents, out-of-range magnitudes) is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastFieldExtractor {
    separator: String,
}

impl LastFieldExtractor {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for LastFieldExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl ScoreExtractor for LastFieldExtractor {
    fn try_read_score(&self, source: Option<&str>) -> Option<i64> {
        let source = source?;
        if self.separator.is_empty() {
            return None;
        }
        let (_, score) = source.rsplit_once(self.separator.as_str())?;
        parse_score(score)
    }
}

/// Invariant base-10 parse of a signed 64-bit score.
///
/// `i64::from_str` already accepts an optional sign and rejects overflow,
/// so only the surrounding whitespace needs stripping.
fn parse_score(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(source: &str) -> Option<i64> {
        LastFieldExtractor::default().try_read_score(Some(source))
    }

    #[test]
    fn test_absent_source_has_no_score() {
        assert_eq!(LastFieldExtractor::default().try_read_score(None), None);
    }

    #[test]
    fn test_missing_separator_fails() {
        assert_eq!(read("-1"), None);
        assert_eq!(read("0"), None);
        assert_eq!(read("1"), None);
    }

    #[test]
    fn test_rejects_invalid_score_text() {
        for source in [
            "SPECIFIC, TO, CULTURE, 9 223 372 036 854 775 807",
            "WRONG, MINUS, - 9223372036854775808",
            "LONG, OVER MAXIMUM, 9223372036854775808",
            "LONG, UNDER MINIMUM, -9223372036854775809",
            "FLOATING POINT, RATIONAL, 0.1",
            "FLOATING POINT, INTEGER, 1.0",
            "EXPONENT, 1e3",
            "NUMBER AS TEXT, TEN",
            "NOTHING,",
            "ONLY WHITESPACE,   ",
            "DOUBLE SIGN, +-5",
            "",
        ] {
            assert_eq!(read(source), None, "expected no score for {:?}", source);
        }
    }

    #[test]
    fn test_reads_valid_scores() {
        let cases = [
            ("LONG, ZERO, 000", 0),
            ("LONG, TEN, 010", 10),
            ("LONG, PLUS, +42", 42),
            ("LONG, NEGATIVE, -42", -42),
            ("LONG, MAXIMUM, 9223372036854775807", i64::MAX),
            ("LONG, MINIMUM, -9223372036854775808", i64::MIN),
            ("WHITE SPACE, BEFORE AND AFTER,\t123456789 ", 123_456_789),
            ("SMITH, ALLAN, 70", 70),
        ];
        for (source, expected) in cases {
            assert_eq!(read(source), Some(expected), "source {:?}", source);
        }
    }

    #[test]
    fn test_uses_last_separator() {
        assert_eq!(read("9,223,372,036,854,775,807"), Some(807));
        assert_eq!(read("A, B, C, D, 5"), Some(5));
    }

    #[test]
    fn test_formatted_score_reparses() {
        for score in [i64::MIN, -1, 0, 1, 88, i64::MAX] {
            let line = format!("NAME, SURNAME, {}", score);
            let parsed = read(&line).unwrap();
            assert_eq!(parsed, score);
            assert_eq!(read(&format!("X,{}", parsed)), Some(score));
        }
    }

    #[test]
    fn test_custom_separator() {
        let extractor = LastFieldExtractor::new(" | ");
        assert_eq!(extractor.try_read_score(Some("a | b | 12")), Some(12));
        assert_eq!(extractor.try_read_score(Some("a, b, 12")), None);
    }

    #[test]
    fn test_empty_separator_never_matches() {
        let extractor = LastFieldExtractor::new("");
        assert_eq!(extractor.try_read_score(Some("a,1")), None);
    }
}
