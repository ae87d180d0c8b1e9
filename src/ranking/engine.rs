use std::io;

use super::extractor::ScoreExtractor;
use super::index::RankingIndex;
use crate::lines::{LineSink, LineSource};

/// Orders records by descending score, ties broken by ordinal text order.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine<E> {
    extractor: E,
}

impl<E: ScoreExtractor> RankingEngine<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Read every line from `source`, then write them to `sink` ranked.
    ///
    /// Reading stops at end of input or at the first empty line, whichever
    /// comes first. Returns `Ok(false)` as soon as a line has no score; in
    /// that case nothing has been written. I/O errors from either side are
    /// returned as `Err`.
    pub fn rank<S, W>(&self, source: &mut S, sink: &mut W) -> io::Result<bool>
    where
        S: LineSource + ?Sized,
        W: LineSink + ?Sized,
    {
        let Some(index) = self.build_index(source)? else {
            return Ok(false);
        };

        for line in index.drain() {
            sink.write_line(&line)?;
        }

        Ok(true)
    }

    /// First phase of [`rank`](Self::rank): consume the source into an index.
    /// `None` means a line failed score extraction.
    pub fn build_index<S>(&self, source: &mut S) -> io::Result<Option<RankingIndex>>
    where
        S: LineSource + ?Sized,
    {
        let mut index = RankingIndex::new();

        while let Some(line) = source.next_line()? {
            // An empty line ends the input just like end of stream.
            if line.is_empty() {
                break;
            }

            let Some(score) = self.extractor.try_read_score(Some(&line)) else {
                return Ok(None);
            };

            index.insert(score, line);
        }

        Ok(Some(index))
    }
}
