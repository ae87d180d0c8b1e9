pub mod engine;
pub mod extractor;
pub mod index;

pub use engine::RankingEngine;
pub use extractor::{LastFieldExtractor, ScoreExtractor, DEFAULT_SEPARATOR};
pub use index::{Bucket, RankingIndex};
