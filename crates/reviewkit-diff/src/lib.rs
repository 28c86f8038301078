//! Diff segmentation, filtering, and batching for AI code review
//!
//! Takes a raw unified-diff blob, possibly the concatenation of several
//! commits' patches, splits it into per-file segments with duplicate
//! sections merged, filters segments through glob ignore patterns, and
//! either caps the result to the largest files or partitions it into
//! bounded batches for incremental review.
//!
//! The engine is pure and synchronous: it never raises, degrading by
//! omission instead (malformed sections are dropped, invalid bounds
//! are treated as unbounded).

mod ignore;
mod parser;
mod select;
mod types;

pub use ignore::GlobMatcher;
pub use parser::parse_diff_segments;
pub use select::{create_diff_batches, process_diff_for_review};
pub use types::{BatchResult, DiffBatch, DiffOptions, DiffSegment, ProcessResult};

#[cfg(test)]
mod tests;
