//! Type definitions for diff segmentation and batching

use serde::Serialize;

/// One file's contribution to a diff, reconstructed from its
/// `diff --git` section(s). Duplicate sections for the same path are
/// merged into a single segment during parsing.
#[derive(Debug, Clone)]
pub struct DiffSegment {
    /// Display path: the new path, or the old path for deletions
    pub file_path: String,
    /// Full per-file diff text, starting with its `diff --git` header
    pub text: String,
    pub insertions: usize,
    pub deletions: usize,
    /// `insertions + deletions`, used to rank files when trimming
    pub change_size: usize,
}

/// Options shared by both processing modes.
///
/// `max_files` is the file cap in single-diff mode and the batch size
/// in batching mode. `None` (or zero, normalized internally) means
/// unbounded / one batch.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    pub ignore_patterns: Vec<String>,
    pub max_files: Option<usize>,
}

/// Result of cap-and-trim processing (single-diff mode)
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResult {
    pub diff: String,
    pub file_count: usize,
    pub ignored_file_count: usize,
    pub trimmed_file_count: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// One bounded partition of the filtered diff
#[derive(Debug, Clone, Serialize)]
pub struct DiffBatch {
    pub diff: String,
    pub file_count: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// Result of batch partitioning. Counts cover every non-ignored
/// segment; nothing is trimmed in this mode.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub batches: Vec<DiffBatch>,
    pub total_file_count: usize,
    pub ignored_file_count: usize,
    pub insertions: usize,
    pub deletions: usize,
}
