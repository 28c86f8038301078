//! Cap-and-trim selection and batch partitioning

use super::ignore::GlobMatcher;
use super::parser::parse_diff_segments;
use super::types::{BatchResult, DiffBatch, DiffOptions, DiffSegment, ProcessResult};
use std::collections::HashSet;

/// Produce a single review diff, capped to the `max_files` largest
/// segments by change size when the filtered set is over the bound.
/// Kept segments are emitted in first-seen order regardless of rank.
pub fn process_diff_for_review(diff_text: &str, options: &DiffOptions) -> ProcessResult {
    let (included, ignored_file_count) =
        filter_ignored(parse_diff_segments(diff_text), &options.ignore_patterns);

    let (kept, trimmed_file_count) = match normalize_bound(options.max_files) {
        Some(max) if included.len() > max => trim_to_largest(included, max),
        _ => (included, 0),
    };

    ProcessResult {
        diff: concat_diff(&kept),
        file_count: kept.len(),
        ignored_file_count,
        trimmed_file_count,
        insertions: kept.iter().map(|s| s.insertions).sum(),
        deletions: kept.iter().map(|s| s.deletions).sum(),
    }
}

/// Partition the filtered segments, in first-seen order, into
/// consecutive batches of at most `max_files` each. Nothing is
/// dropped; an absent or zero bound yields a single batch.
pub fn create_diff_batches(diff_text: &str, options: &DiffOptions) -> BatchResult {
    let (included, ignored_file_count) =
        filter_ignored(parse_diff_segments(diff_text), &options.ignore_patterns);

    let batch_size = normalize_bound(options.max_files).unwrap_or_else(|| included.len().max(1));

    let batches = included
        .chunks(batch_size)
        .map(|chunk| DiffBatch {
            diff: concat_diff(chunk),
            file_count: chunk.len(),
            insertions: chunk.iter().map(|s| s.insertions).sum(),
            deletions: chunk.iter().map(|s| s.deletions).sum(),
        })
        .collect();

    BatchResult {
        batches,
        total_file_count: included.len(),
        ignored_file_count,
        insertions: included.iter().map(|s| s.insertions).sum(),
        deletions: included.iter().map(|s| s.deletions).sum(),
    }
}

fn filter_ignored(segments: Vec<DiffSegment>, patterns: &[String]) -> (Vec<DiffSegment>, usize) {
    let matchers: Vec<GlobMatcher> = patterns
        .iter()
        .filter_map(|pattern| GlobMatcher::new(pattern))
        .collect();

    if matchers.is_empty() {
        return (segments, 0);
    }

    let mut included = Vec::with_capacity(segments.len());
    let mut ignored_count = 0;

    for segment in segments {
        if matchers.iter().any(|m| m.is_match(&segment.file_path)) {
            ignored_count += 1;
        } else {
            included.push(segment);
        }
    }

    (included, ignored_count)
}

/// Zero is treated as "no bound", matching absent.
fn normalize_bound(bound: Option<usize>) -> Option<usize> {
    bound.filter(|&n| n > 0)
}

/// Keep the `max` segments with the largest change size. The sort is
/// stable, so ties keep their relative discovery order, and the kept
/// set is re-emitted in discovery order rather than rank order.
fn trim_to_largest(segments: Vec<DiffSegment>, max: usize) -> (Vec<DiffSegment>, usize) {
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by(|&a, &b| segments[b].change_size.cmp(&segments[a].change_size));
    order.truncate(max);

    let keep: HashSet<usize> = order.into_iter().collect();
    let trimmed_count = segments.len() - keep.len();

    let kept = segments
        .into_iter()
        .enumerate()
        .filter(|(index, _)| keep.contains(index))
        .map(|(_, segment)| segment)
        .collect();

    (kept, trimmed_count)
}

fn concat_diff(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}
