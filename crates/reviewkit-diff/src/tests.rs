//! Scenario tests across the parse → filter → select pipeline

use super::*;

/// Build one well-formed file section with the given change counts.
fn section(path: &str, insertions: usize, deletions: usize) -> String {
    let mut text = format!(
        "diff --git a/{path} b/{path}\nindex 1111111..2222222 100644\n--- a/{path}\n+++ b/{path}\n@@ -1,{} +1,{} @@\n",
        deletions, insertions
    );
    for i in 0..deletions {
        text.push_str(&format!("-old line {i}\n"));
    }
    for i in 0..insertions {
        text.push_str(&format!("+new line {i}\n"));
    }
    text
}

fn join(sections: &[String]) -> String {
    sections.concat()
}

#[test]
fn test_empty_input_yields_empty_result() {
    let options = DiffOptions::default();

    let processed = process_diff_for_review("", &options);
    assert_eq!(processed.file_count, 0);
    assert_eq!(processed.insertions, 0);
    assert_eq!(processed.deletions, 0);
    assert_eq!(processed.diff, "");

    let batched = create_diff_batches("", &options);
    assert!(batched.batches.is_empty());
    assert_eq!(batched.total_file_count, 0);
}

#[test]
fn test_duplicate_sections_count_as_one_file() {
    let raw = join(&[
        section("a.ts", 1, 1),
        section("b.ts", 2, 0),
        section("a.ts", 3, 0),
    ]);

    let result = process_diff_for_review(&raw, &DiffOptions::default());
    assert_eq!(result.file_count, 2);
    assert_eq!(result.insertions, 6);
    assert_eq!(result.deletions, 1);

    let segments = parse_diff_segments(&raw);
    assert_eq!(segments[0].file_path, "a.ts");
    assert_eq!(segments[0].change_size, 5);
    // merged segment carries both hunks
    assert_eq!(segments[0].text.matches("@@ ").count(), 2);
}

#[test]
fn test_trim_keeps_largest_in_discovery_order() {
    let raw = join(&[
        section("f1", 10, 0),
        section("f2", 50, 0),
        section("f3", 5, 0),
        section("f4", 30, 0),
        section("f5", 1, 0),
    ]);

    let options = DiffOptions {
        max_files: Some(3),
        ..Default::default()
    };
    let result = process_diff_for_review(&raw, &options);

    assert_eq!(result.file_count, 3);
    assert_eq!(result.trimmed_file_count, 2);
    assert_eq!(result.insertions, 90);

    // kept files appear in discovery order, not rank order
    let f1 = result.diff.find("b/f1").unwrap();
    let f2 = result.diff.find("b/f2").unwrap();
    let f4 = result.diff.find("b/f4").unwrap();
    assert!(f1 < f2 && f2 < f4);
    assert!(!result.diff.contains("b/f3"));
    assert!(!result.diff.contains("b/f5"));
}

#[test]
fn test_trim_ties_prefer_earlier_files() {
    let raw = join(&[
        section("first", 5, 0),
        section("second", 5, 0),
        section("third", 5, 0),
    ]);

    let options = DiffOptions {
        max_files: Some(2),
        ..Default::default()
    };
    let result = process_diff_for_review(&raw, &options);

    assert!(result.diff.contains("b/first"));
    assert!(result.diff.contains("b/second"));
    assert!(!result.diff.contains("b/third"));
}

#[test]
fn test_batches_partition_in_order() {
    let sections: Vec<String> = (0..7).map(|i| section(&format!("f{i}"), i + 1, 0)).collect();
    let raw = join(&sections);

    let options = DiffOptions {
        max_files: Some(3),
        ..Default::default()
    };
    let result = create_diff_batches(&raw, &options);

    assert_eq!(result.batches.len(), 3);
    assert_eq!(
        result.batches.iter().map(|b| b.file_count).collect::<Vec<_>>(),
        vec![3, 3, 1]
    );
    assert_eq!(result.total_file_count, 7);
    assert_eq!(result.insertions, 28);

    assert!(result.batches[0].diff.contains("b/f0"));
    assert!(result.batches[1].diff.contains("b/f3"));
    assert!(result.batches[2].diff.contains("b/f6"));
}

#[test]
fn test_absent_batch_size_yields_single_batch() {
    let raw = join(&[section("a", 1, 0), section("b", 1, 0)]);

    let result = create_diff_batches(&raw, &DiffOptions::default());
    assert_eq!(result.batches.len(), 1);
    assert_eq!(result.batches[0].file_count, 2);

    // zero normalizes the same way
    let zero = DiffOptions {
        max_files: Some(0),
        ..Default::default()
    };
    assert_eq!(create_diff_batches(&raw, &zero).batches.len(), 1);
}

#[test]
fn test_ignore_patterns_filter_segments() {
    let raw = join(&[section("node_modules/x.js", 4, 0), section("src/y.ts", 2, 0)]);

    let options = DiffOptions {
        ignore_patterns: vec!["node_modules/**".to_string()],
        ..Default::default()
    };

    let result = process_diff_for_review(&raw, &options);
    assert_eq!(result.ignored_file_count, 1);
    assert_eq!(result.file_count, 1);
    assert!(result.diff.contains("b/src/y.ts"));
    assert!(!result.diff.contains("node_modules"));
    assert_eq!(result.insertions, 2);

    let batched = create_diff_batches(&raw, &options);
    assert_eq!(batched.ignored_file_count, 1);
    assert_eq!(batched.total_file_count, 1);
}

#[test]
fn test_all_ignored_yields_zero_files() {
    let raw = section("yarn.lock", 100, 0);

    let options = DiffOptions {
        ignore_patterns: vec!["*.lock".to_string()],
        ..Default::default()
    };

    let result = process_diff_for_review(&raw, &options);
    assert_eq!(result.file_count, 0);
    assert_eq!(result.ignored_file_count, 1);
    assert_eq!(result.diff, "");

    let batched = create_diff_batches(&raw, &options);
    assert!(batched.batches.is_empty());
}

#[test]
fn test_count_conservation() {
    let raw = join(&[
        section("keep_big.rs", 20, 0),
        section("ignored.lock", 5, 0),
        section("keep_small.rs", 1, 0),
        section("keep_big.rs", 2, 0), // duplicate, merges into the first
        section("other.rs", 3, 0),
    ]);

    let options = DiffOptions {
        ignore_patterns: vec!["*.lock".to_string()],
        max_files: Some(2),
    };
    let result = process_diff_for_review(&raw, &options);

    // 4 distinct paths: kept + ignored + trimmed accounts for all
    assert_eq!(
        result.file_count + result.ignored_file_count + result.trimmed_file_count,
        4
    );
    assert_eq!(result.file_count, 2);
    assert_eq!(result.ignored_file_count, 1);
    assert_eq!(result.trimmed_file_count, 1);
}

#[test]
fn test_reparse_of_output_is_stable() {
    let raw = join(&[
        section("a.rs", 3, 1),
        section("b.rs", 2, 2),
        section("a.rs", 1, 0),
    ]);

    let first = process_diff_for_review(&raw, &DiffOptions::default());
    let second = process_diff_for_review(&first.diff, &DiffOptions::default());

    assert_eq!(second.file_count, first.file_count);
    assert_eq!(second.insertions, first.insertions);
    assert_eq!(second.deletions, first.deletions);
    assert_eq!(second.diff, first.diff);
}

#[test]
fn test_batch_counts_sum_to_totals() {
    let sections: Vec<String> = (0..5)
        .map(|i| section(&format!("f{i}"), 2 * i + 1, i))
        .collect();
    let raw = join(&sections);

    let options = DiffOptions {
        max_files: Some(2),
        ..Default::default()
    };
    let result = create_diff_batches(&raw, &options);

    let batch_files: usize = result.batches.iter().map(|b| b.file_count).sum();
    let batch_ins: usize = result.batches.iter().map(|b| b.insertions).sum();
    let batch_dels: usize = result.batches.iter().map(|b| b.deletions).sum();

    assert_eq!(batch_files, result.total_file_count);
    assert_eq!(batch_ins, result.insertions);
    assert_eq!(batch_dels, result.deletions);
}
