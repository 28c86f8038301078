//! Raw diff splitting and per-file segment accumulation

use super::types::DiffSegment;
use regex::Regex;
use std::collections::HashMap;

/// Parse raw unified-diff text into ordered, unique-by-path segments.
///
/// The input may be the naive concatenation of several independently
/// generated patches, so the same path can appear in more than one
/// `diff --git` section; later sections are merged into the first one
/// and the output keeps first-seen order. Sections whose header line
/// does not match the `a/<old> b/<new>` shape are dropped silently.
pub fn parse_diff_segments(diff_text: &str) -> Vec<DiffSegment> {
    if diff_text.trim().is_empty() {
        return Vec::new();
    }

    let header_re = Regex::new(r"^diff --git a/(.*?) b/(.*)$").unwrap();

    let mut segments: Vec<DiffSegment> = Vec::new();
    let mut index_by_path: HashMap<String, usize> = HashMap::new();

    for section in split_sections(diff_text) {
        let header_line = section.lines().next().unwrap_or("");
        let file_path = match extract_file_path(&header_re, header_line) {
            Some(path) => path,
            None => continue,
        };

        let (insertions, deletions) = count_changes(&section);

        match index_by_path.get(&file_path) {
            Some(&index) => merge_section(&mut segments[index], &section, insertions, deletions),
            None => {
                index_by_path.insert(file_path.clone(), segments.len());
                segments.push(DiffSegment {
                    file_path,
                    text: section,
                    insertions,
                    deletions,
                    change_size: insertions + deletions,
                });
            }
        }
    }

    segments
}

/// Split the raw text at line starts beginning a new `diff --git`
/// section. Content before the first header is dropped.
fn split_sections(diff_text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Option<String> = None;

    for line in diff_text.lines() {
        if line.starts_with("diff --git ") {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(line.to_string());
        } else if let Some(section) = current.as_mut() {
            section.push('\n');
            section.push_str(line);
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    for section in &mut sections {
        section.truncate(section.trim_end().len());
    }

    sections
}

/// Recover the display path from a `diff --git a/<old> b/<new>` line.
/// Prefers the new path, falling back to the old one for deletions.
fn extract_file_path(header_re: &Regex, header_line: &str) -> Option<String> {
    let captures = header_re.captures(header_line)?;
    let old_path = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let new_path = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    let path = if new_path.is_empty() { old_path } else { new_path };
    if path.is_empty() {
        return None;
    }
    Some(path.to_string())
}

/// Count `+`/`-` prefixed lines in a section, excluding the `+++ ` and
/// `--- ` file markers. Intentionally counts every such line in the
/// section, not only lines inside `@@` hunks.
fn count_changes(section: &str) -> (usize, usize) {
    let mut insertions = 0;
    let mut deletions = 0;

    for line in section.lines() {
        if line.starts_with("+++ ") || line.starts_with("--- ") {
            continue;
        }
        if line.starts_with('+') {
            insertions += 1;
        } else if line.starts_with('-') {
            deletions += 1;
        }
    }

    (insertions, deletions)
}

/// Fold a later section for an already-seen path into its segment,
/// without re-emitting the shared `diff --git`/`index`/`---`/`+++`
/// header block. Counts accumulate even when no text is appended.
fn merge_section(existing: &mut DiffSegment, section: &str, insertions: usize, deletions: usize) {
    if let Some(appendix) = extract_appendix(section) {
        existing.text.truncate(existing.text.trim_end().len());
        existing.text.push('\n');
        existing.text.push_str(&appendix);
    }

    existing.insertions += insertions;
    existing.deletions += deletions;
    existing.change_size += insertions + deletions;
}

/// Extract the part of a section worth appending to an existing
/// segment: the first `@@` hunk onward, else a binary payload onward,
/// else any metadata lines beyond the header block.
fn extract_appendix(section: &str) -> Option<String> {
    let lines: Vec<&str> = section.lines().collect();

    if let Some(pos) = lines.iter().position(|line| line.starts_with("@@")) {
        return non_empty(lines[pos..].join("\n"));
    }

    if let Some(pos) = lines
        .iter()
        .position(|line| line.starts_with("GIT binary patch") || line.starts_with("Binary files "))
    {
        return non_empty(lines[pos..].join("\n"));
    }

    let meta = lines
        .iter()
        .skip(1)
        .filter(|line| {
            !line.starts_with("diff --git ")
                && !line.starts_with("index ")
                && !line.starts_with("--- ")
                && !line.starts_with("+++ ")
        })
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    non_empty(meta)
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
