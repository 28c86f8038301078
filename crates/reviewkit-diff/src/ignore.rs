//! Glob-based ignore pattern matching

use regex::Regex;

/// One compiled ignore pattern, matched against candidate file paths.
///
/// Patterns without a `/` match the basename only (`*.lock` ignores a
/// lockfile at any depth). Patterns with a `/` match the whole path; a
/// leading `/` anchors them to the path start, otherwise they may also
/// align right after any separator. Matches always cover the entire
/// candidate string, never a substring.
#[derive(Debug)]
pub struct GlobMatcher {
    regex: Regex,
    basename_only: bool,
}

impl GlobMatcher {
    /// Compile a glob pattern. Returns `None` for patterns that are
    /// empty after trimming.
    pub fn new(pattern: &str) -> Option<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return None;
        }

        let anchored = pattern.starts_with('/');
        let normalized = pattern.strip_prefix('/').unwrap_or(pattern);

        if !normalized.contains('/') {
            return Some(GlobMatcher {
                regex: glob_to_regex(normalized, true)?,
                basename_only: true,
            });
        }

        Some(GlobMatcher {
            regex: glob_to_regex(normalized, anchored)?,
            basename_only: false,
        })
    }

    pub fn is_match(&self, file_path: &str) -> bool {
        if self.basename_only {
            let basename = file_path.rsplit('/').next().unwrap_or(file_path);
            return self.regex.is_match(basename);
        }
        self.regex.is_match(file_path)
    }
}

/// Translate a glob into an anchored regex: `**` crosses separators,
/// `*` and `?` do not, everything else is literal.
fn glob_to_regex(glob: &str, anchored_start: bool) -> Option<Regex> {
    let mut source = String::from(if anchored_start { "^" } else { "(?:^|.*/)" });

    let mut chars = glob.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    source.push_str(".*");
                } else {
                    source.push_str("[^/]*");
                }
            }
            '?' => source.push_str("[^/]"),
            _ => source.push_str(&regex::escape(&ch.to_string())),
        }
    }

    source.push('$');
    Regex::new(&source).ok()
}
