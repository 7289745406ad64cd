//! Segment joining.
//!
//! Joining happens in two phases. Segments are first concatenated with at
//! most one separator inserted between neighbours, then the outer boundaries
//! of the result are canonicalized:
//!
//! 1. A leading run of separators (`"//a"`) collapses to a single one.
//! 2. If the last non-empty segment ended with a separator, the trailing run
//!    of separators collapses to a single one.
//!
//! Separators inside a segment (`"a//b"`) are never touched.

use super::{CURRENT_DIR, SEP};

/// Join path segments into a single path.
///
/// Empty segments are skipped. The result is never empty: joining nothing,
/// or only empty segments, yields `"."`.
///
/// # Examples
///
/// ```
/// use posixpath::path::join;
///
/// assert_eq!(join(["a", "b"]), "a/b");
/// assert_eq!(join(["/a", "", "/b/"]), "/a/b/");
/// assert_eq!(join(["/", "//", "a"]), "/a");
/// assert_eq!(join(["a", "b//"]), "a/b/");
/// assert_eq!(join(Vec::<&str>::new()), ".");
/// ```
#[must_use]
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    let mut ends_with_sep = false;

    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }

        if joined.is_empty() {
            joined.push_str(segment);
        } else if ends_with_sep {
            joined.push_str(segment.strip_prefix(SEP).unwrap_or(segment));
        } else {
            if !segment.starts_with(SEP) {
                joined.push(SEP);
            }
            joined.push_str(segment);
        }

        ends_with_sep = segment.ends_with(SEP);
    }

    if joined.is_empty() {
        return CURRENT_DIR.to_string();
    }

    collapse_leading(&mut joined);
    if ends_with_sep {
        collapse_trailing(&mut joined);
    }

    joined
}

/// Reduce a leading run of two or more separators to one.
fn collapse_leading(path: &mut String) {
    let run = path.len() - path.trim_start_matches(SEP).len();
    if run > 1 {
        path.drain(..run - 1);
    }
}

/// Reduce the trailing run of separators to one.
///
/// Callers guarantee the path ends with a separator.
fn collapse_trailing(path: &mut String) {
    let keep = path.trim_end_matches(SEP).len() + 1;
    path.truncate(keep);
}
