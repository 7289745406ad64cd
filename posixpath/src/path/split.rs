//! Last-separator and last-dot splitting.
//!
//! This module provides the three "look at the tail of the path" operations:
//! - [`basename`]: the final component, optionally minus a suffix
//! - [`dirname`]: everything before the final component
//! - [`extname`]: the extension of the final dot-delimited run
//!
//! All three are total: every input, including the empty string, maps to a
//! defined output. Separators and dots are ASCII, so byte indices returned by
//! `rfind` are always valid `char` boundaries.

use super::{CURRENT_DIR, SEP, SEP_STR};

/// Return the last component of a path.
///
/// Everything after the last separator is returned (the whole string when
/// there is no separator). When `suffix` is given and the component ends
/// with it, the suffix is stripped.
///
/// # Examples
///
/// ```
/// use posixpath::path::basename;
///
/// assert_eq!(basename("/path/f1.txt", None), "f1.txt");
/// assert_eq!(basename("f1.txt.toRemove", Some(".toRemove")), "f1.txt");
/// assert_eq!(basename("", None), "");
/// ```
#[must_use]
pub fn basename(path: &str, suffix: Option<&str>) -> String {
    if path.is_empty() {
        return String::new();
    }

    let component = match path.rfind(SEP) {
        Some(idx) => &path[idx + 1..],
        None => path,
    };

    match suffix {
        Some(suffix) => component
            .strip_suffix(suffix)
            .unwrap_or(component)
            .to_string(),
        None => component.to_string(),
    }
}

/// Return the directory portion of a path.
///
/// Exactly one trailing separator is ignored before searching for the last
/// separator, so `"a/b///"` still yields `"a/b/"`. Leading duplicate
/// separators are kept as written.
///
/// # Examples
///
/// ```
/// use posixpath::path::dirname;
///
/// assert_eq!(dirname("/root/dir/f1.txt"), "/root/dir");
/// assert_eq!(dirname("/rel/dir/"), "/rel");
/// assert_eq!(dirname("//root/dir//f1.txt"), "//root/dir/");
/// assert_eq!(dirname("noDir"), ".");
/// assert_eq!(dirname("/"), "/");
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }

    let trimmed = match path.strip_suffix(SEP) {
        Some("") => return SEP_STR.to_string(),
        Some(rest) => rest,
        None => path,
    };

    match trimmed.rfind(SEP) {
        None => CURRENT_DIR.to_string(),
        Some(0) => SEP_STR.to_string(),
        Some(idx) => trimmed[..idx].to_string(),
    }
}

/// Return the extension of a path, including its leading dot.
///
/// The last dot anywhere in the string starts the extension. A dot in first
/// position (`".profile"`) does not count as an extension.
///
/// # Examples
///
/// ```
/// use posixpath::path::extname;
///
/// assert_eq!(extname("index.coffee.md"), ".md");
/// assert_eq!(extname("index."), ".");
/// assert_eq!(extname(".index"), "");
/// assert_eq!(extname("index"), "");
/// ```
#[must_use]
pub fn extname(path: &str) -> String {
    match path.rfind('.') {
        None | Some(0) => String::new(),
        Some(idx) => path[idx..].to_string(),
    }
}
