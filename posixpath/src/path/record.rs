//! Structured path records.
//!
//! A [`PathRecord`] is the `{root, dir, base, name, ext}` decomposition of a
//! path. [`parse`] produces one from a string and [`format`] turns one back
//! into a string. The two are not strict inverses: trailing and duplicate
//! separators are lost by `parse`, and `format` only reads the fields it
//! needs according to a fixed precedence.

use serde::{Deserialize, Serialize};

use super::join::join;
use super::{SEP, SEP_STR};

/// The decomposition of a path into its parts.
///
/// Every field defaults to the empty string, so partial records can be built
/// with struct update syntax or deserialized from JSON with missing keys.
///
/// # Examples
///
/// ```
/// use posixpath::path::PathRecord;
///
/// let record = PathRecord {
///     dir: "/home/user".to_string(),
///     base: "notes.txt".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(record.to_path(), "/home/user/notes.txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PathRecord {
    /// Leading part of `dir` up to and including its first separator.
    pub root: String,
    /// Directory portion, without a trailing separator.
    pub dir: String,
    /// Final component (`name` + `ext`).
    pub base: String,
    /// Final component without its extension.
    pub name: String,
    /// Extension including its leading dot.
    pub ext: String,
}

impl PathRecord {
    /// Parse a path into a record. Equivalent to [`parse`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        parse(path)
    }

    /// Build a path from this record. Equivalent to [`format`].
    #[must_use]
    pub fn to_path(&self) -> String {
        format(self)
    }

    /// Returns `true` if every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
            && self.dir.is_empty()
            && self.base.is_empty()
            && self.name.is_empty()
            && self.ext.is_empty()
    }

    /// Returns `true` if the record describes an absolute path.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root == SEP_STR
    }
}

impl From<&str> for PathRecord {
    fn from(path: &str) -> Self {
        parse(path)
    }
}

/// Decompose a path into a [`PathRecord`].
///
/// # Examples
///
/// ```
/// use posixpath::path::parse;
///
/// let record = parse("b/c/file.ext");
/// assert_eq!(record.root, "b/");
/// assert_eq!(record.dir, "b/c");
/// assert_eq!(record.base, "file.ext");
/// assert_eq!(record.name, "file");
/// assert_eq!(record.ext, ".ext");
/// ```
#[must_use]
pub fn parse(path: &str) -> PathRecord {
    let mut record = PathRecord::default();
    if path.is_empty() {
        return record;
    }

    let (dir, base) = match path.rfind(SEP) {
        None => ("", path),
        Some(0) => (SEP_STR, &path[1..]),
        Some(idx) => (&path[..idx], &path[idx + 1..]),
    };

    // Any dot splits, so ".bashrc" has an empty name.
    let (name, ext) = match base.rfind('.') {
        None => (base, ""),
        Some(idx) => base.split_at(idx),
    };

    let root = match dir.find(SEP) {
        Some(idx) => &dir[..=idx],
        None => "",
    };

    record.root = root.to_string();
    record.dir = dir.to_string();
    record.base = base.to_string();
    record.name = name.to_string();
    record.ext = ext.to_string();
    record
}

/// Recompose a path from a [`PathRecord`].
///
/// The filename is `base` when it is non-empty, otherwise `name` followed by
/// `ext` (a dot is inserted if `ext` lacks one). The filename is then joined
/// onto `dir`, or onto `root` when `dir` is empty. `root` is ignored whenever
/// `dir` is set.
///
/// # Examples
///
/// ```
/// use posixpath::path::{format, PathRecord};
///
/// let record = PathRecord {
///     root: "/ignored".to_string(),
///     dir: "/home/user/dir".to_string(),
///     base: "file.txt".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(format(&record), "/home/user/dir/file.txt");
///
/// let record = PathRecord {
///     root: "/".to_string(),
///     name: "file".to_string(),
///     ext: "txt".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(format(&record), "/file.txt");
/// ```
#[must_use]
pub fn format(record: &PathRecord) -> String {
    let file = if record.base.is_empty() {
        let mut file = record.name.clone();
        if !record.ext.is_empty() {
            if !record.ext.starts_with('.') {
                file.push('.');
            }
            file.push_str(&record.ext);
        }
        file
    } else {
        record.base.clone()
    };

    if !record.dir.is_empty() {
        if !record.root.is_empty() && !record.dir.starts_with(&record.root) {
            log::trace!(
                "format: root {:?} ignored in favour of dir {:?}",
                record.root,
                record.dir
            );
        }
        join([record.dir.as_str(), file.as_str()])
    } else if !record.root.is_empty() {
        join([record.root.as_str(), file.as_str()])
    } else {
        file
    }
}
