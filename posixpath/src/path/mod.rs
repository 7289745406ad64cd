//! POSIX path string manipulation.
//!
//! This module implements the `node:path` style API over plain `&str`
//! values. Nothing here touches the filesystem: every function is a pure,
//! total mapping from its input strings to a freshly allocated result.
//!
//! # Operations
//!
//! - [`basename`], [`dirname`], [`extname`]: split at the last separator or dot
//! - [`join`]: concatenate segments, canonicalizing only the outer separators
//! - [`parse`]: decompose a path into a [`PathRecord`]
//! - [`format`]: rebuild a path from a [`PathRecord`]
//!
//! Only `/` is recognized as a separator. `.` and `..` segments are kept
//! verbatim; they are never resolved.
//!
//! # Examples
//!
//! ```
//! use posixpath::path::{self, PathRecord};
//!
//! assert_eq!(path::join(["/srv", "www/", "/index.html"]), "/srv/www/index.html");
//! assert_eq!(path::dirname("/srv/www/index.html"), "/srv/www");
//! assert_eq!(path::basename("/srv/www/index.html", Some(".html")), "index");
//! assert_eq!(path::extname("index.html"), ".html");
//!
//! let record = path::parse("/srv/www/index.html");
//! assert_eq!(record.name, "index");
//! assert_eq!(path::format(&record), "/srv/www/index.html");
//! ```

mod join;
mod record;
mod split;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use join::join;
pub use record::{format, parse, PathRecord};
pub use split::{basename, dirname, extname};

/// Path segment separator.
pub const SEP: char = '/';

/// [`SEP`] as a string slice.
pub const SEP_STR: &str = "/";

/// Separator used by callers to split `PATH`-style lists.
pub const DELIMITER: char = ':';

/// [`DELIMITER`] as a string slice.
pub const DELIMITER_STR: &str = ":";

/// Result of operations that have no directory to report.
pub(crate) const CURRENT_DIR: &str = ".";
