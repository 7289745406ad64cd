#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # posixpath
//!
//! POSIX path string manipulation with `node:path` semantics.
//!
//! The functions in [`path`] decompose, recompose and join `/`-separated
//! path strings without ever touching the filesystem. They are pure and
//! total: any input, including the empty string, has a defined result.
//!
//! ## Core Types
//!
//! - [`path::PathRecord`]: the `{root, dir, base, name, ext}` decomposition
//! - [`registry::ModuleRegistry`]: name-keyed lookup of the path function group
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use posixpath::path;
//!
//! assert_eq!(path::join(["a", "b//"]), "a/b/");
//! assert_eq!(path::dirname("//root/dir//f1.txt"), "//root/dir/");
//! assert_eq!(path::extname("index.coffee.md"), ".md");
//!
//! let record = path::parse("b/c/file.ext");
//! assert_eq!(record.root, "b/");
//! assert_eq!(path::format(&record), "b/c/file.ext");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod registry;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::OutputFormat;
pub use path::{basename, dirname, extname, format, join, parse, PathRecord};
pub use registry::{Module, ModuleRegistry, PathModule};
