//! Name-keyed module lookup.
//!
//! A host resolves function groups by name (`"path"`, `"node:path"`) rather
//! than by linking against them directly. Lookup returns `None` for names
//! nobody registered, so a host can decide whether a missing module is
//! fatal.
//!
//! # Examples
//!
//! ```
//! use posixpath::registry;
//!
//! let path = registry::global().lookup("node:path").and_then(|m| m.as_path()).unwrap();
//! assert_eq!((path.join)(&["a", "b"]), "a/b");
//! assert!(registry::global().lookup("node:fs").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::path::{self, PathRecord};

/// The path function group, as exposed to hosts.
#[derive(Clone, Copy)]
pub struct PathModule {
    /// See [`path::basename`].
    pub basename: fn(&str, Option<&str>) -> String,
    /// See [`path::dirname`].
    pub dirname: fn(&str) -> String,
    /// See [`path::extname`].
    pub extname: fn(&str) -> String,
    /// See [`path::join`].
    pub join: fn(&[&str]) -> String,
    /// See [`path::parse`].
    pub parse: fn(&str) -> PathRecord,
    /// See [`path::format`].
    pub format: fn(&PathRecord) -> String,
    /// Segment separator.
    pub sep: char,
    /// List delimiter.
    pub delimiter: char,
}

impl fmt::Debug for PathModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathModule")
            .field("sep", &self.sep)
            .field("delimiter", &self.delimiter)
            .finish_non_exhaustive()
    }
}

fn join_slice(segments: &[&str]) -> String {
    path::join(segments)
}

impl PathModule {
    /// The function group backed by [`crate::path`].
    pub const BUILTIN: Self = Self {
        basename: path::basename,
        dirname: path::dirname,
        extname: path::extname,
        join: join_slice,
        parse: path::parse,
        format: path::format,
        sep: path::SEP,
        delimiter: path::DELIMITER,
    };
}

/// A registered function group.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum Module {
    /// Path string manipulation.
    Path(PathModule),
}

impl Module {
    /// Returns the path group, if this is one.
    #[must_use]
    pub const fn as_path(&self) -> Option<&PathModule> {
        match self {
            Self::Path(module) => Some(module),
        }
    }
}

/// Aliases the builtin path group is registered under.
pub const PATH_ALIASES: [&str; 2] = ["path", "node:path"];

/// Maps module names to function groups.
#[derive(Debug, Default, Clone)]
pub struct ModuleRegistry {
    modules: HashMap<String, Module>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the builtin modules.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(&PATH_ALIASES, Module::Path(PathModule::BUILTIN));
        registry
    }

    /// Register `module` under every name in `aliases`.
    ///
    /// A name that is already taken is rebound to the new module.
    pub fn register(&mut self, aliases: &[&str], module: Module) {
        for alias in aliases {
            if self.modules.insert((*alias).to_string(), module).is_some() {
                log::debug!("module '{alias}' re-registered");
            }
        }
    }

    /// Look up a module by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Module> {
        let module = self.modules.get(name);
        if module.is_none() {
            log::debug!("module '{name}' not found");
        }
        module
    }

    /// Look up a module by name, failing if it is not registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownModule`] if no module has that name.
    pub fn require(&self, name: &str) -> Result<&Module> {
        self.lookup(name).ok_or_else(|| Error::UnknownModule {
            name: name.to_string(),
        })
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The process-wide registry of builtin modules.
///
/// Built on first use and read-only afterwards.
pub fn global() -> &'static ModuleRegistry {
    static GLOBAL: OnceLock<ModuleRegistry> = OnceLock::new();
    GLOBAL.get_or_init(ModuleRegistry::with_builtins)
}
