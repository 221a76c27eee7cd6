//! Run configuration and its defaults.
//!
//! There is no process-wide mutable configuration: [`run`](crate::generator::run)
//! takes a [`GeneratorConfig`] by reference, and callers start from
//! [`GeneratorConfig::default`] and override only what they need.

use std::fmt;
use std::path::{Path, PathBuf};

/// Predicate deciding whether a candidate file path belongs in the index.
pub type IndexPredicate = Box<dyn Fn(&Path) -> bool + Send + Sync>;

/// Default output filename. Files with this name are also excluded from
/// indexing, so a generated index never indexes itself.
pub const DEFAULT_OUTPUT: &str = "index.js";

/// Default suffix appended to an identifier that loses its key to a namespace.
pub const DEFAULT_CONFLICT_SUFFIX: &str = "Js";

/// Default header placed in the generated file's block comment.
pub const DEFAULT_HEADER: &str = "Generated by indexgen. Every export loads its \
module on first access. Edit the source tree, not this file.";

/// Directory segment treated as vendored dependencies and never indexed.
const VENDORED_DIR: &str = "node_modules";

/// Configuration for one generation run.
pub struct GeneratorConfig {
    /// Root directory to scan.
    pub directory: PathBuf,
    /// Destination path for the generated module.
    pub output: PathBuf,
    /// Header text wrapped into the generated file's block comment.
    pub header: String,
    /// Suffix appended to a leaf identifier displaced by a namespace.
    pub conflict_suffix: String,
    /// Predicate deciding which files are indexed.
    pub should_be_indexed: IndexPredicate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            header: DEFAULT_HEADER.to_owned(),
            conflict_suffix: DEFAULT_CONFLICT_SUFFIX.to_owned(),
            should_be_indexed: Box::new(default_should_be_indexed),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration scanning `directory` with defaults for
    /// everything else.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the header text.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets the conflict suffix.
    pub fn with_conflict_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.conflict_suffix = suffix.into();
        self
    }

    /// Replaces the eligibility predicate.
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.should_be_indexed = Box::new(predicate);
        self
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("directory", &self.directory)
            .field("output", &self.output)
            .field("header", &self.header)
            .field("conflict_suffix", &self.conflict_suffix)
            .field("should_be_indexed", &"<predicate>")
            .finish()
    }
}

/// Default eligibility: `.js` files, excluding the default output filename
/// and anything under a vendored-dependencies directory.
pub fn default_should_be_indexed(path: &Path) -> bool {
    let is_js = path.extension().is_some_and(|ext| ext == "js");
    let is_output = path.file_name().is_some_and(|name| name == DEFAULT_OUTPUT);
    let vendored = path
        .components()
        .any(|component| component.as_os_str() == VENDORED_DIR);
    is_js && !is_output && !vendored
}
