//! Orchestration of one full generation run.

use std::fs;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::{IndexGenError, Result};
use crate::render;
use crate::scan;
use crate::tree::{self, Namespace};

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Where the generated module was written.
    pub output: PathBuf,
    /// Number of files indexed.
    pub indexed_files: usize,
}

/// Scans `config.directory`, builds the namespace tree, and writes the
/// generated module to `config.output` in a single attempt.
///
/// A scanned path outside the configured root is a precondition violation
/// and fails the run, as does an unresolvable name conflict or a failed
/// write. The success notice is logged only after the write lands.
pub fn run(config: &GeneratorConfig) -> Result<RunReport> {
    let root = config.directory.as_path();
    let candidates = scan::scan_directory(root, &config.should_be_indexed)?;

    let mut namespaces = Namespace::new();
    for candidate in &candidates {
        let relative = candidate
            .strip_prefix(root)
            .map_err(|_| IndexGenError::OutsideRoot(candidate.clone()))?;
        log::debug!("indexing {}", relative.display());
        tree::insert(&mut namespaces, relative, &config.conflict_suffix)?;
    }

    let text = render::render_module(&namespaces, &config.header);
    fs::write(&config.output, text).map_err(|source| IndexGenError::Write {
        path: config.output.clone(),
        source,
    })?;
    log::info!(
        "generated index of {} files at {}",
        candidates.len(),
        config.output.display()
    );

    Ok(RunReport {
        output: config.output.clone(),
        indexed_files: candidates.len(),
    })
}
