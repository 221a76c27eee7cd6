use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexGenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Path outside indexed root: {0}")]
    OutsideRoot(PathBuf),

    #[error("Empty relative path")]
    EmptyPath,

    #[error("Unresolvable name conflict at key '{key}' while indexing {path}")]
    UnresolvedConflict { key: String, path: String },

    #[error("Failed to write index to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IndexGenError>;
