//! Lazy index module generation for directory trees.
//!
//! This crate scans a directory and emits a single generated CommonJS module
//! that re-exposes every qualifying file as a lazily-loaded named export:
//! - Nested directories become nested namespace objects
//! - Each file becomes a getter that defers its `require` until first access
//! - A directory and a file competing for one key coexist via a rename suffix
//! - Output key order is lexicographic at every level, so runs are
//!   byte-reproducible regardless of traversal order

pub mod config;
pub mod error;
pub mod generator;
pub mod ident;
pub mod render;
pub mod scan;
pub mod tree;

// Re-export main types
pub use config::{default_should_be_indexed, GeneratorConfig, IndexPredicate};
pub use error::{IndexGenError, Result};
pub use generator::{run, RunReport};
pub use ident::derive_identifier;
pub use tree::{Namespace, Node};
