//! Namespace tree construction from relative file paths.
//!
//! The tree mirrors directory nesting: each directory becomes a namespace
//! node keyed by its derived identifier, each file becomes a leaf holding
//! the forward-slash relative path to load. Children live in a `BTreeMap`,
//! so every traversal observes keys in ascending code-point order no matter
//! what order paths were inserted in.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{IndexGenError, Result};
use crate::ident::derive_identifier;

/// A namespace node: identifier to child node, ordered by key.
pub type Namespace = BTreeMap<String, Node>;

/// One entry in the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested namespace mirroring a directory.
    Namespace(Namespace),
    /// On-demand load of one file, identified by its forward-slash
    /// relative path (extension included).
    Leaf(String),
}

/// Inserts one relative file path into the tree.
///
/// Directory segments are walked in order, claiming a namespace node for
/// each derived identifier; the final segment is attached as a leaf under
/// its identifier with the extension stripped. When a directory identifier
/// lands on a key held by a leaf, the leaf is relocated to
/// `key + conflict_suffix` first; symmetrically, a leaf landing on a key
/// held by a namespace is attached under the suffixed key instead. A second
/// collision on the suffixed key is an error.
///
/// Re-inserting the same path is idempotent.
pub fn insert(root: &mut Namespace, relative: &Path, conflict_suffix: &str) -> Result<()> {
    let segments: Vec<String> = relative
        .iter()
        .map(|segment| segment.to_string_lossy().into_owned())
        .collect();
    let Some((filename, directories)) = segments.split_last() else {
        return Err(IndexGenError::EmptyPath);
    };

    // The load path keeps the extension; identifier derivation drops it.
    let load_path = segments.join("/");

    let mut parent = root;
    for directory in directories {
        parent = claim_namespace(parent, &derive_identifier(directory), conflict_suffix)?;
    }
    attach_leaf(
        parent,
        derive_identifier(file_stem(filename)),
        load_path,
        conflict_suffix,
    )
}

/// Strips the final extension from a filename segment.
fn file_stem(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}

/// Ensures `parent[key]` is a namespace node and returns it.
///
/// Absent keys get a fresh empty namespace; an existing namespace is left
/// untouched, so calling this on already-correct state is a no-op. A leaf
/// occupying the key is relocated to `key + conflict_suffix` before the
/// namespace is created; if that key is already taken the conflict cannot
/// be resolved and the insert fails.
fn claim_namespace<'a>(
    parent: &'a mut Namespace,
    key: &str,
    conflict_suffix: &str,
) -> Result<&'a mut Namespace> {
    if let Some(Node::Leaf(existing)) = parent.get(key) {
        let renamed = format!("{key}{conflict_suffix}");
        if parent.contains_key(&renamed) {
            return Err(IndexGenError::UnresolvedConflict {
                key: renamed,
                path: existing.clone(),
            });
        }
        if let Some(leaf) = parent.remove(key) {
            parent.insert(renamed, leaf);
        }
    }
    match parent
        .entry(key.to_owned())
        .or_insert_with(|| Node::Namespace(Namespace::new()))
    {
        Node::Namespace(children) => Ok(children),
        Node::Leaf(path) => Err(IndexGenError::UnresolvedConflict {
            key: key.to_owned(),
            path: path.clone(),
        }),
    }
}

/// Attaches a leaf under `key`, falling back to `key + conflict_suffix`
/// when a namespace already owns the key. Last write wins between leaves;
/// a namespace on the suffixed key as well leaves the conflict unresolvable.
fn attach_leaf(
    parent: &mut Namespace,
    key: String,
    load_path: String,
    conflict_suffix: &str,
) -> Result<()> {
    let key = match parent.get(&key) {
        Some(Node::Namespace(_)) => {
            let renamed = format!("{key}{conflict_suffix}");
            if let Some(Node::Namespace(_)) = parent.get(&renamed) {
                return Err(IndexGenError::UnresolvedConflict {
                    key: renamed,
                    path: load_path,
                });
            }
            renamed
        }
        _ => key,
    };
    parent.insert(key, Node::Leaf(load_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "Js";

    fn build(paths: &[&str]) -> Namespace {
        let mut root = Namespace::new();
        for path in paths {
            insert(&mut root, Path::new(path), SUFFIX).unwrap();
        }
        root
    }

    fn leaf(path: &str) -> Node {
        Node::Leaf(path.to_owned())
    }

    #[test]
    fn root_level_file_attaches_without_namespace() {
        let root = build(&["util.js"]);
        assert_eq!(root.get("util"), Some(&leaf("util.js")));
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn nested_file_creates_namespace_chain() {
        let root = build(&["search/results/account.table.js"]);
        let Some(Node::Namespace(search)) = root.get("search") else {
            panic!("expected namespace at 'search'");
        };
        let Some(Node::Namespace(results)) = search.get("results") else {
            panic!("expected namespace at 'results'");
        };
        assert_eq!(
            results.get("accountTable"),
            Some(&leaf("search/results/account.table.js"))
        );
    }

    #[test]
    fn leaf_displaced_by_namespace_moves_to_suffixed_key() {
        let root = build(&["overview.js", "overview/summary.js"]);
        assert_eq!(root.get("overviewJs"), Some(&leaf("overview.js")));
        let Some(Node::Namespace(overview)) = root.get("overview") else {
            panic!("expected namespace at 'overview'");
        };
        assert_eq!(overview.get("summary"), Some(&leaf("overview/summary.js")));
    }

    #[test]
    fn leaf_arriving_after_namespace_takes_suffixed_key() {
        let root = build(&["overview/summary.js", "overview.js"]);
        assert_eq!(root.get("overviewJs"), Some(&leaf("overview.js")));
        let Some(Node::Namespace(overview)) = root.get("overview") else {
            panic!("expected namespace at 'overview'");
        };
        assert_eq!(overview.get("summary"), Some(&leaf("overview/summary.js")));
    }

    #[test]
    fn insertion_order_does_not_change_the_tree() {
        let paths = [
            "search/account.page.js",
            "search/keyword.page.js",
            "search/results/account.table.js",
            "transactions.page.js",
            "overview.js",
            "overview/summary.js",
        ];
        let forward = build(&paths);
        let mut reversed = paths;
        reversed.reverse();
        let backward = build(&reversed);
        assert_eq!(forward, backward);
    }

    #[test]
    fn reinserting_the_same_path_is_idempotent() {
        let once = build(&["search/account.page.js"]);
        let twice = build(&["search/account.page.js", "search/account.page.js"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn later_file_with_same_identifier_wins() {
        let root = build(&["util.js", "util.mjs"]);
        assert_eq!(root.get("util"), Some(&leaf("util.mjs")));
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn displacement_onto_occupied_key_fails() {
        // overview.js.js claims "overviewJs", overview.js claims "overview";
        // the directory then needs "overview" but the fallback key is taken.
        let mut root = build(&["overview.js.js", "overview.js"]);
        let err = insert(&mut root, Path::new("overview/summary.js"), SUFFIX).unwrap_err();
        assert!(matches!(
            err,
            IndexGenError::UnresolvedConflict { key, .. } if key == "overviewJs"
        ));
    }

    #[test]
    fn leaf_fallback_onto_namespace_fails() {
        let mut root = build(&["overview/a.js", "overviewJs/b.js"]);
        let err = insert(&mut root, Path::new("overview.js"), SUFFIX).unwrap_err();
        assert!(matches!(
            err,
            IndexGenError::UnresolvedConflict { key, .. } if key == "overviewJs"
        ));
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut root = Namespace::new();
        let err = insert(&mut root, Path::new(""), SUFFIX).unwrap_err();
        assert!(matches!(err, IndexGenError::EmptyPath));
    }

    #[test]
    fn keys_iterate_in_ascending_order() {
        let root = build(&["zebra.js", "apple.js", "mango.js"]);
        let keys: Vec<_> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["apple", "mango", "zebra"]);
    }
}
