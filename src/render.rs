//! Rendering the namespace tree as CommonJS module text.
//!
//! Namespaces become nested object literals; leaves become getters, so the
//! `require` behind each export runs on first property access instead of at
//! module load. `BTreeMap` iteration keeps the output byte-identical for a
//! given set of paths.

use crate::tree::{Namespace, Node};

const INDENT: &str = "  ";
const HEADER_WIDTH: usize = 76;

/// Renders the full generated module: block comment header followed by
/// `module.exports = { ... };`.
pub fn render_module(root: &Namespace, header: &str) -> String {
    let mut out = String::new();
    render_header(&mut out, header);
    out.push_str("module.exports = {\n");
    render_namespace(&mut out, root, 1);
    out.push_str("};\n");
    out
}

/// Renders one namespace level at the given indentation depth.
fn render_namespace(out: &mut String, node: &Namespace, depth: usize) {
    let pad = INDENT.repeat(depth);
    for (key, child) in node {
        match child {
            Node::Namespace(children) => {
                out.push_str(&format!("{pad}{key}: {{\n"));
                render_namespace(out, children, depth + 1);
                out.push_str(&format!("{pad}}},\n"));
            }
            Node::Leaf(path) => {
                out.push_str(&format!(
                    "{pad}get {key}() {{ return require('./{path}'); }},\n"
                ));
            }
        }
    }
}

fn render_header(out: &mut String, header: &str) {
    out.push_str("/**\n");
    for line in wrap_words(header, HEADER_WIDTH) {
        out.push_str(&format!(" * {line}\n"));
    }
    out.push_str(" */\n");
}

/// Greedy word wrap; whitespace runs in the input collapse to single spaces.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
