//! Identifier derivation from path segments.

/// Derives a namespace-safe identifier from a path segment.
///
/// Every run of non-alphanumeric characters collapses into a single word
/// boundary: the first emitted character is lowercased, the first character
/// after each boundary is uppercased, and everything else passes through
/// unchanged. `"keyword.table"` becomes `"keywordTable"`.
pub fn derive_identifier(segment: &str) -> String {
    let mut identifier = String::with_capacity(segment.len());
    let mut at_boundary = false;
    for ch in segment.chars() {
        if !ch.is_alphanumeric() {
            at_boundary = true;
            continue;
        }
        if identifier.is_empty() {
            identifier.extend(ch.to_lowercase());
        } else if at_boundary {
            identifier.extend(ch.to_uppercase());
        } else {
            identifier.push(ch);
        }
        at_boundary = false;
    }
    identifier
}
