//! Address normalization and domain-safe token sanitizers.
//!
//! One equality policy for the whole pipeline: `normalize` is applied at the
//! source boundary and to every set read from the contact log, so union,
//! deduplication, and truncation all compare the same strings.

/// Canonical form of a candidate address: trimmed + ASCII lowercase.
pub fn normalize(addr: &str) -> String {
    addr.trim().to_ascii_lowercase()
}

/// Collapses a free-text token (company name, location) into a compact
/// domain-safe form: lowercase, alphanumerics only.
pub fn compact(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Hyphenated domain-safe form: lowercase, whitespace runs become a single
/// `-`, everything else non-alphanumeric is dropped.
pub fn hyphenate(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut pending_sep = false;
    for c in token.trim().chars() {
        if c.is_whitespace() {
            pending_sep = !out.is_empty();
        } else if c.is_ascii_alphanumeric() {
            if pending_sep {
                out.push('-');
                pending_sep = false;
            }
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}
