//! String formatting utilities for UI rendering.

use solid_core::Product;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// One-line product summary, e.g. "Apple (Green, Small)".
pub fn product_line(product: &Product) -> String {
    format!(
        "{} ({}, {})",
        product.name(),
        product.color().as_str(),
        product.size().as_str()
    )
}
