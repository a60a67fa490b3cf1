//! Common display utilities and helpers

/// Longest description shown in listings
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// Keep the first `max_chars` characters and mark the cut with `...`
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
    }
}

pub fn availability(status: bool) -> &'static str {
    if status { "available" } else { "unavailable" }
}
