//! Log sanitization utilities
//!
//! Keeps response bodies and access keys from being fully exposed in
//! debug/error logs.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of an access key kept visible.
const KEY_VISIBLE_PREFIX: usize = 4;

/// Truncate a string for safe logging, never splitting a UTF-8 character.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = (0..=TRUNCATE_LIMIT)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask an access key id, keeping a short prefix for identification.
///
/// `LTAI5tAbCdEf` -> `LTAI********`
pub fn mask_access_key(key: &str) -> String {
    let visible: String = key.chars().take(KEY_VISIBLE_PREFIX).collect();
    let hidden = key.chars().count().saturating_sub(KEY_VISIBLE_PREFIX);
    format!("{visible}{}", "*".repeat(hidden))
}
