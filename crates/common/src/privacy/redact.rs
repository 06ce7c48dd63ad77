//! Secret masking for log output

/// Default number of trailing characters left visible
pub const DEFAULT_VISIBLE_TAIL: usize = 4;

/// Mask a secret for logging, keeping only the last `keep_last` characters.
///
/// Missing or empty values render as `<empty>`; values no longer than the
/// visible tail are fully masked.
///
/// # Examples
///
/// ```
/// use rewatch_common::mask_secret;
///
/// assert_eq!(mask_secret(Some("123456:ABCDEF"), 4), "<masked>...CDEF");
/// assert_eq!(mask_secret(Some("abc"), 4), "<masked>");
/// assert_eq!(mask_secret(None, 4), "<empty>");
/// ```
pub fn mask_secret(value: Option<&str>, keep_last: usize) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return "<empty>".to_string();
    };

    let char_count = value.chars().count();
    if char_count <= keep_last {
        return "<masked>".to_string();
    }

    let tail: String = value.chars().skip(char_count - keep_last).collect();
    format!("<masked>...{tail}")
}
