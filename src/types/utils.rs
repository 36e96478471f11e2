//! Shared utility functions.

use std::fmt::Display;

/// Number of characters in a title, as counted for RST heading underlines.
///
/// RST measures titles in characters, not bytes, so `"Modèle"` needs six
/// underline glyphs even though it is seven bytes long.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Filter an iterator of Results, logging errors at debug level before discarding.
///
/// Use this instead of `.filter_map(|r| r.ok())` when you want visibility into
/// what errors are being discarded.
///
/// # Example
/// ```ignore
/// let entries: Vec<_> = fs::read_dir(dir)?
///     .filter_map(|r| log_filter_error(r, "reading directory entry"))
///     .collect();
/// ```
pub fn log_filter_error<T, E: Display>(result: Result<T, E>, context: &str) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!("{}: {}", context, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_ascii() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("A"), 1);
        assert_eq!(char_len("Statistics"), 10);
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!("Modèle".len(), 7);
        assert_eq!(char_len("Modèle"), 6);
    }

    #[test]
    fn test_log_filter_error() {
        let ok: Result<u8, String> = Ok(3);
        let err: Result<u8, String> = Err("boom".to_string());
        assert_eq!(log_filter_error(ok, "ctx"), Some(3));
        assert_eq!(log_filter_error(err, "ctx"), None);
    }
}
