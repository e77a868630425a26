//! UTF-8 text conversion and key-building helpers.
//!
//! Text has no length prefix or terminator; its extent is carried by the
//! caller's `(offset, length)` pair.

use crate::codec::layout;
use crate::internal::error::Result;

/// The character after a colon (`':'`); used for stop key generation.
pub const CHARACTER_AFTER_COLON: char = ';';

/// Converts a string to its UTF-8 bytes.
pub fn text_to_bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Decodes presumed UTF-8 bytes. Absent input stays absent.
pub fn bytes_to_text(bytes: Option<&[u8]>) -> Option<String> {
    bytes.map(|b| String::from_utf8_lossy(b).into_owned())
}

/// Decodes `length` UTF-8 bytes starting at `offset`.
///
/// Absent input yields `Ok(None)`. A zero-length range yields an empty string
/// without looking at the offset. Invalid sequences are replaced with U+FFFD.
pub fn bytes_to_text_range(
    bytes: Option<&[u8]>,
    offset: usize,
    length: usize,
) -> Result<Option<String>> {
    let Some(bytes) = bytes else {
        return Ok(None);
    };
    if length == 0 {
        return Ok(Some(String::new()));
    }
    let src = layout::check_bounds("text", bytes, offset, length)?;
    Ok(Some(String::from_utf8_lossy(src).into_owned()))
}

/// Decodes both byte arrays as UTF-8 and joins them with `separator`.
pub fn join(first: &[u8], separator: &str, second: &[u8]) -> String {
    let first = String::from_utf8_lossy(first);
    let second = String::from_utf8_lossy(second);
    let mut joined = String::with_capacity(first.len() + separator.len() + second.len());
    joined.push_str(&first);
    joined.push_str(separator);
    joined.push_str(&second);
    joined
}

/// Returns the character immediately after `c` in code-point order.
///
/// Surrogate code points are not characters, so the character after
/// `U+D7FF` is `U+E000`. Returns `None` for `char::MAX`.
///
/// Used to build the exclusive upper bound of a prefix range scan: every key
/// starting with `"user:"` sorts below `"user;"`.
pub fn next_after(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        _ => char::from_u32(c as u32 + 1),
    }
}

/// Builds the exclusive stop key for a scan over every key that starts with
/// `prefix` followed by `boundary`.
pub fn stop_key(prefix: &str, boundary: char) -> Option<String> {
    let next = next_after(boundary)?;
    let mut key = String::with_capacity(prefix.len() + next.len_utf8());
    key.push_str(prefix);
    key.push(next);
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::error::{Error, LayoutError};

    #[test]
    fn test_text_round_trip() {
        let original = "a á 日本";
        let bytes = text_to_bytes(original);
        assert_eq!(bytes.len(), 11);
        assert_eq!(bytes_to_text(Some(bytes.as_slice())).as_deref(), Some(original));
        assert_eq!(
            bytes_to_text_range(Some(bytes.as_slice()), 0, bytes.len()).unwrap().as_deref(),
            Some(original)
        );
        // "á" alone: bytes 2..4
        assert_eq!(
            bytes_to_text_range(Some(bytes.as_slice()), 2, 2).unwrap().as_deref(),
            Some("á")
        );
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(bytes_to_text(None), None);
        assert_eq!(bytes_to_text_range(None, 5, 5).unwrap(), None);
        assert_eq!(bytes_to_text(Some(&[][..])).as_deref(), Some(""));

        // Zero length never validates the offset.
        let bytes = text_to_bytes("abc");
        assert_eq!(
            bytes_to_text_range(Some(bytes.as_slice()), 99, 0).unwrap().as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_text_range_errors() {
        let bytes = text_to_bytes("abc");
        assert_eq!(
            bytes_to_text_range(Some(bytes.as_slice()), 2, 2).unwrap_err(),
            Error::InvalidLayout(LayoutError::OutOfBounds {
                offset: 2,
                length: 2,
                capacity: 3
            })
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let decoded = bytes_to_text(Some(&[b'a', 0xff, b'b'][..])).unwrap();
        assert_eq!(decoded, "a\u{FFFD}b");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&text_to_bytes("a"), ":", &text_to_bytes("b")), "a:b");
        assert_eq!(join(b"", "-", b"x"), "-x");
        assert_eq!(join("日".as_bytes(), "::", "本".as_bytes()), "日::本");
    }

    #[test]
    fn test_next_after() {
        assert_eq!(next_after(':'), Some(CHARACTER_AFTER_COLON));
        assert_eq!(next_after('a'), Some('b'));
        assert_eq!(next_after('\u{D7FF}'), Some('\u{E000}'));
        assert_eq!(next_after('\u{FFFF}'), Some('\u{10000}'));
        assert_eq!(next_after(char::MAX), None);
    }

    #[test]
    fn test_stop_key() {
        assert_eq!(stop_key("user:", ':').as_deref(), Some("user:;"));
        assert_eq!(stop_key("", '/').as_deref(), Some("0"));
        assert_eq!(stop_key("k", char::MAX), None);

        let start = "user:";
        let stop = stop_key("user", ':').unwrap();
        assert!(start < stop.as_str());
        assert!("user:zzz" < stop.as_str());
        assert!("user;" >= stop.as_str());
    }
}
