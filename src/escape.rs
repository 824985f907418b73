//! Byte-string escaping for quoted literals.
//!
//! | byte | emitted as |
//! |---|---|
//! | `"` `\` | `\"` `\\` |
//! | LF, CR, TAB | `\n` `\r` `\t` |
//! | NUL | `\000` |
//! | BEL, BS, FF, VT | `\a` `\b` `\f` `\v` |
//! | other bytes below `0x20` or from `0x7f` up | `\DDD`, three decimal digits |
//! | anything else | verbatim |
//!
//! ```rust
//! use serde_luat::escape::quote;
//!
//! assert_eq!(quote(b"a\"b\n"), r#""a\"b\n""#);
//! assert_eq!(quote(&[0xe9]), r#""\233""#);
//! ```

use crate::sink::Sink;

#[inline]
fn escape_for(byte: u8) -> Option<&'static str> {
    Some(match byte {
        b'"' => "\\\"",
        b'\\' => "\\\\",
        b'\n' => "\\n",
        b'\r' => "\\r",
        b'\t' => "\\t",
        b'\0' => "\\000",
        0x07 => "\\a",
        0x08 => "\\b",
        0x0c => "\\f",
        0x0b => "\\v",
        _ => return None,
    })
}

#[inline]
fn is_verbatim(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte) && byte != b'"' && byte != b'\\'
}

/// Writes `bytes` wrapped in double quotes, escaping as needed.
///
/// Verbatim runs are appended in one piece.
pub(crate) fn write_quoted(out: &mut Sink, bytes: &[u8]) {
    out.push_byte(b'"');
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if is_verbatim(byte) {
            continue;
        }
        if i > start {
            out.push_bytes(&bytes[start..i]);
        }
        match escape_for(byte) {
            Some(esc) => out.push_str(esc),
            None => write_decimal_escape(out, byte),
        }
        start = i + 1;
    }
    if bytes.len() > start {
        out.push_bytes(&bytes[start..]);
    }
    out.push_byte(b'"');
}

fn write_decimal_escape(out: &mut Sink, byte: u8) {
    out.push_byte(b'\\');
    out.push_byte(b'0' + byte / 100);
    out.push_byte(b'0' + byte / 10 % 10);
    out.push_byte(b'0' + byte % 10);
}

/// Returns `bytes` as a quoted, escaped string literal.
#[must_use]
pub fn quote(bytes: &[u8]) -> String {
    let mut out = Sink::with_capacity(bytes.len() + 2);
    write_quoted(&mut out, bytes);
    // Only ASCII is ever written.
    out.flatten().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_verbatim() {
        assert_eq!(quote(b"hello world"), "\"hello world\"");
        assert_eq!(quote(b""), "\"\"");
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(quote(b"\"\\\n\r\t"), r#""\"\\\n\r\t""#);
        assert_eq!(quote(b"\x07\x08\x0c\x0b"), r#""\a\b\f\v""#);
        assert_eq!(quote(b"\0"), r#""\000""#);
    }

    #[test]
    fn test_decimal_escapes() {
        assert_eq!(quote(&[0x01]), r#""\001""#);
        assert_eq!(quote(&[0x1b]), r#""\027""#);
        assert_eq!(quote(&[0x7f]), r#""\127""#);
        assert_eq!(quote(&[0xff]), r#""\255""#);
    }

    #[test]
    fn test_runs_around_escapes() {
        assert_eq!(quote(b"ab\ncd\x01ef"), r#""ab\ncd\001ef""#);
        // UTF-8 multibyte sequences are escaped byte by byte
        assert_eq!(quote("é".as_bytes()), r#""\195\169""#);
    }
}
