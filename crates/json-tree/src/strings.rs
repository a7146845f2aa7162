//! Decoding and encoding of JSON string escapes.

use crate::error::Error;

/// Decodes the raw bytes between the quotes of a JSON string literal into an
/// owned `String`. `base_offset` is the byte offset of `raw` within the
/// original input, used to report accurate error positions.
pub(crate) fn decode(raw: &str, base_offset: usize) -> Result<String, Error> {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x20 {
            return Err(Error::ControlCharacterInString {
                offset: base_offset + i,
            });
        }
        if b != b'\\' {
            let ch = raw[i..].chars().next().expect("valid utf-8 char boundary");
            out.push(ch);
            i += ch.len_utf8();
            continue;
        }

        i += 1;
        let escape_offset = base_offset + i - 1;
        let esc = *bytes.get(i).ok_or(Error::UnterminatedString {
            offset: escape_offset,
        })?;
        match esc {
            b'"' => {
                out.push('"');
                i += 1;
            }
            b'\\' => {
                out.push('\\');
                i += 1;
            }
            b'/' => {
                out.push('/');
                i += 1;
            }
            b'b' => {
                out.push('\u{08}');
                i += 1;
            }
            b'f' => {
                out.push('\u{0C}');
                i += 1;
            }
            b'n' => {
                out.push('\n');
                i += 1;
            }
            b'r' => {
                out.push('\r');
                i += 1;
            }
            b't' => {
                out.push('\t');
                i += 1;
            }
            b'u' => {
                i += 1;
                let cp = parse_hex4(bytes, i, base_offset)?;
                i += 4;
                if is_high_surrogate(cp) {
                    let pair_ok = bytes.get(i) == Some(&b'\\') && bytes.get(i + 1) == Some(&b'u');
                    if !pair_ok {
                        return Err(Error::LoneSurrogate {
                            offset: base_offset + i,
                        });
                    }
                    let low = parse_hex4(bytes, i + 2, base_offset)?;
                    if !is_low_surrogate(low) {
                        return Err(Error::LoneSurrogate {
                            offset: base_offset + i,
                        });
                    }
                    i += 6;
                    let combined = 0x10000 + (((cp - 0xD800) << 10) | (low - 0xDC00));
                    let ch = char::from_u32(combined).ok_or(Error::InvalidUnicodeEscape {
                        offset: base_offset + i,
                    })?;
                    out.push(ch);
                } else if is_low_surrogate(cp) {
                    return Err(Error::LoneSurrogate {
                        offset: base_offset + i,
                    });
                } else {
                    let ch = char::from_u32(cp).ok_or(Error::InvalidUnicodeEscape {
                        offset: base_offset + i,
                    })?;
                    out.push(ch);
                }
            }
            _ => {
                return Err(Error::InvalidEscape {
                    offset: escape_offset,
                });
            }
        }
    }

    Ok(out)
}

fn is_high_surrogate(cp: u32) -> bool {
    (0xD800..=0xDBFF).contains(&cp)
}

fn is_low_surrogate(cp: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&cp)
}

fn parse_hex4(bytes: &[u8], at: usize, base_offset: usize) -> Result<u32, Error> {
    let slice = bytes
        .get(at..at + 4)
        .ok_or(Error::InvalidUnicodeEscape {
            offset: base_offset + at,
        })?;
    let s = core::str::from_utf8(slice).map_err(|_| Error::InvalidUnicodeEscape {
        offset: base_offset + at,
    })?;
    u32::from_str_radix(s, 16).map_err(|_| Error::InvalidUnicodeEscape {
        offset: base_offset + at,
    })
}

/// Writes `s` as a quoted, escaped JSON string into `out`.
pub(crate) fn encode_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
}

/// Byte length of `s` once escaped and wrapped in quotes, as emitted by
/// [`encode_into`].
pub(crate) fn encoded_len(s: &str) -> usize {
    let body: usize = s
        .chars()
        .map(|ch| match ch {
            '"' | '\\' | '\u{08}' | '\u{0C}' | '\n' | '\r' | '\t' => 2,
            other => other.len_utf8(),
        })
        .sum();
    body + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_basic_escapes() {
        let s = decode(r#"he said \"hi\"\n"#, 0).unwrap();
        assert_eq!(s, "he said \"hi\"\n");
    }

    #[test]
    fn rejects_unescaped_control_character() {
        let err = decode("a\tb", 0).unwrap_err();
        assert!(matches!(err, Error::ControlCharacterInString { .. }));
    }

    #[test]
    fn decodes_bmp_unicode_escape() {
        let s = decode("a\\u006Corem", 0).unwrap();
        assert_eq!(s, "alorem");
    }

    #[test]
    fn decodes_surrogate_pair() {
        let s = decode("\\uD83D\\uDE00", 0).unwrap();
        assert_eq!(s.as_bytes(), [0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn rejects_lone_high_surrogate() {
        assert!(matches!(
            decode(r"\uD800", 0).unwrap_err(),
            Error::LoneSurrogate { .. }
        ));
    }

    #[test]
    fn rejects_lone_low_surrogate() {
        assert!(matches!(
            decode(r"\uDC00", 0).unwrap_err(),
            Error::LoneSurrogate { .. }
        ));
    }

    #[test]
    fn rejects_high_surrogate_not_followed_by_low() {
        assert!(matches!(
            decode(r"\uD800A", 0).unwrap_err(),
            Error::LoneSurrogate { .. }
        ));
    }

    #[test]
    fn rejects_unknown_escape() {
        assert!(matches!(
            decode(r"\x41", 0).unwrap_err(),
            Error::InvalidEscape { .. }
        ));
    }

    #[test]
    fn encode_escapes_quotes_and_backslashes() {
        let mut out = String::new();
        encode_into(&mut out, "he said \"hi\"\\bye");
        assert_eq!(out, r#""he said \"hi\"\\bye""#);
    }

    #[test]
    fn encoded_len_matches_encode_into_output() {
        let s = "tab\tnewline\nquote\"end";
        let mut out = String::new();
        encode_into(&mut out, s);
        assert_eq!(out.len(), encoded_len(s));
    }
}
