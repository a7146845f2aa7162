//! Pre-pass that blanks out `/* ... */` and `// ... \n` comments, preserving
//! byte offsets so error positions reported by the parser stay stable whether
//! or not comments were present.

/// Replaces the bodies of C/C++-style comments with ASCII spaces, respecting
/// string literals. If a `/*` is never closed, the remainder of the buffer is
/// left unchanged and stripping stops there.
pub(crate) fn strip_comments(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = bytes.to_vec();
    let mut i = 0usize;
    let mut in_string = false;
    let mut escape = false;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            let start = i;
            i += 2;
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            out[start..i].fill(b' ');
            continue;
        }

        if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            let start = i;
            i += 2;
            let mut closed = false;
            while i + 1 < bytes.len() {
                if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                    i += 2;
                    closed = true;
                    break;
                }
                i += 1;
            }
            if closed {
                out[start..i].fill(b' ');
            } else {
                // Unterminated block comment: leave the remainder untouched.
                break;
            }
            continue;
        }

        i += 1;
    }

    String::from_utf8(out).expect("comment stripping only substitutes ASCII spaces")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_comment_preserving_offsets() {
        let input = "{\"a\":1} // trailing\n";
        let stripped = strip_comments(input);
        assert_eq!(stripped.len(), input.len());
        assert_eq!(stripped, "{\"a\":1}             \n");
    }

    #[test]
    fn strips_block_comment_preserving_offsets() {
        let input = "{/* c */\"a\":1}";
        let stripped = strip_comments(input);
        assert_eq!(stripped.len(), input.len());
        assert_eq!(stripped, "{       \"a\":1}");
    }

    #[test]
    fn ignores_comment_openers_inside_strings() {
        let input = r#"{"a":"// not a comment"}"#;
        let stripped = strip_comments(input);
        assert_eq!(stripped, input);
    }

    #[test]
    fn unterminated_block_comment_leaves_remainder_unchanged() {
        let input = "{\"a\":1} /* never closed";
        let stripped = strip_comments(input);
        assert_eq!(stripped, input);
    }

    #[test]
    fn escaped_quote_inside_string_does_not_end_string() {
        let input = r#"{"a":"he said \" /* still string */ end"}"#;
        let stripped = strip_comments(input);
        assert_eq!(stripped, input);
    }
}
