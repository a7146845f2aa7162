//! Recursive-descent JSON parser over a byte cursor.

use indexmap::IndexMap;

use crate::comments::strip_comments;
use crate::error::Error;
use crate::limits;
use crate::strings;
use crate::value::Value;

struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while let Some(b) = self.peek() {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn parse_value(&mut self, depth: u32) -> Result<Value, Error> {
        self.skip_ws();
        match self.peek() {
            Some(b'{') => self.parse_object(depth),
            Some(b'[') => self.parse_array(depth),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b't') => self.parse_literal("true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal("false", Value::Boolean(false)),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b'-') | Some(b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(Error::UnexpectedCharacter { offset: self.pos }),
            None => Err(Error::UnexpectedEof),
        }
    }

    fn parse_object(&mut self, depth: u32) -> Result<Value, Error> {
        if depth > limits::MAX_NESTING {
            return Err(Error::NestingTooDeep {
                max: limits::MAX_NESTING,
            });
        }
        self.pos += 1; // '{'
        let mut map = IndexMap::new();
        self.skip_ws();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_ws();
            if self.peek() != Some(b'"') {
                return Err(Error::UnexpectedCharacter { offset: self.pos });
            }
            let key_offset = self.pos;
            let key = self.parse_string()?;
            self.skip_ws();
            if self.peek() != Some(b':') {
                return Err(Error::UnexpectedCharacter { offset: self.pos });
            }
            self.pos += 1;
            let value = self.parse_value(depth + 1)?;
            if map.contains_key(&key) {
                return Err(Error::DuplicateKey {
                    key,
                    offset: key_offset,
                });
            }
            if map.len() >= limits::OBJECT_MAX_CAPACITY {
                return Err(Error::ObjectCapacityExceeded {
                    max: limits::OBJECT_MAX_CAPACITY,
                });
            }
            map.insert(key, value);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(Error::UnexpectedCharacter { offset: self.pos }),
            }
        }
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self, depth: u32) -> Result<Value, Error> {
        if depth > limits::MAX_NESTING {
            return Err(Error::NestingTooDeep {
                max: limits::MAX_NESTING,
            });
        }
        self.pos += 1; // '['
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(items));
        }
        loop {
            let value = self.parse_value(depth + 1)?;
            if items.len() >= limits::ARRAY_MAX_CAPACITY {
                return Err(Error::ArrayCapacityExceeded {
                    max: limits::ARRAY_MAX_CAPACITY,
                });
            }
            items.push(value);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(Error::UnexpectedCharacter { offset: self.pos }),
            }
        }
        Ok(Value::Array(items))
    }

    fn parse_string(&mut self) -> Result<String, Error> {
        let start = self.pos;
        self.pos += 1; // opening quote
        let content_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(Error::UnterminatedString { offset: start }),
                Some(b'"') => break,
                Some(b'\\') => {
                    self.pos += 1;
                    if self.peek().is_none() {
                        return Err(Error::UnterminatedString { offset: start });
                    }
                    self.pos += 1;
                }
                Some(_) => {
                    let ch = self.input[self.pos..]
                        .chars()
                        .next()
                        .expect("valid utf-8 char boundary");
                    self.pos += ch.len_utf8();
                }
            }
        }
        let raw = &self.input[content_start..self.pos];
        self.pos += 1; // closing quote
        strings::decode(raw, content_start)
    }

    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value, Error> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(Error::UnexpectedCharacter { offset: self.pos })
        }
    }

    fn parse_number(&mut self) -> Result<Value, Error> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let int_start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == int_start {
            return Err(Error::InvalidNumber { offset: start });
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            let frac_start = self.pos;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            if self.pos == frac_start {
                return Err(Error::InvalidNumber { offset: start });
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            let exp_start = self.pos;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
            if self.pos == exp_start {
                return Err(Error::InvalidNumber { offset: start });
            }
        }

        let span = &self.input[start..self.pos];
        let digits = span.strip_prefix('-').unwrap_or(span);
        let leading_zero_decimal =
            digits.len() >= 2 && digits.as_bytes()[0] == b'0' && digits.as_bytes()[1] != b'.';
        if leading_zero_decimal {
            return Err(Error::InvalidNumber { offset: start });
        }

        let value: f64 = span
            .parse()
            .map_err(|_| Error::InvalidNumber { offset: start })?;
        if !value.is_finite() {
            return Err(Error::InvalidNumber { offset: start });
        }
        Ok(Value::Number(value))
    }
}

fn parse_impl(input: &str, allow_comments: bool) -> Result<Value, Error> {
    let _span = tracing::trace_span!("json::parse", comments = allow_comments).entered();

    let stripped;
    let text = if allow_comments {
        stripped = strip_comments(input);
        stripped.as_str()
    } else {
        input
    };

    let mut cursor = Cursor::new(text);
    cursor.skip_ws();
    match cursor.peek() {
        Some(b'{') | Some(b'[') => {}
        _ => {
            tracing::debug!(offset = cursor.pos, "expected '{{' or '[' at top level");
            return Err(Error::UnexpectedCharacter { offset: cursor.pos });
        }
    }

    let value = cursor.parse_value(1)?;
    cursor.skip_ws();
    if cursor.pos != cursor.bytes.len() {
        return Err(Error::UnexpectedCharacter { offset: cursor.pos });
    }
    Ok(value)
}

/// Parses strict JSON text into a [`Value`] tree.
///
/// # Errors
///
/// Returns an [`Error`] if `text` is not well-formed JSON, exceeds the
/// nesting or capacity limits in [`crate::limits`], or contains a duplicate
/// object key.
pub fn parse(text: &str) -> Result<Value, Error> {
    parse_impl(text, false)
}

/// Like [`parse`], but first strips `/* ... */` and `// ...` comments.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_with_comments(text: &str) -> Result<Value, Error> {
    parse_impl(text, true)
}
