//! Two-pass serializer: compute the exact output size, then emit.

use crate::error::Error;
use crate::strings;
use crate::value::Value;

/// A `Number` whose value equals its own truncation to a signed integer in
/// this range is emitted in integer form; otherwise the fixed floating-point
/// format is used. Widened from the original source's 32-bit narrowing (see
/// `DESIGN.md`) to the full range of `i64`.
fn integer_form(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let truncated = n as i64; // saturates at the i64 bounds, never UB
    #[allow(clippy::cast_precision_loss)]
    if truncated as f64 == n {
        Some(truncated)
    } else {
        None
    }
}

fn number_repr(n: f64) -> Result<String, Error> {
    if !n.is_finite() {
        return Err(Error::NonFiniteNumber);
    }
    match integer_form(n) {
        Some(i) => Ok(i.to_string()),
        None => Ok(format!("{n:.6}")),
    }
}

fn content_size(value: &Value) -> Result<usize, Error> {
    Ok(match value {
        Value::Null => 4,
        Value::Boolean(true) => 4,
        Value::Boolean(false) => 5,
        Value::Number(n) => number_repr(*n)?.len(),
        Value::String(s) => strings::encoded_len(s),
        Value::Array(items) => {
            let mut size = 2; // []
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    size += 1; // ,
                }
                size += content_size(item)?;
            }
            size
        }
        Value::Object(map) => {
            let mut size = 2; // {}
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    size += 1; // ,
                }
                size += strings::encoded_len(key) + 1 /* : */ + content_size(val)?;
            }
            size
        }
    })
}

fn write_value(value: &Value, out: &mut String) -> Result<(), Error> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&number_repr(*n)?),
        Value::String(s) => strings::encode_into(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                strings::encode_into(out, key);
                out.push(':');
                write_value(val, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// The exact number of bytes the compact serialization of `value` would
/// consume, plus one — matching the original C library's size-including-
/// terminator convention. `to_string(v).len() == serialize_size(v) - 1`.
///
/// # Errors
///
/// Returns [`Error::NonFiniteNumber`] if `value` contains a NaN or infinite
/// number anywhere in the tree.
pub fn serialize_size(value: &Value) -> Result<usize, Error> {
    Ok(content_size(value)? + 1)
}

/// Serializes `value` to a newly allocated, compact JSON string.
///
/// # Errors
///
/// Returns [`Error::NonFiniteNumber`] if `value` contains a NaN or infinite
/// number anywhere in the tree.
pub fn to_string(value: &Value) -> Result<String, Error> {
    let size = content_size(value)?;
    let mut out = String::with_capacity(size);
    write_value(value, &mut out)?;
    tracing::trace!(bytes = out.len(), "serialized json value");
    Ok(out)
}

/// Serializes `value` into `buf`, which must be at least
/// [`serialize_size`]`(value)` bytes long. Returns the number of bytes
/// actually written.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if `buf` is too small, or
/// [`Error::NonFiniteNumber`] if `value` contains a non-finite number.
pub fn write_into(value: &Value, buf: &mut [u8]) -> Result<usize, Error> {
    let needed = serialize_size(value)?;
    if buf.len() < needed {
        return Err(Error::BufferTooSmall {
            given: buf.len(),
            needed,
        });
    }
    let text = to_string(value)?;
    buf[..text.len()].copy_from_slice(text.as_bytes());
    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_number_has_no_fractional_part() {
        assert_eq!(number_repr(2.0).unwrap(), "2");
        assert_eq!(number_repr(-5.0).unwrap(), "-5");
    }

    #[test]
    fn fractional_number_uses_fixed_six_digit_format() {
        assert_eq!(number_repr(2.5).unwrap(), "2.500000");
    }

    #[test]
    fn non_finite_number_fails_to_serialize() {
        assert!(matches!(
            number_repr(f64::NAN).unwrap_err(),
            Error::NonFiniteNumber
        ));
        assert!(matches!(
            number_repr(f64::INFINITY).unwrap_err(),
            Error::NonFiniteNumber
        ));
    }

    #[test]
    fn scenario_s2_object_serialization() {
        let mut obj = Value::object();
        obj.add("n", 2.0).unwrap();
        obj.add("m", 2.5).unwrap();
        obj.add("s", "he said \"hi\"").unwrap();

        let text = to_string(&obj).unwrap();
        assert!(text.contains("\"n\":2"));
        assert!(text.contains("\"m\":2.500000"));
        assert!(text.contains(r#""s":"he said \"hi\"""#));
        assert_eq!(text.len(), serialize_size(&obj).unwrap() - 1);
    }

    #[test]
    fn size_predicts_exact_output_length() {
        let mut obj = Value::object();
        obj.add("a", 1.0).unwrap();
        obj.add("b", Value::from(vec![Value::from(true), Value::Null, Value::from("x")]))
            .unwrap();
        let text = to_string(&obj).unwrap();
        assert_eq!(text.len(), serialize_size(&obj).unwrap() - 1);
    }

    #[test]
    fn write_into_fails_on_buffer_too_small() {
        let value = Value::from("hello");
        let mut buf = [0u8; 2];
        let err = write_into(&value, &mut buf).unwrap_err();
        assert!(matches!(err, Error::BufferTooSmall { .. }));
    }

    #[test]
    fn write_into_matches_to_string() {
        let value = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
        let text = to_string(&value).unwrap();
        let mut buf = vec![0u8; serialize_size(&value).unwrap()];
        let written = write_into(&value, &mut buf).unwrap();
        assert_eq!(&buf[..written], text.as_bytes());
    }

    #[test]
    fn empty_containers_serialize_compact() {
        assert_eq!(to_string(&Value::object()).unwrap(), "{}");
        assert_eq!(to_string(&Value::array()).unwrap(), "[]");
    }
}
