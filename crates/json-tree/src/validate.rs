//! Small structural schema validator.
//!
//! A schema is itself a [`Value`]. `Value::Null` always matches. An object
//! schema checks only the keys it names (extra keys on the data side are
//! ignored). An array schema uses its first element, if any, as the element
//! schema applied to every element of the data array; an empty array schema
//! matches any array.

use crate::value::Value;

/// Checks whether `data` conforms to `schema`.
#[must_use]
pub fn validate(schema: &Value, data: &Value) -> bool {
    match schema {
        Value::Null => true,
        Value::Object(schema_map) => {
            let Value::Object(data_map) = data else {
                return false;
            };
            schema_map.iter().all(|(key, sub_schema)| {
                data_map
                    .get(key)
                    .is_some_and(|sub_data| validate(sub_schema, sub_data))
            })
        }
        Value::Array(schema_items) => {
            let Value::Array(data_items) = data else {
                return false;
            };
            let Some(element_schema) = schema_items.first() else {
                return true;
            };
            data_items.iter().all(|item| validate(element_schema, item))
        }
        Value::Boolean(_) => data.is_boolean(),
        Value::Number(_) => data.is_number(),
        Value::String(_) => data.is_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn null_schema_matches_anything() {
        assert!(validate(&Value::Null, &Value::from(1.0)));
        assert!(validate(&Value::Null, &Value::object()));
    }

    #[test]
    fn object_schema_checks_named_keys_and_ignores_extras() {
        let schema = parse(r#"{"name":"","age":0}"#).unwrap();
        let good = parse(r#"{"name":"a","age":1,"extra":true}"#).unwrap();
        let bad = parse(r#"{"name":"a"}"#).unwrap();
        assert!(validate(&schema, &good));
        assert!(!validate(&schema, &bad));
    }

    #[test]
    fn array_schema_uses_first_element_as_element_type() {
        let schema = parse("[0]").unwrap();
        assert!(validate(&schema, &parse("[1,2,3]").unwrap()));
        assert!(!validate(&schema, &parse(r#"[1,"x"]"#).unwrap()));
    }

    #[test]
    fn empty_array_schema_matches_any_array() {
        let schema = parse("[]").unwrap();
        assert!(validate(&schema, &parse(r#"[1,"x",true]"#).unwrap()));
        assert!(!validate(&schema, &Value::object()));
    }

    #[test]
    fn nested_object_schema_recurses() {
        let schema = parse(r#"{"a":{"b":0}}"#).unwrap();
        assert!(validate(&schema, &parse(r#"{"a":{"b":1}}"#).unwrap()));
        assert!(!validate(&schema, &parse(r#"{"a":{"c":1}}"#).unwrap()));
    }

    #[test]
    fn scalar_schema_checks_tag_only() {
        assert!(validate(&Value::from(0.0), &Value::from(42.0)));
        assert!(!validate(&Value::from(0.0), &Value::from("42")));
        assert!(validate(&Value::from(""), &Value::from("x")));
        assert!(validate(&Value::from(true), &Value::from(false)));
    }
}
