//! Dotted-path addressing (`"a.b.c"`) over nested objects.

use indexmap::IndexMap;

use crate::error::Error;
use crate::value::Value;

impl Value {
    /// Descends through intermediate objects following a dotted path like
    /// `"a.b.c"`. Fails (returns `None`) if any intermediate segment is
    /// missing or not an object.
    #[must_use]
    pub fn dotget(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Typed convenience wrapping [`Value::dotget`] with [`Value::as_f64`]'s
    /// neutral-default semantics.
    #[must_use]
    pub fn dotget_f64(&self, path: &str) -> f64 {
        self.dotget(path).map(Value::as_f64).unwrap_or(0.0)
    }

    /// Typed convenience wrapping [`Value::dotget`] with [`Value::as_str`]'s
    /// neutral-default semantics.
    #[must_use]
    pub fn dotget_str(&self, path: &str) -> &str {
        self.dotget(path).map(Value::as_str).unwrap_or("")
    }

    /// Typed convenience wrapping [`Value::dotget`] with [`Value::as_bool`]'s
    /// neutral-default semantics.
    #[must_use]
    pub fn dotget_bool(&self, path: &str) -> bool {
        self.dotget(path).map(Value::as_bool).unwrap_or(false)
    }

    /// Sets the value at a dotted path, auto-creating missing intermediate
    /// objects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if an intermediate segment exists but is
    /// not an object, or if the final segment's parent is not an object.
    pub fn dotset<V: Into<Value>>(&mut self, path: &str, value: V) -> Result<(), Error> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, intermediates) = segments
            .split_last()
            .ok_or_else(|| Error::PathNotFound {
                segment: path.to_string(),
            })?;

        let mut current = self;
        for segment in intermediates {
            if !current.is_object() {
                return Err(Error::NotAnObject);
            }
            let Value::Object(map) = current else {
                unreachable!("checked is_object above")
            };
            if !map.contains_key(*segment) {
                map.insert((*segment).to_string(), Value::Object(IndexMap::new()));
            }
            current = map.get_mut(*segment).expect("just inserted or present");
        }
        current.set(*last, value)
    }

    /// Removes the value at a dotted path, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if an intermediate segment is missing,
    /// or [`Error::PathNotAnObject`] if an intermediate segment is not an
    /// object.
    pub fn dotremove(&mut self, path: &str) -> Result<Value, Error> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, intermediates) = segments
            .split_last()
            .ok_or_else(|| Error::PathNotFound {
                segment: path.to_string(),
            })?;

        let mut current: &mut Value = self;
        for segment in intermediates {
            current = match current {
                Value::Object(map) => map.get_mut(*segment).ok_or_else(|| Error::PathNotFound {
                    segment: (*segment).to_string(),
                })?,
                _ => {
                    return Err(Error::PathNotAnObject {
                        segment: (*segment).to_string(),
                    });
                }
            };
        }
        current.remove_key(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_s5_dotted_path_round_trip() {
        let mut root = Value::object();
        root.dotset("a.b.c", 7.0).unwrap();

        assert_eq!(root.dotget_f64("a.b.c"), 7.0);
        assert!(root.get("a").unwrap().get("b").unwrap().get("c").is_some());

        root.dotremove("a.b.c").unwrap();
        let b = root.get("a").unwrap().get("b").unwrap();
        assert_eq!(b.count(), 0);
    }

    #[test]
    fn dotget_missing_intermediate_returns_none() {
        let root = Value::object();
        assert_eq!(root.dotget("a.b.c"), None);
        assert_eq!(root.dotget_f64("a.b.c"), 0.0);
        assert_eq!(root.dotget_str("a.b.c"), "");
        assert_eq!(root.dotget_bool("a.b.c"), false);
    }

    #[test]
    fn dotset_fails_through_non_object_intermediate() {
        let mut root = Value::object();
        root.set("a", 1.0).unwrap();
        let err = root.dotset("a.b", 2.0).unwrap_err();
        assert!(matches!(err, Error::NotAnObject));
    }

    #[test]
    fn dotremove_missing_path_fails() {
        let mut root = Value::object();
        assert!(matches!(
            root.dotremove("a.b").unwrap_err(),
            Error::PathNotFound { .. }
        ));
    }

    #[test]
    fn dotset_top_level_segment_is_plain_set() {
        let mut root = Value::object();
        root.dotset("a", 1.0).unwrap();
        assert_eq!(root.get("a").unwrap().as_f64(), 1.0);
    }
}
