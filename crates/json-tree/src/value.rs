use indexmap::IndexMap;

use crate::error::Error;
use crate::limits::{self, NUMBER_EPSILON};

/// The variant tag of a [`Value`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// A JSON value: one of null, boolean, number, string, array, or object.
///
/// Ownership is exclusive and recursive — dropping a `Value` drops every child
/// it contains. `Clone` performs a full deep copy; [`Value::deep_copy`] is an
/// alias kept for callers that want the operation spelled out by name.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Constructs an empty object.
    #[must_use]
    pub fn object() -> Value {
        Value::Object(IndexMap::new())
    }

    /// Constructs an empty array.
    #[must_use]
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    /// Returns this value's variant tag.
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Boolean(_) => Tag::Boolean,
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::Array(_) => Tag::Array,
            Value::Object(_) => Tag::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean payload, or `false` if this is not a `Boolean`.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            _ => false,
        }
    }

    /// Returns the numeric payload, or `0.0` if this is not a `Number`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Returns the string payload, or `""` if this is not a `String`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s.as_str(),
            _ => "",
        }
    }

    /// Returns the array elements, or an empty slice if this is not an `Array`.
    #[must_use]
    pub fn as_array(&self) -> &[Value] {
        match self {
            Value::Array(items) => items,
            _ => &[],
        }
    }

    /// Number of children: object entries, array elements, or `0` for scalars.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// The name at `index` in an object's insertion order, or `None` if this
    /// is not an object or `index` is out of range.
    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        match self {
            Value::Object(map) => map.get_index(index).map(|(k, _)| k.as_str()),
            _ => None,
        }
    }

    /// Looks up `name` in an object. Returns `None` if this is not an object
    /// or the name is absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(name),
            _ => None,
        }
    }

    /// Mutable variant of [`Value::get`].
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(name),
            _ => None,
        }
    }

    /// Bounds-checked indexed access into an array. Returns `None` if this is
    /// not an array or `index` is out of range.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Mutable variant of [`Value::at`].
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// Inserts `name` into an object, failing if the name already exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if `self` is not an object,
    /// [`Error::DuplicateKeyInsert`] if `name` is already present, or
    /// [`Error::ObjectCapacityExceeded`] if the object is already at capacity.
    pub fn add<V: Into<Value>>(&mut self, name: impl Into<String>, value: V) -> Result<(), Error> {
        let Value::Object(map) = self else {
            return Err(Error::NotAnObject);
        };
        let name = name.into();
        if map.contains_key(&name) {
            return Err(Error::DuplicateKeyInsert { key: name });
        }
        if map.len() >= limits::OBJECT_MAX_CAPACITY {
            return Err(Error::ObjectCapacityExceeded {
                max: limits::OBJECT_MAX_CAPACITY,
            });
        }
        map.insert(name, value.into());
        Ok(())
    }

    /// Replaces `name` in an object if present, otherwise inserts it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if `self` is not an object, or
    /// [`Error::ObjectCapacityExceeded`] if inserting a new name would exceed
    /// capacity.
    pub fn set<V: Into<Value>>(&mut self, name: impl Into<String>, value: V) -> Result<(), Error> {
        let Value::Object(map) = self else {
            return Err(Error::NotAnObject);
        };
        let name = name.into();
        if !map.contains_key(&name) && map.len() >= limits::OBJECT_MAX_CAPACITY {
            return Err(Error::ObjectCapacityExceeded {
                max: limits::OBJECT_MAX_CAPACITY,
            });
        }
        map.insert(name, value.into());
        Ok(())
    }

    /// Removes `name` from an object via swap-with-last, returning its value.
    ///
    /// Index stability of the remaining entries is **not** guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if `self` is not an object, or
    /// [`Error::KeyNotFound`] if `name` is absent.
    pub fn remove_key(&mut self, name: &str) -> Result<Value, Error> {
        let Value::Object(map) = self else {
            return Err(Error::NotAnObject);
        };
        map.swap_remove(name)
            .ok_or_else(|| Error::KeyNotFound { key: name.to_string() })
    }

    /// Appends a value to an array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnArray`] if `self` is not an array, or
    /// [`Error::ArrayCapacityExceeded`] if the array is already at capacity.
    pub fn append<V: Into<Value>>(&mut self, value: V) -> Result<(), Error> {
        let Value::Array(items) = self else {
            return Err(Error::NotAnArray);
        };
        if items.len() >= limits::ARRAY_MAX_CAPACITY {
            return Err(Error::ArrayCapacityExceeded {
                max: limits::ARRAY_MAX_CAPACITY,
            });
        }
        items.push(value.into());
        Ok(())
    }

    /// Replaces the element at `index` in an array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnArray`] if `self` is not an array, or
    /// [`Error::IndexOutOfBounds`] if `index` is out of range.
    pub fn replace_at<V: Into<Value>>(&mut self, index: usize, value: V) -> Result<(), Error> {
        let Value::Array(items) = self else {
            return Err(Error::NotAnArray);
        };
        let len = items.len();
        let slot = items
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = value.into();
        Ok(())
    }

    /// Removes the element at `index` via swap-with-last, returning it.
    ///
    /// The former last element now occupies `index`; index stability across
    /// removals is **not** guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnArray`] if `self` is not an array, or
    /// [`Error::IndexOutOfBounds`] if `index` is out of range.
    pub fn remove_index(&mut self, index: usize) -> Result<Value, Error> {
        let Value::Array(items) = self else {
            return Err(Error::NotAnArray);
        };
        let len = items.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(items.swap_remove(index))
    }

    /// Empties an object or array in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAContainer`] if `self` is neither an object nor an
    /// array.
    pub fn clear(&mut self) -> Result<(), Error> {
        match self {
            Value::Object(map) => {
                map.clear();
                Ok(())
            }
            Value::Array(items) => {
                items.clear();
                Ok(())
            }
            _ => Err(Error::NotAContainer),
        }
    }

    /// Produces a structurally identical tree sharing no mutable storage with
    /// `self`. A plain alias for [`Clone::clone`] — the value model's
    /// ownership already makes clone a deep copy.
    #[must_use]
    pub fn deep_copy(&self) -> Value {
        self.clone()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

/// Structural equality: same variant, same children in order for arrays, same
/// name-to-value mapping for objects, byte-equal strings, numbers equal within
/// [`NUMBER_EPSILON`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => (a - b).abs() < NUMBER_EPSILON,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|bv| bv == v))
            }
            _ => false,
        }
    }
}
