//! The in-memory value tree.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::{fmt, ops, slice};

use crate::error::ValueError;
use crate::number::{Decimal, Number};

/// Keyed mapping backing [`Value::Object`].
pub type Map = BTreeMap<String, Value>;
/// Ordered sequence backing [`Value::Array`].
pub type Array = Vec<Value>;

/// The shape of a [`Value`], used to name it in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The null value.
    Null,
    /// A boolean.
    Boolean,
    /// A number.
    Number,
    /// A string.
    String,
    /// A keyed mapping.
    Object,
    /// An ordered sequence.
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "Null",
            ValueKind::Boolean => "Boolean",
            ValueKind::Number => "Number",
            ValueKind::String => "String",
            ValueKind::Object => "Object",
            ValueKind::Array => "Array",
        })
    }
}

/// A parsed JSON value.
///
/// The tree is owned and acyclic: each node exclusively owns its
/// children, and the root is owned by the caller of
/// [`parse`](crate::parse) with no lifetime tied to the source text.
///
/// # Examples
///
/// ```
/// use jsonloom::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean; the source keyword was exactly `true` or `false`.
    Boolean(bool),
    /// A number, in the representation selected from its literal.
    Number(Number),
    /// A string owning its decoded content.
    String(String),
    /// A keyed mapping; keys unique, duplicate inserts resolve last
    /// write wins.
    Object(Map),
    /// An ordered sequence.
    Array(Array),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Names the shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(..) => ValueKind::Boolean,
            Value::Number(..) => ValueKind::Number,
            Value::String(..) => ValueKind::String,
            Value::Object(..) => ValueKind::Object,
            Value::Array(..) => ValueKind::Array,
        }
    }

    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is a number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Borrows the mapping of an object-shaped value.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Borrows the elements of an array-shaped value.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Borrows the content of a string-shaped value.
    ///
    /// # Errors
    ///
    /// [`ValueError::Conversion`] on any other shape; only string-shaped
    /// values convert to text.
    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(ValueError::Conversion {
                from: other.kind(),
                to: "string",
            }),
        }
    }

    /// Looks up `key` on an object-shaped value.
    ///
    /// A single-element array transparently forwards the lookup to its
    /// element; any other shape has no members.
    ///
    /// # Errors
    ///
    /// [`ValueError::NoMembers`] when the shape has no members,
    /// [`ValueError::MissingKey`] when the object lacks the entry.
    pub fn get(&self, key: &str) -> Result<&Value, ValueError> {
        match self {
            Value::Array(values) if values.len() == 1 => values[0].get(key),
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| ValueError::MissingKey(key.to_string())),
            other => Err(ValueError::NoMembers(other.kind())),
        }
    }

    /// Iterates the elements of an array-shaped value.
    ///
    /// # Errors
    ///
    /// [`ValueError::NotIterable`] on any other shape.
    pub fn elements(&self) -> Result<slice::Iter<'_, Value>, ValueError> {
        match self {
            Value::Array(values) => Ok(values.iter()),
            other => Err(ValueError::NotIterable(other.kind())),
        }
    }

    /// Parses the content of a string-shaped value as an integer.
    ///
    /// The conversion is deliberately textual: only string-shaped values
    /// convert, never number-shaped ones.
    ///
    /// # Errors
    ///
    /// [`ValueError::Conversion`] on any other shape or unparseable text.
    pub fn to_int(&self) -> Result<i32, ValueError> {
        i32::try_from(self)
    }
}

impl TryFrom<&Value> for i32 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => s.trim().parse().map_err(|_| ValueError::Conversion {
                from: ValueKind::String,
                to: "integer",
            }),
            other => Err(ValueError::Conversion {
                from: other.kind(),
                to: "integer",
            }),
        }
    }
}

impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_str().map(ToString::to_string)
    }
}

impl ops::Index<&str> for Value {
    type Output = Value;

    /// Panicking member-access sugar over [`Value::get`]; a veneer, not
    /// part of the core tree API.
    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(Number::Int(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Long(v))
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Number(Number::Decimal(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl fmt::Display for Value {
    /// Compact serialization of the tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(self, false))
    }
}
