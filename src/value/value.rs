use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use super::{AsAny, DataType, Object, ObjectRef, downcast_rc};

/// A dynamically-typed value, as stored by every container in this crate.
///
/// Cloning a `Value` is deep for strings and arrays, but [`Value::Object`] is a shared handle,
/// so clones refer to the same object.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Object(ObjectRef),
}

impl Value {
    /// Wraps `object` in a new shared handle.
    pub fn object<T: Object>(object: T) -> Value {
        Value::Object(Rc::new(object))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the contained object if it is exactly a `T`.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_object()
            .and_then(|object| AsAny::as_any(object.as_ref()).downcast_ref::<T>())
    }

    /// Returns a new handle to the contained object if it is exactly a `T`.
    pub fn downcast<T: Object>(&self) -> Option<Rc<T>> {
        self.as_object().and_then(downcast_rc::<T>)
    }

    /// The runtime type of this value: the class name for objects and a primitive name otherwise.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "double",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(object) => object.class_name(),
        }
    }

    /// Converts self to the scalar kind named by `target`.
    ///
    /// Only a single scalar tag (`BOOLEAN`, `INT`, `LONG`, `FLOAT`, `DOUBLE`, `STRING` or `NULL`)
    /// triggers a conversion. Any other `target` returns a clone of self.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::value::{DataType, Value};
    /// assert_eq!(Value::from("42").convert(DataType::INT), Value::Int(42));
    /// assert_eq!(Value::Int(0).convert(DataType::BOOLEAN), Value::Bool(false));
    /// assert_eq!(Value::Float(2.5).convert(DataType::STRING), Value::from("2.5"));
    /// ```
    pub fn convert(&self, target: DataType) -> Value {
        match target {
            DataType::BOOLEAN => Value::Bool(self.truthy()),
            DataType::INT | DataType::LONG => Value::Int(self.to_int()),
            DataType::FLOAT | DataType::DOUBLE => Value::Float(self.to_float()),
            DataType::STRING => Value::Str(self.to_string()),
            DataType::NULL => Value::Null,
            _ => self.clone(),
        }
    }

    fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(value) => *value,
            Value::Int(value) => *value != 0,
            Value::Float(value) => *value != 0.0,
            Value::Str(value) => !value.is_empty() && value != "0",
            Value::Array(value) => !value.is_empty(),
            Value::Object(_) => true,
        }
    }

    fn to_int(&self) -> i64 {
        match self {
            Value::Null => 0,
            Value::Bool(value) => i64::from(*value),
            Value::Int(value) => *value,
            Value::Float(value) => *value as i64,
            Value::Str(value) => {
                let trimmed = value.trim();
                trimmed.parse::<i64>()
                    .or_else(|_| trimmed.parse::<f64>().map(|float| float as i64))
                    .unwrap_or(0)
            },
            Value::Array(value) => i64::from(!value.is_empty()),
            Value::Object(_) => 1,
        }
    }

    fn to_float(&self) -> f64 {
        match self {
            Value::Float(value) => *value,
            Value::Str(value) => value.trim().parse::<f64>().unwrap_or(0.0),
            other => other.to_int() as f64,
        }
    }
}

/// Loose equality: numbers compare by value across [`Value::Int`] and [`Value::Float`], arrays
/// compare element-wise in order and objects compare with [`Object::equals`]. Values of any
/// other differing kinds are unequal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Int(l), Value::Int(r)) => l == r,
            (Value::Float(l), Value::Float(r)) => l == r,
            (Value::Int(l), Value::Float(r)) | (Value::Float(r), Value::Int(l)) => *l as f64 == *r,
            (Value::Str(l), Value::Str(r)) => l == r,
            (Value::Array(l), Value::Array(r)) => l == r,
            (Value::Object(l), Value::Object(r)) => Rc::ptr_eq(l, r) || l.equals(r.as_ref()),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => write!(f, "1"),
            Value::Bool(false) => Ok(()),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Str(value) => write!(f, "{value}"),
            Value::Array(_) => write!(f, "Array"),
            Value::Object(object) => write!(f, "{}", object.class_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}

impl<T: Object> From<Rc<T>> for Value {
    fn from(value: Rc<T>) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
