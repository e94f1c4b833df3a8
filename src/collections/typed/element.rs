#[cfg(feature = "fs")]
use std::rc::Rc;

#[cfg(feature = "fs")]
use crate::fs::FileInfo;
use crate::template::DeclaredType;
use crate::value::{DataType, Value};

/// A Rust type that can be stored in a [`TypedList`](super::TypedList).
///
/// Implementations must agree with each other: any value produced by
/// [`into_value`](Element::into_value) satisfies [`declared_type`](Element::declared_type) and
/// is accepted by [`from_value`](Element::from_value).
pub trait Element: Clone {
    fn declared_type() -> DeclaredType;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl Element for String {
    fn declared_type() -> DeclaredType {
        DataType::STRING.into()
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

#[cfg(feature = "fs")]
impl Element for Rc<FileInfo> {
    fn declared_type() -> DeclaredType {
        DeclaredType::class::<FileInfo>()
    }

    fn into_value(self) -> Value {
        Value::Object(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.downcast::<FileInfo>()
    }
}
