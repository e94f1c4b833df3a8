use std::fmt::{self, Display, Formatter};

use crate::value::{DataType, Object, Value, class_name_of};

/// The single type a container accepts: either a set of primitive [`DataType`] tags or an exact
/// class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Kind(DataType),
    Class(String),
}

impl DeclaredType {
    /// Declares the class of `T`, as reported by the default [`Object::class_name`].
    pub fn class<T: Object>() -> DeclaredType {
        DeclaredType::Class(class_name_of::<T>().to_owned())
    }
}

impl From<DataType> for DeclaredType {
    fn from(value: DataType) -> Self {
        DeclaredType::Kind(value)
    }
}

impl From<&str> for DeclaredType {
    fn from(value: &str) -> Self {
        DeclaredType::Class(value.to_owned())
    }
}

impl From<String> for DeclaredType {
    fn from(value: String) -> Self {
        DeclaredType::Class(value)
    }
}

impl Display for DeclaredType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Kind(kind) => write!(f, "{kind}"),
            DeclaredType::Class(class) => write!(f, "{class}"),
        }
    }
}

/// Validates candidate values against an optional [`DeclaredType`].
///
/// A value is accepted when:
/// - No type is declared.
/// - The value is [`Value::Null`].
/// - The value is an object whose class name is exactly the declared class. Other classes are
///   rejected, however closely they resemble the declared one.
/// - The value's [`DataType`] intersects the declared tags, or the tags include
///   [`DataType::MIXED`].
///
/// The constraint never infers a type from the values it checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeConstraint {
    declared: Option<DeclaredType>,
}

impl TypeConstraint {
    pub const fn any() -> TypeConstraint {
        TypeConstraint {
            declared: None,
        }
    }

    pub const fn new(declared: Option<DeclaredType>) -> TypeConstraint {
        TypeConstraint {
            declared,
        }
    }

    pub fn of<T: Into<DeclaredType>>(declared: T) -> TypeConstraint {
        TypeConstraint {
            declared: Some(declared.into()),
        }
    }

    pub const fn get(&self) -> Option<&DeclaredType> {
        self.declared.as_ref()
    }

    pub fn set(&mut self, declared: Option<DeclaredType>) -> &mut Self {
        self.declared = declared;
        self
    }

    pub fn accepts(&self, value: &Value) -> bool {
        let Some(declared) = &self.declared else {
            return true;
        };

        match (declared, value) {
            (_, Value::Null) => true,
            (DeclaredType::Class(class), Value::Object(object)) => object.class_name() == class.as_str(),
            (DeclaredType::Class(_), _) => false,
            (DeclaredType::Kind(kind), value) => {
                kind.contains(DataType::MIXED) || kind.intersects(DataType::of(value))
            },
        }
    }

    /// A description of the declared type, for error messages.
    pub fn describe(&self) -> String {
        match &self.declared {
            Some(declared) => declared.to_string(),
            None => "any".to_owned(),
        }
    }
}
