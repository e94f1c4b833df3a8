use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A value was rejected by the [`TypeConstraint`](crate::template::TypeConstraint) of the
/// container it was offered to.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("wrong type: {expected} required, {given} given")]
pub struct WrongType {
    pub expected: String,
    pub given: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("operation requires a non-empty collection")]
pub struct EmptyCollection;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("value is not present in the collection")]
pub struct ValueNotFound;

/// A Map had no next integer key to assign, because its largest integer key is already
/// [`i64::MAX`].
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("no integer key follows {max}")]
pub struct KeyOverflow {
    #[error(not(source))]
    pub max: i64,
}

/// A mutating method was invoked on a read-only container.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{class} is read-only, {method} is not supported")]
pub struct ReadOnly {
    pub class: &'static str,
    pub method: &'static str,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum ContainerError {
    WrongType(WrongType),
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyCollection(EmptyCollection),
    ValueNotFound(ValueNotFound),
    KeyOverflow(KeyOverflow),
    ReadOnly(ReadOnly),
}

impl ContainerError {
    /// Returns true for every variant that signals a position outside of the valid range, which
    /// includes reading from an empty collection and removing a value that isn't present.
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            ContainerError::IndexOutOfBounds(_)
                | ContainerError::EmptyCollection(_)
                | ContainerError::ValueNotFound(_)
        )
    }
}
