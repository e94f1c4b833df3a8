use tracing::trace;

use super::{DeclaredType, TypeConstraint};
use crate::util::error::WrongType;
use crate::value::Value;

/// Shared typing behaviour for containers which own a [`TypeConstraint`].
///
/// Implementors provide access to their constraint and gain validation, the type accessors and
/// [`check_type`](Template::check_type), which every mutating path funnels through.
pub trait Template {
    fn constraint(&self) -> &TypeConstraint;

    fn constraint_mut(&mut self) -> &mut TypeConstraint;

    /// Returns true if `value` satisfies the declared type.
    fn is_valid_type(&self, value: &Value) -> bool {
        self.constraint().accepts(value)
    }

    fn get_type(&self) -> Option<&DeclaredType> {
        self.constraint().get()
    }

    /// Replaces the declared type. Values already stored are not checked again.
    fn set_type(&mut self, declared: Option<DeclaredType>) -> &mut Self {
        self.constraint_mut().set(declared);
        self
    }

    /// Checks `value` against the declared type, describing both types on failure.
    fn check_type(&self, value: &Value) -> Result<(), WrongType> {
        if self.is_valid_type(value) {
            return Ok(());
        }

        let error = WrongType {
            expected: self.constraint().describe(),
            given: value.type_name().to_owned(),
        };
        trace!(expected = %error.expected, given = %error.given, "value rejected by type constraint");
        Err(error)
    }
}

impl Template for TypeConstraint {
    fn constraint(&self) -> &TypeConstraint {
        self
    }

    fn constraint_mut(&mut self) -> &mut TypeConstraint {
        self
    }
}
