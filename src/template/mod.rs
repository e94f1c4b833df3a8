//! The typing discipline shared by every container: a [`TypeConstraint`] holding an optional
//! [`DeclaredType`], and the [`Template`] trait which checks values against it.

mod constraint;
mod template;

pub use constraint::*;
pub use template::*;
