//! Runtime type-checked collection types.
//!
//! # Purpose
//! Every collection here stores dynamically-typed [`Value`](crate::value::Value)s, but can be
//! restricted to a single declared type through its [`TypeConstraint`](crate::template::TypeConstraint).
//! Mutating operations check each value before it is stored, so a typed collection never holds a
//! value of another type (aside from null, which is always accepted).
//!
//! # Method
//! [`List`] is the base sequential type and implements [`Deref<Target = [Value]>`](std::ops::Deref),
//! which saves me from writing the read-only slice functionality again. [`Vector`] and
//! [`TypedList`] are both built on top of it. [`Map`] keeps string keys in insertion order.
//! All of them share the typing discipline of [`Template`](crate::template::Template).

mod cursor;
#[cfg(feature = "json")]
mod json;
pub mod list;
pub mod map;
pub mod typed;
pub mod vector;

pub use cursor::*;
pub use list::List;
pub use map::{Map, ReadOnlyMap};
pub use typed::{StringList, TypedList};
#[cfg(feature = "fs")]
pub use typed::FileInfoList;
pub use vector::Vector;
