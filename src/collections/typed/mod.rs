//! A module containing [`TypedList`], a List whose element type is fixed by a Rust type, and the
//! [`Element`] trait that connects Rust types to [`Value`](crate::value::Value)s.
//!
//! [`StringList`] and (with the `fs` feature) [`FileInfoList`] are the provided instantiations.

mod element;
mod typed_list;

pub use element::*;
pub use typed_list::*;
