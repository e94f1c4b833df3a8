//! A module containing [`List`] and associated types.
//!
//! Borrowed iteration is provided by [`std::slice::Iter`] through List's
//! [`Deref<Target = [Value]>`](std::ops::Deref) implementation and owned iteration by
//! [`IntoIter`]. List also supports the stateful [`Cursor`](super::Cursor) protocol.
//!
//! [`List`] is also re-exported under the parent module.

mod iter;
mod list;

pub use iter::*;
pub use list::*;
