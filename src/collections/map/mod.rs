//! A module containing [`Map`], its read-only counterpart [`ReadOnlyMap`] and associated types.
//!
//! Iteration types provide borrowed iteration over entries, keys or values and owned iteration
//! over entries, all in insertion order. There is no mutable iterator, because writing through
//! it would bypass the declared type.
//!
//! [`Map`] and [`ReadOnlyMap`] are also re-exported under the parent module.

mod iter;
mod map;
mod read_only;
mod tests;

pub use iter::*;
pub use map::*;
pub use read_only::*;
