//! A module containing [`Vector`], a [`List`](super::List) with a handful of additional bulk
//! operations.
//!
//! [`Vector`] is also re-exported under the parent module.

mod vector;

pub use vector::*;
