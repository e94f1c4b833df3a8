//! Object identity, properties and synchronous signal/slot notification.
//!
//! An object type embeds an [`ObjectBase`] and implements [`BaseObject`] to gain a unique
//! identity string, a weak link to a parent object, a two-tier property lookup and a table of
//! [`Signals`]. Subscribers are [`Slot`]s, either closures or named methods on a [`Receiver`].
//!
//! Everything here is single-threaded. State lives behind [`Cell`](std::cell::Cell) and
//! [`RefCell`](std::cell::RefCell), so objects can be connected and emitted through a shared
//! [`Rc`](std::rc::Rc), which is how [`Value`](crate::value::Value) holds them.

mod base;
mod error;
mod identity;
mod signals;
mod tests;

pub use base::*;
pub use error::*;
pub use identity::*;
pub use signals::*;
