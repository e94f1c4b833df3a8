use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use tracing::{debug, trace};

use super::{EmitError, SlotError};
use crate::value::Value;

/// The signature of a closure slot. Emitting without arguments passes None.
pub type Callback = dyn Fn(Option<&Value>) -> Result<(), SlotError>;

/// Dispatches named method calls, so that an object can be the target of a [`Slot::Method`].
///
/// Implementations map each method name to the behaviour it stands for and should return
/// [`SlotError::unknown_method`] for any other name.
pub trait Receiver {
    fn invoke(&self, method: &str, args: Option<&Value>) -> Result<(), SlotError>;
}

/// A subscriber to a signal.
#[derive(Clone)]
pub enum Slot {
    Closure(Rc<Callback>),
    Method {
        receiver: Rc<dyn Receiver>,
        method: String,
    },
}

impl Slot {
    pub fn closure<F>(callback: F) -> Slot
    where
        F: Fn(Option<&Value>) -> Result<(), SlotError> + 'static,
    {
        Slot::Closure(Rc::new(callback))
    }

    pub fn method(receiver: Rc<dyn Receiver>, method: &str) -> Slot {
        Slot::Method {
            receiver,
            method: method.to_owned(),
        }
    }

    pub fn invoke(&self, args: Option<&Value>) -> Result<(), SlotError> {
        match self {
            Slot::Closure(callback) => callback(args),
            Slot::Method { receiver, method } => receiver.invoke(method, args),
        }
    }
}

impl Debug for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Closure(_) => f.write_str("Closure"),
            Slot::Method { method, .. } => f.debug_struct("Method").field("method", method).finish(),
        }
    }
}

/// A table of signal names to the slots subscribed to them, which can be blocked as a whole.
///
/// Slots are invoked synchronously, in the order they were connected. The table is never
/// borrowed while a slot runs, so slots may connect, disconnect or emit on the same table.
#[derive(Default)]
pub struct Signals {
    table: RefCell<HashMap<String, Vec<Slot>>>,
    blocked: Cell<bool>,
}

impl Signals {
    pub fn new() -> Signals {
        Signals::default()
    }

    /// Subscribes `slot` to `signal`. A slot can be connected more than once, in which case it
    /// is invoked once per connection.
    pub fn connect(&self, signal: &str, slot: Slot) {
        trace!(signal, ?slot, "connecting slot");
        self.table.borrow_mut()
            .entry(signal.to_owned())
            .or_default()
            .push(slot);
    }

    /// Removes every slot subscribed to `signal`, returning false if there were none.
    pub fn disconnect(&self, signal: &str) -> bool {
        let removed = self.table.borrow_mut().remove(signal).is_some();
        trace!(signal, removed, "disconnecting signal");
        removed
    }

    /// Removes every slot from every signal.
    pub fn disconnect_all(&self) {
        self.table.borrow_mut().clear();
    }

    /// Returns the number of slots subscribed to `signal`.
    pub fn slot_count(&self, signal: &str) -> usize {
        self.table.borrow().get(signal).map_or(0, Vec::len)
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.get()
    }

    pub fn set_blocked(&self, blocked: bool) {
        debug!(blocked, "signals blocked state changed");
        self.blocked.set(blocked);
    }

    /// Invokes every slot subscribed to `signal` with `args`. Does nothing if the signals are
    /// blocked or nothing is subscribed.
    ///
    /// # Errors
    /// The first slot to fail aborts the dispatch, returning an [`EmitError`] that wraps its
    /// [`SlotError`].
    ///
    /// # Examples
    /// ```
    /// # use std::cell::Cell;
    /// # use std::rc::Rc;
    /// # use toolkit_core::object::{Signals, Slot};
    /// let signals = Signals::new();
    /// let count = Rc::new(Cell::new(0));
    ///
    /// let counter = Rc::clone(&count);
    /// signals.connect("clicked", Slot::closure(move |_| {
    ///     counter.set(counter.get() + 1);
    ///     Ok(())
    /// }));
    ///
    /// signals.emit("clicked", None).unwrap();
    /// signals.set_blocked(true);
    /// signals.emit("clicked", None).unwrap();
    /// assert_eq!(count.get(), 1);
    /// ```
    pub fn emit(&self, signal: &str, args: Option<&Value>) -> Result<(), EmitError> {
        if self.blocked.get() {
            trace!(signal, "signals blocked, skipping emit");
            return Ok(());
        }

        // Cloned so that slots are free to modify the table.
        let slots = match self.table.borrow().get(signal) {
            Some(slots) => slots.clone(),
            None => return Ok(()),
        };

        debug!(signal, slots = slots.len(), "emitting signal");
        for (index, slot) in slots.iter().enumerate() {
            slot.invoke(args).map_err(|source| EmitError {
                signal: signal.to_owned(),
                index,
                source,
            })?;
        }

        Ok(())
    }
}

impl Debug for Signals {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signals")
            .field("table", &self.table.borrow())
            .field("blocked", &self.blocked.get())
            .finish()
    }
}
