use std::any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::{EmitError, Identity, Receiver, Signals, Slot, SlotError};
use crate::value::{Object, ObjectRef, Value};

/// The state shared by every object that supports identity, parents, ad hoc properties and
/// signals. Embed one in a type and implement [`BaseObject`] to expose it.
#[derive(Debug)]
pub struct ObjectBase {
    identity: Identity,
    parent: RefCell<Option<Weak<dyn Object>>>,
    properties: RefCell<HashMap<String, Value>>,
    signals: Signals,
}

impl ObjectBase {
    /// Creates the base for an object of type `T`, whose short type name prefixes the identity.
    pub fn new<T: ?Sized>() -> ObjectBase {
        ObjectBase::for_class(any::type_name::<T>())
    }

    pub fn for_class(class_name: &str) -> ObjectBase {
        ObjectBase {
            identity: Identity::new(class_name),
            parent: RefCell::new(None),
            properties: RefCell::new(HashMap::new()),
            signals: Signals::new(),
        }
    }

    /// Creates the base for an object of type `T`, linked to `parent`.
    pub fn with_parent<T: ?Sized>(parent: &ObjectRef) -> ObjectBase {
        let base = ObjectBase::new::<T>();
        base.set_parent(parent);
        base
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    /// Returns the parent, if one was set and is still alive.
    pub fn parent(&self) -> Option<ObjectRef> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Links `parent` without keeping it alive.
    pub fn set_parent(&self, parent: &ObjectRef) {
        *self.parent.borrow_mut() = Some(Rc::downgrade(parent));
    }

    pub fn clear_parent(&self) {
        *self.parent.borrow_mut() = None;
    }

    /// Returns a copy of the ad hoc property called `name`.
    pub fn dynamic_property(&self, name: &str) -> Option<Value> {
        self.properties.borrow().get(name).cloned()
    }

    pub fn set_dynamic_property(&self, name: &str, value: Value) {
        self.properties.borrow_mut().insert(name.to_owned(), value);
    }

    /// Returns the names of the ad hoc properties, in no particular order.
    pub fn dynamic_property_names(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }
}

/// Identity, parent, property and signal behaviour for types that embed an [`ObjectBase`].
///
/// Properties are looked up in two tiers. A type exposes its own declared fields through
/// [`declared_property`](BaseObject::declared_property) and
/// [`set_declared_property`](BaseObject::set_declared_property). Any other name falls through to
/// the ad hoc properties of the base.
///
/// # Examples
/// ```
/// # use std::cell::RefCell;
/// # use toolkit_core::object::{BaseObject, ObjectBase};
/// # use toolkit_core::value::Value;
/// struct Label {
///     base: ObjectBase,
///     text: RefCell<String>,
/// }
///
/// impl BaseObject for Label {
///     fn base(&self) -> &ObjectBase {
///         &self.base
///     }
///
///     fn declared_property(&self, name: &str) -> Option<Value> {
///         (name == "text").then(|| Value::from(self.text.borrow().as_str()))
///     }
///
///     fn set_declared_property(&self, name: &str, value: &Value) -> bool {
///         match (name, value.as_str()) {
///             ("text", Some(text)) => {
///                 *self.text.borrow_mut() = text.to_owned();
///                 true
///             },
///             _ => false,
///         }
///     }
/// }
///
/// let label = Label { base: ObjectBase::new::<Label>(), text: RefCell::default() };
/// label.set_property("text", Value::from("hello"));
/// label.set_property("colour", Value::from("red"));
/// assert_eq!(*label.text.borrow(), "hello");
/// assert_eq!(label.property("colour"), Some(Value::from("red")));
/// assert!(label.identity().as_str().starts_with("Label_"));
/// ```
pub trait BaseObject {
    fn base(&self) -> &ObjectBase;

    /// Reads the declared field called `name`, or None if there is no such field.
    fn declared_property(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Writes the declared field called `name`, returning false if there is no such field or
    /// it can't hold `value`.
    fn set_declared_property(&self, _name: &str, _value: &Value) -> bool {
        false
    }

    fn identity(&self) -> &Identity {
        self.base().identity()
    }

    fn parent(&self) -> Option<ObjectRef> {
        self.base().parent()
    }

    fn set_parent(&self, parent: &ObjectRef) -> &Self {
        self.base().set_parent(parent);
        self
    }

    /// Returns the declared field called `name`, falling back to the ad hoc property.
    fn property(&self, name: &str) -> Option<Value> {
        self.declared_property(name)
            .or_else(|| self.base().dynamic_property(name))
    }

    /// Writes the declared field called `name`, or the ad hoc property if there is no such
    /// field.
    fn set_property(&self, name: &str, value: Value) {
        if !self.set_declared_property(name, &value) {
            self.base().set_dynamic_property(name, value);
        }
    }

    /// Subscribes `method` of `receiver` to `signal`.
    fn connect(&self, signal: &str, receiver: Rc<dyn Receiver>, method: &str) {
        self.base().signals().connect(signal, Slot::method(receiver, method));
    }

    /// Subscribes `callback` to `signal`.
    fn connect_closure<F>(&self, signal: &str, callback: F)
    where
        F: Fn(Option<&Value>) -> Result<(), SlotError> + 'static,
        Self: Sized,
    {
        self.base().signals().connect(signal, Slot::closure(callback));
    }

    /// Removes every slot subscribed to `signal`, returning false if there were none.
    fn disconnect(&self, signal: &str) -> bool {
        self.base().signals().disconnect(signal)
    }

    /// Removes every slot from every signal.
    fn disconnect_signals(&self) {
        self.base().signals().disconnect_all();
    }

    /// Invokes the slots subscribed to `signal`, see [`Signals::emit`].
    ///
    /// # Errors
    /// Returns the failure of the first slot that fails.
    fn emit(&self, signal: &str, args: Option<&Value>) -> Result<(), EmitError> {
        self.base().signals().emit(signal, args)
    }

    fn signals_blocked(&self) -> bool {
        self.base().signals().is_blocked()
    }

    fn set_signals_blocked(&self, blocked: bool) -> &Self {
        self.base().signals().set_blocked(blocked);
        self
    }
}

/// Subscribes `method` of `receiver` to `signal` on `sender`. The subscription is always stored
/// by `sender`, whoever makes the call.
pub fn connect<S>(sender: &S, signal: &str, receiver: Rc<dyn Receiver>, method: &str)
where
    S: BaseObject + ?Sized,
{
    sender.connect(signal, receiver, method);
}

/// Subscribes `callback` to `signal` on `sender`.
pub fn connect_closure<S, F>(sender: &S, signal: &str, callback: F)
where
    S: BaseObject + ?Sized,
    F: Fn(Option<&Value>) -> Result<(), SlotError> + 'static,
{
    sender.base().signals().connect(signal, Slot::closure(callback));
}
