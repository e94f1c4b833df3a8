#![cfg(test)]

use std::cell::{Cell, RefCell};
use std::error::Error;
use std::rc::Rc;

use super::*;
use crate::util::fixture::Recorder;
use crate::value::{Object, ObjectRef, Value};

#[derive(Debug)]
struct Widget {
    base: ObjectBase,
    title: RefCell<String>,
}

impl Widget {
    fn new() -> Widget {
        Widget {
            base: ObjectBase::new::<Widget>(),
            title: RefCell::new(String::from("untitled")),
        }
    }
}

impl Object for Widget {
    fn fields(&self) -> Vec<(&str, Value)> {
        vec![("title", Value::from(self.title.borrow().as_str()))]
    }
}

impl BaseObject for Widget {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn declared_property(&self, name: &str) -> Option<Value> {
        match name {
            "title" => Some(Value::from(self.title.borrow().as_str())),
            _ => None,
        }
    }

    fn set_declared_property(&self, name: &str, value: &Value) -> bool {
        match (name, value) {
            ("title", Value::Str(title)) => {
                *self.title.borrow_mut() = title.clone();
                true
            },
            _ => false,
        }
    }
}

fn counter() -> (Rc<Cell<usize>>, impl Fn(Option<&Value>) -> Result<(), SlotError> + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move |_| {
        inner.set(inner.get() + 1);
        Ok(())
    })
}

#[test]
fn test_identity() {
    let first = Widget::new();
    let second = Widget::new();

    assert!(first.identity().as_str().starts_with("Widget_"));
    assert_ne!(first.identity(), second.identity(), "Identities should be unique.");
    assert_eq!(first.identity().to_string(), first.identity().as_str());
}

#[test]
fn test_emit_without_subscribers() {
    let widget = Widget::new();
    assert_eq!(widget.emit("clicked", None), Ok(()));
    assert_eq!(widget.emit("clicked", Some(&Value::Int(1))), Ok(()));
}

#[test]
fn test_emit_in_registration_order() {
    let widget = Widget::new();
    let recorder = Recorder::new();

    widget.connect("changed", recorder.clone(), "record");
    widget.connect("changed", recorder.clone(), "other");
    widget.connect("unrelated", recorder.clone(), "record");

    widget.emit("changed", Some(&Value::from("a"))).expect("both slots succeed");
    widget.emit("changed", None).expect("both slots succeed");

    assert_eq!(recorder.calls(), ["record(a)", "other(a)", "record()", "other()"]);
}

#[test]
fn test_closure_slots() {
    let widget = Widget::new();
    let (count, callback) = counter();
    widget.connect_closure("clicked", callback);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    connect_closure(&widget, "clicked", move |args| {
        sink.borrow_mut().push(args.cloned());
        Ok(())
    });

    widget.emit("clicked", Some(&Value::Int(3))).expect("closures succeed");
    assert_eq!(count.get(), 1);
    assert_eq!(*seen.borrow(), [Some(Value::Int(3))]);
}

#[test]
fn test_blocked_signals() {
    let widget = Widget::new();
    let (count, callback) = counter();
    widget.connect_closure("clicked", callback);

    widget.set_signals_blocked(true);
    assert!(widget.signals_blocked());
    widget.emit("clicked", None).expect("blocked emit is a no-op");
    assert_eq!(count.get(), 0, "No slot should run while signals are blocked.");

    widget.set_signals_blocked(false).emit("clicked", None).expect("unblocked");
    assert_eq!(count.get(), 1);
}

#[test]
fn test_disconnect_removes_every_slot() {
    let widget = Widget::new();
    let recorder = Recorder::new();
    widget.connect("changed", recorder.clone(), "record");
    widget.connect("changed", recorder.clone(), "other");
    widget.connect("closed", recorder.clone(), "record");

    assert!(widget.disconnect("changed"));
    assert!(!widget.disconnect("changed"), "There should be nothing left to disconnect.");

    widget.emit("changed", None).expect("no subscribers");
    assert!(recorder.calls().is_empty());

    widget.emit("closed", None).expect("still connected");
    assert_eq!(recorder.calls(), ["record()"]);

    widget.disconnect_signals();
    widget.emit("closed", None).expect("no subscribers");
    assert_eq!(recorder.calls().len(), 1);
}

#[test]
fn test_failure_aborts_dispatch() {
    let widget = Widget::new();
    let recorder = Recorder::new();
    widget.connect("saved", recorder.clone(), "record");
    widget.connect("saved", recorder.clone(), "fail");
    widget.connect("saved", recorder.clone(), "other");

    let error = widget.emit("saved", None).expect_err("the second slot fails");
    assert_eq!(error.signal, "saved");
    assert_eq!(error.index, 1);
    assert!(matches!(error.source, SlotError::Failed(_)));
    assert_eq!(recorder.calls(), ["record()"], "Slots after the failure shouldn't run.");

    widget.connect("typo", recorder.clone(), "missing");
    let error = widget.emit("typo", None).expect_err("unknown method");
    assert_eq!(error.source, SlotError::unknown_method("missing"));
}

#[test]
fn test_error_messages() {
    assert_eq!(SlotError::failed("disk full").to_string(), "slot failed: disk full");
    assert_eq!(
        SlotError::unknown_method("missing").to_string(),
        "receiver has no slot named missing"
    );
    assert!(SlotError::failed("x").source().is_none());

    let error = EmitError {
        signal: String::from("saved"),
        index: 2,
        source: SlotError::failed("disk full"),
    };
    assert_eq!(error.to_string(), "slot 2 of signal saved failed: slot failed: disk full");
    assert_eq!(
        error.source().map(ToString::to_string),
        Some(String::from("slot failed: disk full")),
        "The slot error should be exposed as the source."
    );
}

#[test]
fn test_free_connect_stores_on_sender() {
    let sender = Widget::new();
    let other = Widget::new();
    let recorder = Recorder::new();

    connect(&sender, "changed", recorder.clone(), "record");
    assert_eq!(sender.base().signals().slot_count("changed"), 1);
    assert_eq!(other.base().signals().slot_count("changed"), 0);

    other.emit("changed", None).expect("no subscribers");
    assert!(recorder.calls().is_empty());
    sender.emit("changed", None).expect("connected");
    assert_eq!(recorder.calls(), ["record()"]);
}

#[test]
fn test_slot_may_modify_table() {
    let widget = Rc::new(Widget::new());
    let recorder = Recorder::new();

    let target = Rc::downgrade(&widget);
    let late = recorder.clone();
    widget.connect_closure("ready", move |_| {
        if let Some(widget) = target.upgrade() {
            widget.connect("ready", late.clone(), "record");
        }
        Ok(())
    });

    widget.emit("ready", None).expect("connecting during emit is allowed");
    assert!(recorder.calls().is_empty(), "A slot added mid-dispatch runs from the next emit.");
    assert_eq!(widget.base().signals().slot_count("ready"), 2);
}

#[test]
fn test_properties() {
    let widget = Widget::new();
    assert_eq!(widget.property("title"), Some(Value::from("untitled")));
    assert_eq!(widget.property("colour"), None);

    widget.set_property("title", Value::from("main"));
    widget.set_property("colour", Value::from("red"));
    assert_eq!(*widget.title.borrow(), "main", "Declared fields should be written directly.");
    assert_eq!(widget.property("colour"), Some(Value::from("red")));
    assert_eq!(widget.base().dynamic_property_names(), ["colour"]);

    widget.set_property("title", Value::Int(4));
    assert_eq!(
        widget.base().dynamic_property("title"),
        Some(Value::Int(4)),
        "Values a declared field can't hold fall through to the ad hoc properties."
    );
    assert_eq!(widget.property("title"), Some(Value::from("main")));
}

#[test]
fn test_parent() {
    let parent: ObjectRef = Rc::new(Widget::new());
    let child = Widget::new();
    assert!(child.parent().is_none());

    child.set_parent(&parent);
    let found = child.parent().expect("parent is alive");
    assert!(Rc::ptr_eq(&found, &parent));

    drop(found);
    drop(parent);
    assert!(child.parent().is_none(), "The parent link shouldn't keep the parent alive.");

    let other: ObjectRef = Rc::new(Widget::new());
    let adopted = Widget { base: ObjectBase::with_parent::<Widget>(&other), ..Widget::new() };
    assert!(adopted.parent().is_some());
    adopted.base().clear_parent();
    assert!(adopted.parent().is_none());
}
