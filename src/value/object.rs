use std::any::{self, Any};
use std::fmt::Debug;
use std::rc::Rc;

use super::{StructuralEq, Value};

/// A shared handle to a runtime-classed object stored inside a [`Value`].
pub type ObjectRef = Rc<dyn Object>;

/// Conversion helpers that let a `dyn Object` be downcast to its concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

/// An object with a runtime class name, that can be stored in a [`Value`].
///
/// Types opt in to field-wise behaviour by listing their fields explicitly in
/// [`fields`](Object::fields), which drives both [`equals`](Object::equals) and the JSON dump.
/// Objects with interior mutability can be modified in place while they are held by a container.
pub trait Object: AsAny + Debug {
    /// The exact class name of this object. Type constraints compare against this name without
    /// considering any other relationship between types.
    fn class_name(&self) -> &str {
        any::type_name::<Self>()
    }

    /// The declared fields of this object, in declaration order.
    fn fields(&self) -> Vec<(&str, Value)> {
        Vec::new()
    }

    /// Structural equality: both objects share a class name and all of their declared fields
    /// are [`StructuralEq`].
    fn equals(&self, other: &dyn Object) -> bool {
        if self.class_name() != other.class_name() {
            return false;
        }

        let lhs = self.fields();
        let rhs = other.fields();

        lhs.len() == rhs.len()
            && lhs.iter().zip(rhs.iter()).all(|((l_name, l_value), (r_name, r_value))| {
                l_name == r_name && l_value.structural_eq(r_value)
            })
    }
}

/// Returns the class name that [`Object::class_name`] reports by default for `T`, for use when
/// declaring a container's type.
pub fn class_name_of<T: Object>() -> &'static str {
    any::type_name::<T>()
}

/// Downcasts a shared object handle to its concrete type.
pub fn downcast_rc<T: Object>(object: &ObjectRef) -> Option<Rc<T>> {
    AsAny::into_any_rc(Rc::clone(object)).downcast::<T>().ok()
}

/// Returns the part of `class_name` after the last path separator.
pub fn short_name(class_name: &str) -> &str {
    // Generic parameters may contain their own paths.
    let base = class_name.split('<').next().unwrap_or(class_name);
    base.rsplit("::").next().unwrap_or(base)
}
