use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

use crate::collections::List;
use crate::template::{DeclaredType, Template, TypeConstraint};
use crate::util::error::{ContainerError, IndexOutOfBounds, WrongType};
use crate::util::fmt::DebugRaw;
use crate::value::{StructuralEq, Value};

/// A [`List`] with additional bulk operations for filling, erasing and counting occurrences.
///
/// Vector dereferences to List, so every List operation is available and still checks the
/// declared type. The only difference in shared behaviour is [`get`](Vector::get), which returns
/// None for an index outside of the Vector.
#[derive(Clone, Default, PartialEq)]
pub struct Vector {
    list: List,
}

impl Vector {
    pub const fn new() -> Vector {
        Vector {
            list: List::new(),
        }
    }

    pub fn with_type<T: Into<DeclaredType>>(declared: T) -> Vector {
        Vector {
            list: List::with_type(declared),
        }
    }

    /// Creates a Vector with the provided `declared` type, seeded with `values` in order.
    ///
    /// # Errors
    /// Returns [`WrongType`] if any of the values don't satisfy the declared type.
    pub fn from_values<I>(values: I, declared: Option<DeclaredType>) -> Result<Vector, WrongType>
    where
        I: IntoIterator<Item = Value>,
    {
        Ok(Vector {
            list: List::from_values(values, declared)?,
        })
    }

    /// Appends every value in `other` to self, returning self for chaining.
    ///
    /// # Errors
    /// Returns [`WrongType`] if any of the values don't satisfy the declared type, in which case
    /// none of them are appended.
    pub fn append_all(&mut self, other: &Vector) -> Result<&mut Self, WrongType> {
        self.list.append_list(&other.list)?;
        Ok(self)
    }

    /// Returns the item at `index`, or None if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.list.get(index)
    }

    /// Counts the items equal to `value`.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type.
    pub fn count_of(&self, value: &Value) -> Result<usize, WrongType> {
        self.list.check_type(value)?;
        Ok(self.list.iter().filter(|item| *item == value).count())
    }

    /// Removes the items in `start..end`. An `end` of None removes only the item at `start`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `start` is out of bounds or `end` is past the end of the
    /// Vector. An empty range removes nothing.
    pub fn erase(&mut self, start: usize, end: Option<usize>) -> Result<(), IndexOutOfBounds> {
        self.list.check_index(start)?;

        let end = end.unwrap_or(start + 1);
        if end > self.list.count() {
            return Err(IndexOutOfBounds {
                index: end,
                len: self.list.count(),
            });
        }

        if start < end {
            self.list.values.drain(start..end);
        }
        Ok(())
    }

    /// Replaces the contents of the Vector with `size` copies of `value`. A `size` of None keeps
    /// the current number of items.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::collections::Vector;
    /// # use toolkit_core::value::Value;
    /// let mut vec = Vector::new();
    /// vec.fill(Value::from("a"), Some(3)).unwrap();
    /// assert_eq!(vec.count(), 3);
    /// vec.fill(Value::Int(0), None).unwrap();
    /// assert_eq!(&**vec, &[Value::Int(0), Value::Int(0), Value::Int(0)]);
    /// ```
    pub fn fill(&mut self, value: Value, size: Option<usize>) -> Result<&mut Self, WrongType> {
        self.list.check_type(&value)?;

        let size = size.unwrap_or(self.list.count());
        self.list.values = vec![value; size];
        Ok(self)
    }

    /// Inserts `count` copies of `value` at `index`.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, or
    /// [`IndexOutOfBounds`] if `index` is greater than the number of items.
    pub fn insert_n(
        &mut self,
        index: usize,
        value: Value,
        count: usize,
    ) -> Result<(), ContainerError> {
        self.list.check_type(&value)?;
        if index > self.list.count() {
            return Err(IndexOutOfBounds {
                index,
                len: self.list.count(),
            }.into());
        }

        self.list.values.splice(index..index, std::iter::repeat_n(value, count));
        Ok(())
    }

    /// Removes up to `count` items starting at `index`, returning the number removed.
    pub fn remove_n(&mut self, index: usize, count: usize) -> usize {
        let len = self.list.count();
        let start = cmp::min(index, len);
        let end = cmp::min(start.saturating_add(count), len);

        self.list.values.drain(start..end);
        end - start
    }

    /// Structural comparison of the items of both Vectors, in order.
    pub fn equals(&self, other: &Vector) -> bool {
        self.list.values.structural_eq(&other.list.values)
    }

    pub fn into_list(self) -> List {
        self.list
    }
}

impl Template for Vector {
    fn constraint(&self) -> &TypeConstraint {
        self.list.constraint()
    }

    fn constraint_mut(&mut self) -> &mut TypeConstraint {
        self.list.constraint_mut()
    }
}

impl Deref for Vector {
    type Target = List;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for Vector {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}

impl From<List> for Vector {
    fn from(list: List) -> Self {
        Vector {
            list,
        }
    }
}

impl FromIterator<Value> for Vector {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Vector {
            list: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Vector {
    type Item = Value;

    type IntoIter = crate::collections::list::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl Debug for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.list.values)
            .field("type", &DebugRaw(self.list.constraint.describe()))
            .finish()
    }
}
