use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, Index};

use crate::collections::Cursor;
use crate::template::{DeclaredType, Template, TypeConstraint};
use crate::util::error::{
    ContainerError, EmptyCollection, IndexOutOfBounds, ValueNotFound, WrongType,
};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;
use crate::value::Value;

/// An ordered, index-addressable collection of [`Value`]s that enforces its
/// [`TypeConstraint`] on every insertion.
///
/// Positions are always compact: removing an element shifts every following element left, so
/// valid indices are exactly `0..count()`. The declared type can be changed with
/// [`set_type`](Template::set_type), but elements that were already stored are not checked
/// again.
///
/// List implements [`Deref<Target = [Value]>`](Deref), which provides borrowed iteration and
/// the other read-only slice methods. There is no mutable access to the stored values because
/// that would bypass the constraint, use [`replace`](List::replace) instead. Objects with
/// interior mutability can still be modified in place through a shared reference.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `append` | `O(1)`* |
/// | `prepend` | `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove_at` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// \* Amortized, when the backing storage has to grow `append` takes `O(n)`.
#[derive(Clone, Default)]
pub struct List {
    pub(crate) values: Vec<Value>,
    pub(crate) constraint: TypeConstraint,
    pub(crate) pos: usize,
}

impl List {
    /// Creates a new, empty List which accepts values of any type.
    pub const fn new() -> List {
        List {
            values: Vec::new(),
            constraint: TypeConstraint::any(),
            pos: 0,
        }
    }

    /// Creates a new, empty List which only accepts values of the `declared` type.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::collections::List;
    /// # use toolkit_core::value::{DataType, Value};
    /// let mut list = List::with_type(DataType::STRING);
    /// assert!(list.append(Value::from("ciao")).is_ok());
    /// assert!(list.append(Value::Int(1)).is_err());
    /// assert_eq!(list.count(), 1);
    /// ```
    pub fn with_type<T: Into<DeclaredType>>(declared: T) -> List {
        List {
            values: Vec::new(),
            constraint: TypeConstraint::of(declared),
            pos: 0,
        }
    }

    /// Creates a List with the provided `declared` type, seeded with `values` in order.
    ///
    /// # Errors
    /// Returns [`WrongType`] if any of the values don't satisfy the declared type.
    pub fn from_values<I>(values: I, declared: Option<DeclaredType>) -> Result<List, WrongType>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut list = List {
            values: Vec::new(),
            constraint: TypeConstraint::new(declared),
            pos: 0,
        };
        list.append_all(values)?;
        Ok(list)
    }

    /// Returns the number of items in the List.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Identical to [`count`](List::count).
    pub fn size(&self) -> usize {
        self.count()
    }

    /// Identical to [`count`](List::count).
    pub fn length(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Inserts `value` at the end of the List.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, leaving the List
    /// unchanged.
    pub fn append(&mut self, value: Value) -> Result<(), WrongType> {
        self.check_type(&value)?;
        self.values.push(value);
        Ok(())
    }

    /// Identical to [`append`](List::append).
    pub fn push_back(&mut self, value: Value) -> Result<(), WrongType> {
        self.append(value)
    }

    /// Inserts all `values` at the end of the List, in order.
    ///
    /// # Errors
    /// Returns [`WrongType`] if any of the values don't satisfy the declared type. In that case
    /// none of the values are appended.
    pub fn append_all<I>(&mut self, values: I) -> Result<(), WrongType>
    where
        I: IntoIterator<Item = Value>,
    {
        let values: Vec<Value> = values.into_iter().collect();
        for value in &values {
            self.check_type(value)?;
        }

        self.values.extend(values);
        Ok(())
    }

    /// Appends a copy of every item in `other`. The values are only checked if `other` has a
    /// different declared type.
    ///
    /// # Errors
    /// Returns [`WrongType`] if any of the values don't satisfy the declared type, in which case
    /// none of them are appended.
    pub fn append_list(&mut self, other: &List) -> Result<(), WrongType> {
        if other.constraint == self.constraint {
            self.values.extend(other.values.iter().cloned());
            return Ok(());
        }

        self.append_all(other.values.iter().cloned())
    }

    /// Inserts `value` at the beginning of the List.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type.
    pub fn prepend(&mut self, value: Value) -> Result<(), WrongType> {
        self.check_type(&value)?;
        self.values.insert(0, value);
        Ok(())
    }

    /// Identical to [`prepend`](List::prepend).
    pub fn push_front(&mut self, value: Value) -> Result<(), WrongType> {
        self.prepend(value)
    }

    /// Inserts `value` at `index`, moving all following items right. An `index` of
    /// [`count`](List::count) appends the value.
    ///
    /// # Errors
    /// Returns [`WrongType`] before checking the index, then [`IndexOutOfBounds`] if `index` is
    /// greater than the number of items.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::collections::List;
    /// # use toolkit_core::value::Value;
    /// let mut list: List = (0..3).map(Value::from).collect();
    /// list.insert(1, Value::Int(100)).unwrap();
    /// list.insert(4, Value::Int(200)).unwrap();
    /// assert_eq!(&*list, &[0, 100, 1, 2, 200].map(Value::from));
    /// assert!(list.insert(9, Value::Int(1)).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: Value) -> Result<(), ContainerError> {
        self.check_type(&value)?;
        if index > self.values.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.values.len(),
            }.into());
        }

        self.values.insert(index, value);
        Ok(())
    }

    /// Returns a reference to the item at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `0 <= index < count()`.
    pub fn at(&self, index: usize) -> Result<&Value, IndexOutOfBounds> {
        self.values.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.values.len(),
        })
    }

    /// Returns a reference to the item at `index`, or None if there is no such item.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns true if there is an item at `index`.
    pub fn exists(&self, index: usize) -> bool {
        index < self.values.len()
    }

    /// Returns the item at `index`, substituting `default` if the stored item is null.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `0 <= index < count()`.
    pub fn get_value(&self, index: usize, default: Value) -> Result<Value, IndexOutOfBounds> {
        match self.at(index)? {
            Value::Null => Ok(default),
            value => Ok(value.clone()),
        }
    }

    /// Returns a reference to the first item.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the List is empty.
    pub fn first(&self) -> Result<&Value, EmptyCollection> {
        self.values.first().ok_or(EmptyCollection)
    }

    /// Identical to [`first`](List::first).
    pub fn front(&self) -> Result<&Value, EmptyCollection> {
        self.first()
    }

    /// Returns a reference to the last item.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the List is empty.
    pub fn last(&self) -> Result<&Value, EmptyCollection> {
        self.values.last().ok_or(EmptyCollection)
    }

    /// Identical to [`last`](List::last).
    pub fn back(&self) -> Result<&Value, EmptyCollection> {
        self.last()
    }

    /// Removes all items from the List.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns true if the List contains an item equal to `value`.
    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|item| item == value)
    }

    /// Returns true if the List is not empty and its first item is equal to `value`.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type.
    pub fn starts_with(&self, value: &Value) -> Result<bool, WrongType> {
        self.check_type(value)?;
        Ok(self.values.first().is_some_and(|item| item == value))
    }

    /// Returns true if the List is not empty and its last item is equal to `value`.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type.
    pub fn ends_with(&self, value: &Value) -> Result<bool, WrongType> {
        self.check_type(value)?;
        Ok(self.values.last().is_some_and(|item| item == value))
    }

    /// Returns the index of the first item equal to `value`, searching forward from `from`.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, as no stored item
    /// could match it.
    pub fn index_of(&self, value: &Value, from: usize) -> Result<Option<usize>, WrongType> {
        self.check_type(value)?;
        Ok(self.position(value, from))
    }

    /// Returns the index of the last item equal to `value`, searching backward from `from`. A
    /// `from` of None, or one past the end, starts the search at the last item.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::collections::List;
    /// # use toolkit_core::value::Value;
    /// let list: List = [1, 2, 1, 2].map(Value::from).into_iter().collect();
    /// assert_eq!(list.last_index_of(&Value::Int(1), None), Ok(Some(2)));
    /// assert_eq!(list.last_index_of(&Value::Int(1), Some(1)), Ok(Some(0)));
    /// assert_eq!(list.last_index_of(&Value::Int(3), None), Ok(None));
    /// ```
    pub fn last_index_of(
        &self,
        value: &Value,
        from: Option<usize>,
    ) -> Result<Option<usize>, WrongType> {
        self.check_type(value)?;
        Ok(self.rposition(value, from))
    }

    /// Moves the item at index `from` to index `to`, shifting the items in between.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if either index is out of bounds.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), IndexOutOfBounds> {
        self.check_index(from)?;
        self.check_index(to)?;

        let value = self.values.remove(from);
        self.values.insert(to, value);
        Ok(())
    }

    /// Replaces the item at `index` with `value`, returning the previous item.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, or
    /// [`IndexOutOfBounds`] unless `0 <= index < count()`.
    pub fn replace(&mut self, index: usize, value: Value) -> Result<Value, ContainerError> {
        self.check_type(&value)?;
        self.check_index(index)?;

        Ok(mem::replace(&mut self.values[index], value))
    }

    /// Writes `value` at `offset`, or appends it if `offset` is None or equal to
    /// [`count`](List::count).
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, or
    /// [`IndexOutOfBounds`] if `offset` is past the end of the List.
    pub fn set(&mut self, offset: Option<usize>, value: Value) -> Result<(), ContainerError> {
        match offset {
            Some(index) if index < self.values.len() => {
                self.replace(index, value)?;
                Ok(())
            },
            Some(index) if index > self.values.len() => Err(IndexOutOfBounds {
                index,
                len: self.values.len(),
            }.into()),
            _ => Ok(self.append(value)?),
        }
    }

    /// Removes the item at `index` if there is one, returning whether an item was removed.
    pub fn unset(&mut self, index: usize) -> bool {
        self.take_at(index).is_ok()
    }

    /// Removes the item at `index`, moving all following items left.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `0 <= index < count()`.
    pub fn remove_at(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        self.take_at(index).map(drop)
    }

    /// Removes the first item.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the List is empty.
    pub fn remove_first(&mut self) -> Result<(), EmptyCollection> {
        self.take_first().map(drop)
    }

    /// Removes the last item.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the List is empty.
    pub fn remove_last(&mut self) -> Result<(), EmptyCollection> {
        self.take_last().map(drop)
    }

    /// Removes the first item equal to `value`.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, or [`ValueNotFound`]
    /// if no item is equal to it.
    pub fn remove_one(&mut self, value: &Value) -> Result<(), ContainerError> {
        let index = self.index_of(value, 0)?.ok_or(ValueNotFound)?;
        self.values.remove(index);
        Ok(())
    }

    /// Removes the item at `index` and returns it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `0 <= index < count()`.
    pub fn take_at(&mut self, index: usize) -> Result<Value, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.values.remove(index))
    }

    /// Removes the first item and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the List is empty.
    pub fn take_first(&mut self) -> Result<Value, EmptyCollection> {
        if self.values.is_empty() {
            return Err(EmptyCollection);
        }

        Ok(self.values.remove(0))
    }

    /// Removes the last item and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the List is empty.
    pub fn take_last(&mut self) -> Result<Value, EmptyCollection> {
        self.values.pop().ok_or(EmptyCollection)
    }

    /// Identical to [`take_last`](List::take_last).
    pub fn pop_back(&mut self) -> Result<Value, EmptyCollection> {
        self.take_last()
    }

    /// Identical to [`take_first`](List::take_first).
    pub fn pop_front(&mut self) -> Result<Value, EmptyCollection> {
        self.take_first()
    }

    /// Returns a new List with the same declared type and the items of self in reverse order.
    /// Self is left unchanged.
    pub fn reverse(&self) -> List {
        List {
            values: self.values.iter().rev().cloned().collect(),
            constraint: self.constraint.clone(),
            pos: 0,
        }
    }

    /// Returns a new List with the same declared type, holding the items in `start..end`. Both
    /// bounds are clamped to the length of the List.
    pub fn slice(&self, start: usize, end: usize) -> List {
        let end = cmp::min(end, self.values.len());
        let start = cmp::min(start, end);

        List {
            values: self.values[start..end].to_vec(),
            constraint: self.constraint.clone(),
            pos: 0,
        }
    }

    /// Returns a copy of the stored items.
    pub fn to_vec(&self) -> Vec<Value> {
        self.values.clone()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }

    pub(crate) fn position(&self, value: &Value, from: usize) -> Option<usize> {
        self.values.iter()
            .enumerate()
            .skip(from)
            .find(|(_, item)| *item == value)
            .map(|(index, _)| index)
    }

    pub(crate) fn rposition(&self, value: &Value, from: Option<usize>) -> Option<usize> {
        let end = match from {
            Some(from) => cmp::min(from.saturating_add(1), self.values.len()),
            None => self.values.len(),
        };

        self.values[..end].iter().rposition(|item| item == value)
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.values.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.values.len(),
            });
        }

        Ok(())
    }
}

impl Template for List {
    fn constraint(&self) -> &TypeConstraint {
        &self.constraint
    }

    fn constraint_mut(&mut self) -> &mut TypeConstraint {
        &mut self.constraint
    }
}

impl Cursor for List {
    type Key<'a> = usize;
    type Item<'a> = &'a Value;

    fn rewind(&mut self) {
        self.pos = 0;
    }

    fn valid(&self) -> bool {
        self.pos < self.values.len()
    }

    fn current(&self) -> Option<&Value> {
        self.values.get(self.pos)
    }

    fn key(&self) -> Option<usize> {
        self.valid().then_some(self.pos)
    }

    fn next(&mut self) {
        self.pos += 1;
    }
}

impl Deref for List {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl AsRef<[Value]> for List {
    fn as_ref(&self) -> &[Value] {
        self
    }
}

impl Index<usize> for List {
    type Output = Value;

    /// # Panics
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).throw()
    }
}

/// Collects into an untyped List.
impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List {
            values: iter.into_iter().collect(),
            constraint: TypeConstraint::any(),
            pos: 0,
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Debug for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("contents", &self.values)
            .field("type", &DebugRaw(self.constraint.describe()))
            .finish()
    }
}
