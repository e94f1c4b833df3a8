use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::Deref;
#[cfg(feature = "fs")]
use std::rc::Rc;

use super::Element;
use crate::collections::{Cursor, List};
#[cfg(feature = "fs")]
use crate::fs::FileInfo;
use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::option::OptionExtension;
use crate::value::Value;

/// A [`List`] that only ever holds values of the Rust type `T`.
///
/// The element type is fixed when the TypedList is created, so every operation takes and returns
/// `T` directly and type mismatches are ruled out at compile time instead of being reported as
/// [`WrongType`](crate::error::WrongType). Null is never stored.
///
/// Read-only List functionality is available through [`Deref<Target = List>`](Deref), where the
/// stored values are visible as [`Value`]s.
///
/// # Examples
/// ```
/// # use toolkit_core::collections::StringList;
/// let mut list = StringList::new();
/// list.append("b".to_owned());
/// list.prepend("a".to_owned());
/// assert_eq!(list.first(), Ok("a".to_owned()));
/// assert_eq!(list.index_of(&"b".to_owned(), 0), Some(1));
/// ```
pub struct TypedList<T: Element> {
    list: List,
    _phantom: PhantomData<T>,
}

/// A list of strings.
pub type StringList = TypedList<String>;

/// A list of shared [`FileInfo`]s.
#[cfg(feature = "fs")]
pub type FileInfoList = TypedList<Rc<FileInfo>>;

impl<T: Element> TypedList<T> {
    pub fn new() -> TypedList<T> {
        TypedList {
            list: List::with_type(T::declared_type()),
            _phantom: PhantomData,
        }
    }

    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> TypedList<T> {
        let mut list = TypedList::new();
        list.list.values.extend(items.into_iter().map(T::into_value));
        list
    }

    pub fn append(&mut self, item: T) {
        self.list.values.push(item.into_value());
    }

    /// Identical to [`append`](TypedList::append).
    pub fn push_back(&mut self, item: T) {
        self.append(item);
    }

    pub fn append_list(&mut self, other: &TypedList<T>) {
        self.list.values.extend_from_slice(&other.list.values);
    }

    pub fn prepend(&mut self, item: T) {
        self.list.values.insert(0, item.into_value());
    }

    /// Identical to [`prepend`](TypedList::prepend).
    pub fn push_front(&mut self, item: T) {
        self.prepend(item);
    }

    /// Inserts `item` at `index`, moving all following items right.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is greater than the number of items.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds> {
        if index > self.list.count() {
            return Err(IndexOutOfBounds {
                index,
                len: self.list.count(),
            });
        }

        self.list.values.insert(index, item.into_value());
        Ok(())
    }

    /// Returns the item at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `0 <= index < count()`.
    pub fn at(&self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.list.at(index).map(element)
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.list.get(index).map(element)
    }

    /// Returns the item at `index`, or `default` if there is no such item.
    pub fn get_value(&self, index: usize, default: T) -> T {
        self.get(index).unwrap_or(default)
    }

    pub fn first(&self) -> Result<T, EmptyCollection> {
        self.list.first().map(element)
    }

    /// Identical to [`first`](TypedList::first).
    pub fn front(&self) -> Result<T, EmptyCollection> {
        self.first()
    }

    pub fn last(&self) -> Result<T, EmptyCollection> {
        self.list.last().map(element)
    }

    /// Identical to [`last`](TypedList::last).
    pub fn back(&self) -> Result<T, EmptyCollection> {
        self.last()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.list.contains(&item.clone().into_value())
    }

    pub fn starts_with(&self, item: &T) -> bool {
        let value = item.clone().into_value();
        self.list.values.first().is_some_and(|first| *first == value)
    }

    pub fn ends_with(&self, item: &T) -> bool {
        let value = item.clone().into_value();
        self.list.values.last().is_some_and(|last| *last == value)
    }

    /// Returns the index of the first item equal to `item`, searching forward from `from`.
    pub fn index_of(&self, item: &T, from: usize) -> Option<usize> {
        self.list.position(&item.clone().into_value(), from)
    }

    /// Returns the index of the last item equal to `item`, searching backward from `from`, or
    /// from the last item if `from` is None.
    pub fn last_index_of(&self, item: &T, from: Option<usize>) -> Option<usize> {
        self.list.rposition(&item.clone().into_value(), from)
    }

    /// Replaces the item at `index` with `item`, returning the previous item.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `0 <= index < count()`.
    pub fn replace(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        self.list.check_index(index)?;

        let previous = mem::replace(&mut self.list.values[index], item.into_value());
        Ok(element(&previous))
    }

    /// Removes the first item equal to `item`, returning whether one was found.
    pub fn remove_one(&mut self, item: &T) -> bool {
        match self.index_of(item, 0) {
            Some(index) => {
                self.list.values.remove(index);
                true
            },
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        self.list.remove_at(index)
    }

    pub fn remove_first(&mut self) -> Result<(), EmptyCollection> {
        self.list.remove_first()
    }

    pub fn remove_last(&mut self) -> Result<(), EmptyCollection> {
        self.list.remove_last()
    }

    pub fn take_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.list.take_at(index).map(|value| element(&value))
    }

    pub fn take_first(&mut self) -> Result<T, EmptyCollection> {
        self.list.take_first().map(|value| element(&value))
    }

    pub fn take_last(&mut self) -> Result<T, EmptyCollection> {
        self.list.take_last().map(|value| element(&value))
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns a new TypedList with the items of self in reverse order.
    pub fn reverse(&self) -> TypedList<T> {
        TypedList {
            list: self.list.reverse(),
            _phantom: PhantomData,
        }
    }

    /// Returns a new TypedList holding the items in `start..end`, clamped to the bounds of self.
    pub fn slice(&self, start: usize, end: usize) -> TypedList<T> {
        TypedList {
            list: self.list.slice(start, end),
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over copies of the items.
    pub fn items(&self) -> impl Iterator<Item = T> + '_ {
        self.list.values.iter().map(element)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items().collect()
    }

    pub fn as_list(&self) -> &List {
        &self.list
    }

    pub fn into_list(self) -> List {
        self.list
    }
}

/// Converts a stored value back into `T`.
fn element<T: Element>(value: &Value) -> T {
    // UNREACHABLE: Only values produced by T::into_value are ever stored.
    T::from_value(value).unreachable()
}

impl<T: Element> Cursor for TypedList<T> {
    type Key<'a> = usize where Self: 'a;
    type Item<'a> = T where Self: 'a;

    fn rewind(&mut self) {
        self.list.rewind();
    }

    fn valid(&self) -> bool {
        self.list.valid()
    }

    fn current(&self) -> Option<T> {
        self.list.current().map(element)
    }

    fn key(&self) -> Option<usize> {
        self.list.key()
    }

    fn next(&mut self) {
        self.list.next();
    }
}

impl<T: Element> Deref for TypedList<T> {
    type Target = List;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl<T: Element> Default for TypedList<T> {
    fn default() -> Self {
        TypedList::new()
    }
}

impl<T: Element> Clone for TypedList<T> {
    fn clone(&self) -> Self {
        TypedList {
            list: self.list.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Element> PartialEq for TypedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Element> FromIterator<T> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TypedList::from_items(iter)
    }
}

impl<T: Element> Extend<T> for TypedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.values.extend(iter.into_iter().map(T::into_value));
    }
}

impl<T: Element> Debug for TypedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedList")
            .field("contents", &self.list.values)
            .field("type", &T::declared_type())
            .finish()
    }
}
