use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{IntoIter, Iter, Keys, Values};
use crate::collections::{Cursor, List};
use crate::template::{DeclaredType, Template, TypeConstraint};
use crate::util::error::{ContainerError, IndexOutOfBounds, KeyOverflow, WrongType};
use crate::util::fmt::DebugRaw;
use crate::value::{DataType, Value};

/// A map of string keys to [`Value`]s which enforces its [`TypeConstraint`] on every value that
/// is stored.
///
/// Entries are kept in insertion order. Replacing the value of an existing key keeps the
/// position of that key, while removing an entry moves every following entry one position
/// forward, so positions are always `0..count()`.
///
/// Keys themselves are never type checked.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Map.
///
/// | Method | Complexity |
/// |-|-|
/// | `count` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `find` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(n)` |
/// | `erase` | `O(n)` |
/// | `get_key` | `O(n)` |
///
/// \* Lookups go through a hashed index of the keys. Growing that index or the entry storage
/// takes `O(n)`.
#[derive(Clone, Default)]
pub struct Map {
    pub(crate) entries: Vec<(String, Value)>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) constraint: TypeConstraint,
    pub(crate) pos: usize,
}

impl Map {
    /// Creates a new, empty Map which accepts values of any type.
    pub fn new() -> Map {
        Map::default()
    }

    /// Creates a new, empty Map which only accepts values of the `declared` type.
    pub fn with_type<T: Into<DeclaredType>>(declared: T) -> Map {
        Map {
            constraint: TypeConstraint::of(declared),
            ..Map::default()
        }
    }

    /// Creates a Map with the provided `declared` type, seeded with `entries` in order. Later
    /// entries replace earlier ones with the same key.
    ///
    /// # Errors
    /// Returns [`WrongType`] if any of the values don't satisfy the declared type.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::collections::Map;
    /// # use toolkit_core::value::{DataType, Value};
    /// let map = Map::from_entries([("a", Value::Int(1)), ("b", Value::Int(2))], None).unwrap();
    /// assert_eq!(map.find("b"), Some(&Value::Int(2)));
    ///
    /// let typed = Map::from_entries([("a", Value::from("x"))], Some(DataType::INT.into()));
    /// assert!(typed.is_err());
    /// ```
    pub fn from_entries<I, K>(entries: I, declared: Option<DeclaredType>) -> Result<Map, WrongType>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut map = Map {
            constraint: TypeConstraint::new(declared),
            ..Map::default()
        };

        for (key, value) in entries {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Removes all entries from the Map.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns true if the Map contains an entry with the provided `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Identical to [`contains`](Map::contains).
    pub fn exists(&self, key: &str) -> bool {
        self.contains(key)
    }

    /// Returns the number of entries in the Map.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Identical to [`count`](Map::count).
    pub fn size(&self) -> usize {
        self.count()
    }

    /// Identical to [`count`](Map::count).
    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes the entry at position `pos`, in insertion order.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `0 <= pos < count()`.
    pub fn erase(&mut self, pos: usize) -> Result<(), IndexOutOfBounds> {
        if pos >= self.entries.len() {
            return Err(IndexOutOfBounds {
                index: pos,
                len: self.entries.len(),
            });
        }

        self.remove_position(pos);
        Ok(())
    }

    /// Returns the value associated with `key`.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|pos| &self.entries[*pos].1)
    }

    /// Identical to [`find`](Map::find).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.find(key)
    }

    /// Associates `value` with `key`. If `key` was already present, its value is replaced and the
    /// previous value returned, without changing the position of the entry.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, leaving the Map
    /// unchanged.
    pub fn insert<K: Into<String>>(
        &mut self,
        key: K,
        value: Value,
    ) -> Result<Option<Value>, WrongType> {
        self.check_type(&value)?;

        let key = key.into();
        match self.index.get(&key) {
            Some(pos) => Ok(Some(mem::replace(&mut self.entries[*pos].1, value))),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                Ok(None)
            },
        }
    }

    /// Writes `value` at `key`. A `key` of None stores the value under the next integer key, one
    /// greater than the largest integer key already present (or `"0"`).
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type, or [`KeyOverflow`] if
    /// `key` is None and the largest integer key is [`i64::MAX`]. The Map is unchanged in both
    /// cases.
    pub fn set(&mut self, key: Option<&str>, value: Value) -> Result<(), ContainerError> {
        self.check_type(&value)?;

        let key = match key {
            Some(key) => key.to_owned(),
            None => self.next_integer_key()?.to_string(),
        };

        self.insert(key, value)?;
        Ok(())
    }

    /// Returns the key of the first entry whose value is equal to `value`, or `default` if there
    /// is none.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `value` doesn't satisfy the declared type.
    pub fn get_key<'a>(
        &'a self,
        value: &Value,
        default: Option<&'a str>,
    ) -> Result<Option<&'a str>, WrongType> {
        self.check_type(value)?;

        Ok(
            self.entries.iter()
                .find(|(_, item)| item == value)
                .map(|(key, _)| key.as_str())
                .or(default)
        )
    }

    /// Returns a new, untyped List containing every key, in insertion order.
    pub fn keys(&self) -> List {
        self.iter_keys().map(Value::from).collect()
    }

    /// Identical to [`keys`](Map::keys), as keys are always unique.
    pub fn unique_keys(&self) -> List {
        self.keys()
    }

    /// Returns a snapshot of every value, in insertion order.
    pub fn values(&self) -> Vec<Value> {
        self.iter_values().cloned().collect()
    }

    /// Removes the entry associated with `key`, returning the number of entries removed (1 or 0).
    pub fn remove(&mut self, key: &str) -> usize {
        usize::from(self.take(key).is_some())
    }

    /// Removes the entry associated with `key` and returns its value.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        let pos = *self.index.get(key)?;
        Some(self.remove_position(pos))
    }

    /// Removes the entry associated with `key`, returning whether there was one.
    pub fn unset(&mut self, key: &str) -> bool {
        self.remove(key) == 1
    }

    /// Returns a copy of the value associated with `key`, or `default` if there is no such value
    /// or it is null.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `default` doesn't satisfy the declared type.
    pub fn get_value(&self, key: &str, default: Value) -> Result<Value, WrongType> {
        self.check_type(&default)?;

        match self.find(key) {
            Some(value) if !value.is_null() => Ok(value.clone()),
            _ => Ok(default),
        }
    }

    /// Returns the value associated with `key` converted to `target`, or `default` if there is no
    /// such value or it is null. The default is returned as is.
    ///
    /// # Errors
    /// Returns [`WrongType`] if `default` doesn't satisfy the declared type.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::collections::Map;
    /// # use toolkit_core::value::{DataType, Value};
    /// let map = Map::from_entries([("page", Value::from("3"))], None).unwrap();
    /// assert_eq!(map.get_value_by_type("page", DataType::INT, Value::Int(1)), Ok(Value::Int(3)));
    /// assert_eq!(map.get_value_by_type("size", DataType::INT, Value::Int(10)), Ok(Value::Int(10)));
    /// ```
    pub fn get_value_by_type(
        &self,
        key: &str,
        target: DataType,
        default: Value,
    ) -> Result<Value, WrongType> {
        self.check_type(&default)?;

        match self.find(key) {
            Some(value) if !value.is_null() => Ok(value.convert(target)),
            _ => Ok(default),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn iter_keys(&self) -> Keys<'_> {
        Keys(self.iter())
    }

    pub fn iter_values(&self) -> Values<'_> {
        Values(self.iter())
    }

    pub fn into_entries(self) -> Vec<(String, Value)> {
        self.entries
    }

    fn remove_position(&mut self, pos: usize) -> Value {
        let (key, value) = self.entries.remove(pos);
        self.index.remove(&key);

        for (offset, (key, _)) in self.entries[pos..].iter().enumerate() {
            if let Some(slot) = self.index.get_mut(key.as_str()) {
                *slot = pos + offset;
            }
        }

        value
    }

    fn next_integer_key(&self) -> Result<i64, KeyOverflow> {
        match self.entries.iter().filter_map(|(key, _)| key.parse::<i64>().ok()).max() {
            Some(max) => max.checked_add(1).ok_or(KeyOverflow { max }),
            None => Ok(0),
        }
    }
}

impl Template for Map {
    fn constraint(&self) -> &TypeConstraint {
        &self.constraint
    }

    fn constraint_mut(&mut self) -> &mut TypeConstraint {
        &mut self.constraint
    }
}

impl Cursor for Map {
    type Key<'a> = &'a str;
    type Item<'a> = &'a Value;

    fn rewind(&mut self) {
        self.pos = 0;
    }

    fn valid(&self) -> bool {
        self.pos < self.entries.len()
    }

    fn current(&self) -> Option<&Value> {
        self.entries.get(self.pos).map(|(_, value)| value)
    }

    fn key(&self) -> Option<&str> {
        self.entries.get(self.pos).map(|(key, _)| key.as_str())
    }

    fn next(&mut self) {
        self.pos += 1;
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a Value);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects into an untyped Map. Later entries replace earlier ones with the same key.
impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            let key = key.into();
            match map.index.get(&key) {
                Some(pos) => map.entries[*pos].1 = value,
                None => {
                    map.index.insert(key.clone(), map.entries.len());
                    map.entries.push((key, value));
                },
            }
        }
        map
    }
}

/// Two Maps are equal if they hold the same keys with equal values, regardless of order.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count()
            && self.iter().all(|(key, value)| other.find(key) == Some(value))
    }
}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("contents", &DebugEntries(self))
            .field("type", &DebugRaw(self.constraint.describe()))
            .finish()
    }
}

struct DebugEntries<'a>(&'a Map);

impl Debug for DebugEntries<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
