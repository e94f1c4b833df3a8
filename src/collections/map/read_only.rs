use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

use tracing::debug;

use super::Map;
use crate::collections::Cursor;
use crate::util::error::ReadOnly;
use crate::value::Value;

const CLASS: &str = "ReadOnlyMap";

/// A [`Map`] that can be read but never modified after construction, such as the parameters of a
/// request.
///
/// Every read operation is available through [`Deref<Target = Map>`](Deref). The mutating
/// operations of Map are shadowed by methods that always fail with [`ReadOnly`] and leave the
/// entries unchanged. Moving the [`Cursor`] is still allowed, because it doesn't modify the
/// entries.
///
/// # Examples
/// ```
/// # use toolkit_core::collections::{Map, ReadOnlyMap};
/// # use toolkit_core::value::Value;
/// let params = ReadOnlyMap::new(Map::from_entries([("id", Value::from("7"))], None).unwrap());
/// assert_eq!(params.find("id"), Some(&Value::from("7")));
/// assert!(params.insert("id", Value::from("8")).is_err());
/// assert_eq!(params.count(), 1);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct ReadOnlyMap {
    map: Map,
}

impl ReadOnlyMap {
    pub const fn new(map: Map) -> ReadOnlyMap {
        ReadOnlyMap {
            map,
        }
    }

    /// Fails with [`ReadOnly`].
    pub fn clear(&self) -> Result<(), ReadOnly> {
        Err(rejected("clear"))
    }

    /// Fails with [`ReadOnly`].
    pub fn erase(&self, _pos: usize) -> Result<(), ReadOnly> {
        Err(rejected("erase"))
    }

    /// Fails with [`ReadOnly`].
    pub fn insert<K: Into<String>>(&self, _key: K, _value: Value) -> Result<Option<Value>, ReadOnly> {
        Err(rejected("insert"))
    }

    /// Fails with [`ReadOnly`].
    pub fn remove(&self, _key: &str) -> Result<usize, ReadOnly> {
        Err(rejected("remove"))
    }

    /// Fails with [`ReadOnly`].
    pub fn take(&self, _key: &str) -> Result<Option<Value>, ReadOnly> {
        Err(rejected("take"))
    }

    /// Fails with [`ReadOnly`].
    pub fn set(&self, _key: Option<&str>, _value: Value) -> Result<(), ReadOnly> {
        Err(rejected("set"))
    }

    /// Fails with [`ReadOnly`].
    pub fn unset(&self, _key: &str) -> Result<bool, ReadOnly> {
        Err(rejected("unset"))
    }

    pub fn into_map(self) -> Map {
        self.map
    }
}

fn rejected(method: &'static str) -> ReadOnly {
    debug!(class = CLASS, method, "mutation rejected");
    ReadOnly {
        class: CLASS,
        method,
    }
}

impl Deref for ReadOnlyMap {
    type Target = Map;

    fn deref(&self) -> &Self::Target {
        &self.map
    }
}

impl Cursor for ReadOnlyMap {
    type Key<'a> = &'a str;
    type Item<'a> = &'a Value;

    fn rewind(&mut self) {
        self.map.rewind();
    }

    fn valid(&self) -> bool {
        self.map.valid()
    }

    fn current(&self) -> Option<&Value> {
        self.map.current()
    }

    fn key(&self) -> Option<&str> {
        self.map.key()
    }

    fn next(&mut self) {
        self.map.next();
    }
}

impl From<Map> for ReadOnlyMap {
    fn from(map: Map) -> Self {
        ReadOnlyMap::new(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ReadOnlyMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        ReadOnlyMap::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReadOnlyMap {
    type Item = (&'a str, &'a Value);

    type IntoIter = super::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl Debug for ReadOnlyMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnlyMap").field(&self.map).finish()
    }
}
