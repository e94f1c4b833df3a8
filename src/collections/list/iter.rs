use std::slice::Iter;
use std::vec;

use super::List;
use crate::value::Value;

/// An owned iterator over the values of a [`List`].
pub type IntoIter = vec::IntoIter<Value>;

impl IntoIterator for List {
    type Item = Value;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;

    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
