use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{List, Map, ReadOnlyMap, TypedList, Vector};
use super::typed::Element;

/// Serializes as a JSON array of the items, in order.
impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (**self).serialize(serializer)
    }
}

impl<T: Element> Serialize for TypedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_list().serialize(serializer)
    }
}

/// Serializes as a JSON object, with entries in insertion order.
impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.count()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for ReadOnlyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (**self).serialize(serializer)
    }
}

macro_rules! impl_to_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Dumps self as a compact JSON string.
                ///
                /// # Errors
                /// Returns the error reported by [`serde_json`], if any.
                pub fn to_json(&self) -> serde_json::Result<String> {
                    serde_json::to_string(self)
                }

                /// Dumps self as an indented JSON string.
                ///
                /// # Errors
                /// Returns the error reported by [`serde_json`], if any.
                pub fn to_json_pretty(&self) -> serde_json::Result<String> {
                    serde_json::to_string_pretty(self)
                }
            }
        )*
    };
}

impl_to_json!(List, Vector, Map, ReadOnlyMap);
