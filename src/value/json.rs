use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Object, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Str(value) => serializer.serialize_str(value),
            Value::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            },
            Value::Object(object) => serialize_object(object.as_ref(), serializer),
        }
    }
}

impl Value {
    /// Dumps self as a compact JSON string. Objects are dumped as a map of their declared fields.
    ///
    /// # Errors
    /// Returns the error reported by [`serde_json`], if any.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::value::Value;
    /// let value = Value::from(vec![Value::Int(1), Value::from("a"), Value::Null]);
    /// assert_eq!(value.to_json().unwrap(), r#"[1,"a",null]"#);
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Dumps an object as a map of its declared fields, recursing into nested objects.
fn serialize_object<S: Serializer>(
    object: &dyn Object,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let fields = object.fields();
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for (name, value) in &fields {
        map.serialize_entry(name, value)?;
    }
    map.end()
}
