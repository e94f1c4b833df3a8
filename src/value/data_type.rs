use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::Value;

/// A set of primitive type tags, which can be combined with `|` to accept more than one kind of
/// value, e.g. `DataType::INT | DataType::FLOAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataType(u16);

impl DataType {
    pub const INT: DataType = DataType(1);
    pub const LONG: DataType = DataType(2);
    pub const BOOLEAN: DataType = DataType(4);
    pub const FLOAT: DataType = DataType(8);
    pub const DOUBLE: DataType = DataType(16);
    pub const STRING: DataType = DataType(32);
    pub const NULL: DataType = DataType(64);
    pub const ARRAY: DataType = DataType(128);
    pub const OBJECT: DataType = DataType(256);
    pub const RESOURCE: DataType = DataType(512);
    pub const UNKNOWN: DataType = DataType(1024);
    pub const MIXED: DataType = DataType(2048);

    const NAMED: [(DataType, &'static str); 10] = [
        (DataType::INT, "DataType::INT"),
        (DataType::LONG, "DataType::LONG"),
        (DataType::BOOLEAN, "DataType::BOOLEAN"),
        (DataType::FLOAT, "DataType::FLOAT"),
        (DataType::DOUBLE, "DataType::DOUBLE"),
        (DataType::STRING, "DataType::STRING"),
        (DataType::NULL, "DataType::NULL"),
        (DataType::ARRAY, "DataType::ARRAY"),
        (DataType::OBJECT, "DataType::OBJECT"),
        (DataType::RESOURCE, "DataType::RESOURCE"),
    ];

    /// Classifies `value`. Integers carry both the `INT` and `LONG` tags and floating point
    /// numbers both `FLOAT` and `DOUBLE`, as each pair names the same runtime representation.
    ///
    /// # Examples
    /// ```
    /// # use toolkit_core::value::{DataType, Value};
    /// assert!(DataType::of(&Value::Int(3)).intersects(DataType::LONG));
    /// assert_eq!(DataType::of(&Value::from("ciao")), DataType::STRING);
    /// ```
    pub const fn of(value: &Value) -> DataType {
        match value {
            Value::Null => DataType::NULL,
            Value::Bool(_) => DataType::BOOLEAN,
            Value::Int(_) => DataType(DataType::INT.0 | DataType::LONG.0),
            Value::Float(_) => DataType(DataType::FLOAT.0 | DataType::DOUBLE.0),
            Value::Str(_) => DataType::STRING,
            Value::Array(_) => DataType::ARRAY,
            Value::Object(_) => DataType::OBJECT,
        }
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: DataType) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: DataType) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the tags contained in self joined with `" or "`, or `"DataType::UNKNOWN"` when no
    /// known tag is set.
    pub fn name(self) -> String {
        let names: Vec<&str> = DataType::NAMED.iter()
            .filter(|(tag, _)| self.contains(*tag))
            .map(|(_, name)| *name)
            .collect();

        match (names.is_empty(), self.contains(DataType::MIXED)) {
            (_, true) => "DataType::MIXED".to_owned(),
            (true, false) => "DataType::UNKNOWN".to_owned(),
            (false, false) => names.join(" or "),
        }
    }
}

impl BitOr for DataType {
    type Output = DataType;

    fn bitor(self, rhs: Self) -> Self::Output {
        DataType(self.0 | rhs.0)
    }
}

impl BitOrAssign for DataType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DataType {
    type Output = DataType;

    fn bitand(self, rhs: Self) -> Self::Output {
        DataType(self.0 & rhs.0)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
