#![cfg(test)]

use super::*;
use crate::collections::{Cursor, List};
use crate::template::{DeclaredType, Template};
use crate::util::error::{ContainerError, IndexOutOfBounds, KeyOverflow, ReadOnly};
use crate::util::fixture::{self, Person};
use crate::value::{DataType, Value};

fn letters() -> Map {
    Map::from_entries(
        [("a", Value::Int(1)), ("b", Value::Int(2)), ("c", Value::Int(3))],
        None,
    ).expect("untyped")
}

#[test]
fn test_insert_last_write_wins() {
    let mut map = Map::with_type(DataType::INT);
    assert_eq!(map.insert("k", Value::Int(1)), Ok(None));
    assert_eq!(map.count(), 1);

    assert_eq!(map.insert("k", Value::Int(2)), Ok(Some(Value::Int(1))));
    assert_eq!(map.count(), 1, "Replacing a value shouldn't add an entry.");
    assert_eq!(map.get_value("k", Value::Null), Ok(Value::Int(2)));
}

#[test]
fn test_insert_type_checked() {
    let mut map = Map::with_type(DeclaredType::class::<Person>());
    map.insert("first", Value::object(Person::random())).expect("a Person should be accepted");

    let error = map.insert("second", Value::from("ciao")).expect_err("strings are rejected");
    assert_eq!(error.given, "string");
    assert!(!map.contains("second"));
    assert_eq!(map.count(), 1);

    assert!(map.insert("third", Value::Null).is_ok(), "Null should always be accepted.");
}

#[test]
fn test_from_entries() {
    let map = Map::from_entries([("a", Value::Int(1)), ("a", Value::Int(5))], None)
        .expect("untyped");
    assert_eq!(map.count(), 1);
    assert_eq!(map.find("a"), Some(&Value::Int(5)));

    let typed = Map::from_entries(
        fixture::people(3).into_iter().enumerate().map(|(i, p)| (i.to_string(), p)),
        Some(DeclaredType::class::<Person>()),
    ).expect("all people");
    assert_eq!(typed.count(), 3);

    assert!(Map::from_entries([("a", Value::Int(1))], Some(DataType::STRING.into())).is_err());
}

#[test]
fn test_find_and_get_value() {
    let map = letters();
    assert_eq!(map.find("b"), Some(&Value::Int(2)));
    assert_eq!(map.find("z"), None);
    assert_eq!(map.get("z"), None);

    assert_eq!(map.get_value("z", Value::Null), Ok(Value::Null));
    assert_eq!(map.get_value("z", Value::Int(9)), Ok(Value::Int(9)));

    let mut nullable = letters();
    nullable.insert("n", Value::Null).expect("untyped");
    assert_eq!(
        nullable.get_value("n", Value::Int(5)),
        Ok(Value::Int(5)),
        "A stored null should give back the default."
    );
    assert_eq!(nullable.get_value("n", Value::Null), Ok(Value::Null));

    let typed = Map::with_type(DataType::INT);
    assert!(
        typed.get_value("z", Value::from("x")).is_err(),
        "The default has to satisfy the declared type."
    );
}

#[test]
fn test_get_value_by_type() {
    let map = Map::from_entries(
        [("n", Value::from("12")), ("flag", Value::from("")), ("nothing", Value::Null)],
        None,
    ).expect("untyped");

    assert_eq!(map.get_value_by_type("n", DataType::INT, Value::Null), Ok(Value::Int(12)));
    assert_eq!(map.get_value_by_type("n", DataType::FLOAT, Value::Null), Ok(Value::Float(12.0)));
    assert_eq!(
        map.get_value_by_type("flag", DataType::BOOLEAN, Value::Null),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        map.get_value_by_type("nothing", DataType::INT, Value::from("d")),
        Ok(Value::from("d")),
        "A null value should give back the default unconverted."
    );
    assert_eq!(map.get_value_by_type("missing", DataType::INT, Value::Int(3)), Ok(Value::Int(3)));
}

#[test]
fn test_remove() {
    let mut map = letters();
    assert_eq!(map.remove("b"), 1);
    assert_eq!(map.remove("b"), 0, "Removing a missing key shouldn't fail.");
    assert_eq!(map.count(), 2);
    assert!(!map.contains("b"));
    assert_eq!(map.find("c"), Some(&Value::Int(3)));

    assert!(map.unset("a"));
    assert!(!map.unset("a"));
    assert_eq!(map.keys(), List::from_values([Value::from("c")], None).expect("untyped"));
}

#[test]
fn test_take() {
    let mut map = letters();
    assert_eq!(map.take("a"), Some(Value::Int(1)));
    assert_eq!(map.take("a"), None);
    assert_eq!(map.count(), 2);
    assert_eq!(map.find("b"), Some(&Value::Int(2)));
}

#[test]
fn test_erase() {
    let mut map = letters();
    map.erase(1).expect("in range");
    assert_eq!(map.iter_keys().collect::<Vec<_>>(), ["a", "c"]);
    assert_eq!(map.find("c"), Some(&Value::Int(3)), "Lookups should survive the shift.");

    assert_eq!(map.erase(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
}

#[test]
fn test_get_key() {
    let map = letters();
    assert_eq!(map.get_key(&Value::Int(2), None), Ok(Some("b")));
    assert_eq!(map.get_key(&Value::Float(3.0), None), Ok(Some("c")));
    assert_eq!(map.get_key(&Value::Int(7), Some("none")), Ok(Some("none")));
    assert_eq!(map.get_key(&Value::Int(7), None), Ok(None));

    let typed = Map::with_type(DataType::INT);
    assert!(typed.get_key(&Value::from("x"), None).is_err());
}

#[test]
fn test_keys_and_values() {
    let mut map = letters();
    map.insert("a", Value::Int(10)).expect("untyped");

    let keys = map.keys();
    assert_eq!(keys.get_type(), None, "The key List should be untyped.");
    assert_eq!(&*keys, &[Value::from("a"), Value::from("b"), Value::from("c")]);
    assert_eq!(map.unique_keys(), keys);

    assert_eq!(map.values(), vec![Value::Int(10), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_set() {
    let mut map = Map::new();
    map.set(None, Value::from("x")).expect("untyped");
    map.set(None, Value::from("y")).expect("untyped");
    map.set(Some("name"), Value::from("z")).expect("untyped");
    map.set(Some("7"), Value::from("w")).expect("untyped");
    map.set(None, Value::from("v")).expect("untyped");

    assert_eq!(map.iter_keys().collect::<Vec<_>>(), ["0", "1", "name", "7", "8"]);

    let mut typed = Map::with_type(DataType::STRING);
    assert!(matches!(
        typed.set(Some("k"), Value::Int(1)),
        Err(ContainerError::WrongType(_))
    ));
    assert!(typed.is_empty());
}

#[test]
fn test_set_without_next_integer_key() {
    let mut map = Map::new();
    map.insert(i64::MAX.to_string(), Value::Int(1)).expect("untyped");

    assert_eq!(
        map.set(None, Value::Int(2)),
        Err(ContainerError::KeyOverflow(KeyOverflow { max: i64::MAX }))
    );
    assert_eq!(map.count(), 1, "A failed set shouldn't change the Map.");

    map.set(Some("a"), Value::Int(3)).expect("explicit keys are unaffected");
    assert_eq!(map.count(), 2);

    let mut negative = Map::new();
    negative.insert("-5", Value::Int(1)).expect("untyped");
    negative.set(None, Value::Int(2)).expect("room after a negative key");
    assert_eq!(negative.find("-4"), Some(&Value::Int(2)));
}

#[test]
fn test_clear() {
    let mut map = letters();
    map.clear();
    assert!(map.is_empty());
    assert!(!map.exists("a"));
    map.insert("a", Value::Int(1)).expect("untyped");
    assert_eq!(map.count(), 1);
}

#[test]
fn test_cursor() {
    let mut map = letters();
    let mut seen = Vec::new();

    map.rewind();
    while map.valid() {
        seen.push((map.key().map(str::to_owned), map.current().cloned()));
        map.next();
    }

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], (Some("a".to_owned()), Some(Value::Int(1))));
    assert_eq!(seen[2], (Some("c".to_owned()), Some(Value::Int(3))));
    assert_eq!(map.key(), None);

    map.rewind();
    assert_eq!(map.key(), Some("a"));
}

#[test]
fn test_iteration() {
    let map = letters();
    let borrowed: Vec<_> = map.iter().map(|(key, value)| format!("{key}={value}")).collect();
    assert_eq!(borrowed, ["a=1", "b=2", "c=3"]);
    assert_eq!(map.iter().rev().next(), Some(("c", &Value::Int(3))));

    let owned: Vec<(String, Value)> = map.into_iter().collect();
    assert_eq!(owned[1], ("b".to_owned(), Value::Int(2)));
}

#[test]
fn test_equality_ignores_order() {
    let lhs = letters();
    let rhs = Map::from_entries(
        [("c", Value::Int(3)), ("a", Value::Int(1)), ("b", Value::Int(2))],
        None,
    ).expect("untyped");
    assert_eq!(lhs, rhs);

    let mut other = rhs.clone();
    other.insert("c", Value::Int(4)).expect("untyped");
    assert_ne!(lhs, other);
}

#[test]
fn test_read_only_rejects_mutation() {
    let params = ReadOnlyMap::new(letters());

    assert_eq!(
        params.clear(),
        Err(ReadOnly { class: "ReadOnlyMap", method: "clear" })
    );
    assert!(params.insert("d", Value::Int(4)).is_err());
    assert!(params.insert("a", Value::Int(4)).is_err());
    assert!(params.remove("a").is_err());
    assert!(params.erase(0).is_err());
    assert!(params.take("a").is_err());
    assert!(params.set(None, Value::Int(4)).is_err());
    assert!(params.unset("a").is_err());

    assert_eq!(*params, letters(), "The entries should be unchanged.");
}

#[test]
fn test_read_only_reads() {
    let mut params: ReadOnlyMap = [("q", Value::from("rust")), ("page", Value::from("2"))]
        .into_iter()
        .collect();

    assert_eq!(params.count(), 2);
    assert_eq!(params.get_value("q", Value::Null), Ok(Value::from("rust")));
    assert_eq!(params.get_value_by_type("page", DataType::INT, Value::Int(1)), Ok(Value::Int(2)));
    assert_eq!(params.get_value("missing", Value::from("d")), Ok(Value::from("d")));

    params.next();
    assert_eq!(params.key(), Some("page"));
    assert_eq!((&params).into_iter().count(), 2);
}

#[cfg(feature = "json")]
#[test]
fn test_json_dump() {
    let mut map = Map::new();
    map.insert("z", Value::Int(1)).expect("untyped");
    map.insert("a", Value::from(vec![Value::Bool(true), Value::Null])).expect("untyped");

    assert_eq!(map.to_json().expect("dump should succeed"), r#"{"z":1,"a":[true,null]}"#);
    assert_eq!(
        ReadOnlyMap::new(map).to_json().expect("dump should succeed"),
        r#"{"z":1,"a":[true,null]}"#
    );
}
