#![cfg(test)]

use std::rc::Rc;

use super::*;
use crate::util::fixture::{Person, Student};

#[test]
fn test_data_type_classification() {
    assert_eq!(DataType::of(&Value::Null), DataType::NULL);
    assert_eq!(DataType::of(&Value::Bool(true)), DataType::BOOLEAN);
    assert!(
        DataType::of(&Value::Int(1)).contains(DataType::INT | DataType::LONG),
        "Integers should be classified as both INT and LONG."
    );
    assert!(
        DataType::of(&Value::Float(1.5)).contains(DataType::FLOAT | DataType::DOUBLE),
        "Floats should be classified as both FLOAT and DOUBLE."
    );
    assert_eq!(DataType::of(&Value::from(vec![])), DataType::ARRAY);
    assert_eq!(DataType::of(&Value::object(Person::random())), DataType::OBJECT);
}

#[test]
fn test_data_type_name() {
    assert_eq!(DataType::INT.name(), "DataType::INT");
    assert_eq!(
        (DataType::INT | DataType::FLOAT).name(),
        "DataType::INT or DataType::FLOAT"
    );
    assert_eq!(DataType::default().name(), "DataType::UNKNOWN");
    assert_eq!(DataType::MIXED.to_string(), "DataType::MIXED");
}

#[test]
fn test_loose_equality() {
    assert_eq!(Value::Int(3), Value::Float(3.0), "Numbers should compare across kinds.");
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_ne!(Value::from("1"), Value::Int(1));
    assert_eq!(
        Value::from(vec![Value::Int(1), Value::from("a")]),
        Value::from(vec![Value::Int(1), Value::from("a")])
    );
    assert_ne!(
        Value::from(vec![Value::Int(1), Value::Int(2)]),
        Value::from(vec![Value::Int(2), Value::Int(1)]),
        "Loose array comparison should respect order."
    );
}

#[test]
fn test_object_equality() {
    let person = Person::new("Ada", "Lovelace", "London");
    let twin = Person::new("Ada", "Lovelace", "London");
    let student = Student::new("Ada", "Lovelace", "London");

    assert!(person.equals(&twin), "Objects with equal fields should be equal.");
    assert!(
        !person.equals(&student),
        "Objects of different classes should never be equal."
    );

    twin.set_address("Paris");
    assert!(!person.equals(&twin), "Changing a field should break equality.");
}

#[test]
fn test_structural_equality() {
    assert!(are_equal(&Value::Null, &Value::Null));
    assert!(are_equal(&Value::Bool(false), &Value::Bool(false)));
    assert!(!are_equal(&Value::Bool(false), &Value::Int(0)));
    assert!(
        !are_equal(&Value::Int(1), &Value::Float(1.0)),
        "Structural comparison should not cross kinds."
    );
    assert!(are_equal(
        &Value::from(vec![Value::Int(1), Value::Int(2), Value::Int(2)]),
        &Value::from(vec![Value::Int(2), Value::Int(1)])
    ));
    assert!(!are_equal(
        &Value::from(vec![Value::Int(1)]),
        &Value::from(vec![Value::Int(1), Value::Int(3)])
    ));

    let person = Value::object(Person::new("Alan", "Turing", "Wilmslow"));
    let copy = Value::object(Person::new("Alan", "Turing", "Wilmslow"));
    assert!(are_equal(&person, &copy));
}

#[test]
fn test_structural_numeric_strings() {
    assert!(are_equal(&Value::from("1"), &Value::from("01")));
    assert!(are_equal(&Value::from("1e1"), &Value::from("10")));
    assert!(are_equal(&Value::from(" 2.50"), &Value::from("2.5")));
    assert!(are_equal(&Value::from("-0"), &Value::from("0")));
    assert!(!are_equal(&Value::from("1"), &Value::from("2")));
    assert!(
        !are_equal(&Value::from("abc"), &Value::from("ABC")),
        "Non-numeric strings should compare exactly."
    );
    assert!(
        !are_equal(&Value::from("inf"), &Value::from("infinity")),
        "Only decimal notation counts as numeric."
    );
    assert!(!are_equal(&Value::from("1a"), &Value::from("1")));
    assert!(
        are_equal(
            &Value::from(vec![Value::from("1"), Value::from("2")]),
            &Value::from(vec![Value::from("02"), Value::from("01")])
        ),
        "Array elements should use the same string rule."
    );
}

#[test]
fn test_downcast() {
    let value = Value::object(Person::new("Grace", "Hopper", "Arlington"));

    assert_eq!(
        value.downcast_ref::<Person>().map(Person::name),
        Some("Grace".to_owned())
    );
    assert!(value.downcast_ref::<Student>().is_none());

    let handle: Rc<Person> = value.downcast().expect("value holds a Person");
    handle.set_name("Amazing Grace");
    assert_eq!(
        value.downcast_ref::<Person>().map(Person::name),
        Some("Amazing Grace".to_owned()),
        "Downcast handles should share the stored object."
    );
}

#[test]
fn test_type_name() {
    assert_eq!(Value::Int(1).type_name(), "integer");
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(
        Value::object(Person::random()).type_name(),
        class_name_of::<Person>()
    );
    assert_eq!(short_name(class_name_of::<Person>()), "Person");
}

#[test]
fn test_convert() {
    assert_eq!(Value::from("3.7").convert(DataType::INT), Value::Int(3));
    assert_eq!(Value::from("abc").convert(DataType::INT), Value::Int(0));
    assert_eq!(Value::from("0").convert(DataType::BOOLEAN), Value::Bool(false));
    assert_eq!(Value::Bool(true).convert(DataType::STRING), Value::from("1"));
    assert_eq!(Value::Int(2).convert(DataType::DOUBLE), Value::Float(2.0));
    assert_eq!(Value::Int(2).convert(DataType::NULL), Value::Null);
    assert_eq!(
        Value::Int(2).convert(DataType::INT | DataType::STRING),
        Value::Int(2),
        "Combined tags should leave the value untouched."
    );
}

#[cfg(feature = "json")]
#[test]
fn test_json_dump() {
    let value = Value::from(vec![
        Value::Int(1),
        Value::Null,
        Value::object(Person::new("Ada", "Lovelace", "London")),
    ]);

    assert_eq!(
        serde_json::to_string(&value).expect("dump should succeed"),
        r#"[1,null,{"name":"Ada","surname":"Lovelace","address":"London"}]"#
    );
}
