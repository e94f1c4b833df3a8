use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use crate::object::{Receiver, SlotError};
use crate::value::{Object, Value};

#[derive(Debug, Default)]
pub struct Person {
    name: RefCell<String>,
    surname: RefCell<String>,
    address: RefCell<String>,
}

impl Person {
    pub fn new(name: &str, surname: &str, address: &str) -> Person {
        Person {
            name: RefCell::new(name.to_owned()),
            surname: RefCell::new(surname.to_owned()),
            address: RefCell::new(address.to_owned()),
        }
    }

    pub fn random() -> Person {
        Person::new(
            &format!("name_{}", Uuid::new_v4().simple()),
            &format!("surname_{}", Uuid::new_v4().simple()),
            &format!("address_{}", Uuid::new_v4().simple()),
        )
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn set_name(&self, name: &str) {
        *self.name.borrow_mut() = name.to_owned();
    }

    pub fn set_address(&self, address: &str) {
        *self.address.borrow_mut() = address.to_owned();
    }
}

impl Object for Person {
    fn fields(&self) -> Vec<(&str, Value)> {
        vec![
            ("name", Value::from(self.name.borrow().as_str())),
            ("surname", Value::from(self.surname.borrow().as_str())),
            ("address", Value::from(self.address.borrow().as_str())),
        ]
    }
}

/// Returns `count` random people, each wrapped in a [`Value`].
pub fn people(count: usize) -> Vec<Value> {
    (0..count).map(|_| Value::object(Person::random())).collect()
}

/// Shares every field with [`Person`] but reports a different class.
#[derive(Debug)]
pub struct Student(Person);

impl Student {
    pub fn new(name: &str, surname: &str, address: &str) -> Student {
        Student(Person::new(name, surname, address))
    }
}

impl Object for Student {
    fn fields(&self) -> Vec<(&str, Value)> {
        self.0.fields()
    }
}

/// A slot receiver that records every invocation as `"method(args)"`.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Rc<Recorder> {
        Rc::new(Recorder::default())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Receiver for Recorder {
    fn invoke(&self, method: &str, args: Option<&Value>) -> Result<(), SlotError> {
        match method {
            "fail" => Err(SlotError::failed("recorder asked to fail")),
            "record" | "other" => {
                let args = args.map(Value::to_string).unwrap_or_default();
                self.calls.borrow_mut().push(format!("{method}({args})"));
                Ok(())
            },
            unknown => Err(SlotError::unknown_method(unknown)),
        }
    }
}
