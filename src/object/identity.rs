use std::fmt::{self, Display, Formatter};

use uuid::Uuid;

use crate::value::short_name;

/// A process-unique identity string of the form `<ShortName>_<uuid>`, assigned once when an
/// object is created.
///
/// # Examples
/// ```
/// # use toolkit_core::object::Identity;
/// let identity = Identity::new("my_crate::widgets::Button");
/// assert!(identity.as_str().starts_with("Button_"));
/// assert_ne!(identity, Identity::new("my_crate::widgets::Button"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(class_name: &str) -> Identity {
        Identity(format!("{}_{}", short_name(class_name), Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
