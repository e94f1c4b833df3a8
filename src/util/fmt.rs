use std::fmt::{self, Debug, Formatter};

/// Formats as the contained string without quoting, for use as a field in `debug_struct`.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
