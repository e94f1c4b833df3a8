//! The dynamically-typed [`Value`] stored by every container, along with the [`Object`] trait
//! for runtime-classed values and the [`DataType`] tags used to constrain them.

mod data_type;
mod equality;
#[cfg(feature = "json")]
mod json;
mod object;
mod tests;
mod value;

pub use data_type::*;
pub use equality::*;
pub use object::*;
pub use value::*;
