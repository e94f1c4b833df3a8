pub mod error;
pub mod fmt;
pub mod option;
pub mod panic;
pub mod result;

#[cfg(test)]
pub mod fixture;
