//! Read-only access to the parameters of a request.
//!
//! A [`RequestContext`] is created once per request from its raw query string and form body, and
//! passed to whatever needs the parameters. Each side is parsed the first time it is used.

mod context;
mod tests;

pub use context::*;
