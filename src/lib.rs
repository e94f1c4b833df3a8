//! This crate is the core of a small application toolkit: dynamically-typed containers that check
//! their contents at runtime, plus objects with an identity and synchronous signals.
//!
//! # Purpose
//! Values arrive at an application from places without a static type (request parameters, JSON,
//! user input), so the containers here store [`Value`](value::Value)s. Each container can still be
//! restricted to a single declared type, either a set of primitive
//! [`DataType`](value::DataType)s or the exact class name of an [`Object`](value::Object), and
//! rejects anything else when it is inserted. This keeps the flexibility of dynamic values
//! without losing track of what a container is supposed to hold.
//!
//! # Method
//! [`List`](collections::List), [`Vector`](collections::Vector) and [`Map`](collections::Map)
//! share their typing behaviour through the [`Template`](template::Template) trait, which funnels
//! every insertion through a single check. Read-only behaviour (such as the parameters of a
//! [`RequestContext`](request::RequestContext)) is expressed as a separate type that only exposes
//! failing mutators, rather than a runtime flag.
//!
//! Objects opt in to identity, properties and signals by embedding an
//! [`ObjectBase`](object::ObjectBase). Slots are either closures or named methods on a
//! [`Receiver`](object::Receiver), and are dispatched in order, on the caller's thread.
//!
//! # Error Handling
//! Every operation that can fail returns a [`Result`] with a strongly typed error, using enums for
//! static dispatch with structs (often ZSTs) that implement [`Error`](std::error::Error). Each
//! method returns the narrowest error it can produce, and the errors of the containers convert
//! into [`ContainerError`](error::ContainerError) with `?`. The exception is indexing with `[]`,
//! which panics, the same as it does for a slice.
//!
//! # Logging
//! The crate emits [`tracing`] events at the `trace` and `debug` levels, for rejected values,
//! signal connections and emissions. It never installs a subscriber.
//!
//! # Features
//! - `json`: [`Serialize`](serde::Serialize) implementations and `to_json` helpers.
//! - `request`: [`RequestContext`](request::RequestContext), parsed with the `url` crate.
//! - `fs`: [`FileInfo`](fs::FileInfo) and [`FileInfoList`](collections::FileInfoList), which rely on
//!   `libc` and a Unix target.
//!
//! All features are enabled by default.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "fs")]
pub mod fs;
pub mod object;
#[cfg(feature = "request")]
pub mod request;
pub mod template;
pub mod value;

pub(crate) mod util;

pub use util::error;
