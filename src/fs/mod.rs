//! Filesystem metadata for [`FileInfo`], read with `stat(2)` and `access(2)`.
//!
//! This module requires a Unix target.

mod error;
mod file_info;
mod file_type;
mod metadata;
mod syscall;

pub use error::*;
pub use file_info::*;
pub use file_type::*;
pub use metadata::*;
