use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_int;

use super::{InteriorNulError, Metadata, MetadataError};

pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

pub(crate) fn c_path(path: &Path) -> Result<CString, InteriorNulError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| InteriorNulError)
}

/// Reads the metadata of `path`, following a final symlink unless `follow_links` is false.
pub(crate) fn stat(path: &Path, follow_links: bool) -> Result<Metadata, MetadataError> {
    let c_path = c_path(path)?;
    let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();

    // SAFETY: c_path is a valid nul terminated string and raw_meta is valid for writes.
    let result = unsafe {
        if follow_links {
            libc::stat(c_path.as_ptr(), raw_meta.as_mut_ptr())
        } else {
            libc::lstat(c_path.as_ptr(), raw_meta.as_mut_ptr())
        }
    };
    if result == -1 {
        return Err(MetadataError::from_err_no(err_no()));
    }

    // SAFETY: stat and lstat initialize raw_meta when they succeed.
    let raw = unsafe { raw_meta.assume_init() };
    Ok(Metadata::from_stat(raw))
}

/// Checks the accessibility of `path` for the real user with `access(2)`.
pub(crate) fn access(path: &Path, mode: c_int) -> bool {
    match c_path(path) {
        // SAFETY: c_path is a valid nul terminated string.
        Ok(c_path) => unsafe { libc::access(c_path.as_ptr(), mode) == 0 },
        Err(_) => false,
    }
}
