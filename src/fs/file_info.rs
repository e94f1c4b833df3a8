use std::cell::{Cell, RefCell};
use std::env;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use libc::{R_OK, W_OK, X_OK};
use tracing::trace;

use super::{FileType, Metadata, MetadataError, syscall};
use crate::object::{BaseObject, ObjectBase};
use crate::value::{Object, Value};

/// Information about a path in the filesystem: whether it exists, what it is and who can access
/// it.
///
/// Metadata is read lazily and cached by default. Use [`refresh`](FileInfo::refresh) to read it
/// again or [`set_caching`](FileInfo::set_caching) to turn caching off. Accessibility checks
/// always ask the system.
///
/// # Examples
/// ```
/// # use toolkit_core::fs::FileInfo;
/// let info = FileInfo::new("/definitely/not/here.txt");
/// assert!(!info.exists());
/// assert_eq!(info.file_name(), Some("here.txt"));
/// assert_eq!(info.suffix(), Some("txt"));
/// assert!(info.is_absolute());
/// ```
#[derive(Debug)]
pub struct FileInfo {
    base: ObjectBase,
    path: PathBuf,
    caching: Cell<bool>,
    cache: RefCell<Option<Metadata>>,
}

impl FileInfo {
    pub fn new<P: Into<PathBuf>>(path: P) -> FileInfo {
        FileInfo {
            base: ObjectBase::new::<FileInfo>(),
            path: path.into(),
            caching: Cell::new(true),
            cache: RefCell::new(None),
        }
    }

    /// The path as it was provided.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// The final component of the path, if it has one and it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// The extension of the file name, without the leading dot.
    pub fn suffix(&self) -> Option<&str> {
        self.path.extension().and_then(|suffix| suffix.to_str())
    }

    /// The path made absolute against the current working directory, with `.` components
    /// removed. Symlinks and `..` components are kept.
    pub fn absolute_file_path(&self) -> PathBuf {
        let joined = if self.path.is_absolute() {
            self.path.clone()
        } else {
            env::current_dir().unwrap_or_default().join(&self.path)
        };

        joined.components()
            .filter(|component| *component != Component::CurDir)
            .collect()
    }

    /// The directory containing [`absolute_file_path`](FileInfo::absolute_file_path).
    pub fn absolute_path(&self) -> PathBuf {
        let file_path = self.absolute_file_path();
        match file_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => file_path,
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.path.is_absolute()
    }

    pub fn is_relative(&self) -> bool {
        self.path.is_relative()
    }

    /// Returns true if the path refers to the root directory.
    pub fn is_root(&self) -> bool {
        self.absolute_file_path().parent().is_none()
    }

    pub fn exists(&self) -> bool {
        self.metadata().is_ok()
    }

    pub fn is_file(&self) -> bool {
        self.file_type() == Some(FileType::Regular)
    }

    pub fn is_dir(&self) -> bool {
        self.file_type() == Some(FileType::Directory)
    }

    /// Returns true if the path itself is a symlink, whether or not its target exists.
    pub fn is_symlink(&self) -> bool {
        syscall::stat(&self.path, false)
            .is_ok_and(|metadata| metadata.file_type == FileType::Symlink)
    }

    pub fn is_readable(&self) -> bool {
        syscall::access(&self.path, R_OK)
    }

    pub fn is_writable(&self) -> bool {
        syscall::access(&self.path, W_OK)
    }

    pub fn is_executable(&self) -> bool {
        syscall::access(&self.path, X_OK)
    }

    /// The size of the file in bytes.
    ///
    /// # Errors
    /// Returns a [`MetadataError`] if the metadata can't be read.
    pub fn size(&self) -> Result<u64, MetadataError> {
        Ok(self.metadata()?.size.max(0) as u64)
    }

    /// The time of the last modification.
    ///
    /// # Errors
    /// Returns a [`MetadataError`] if the metadata can't be read.
    pub fn last_modified(&self) -> Result<SystemTime, MetadataError> {
        Ok(self.metadata()?.modified())
    }

    /// The time of the last access.
    ///
    /// # Errors
    /// Returns a [`MetadataError`] if the metadata can't be read.
    pub fn last_read(&self) -> Result<SystemTime, MetadataError> {
        Ok(self.metadata()?.accessed())
    }

    /// # Errors
    /// Returns a [`MetadataError`] if the metadata can't be read.
    pub fn owner_id(&self) -> Result<u32, MetadataError> {
        Ok(self.metadata()?.uid)
    }

    /// # Errors
    /// Returns a [`MetadataError`] if the metadata can't be read.
    pub fn group_id(&self) -> Result<u32, MetadataError> {
        Ok(self.metadata()?.gid)
    }

    /// The permission bits of the file, for example `0o644`.
    ///
    /// # Errors
    /// Returns a [`MetadataError`] if the metadata can't be read.
    pub fn permissions(&self) -> Result<u32, MetadataError> {
        Ok(self.metadata()?.permissions())
    }

    /// Returns the metadata of the file, following symlinks. The result is cached while caching
    /// is enabled, failures are never cached.
    ///
    /// # Errors
    /// Returns a [`MetadataError`] if the metadata can't be read.
    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        if let Some(cached) = self.cache.borrow().as_ref() {
            return Ok(cached.clone());
        }

        trace!(path = %self.path.display(), "reading file metadata");
        let metadata = syscall::stat(&self.path, true)?;
        if self.caching.get() {
            *self.cache.borrow_mut() = Some(metadata.clone());
        }
        Ok(metadata)
    }

    /// Discards cached metadata, so that it is read again when next needed.
    pub fn refresh(&self) {
        self.cache.borrow_mut().take();
    }

    pub fn caching(&self) -> bool {
        self.caching.get()
    }

    /// Enables or disables caching. Disabling it also discards cached metadata.
    pub fn set_caching(&self, caching: bool) -> &Self {
        self.caching.set(caching);
        if !caching {
            self.refresh();
        }
        self
    }

    fn file_type(&self) -> Option<FileType> {
        self.metadata().ok().map(|metadata| metadata.file_type)
    }
}

impl Object for FileInfo {
    fn fields(&self) -> Vec<(&str, Value)> {
        vec![("path", Value::from(self.path.to_string_lossy().into_owned()))]
    }
}

impl BaseObject for FileInfo {
    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn declared_property(&self, name: &str) -> Option<Value> {
        match name {
            "path" => Some(Value::from(self.path.to_string_lossy().into_owned())),
            _ => None,
        }
    }
}
