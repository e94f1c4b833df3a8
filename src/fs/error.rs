use derive_more::{Display, Error, From, IsVariant, TryInto};
use libc::{EACCES, ELOOP, ENAMETOOLONG, ENOENT, ENOMEM, ENOTDIR, EOVERFLOW, c_int};

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("search permission is denied for one of the directories in the provided path")]
pub struct NoSearchError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("path contains an interior nul byte")]
pub struct InteriorNulError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("unexpected error code {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

/// The reasons metadata can't be read for a path.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, TryInto, IsVariant)]
pub enum MetadataError {
    OOM(OOMError),
    MetadataOverflow(MetadataOverflowError),
    NoSearch(NoSearchError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    InteriorNul(InteriorNulError),
    Unexpected(UnexpectedError),
}

impl MetadataError {
    pub(crate) const fn from_err_no(err_no: c_int) -> MetadataError {
        match err_no {
            EACCES =>       MetadataError::NoSearch(NoSearchError),
            ELOOP =>        MetadataError::ExcessiveLinks(ExcessiveLinksError),
            ENAMETOOLONG => MetadataError::PathLength(PathLengthError),
            ENOENT =>       MetadataError::MissingComponent(MissingComponentError),
            ENOTDIR =>      MetadataError::NonDirComponent(NonDirComponentError),
            ENOMEM =>       MetadataError::OOM(OOMError),
            EOVERFLOW =>    MetadataError::MetadataOverflow(MetadataOverflowError),
            e =>            MetadataError::Unexpected(UnexpectedError(e)),
        }
    }
}
