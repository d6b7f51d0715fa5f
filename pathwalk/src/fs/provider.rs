//! The narrow interface the traversal engine consumes from the OS layer.

use thiserror::Error;

use super::attributes::{FileAttributes, ReparseTag};
use crate::error::Error;
use crate::path::Path;

/// Result type for filesystem primitives.
pub type FsResult<T> = std::result::Result<T, FsError>;

/// Failure of a filesystem primitive, before path context is attached.
///
/// End-of-directory is *not* an error; [`Filesystem::advance_enum`] reports
/// it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum FsError {
    /// The OS denied access to the directory.
    #[error("access denied")]
    AccessDenied,

    /// Any other OS failure.
    #[error(transparent)]
    Os(#[from] std::io::Error),
}

impl FsError {
    /// Attaches the failing operation and path, producing a library error.
    #[must_use]
    pub fn into_error(self, operation: &'static str, path: Path) -> Error {
        match self {
            Self::AccessDenied => Error::AccessDenied { path },
            Self::Os(source) => Error::Os {
                operation,
                path,
                source,
            },
        }
    }
}

/// One raw enumeration result: a file name local to the enumerated
/// directory, plus the attribute snapshot the OS returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDirEntry {
    /// The entry's name within its directory (no separators).
    pub file_name: String,
    /// The attribute mask captured at enumeration time.
    pub attributes: FileAttributes,
}

/// The OS collaboration boundary.
///
/// The traversal engine is written entirely against this trait; the OS
/// itself is reached through [`OsFilesystem`](crate::OsFilesystem), and tests
/// use [`MemoryFilesystem`](crate::MemoryFilesystem). Implementations may
/// yield the `.`/`..` dot entries from enumeration; skipping them is the
/// engine's job.
///
/// Handles are scoped resources: every handle returned by `open_enum` must
/// be passed to `close_enum` exactly once (dropping may be equivalent for a
/// given implementation, but the engine always closes explicitly or via its
/// own drop path).
pub trait Filesystem: Clone {
    /// An open enumeration over a single directory. Forward-only and
    /// non-restartable. `Debug` so iterators holding handles stay
    /// debug-printable.
    type Handle: std::fmt::Debug;

    /// Opens an enumeration handle over `dir`.
    ///
    /// # Errors
    ///
    /// [`FsError::AccessDenied`] when the OS refuses access, [`FsError::Os`]
    /// for anything else (including a missing or non-directory path).
    fn open_enum(&self, dir: &Path) -> FsResult<Self::Handle>;

    /// Produces the next raw entry, or `Ok(None)` at end of directory.
    ///
    /// # Errors
    ///
    /// [`FsError`] for OS failures other than end-of-directory.
    fn advance_enum(&self, handle: &mut Self::Handle) -> FsResult<Option<RawDirEntry>>;

    /// Closes an enumeration handle. Best-effort; never fails.
    fn close_enum(&self, handle: Self::Handle);

    /// Returns the attribute mask for `path`, or `None` when it cannot be
    /// determined (the "unknown" attribute state).
    fn attributes(&self, path: &Path) -> Option<FileAttributes>;

    /// Disambiguates a reparse-point entry into symlink vs. junction.
    fn reparse_tag(&self, path: &Path) -> ReparseTag;

    /// Returns the process-wide current directory.
    ///
    /// # Errors
    ///
    /// [`FsError`] when the OS cannot report it.
    fn current_directory(&self) -> FsResult<Path>;

    /// Changes the process-wide current directory.
    ///
    /// # Errors
    ///
    /// [`FsError`] when the OS rejects the change.
    fn set_current_directory(&self, path: &Path) -> FsResult<()>;
}
