//! Error types for the pathwalk library.
//!
//! Path decomposition never fails: the grammar functions are total over any
//! text input. Errors only arise from directory traversal, where they follow
//! a small taxonomy built with `thiserror`.

use std::io;

use thiserror::Error;

use crate::path::Path;

/// Result type alias for operations that may fail with a pathwalk error.
///
/// # Examples
///
/// ```
/// use pathwalk::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathwalk library.
///
/// End-of-sequence is deliberately *not* represented here: an exhausted
/// iterator is a normal terminal condition, reported as `Ok(false)` from
/// `advance` or `None` from `next`.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system denied access to a directory.
    ///
    /// During recursive descent this is recoverable via
    /// [`DirectoryOptions::SKIP_PERMISSION_DENIED`](crate::DirectoryOptions::SKIP_PERMISSION_DENIED);
    /// otherwise it is fatal for the advance that encountered it.
    #[error("access denied: {path}")]
    AccessDenied {
        /// The directory that could not be opened or enumerated.
        path: Path,
    },

    /// Any other OS failure while opening or enumerating a directory.
    ///
    /// Always fatal for the iterator that encountered it.
    #[error("{operation} failed for {path}: {source}")]
    Os {
        /// The primitive that failed (`"open_enum"`, `"advance_enum"`, ...).
        operation: &'static str,
        /// The directory the primitive was operating on.
        path: Path,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A terminal or unopened iterator was dereferenced.
    ///
    /// This is a programming error on the caller's side, not a filesystem
    /// condition; it carries no path because the iterator no longer tracks
    /// one.
    #[error("invalid access to an exhausted directory iterator")]
    InvalidIteratorAccess,
}

impl Error {
    /// Check if error indicates a permission failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{Error, Path};
    ///
    /// let err = Error::AccessDenied { path: Path::from("C:\\restricted") };
    /// assert!(err.is_access_denied());
    /// ```
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// Check if error indicates a misused iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Error;
    ///
    /// assert!(Error::InvalidIteratorAccess.is_invalid_access());
    /// ```
    #[must_use]
    pub fn is_invalid_access(&self) -> bool {
        matches!(self, Self::InvalidIteratorAccess)
    }
}
