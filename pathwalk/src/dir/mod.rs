//! Directory traversal: entries, flat iteration, and recursive depth-first
//! iteration.
//!
//! Both iterators are generic over the [`Filesystem`](crate::Filesystem)
//! boundary and default to the real one. Neither ever yields the `.`/`..`
//! dot entries, and both share their enumeration between copies.

mod entry;
mod options;
mod read;
mod walk;

pub use entry::DirectoryEntry;
pub use options::DirectoryOptions;
pub use read::DirectoryIterator;
pub use walk::RecursiveDirectoryIterator;
