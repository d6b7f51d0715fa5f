//! Filesystem access: the [`Filesystem`] trait the traversal engine is
//! written against, plus its two implementations.
//!
//! [`OsFilesystem`] reaches the real OS through `std::fs`;
//! [`MemoryFilesystem`] is an in-memory tree for deterministic tests,
//! including injected access-denied failures.

mod attributes;
mod memory;
mod os;
mod provider;

pub use attributes::{FileAttributes, ReparseTag};
pub use memory::MemoryFilesystem;
pub use os::{current_directory, set_current_directory, OsFilesystem};
pub use provider::{Filesystem, FsError, FsResult, RawDirEntry};
