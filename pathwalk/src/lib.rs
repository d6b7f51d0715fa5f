#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathwalk
//!
//! A drive-letter path algebra and a stack-based directory traversal engine.
//!
//! Paths are plain text with two accepted separators (`\` preferred, `/`
//! accepted) and an optional drive prefix such as `C:`. The algebra is purely
//! lexical: decomposition and composition never touch the filesystem, never
//! normalize what they are given, and never fail. Traversal is layered on a
//! narrow [`Filesystem`] boundary with a real OS implementation and an
//! in-memory one for tests.
//!
//! ## Core Types
//!
//! - [`Path`] and [`Components`]: the lexical path value and its element
//!   iterator
//! - [`DirectoryEntry`]: a path paired with its attribute snapshot
//! - [`DirectoryIterator`] and [`RecursiveDirectoryIterator`]: flat and
//!   depth-first traversal
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathwalk::Path;
//!
//! let mut path = Path::from("C:\\Users");
//! path.push("report.txt");
//! assert_eq!(path.as_str(), "C:\\Users\\report.txt");
//! assert_eq!(path.root_name(), "C:");
//! assert_eq!(path.extension(), ".txt");
//!
//! let elements: Vec<&str> = path.components().collect();
//! assert_eq!(elements, ["C:", "\\", "Users", "report.txt"]);
//! ```
//!
//! Walking a tree in pre-order:
//!
//! ```
//! use pathwalk::{MemoryFilesystem, RecursiveDirectoryIterator};
//!
//! let fs = MemoryFilesystem::new();
//! fs.create_file("C:\\tree\\sub\\leaf");
//!
//! let mut walked = Vec::new();
//! for entry in RecursiveDirectoryIterator::with_filesystem(fs, "C:\\tree", Default::default()) {
//!     walked.push(entry.unwrap().path().to_string());
//! }
//! assert_eq!(walked, ["C:\\tree\\sub", "C:\\tree\\sub\\leaf"]);
//! ```

pub mod dir;
pub mod error;
pub mod fs;
pub mod path;

// Re-export key types at crate root for convenience
pub use dir::{DirectoryEntry, DirectoryIterator, DirectoryOptions, RecursiveDirectoryIterator};
pub use error::{Error, Result};
pub use fs::{
    current_directory, set_current_directory, FileAttributes, Filesystem, FsError, FsResult,
    MemoryFilesystem, OsFilesystem, RawDirEntry, ReparseTag,
};
pub use path::{grammar, Components, Path, PathSegment};
