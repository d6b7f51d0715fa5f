//! Lexical path handling.
//!
//! This module provides the path algebra for a drive-letter platform:
//!
//! - [`grammar`]: pure, total functions over path text (decomposition into
//!   root-name, root-directory, relative part, filename, stem, extension).
//! - [`Path`]: the owned value type with composition (`push`), raw
//!   concatenation (`concat`), separator normalization and the decomposition
//!   accessors.
//! - [`Components`]: element-wise iteration over a path's text.
//!
//! Nothing in this module performs I/O; traversal lives in
//! [`dir`](crate::dir).
//!
//! # Examples
//!
//! ```
//! use pathwalk::Path;
//!
//! let path = Path::from("C:\\Users\\x\\report.txt");
//! assert_eq!(path.root_path(), "C:\\");
//! assert_eq!(path.parent_path(), "C:\\Users\\x");
//! assert_eq!(path.stem(), "report");
//! assert_eq!(path.extension(), ".txt");
//! ```

pub mod grammar;
mod iter;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use grammar::PathSegment;
pub use iter::Components;
pub use value::Path;
