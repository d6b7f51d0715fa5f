//! The owned path value type.

use std::fmt;

use super::grammar;
use super::iter::Components;

/// An owned, mutable path on a drive-letter platform.
///
/// A `Path` owns one text buffer exclusively; cloning deep-copies the buffer.
/// Construction preserves the given text verbatim, mixed separators and all.
/// Decomposition accessors are thin wrappers over the lexical functions in
/// [`grammar`](crate::path::grammar) and borrow from the buffer; nothing here
/// touches the filesystem.
///
/// # Examples
///
/// ```
/// use pathwalk::Path;
///
/// let mut path = Path::from("C:\\Users");
/// path.push("docs");
/// assert_eq!(path.as_str(), "C:\\Users\\docs");
/// assert_eq!(path.root_name(), "C:");
/// assert_eq!(path.filename(), "docs");
/// assert!(path.is_absolute());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    text: String,
}

impl Path {
    /// The separator inserted by [`push`](Self::push) and produced by
    /// [`make_preferred`](Self::make_preferred).
    pub const PREFERRED_SEPARATOR: char = grammar::PREFERRED_SEPARATOR;

    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Returns the path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the path, returning the underlying buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns `true` when the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the buffer with `text` without any normalization.
    pub fn assign(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends `other` with path-composition semantics.
    ///
    /// If `other` is empty this is a no-op. If `self` is empty, or `other` is
    /// an absolute path, `self` is replaced entirely. Otherwise exactly one
    /// preferred separator is inserted between the two texts unless one
    /// already ends or starts with a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Path;
    ///
    /// let mut path = Path::from("foo");
    /// path.push("bar");
    /// assert_eq!(path.as_str(), "foo\\bar");
    ///
    /// path.push("C:/replacement");
    /// assert_eq!(path.as_str(), "C:/replacement");
    /// ```
    pub fn push(&mut self, other: impl AsRef<str>) {
        let other = other.as_ref();
        if other.is_empty() {
            // nothing to append, do nothing
            return;
        }

        if self.text.is_empty() || grammar::has_drive_and_slash(other) {
            self.text.clear();
            self.text.push_str(other);
            return;
        }

        let ends_with_slash = self.text.chars().next_back().is_some_and(grammar::is_slash);
        let starts_with_slash = other.chars().next().is_some_and(grammar::is_slash);
        if !ends_with_slash && !starts_with_slash {
            self.text.push(Self::PREFERRED_SEPARATOR);
        }

        self.text.push_str(other);
    }

    /// Returns a new path equal to `self` with `other` pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Path;
    ///
    /// let base = Path::from("C:\\Users");
    /// assert_eq!(base.join("docs").as_str(), "C:\\Users\\docs");
    /// ```
    #[must_use]
    pub fn join(&self, other: impl AsRef<str>) -> Self {
        let mut result = self.clone();
        result.push(other);
        result
    }

    /// Appends raw text with no separator insertion and no absolute-path
    /// special-casing.
    pub fn concat(&mut self, other: impl AsRef<str>) {
        self.text.push_str(other.as_ref());
    }

    /// Truncates the buffer at the start of the filename segment; no-op when
    /// no filename is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Path;
    ///
    /// let mut path = Path::from("foo/bar");
    /// path.remove_filename();
    /// assert_eq!(path.as_str(), "foo/");
    /// ```
    pub fn remove_filename(&mut self) -> &mut Self {
        let segment = grammar::find_filename(&self.text);
        if segment.is_found() {
            self.text.truncate(segment.offset());
        }
        self
    }

    /// Removes the filename, then appends `replacement` with
    /// [`push`](Self::push) semantics.
    pub fn replace_filename(&mut self, replacement: impl AsRef<str>) -> &mut Self {
        self.remove_filename();
        self.push(replacement);
        self
    }

    /// Replaces the extension suffix.
    ///
    /// The existing extension (if any) is truncated. A non-empty replacement
    /// is then appended, preceded by exactly one `.` when it does not already
    /// carry one; an empty replacement just leaves the extension removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Path;
    ///
    /// let mut path = Path::from("/foo/bar.jpg");
    /// path.replace_extension(".png");
    /// assert_eq!(path.as_str(), "/foo/bar.png");
    /// ```
    pub fn replace_extension(&mut self, replacement: impl AsRef<str>) -> &mut Self {
        let length = grammar::extension(&self.text).len();
        if length > 0 {
            let keep = self.text.len() - length;
            self.text.truncate(keep);
        }

        let replacement = replacement.as_ref();
        if replacement.is_empty() {
            return self;
        }

        if !replacement.starts_with('.') {
            self.text.push('.');
        }
        self.text.push_str(replacement);
        self
    }

    /// Normalizes every alternate separator to the preferred one.
    ///
    /// Idempotent: applying it twice yields the same text as once.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Path;
    ///
    /// let mut path = Path::from("a/b/c");
    /// path.make_preferred();
    /// assert_eq!(path.as_str(), "a\\b\\c");
    /// ```
    pub fn make_preferred(&mut self) -> &mut Self {
        if self.text.contains(grammar::ALTERNATE_SEPARATOR) {
            self.text = self
                .text
                .replace(grammar::ALTERNATE_SEPARATOR, "\\");
        }
        self
    }

    pub(crate) fn truncate_to(&mut self, length: usize) {
        self.text.truncate(length);
    }

    /// Returns the root-name (`C:`), empty if absent.
    #[must_use]
    pub fn root_name(&self) -> &str {
        grammar::root_name(&self.text)
    }

    /// Returns the root-directory separator, empty if absent.
    #[must_use]
    pub fn root_directory(&self) -> &str {
        grammar::root_directory(&self.text)
    }

    /// Returns root-name plus root-directory.
    #[must_use]
    pub fn root_path(&self) -> &str {
        grammar::root_path(&self.text)
    }

    /// Returns everything after the root-path.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        grammar::relative_path(&self.text)
    }

    /// Returns the text up to (not including) the last separator.
    #[must_use]
    pub fn parent_path(&self) -> &str {
        grammar::parent_path(&self.text)
    }

    /// Returns the filename, empty when the path ends in a separator.
    #[must_use]
    pub fn filename(&self) -> &str {
        grammar::filename(&self.text)
    }

    /// Returns the filename without its extension suffix.
    #[must_use]
    pub fn stem(&self) -> &str {
        grammar::stem(&self.text)
    }

    /// Returns the extension including its leading `.`, empty if absent.
    #[must_use]
    pub fn extension(&self) -> &str {
        grammar::extension(&self.text)
    }

    /// Returns `true` when the path has a root-name.
    #[must_use]
    pub fn has_root_name(&self) -> bool {
        !self.root_name().is_empty()
    }

    /// Returns `true` when the path has a root-directory.
    #[must_use]
    pub fn has_root_directory(&self) -> bool {
        !self.root_directory().is_empty()
    }

    /// Returns `true` when the path has a root-path.
    #[must_use]
    pub fn has_root_path(&self) -> bool {
        !self.root_path().is_empty()
    }

    /// Returns `true` when the path has a relative part.
    #[must_use]
    pub fn has_relative_path(&self) -> bool {
        !self.relative_path().is_empty()
    }

    /// Returns `true` when the path has a parent.
    #[must_use]
    pub fn has_parent_path(&self) -> bool {
        !self.parent_path().is_empty()
    }

    /// Returns `true` when the path has a filename.
    #[must_use]
    pub fn has_filename(&self) -> bool {
        !self.filename().is_empty()
    }

    /// Returns `true` when the path has a stem.
    #[must_use]
    pub fn has_stem(&self) -> bool {
        !self.stem().is_empty()
    }

    /// Returns `true` when the path has an extension.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        !self.extension().is_empty()
    }

    /// Returns `true` for a fully-qualified path: drive prefix plus
    /// separator, like `C:\Users`.
    ///
    /// On a drive-letter platform a bare `\foo` is rooted but not absolute
    /// (it is relative to the current drive).
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        grammar::has_drive_and_slash(&self.text)
    }

    /// The opposite of [`is_absolute`](Self::is_absolute).
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Iterates over the path elements: root-name, root-directory, then each
    /// separator-delimited component in left-to-right order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::Path;
    ///
    /// let path = Path::from("C:\\foo\\bar");
    /// let elements: Vec<&str> = path.components().collect();
    /// assert_eq!(elements, ["C:", "\\", "foo", "bar"]);
    /// ```
    #[must_use]
    pub fn components(&self) -> Components<'_> {
        Components::new(&self.text)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a str;
    type IntoIter = Components<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.components()
    }
}
