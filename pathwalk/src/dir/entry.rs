//! A path paired with its attribute snapshot.

use crate::fs::{FileAttributes, Filesystem, OsFilesystem, ReparseTag};
use crate::path::Path;

/// A directory entry: an absolute or relative [`Path`] plus the attribute
/// snapshot observed for it.
///
/// Entries yielded by the iterators carry the attributes the enumeration
/// itself returned, so the classification predicates cost nothing extra.
/// Entries built directly from a path probe the filesystem once at
/// construction; [`refresh`](DirectoryEntry::refresh) re-probes on demand.
/// A failed probe leaves the attributes unknown, and every predicate on an
/// unknown snapshot answers `false`.
///
/// # Examples
///
/// ```
/// use pathwalk::{DirectoryEntry, MemoryFilesystem};
///
/// let fs = MemoryFilesystem::new();
/// fs.create_dir("C:\\data");
///
/// let entry = DirectoryEntry::with_filesystem(fs, "C:\\data");
/// assert!(entry.exists());
/// assert!(entry.is_directory());
/// assert!(!entry.is_regular_file());
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryEntry<F: Filesystem = OsFilesystem> {
    fs: F,
    path: Path,
    attributes: Option<FileAttributes>,
}

impl DirectoryEntry<OsFilesystem> {
    /// Creates an entry for `path` against the real filesystem, probing its
    /// attributes once.
    #[must_use]
    pub fn new(path: impl Into<Path>) -> Self {
        Self::with_filesystem(OsFilesystem, path)
    }
}

impl<F: Filesystem> DirectoryEntry<F> {
    /// Creates an entry for `path` against `fs`, probing its attributes once.
    #[must_use]
    pub fn with_filesystem(fs: F, path: impl Into<Path>) -> Self {
        let path = path.into();
        let attributes = fs.attributes(&path);
        Self {
            fs,
            path,
            attributes,
        }
    }

    // Adoption path for the iterators: the attributes were already observed
    // during enumeration, so no probe happens here.
    pub(crate) fn from_parts(fs: F, path: Path, attributes: Option<FileAttributes>) -> Self {
        Self {
            fs,
            path,
            attributes,
        }
    }

    /// Points the entry at a different path and re-probes its attributes.
    /// Assigning the path it already has keeps the existing snapshot.
    pub fn assign(&mut self, path: impl Into<Path>) {
        let path = path.into();
        if path == self.path {
            return;
        }
        self.path = path;
        self.refresh();
    }

    /// Replaces the filename part of the path and re-probes the attributes.
    /// A replacement equal to the current filename keeps the existing
    /// snapshot.
    ///
    /// ```
    /// use pathwalk::{DirectoryEntry, MemoryFilesystem};
    ///
    /// let fs = MemoryFilesystem::new();
    /// fs.create_file("C:\\data\\a.txt").create_dir("C:\\data\\sub");
    ///
    /// let mut entry = DirectoryEntry::with_filesystem(fs, "C:\\data\\a.txt");
    /// entry.replace_filename("sub");
    /// assert_eq!(entry.path().as_str(), "C:\\data\\sub");
    /// assert!(entry.is_directory());
    /// ```
    pub fn replace_filename(&mut self, filename: &str) {
        if self.path.filename() == filename {
            return;
        }
        self.path.replace_filename(filename);
        self.refresh();
    }

    /// Re-probes the attribute snapshot from the filesystem.
    pub fn refresh(&mut self) {
        self.attributes = self.fs.attributes(&self.path);
    }

    /// The entry's path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The attribute snapshot, or `None` when it could not be determined.
    #[must_use]
    pub fn attributes(&self) -> Option<FileAttributes> {
        self.attributes
    }

    /// Returns `true` when the snapshot shows the path exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.attributes.is_some()
    }

    /// Returns `true` for a directory that is not a reparse point. Symlinked
    /// directories answer `false` here and `true` from
    /// [`is_symlink`](DirectoryEntry::is_symlink).
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.attributes
            .is_some_and(FileAttributes::is_plain_directory)
    }

    /// Returns `true` for an entry that is neither a directory nor a
    /// reparse point.
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        self.attributes.is_some_and(FileAttributes::is_plain_file)
    }

    /// Returns `true` for a symbolic link, probing the reparse tag.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.is_reparse_point() && self.fs.reparse_tag(&self.path) == ReparseTag::Symlink
    }

    /// Returns `true` for a mount-point junction, probing the reparse tag.
    #[must_use]
    pub fn is_junction(&self) -> bool {
        self.is_reparse_point() && self.fs.reparse_tag(&self.path) == ReparseTag::MountPoint
    }

    fn is_reparse_point(&self) -> bool {
        self.attributes
            .is_some_and(|a| a.contains(FileAttributes::REPARSE_POINT))
    }
}

impl<F: Filesystem> PartialEq for DirectoryEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<F: Filesystem> Eq for DirectoryEntry<F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFilesystem;

    fn fixture() -> MemoryFilesystem {
        let fs = MemoryFilesystem::new();
        fs.create_dir("C:\\r\\sub")
            .create_file("C:\\r\\file.txt")
            .create_symlink_dir("C:\\r\\link")
            .create_junction("C:\\r\\junction");
        fs
    }

    #[test]
    fn test_missing_path_answers_false_everywhere() {
        let entry = DirectoryEntry::with_filesystem(fixture(), "C:\\r\\nope");
        assert!(!entry.exists());
        assert!(!entry.is_directory());
        assert!(!entry.is_regular_file());
        assert!(!entry.is_symlink());
        assert!(!entry.is_junction());
    }

    #[test]
    fn test_classification() {
        let fs = fixture();
        let dir = DirectoryEntry::with_filesystem(fs.clone(), "C:\\r\\sub");
        assert!(dir.is_directory() && !dir.is_regular_file() && !dir.is_symlink());

        let file = DirectoryEntry::with_filesystem(fs.clone(), "C:\\r\\file.txt");
        assert!(file.is_regular_file() && !file.is_directory());

        let link = DirectoryEntry::with_filesystem(fs.clone(), "C:\\r\\link");
        assert!(link.is_symlink() && !link.is_junction());
        assert!(!link.is_directory() && !link.is_regular_file());

        let junction = DirectoryEntry::with_filesystem(fs, "C:\\r\\junction");
        assert!(junction.is_junction() && !junction.is_symlink());
    }

    #[test]
    fn test_assign_reprobes() {
        let fs = fixture();
        let mut entry = DirectoryEntry::with_filesystem(fs, "C:\\r\\file.txt");
        assert!(entry.is_regular_file());
        entry.assign("C:\\r\\sub");
        assert!(entry.is_directory());
        entry.assign("C:\\r\\gone");
        assert!(!entry.exists());
    }

    #[test]
    fn test_replace_filename_reprobes() {
        let fs = fixture();
        let mut entry = DirectoryEntry::with_filesystem(fs, "C:\\r\\file.txt");
        entry.replace_filename("link");
        assert_eq!(entry.path().as_str(), "C:\\r\\link");
        assert!(entry.is_symlink());
    }

    #[test]
    fn test_assign_same_path_keeps_snapshot() {
        let fs = MemoryFilesystem::new();
        let mut entry = DirectoryEntry::with_filesystem(fs.clone(), "C:\\late");
        assert!(!entry.exists());
        fs.create_dir("C:\\late");
        // same text, no re-probe
        entry.assign("C:\\late");
        assert!(!entry.exists());
        // different text, re-probed
        entry.assign("C:\\late\\");
        assert!(entry.is_directory());
    }

    #[test]
    fn test_refresh_sees_tree_changes() {
        let fs = MemoryFilesystem::new();
        let mut entry = DirectoryEntry::with_filesystem(fs.clone(), "C:\\late");
        assert!(!entry.exists());
        fs.create_dir("C:\\late");
        entry.refresh();
        assert!(entry.is_directory());
    }

    #[test]
    fn test_equality_is_path_equality() {
        let fs = fixture();
        let a = DirectoryEntry::with_filesystem(fs.clone(), "C:\\r\\sub");
        let b = DirectoryEntry::with_filesystem(fs, "C:\\r\\sub");
        assert_eq!(a, b);
    }
}
