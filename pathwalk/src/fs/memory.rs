//! An in-memory filesystem for exercising the traversal engine.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::io;
use std::rc::Rc;

use super::attributes::{FileAttributes, ReparseTag};
use super::provider::{Filesystem, FsError, FsResult, RawDirEntry};
use crate::path::grammar;
use crate::path::Path;

/// A shared, in-memory [`Filesystem`].
///
/// Built for tests: the tree is constructed with the `create_*` builder
/// methods, access failures are injected with [`deny_access`], and
/// enumeration deliberately yields the `.`/`..` dot entries first (the way a
/// raw OS enumeration does) so the engine's dot-skipping is observable.
/// Entries enumerate in name order, which makes traversal output
/// deterministic.
///
/// Clones share the same tree.
///
/// [`deny_access`]: MemoryFilesystem::deny_access
///
/// # Examples
///
/// ```
/// use pathwalk::{DirectoryIterator, MemoryFilesystem};
///
/// let fs = MemoryFilesystem::new();
/// fs.create_dir("C:\\data").create_file("C:\\data\\a.txt");
///
/// let names: Vec<String> = DirectoryIterator::with_filesystem(fs, "C:\\data")
///     .map(|entry| entry.unwrap().path().filename().to_string())
///     .collect();
/// assert_eq!(names, ["a.txt"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug)]
struct Inner {
    nodes: BTreeMap<String, Node>,
    cwd: Path,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            cwd: Path::from("C:\\"),
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    attributes: FileAttributes,
    tag: ReparseTag,
    denied: bool,
}

impl Node {
    fn directory() -> Self {
        Self {
            attributes: FileAttributes::DIRECTORY,
            tag: ReparseTag::Unknown,
            denied: false,
        }
    }
}

/// An open enumeration over one in-memory directory.
///
/// Snapshots the listing at open time, matching the forward-only,
/// non-restartable contract of the OS primitive.
#[derive(Debug)]
pub struct MemoryHandle {
    queue: VecDeque<RawDirEntry>,
}

// Lexical key for the node map: preferred separators, no trailing slashes.
// A drive root (`C:\`) and the bare drive prefix (`C:`) share one key, so
// drive-root enumeration finds the ancestors materialized under `C:`. A
// slash-only root keeps its slash.
fn key_of(path: &str) -> String {
    let mut text = path.replace('/', "\\");
    let floor = if grammar::has_drive(&text) {
        grammar::root_name(&text).len()
    } else {
        grammar::root_path(&text).len()
    };
    while text.len() > floor && text.ends_with('\\') {
        text.pop();
    }
    text
}

impl MemoryFilesystem {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, path: &str, node: Node) {
        let key = key_of(path);
        let mut inner = self.inner.borrow_mut();

        // materialize missing ancestors as plain directories
        let mut parent = grammar::parent_path(&key).to_string();
        while !parent.is_empty() && parent != key && !inner.nodes.contains_key(&parent) {
            inner.nodes.insert(parent.clone(), Node::directory());
            let next = grammar::parent_path(&parent).to_string();
            if next == parent {
                break;
            }
            parent = next;
        }

        inner.nodes.insert(key, node);
    }

    /// Adds a directory (and any missing ancestors).
    pub fn create_dir(&self, path: impl AsRef<str>) -> &Self {
        self.insert(path.as_ref(), Node::directory());
        self
    }

    /// Adds a regular file (and any missing ancestor directories).
    pub fn create_file(&self, path: impl AsRef<str>) -> &Self {
        self.insert(
            path.as_ref(),
            Node {
                attributes: FileAttributes::NORMAL,
                tag: ReparseTag::Unknown,
                denied: false,
            },
        );
        self
    }

    /// Adds a directory symlink. Children created beneath the link path are
    /// what a descent through the link enumerates.
    pub fn create_symlink_dir(&self, path: impl AsRef<str>) -> &Self {
        self.insert(
            path.as_ref(),
            Node {
                attributes: FileAttributes::DIRECTORY | FileAttributes::REPARSE_POINT,
                tag: ReparseTag::Symlink,
                denied: false,
            },
        );
        self
    }

    /// Adds a mount-point junction, the other reparse-point flavor.
    pub fn create_junction(&self, path: impl AsRef<str>) -> &Self {
        self.insert(
            path.as_ref(),
            Node {
                attributes: FileAttributes::DIRECTORY | FileAttributes::REPARSE_POINT,
                tag: ReparseTag::MountPoint,
                denied: false,
            },
        );
        self
    }

    /// Makes `open_enum` on `path` fail with access-denied. The directory is
    /// created if it does not exist yet.
    pub fn deny_access(&self, path: impl AsRef<str>) -> &Self {
        let key = key_of(path.as_ref());
        if !self.inner.borrow().nodes.contains_key(&key) {
            self.create_dir(path.as_ref());
        }
        if let Some(node) = self.inner.borrow_mut().nodes.get_mut(&key) {
            node.denied = true;
        }
        self
    }
}

impl Filesystem for MemoryFilesystem {
    type Handle = MemoryHandle;

    fn open_enum(&self, dir: &Path) -> FsResult<Self::Handle> {
        let key = key_of(dir.as_str());
        let inner = self.inner.borrow();

        let node = inner.nodes.get(&key).ok_or_else(|| {
            FsError::Os(io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        })?;
        if !node.attributes.contains(FileAttributes::DIRECTORY) {
            return Err(FsError::Os(io::Error::new(
                io::ErrorKind::Other,
                "not a directory",
            )));
        }
        if node.denied {
            return Err(FsError::AccessDenied);
        }

        let mut queue = VecDeque::new();
        for dot in [".", ".."] {
            queue.push_back(RawDirEntry {
                file_name: dot.to_string(),
                attributes: FileAttributes::DIRECTORY,
            });
        }

        let prefix = if key.ends_with('\\') {
            key.clone()
        } else {
            format!("{key}\\")
        };
        for (child, node) in inner.nodes.range(prefix.clone()..) {
            let Some(name) = child.strip_prefix(&prefix) else {
                break;
            };
            if name.is_empty() || name.contains('\\') {
                continue;
            }
            queue.push_back(RawDirEntry {
                file_name: name.to_string(),
                attributes: node.attributes,
            });
        }

        Ok(MemoryHandle { queue })
    }

    fn advance_enum(&self, handle: &mut Self::Handle) -> FsResult<Option<RawDirEntry>> {
        Ok(handle.queue.pop_front())
    }

    fn close_enum(&self, handle: Self::Handle) {
        drop(handle);
    }

    fn attributes(&self, path: &Path) -> Option<FileAttributes> {
        self.inner
            .borrow()
            .nodes
            .get(&key_of(path.as_str()))
            .map(|node| node.attributes)
    }

    fn reparse_tag(&self, path: &Path) -> ReparseTag {
        self.inner
            .borrow()
            .nodes
            .get(&key_of(path.as_str()))
            .map_or(ReparseTag::Unknown, |node| node.tag)
    }

    fn current_directory(&self) -> FsResult<Path> {
        Ok(self.inner.borrow().cwd.clone())
    }

    fn set_current_directory(&self, path: &Path) -> FsResult<()> {
        let key = key_of(path.as_str());
        let mut inner = self.inner.borrow_mut();
        match inner.nodes.get(&key) {
            Some(node) if node.attributes.contains(FileAttributes::DIRECTORY) => {
                inner.cwd = Path::from(key);
                Ok(())
            }
            _ => Err(FsError::Os(io::Error::new(
                io::ErrorKind::NotFound,
                "no such directory",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(fs: &MemoryFilesystem, dir: &str) -> Vec<String> {
        let mut handle = fs.open_enum(&Path::from(dir)).unwrap();
        let mut names = Vec::new();
        while let Some(raw) = fs.advance_enum(&mut handle).unwrap() {
            names.push(raw.file_name);
        }
        names
    }

    #[test]
    fn test_enumeration_yields_dots_then_sorted_children() {
        let fs = MemoryFilesystem::new();
        fs.create_dir("C:\\r")
            .create_file("C:\\r\\b")
            .create_file("C:\\r\\a");
        assert_eq!(drain(&fs, "C:\\r"), [".", "..", "a", "b"]);
    }

    #[test]
    fn test_ancestors_materialize() {
        let fs = MemoryFilesystem::new();
        fs.create_file("C:\\r\\deep\\leaf");
        assert_eq!(drain(&fs, "C:\\r"), [".", "..", "deep"]);
        assert_eq!(drain(&fs, "C:\\r\\deep"), [".", "..", "leaf"]);
    }

    #[test]
    fn test_forward_slashes_accepted() {
        let fs = MemoryFilesystem::new();
        fs.create_file("C:/r/x");
        assert_eq!(drain(&fs, "C:\\r"), [".", "..", "x"]);
    }

    #[test]
    fn test_open_missing_directory() {
        let fs = MemoryFilesystem::new();
        assert!(matches!(
            fs.open_enum(&Path::from("C:\\nope")),
            Err(FsError::Os(_))
        ));
    }

    #[test]
    fn test_open_file_is_not_a_directory() {
        let fs = MemoryFilesystem::new();
        fs.create_file("C:\\r\\f");
        assert!(matches!(
            fs.open_enum(&Path::from("C:\\r\\f")),
            Err(FsError::Os(_))
        ));
    }

    #[test]
    fn test_denied_directory() {
        let fs = MemoryFilesystem::new();
        fs.create_dir("C:\\locked");
        fs.deny_access("C:\\locked");
        assert!(matches!(
            fs.open_enum(&Path::from("C:\\locked")),
            Err(FsError::AccessDenied)
        ));
        // attributes still probe; only enumeration is denied
        assert!(fs.attributes(&Path::from("C:\\locked")).is_some());
    }

    #[test]
    fn test_reparse_tags() {
        let fs = MemoryFilesystem::new();
        fs.create_symlink_dir("C:\\r\\link");
        fs.create_junction("C:\\r\\junction");
        fs.create_dir("C:\\r\\plain");
        assert_eq!(fs.reparse_tag(&Path::from("C:\\r\\link")), ReparseTag::Symlink);
        assert_eq!(
            fs.reparse_tag(&Path::from("C:\\r\\junction")),
            ReparseTag::MountPoint
        );
        assert_eq!(
            fs.reparse_tag(&Path::from("C:\\r\\plain")),
            ReparseTag::Unknown
        );
    }

    #[test]
    fn test_drive_root_is_enumerable() {
        let fs = MemoryFilesystem::new();
        fs.create_file("C:\\x");
        // both spellings of the drive root reach the same node
        assert_eq!(drain(&fs, "C:\\"), [".", "..", "x"]);
        assert_eq!(drain(&fs, "C:"), [".", "..", "x"]);
        assert!(fs.attributes(&Path::from("C:\\")).is_some());
    }

    #[test]
    fn test_trailing_separators_ignored_in_lookups() {
        let fs = MemoryFilesystem::new();
        fs.create_dir("C:\\r\\sub");
        assert_eq!(drain(&fs, "C:\\r\\sub\\\\"), [".", ".."]);
    }

    #[test]
    fn test_current_directory_roundtrip() {
        let fs = MemoryFilesystem::new();
        fs.create_dir("C:\\work");
        assert_eq!(fs.current_directory().unwrap(), "C:\\");
        fs.set_current_directory(&Path::from("C:\\work")).unwrap();
        assert_eq!(fs.current_directory().unwrap(), "C:\\work");
        assert!(fs.set_current_directory(&Path::from("C:\\nope")).is_err());
    }

    #[test]
    fn test_clones_share_the_tree() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        fs.create_file("C:\\r\\seen-by-clone");
        assert_eq!(drain(&clone, "C:\\r"), [".", "..", "seen-by-clone"]);
    }
}
