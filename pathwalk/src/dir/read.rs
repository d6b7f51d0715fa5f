//! Flat (single-level) directory iteration.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dir::entry::DirectoryEntry;
use crate::error::{Error, Result};
use crate::fs::{Filesystem, OsFilesystem, RawDirEntry};
use crate::path::{grammar, Path};

/// Iterates the entries of a single directory.
///
/// Dot entries (`.`, `..`) are never yielded. Copies of an iterator share
/// one underlying enumeration: advancing any copy advances them all, and
/// when the sequence ends every copy observes the same terminal state. All
/// terminal iterators compare equal, so [`end`](DirectoryIterator::end)
/// serves as the universal sentinel.
///
/// A root that cannot be opened produces a terminal iterator rather than an
/// error; opening is best-effort by design.
///
/// # Examples
///
/// ```
/// use pathwalk::{DirectoryIterator, MemoryFilesystem};
///
/// let fs = MemoryFilesystem::new();
/// fs.create_file("C:\\data\\a").create_dir("C:\\data\\sub");
///
/// let mut it = DirectoryIterator::with_filesystem(fs, "C:\\data");
/// let mut names = Vec::new();
/// while !it.is_end() {
///     names.push(it.entry().unwrap().path().filename().to_string());
///     it.advance().unwrap();
/// }
/// assert_eq!(names, ["a", "sub"]);
/// ```
#[derive(Debug)]
pub struct DirectoryIterator<F: Filesystem = OsFilesystem> {
    state: Option<Rc<RefCell<ReadDirState<F>>>>,
    // error stashed by the Iterator adapter, yielded on the next call
    pending: Option<Error>,
}

#[derive(Debug)]
struct ReadDirState<F: Filesystem> {
    fs: F,
    // None once the sequence has ended; every copy observes it
    handle: Option<F::Handle>,
    dir: Path,
    entry: DirectoryEntry<F>,
}

impl<F: Filesystem> ReadDirState<F> {
    fn open(fs: F, root: Path) -> Option<Self> {
        let handle = match fs.open_enum(&root) {
            Ok(handle) => handle,
            Err(error) => {
                log::debug!("open_enum {root} failed: {error}");
                return None;
            }
        };
        let entry = DirectoryEntry::from_parts(fs.clone(), Path::new(), None);
        let mut state = Self {
            fs,
            handle: Some(handle),
            dir: root,
            entry,
        };
        match state.step() {
            Ok(true) => Some(state),
            Ok(false) => None,
            Err(error) => {
                log::debug!("initial advance in {} failed: {error}", state.dir);
                state.invalidate();
                None
            }
        }
    }

    // Next non-dot raw entry at this level, or None at end of directory.
    fn next_raw(&mut self) -> Result<Option<RawDirEntry>> {
        let Some(handle) = self.handle.as_mut() else {
            return Ok(None);
        };
        loop {
            match self.fs.advance_enum(handle) {
                Ok(None) => return Ok(None),
                Ok(Some(raw)) if grammar::is_dot_entry(&raw.file_name) => {}
                Ok(Some(raw)) => return Ok(Some(raw)),
                Err(error) => return Err(error.into_error("advance_enum", self.dir.clone())),
            }
        }
    }

    fn step(&mut self) -> Result<bool> {
        match self.next_raw()? {
            Some(raw) => {
                let path = self.dir.join(&raw.file_name);
                self.entry = DirectoryEntry::from_parts(self.fs.clone(), path, Some(raw.attributes));
                Ok(true)
            }
            None => {
                self.invalidate();
                Ok(false)
            }
        }
    }

    fn invalidate(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.fs.close_enum(handle);
        }
    }
}

impl<F: Filesystem> Drop for ReadDirState<F> {
    fn drop(&mut self) {
        self.invalidate();
    }
}

impl DirectoryIterator<OsFilesystem> {
    /// Opens an iterator over `root` on the real filesystem.
    #[must_use]
    pub fn new(root: impl Into<Path>) -> Self {
        Self::with_filesystem(OsFilesystem, root)
    }
}

impl<F: Filesystem> DirectoryIterator<F> {
    /// Opens an iterator over `root` on `fs`. An unopenable or empty root
    /// yields a terminal iterator.
    #[must_use]
    pub fn with_filesystem(fs: F, root: impl Into<Path>) -> Self {
        Self {
            state: ReadDirState::open(fs, root.into()).map(|s| Rc::new(RefCell::new(s))),
            pending: None,
        }
    }

    /// The canonical terminal iterator.
    #[must_use]
    pub fn end() -> Self {
        Self {
            state: None,
            pending: None,
        }
    }

    /// Returns `true` once the sequence is exhausted (or was never opened).
    #[must_use]
    pub fn is_end(&self) -> bool {
        match &self.state {
            None => true,
            Some(state) => state.borrow().handle.is_none(),
        }
    }

    /// Moves to the next entry. Returns `Ok(false)` when the sequence ends;
    /// advancing a terminal iterator stays a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::Os`] when the OS enumeration fails; the iterator becomes
    /// terminal.
    pub fn advance(&mut self) -> Result<bool> {
        let Some(state) = &self.state else {
            return Ok(false);
        };
        let mut state = state.borrow_mut();
        if state.handle.is_none() {
            return Ok(false);
        }
        state.step().inspect_err(|_| state.invalidate())
    }

    /// The current entry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIteratorAccess`] on a terminal iterator.
    pub fn entry(&self) -> Result<DirectoryEntry<F>> {
        match &self.state {
            Some(state) if state.borrow().handle.is_some() => Ok(state.borrow().entry.clone()),
            _ => Err(Error::InvalidIteratorAccess),
        }
    }
}

impl<F: Filesystem> Default for DirectoryIterator<F> {
    fn default() -> Self {
        Self::end()
    }
}

impl<F: Filesystem> Clone for DirectoryIterator<F> {
    // copies share the enumeration; a stashed error stays with its owner
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            pending: None,
        }
    }
}

impl<F: Filesystem> PartialEq for DirectoryIterator<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_end() && other.is_end() {
            return true;
        }
        match (&self.state, &other.state) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<F: Filesystem> Eq for DirectoryIterator<F> {}

impl<F: Filesystem> Iterator for DirectoryIterator<F> {
    type Item = Result<DirectoryEntry<F>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = self.pending.take() {
            return Some(Err(error));
        }
        let entry = self.entry().ok()?;
        if let Err(error) = self.advance() {
            self.pending = Some(error);
        }
        Some(Ok(entry))
    }
}
