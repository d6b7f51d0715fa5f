//! Depth-first recursive directory traversal.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dir::entry::DirectoryEntry;
use crate::dir::options::DirectoryOptions;
use crate::error::{Error, Result};
use crate::fs::{FileAttributes, Filesystem, FsError, OsFilesystem, RawDirEntry};
use crate::path::{grammar, Path};

/// Iterates a directory tree in depth-first pre-order.
///
/// Each directory is yielded before its contents. Descent is deferred by one
/// step: yielding a directory arms a pending-descent flag, and the next
/// [`advance`](RecursiveDirectoryIterator::advance) enters it. Parent
/// enumeration handles live on an explicit stack, so traversal depth is
/// bounded by memory, not the call stack.
///
/// A directory symlink is yielded but not entered unless
/// [`DirectoryOptions::FOLLOW_DIRECTORY_SYMLINK`] is set. An access-denied
/// failure while entering a subdirectory is fatal unless
/// [`DirectoryOptions::SKIP_PERMISSION_DENIED`] is set, in which case the
/// subdirectory is skipped and traversal resumes at its sibling.
///
/// Copies share the traversal, exactly as with
/// [`DirectoryIterator`](crate::DirectoryIterator).
///
/// # Examples
///
/// ```
/// use pathwalk::{MemoryFilesystem, RecursiveDirectoryIterator};
///
/// let fs = MemoryFilesystem::new();
/// fs.create_file("C:\\root\\a\\x").create_file("C:\\root\\b");
///
/// let paths: Vec<String> = RecursiveDirectoryIterator::with_filesystem(
///     fs,
///     "C:\\root",
///     Default::default(),
/// )
/// .map(|entry| entry.unwrap().path().to_string())
/// .collect();
/// assert_eq!(paths, ["C:\\root\\a", "C:\\root\\a\\x", "C:\\root\\b"]);
/// ```
#[derive(Debug)]
pub struct RecursiveDirectoryIterator<F: Filesystem = OsFilesystem> {
    state: Option<Rc<RefCell<WalkState<F>>>>,
    pending: Option<Error>,
}

#[derive(Debug)]
struct WalkState<F: Filesystem> {
    fs: F,
    // None once the traversal has ended; every copy observes it
    handle: Option<F::Handle>,
    stack: Vec<F::Handle>,
    // directory currently being enumerated
    dir: Path,
    // filename of the current entry, snapshotted at yield time so the
    // descent target survives whatever the next enumeration call overwrites
    name: String,
    entry: DirectoryEntry<F>,
    options: DirectoryOptions,
    recursion_pending: bool,
}

fn should_recurse(attributes: FileAttributes, options: DirectoryOptions) -> bool {
    attributes.contains(FileAttributes::DIRECTORY)
        && (!attributes.contains(FileAttributes::REPARSE_POINT)
            || options.contains(DirectoryOptions::FOLLOW_DIRECTORY_SYMLINK))
}

impl<F: Filesystem> WalkState<F> {
    fn open(fs: F, root: Path, options: DirectoryOptions) -> Option<Self> {
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
            stack: Vec::new(),
            dir: root,
            name: String::new(),
            entry,
            options,
            recursion_pending: false,
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
        loop {
            if self.recursion_pending {
                self.recursion_pending = false;
                let child = self.dir.join(self.name.as_str());
                match self.fs.open_enum(&child) {
                    Ok(new_handle) => {
                        log::trace!("descending into {child}");
                        if let Some(parent) = self.handle.replace(new_handle) {
                            self.stack.push(parent);
                        }
                        self.dir = child;
                        // dot-skipping on the new level happens in the
                        // enumeration loop below
                    }
                    Err(FsError::AccessDenied)
                        if self
                            .options
                            .contains(DirectoryOptions::SKIP_PERMISSION_DENIED) =>
                    {
                        log::debug!("skipping denied subdirectory {child}");
                        continue;
                    }
                    Err(error) => return Err(error.into_error("open_enum", child)),
                }
            }

            match self.next_raw()? {
                Some(raw) => {
                    self.name = raw.file_name;
                    let path = self.dir.join(self.name.as_str());
                    self.recursion_pending = should_recurse(raw.attributes, self.options);
                    self.entry =
                        DirectoryEntry::from_parts(self.fs.clone(), path, Some(raw.attributes));
                    return Ok(true);
                }
                None => {
                    if !self.ascend() {
                        self.invalidate();
                        return Ok(false);
                    }
                }
            }
        }
    }

    // Pop one level: close the current handle, restore the parent's, strip
    // the level's component from the tracked path.
    fn ascend(&mut self) -> bool {
        let Some(parent) = self.stack.pop() else {
            return false;
        };
        log::trace!("ascending out of {}", self.dir);
        if let Some(current) = self.handle.replace(parent) {
            self.fs.close_enum(current);
        }
        self.remove_last_component();
        true
    }

    fn remove_last_component(&mut self) {
        self.dir.remove_filename();
        let trimmed = self
            .dir
            .as_str()
            .trim_end_matches(grammar::is_slash)
            .len();
        let keep = trimmed.max(grammar::root_path(self.dir.as_str()).len());
        self.dir.truncate_to(keep);
    }

    fn invalidate(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.fs.close_enum(handle);
        }
        while let Some(handle) = self.stack.pop() {
            self.fs.close_enum(handle);
        }
    }
}

impl<F: Filesystem> Drop for WalkState<F> {
    fn drop(&mut self) {
        self.invalidate();
    }
}

impl RecursiveDirectoryIterator<OsFilesystem> {
    /// Opens a traversal rooted at `root` on the real filesystem, with
    /// default options.
    #[must_use]
    pub fn new(root: impl Into<Path>) -> Self {
        Self::with_options(root, DirectoryOptions::default())
    }

    /// Opens a traversal rooted at `root` on the real filesystem.
    #[must_use]
    pub fn with_options(root: impl Into<Path>, options: DirectoryOptions) -> Self {
        Self::with_filesystem(OsFilesystem, root, options)
    }
}

impl<F: Filesystem> RecursiveDirectoryIterator<F> {
    /// Opens a traversal rooted at `root` on `fs`. An unopenable or empty
    /// root yields a terminal iterator.
    #[must_use]
    pub fn with_filesystem(fs: F, root: impl Into<Path>, options: DirectoryOptions) -> Self {
        Self {
            state: WalkState::open(fs, root.into(), options).map(|s| Rc::new(RefCell::new(s))),
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

    /// Returns `true` once the traversal is exhausted (or was never opened).
    #[must_use]
    pub fn is_end(&self) -> bool {
        match &self.state {
            None => true,
            Some(state) => state.borrow().handle.is_none(),
        }
    }

    /// Moves to the next entry in pre-order. Returns `Ok(false)` when the
    /// traversal ends; advancing a terminal iterator stays a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::AccessDenied`] when a subdirectory cannot be entered and
    /// [`DirectoryOptions::SKIP_PERMISSION_DENIED`] is not set, or
    /// [`Error::Os`] for any other enumeration failure. Either way the
    /// iterator becomes terminal.
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

    /// Abandons the current level or pending descent and resumes at the next
    /// sibling one level up. With the traversal at the root level and no
    /// descent pending, this is a no-op returning `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`advance`](RecursiveDirectoryIterator::advance).
    pub fn pop(&mut self) -> Result<bool> {
        let Some(state) = &self.state else {
            return Ok(false);
        };
        let mut state = state.borrow_mut();
        if state.handle.is_none() {
            return Ok(false);
        }
        if state.ascend() {
            state.recursion_pending = false;
        } else if state.recursion_pending {
            // root level, but a descent is still pending: cancel it so the
            // advance below resumes at the directory's sibling
            state.recursion_pending = false;
        } else {
            return Ok(false);
        }
        state.step().inspect_err(|_| state.invalidate())
    }

    /// The current depth below the traversal root (0 at the root level).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.state
            .as_ref()
            .map_or(0, |state| state.borrow().stack.len())
    }

    /// The options this traversal was opened with.
    #[must_use]
    pub fn options(&self) -> DirectoryOptions {
        self.state
            .as_ref()
            .map_or(DirectoryOptions::empty(), |state| state.borrow().options)
    }

    /// Returns `true` when the current entry is a directory awaiting descent.
    #[must_use]
    pub fn recursion_pending(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.borrow().recursion_pending)
    }

    /// Cancels a pending descent, so the next advance continues with the
    /// current directory's sibling instead of its contents.
    pub fn disable_recursion_pending(&mut self) {
        if let Some(state) = &self.state {
            state.borrow_mut().recursion_pending = false;
        }
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

impl<F: Filesystem> Default for RecursiveDirectoryIterator<F> {
    fn default() -> Self {
        Self::end()
    }
}

impl<F: Filesystem> Clone for RecursiveDirectoryIterator<F> {
    // copies share the traversal; a stashed error stays with its owner
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            pending: None,
        }
    }
}

impl<F: Filesystem> PartialEq for RecursiveDirectoryIterator<F> {
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

impl<F: Filesystem> Eq for RecursiveDirectoryIterator<F> {}

impl<F: Filesystem> Iterator for RecursiveDirectoryIterator<F> {
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
