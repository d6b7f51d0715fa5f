//! The real, `std::fs`-backed filesystem.

use std::fs;
use std::io;

use super::attributes::{FileAttributes, ReparseTag};
use super::provider::{Filesystem, FsError, FsResult, RawDirEntry};
use crate::path::Path;

/// Filesystem implementation backed by the operating system.
///
/// Path text crosses the OS boundary here: on non-Windows hosts every `\`
/// separator is rewritten to `/` at this boundary only, so the library's
/// composition rules keep working against a single-root filesystem. Junction
/// detection is not possible through `std`; reparse probes report
/// [`ReparseTag::Symlink`] for symlinks and [`ReparseTag::Unknown`] for
/// everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

fn to_os_path(path: &Path) -> std::path::PathBuf {
    if cfg!(windows) {
        std::path::PathBuf::from(path.as_str())
    } else {
        std::path::PathBuf::from(path.as_str().replace('\\', "/"))
    }
}

fn map_io(error: io::Error) -> FsError {
    if error.kind() == io::ErrorKind::PermissionDenied {
        FsError::AccessDenied
    } else {
        FsError::Os(error)
    }
}

fn probe_attributes(path: &std::path::Path) -> Option<FileAttributes> {
    let meta = fs::symlink_metadata(path).ok()?;
    let mut attrs = FileAttributes::empty();

    if meta.file_type().is_symlink() {
        attrs |= FileAttributes::REPARSE_POINT;
        // mirror the platform convention: a link to a directory carries the
        // directory attribute as well
        if fs::metadata(path).map(|target| target.is_dir()).unwrap_or(false) {
            attrs |= FileAttributes::DIRECTORY;
        }
    } else if meta.is_dir() {
        attrs |= FileAttributes::DIRECTORY;
    }

    if meta.permissions().readonly() {
        attrs |= FileAttributes::READONLY;
    }

    if attrs.is_empty() {
        attrs = FileAttributes::NORMAL;
    }

    Some(attrs)
}

impl Filesystem for OsFilesystem {
    type Handle = fs::ReadDir;

    fn open_enum(&self, dir: &Path) -> FsResult<Self::Handle> {
        fs::read_dir(to_os_path(dir)).map_err(map_io)
    }

    fn advance_enum(&self, handle: &mut Self::Handle) -> FsResult<Option<RawDirEntry>> {
        match handle.next() {
            None => Ok(None),
            Some(Err(error)) => Err(map_io(error)),
            Some(Ok(entry)) => {
                let attributes =
                    probe_attributes(&entry.path()).unwrap_or(FileAttributes::NORMAL);
                Ok(Some(RawDirEntry {
                    file_name: entry.file_name().to_string_lossy().into_owned(),
                    attributes,
                }))
            }
        }
    }

    fn close_enum(&self, handle: Self::Handle) {
        drop(handle);
    }

    fn attributes(&self, path: &Path) -> Option<FileAttributes> {
        probe_attributes(&to_os_path(path))
    }

    fn reparse_tag(&self, path: &Path) -> ReparseTag {
        match fs::symlink_metadata(to_os_path(path)) {
            Ok(meta) if meta.file_type().is_symlink() => ReparseTag::Symlink,
            _ => ReparseTag::Unknown,
        }
    }

    fn current_directory(&self) -> FsResult<Path> {
        let cwd = std::env::current_dir().map_err(map_io)?;
        Ok(Path::from(cwd.to_string_lossy().into_owned()))
    }

    fn set_current_directory(&self, path: &Path) -> FsResult<()> {
        std::env::set_current_dir(to_os_path(path)).map_err(map_io)
    }
}

/// Returns the process-wide current directory as a [`Path`].
///
/// # Errors
///
/// [`crate::Error::Os`] when the OS cannot report the current directory.
pub fn current_directory() -> crate::Result<Path> {
    OsFilesystem
        .current_directory()
        .map_err(|e| e.into_error("current_directory", Path::new()))
}

/// Changes the process-wide current directory.
///
/// # Errors
///
/// [`crate::Error`] when the OS rejects the change.
pub fn set_current_directory(path: &Path) -> crate::Result<()> {
    OsFilesystem
        .set_current_directory(path)
        .map_err(|e| e.into_error("set_current_directory", path.clone()))
}
