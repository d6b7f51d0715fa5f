//! File attribute bitmask and reparse-point classification.

use bitflags::bitflags;

bitflags! {
    /// Attribute snapshot attached to a directory entry.
    ///
    /// The numeric values mirror the platform's native attribute constants so
    /// a raw mask can be adopted verbatim. An *unknown* attribute state (the
    /// probe failed or the path does not exist) is modeled as
    /// `Option::<FileAttributes>::None` rather than a flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileAttributes: u32 {
        /// The entry cannot be written to.
        const READONLY = 0x0000_0001;
        /// The entry is hidden from normal listings.
        const HIDDEN = 0x0000_0002;
        /// The entry is a directory.
        const DIRECTORY = 0x0000_0010;
        /// The entry has no other attributes set.
        const NORMAL = 0x0000_0080;
        /// The entry is backed by temporary storage.
        const TEMPORARY = 0x0000_0100;
        /// The entry is a reparse point: a symlink or a junction. A
        /// secondary [`ReparseTag`] probe disambiguates the two.
        const REPARSE_POINT = 0x0000_0400;
    }
}

impl FileAttributes {
    /// Returns `true` for a directory that is not a reparse point.
    #[must_use]
    pub const fn is_plain_directory(self) -> bool {
        self.contains(Self::DIRECTORY) && !self.contains(Self::REPARSE_POINT)
    }

    /// Returns `true` for an entry that is neither a directory nor a
    /// reparse point.
    #[must_use]
    pub const fn is_plain_file(self) -> bool {
        !self.contains(Self::DIRECTORY) && !self.contains(Self::REPARSE_POINT)
    }
}

/// Disambiguation of a reparse-point entry.
///
/// Only meaningful for paths whose attributes carry
/// [`FileAttributes::REPARSE_POINT`]; everything else probes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReparseTag {
    /// A symbolic link.
    Symlink,
    /// A mount-point junction.
    MountPoint,
    /// The tag could not be determined (or the entry is no reparse point).
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_directory() {
        assert!(FileAttributes::DIRECTORY.is_plain_directory());
        let linked = FileAttributes::DIRECTORY | FileAttributes::REPARSE_POINT;
        assert!(!linked.is_plain_directory());
        assert!(!FileAttributes::NORMAL.is_plain_directory());
    }

    #[test]
    fn test_plain_file() {
        assert!(FileAttributes::NORMAL.is_plain_file());
        assert!((FileAttributes::READONLY | FileAttributes::HIDDEN).is_plain_file());
        assert!(!FileAttributes::DIRECTORY.is_plain_file());
        assert!(!FileAttributes::REPARSE_POINT.is_plain_file());
    }

    #[test]
    fn test_native_values() {
        assert_eq!(FileAttributes::DIRECTORY.bits(), 0x10);
        assert_eq!(FileAttributes::REPARSE_POINT.bits(), 0x400);
    }
}
