//! Traversal behavior flags.

use bitflags::bitflags;

bitflags! {
    /// Options controlling recursive traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::DirectoryOptions;
    ///
    /// let options = DirectoryOptions::FOLLOW_DIRECTORY_SYMLINK
    ///     | DirectoryOptions::SKIP_PERMISSION_DENIED;
    /// assert!(options.contains(DirectoryOptions::SKIP_PERMISSION_DENIED));
    /// ```
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct DirectoryOptions: u32 {
        /// Descend through directory symlinks. Without this flag a symlink
        /// to a directory is yielded but never entered.
        const FOLLOW_DIRECTORY_SYMLINK = 0x1;
        /// Treat an access-denied failure when entering a subdirectory as
        /// "do not descend" instead of a traversal error.
        const SKIP_PERMISSION_DENIED = 0x2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(DirectoryOptions::default(), DirectoryOptions::empty());
    }

    #[test]
    fn test_flags_compose() {
        let options =
            DirectoryOptions::FOLLOW_DIRECTORY_SYMLINK | DirectoryOptions::SKIP_PERMISSION_DENIED;
        assert!(options.contains(DirectoryOptions::FOLLOW_DIRECTORY_SYMLINK));
        assert!(options.contains(DirectoryOptions::SKIP_PERMISSION_DENIED));
    }
}
