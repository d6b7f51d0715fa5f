//! Element-wise path iteration.

use std::iter::FusedIterator;

use super::grammar;

/// Iterator over the elements of a path's text.
///
/// Yields, in order: the root-name (when a drive prefix is present), the
/// root-directory (a single separator element), then every
/// separator-delimited component of the relative part. Runs of adjacent
/// separators are skipped as one; empty elements are never produced.
///
/// Two iterators compare equal when both are terminal, or when they refer to
/// the same element text at the same internal offset.
///
/// # Examples
///
/// ```
/// use pathwalk::Path;
///
/// let path = Path::from("C:\\\\foo\\bar\\\\\\meow\\\\\\\\\\");
/// let elements: Vec<&str> = path.components().collect();
/// assert_eq!(elements, ["C:", "\\", "foo", "bar", "meow"]);
/// ```
#[derive(Debug, Clone)]
pub struct Components<'a> {
    text: &'a str,
    pos: usize,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing produced yet.
    Start,
    /// Root-name produced; a separator here is the root-directory element.
    AfterRootName,
    /// Producing relative components.
    Body,
    /// Terminal: no path reference remains meaningful.
    Done,
}

impl<'a> Components<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            state: State::Start,
        }
    }

    /// Returns `true` once iteration has passed the last element.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    fn next_body_component(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && is_separator(bytes[self.pos]) {
            self.pos += 1;
        }

        if self.pos >= bytes.len() {
            self.state = State::Done;
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && !is_separator(bytes[self.pos]) {
            self.pos += 1;
        }

        Some(&self.text[start..self.pos])
    }
}

const fn is_separator(byte: u8) -> bool {
    byte == b'\\' || byte == b'/'
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Start => {
                    if self.text.is_empty() {
                        self.state = State::Done;
                        return None;
                    }
                    if grammar::has_drive(self.text) {
                        self.pos = 2;
                        self.state = State::AfterRootName;
                        return Some(&self.text[..2]);
                    }
                    if is_separator(self.text.as_bytes()[0]) {
                        self.pos = 1;
                        self.state = State::Body;
                        return Some(&self.text[..1]);
                    }
                    self.state = State::Body;
                }
                State::AfterRootName => {
                    self.state = State::Body;
                    let bytes = self.text.as_bytes();
                    if self.pos < bytes.len() && is_separator(bytes[self.pos]) {
                        let element = &self.text[self.pos..=self.pos];
                        self.pos += 1;
                        return Some(element);
                    }
                }
                State::Body => return self.next_body_component(),
                State::Done => return None,
            }
        }
    }
}

impl FusedIterator for Components<'_> {}

impl PartialEq for Components<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.state == State::Done && other.state == State::Done {
            return true;
        }

        self.state == other.state && self.pos == other.pos && self.text == other.text
    }
}

impl Eq for Components<'_> {}

#[cfg(test)]
mod tests {
    use crate::path::Path;

    fn elements(text: &str) -> Vec<String> {
        Path::from(text)
            .components()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_absolute_path() {
        assert_eq!(
            elements("C:\\foo\\bar\\meow"),
            ["C:", "\\", "foo", "bar", "meow"]
        );
    }

    #[test]
    fn test_dirty_absolute_path() {
        assert_eq!(
            elements("C:\\\\\\\\foo\\\\bar\\\\\\meow\\\\\\\\\\"),
            ["C:", "\\", "foo", "bar", "meow"]
        );
    }

    #[test]
    fn test_absolute_path_without_root_directory() {
        assert_eq!(elements("C:foo\\bar\\meow"), ["C:", "foo", "bar", "meow"]);
    }

    #[test]
    fn test_rooted_path_without_root_name() {
        assert_eq!(elements("\\foo\\bar\\meow"), ["\\", "foo", "bar", "meow"]);
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(elements("foo\\bar\\meow"), ["foo", "bar", "meow"]);
    }

    #[test]
    fn test_dirty_relative_path() {
        assert_eq!(elements("foo\\\\\\bar\\\\\\\\meow\\\\"), ["foo", "bar", "meow"]);
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(elements("C:/foo\\bar/meow"), ["C:", "/", "foo", "bar", "meow"]);
    }

    #[test]
    fn test_empty_path() {
        assert!(elements("").is_empty());
    }

    #[test]
    fn test_separators_only() {
        assert_eq!(elements("\\\\\\"), ["\\"]);
    }

    #[test]
    fn test_drive_only() {
        assert_eq!(elements("C:"), ["C:"]);
    }

    #[test]
    fn test_equality() {
        let path = Path::from("a\\b");
        let mut left = path.components();
        let mut right = path.components();
        assert_eq!(left, right);

        left.next();
        assert_ne!(left, right);

        right.next();
        assert_eq!(left, right);

        // exhaust both; terminal iterators are canonically equal
        left.by_ref().count();
        right.by_ref().count();
        assert_eq!(left, right);
        assert!(left.is_done());
    }

    #[test]
    fn test_terminal_iterators_equal_across_paths() {
        let one = Path::from("a");
        let two = Path::from("b\\c");
        let mut left = one.components();
        let mut right = two.components();
        left.by_ref().count();
        right.by_ref().count();
        assert_eq!(left, right);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let path = Path::from("x\\y");
        let collected: Vec<&str> = (&path).into_iter().collect();
        assert_eq!(collected, ["x", "y"]);
    }
}
