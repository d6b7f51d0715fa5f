//! Pure lexical functions over path text.
//!
//! Every function here is total: any `&str` input, including the empty
//! string, produces a well-defined result without allocating or touching the
//! OS. All returned slices borrow from the input.
//!
//! The grammar models a drive-letter platform: both `\` and `/` are accepted
//! separators, a root-name is a single ASCII letter followed by `:`, and the
//! root-directory is the one separator immediately after the root-name (or at
//! offset 0). Runs of adjacent separators always collapse into one; no
//! operation ever produces an empty path element.

/// The separator produced by composition and [`make_preferred`].
///
/// [`make_preferred`]: crate::Path::make_preferred
pub const PREFERRED_SEPARATOR: char = '\\';

/// The alternate separator accepted (but never produced) by the grammar.
pub const ALTERNATE_SEPARATOR: char = '/';

/// Returns `true` for either accepted separator character.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::is_slash;
///
/// assert!(is_slash('\\'));
/// assert!(is_slash('/'));
/// assert!(!is_slash(':'));
/// ```
#[must_use]
pub const fn is_slash(ch: char) -> bool {
    ch == PREFERRED_SEPARATOR || ch == ALTERNATE_SEPARATOR
}

const fn is_slash_byte(byte: u8) -> bool {
    byte == b'\\' || byte == b'/'
}

/// Returns `true` if `ch` can open a drive prefix (any ASCII letter).
#[must_use]
pub const fn is_drive_prefix(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Returns `true` for the special `.` and `..` directory entries.
#[must_use]
pub fn is_dot_entry(name: &str) -> bool {
    name == "." || name == ".."
}

/// Returns `true` if `text` starts with a drive prefix such as `C:`.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::has_drive;
///
/// assert!(has_drive("C:\\Users"));
/// assert!(has_drive("x:relative"));
/// assert!(!has_drive("/foo"));
/// assert!(!has_drive("C"));
/// ```
#[must_use]
pub fn has_drive(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Returns `true` if `text` starts with a drive prefix followed by a
/// separator, such as `C:\`.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::has_drive_and_slash;
///
/// assert!(has_drive_and_slash("C:\\Users"));
/// assert!(has_drive_and_slash("C:/Users"));
/// assert!(!has_drive_and_slash("C:Users"));
/// ```
#[must_use]
pub fn has_drive_and_slash(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && is_slash_byte(bytes[2])
}

/// Returns the byte offset of the last separator in `text`, if any.
#[must_use]
pub fn find_last_slash(text: &str) -> Option<usize> {
    text.bytes().rposition(is_slash_byte)
}

/// Returns the root-name of `text`: the 2-character drive prefix when
/// present, empty otherwise.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::root_name;
///
/// assert_eq!(root_name("C:\\Windows\\System32\\"), "C:");
/// assert_eq!(root_name("/foo/bar.txt"), "");
/// ```
#[must_use]
pub fn root_name(text: &str) -> &str {
    if has_drive(text) {
        &text[..2]
    } else {
        ""
    }
}

/// Returns the root-directory of `text`: the single separator marking an
/// absolute location, empty when there is none.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::root_directory;
///
/// assert_eq!(root_directory("C:\\Users\\Xyz"), "\\");
/// assert_eq!(root_directory("/foo/bar"), "/");
/// assert_eq!(root_directory("foo/bar/baz/"), "");
/// ```
#[must_use]
pub fn root_directory(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return "";
    }

    if is_slash_byte(bytes[0]) {
        // "\" or "/" at the begin is a root directory
        return &text[..1];
    }

    if has_drive_and_slash(text) {
        // the slash from "X:\" or "X:/"
        &text[2..3]
    } else {
        ""
    }
}

/// Returns the root-path of `text`: root-name plus root-directory.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::root_path;
///
/// assert_eq!(root_path("C:\\Users"), "C:\\");
/// assert_eq!(root_path("/foo"), "/");
/// assert_eq!(root_path("C:relative"), "C:");
/// assert_eq!(root_path("foo/bar"), "");
/// ```
#[must_use]
pub fn root_path(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return "";
    }

    if is_slash_byte(bytes[0]) {
        // root directory only
        return &text[..1];
    }

    if has_drive_and_slash(text) {
        &text[..3]
    } else if has_drive(text) {
        &text[..2]
    } else {
        ""
    }
}

/// Returns everything after the root-path.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::relative_path;
///
/// assert_eq!(relative_path("C:\\Users\\Xyz"), "Users\\Xyz");
/// assert_eq!(relative_path("/foo/bar"), "foo/bar");
/// assert_eq!(relative_path("foo/bar.txt"), "foo/bar.txt");
/// ```
#[must_use]
pub fn relative_path(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return "";
    }

    if is_slash_byte(bytes[0]) {
        &text[1..]
    } else if has_drive_and_slash(text) {
        &text[3..]
    } else if has_drive(text) {
        &text[2..]
    } else {
        text
    }
}

/// Returns the text up to (not including) the last separator.
///
/// When the only separator is at offset 0 the result is the 1-character root
/// directory; when there is no separator at all the whole input is returned
/// (no parent exists).
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::parent_path;
///
/// assert_eq!(parent_path("/var/tmp/example.txt"), "/var/tmp");
/// assert_eq!(parent_path("/"), "/");
/// assert_eq!(parent_path("standalone"), "standalone");
/// ```
#[must_use]
pub fn parent_path(text: &str) -> &str {
    if text.is_empty() {
        return "";
    }

    match find_last_slash(text) {
        Some(0) => &text[..1],
        None => text,
        Some(offset) => &text[..offset],
    }
}

/// An (offset, length) pair describing a slice of an existing path buffer.
///
/// Used to locate the filename without allocating; "found" means the offset
/// is valid and the length is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment {
    offset: usize,
    length: usize,
}

impl PathSegment {
    const NOT_FOUND: Self = Self {
        offset: usize::MAX,
        length: 0,
    };

    /// Returns `true` when the segment describes an actual slice.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.offset != usize::MAX && self.length != 0
    }

    /// Byte offset of the segment within the source buffer.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Byte length of the segment.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` when the segment is zero-length.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Locates the filename of `text` as a [`PathSegment`].
///
/// Empty input or input ending in a separator yields a not-found segment;
/// otherwise the segment covers everything after the last separator (or the
/// whole input when no separator exists).
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::find_filename;
///
/// assert!(find_filename("foo/bar").is_found());
/// assert_eq!(find_filename("foo/bar").offset(), 4);
/// assert!(!find_filename("foo/").is_found());
/// assert!(!find_filename("").is_found());
/// ```
#[must_use]
pub fn find_filename(text: &str) -> PathSegment {
    if text.is_empty() {
        return PathSegment::NOT_FOUND;
    }

    match find_last_slash(text) {
        None => PathSegment {
            offset: 0,
            length: text.len(),
        },
        // slash at the end means the path ends with a directory
        Some(offset) if offset == text.len() - 1 => PathSegment::NOT_FOUND,
        Some(offset) => PathSegment {
            offset: offset + 1,
            length: text.len() - offset - 1,
        },
    }
}

/// Returns the filename of `text`, empty when it ends in a separator.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::filename;
///
/// assert_eq!(filename("/foo/bar.txt"), "bar.txt");
/// assert_eq!(filename("/foo/.."), "..");
/// assert_eq!(filename("/foo/bar/"), "");
/// ```
#[must_use]
pub fn filename(text: &str) -> &str {
    let segment = find_filename(text);
    if segment.is_found() {
        &text[segment.offset()..segment.offset() + segment.len()]
    } else {
        ""
    }
}

/// Returns the extension of an already-isolated filename.
///
/// Empty for empty input, for the special `.`/`..` entries, and when the only
/// `.` is at offset 0 (a dotfile has no extension). Otherwise the slice from
/// the last `.` (inclusive) to the end.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::extension_from_filename;
///
/// assert_eq!(extension_from_filename("bar.txt"), ".txt");
/// assert_eq!(extension_from_filename(".hidden"), "");
/// assert_eq!(extension_from_filename(".."), "");
/// ```
#[must_use]
pub fn extension_from_filename(name: &str) -> &str {
    if name.is_empty() || is_dot_entry(name) {
        return "";
    }

    match name.rfind('.') {
        Some(dot) if dot != 0 => &name[dot..],
        _ => "",
    }
}

/// Returns the extension of the filename of `text`.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::extension;
///
/// assert_eq!(extension("/foo/bar.txt"), ".txt");
/// assert_eq!(extension("/foo/bar."), ".");
/// assert_eq!(extension("/foo/bar"), "");
/// ```
#[must_use]
pub fn extension(text: &str) -> &str {
    extension_from_filename(filename(text))
}

/// Returns the filename of `text` with its extension suffix removed.
///
/// Equals the filename when the extension is empty.
///
/// # Examples
///
/// ```
/// use pathwalk::grammar::stem;
///
/// assert_eq!(stem("/foo/bar.txt"), "bar");
/// assert_eq!(stem("/foo/.bar"), ".bar");
/// assert_eq!(stem("foo.bar.baz.tar"), "foo.bar.baz");
/// ```
#[must_use]
pub fn stem(text: &str) -> &str {
    let name = filename(text);
    let ext = extension_from_filename(name);
    &name[..name.len() - ext.len()]
}
