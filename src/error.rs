use std::fmt;
use std::io;

/// The names of the elements from the root down to the node where
/// serialization failed.
///
/// A path exists only inside an [`Error`]; a successful serialization
/// leaves nothing behind. Displaying a path joins its segments with
/// `" > "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<String>);

impl Path {
    pub(crate) fn new(segments: &[String]) -> Self {
        Path(segments.to_vec())
    }

    /// The element names, root first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" > "))
    }
}

/// What went wrong during serialization.
#[derive(Debug)]
pub enum ErrorKind {
    /// An element name does not match the XML name grammar. Carries the
    /// offending name.
    InvalidTagName(String),
    /// An attribute name does not match the XML name grammar. Carries the
    /// offending name.
    InvalidAttributeName(String),
    /// A structured value could not be encoded by its [`Encode`]
    /// implementation. Carries the debug rendering of the value.
    ///
    /// [`Encode`]: crate::Encode
    Unencodable(String),
    /// The underlying sink rejected a write.
    Io(io::Error),
}

impl From<io::Error> for ErrorKind {
    #[inline]
    fn from(e: io::Error) -> Self {
        ErrorKind::Io(e)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::InvalidTagName(name) => write!(f, "Invalid name for tag: {}", name),
            ErrorKind::InvalidAttributeName(name) => {
                write!(f, "Invalid name for attribute: {}", name)
            }
            ErrorKind::Unencodable(value) => write!(f, "Unable to write: {}", value),
            ErrorKind::Io(e) => write!(f, "{}", e),
        }
    }
}

/// A serialization error, carrying the tree path at which it occurred.
///
/// The path is captured at the deepest failing node and propagates up
/// unchanged, so the message always points at the exact element that
/// caused the failure:
///
/// ```text
/// Invalid name for tag: 1bad (Path: Foo > 1bad)
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    path: Path,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, segments: &[String]) -> Self {
        Error {
            kind,
            path: Path::new(segments),
        }
    }

    /// The kind of failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The element names from the root to the failing node.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} (Path: {})", self.kind, self.path)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}
