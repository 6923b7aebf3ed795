use std::fmt;

/// Marks a leaf as a reference to another entry: `"$Common.submit"`.
pub const REFERENCE_MARKER: char = '$';

/// Marks a leaf as literal text that starts with the reference marker: `"\$5"`.
pub const ESCAPE_PREFIX: &str = "\\$";

/// Separates segments of a reference path.
pub const PATH_SEPARATOR: char = '.';

/// How a leaf value should be treated during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafKind<'a> {
    /// Plain text, kept as is.
    Literal,
    /// Escaped marker; holds the text with the leading backslash removed.
    Escaped(&'a str),
    /// A reference to another node in the same tree.
    Reference(ReferencePath<'a>),
}

impl<'a> LeafKind<'a> {
    pub fn classify(value: &'a str) -> Self {
        if let Some(path) = value.strip_prefix(REFERENCE_MARKER) {
            LeafKind::Reference(ReferencePath::from_raw(path))
        } else if value.starts_with(ESCAPE_PREFIX) {
            LeafKind::Escaped(&value[1..])
        } else {
            LeafKind::Literal
        }
    }
}

/// The dotted path of a reference leaf, without the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferencePath<'a>(&'a str);

impl<'a> ReferencePath<'a> {
    /// Wrap a path given without the leading marker.
    pub(crate) fn from_raw(path: &'a str) -> Self {
        Self(path)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Path segments; `"$"` alone yields a single empty segment.
    pub fn segments(self) -> impl Iterator<Item = &'a str> {
        self.0.split(PATH_SEPARATOR)
    }
}

impl fmt::Display for ReferencePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", REFERENCE_MARKER, self.0)
    }
}
