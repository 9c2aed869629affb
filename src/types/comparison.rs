use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// How quoted string operands are compared by `==` and `!=`.
///
/// The surrounding quote characters are part of the compared text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StringComparison {
    /// Exact comparison of the underlying characters.
    #[default]
    Ordinal,
    /// Characters are compared after Unicode lowercase folding.
    CaseInsensitive,
    /// Canonically equivalent text compares equal (`"é"` precomposed equals
    /// `e` followed by a combining acute accent).
    CultureAware,
}

impl StringComparison {
    /// Compare two strings under this mode.
    #[must_use]
    pub fn equals(self, a: &str, b: &str) -> bool {
        match self {
            StringComparison::Ordinal => a == b,
            StringComparison::CaseInsensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
            StringComparison::CultureAware => a.nfc().eq(b.nfc()),
        }
    }
}

impl fmt::Display for StringComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringComparison::Ordinal => write!(f, "ordinal"),
            StringComparison::CaseInsensitive => write!(f, "case-insensitive"),
            StringComparison::CultureAware => write!(f, "culture-aware"),
        }
    }
}
