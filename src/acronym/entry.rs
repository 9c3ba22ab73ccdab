//! A single glossary line

use serde::Serialize;

/// Separator between the acronym and its definition on disk
pub const SEPARATOR: &str = ": ";

/// Normalize an acronym or query the way the store compares them
///
/// Surrounding whitespace is dropped and the rest is uppercased.
#[must_use]
pub fn normalize(acronym: &str) -> String {
    acronym.trim().to_uppercase()
}

/// One `ACRONYM: definition` record
///
/// Acronyms are not unique: the same acronym may appear on several lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcronymEntry {
    /// Uppercase acronym
    pub acronym: String,
    /// Free-text definition
    pub definition: String,
}

impl AcronymEntry {
    /// Create an entry, uppercasing the acronym
    #[must_use]
    pub fn new(acronym: &str, definition: &str) -> Self {
        Self {
            acronym: normalize(acronym),
            definition: definition.trim().to_string(),
        }
    }

    /// Parse a stored line
    ///
    /// Returns `None` for lines without the `": "` separator.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (acronym, definition) = line.split_once(SEPARATOR)?;
        if acronym.is_empty() {
            return None;
        }
        Some(Self {
            acronym: acronym.to_string(),
            definition: definition.to_string(),
        })
    }

    /// The newline-terminated line written to the file
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl std::fmt::Display for AcronymEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.acronym, self.definition)
    }
}
