//! Issues reported by the `check` command.

use std::cmp::Ordering;

use crate::dictionary::ResolveError;

/// A reference in one locale file that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReferenceIssue {
    pub locale: String,
    pub file_path: String,
    pub error: ResolveError,
}

impl ReferenceIssue {
    pub fn new(
        locale: impl Into<String>,
        file_path: impl Into<String>,
        error: ResolveError,
    ) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            error,
        }
    }

    /// Short rule name shown next to the message.
    pub fn rule(&self) -> &'static str {
        match self.error {
            ResolveError::UnresolvedReference { .. } => "unresolved-reference",
            ResolveError::CircularReference { .. } => "circular-reference",
        }
    }

    pub fn key(&self) -> &str {
        self.error.key()
    }

    /// Report order: locale, then key.
    pub fn report_order(&self, other: &Self) -> Ordering {
        self.locale
            .cmp(&other.locale)
            .then_with(|| self.key().cmp(other.key()))
            .then_with(|| self.cmp(other))
    }
}
