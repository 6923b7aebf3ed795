use thiserror::Error;

/// Why a dictionary could not be resolved.
///
/// `key` is the dotted path of the leaf that holds the offending reference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Error)]
pub enum ResolveError {
    #[error(
        "Cannot parse translations: there is no property {segment} in translation (key `{key}` references `{reference}`)"
    )]
    UnresolvedReference {
        key: String,
        reference: String,
        segment: String,
    },

    #[error("Cannot parse translations: circular reference at `{key}`: {}", .chain.join(" -> "))]
    CircularReference { key: String, chain: Vec<String> },
}

impl ResolveError {
    pub fn key(&self) -> &str {
        match self {
            ResolveError::UnresolvedReference { key, .. } => key,
            ResolveError::CircularReference { key, .. } => key,
        }
    }
}
