//! Translation dictionaries and `$key.path` reference resolution.
//!
//! - `tree`: the `DictionaryTree` / `Node` data model
//! - `reference`: classification of leaves (literal, escaped, reference)
//! - `resolver`: rewrites references into the nodes they point to
//! - `store`: per-locale dictionaries and the process-wide resolved translations

pub mod error;
pub mod reference;
pub mod resolver;
pub mod store;
pub mod tree;

pub use error::ResolveError;
pub use reference::{ESCAPE_PREFIX, LeafKind, REFERENCE_MARKER, ReferencePath};
pub use resolver::{check, resolve, resolve_in_place};
pub use store::{
    AlreadyInstalled, Dictionary, Locale, LocaleResolveError, Translations, install, installed,
};
pub use tree::{DictionaryTree, Node};
