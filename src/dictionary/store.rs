use std::collections::BTreeMap;

use once_cell::sync::OnceCell;
use thiserror::Error;

use super::{
    error::ResolveError,
    resolver,
    tree::{DictionaryTree, Node},
};

/// Locale identifier, e.g. `"en"` or `"zh-CN"`.
pub type Locale = String;

/// Unresolved trees for every loaded locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    locales: BTreeMap<Locale, DictionaryTree>,
}

/// A locale that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to resolve locale '{locale}'")]
pub struct LocaleResolveError {
    pub locale: Locale,
    #[source]
    pub source: ResolveError,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: impl Into<Locale>, tree: DictionaryTree) {
        self.locales.insert(locale.into(), tree);
    }

    pub fn get(&self, locale: &str) -> Option<&DictionaryTree> {
        self.locales.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryTree)> {
        self.locales.iter().map(|(locale, tree)| (locale.as_str(), tree))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Resolve each locale once. Stops at the first locale that fails.
    pub fn resolve(self) -> Result<Translations, LocaleResolveError> {
        let mut resolved = BTreeMap::new();
        for (locale, tree) in self.locales {
            match resolver::resolve(tree) {
                Ok(tree) => {
                    resolved.insert(locale, tree);
                }
                Err(source) => return Err(LocaleResolveError { locale, source }),
            }
        }
        Ok(Translations { locales: resolved })
    }
}

impl FromIterator<(Locale, DictionaryTree)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (Locale, DictionaryTree)>>(iter: I) -> Self {
        Self {
            locales: iter.into_iter().collect(),
        }
    }
}

/// Resolved, read-only translations for every locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    locales: BTreeMap<Locale, DictionaryTree>,
}

impl Translations {
    pub fn locale(&self, locale: &str) -> Option<&DictionaryTree> {
        self.locales.get(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryTree)> {
        self.locales.iter().map(|(locale, tree)| (locale.as_str(), tree))
    }

    pub fn lookup(&self, locale: &str, key: &str) -> Option<&Node> {
        self.locale(locale)?.get_path(key)
    }

    /// Text of `key` in `locale`. Subtrees are not text and yield `None`.
    pub fn text(&self, locale: &str, key: &str) -> Option<&str> {
        self.lookup(locale, key)?.as_leaf()
    }

    /// Look up `key` in `locale`, then in `fallback` if it is missing.
    pub fn translate(&self, locale: &str, key: &str, fallback: &str) -> Option<&Node> {
        self.lookup(locale, key)
            .or_else(|| self.lookup(fallback, key))
    }
}

static INSTALLED: OnceCell<Translations> = OnceCell::new();

#[derive(Debug, Error)]
#[error("translations are already installed")]
pub struct AlreadyInstalled;

/// Publish `translations` for the rest of the process.
///
/// Can only succeed once; later calls get [`AlreadyInstalled`].
pub fn install(translations: Translations) -> Result<&'static Translations, AlreadyInstalled> {
    INSTALLED.set(translations).map_err(|_| AlreadyInstalled)?;
    INSTALLED.get().ok_or(AlreadyInstalled)
}

/// The process-wide translations, if [`install`] has been called.
pub fn installed() -> Option<&'static Translations> {
    INSTALLED.get()
}
