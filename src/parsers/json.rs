use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::{
    config::Config,
    dictionary::{Dictionary, DictionaryTree, Locale},
};

/// Locales shipped with the wallet UI bundle.
pub const KNOWN_LOCALES: &[&str] = &[
    "en", "ru", "es", "pt", "zh", "uz", "uk", "tr", "de", "fa", "ar", "it", "fr", "id", "pl", "ja",
    "kk", "ky", "no",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanWarningKind {
    /// The file could not be read or is not a dictionary tree.
    ParseError,
    /// The file name is not one of [`KNOWN_LOCALES`]. The file is still loaded.
    UnknownLocale,
}

/// A warning from scanning message files.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub kind: ScanWarningKind,
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub dictionary: Dictionary,
    /// Message file loaded for each locale.
    pub files: BTreeMap<Locale, PathBuf>,
    pub warnings: Vec<MessageScanWarning>,
}

pub fn parse_json_file(path: &Path) -> Result<DictionaryTree> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse JSON file: {:?} (expected nested objects of strings)",
            path
        )
    })
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Whether `locale` is one of [`KNOWN_LOCALES`], ignoring any region suffix.
pub fn is_known_locale(locale: &str) -> bool {
    let language = locale.split(['-', '_']).next().unwrap_or(locale);
    KNOWN_LOCALES.contains(&language)
}

pub fn scan_message_files(
    message_dir: impl AsRef<Path>,
    config: &Config,
) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .dictrefrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(message_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();

    for path in paths {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if config.is_ignored(&file_name) {
            continue;
        }
        let Some(locale) = extract_locale(&path) else {
            continue;
        };
        if !config.includes_locale(&locale) {
            continue;
        }

        if !is_known_locale(&locale) {
            result.warnings.push(MessageScanWarning {
                kind: ScanWarningKind::UnknownLocale,
                file_path: path.to_string_lossy().to_string(),
                error: format!("Unknown locale code '{}'", locale),
            });
        }

        match parse_json_file(&path) {
            Ok(tree) => {
                result.dictionary.insert(locale.clone(), tree);
                result.files.insert(locale, path);
            }
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    kind: ScanWarningKind::ParseError,
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}

impl ScanMessagesResult {
    pub fn parse_errors(&self) -> impl Iterator<Item = &MessageScanWarning> {
        self.warnings
            .iter()
            .filter(|w| w.kind == ScanWarningKind::ParseError)
    }
}
