//! dictref - translation dictionaries with `$key.path` references
//!
//! Locale dictionaries are nested string-keyed trees of text. A value starting
//! with `$` points at another entry of the same locale (`"$common.close"`), and
//! `\$` escapes a literal dollar sign. This crate loads such dictionaries,
//! resolves every reference once at startup, and exposes the result as
//! read-only translations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `dictionary`: Dictionary trees and reference resolution
//! - `issues`: Issues reported by the `check` command
//! - `parsers`: Locale message file loading

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod issues;
pub mod parsers;
