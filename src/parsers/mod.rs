//! Parsers for locale message files.
//!
//! - `json`: JSON message file parser (scans the messages directory)

pub mod json;
