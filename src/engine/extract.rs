//! Key extraction strategies.

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Constant pattern, compiling it can't fail.
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""(\S*)""#).expect("valid regex"));

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStrategy {
    /// Everything before the first `:` of each line.
    #[default]
    Line,
    /// Every `"token"` (no whitespace inside the quotes) in the whole text.
    Quoted,
}

impl std::fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyStrategy::Line => write!(f, "line"),
            KeyStrategy::Quoted => write!(f, "quoted"),
        }
    }
}

impl KeyStrategy {
    /// Extracts the keys of `blob` in the order they appear.
    pub fn extract<'a>(&self, blob: &'a str) -> Vec<&'a str> {
        match self {
            KeyStrategy::Line => line_keys(blob).collect(),
            KeyStrategy::Quoted => quoted_keys(blob).collect(),
        }
    }
}

/// One key per `\n`-separated line, empty lines included.
pub fn line_keys(blob: &str) -> impl Iterator<Item = &str> {
    blob.split('\n').map(key_of)
}

/// The prefix of `line` before its first colon, or the whole line.
pub fn key_of(line: &str) -> &str {
    line.split_once(':').map_or(line, |(key, _)| key)
}

pub fn quoted_keys(text: &str) -> impl Iterator<Item = &str> {
    QUOTED
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}
