//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — adapters map their wire formats into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The text produced by the generator for one run. Never empty, never padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote(String);

impl Quote {
    /// Trims the raw completion. Returns None when nothing is left.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markup the chat backend should apply to outgoing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Markdown,
    MarkdownV2,
    Html,
    Plain,
}

impl TextFormat {
    /// Value of the Bot API `parse_mode` field. None for plain text.
    pub fn parse_mode(self) -> Option<&'static str> {
        match self {
            TextFormat::Markdown => Some("Markdown"),
            TextFormat::MarkdownV2 => Some("MarkdownV2"),
            TextFormat::Html => Some("HTML"),
            TextFormat::Plain => None,
        }
    }
}

/// A single-turn completion request: one user prompt, no system message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
}

/// Outcome of one successful Generator→Dispatcher cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub quote: Quote,
    /// 1 when the first generation attempt succeeded.
    pub generation_attempts: u32,
}
