//! Clue providers: the seam to external clue-text generators.
//!
//! A provider turns an answer plus its source story into one short clue.
//! Providers may fail or time out; the assembler absorbs every failure.

use crate::error::CollaboratorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything a provider gets to see about one answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClueRequest {
    pub answer: String,
    /// Title of the story the answer came from, empty if unknown
    pub source_title: String,
    /// Link of the story the answer came from, empty if unknown
    pub source_url: String,
}

impl ClueRequest {
    #[must_use]
    pub fn new(
        answer: impl Into<String>,
        source_title: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            source_title: source_title.into(),
            source_url: source_url.into(),
        }
    }
}

/// An external clue-text generator
///
/// Must be safe to call concurrently in small batches.
#[async_trait]
pub trait ClueProvider: Send + Sync {
    /// Provider name, for logging
    fn name(&self) -> &str;

    /// Disabled providers are never called
    fn is_enabled(&self) -> bool {
        true
    }

    /// Produce a clue, or `None` when the provider has nothing to offer
    async fn clue(&self, request: &ClueRequest) -> Result<Option<String>, CollaboratorError>;
}

/// Provider used when no clue backend is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClueProvider;

#[async_trait]
impl ClueProvider for DisabledClueProvider {
    fn name(&self) -> &str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    async fn clue(&self, _request: &ClueRequest) -> Result<Option<String>, CollaboratorError> {
        Err(CollaboratorError::Disabled)
    }
}

/// Enabled provider that never has a clue
///
/// Paired with a [`CachedClueProvider`](super::CachedClueProvider) it replays
/// stored clues without any backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheOnlyClueProvider;

#[async_trait]
impl ClueProvider for CacheOnlyClueProvider {
    fn name(&self) -> &str {
        "cache-only"
    }

    async fn clue(&self, _request: &ClueRequest) -> Result<Option<String>, CollaboratorError> {
        Ok(None)
    }
}

/// Normalize raw provider text into a single clue line
///
/// Joins lines, strips surrounding quotes and trailing `.?!`, then truncates
/// to `max_len` characters.
///
/// # Examples
/// ```
/// use mini_crossword::clues::sanitize_clue;
///
/// assert_eq!(sanitize_clue("\"Flows past downtown.\"\n", 60), "Flows past downtown");
/// assert_eq!(sanitize_clue("abcdefghij", 4), "abcd");
/// ```
#[must_use]
pub fn sanitize_clue(raw: &str, max_len: usize) -> String {
    const QUOTES: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

    let joined = raw
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let unquoted = joined.trim().trim_matches(QUOTES).trim();
    let bare = unquoted.trim_end_matches(['.', '?', '!']).trim_end();

    bare.chars().take(max_len).collect::<String>().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_provider_refuses() {
        let provider = DisabledClueProvider;
        assert!(!provider.is_enabled());
        assert_eq!(
            provider.clue(&ClueRequest::default()).await,
            Err(CollaboratorError::Disabled)
        );
    }

    #[tokio::test]
    async fn cache_only_provider_has_nothing() {
        let provider = CacheOnlyClueProvider;
        assert!(provider.is_enabled());
        assert_eq!(provider.clue(&ClueRequest::new("RIVER", "", "")).await, Ok(None));
    }

    #[test]
    fn sanitize_joins_lines_and_strips_punctuation() {
        assert_eq!(sanitize_clue("Local\r\ngoverning body!", 60), "Local governing body");
        assert_eq!(sanitize_clue("\u{201C}Green space\u{201D}", 60), "Green space");
        assert_eq!(sanitize_clue("   ", 60), "");
    }

    #[test]
    fn sanitize_truncates_by_characters() {
        let clue = sanitize_clue("Caf\u{e9} opens on Main Street", 4);
        assert_eq!(clue, "Caf\u{e9}");
    }
}
