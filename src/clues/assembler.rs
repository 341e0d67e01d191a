//! Clue assembly
//!
//! Resolves each numbered slot's answer from the grid and obtains clue text.
//! Provider calls go out in fixed-size batches, each batch awaited in full
//! before the next, under one call budget shared by the whole run. Across
//! slots are serviced first; down slots get whatever budget remains. A slot
//! whose call is not issued, fails, times out, or returns nothing usable gets
//! a heuristic clue instead.

use super::heuristic::heuristic_clue;
use super::provider::sanitize_clue;
use super::{ClueProvider, ClueRequest};
use crate::core::{ClueSet, Slot, SlotLayout, Solution, StoryId, StoryRecord};
use crate::error::CollaboratorError;
use crate::ranker::tokenize::contains_whole_word;
use futures::future::join_all;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Limits on provider use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CluePolicy {
    /// Provider calls allowed per run
    pub call_budget: usize,
    /// Calls issued together
    pub batch_size: usize,
    /// Per-call timeout
    pub timeout: Duration,
    /// Longest clue kept, in characters
    pub max_len: usize,
}

impl Default for CluePolicy {
    fn default() -> Self {
        Self {
            call_budget: 8,
            batch_size: 2,
            timeout: Duration::from_secs(5),
            max_len: 60,
        }
    }
}

/// How a clue was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueOrigin {
    Provider,
    Heuristic,
}

/// Clues plus provider accounting for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledClues {
    pub clues: ClueSet,
    /// Provider calls issued, successful or not
    pub provider_calls: usize,
    /// Clues taken from the provider
    pub provider_clues: usize,
}

struct ClueEntry {
    number: u32,
    request: ClueRequest,
    story: Option<StoryId>,
}

/// Builds the clue set for a filled grid
pub struct ClueAssembler<'a> {
    provider: &'a dyn ClueProvider,
    stories: &'a [StoryRecord],
    policy: CluePolicy,
}

impl<'a> ClueAssembler<'a> {
    #[must_use]
    pub fn new(provider: &'a dyn ClueProvider, stories: &'a [StoryRecord], policy: CluePolicy) -> Self {
        Self {
            provider,
            stories,
            policy,
        }
    }

    /// Produce one clue per fillable slot
    ///
    /// `attribution` maps tracked candidate words to the story they came from.
    pub async fn assemble(
        &self,
        layout: &SlotLayout,
        solution: &Solution,
        attribution: &FxHashMap<String, StoryId>,
    ) -> AssembledClues {
        let across = self.entries(&layout.across, solution, attribution);
        let down = self.entries(&layout.down, solution, attribution);

        let mut calls = 0;
        let mut provider_clues = 0;
        let across = self.resolve_all(&across, &mut calls, &mut provider_clues).await;
        let down = self.resolve_all(&down, &mut calls, &mut provider_clues).await;

        info!(
            provider = self.provider.name(),
            calls,
            budget = self.policy.call_budget,
            provider_clues,
            "Clue assembly complete"
        );

        AssembledClues {
            clues: ClueSet { across, down },
            provider_calls: calls,
            provider_clues,
        }
    }

    fn entries(
        &self,
        slots: &[Slot],
        solution: &Solution,
        attribution: &FxHashMap<String, StoryId>,
    ) -> Vec<ClueEntry> {
        slots
            .iter()
            .map(|slot| {
                let answer = solution.read(&slot.cells).unwrap_or_default();
                let story = attribution.get(&answer).copied();
                let (title, link) = story
                    .and_then(|id| self.stories.get(id.0))
                    .map_or((String::new(), String::new()), |s| (s.title.clone(), s.link.clone()));
                ClueEntry {
                    number: slot.number,
                    request: ClueRequest::new(answer, title, link),
                    story,
                }
            })
            .collect()
    }

    async fn resolve_all(
        &self,
        entries: &[ClueEntry],
        calls: &mut usize,
        provider_clues: &mut usize,
    ) -> BTreeMap<u32, String> {
        let mut clues = BTreeMap::new();
        let batch_size = self.policy.batch_size.max(1);

        for batch in entries.chunks(batch_size) {
            let mut pending = Vec::with_capacity(batch.len());
            for entry in batch {
                let issue = self.provider.is_enabled() && *calls < self.policy.call_budget;
                if issue {
                    *calls += 1;
                    debug!(
                        answer = %entry.request.answer,
                        call = *calls,
                        budget = self.policy.call_budget,
                        "Requesting provider clue"
                    );
                }
                pending.push(self.resolve(entry, issue));
            }

            for (number, clue, origin) in join_all(pending).await {
                if origin == ClueOrigin::Provider {
                    *provider_clues += 1;
                }
                clues.insert(number, clue);
            }
        }

        clues
    }

    async fn resolve(&self, entry: &ClueEntry, issue_call: bool) -> (u32, String, ClueOrigin) {
        if issue_call && let Some(clue) = self.provider_clue(&entry.request).await {
            return (entry.number, clue, ClueOrigin::Provider);
        }

        let preferred = entry.story.and_then(|id| self.stories.get(id.0));
        let clue = heuristic_clue(
            &entry.request.answer,
            preferred,
            self.stories,
            self.policy.max_len,
        );
        (entry.number, clue, ClueOrigin::Heuristic)
    }

    async fn provider_clue(&self, request: &ClueRequest) -> Option<String> {
        match self.request_clue(request).await {
            Ok(clue) => Some(clue),
            Err(CollaboratorError::Empty) => {
                debug!(answer = %request.answer, "Provider had no clue");
                None
            }
            Err(e) => {
                warn!(answer = %request.answer, error = %e, "Provider clue rejected");
                None
            }
        }
    }

    /// One bounded provider call, with its clue sanitized and checked
    async fn request_clue(&self, request: &ClueRequest) -> Result<String, CollaboratorError> {
        let raw = tokio::time::timeout(self.policy.timeout, self.provider.clue(request))
            .await
            .map_err(|_| CollaboratorError::Timeout {
                millis: u64::try_from(self.policy.timeout.as_millis()).unwrap_or(u64::MAX),
            })??
            .ok_or(CollaboratorError::Empty)?;

        let clue = sanitize_clue(&raw, self.policy.max_len);
        if clue.is_empty() {
            return Err(CollaboratorError::Empty);
        }
        if contains_whole_word(&clue, &request.answer) {
            return Err(CollaboratorError::Malformed("clue reveals the answer".to_string()));
        }
        Ok(clue)
    }
}
