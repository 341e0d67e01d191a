//! Optional external word selection
//!
//! A [`WordSelector`] proposes one answer per slot. Its proposal is only used
//! when it fits the layout exactly; anything else is treated as no proposal.

use crate::core::{GridTemplate, SlotLayout, Solution, StoryRecord};
use crate::error::CollaboratorError;
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use tracing::warn;

/// An external collaborator that picks the grid's answers
#[async_trait]
pub trait WordSelector: Send + Sync {
    fn name(&self) -> &str;

    /// Propose one word per slot, in the layout's fill order
    async fn select(
        &self,
        stories: &[StoryRecord],
        template: &GridTemplate,
    ) -> Result<Option<Vec<String>>, CollaboratorError>;
}

/// Why a selector proposal was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMismatch {
    WrongCount { expected: usize, actual: usize },
    WrongLength { slot: String, expected: usize, word: String },
    NotAlphabetic { word: String },
    Repeated { word: String },
    Crossing { slot: String, word: String },
}

/// Place a selector proposal into a fresh solution
///
/// Words are uppercased; they must match the fill order one to one, be
/// unique, and agree on every shared cell.
///
/// # Errors
///
/// Returns the first [`SelectionMismatch`] found.
pub fn place_selection(
    words: &[String],
    layout: &SlotLayout,
    cell_count: usize,
) -> Result<Solution, SelectionMismatch> {
    if words.len() != layout.slot_count() {
        return Err(SelectionMismatch::WrongCount {
            expected: layout.slot_count(),
            actual: words.len(),
        });
    }

    let mut solution = Solution::new(cell_count);
    let mut seen = FxHashSet::default();
    for (slot, raw) in layout.fill_order.iter().zip(words) {
        let word = raw.trim().to_uppercase();
        if !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(SelectionMismatch::NotAlphabetic { word });
        }
        if word.len() != slot.len() {
            return Err(SelectionMismatch::WrongLength {
                slot: slot.label(),
                expected: slot.len(),
                word,
            });
        }
        if !seen.insert(word.clone()) {
            return Err(SelectionMismatch::Repeated { word });
        }
        if !solution.fits(&word, &slot.cells) {
            return Err(SelectionMismatch::Crossing {
                slot: slot.label(),
                word,
            });
        }
        solution.place(&word, &slot.cells);
    }

    Ok(solution)
}

/// Ask `selector` for answers, absorbing every failure
pub async fn run_selector(
    selector: &dyn WordSelector,
    stories: &[StoryRecord],
    template: &GridTemplate,
    layout: &SlotLayout,
) -> Option<(Vec<String>, Solution)> {
    let words = match selector.select(stories, template).await {
        Ok(Some(words)) => words,
        Ok(None) => return None,
        Err(e) => {
            warn!(selector = selector.name(), error = %e, "Word selection failed");
            return None;
        }
    };

    match place_selection(&words, layout, template.size() * template.size()) {
        Ok(solution) => Some((words.iter().map(|w| w.trim().to_uppercase()).collect(), solution)),
        Err(mismatch) => {
            warn!(selector = selector.name(), ?mismatch, "Ignoring word selection");
            None
        }
    }
}
