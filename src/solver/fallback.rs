//! Deterministic fallback filling
//!
//! Used when the constraint search fails or a selected word list is unusable.
//! Each slot, in fill order, takes the first unused word of its length from
//! the ranked pool, then the curated vocabulary, then a padded placeholder.
//! There is no backtracking: a word that disagrees with letters already in the
//! grid is written anyway and overwrites them. Open cells left empty get the
//! filler letter, so the result is always structurally complete.

use super::WordPool;
use crate::core::{GridTemplate, SlotLayout, Solution};
use crate::wordlists::fallback_words;
use crate::wordlists::loader::vocabulary_of_length;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Stem of generated placeholder answers
pub const PLACEHOLDER_STEM: &str = "NEWS";

/// Where a fallback answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillSource {
    Candidate,
    Curated,
    Placeholder,
}

/// Result of a fallback fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackFill {
    pub solution: Solution,
    /// Word written into each slot, in fill order
    pub placed: Vec<(String, FillSource)>,
    /// Cells whose letter was replaced by a later slot
    pub overwritten_cells: usize,
    /// Open cells that received the filler letter
    pub padded_cells: usize,
}

/// Greedy, best-effort grid filler
#[derive(Debug, Clone, Copy)]
pub struct FallbackFiller {
    filler_letter: u8,
}

impl Default for FallbackFiller {
    fn default() -> Self {
        Self::new(b'A')
    }
}

impl FallbackFiller {
    /// `filler_letter` must be an uppercase ASCII letter
    #[must_use]
    pub const fn new(filler_letter: u8) -> Self {
        Self { filler_letter }
    }

    /// Fill every slot of `layout` and pad the rest of `template`
    #[must_use]
    pub fn fill(&self, template: &GridTemplate, layout: &SlotLayout, pool: &WordPool) -> FallbackFill {
        let mut solution = Solution::new(template.pattern().len());
        let mut used: FxHashSet<String> = FxHashSet::default();
        let mut placed = Vec::with_capacity(layout.slot_count());
        let mut overwritten_cells = 0;

        for slot in &layout.fill_order {
            let length = slot.len();
            let curated = vocabulary_of_length(fallback_words(length), length);

            let (word, source) = pool
                .words_of_length(length)
                .iter()
                .find(|w| !used.contains(*w))
                .map(|w| (w.clone(), FillSource::Candidate))
                .or_else(|| {
                    curated
                        .into_iter()
                        .find(|w| !used.contains(w))
                        .map(|w| (w, FillSource::Curated))
                })
                .unwrap_or_else(|| (self.placeholder(length), FillSource::Placeholder));

            let conflicts = solution.conflicts(&word, &slot.cells);
            if conflicts > 0 {
                warn!(
                    slot = %slot.label(),
                    answer = %word,
                    conflicts,
                    "Fallback word overwrites crossing letters"
                );
                overwritten_cells += conflicts;
            }

            solution.place(&word, &slot.cells);
            used.insert(word.clone());
            placed.push((word, source));
        }

        let padded_cells = solution.fill_empty(template, self.filler_letter);
        debug!(
            slots = placed.len(),
            overwritten_cells, padded_cells, "Fallback fill complete"
        );

        FallbackFill {
            solution,
            placed,
            overwritten_cells,
            padded_cells,
        }
    }

    /// Placeholder stem truncated or padded with the filler letter
    fn placeholder(&self, length: usize) -> String {
        let mut token: String = PLACEHOLDER_STEM.chars().take(length).collect();
        while token.len() < length {
            token.push(char::from(self.filler_letter));
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_ranked_candidates() {
        let template = GridTemplate::twin_rows();
        let layout = template.layout().unwrap();
        let pool = WordPool::from_words(["STORM"]);

        let fill = FallbackFiller::default().fill(&template, &layout, &pool);
        assert_eq!(fill.placed[0], ("STORM".to_string(), FillSource::Candidate));
        assert_eq!(fill.placed[1], ("RIVER".to_string(), FillSource::Curated));
        assert_eq!(fill.padded_cells, 0);
    }

    #[test]
    fn wrong_length_pool_falls_back_to_curated() {
        let template = GridTemplate::twin_rows();
        let layout = template.layout().unwrap();
        let pool = WordPool::from_words(["CITY", "NEWS", "PARK"]);

        let fill = FallbackFiller::default().fill(&template, &layout, &pool);
        assert_eq!(fill.placed[0].0, "RIVER");
        assert_eq!(fill.placed[1].0, "RADIO");
        assert_eq!(fill.solution.first_empty_open(&template), None);
    }

    #[test]
    fn placeholder_when_no_vocabulary() {
        // A 2-letter slot has neither candidates nor curated words
        let template = GridTemplate::from_rows("pair", &["..###", "#####", "#####", "#####", "#####"])
            .unwrap();
        let layout = template.layout().unwrap();

        let fill = FallbackFiller::default().fill(&template, &layout, &WordPool::default());
        assert_eq!(fill.placed[0], ("NE".to_string(), FillSource::Placeholder));
        assert_eq!(fill.solution.read(&[0, 1]).as_deref(), Some("NE"));
    }

    #[test]
    fn placeholder_pads_with_filler_letter() {
        assert_eq!(FallbackFiller::new(b'E').placeholder(6), "NEWSEE");
        assert_eq!(FallbackFiller::default().placeholder(3), "NEW");
    }

    #[test]
    fn overwrites_on_conflict_without_backtracking() {
        let template = GridTemplate::classic();
        let layout = template.layout().unwrap();

        let fill = FallbackFiller::default().fill(&template, &layout, &WordPool::default());
        assert_eq!(fill.placed.len(), layout.slot_count());
        assert!(fill.overwritten_cells > 0);
        assert_eq!(fill.solution.first_empty_open(&template), None);

        // The last down slot's letters win at every crossing it owns
        let (last_word, _) = fill.placed.last().unwrap();
        let last_slot = layout.fill_order.last().unwrap();
        assert_eq!(fill.solution.read(&last_slot.cells).as_ref(), Some(last_word));
    }

    #[test]
    fn grid_is_always_complete() {
        for template in crate::core::builtin_templates() {
            let layout = template.layout().unwrap();
            let fill = FallbackFiller::default().fill(&template, &layout, &WordPool::default());
            assert_eq!(fill.solution.first_empty_open(&template), None, "{}", template.name());
        }
    }
}
