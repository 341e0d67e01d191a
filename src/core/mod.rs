//! Core domain types for mini crosswords
//!
//! Templates, slots, numbering, the in-progress letter grid and the records
//! that flow through the construction pipeline. Everything here is pure and
//! synchronous.

mod candidate;
mod cell;
mod document;
mod numbering;
mod slot;
mod solution;
mod story;
mod template;

pub use candidate::{CandidateWord, OriginTier};
pub use cell::{BLOCK_MARKER, Cell, Orientation};
pub use document::{ClueSet, PuzzleDocument, PuzzleMeta};
pub use numbering::Numbering;
pub use slot::{Slot, SlotLayout};
pub use solution::Solution;
pub use story::{SourceTag, StoryId, StoryRecord};
pub use template::{
    GRID_SIZE, GridTemplate, SlotSpec, TemplateError, builtin_template, builtin_templates,
    choose_template,
};
