//! Clue production
//!
//! An external [`ClueProvider`] is consulted under a strict call budget; every
//! slot it does not cover gets a heuristic clue built from the stories.

mod assembler;
mod cache;
mod heuristic;
mod provider;

pub use assembler::{AssembledClues, ClueAssembler, ClueOrigin, CluePolicy};
pub use cache::{CachedClueProvider, ClueCache, JsonFileClueCache, MemoryClueCache, cache_key};
pub use heuristic::{BLANK, ELLIPSIS, blank_answer, heuristic_clue, truncate_display};
pub use provider::{
    CacheOnlyClueProvider, ClueProvider, ClueRequest, DisabledClueProvider, sanitize_clue,
};
