//! Command implementations

pub mod generate;
pub mod inspect;
pub mod stories;

pub use generate::{ConstructionEngine, ConstructionReport, FillPath};
pub use inspect::{SlotSummary, TemplateSummary, inspect_template};
pub use stories::select_stories;
