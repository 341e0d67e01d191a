//! Mini Crossword
//!
//! Builds a daily 5×5 mini crossword from a handful of news stories: ranks
//! candidate answers, fills the grid by backtracking (or a best-effort
//! fallback), and writes clues through an optional external provider.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use mini_crossword::clues::DisabledClueProvider;
//! use mini_crossword::commands::ConstructionEngine;
//! use mini_crossword::core::{GridTemplate, SourceTag, StoryRecord};
//!
//! # async fn run() -> Result<(), mini_crossword::error::EngineError> {
//! let stories = vec![
//!     StoryRecord::new("Radio", "", "https://local.example/1", SourceTag::Local),
//!     StoryRecord::new("Storm", "", "https://local.example/2", SourceTag::Local),
//! ];
//! let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap_or_default();
//!
//! let (document, report) = ConstructionEngine::default()
//!     .build(&GridTemplate::twin_rows(), &stories, None, &DisabledClueProvider, date)
//!     .await?;
//! println!("{} via {}", document.rows().join("/"), report.fill_path);
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// Candidate extraction
pub mod ranker;

// Grid filling algorithms
pub mod solver;

// Clue production
pub mod clues;

// External word selection
pub mod selector;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;
