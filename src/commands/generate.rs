//! Puzzle construction pipeline
//!
//! Template → slots → answers → letters → clues → document. Every stage
//! degrades instead of failing; only a grid with an unlettered open cell is
//! fatal.

use crate::clues::{ClueAssembler, ClueProvider, CluePolicy};
use crate::config::EngineConfig;
use crate::core::{GridTemplate, PuzzleDocument, PuzzleMeta, Solution, StoryRecord};
use crate::error::EngineError;
use crate::ranker::{CandidateRanker, attribution_index};
use crate::selector::{WordSelector, run_selector};
use crate::solver::{ConstraintSolver, FallbackFiller, SolveOutcome, WordPool};
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{info, warn};

/// Which stage produced the grid's letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPath {
    Selector,
    Solver,
    Fallback,
}

impl fmt::Display for FillPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Selector => "selector",
            Self::Solver => "solver",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Diagnostics for one construction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionReport {
    pub template: String,
    pub fill_path: FillPath,
    /// Absent when the selector's words were used
    pub solver_outcome: Option<String>,
    pub candidate_count: usize,
    /// Answers in fill order, read back from the final grid
    pub answers: Vec<String>,
    pub overwritten_cells: usize,
    pub padded_cells: usize,
    pub provider_calls: usize,
    pub provider_clues: usize,
}

/// Runs the whole pipeline with one configuration
#[derive(Debug, Clone)]
pub struct ConstructionEngine {
    config: EngineConfig,
    ranker: CandidateRanker,
}

impl Default for ConstructionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ConstructionEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let ranker = CandidateRanker::default().with_min_viable(config.min_viable_candidates);
        Self { config, ranker }
    }

    /// Replace the candidate ranker, e.g. to add stopwords
    #[must_use]
    pub fn with_ranker(mut self, ranker: CandidateRanker) -> Self {
        self.ranker = ranker.with_min_viable(self.config.min_viable_candidates);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a puzzle for `date` from `stories`
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Template`] when the template's slots are
    /// malformed and [`EngineError::IncompleteGrid`] when an open cell is
    /// left without a letter.
    pub async fn build(
        &self,
        template: &GridTemplate,
        stories: &[StoryRecord],
        selector: Option<&dyn WordSelector>,
        provider: &dyn ClueProvider,
        date: NaiveDate,
    ) -> Result<(PuzzleDocument, ConstructionReport), EngineError> {
        let layout = template.layout()?;
        let cell_count = template.size() * template.size();
        let filler = self.config.filler_byte();

        let candidates = self.ranker.rank(stories);
        let attribution = attribution_index(&candidates);
        info!(
            template = template.name(),
            slots = layout.slot_count(),
            lengths = ?layout.length_profile(),
            candidates = candidates.len(),
            "Starting construction"
        );

        let selected = match selector {
            Some(selector) => run_selector(selector, stories, template, &layout).await,
            None => None,
        };

        let mut overwritten_cells = 0;
        let mut padded_cells = 0;
        let mut solver_outcome = None;
        let (fill_path, mut solution): (FillPath, Solution) = if let Some((_, solution)) = selected {
            (FillPath::Selector, solution)
        } else {
            let pool = WordPool::from_candidates(&candidates);
            let outcome =
                ConstraintSolver::new(&layout, &pool, self.config.solver_limits()).solve(cell_count);
            solver_outcome = Some(outcome.to_string());

            match outcome {
                SolveOutcome::Solved(assignment) => (FillPath::Solver, assignment.solution),
                other => {
                    warn!(outcome = %other, "Solver failed, using fallback fill");
                    let fill = FallbackFiller::new(filler).fill(template, &layout, &pool);
                    overwritten_cells = fill.overwritten_cells;
                    padded_cells = fill.padded_cells;
                    (FillPath::Fallback, fill.solution)
                }
            }
        };
        padded_cells += solution.fill_empty(template, filler);

        if let Some(index) = solution.first_empty_open(template) {
            return Err(EngineError::IncompleteGrid { index });
        }

        let policy = CluePolicy {
            call_budget: self.config.clue_call_budget,
            batch_size: self.config.clue_batch_size,
            timeout: self.config.clue_timeout(),
            max_len: self.config.max_clue_len,
        };
        let assembled = ClueAssembler::new(provider, stories, policy)
            .assemble(&layout, &solution, &attribution)
            .await;

        let answers = layout
            .fill_order
            .iter()
            .map(|slot| solution.read(&slot.cells).unwrap_or_default())
            .collect();

        let document = PuzzleDocument {
            id: format!("{}-{}", self.config.id_prefix, date.format("%Y-%m-%d")),
            date,
            title: self.config.puzzle_title.clone(),
            size: template.size(),
            grid: solution.to_grid(template),
            clues: assembled.clues,
            meta: PuzzleMeta {
                source_urls: source_urls(stories, self.config.max_source_urls),
            },
        };

        let report = ConstructionReport {
            template: template.name().to_string(),
            fill_path,
            solver_outcome,
            candidate_count: candidates.len(),
            answers,
            overwritten_cells,
            padded_cells,
            provider_calls: assembled.provider_calls,
            provider_clues: assembled.provider_clues,
        };
        info!(id = %document.id, fill_path = %report.fill_path, "Puzzle constructed");

        Ok((document, report))
    }
}

/// First `limit` distinct, non-empty story links in story order
fn source_urls(stories: &[StoryRecord], limit: usize) -> Vec<String> {
    let mut seen = FxHashSet::default();
    stories
        .iter()
        .map(|story| story.link.trim())
        .filter(|link| !link.is_empty() && seen.insert(*link))
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clues::{ClueRequest, DisabledClueProvider};
    use crate::core::{BLOCK_MARKER, SourceTag};
    use crate::error::CollaboratorError;
    use crate::ranker::tokenize::contains_whole_word;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl ClueProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn clue(&self, _request: &ClueRequest) -> Result<Option<String>, CollaboratorError> {
            Err(CollaboratorError::Network("unreachable".to_string()))
        }
    }

    struct FixedSelector(Vec<&'static str>);

    #[async_trait]
    impl WordSelector for FixedSelector {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn select(
            &self,
            _stories: &[StoryRecord],
            _template: &GridTemplate,
        ) -> Result<Option<Vec<String>>, CollaboratorError> {
            Ok(Some(self.0.iter().map(ToString::to_string).collect()))
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn story(title: &str, summary: &str, link: &str) -> StoryRecord {
        StoryRecord::new(title, summary, link, SourceTag::Local)
    }

    fn radio_storm() -> Vec<StoryRecord> {
        vec![
            story("Radio", "", "https://local.example/radio"),
            story("Storm", "", "https://local.example/storm"),
        ]
    }

    fn assert_complete(document: &PuzzleDocument, template: &GridTemplate) {
        assert_eq!(document.grid.len(), 25);
        for (i, cell) in document.grid.iter().enumerate() {
            if template.is_open(i) {
                assert_eq!(cell.len(), 1, "cell {i}");
                assert!(cell.bytes().all(|b| b.is_ascii_uppercase()), "cell {i}");
            } else {
                assert_eq!(cell, BLOCK_MARKER);
            }
        }
    }

    #[tokio::test]
    async fn twin_rows_take_ranked_words() {
        let template = GridTemplate::twin_rows();
        let (document, report) = ConstructionEngine::default()
            .build(&template, &radio_storm(), None, &DisabledClueProvider, date())
            .await
            .unwrap();

        let rows = document.rows();
        assert_eq!(rows[0], "RADIO");
        assert_eq!(rows[1], BLOCK_MARKER.repeat(5));
        assert_eq!(rows[2], "STORM");
        assert_eq!(report.fill_path, FillPath::Solver);
        assert_eq!(report.answers, vec!["RADIO", "STORM"]);
        assert_eq!(document.clues.across.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(document.clues.down.is_empty());
    }

    #[tokio::test]
    async fn short_words_only_falls_back() {
        let template = GridTemplate::twin_rows();
        let stories = vec![story("City farm news", "Park road vote", "https://local.example/a")];

        let (document, report) = ConstructionEngine::default()
            .build(&template, &stories, None, &DisabledClueProvider, date())
            .await
            .unwrap();

        assert_eq!(report.fill_path, FillPath::Fallback);
        assert_eq!(report.solver_outcome.as_deref(), Some("no solution"));
        assert_eq!(report.answers, vec!["RIVER", "RADIO"]);
        assert_complete(&document, &template);
    }

    #[tokio::test]
    async fn failing_provider_never_leaks_answers() {
        let template = GridTemplate::classic();
        let stories = vec![
            story(
                "Radio tower storm damage",
                "Crews repair river bridge after flooding",
                "https://local.example/tower",
            ),
            story("Mayor opens trail", "Hikers cheer", "https://local.example/trail"),
        ];

        let (document, report) = ConstructionEngine::default()
            .build(&template, &stories, None, &FailingProvider, date())
            .await
            .unwrap();

        assert_complete(&document, &template);
        assert_eq!(report.provider_calls, 8);
        assert_eq!(report.provider_clues, 0);
        assert_eq!(document.clues.len(), 10);

        let layout = template.layout().unwrap();
        for (slot, answer) in layout.fill_order.iter().zip(&report.answers) {
            let clues = match slot.orientation {
                crate::core::Orientation::Across => &document.clues.across,
                crate::core::Orientation::Down => &document.clues.down,
            };
            let clue = &clues[&slot.number];
            assert!(!contains_whole_word(clue, answer), "{answer}: {clue}");
        }
    }

    #[tokio::test]
    async fn valid_selection_skips_solver() {
        let template = GridTemplate::twin_rows();
        let selector: &dyn WordSelector = &FixedSelector(vec!["PIANO", "BOARD"]);

        let (document, report) = ConstructionEngine::default()
            .build(&template, &radio_storm(), Some(selector), &DisabledClueProvider, date())
            .await
            .unwrap();

        assert_eq!(report.fill_path, FillPath::Selector);
        assert!(report.solver_outcome.is_none());
        assert_eq!(document.rows()[0], "PIANO");
        assert_eq!(document.rows()[2], "BOARD");
    }

    #[tokio::test]
    async fn mismatched_selection_is_ignored() {
        let template = GridTemplate::twin_rows();
        let selector: &dyn WordSelector = &FixedSelector(vec!["PIANO"]);

        let (_, report) = ConstructionEngine::default()
            .build(&template, &radio_storm(), Some(selector), &DisabledClueProvider, date())
            .await
            .unwrap();

        assert_eq!(report.fill_path, FillPath::Solver);
        assert_eq!(report.answers, vec!["RADIO", "STORM"]);
    }

    #[tokio::test]
    async fn document_carries_id_and_sources() {
        let template = GridTemplate::twin_rows();
        let mut stories = radio_storm();
        stories.push(story("Radio again", "", "https://local.example/radio"));
        stories.push(story("No link", "", ""));

        let config = EngineConfig {
            id_prefix: "daily".to_string(),
            ..EngineConfig::default()
        };
        let (document, _) = ConstructionEngine::new(config)
            .build(&template, &stories, None, &DisabledClueProvider, date())
            .await
            .unwrap();

        assert_eq!(document.id, "daily-2026-10-14");
        assert_eq!(document.size, 5);
        assert_eq!(
            document.meta.source_urls,
            vec!["https://local.example/radio", "https://local.example/storm"]
        );
    }

    #[test]
    fn source_urls_respect_limit() {
        let stories: Vec<StoryRecord> = (0..8)
            .map(|i| story("t", "", &format!("https://local.example/{i}")))
            .collect();
        assert_eq!(source_urls(&stories, 5).len(), 5);
    }

    #[tokio::test]
    async fn construction_is_deterministic() {
        let template = GridTemplate::open_frame();
        let stories = vec![story(
            "Library council debates river trail plans",
            "Residents packed the hall",
            "https://local.example/council",
        )];
        let engine = ConstructionEngine::default();

        let (first, _) = engine
            .build(&template, &stories, None, &DisabledClueProvider, date())
            .await
            .unwrap();
        let (second, _) = engine
            .build(&template, &stories, None, &DisabledClueProvider, date())
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_complete(&first, &template);
    }
}
