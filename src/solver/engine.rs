//! Backtracking constraint solver
//!
//! Assigns one ranked word per slot, depth first in fill order. A word is
//! placeable when every cell it touches is empty or already holds the same
//! letter, and no slot reuses a word.

use super::WordPool;
use crate::core::{Slot, SlotLayout, Solution};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// Default cap on search depth
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Default cap on placement attempts
pub const DEFAULT_MAX_STEPS: usize = 200_000;

/// Bounds on a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverLimits {
    /// Deepest slot index the search may reach
    pub max_depth: usize,
    /// Placement attempts before the search gives up
    pub max_steps: usize,
}

impl Default for SolverLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Why a search stopped without an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// The layout has more slots than the depth guard allows
    DepthLimit { limit: usize, required: usize },
    /// Placement attempts ran out
    StepLimit { limit: usize },
}

impl fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthLimit { limit, required } => {
                write!(f, "depth limit {limit} reached with {required} slots to fill")
            }
            Self::StepLimit { limit } => write!(f, "step limit {limit} reached"),
        }
    }
}

/// A complete, consistent assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub solution: Solution,
    /// One answer per slot, in fill order
    pub answers: Vec<String>,
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Assignment),
    /// Every branch was explored without success
    NoSolution,
    /// The search hit a limit before finishing
    Exhausted(Exhaustion),
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(_) => write!(f, "solved"),
            Self::NoSolution => write!(f, "no solution"),
            Self::Exhausted(reason) => write!(f, "exhausted: {reason}"),
        }
    }
}

enum Step {
    Found,
    DeadEnd,
    Abort(Exhaustion),
}

/// Depth-first slot filler
pub struct ConstraintSolver<'a> {
    slots: &'a [Slot],
    pool: &'a WordPool,
    limits: SolverLimits,
}

impl<'a> ConstraintSolver<'a> {
    /// Create a solver over the layout's fill order
    #[must_use]
    pub fn new(layout: &'a SlotLayout, pool: &'a WordPool, limits: SolverLimits) -> Self {
        Self {
            slots: &layout.fill_order,
            pool,
            limits,
        }
    }

    /// Search for an assignment over a grid of `cell_count` cells
    #[must_use]
    pub fn solve(&self, cell_count: usize) -> SolveOutcome {
        let mut state = SearchState {
            solution: Solution::new(cell_count),
            used: FxHashSet::default(),
            answers: Vec::with_capacity(self.slots.len()),
            steps: 0,
        };

        let outcome = match self.search(&mut state, 0) {
            Step::Found => SolveOutcome::Solved(Assignment {
                solution: state.solution,
                answers: state.answers,
            }),
            Step::DeadEnd => SolveOutcome::NoSolution,
            Step::Abort(reason) => SolveOutcome::Exhausted(reason),
        };

        debug!(
            slots = self.slots.len(),
            steps = state.steps,
            outcome = %outcome,
            "Constraint search finished"
        );
        outcome
    }

    fn search(&self, state: &mut SearchState, depth: usize) -> Step {
        if depth == self.slots.len() {
            return Step::Found;
        }
        if depth >= self.limits.max_depth {
            return Step::Abort(Exhaustion::DepthLimit {
                limit: self.limits.max_depth,
                required: self.slots.len(),
            });
        }

        let slot = &self.slots[depth];
        for word in self.pool.words_of_length(slot.len()) {
            if state.used.contains(word) || !state.solution.fits(word, &slot.cells) {
                continue;
            }

            state.steps += 1;
            if state.steps > self.limits.max_steps {
                return Step::Abort(Exhaustion::StepLimit {
                    limit: self.limits.max_steps,
                });
            }

            state.solution.place(word, &slot.cells);
            state.used.insert(word.clone());
            state.answers.push(word.clone());

            match self.search(state, depth + 1) {
                Step::Found => return Step::Found,
                Step::Abort(reason) => return Step::Abort(reason),
                Step::DeadEnd => {
                    state.answers.pop();
                    state.used.remove(word);
                    state.solution.remove(&slot.cells);
                }
            }
        }

        Step::DeadEnd
    }
}

struct SearchState {
    solution: Solution,
    used: FxHashSet<String>,
    answers: Vec<String>,
    steps: usize,
}
