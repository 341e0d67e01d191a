//! Grid filling algorithms
//!
//! This module contains the backtracking constraint solver and the
//! deterministic fallback filler that guarantees a complete grid.

mod engine;
pub mod fallback;
mod pool;

pub use engine::{
    Assignment, ConstraintSolver, DEFAULT_MAX_DEPTH, DEFAULT_MAX_STEPS, Exhaustion, SolveOutcome,
    SolverLimits,
};
pub use fallback::{FallbackFill, FallbackFiller, FillSource};
pub use pool::WordPool;
