//! Search algorithms for solver-core.
//!
//! Currently home to a single implementation, [`genetic::GeneticAlgorithm`],
//! but kept as its own module with a [`Solver`] trait seam so an
//! alternative search strategy could be added later without touching
//! [`crate::run_solver`].

pub mod genetic;

use crate::error::SolverError;
use crate::loader::Problem;
use crate::models::{ProgressCallback, SearchOutcome};

/// A search algorithm that turns a [`Problem`] into a [`SearchOutcome`].
///
/// Implementations own their configuration (passed in at construction) and
/// should:
/// - Return the best chromosome found, even when stopped early.
/// - Check the progress callback at generation boundaries and stop
///   cooperatively on `false`, reporting [`crate::models::Outcome::Cancelled`]
///   rather than treating cancellation as a [`SolverError`].
/// - Respect `stop_on_zero` and the configured generation budget.
pub trait Solver {
    fn solve(
        &self,
        problem: &Problem,
        progress_callback: Option<&ProgressCallback>,
    ) -> Result<SearchOutcome, SolverError>;
}
