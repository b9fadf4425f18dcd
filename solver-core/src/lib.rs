//! # solver-core: weekly university timetable solver
//!
//! This crate solves the timetabling problem described for a single academic
//! term: assign every teaching block of every event to a `(date, room)` slot
//! so that a set of hard constraints holds and a weighted sum of soft-constraint
//! violations is minimised.
//!
//! The crate is organised the way the problem is: a [`loader`] that turns an
//! external snapshot into immutable, index-addressable arrays; an [`encoding`]
//! that defines the chromosome/gene representation; an [`evaluator`] that
//! scores a candidate; and an [`algorithms`] module housing the evolutionary
//! search that ties the three together.
//!
//! ## Quick example
//!
//! ```no_run
//! use solver_core::{run_solver, models::Term};
//! use solver_core::loader::{Loader, RawSnapshot};
//! use solver_core::models::GeneticAlgorithmConfig;
//!
//! let snapshot: RawSnapshot = serde_json::from_str("{}").unwrap();
//! let problem = Loader::load(&snapshot, Term::Sommer).unwrap();
//! let result = run_solver(&problem, &GeneticAlgorithmConfig::default(), None);
//! match result {
//!     Ok(outcome) => println!("penalty: {}", outcome.penalty),
//!     Err(e) => eprintln!("solver error: {e}"),
//! }
//! ```

pub mod algorithms;
pub mod encoding;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod models;

pub use error::SolverError;
pub use models::{ProgressCallback, ProgressUpdate, SearchOutcome};

use algorithms::Solver;
use algorithms::genetic::GeneticAlgorithm;
use loader::Problem;
use models::GeneticAlgorithmConfig;

/// Runs the evolutionary search on an already-loaded [`Problem`].
///
/// This is the main library entry point: it owns no I/O and performs no
/// validation of its own beyond what [`loader::Loader::load`] already
/// guaranteed, in keeping with the solver's "pure transformation" contract.
pub fn run_solver(
    problem: &Problem,
    config: &GeneticAlgorithmConfig,
    progress: Option<&ProgressCallback>,
) -> Result<SearchOutcome, SolverError> {
    let algorithm = GeneticAlgorithm::new(config.clone());
    algorithm.solve(problem, progress)
}
