//! Errors that can occur while loading a problem or configuring a search run.
//!
//! These represent the fatal error kinds from the system's error handling
//! design: everything except cancellation, which is modelled as a successful
//! [`crate::models::SearchOutcome`] variant rather than an error, since the
//! search driver always has a best-so-far candidate to return.

use thiserror::Error;

/// Errors surfaced before or during loading, and configuration errors
/// surfaced at startup.
#[derive(Error, Debug)]
pub enum SolverError {
    /// An option value was invalid (e.g. a negative population size, an
    /// empty term, a tournament size of zero).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The store snapshot was internally inconsistent: a dangling foreign
    /// key or an out-of-range enumeration value.
    #[error("referential integrity error: {0}")]
    Referential(String),

    /// `len(BLOCKS) > len(SLOTS)`: no assignment can place one block per
    /// slot, so search would never be feasible regardless of penalty.
    #[error("infeasible instance: {num_blocks} blocks but only {num_slots} slots")]
    Infeasible { num_blocks: usize, num_slots: usize },

    /// I/O failure talking to the external store, with context from the
    /// underlying error.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
