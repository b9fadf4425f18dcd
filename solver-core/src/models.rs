//! Domain data model and solver configuration.
//!
//! All identifiers here are dense, non-negative integers produced by the
//! [`crate::loader`]; nothing downstream of the loader ever sees a string.
//! Types in this module are intentionally plain data — constraint logic
//! lives in [`crate::evaluator`], not here.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense id of a [`Day`].
pub type DayId = u32;
/// Dense id of a [`TimeSlot`].
pub type TimeSlotId = u32;
/// Dense id of a [`Date`].
pub type DateId = u32;
/// Dense id of a [`Room`].
pub type RoomId = u32;
/// Dense id of an employee.
pub type EmployeeId = u32;
/// Dense id of a [`Course`].
pub type CourseId = u32;
/// Dense id of a [`Semester`].
pub type SemesterId = u32;
/// Dense id of a room type; treated as an opaque tag, compared for equality only.
pub type RoomTypeId = u32;
/// Dense id of an [`Event`].
pub type EventId = u32;

/// The term a schedule is generated for.
///
/// Mirrors `original_source/api/models/term.py`'s two-value enumeration.
/// Requesting `Winter` overrides `Sommer` at the CLI boundary, matching the
/// original `main.py` argument parser's documented behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Sommer,
    Winter,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Sommer => write!(f, "Sommer"),
            Term::Winter => write!(f, "Winter"),
        }
    }
}

/// One of the seven fixed weekday abbreviations a [`Day`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayAbbreviation {
    Mo,
    Di,
    Mi,
    Do,
    Fr,
    Sa,
    So,
}

impl DayAbbreviation {
    /// The display name used for formatting, e.g. `Mo` -> `Montag`.
    pub fn display_name(self) -> &'static str {
        match self {
            DayAbbreviation::Mo => "Montag",
            DayAbbreviation::Di => "Dienstag",
            DayAbbreviation::Mi => "Mittwoch",
            DayAbbreviation::Do => "Donnerstag",
            DayAbbreviation::Fr => "Freitag",
            DayAbbreviation::Sa => "Samstag",
            DayAbbreviation::So => "Sonntag",
        }
    }
}

/// A day of the week, identified by `day_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Day {
    pub id: DayId,
    pub abbreviation: DayAbbreviation,
}

impl Day {
    pub fn name(&self) -> &'static str {
        self.abbreviation.display_name()
    }
}

/// A time-of-day window, minute resolution, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

/// The cartesian-product pair `(day_id, time_slot_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub id: DateId,
    pub day_id: DayId,
    pub time_slot_id: TimeSlotId,
}

/// A physical room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Strictly orderable capacity class; larger means more capacity.
    pub participant_size_ordinal: u32,
    pub room_type_id: RoomTypeId,
}

/// A course, identified by `course_id`. Carries no further solver-relevant data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
}

/// A semester, identified by `semester_id`, carrying a value in `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub value: u8,
}

/// A priority weight, identified by `priority_id`, in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Priority {
    pub id: u32,
    pub weight: u8,
}

/// A teaching event that contributes `weekly_blocks` teaching units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub term: Term,
    /// Number of teaching units this event contributes to `BLOCKS`.
    pub weekly_blocks: u32,
    /// Minimum required room capacity class.
    pub participant_size_ordinal: u32,
    pub room_type_id: RoomTypeId,
    pub employee_ids: HashSet<EmployeeId>,
    /// Course -> set of participating semesters.
    pub participants: HashMap<CourseId, HashSet<SemesterId>>,
    pub disallowed_day_ids: HashSet<DayId>,
}

/// Configuration recognised by the evolutionary search, with the defaults
/// from the system's configuration table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticAlgorithmConfig {
    pub population_size: usize,
    pub num_generations: u64,
    pub num_parents_mating: usize,
    pub tournament_k: usize,
    pub mutation_probability_high: f64,
    pub mutation_probability_low: f64,
    pub elitism: usize,
    pub stop_on_zero: bool,
    pub random_seed: u64,
    /// Logging and progress-reporting preferences.
    pub logging: LoggingOptions,
}

impl Default for GeneticAlgorithmConfig {
    fn default() -> Self {
        GeneticAlgorithmConfig {
            population_size: 300,
            num_generations: 20_000,
            num_parents_mating: 10,
            tournament_k: 30,
            mutation_probability_high: 0.10,
            mutation_probability_low: 0.01,
            elitism: 1,
            stop_on_zero: true,
            random_seed: 0,
            logging: LoggingOptions::default(),
        }
    }
}

impl GeneticAlgorithmConfig {
    /// Parses a config document, choosing a deserialiser by `path`'s
    /// extension (`.yaml`/`.yml` or anything else treated as JSON).
    /// Missing fields fall back to [`GeneticAlgorithmConfig::default`]'s
    /// values, since every field carries `#[serde(default)]`.
    pub fn from_file(path: &std::path::Path) -> Result<Self, crate::error::SolverError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| crate::error::SolverError::Storage(Box::new(e)))?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            serde_yaml::from_str(&contents)
                .map_err(|e| crate::error::SolverError::Configuration(e.to_string()))
        } else {
            serde_json::from_str(&contents)
                .map_err(|e| crate::error::SolverError::Configuration(e.to_string()))
        }
    }
}

/// Controls what the search driver logs during a run. Disabled by default;
/// enable individual flags the way the teacher's `LoggingOptions` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingOptions {
    /// Emit a `log::debug!` line every `log_frequency` generations. `None` disables it.
    pub log_frequency: Option<u64>,
    /// Log the best-of-population penalty once loading completes and the initial population is built.
    pub log_initial_state: bool,
    /// Log the final penalty, generations completed, and the stop reason.
    pub log_stop_condition: bool,
}

/// Progress snapshot sent to a [`ProgressCallback`] during search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub generation: u64,
    pub max_generations: u64,
    pub best_penalty: u32,
    pub median_penalty: u32,
}

/// Callback invoked at generation boundaries. Returning `false` requests
/// cooperative cancellation; the driver then returns the best individual
/// seen so far with [`Outcome::Cancelled`].
pub type ProgressCallback = Box<dyn Fn(&ProgressUpdate) -> bool + Send + Sync>;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// `stop_on_zero` was set and a candidate reached penalty zero.
    ReachedZero,
    /// The generation budget was exhausted.
    GenerationLimit,
    /// The progress callback requested cancellation.
    Cancelled,
}

/// The result of running the evolutionary search: the best chromosome seen,
/// its penalty, how many generations ran, and why the search stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub genes: Vec<u32>,
    pub penalty: u32,
    pub generations_completed: u64,
    pub outcome: Outcome,
}

/// One resolved block of the final schedule: the `(day, time_slot, room,
/// event, participants)` tuple the system's external-interface contract
/// requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub block_index: usize,
    pub event_id: EventId,
    pub day_id: DayId,
    pub time_slot_id: TimeSlotId,
    pub room_id: RoomId,
    pub participants: HashMap<CourseId, HashSet<SemesterId>>,
}

/// A fully resolved solution: per-block assignments plus the search's final
/// penalty and generation count. Building the human-readable grouped tables
/// from this is the downstream collaborator's job, not this crate's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub entries: Vec<ScheduleEntry>,
    pub penalty: u32,
    pub generations_completed: u64,
    pub outcome: Outcome,
}
