//! The problem loader.
//!
//! Turns a [`RawSnapshot`] — the read-only domain data coming from whatever
//! external store sits in front of this crate — into the immutable,
//! index-addressable [`Problem`] the rest of the solver works with. Nothing
//! downstream of [`Loader::load`] touches the raw tables again.
//!
//! `RawSnapshot` mirrors the logical tables of the external store verbatim:
//! `day`, `time_slot`, `date`, `room`, `participant_size`, `room_type`,
//! `employee`, `course`, `semester`, `term`, `priority`, `event`, and the
//! three relation tables. Populating it from a spreadsheet or a relational
//! store is explicitly out of scope here; `solver-cli` only ever builds one
//! by deserialising a JSON document.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::models::{
    CourseId, Date, DateId, Day, DayAbbreviation, DayId, EmployeeId, Event, EventId, Room, RoomId,
    RoomTypeId, SemesterId, Term, TimeSlot, TimeSlotId,
};

/// An employee, identified by `employee_id`. Carries no solver-relevant
/// attributes beyond its id: demographic columns in the real `employee`
/// table (name, title, employee type) are never read by the solver and are
/// intentionally not modelled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawEmployee {
    pub id: EmployeeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDay {
    pub id: DayId,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimeSlot {
    pub id: TimeSlotId,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDate {
    pub id: DateId,
    pub day_id: DayId,
    pub time_slot_id: TimeSlotId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParticipantSize {
    pub id: u32,
    pub ordinal: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRoomType {
    pub id: RoomTypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRoom {
    pub id: RoomId,
    pub participant_size_id: u32,
    pub room_type_id: RoomTypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCourse {
    pub id: CourseId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSemester {
    pub id: SemesterId,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTerm {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPriority {
    pub id: u32,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: EventId,
    pub weekly_blocks: u32,
    pub term_id: u32,
    pub participant_size_id: u32,
    pub room_type_id: RoomTypeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeHoldsEvent {
    pub employee_id: EmployeeId,
    pub event_id: EventId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContainsEvent {
    pub course_id: CourseId,
    pub semester_id: SemesterId,
    pub event_id: EventId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDislikesDate {
    pub employee_id: EmployeeId,
    pub date_id: DateId,
    pub priority_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDisallowsDay {
    pub event_id: EventId,
    pub day_id: DayId,
}

/// The read-only domain snapshot, as it would be read from the external
/// relational store. Deserialisable from JSON (or YAML), so a `solver-cli`
/// invocation can build one straight from a file without this crate ever
/// touching the store itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    pub days: Vec<RawDay>,
    pub time_slots: Vec<RawTimeSlot>,
    pub dates: Vec<RawDate>,
    pub participant_sizes: Vec<RawParticipantSize>,
    pub room_types: Vec<RawRoomType>,
    pub rooms: Vec<RawRoom>,
    pub employees: Vec<RawEmployee>,
    pub courses: Vec<RawCourse>,
    pub semesters: Vec<RawSemester>,
    pub terms: Vec<RawTerm>,
    pub priorities: Vec<RawPriority>,
    pub events: Vec<RawEvent>,
    pub employee_holds_event: Vec<EmployeeHoldsEvent>,
    pub course_contains_event: Vec<CourseContainsEvent>,
    pub employee_dislikes_date: Vec<EmployeeDislikesDate>,
    pub event_disallows_day: Vec<EventDisallowsDay>,
}

/// One teaching unit: a single weekly occurrence of an event. All blocks of
/// the same event carry the same `event_id`; per-block constraint data is
/// looked up through [`Problem::events`] rather than duplicated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub event_id: EventId,
}

/// A `(date, room)` pair, with the fields the evaluator needs cached
/// alongside it so the hot loop never has to chase a second lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub date_id: DateId,
    pub day_id: DayId,
    pub time_slot_id: TimeSlotId,
    pub room_id: RoomId,
    pub room_participant_size_ordinal: u32,
    pub room_type_id: RoomTypeId,
}

/// The immutable, index-addressable problem data the evolutionary search
/// operates on. Built once per run by [`Loader::load`] and shared read-only
/// across every fitness evaluation.
#[derive(Debug, Clone)]
pub struct Problem {
    pub blocks: Vec<Block>,
    pub slots: Vec<Slot>,
    pub events: HashMap<EventId, Event>,
    pub days: HashMap<DayId, Day>,
    pub time_slots: HashMap<TimeSlotId, TimeSlot>,
    pub rooms: HashMap<RoomId, Room>,
    /// `(employee_id, date_id) -> priority weight`.
    pub employee_dislikes_date: HashMap<(EmployeeId, DateId), u8>,
}

impl Problem {
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }
}

/// Builds a [`Problem`] from a [`RawSnapshot`] for a given term.
pub struct Loader;

impl Loader {
    /// Loads and validates a snapshot, filtering events to `term`.
    ///
    /// Fails with [`SolverError::Referential`] on any dangling foreign key
    /// or out-of-range enumeration value, and with
    /// [`SolverError::Infeasible`] if there are more teaching blocks than
    /// slots to place them in. The solver is never invoked on a `Problem`
    /// this function didn't return `Ok` for.
    pub fn load(snapshot: &RawSnapshot, term: Term) -> Result<Problem, SolverError> {
        let days = load_days(snapshot)?;
        let time_slots = load_time_slots(snapshot)?;
        let dates = load_dates(snapshot, &days, &time_slots)?;
        let participant_size_ordinals = load_participant_sizes(snapshot)?;
        let room_type_ids: HashSet<RoomTypeId> =
            snapshot.room_types.iter().map(|rt| rt.id).collect();
        let rooms = load_rooms(snapshot, &participant_size_ordinals, &room_type_ids)?;
        let term_ids = load_terms(snapshot)?;
        let priority_weights = load_priorities(snapshot)?;
        let semester_values: HashMap<SemesterId, u8> = load_semesters(snapshot)?;
        let course_ids: HashSet<CourseId> = snapshot.courses.iter().map(|c| c.id).collect();
        let employee_ids: HashSet<EmployeeId> =
            snapshot.employees.iter().map(|e| e.id).collect();

        let events = load_events(
            snapshot,
            &participant_size_ordinals,
            &room_type_ids,
            &term_ids,
            &employee_ids,
            &course_ids,
            &semester_values,
            &days,
        )?;

        let employee_dislikes_date = load_dislikes(
            snapshot,
            &employee_ids,
            &dates,
            &priority_weights,
        )?;

        let blocks = build_blocks(&events, term);
        let slots = build_slots(&dates, &rooms);

        if blocks.len() > slots.len() {
            return Err(SolverError::Infeasible {
                num_blocks: blocks.len(),
                num_slots: slots.len(),
            });
        }

        Ok(Problem {
            blocks,
            slots,
            events,
            days,
            time_slots,
            rooms,
            employee_dislikes_date,
        })
    }
}

fn load_days(snapshot: &RawSnapshot) -> Result<HashMap<DayId, Day>, SolverError> {
    let mut days = HashMap::with_capacity(snapshot.days.len());
    for raw in &snapshot.days {
        let abbreviation = match raw.abbreviation.as_str() {
            "MO" => DayAbbreviation::Mo,
            "DI" => DayAbbreviation::Di,
            "MI" => DayAbbreviation::Mi,
            "DO" => DayAbbreviation::Do,
            "FR" => DayAbbreviation::Fr,
            "SA" => DayAbbreviation::Sa,
            "SO" => DayAbbreviation::So,
            other => {
                return Err(SolverError::Referential(format!(
                    "day {}: invalid abbreviation {other:?}",
                    raw.id
                )));
            }
        };
        days.insert(
            raw.id,
            Day {
                id: raw.id,
                abbreviation,
            },
        );
    }
    Ok(days)
}

fn load_time_slots(snapshot: &RawSnapshot) -> Result<HashMap<TimeSlotId, TimeSlot>, SolverError> {
    let mut time_slots = HashMap::with_capacity(snapshot.time_slots.len());
    for raw in &snapshot.time_slots {
        if raw.start_minutes >= raw.end_minutes {
            return Err(SolverError::Referential(format!(
                "time_slot {}: start ({}) must be before end ({})",
                raw.id, raw.start_minutes, raw.end_minutes
            )));
        }
        time_slots.insert(
            raw.id,
            TimeSlot {
                id: raw.id,
                start_minutes: raw.start_minutes,
                end_minutes: raw.end_minutes,
            },
        );
    }
    Ok(time_slots)
}

fn load_dates(
    snapshot: &RawSnapshot,
    days: &HashMap<DayId, Day>,
    time_slots: &HashMap<TimeSlotId, TimeSlot>,
) -> Result<HashMap<DateId, Date>, SolverError> {
    let mut dates = HashMap::with_capacity(snapshot.dates.len());
    let mut seen_pairs = HashSet::with_capacity(snapshot.dates.len());
    for raw in &snapshot.dates {
        if !days.contains_key(&raw.day_id) {
            return Err(SolverError::Referential(format!(
                "date {}: unknown day_id {}",
                raw.id, raw.day_id
            )));
        }
        if !time_slots.contains_key(&raw.time_slot_id) {
            return Err(SolverError::Referential(format!(
                "date {}: unknown time_slot_id {}",
                raw.id, raw.time_slot_id
            )));
        }
        if !seen_pairs.insert((raw.day_id, raw.time_slot_id)) {
            return Err(SolverError::Referential(format!(
                "date {}: duplicate (day_id, time_slot_id) pair ({}, {})",
                raw.id, raw.day_id, raw.time_slot_id
            )));
        }
        dates.insert(
            raw.id,
            Date {
                id: raw.id,
                day_id: raw.day_id,
                time_slot_id: raw.time_slot_id,
            },
        );
    }
    Ok(dates)
}

fn load_participant_sizes(snapshot: &RawSnapshot) -> Result<HashMap<u32, u32>, SolverError> {
    let mut ordinals = HashMap::with_capacity(snapshot.participant_sizes.len());
    let mut seen_ordinals = HashSet::with_capacity(snapshot.participant_sizes.len());
    for raw in &snapshot.participant_sizes {
        if !seen_ordinals.insert(raw.ordinal) {
            return Err(SolverError::Referential(format!(
                "participant_size {}: ordinal {} is not unique",
                raw.id, raw.ordinal
            )));
        }
        ordinals.insert(raw.id, raw.ordinal);
    }
    Ok(ordinals)
}

fn load_rooms(
    snapshot: &RawSnapshot,
    participant_size_ordinals: &HashMap<u32, u32>,
    room_type_ids: &HashSet<RoomTypeId>,
) -> Result<HashMap<RoomId, Room>, SolverError> {
    let mut rooms = HashMap::with_capacity(snapshot.rooms.len());
    for raw in &snapshot.rooms {
        let ordinal = *participant_size_ordinals
            .get(&raw.participant_size_id)
            .ok_or_else(|| {
                SolverError::Referential(format!(
                    "room {}: unknown participant_size_id {}",
                    raw.id, raw.participant_size_id
                ))
            })?;
        if !room_type_ids.contains(&raw.room_type_id) {
            return Err(SolverError::Referential(format!(
                "room {}: unknown room_type_id {}",
                raw.id, raw.room_type_id
            )));
        }
        rooms.insert(
            raw.id,
            Room {
                id: raw.id,
                participant_size_ordinal: ordinal,
                room_type_id: raw.room_type_id,
            },
        );
    }
    Ok(rooms)
}

fn load_terms(snapshot: &RawSnapshot) -> Result<HashMap<u32, Term>, SolverError> {
    let mut terms = HashMap::with_capacity(snapshot.terms.len());
    for raw in &snapshot.terms {
        let term = match raw.name.as_str() {
            "Sommer" => Term::Sommer,
            "Winter" => Term::Winter,
            other => {
                return Err(SolverError::Referential(format!(
                    "term {}: invalid name {other:?}",
                    raw.id
                )));
            }
        };
        terms.insert(raw.id, term);
    }
    Ok(terms)
}

fn load_priorities(snapshot: &RawSnapshot) -> Result<HashMap<u32, u8>, SolverError> {
    let mut weights = HashMap::with_capacity(snapshot.priorities.len());
    for raw in &snapshot.priorities {
        if !(1..=100).contains(&raw.value) {
            return Err(SolverError::Referential(format!(
                "priority {}: value {} must be in 1..=100",
                raw.id, raw.value
            )));
        }
        weights.insert(raw.id, raw.value);
    }
    Ok(weights)
}

fn load_semesters(snapshot: &RawSnapshot) -> Result<HashMap<SemesterId, u8>, SolverError> {
    let mut values = HashMap::with_capacity(snapshot.semesters.len());
    for raw in &snapshot.semesters {
        if !(1..=7).contains(&raw.value) {
            return Err(SolverError::Referential(format!(
                "semester {}: value {} must be in 1..=7",
                raw.id, raw.value
            )));
        }
        values.insert(raw.id, raw.value);
    }
    Ok(values)
}

#[allow(clippy::too_many_arguments)]
fn load_events(
    snapshot: &RawSnapshot,
    participant_size_ordinals: &HashMap<u32, u32>,
    room_type_ids: &HashSet<RoomTypeId>,
    term_ids: &HashMap<u32, Term>,
    employee_ids: &HashSet<EmployeeId>,
    course_ids: &HashSet<CourseId>,
    semester_values: &HashMap<SemesterId, u8>,
    days: &HashMap<DayId, Day>,
) -> Result<HashMap<EventId, Event>, SolverError> {
    let mut events = HashMap::with_capacity(snapshot.events.len());
    for raw in &snapshot.events {
        let participant_size_ordinal = *participant_size_ordinals
            .get(&raw.participant_size_id)
            .ok_or_else(|| {
                SolverError::Referential(format!(
                    "event {}: unknown participant_size_id {}",
                    raw.id, raw.participant_size_id
                ))
            })?;
        if !room_type_ids.contains(&raw.room_type_id) {
            return Err(SolverError::Referential(format!(
                "event {}: unknown room_type_id {}",
                raw.id, raw.room_type_id
            )));
        }
        let term = *term_ids.get(&raw.term_id).ok_or_else(|| {
            SolverError::Referential(format!("event {}: unknown term_id {}", raw.id, raw.term_id))
        })?;
        events.insert(
            raw.id,
            Event {
                id: raw.id,
                term,
                weekly_blocks: raw.weekly_blocks,
                participant_size_ordinal,
                room_type_id: raw.room_type_id,
                employee_ids: HashSet::new(),
                participants: HashMap::new(),
                disallowed_day_ids: HashSet::new(),
            },
        );
    }

    for rel in &snapshot.employee_holds_event {
        if !employee_ids.contains(&rel.employee_id) {
            return Err(SolverError::Referential(format!(
                "employee_holds_event: unknown employee_id {}",
                rel.employee_id
            )));
        }
        let event = events.get_mut(&rel.event_id).ok_or_else(|| {
            SolverError::Referential(format!(
                "employee_holds_event: unknown event_id {}",
                rel.event_id
            ))
        })?;
        event.employee_ids.insert(rel.employee_id);
    }

    for rel in &snapshot.course_contains_event {
        if !course_ids.contains(&rel.course_id) {
            return Err(SolverError::Referential(format!(
                "course_contains_event: unknown course_id {}",
                rel.course_id
            )));
        }
        if !semester_values.contains_key(&rel.semester_id) {
            return Err(SolverError::Referential(format!(
                "course_contains_event: unknown semester_id {}",
                rel.semester_id
            )));
        }
        let event = events.get_mut(&rel.event_id).ok_or_else(|| {
            SolverError::Referential(format!(
                "course_contains_event: unknown event_id {}",
                rel.event_id
            ))
        })?;
        event
            .participants
            .entry(rel.course_id)
            .or_default()
            .insert(rel.semester_id);
    }

    // Event_disallows_day is treated as a set, deduplicating unconditionally:
    // the source does not deduplicate before checking, but the specification
    // calls for `disallowed_day_ids` to be a set regardless.
    for rel in &snapshot.event_disallows_day {
        if !days.contains_key(&rel.day_id) {
            return Err(SolverError::Referential(format!(
                "event_disallows_day: unknown day_id {}",
                rel.day_id
            )));
        }
        let event = events.get_mut(&rel.event_id).ok_or_else(|| {
            SolverError::Referential(format!(
                "event_disallows_day: unknown event_id {}",
                rel.event_id
            ))
        })?;
        event.disallowed_day_ids.insert(rel.day_id);
    }

    Ok(events)
}

fn load_dislikes(
    snapshot: &RawSnapshot,
    employee_ids: &HashSet<EmployeeId>,
    dates: &HashMap<DateId, Date>,
    priority_weights: &HashMap<u32, u8>,
) -> Result<HashMap<(EmployeeId, DateId), u8>, SolverError> {
    let mut dislikes = HashMap::with_capacity(snapshot.employee_dislikes_date.len());
    for rel in &snapshot.employee_dislikes_date {
        if !employee_ids.contains(&rel.employee_id) {
            return Err(SolverError::Referential(format!(
                "employee_dislikes_date: unknown employee_id {}",
                rel.employee_id
            )));
        }
        if !dates.contains_key(&rel.date_id) {
            return Err(SolverError::Referential(format!(
                "employee_dislikes_date: unknown date_id {}",
                rel.date_id
            )));
        }
        let weight = *priority_weights.get(&rel.priority_id).ok_or_else(|| {
            SolverError::Referential(format!(
                "employee_dislikes_date: unknown priority_id {}",
                rel.priority_id
            ))
        })?;
        dislikes.insert((rel.employee_id, rel.date_id), weight);
    }
    Ok(dislikes)
}

/// Stable by `event_id` ascending, then by block index within the event —
/// events whose `weekly_blocks` is zero contribute nothing, consistent with
/// the source's `for _ in range(event.weekly_blocks)` construction.
fn build_blocks(events: &HashMap<EventId, Event>, term: Term) -> Vec<Block> {
    let mut event_ids: Vec<EventId> = events
        .values()
        .filter(|e| e.term == term)
        .map(|e| e.id)
        .collect();
    event_ids.sort_unstable();

    let mut blocks = Vec::new();
    for event_id in event_ids {
        let weekly_blocks = events[&event_id].weekly_blocks;
        for _ in 0..weekly_blocks {
            blocks.push(Block { event_id });
        }
    }
    blocks
}

/// Stable by `date_id` ascending, then by `room_id` ascending.
fn build_slots(dates: &HashMap<DateId, Date>, rooms: &HashMap<RoomId, Room>) -> Vec<Slot> {
    let mut date_ids: Vec<DateId> = dates.keys().copied().collect();
    date_ids.sort_unstable();
    let mut room_ids: Vec<RoomId> = rooms.keys().copied().collect();
    room_ids.sort_unstable();

    let mut slots = Vec::with_capacity(date_ids.len() * room_ids.len());
    for date_id in &date_ids {
        let date = &dates[date_id];
        for room_id in &room_ids {
            let room = &rooms[room_id];
            slots.push(Slot {
                date_id: *date_id,
                day_id: date.day_id,
                time_slot_id: date.time_slot_id,
                room_id: *room_id,
                room_participant_size_ordinal: room.participant_size_ordinal,
                room_type_id: room.room_type_id,
            });
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_snapshot() -> RawSnapshot {
        RawSnapshot {
            days: vec![
                RawDay {
                    id: 0,
                    abbreviation: "MO".to_string(),
                },
                RawDay {
                    id: 1,
                    abbreviation: "DI".to_string(),
                },
            ],
            time_slots: vec![RawTimeSlot {
                id: 0,
                start_minutes: 480,
                end_minutes: 555,
            }],
            dates: vec![
                RawDate {
                    id: 0,
                    day_id: 0,
                    time_slot_id: 0,
                },
                RawDate {
                    id: 1,
                    day_id: 1,
                    time_slot_id: 0,
                },
            ],
            participant_sizes: vec![RawParticipantSize { id: 0, ordinal: 1 }],
            room_types: vec![RawRoomType { id: 0 }],
            rooms: vec![RawRoom {
                id: 0,
                participant_size_id: 0,
                room_type_id: 0,
            }],
            employees: vec![],
            courses: vec![],
            semesters: vec![],
            terms: vec![RawTerm {
                id: 0,
                name: "Sommer".to_string(),
            }],
            priorities: vec![],
            events: vec![RawEvent {
                id: 0,
                weekly_blocks: 1,
                term_id: 0,
                participant_size_id: 0,
                room_type_id: 0,
            }],
            employee_holds_event: vec![],
            course_contains_event: vec![],
            employee_dislikes_date: vec![],
            event_disallows_day: vec![],
        }
    }

    #[test]
    fn loads_minimal_snapshot() {
        let snapshot = minimal_snapshot();
        let problem = Loader::load(&snapshot, Term::Sommer).unwrap();
        assert_eq!(problem.num_blocks(), 1);
        assert_eq!(problem.num_slots(), 2);
    }

    #[test]
    fn term_filtering_drops_other_terms() {
        let snapshot = minimal_snapshot();
        let problem = Loader::load(&snapshot, Term::Winter).unwrap();
        assert_eq!(problem.num_blocks(), 0);
    }

    #[test]
    fn zero_weekly_blocks_contributes_nothing() {
        let mut snapshot = minimal_snapshot();
        snapshot.events[0].weekly_blocks = 0;
        let problem = Loader::load(&snapshot, Term::Sommer).unwrap();
        assert_eq!(problem.num_blocks(), 0);
    }

    #[test]
    fn dangling_room_type_is_referential_error() {
        let mut snapshot = minimal_snapshot();
        snapshot.rooms[0].room_type_id = 99;
        let err = Loader::load(&snapshot, Term::Sommer).unwrap_err();
        assert!(matches!(err, SolverError::Referential(_)));
    }

    #[test]
    fn infeasible_when_more_blocks_than_slots() {
        let mut snapshot = minimal_snapshot();
        snapshot.events[0].weekly_blocks = 3;
        let err = Loader::load(&snapshot, Term::Sommer).unwrap_err();
        assert!(matches!(
            err,
            SolverError::Infeasible {
                num_blocks: 3,
                num_slots: 2
            }
        ));
    }

    #[test]
    fn invalid_day_abbreviation_is_referential_error() {
        let mut snapshot = minimal_snapshot();
        snapshot.days[0].abbreviation = "XX".to_string();
        let err = Loader::load(&snapshot, Term::Sommer).unwrap_err();
        assert!(matches!(err, SolverError::Referential(_)));
    }
}
