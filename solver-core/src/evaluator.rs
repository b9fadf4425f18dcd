//! The fitness function.
//!
//! Sums a per-block penalty over a chromosome: `HARD` for every structural
//! violation, the employee's priority weight for a merely disliked date.
//! `0` means the candidate is optimal. Mirrors the source's
//! `fitness_function`, with the sign flipped — this crate minimises a
//! penalty rather than maximising a PyGAD fitness score.

use crate::encoding::Chromosome;
use crate::loader::Problem;
use crate::models::{CourseId, DateId, EmployeeId, SemesterId};

/// Cost of a single hard-constraint violation.
pub const HARD: u32 = 100;

/// Scores `chromosome` against `problem`. `chromosome.genes` must already be
/// structurally valid (see [`Chromosome::is_structurally_valid`]) — the
/// evaluator does not re-check in-range-ness or distinctness, since the
/// encoding guarantees both by construction.
pub fn evaluate(problem: &Problem, chromosome: &Chromosome) -> u32 {
    let mut penalty: u32 = 0;
    let mut employee_planned_at_date: std::collections::HashSet<(EmployeeId, DateId)> =
        std::collections::HashSet::new();
    let mut date_x_student: std::collections::HashSet<(DateId, CourseId, SemesterId)> =
        std::collections::HashSet::new();

    for (block, &slot_index) in problem.blocks.iter().zip(chromosome.genes.iter()) {
        let slot = &problem.slots[slot_index as usize];
        let event = &problem.events[&block.event_id];

        if event.disallowed_day_ids.contains(&slot.day_id) {
            penalty += HARD;
        }

        for &employee_id in &event.employee_ids {
            let key = (employee_id, slot.date_id);
            if !employee_planned_at_date.insert(key) {
                penalty += HARD;
            }
            if let Some(&weight) = problem.employee_dislikes_date.get(&key) {
                penalty += weight as u32;
            }
        }

        if slot.room_participant_size_ordinal < event.participant_size_ordinal {
            penalty += HARD;
        }
        if slot.room_type_id != event.room_type_id {
            penalty += HARD;
        }

        for (&course_id, semester_ids) in &event.participants {
            for &semester_id in semester_ids {
                let key = (slot.date_id, course_id, semester_id);
                if !date_x_student.insert(key) {
                    penalty += HARD;
                }
            }
        }
    }

    penalty
}
