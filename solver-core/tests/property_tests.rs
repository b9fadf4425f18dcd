//! Property-based tests for the solver.
//!
//! Generates small, valid problem instances and checks structural-validity
//! and determinism invariants hold across them, rather than hand-picking a
//! handful of fixed cases.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use solver_core::encoding::Chromosome;
use solver_core::loader::{
    Loader, RawDate, RawDay, RawEvent, RawParticipantSize, RawRoom, RawRoomType, RawSnapshot,
    RawTerm, RawTimeSlot,
};
use solver_core::models::{GeneticAlgorithmConfig, Term};

/// Builds a small, internally consistent snapshot: `num_days * slots_per_day`
/// dates crossed with `num_rooms` identical rooms, and a handful of events
/// each contributing `weekly_blocks` blocks, capped so `len(BLOCKS) <=
/// len(SLOTS)` always holds.
fn build_snapshot(
    num_days: u32,
    slots_per_day: u32,
    num_rooms: u32,
    event_block_counts: Vec<u32>,
) -> RawSnapshot {
    let days: Vec<RawDay> = (0..num_days)
        .map(|id| RawDay {
            id,
            abbreviation: ["MO", "DI", "MI", "DO", "FR", "SA", "SO"][(id % 7) as usize]
                .to_string(),
        })
        .collect();
    let time_slots: Vec<RawTimeSlot> = (0..slots_per_day)
        .map(|id| RawTimeSlot {
            id,
            start_minutes: id * 90,
            end_minutes: id * 90 + 80,
        })
        .collect();
    let mut dates = Vec::new();
    let mut next_date_id = 0;
    for day in &days {
        for time_slot in &time_slots {
            dates.push(RawDate {
                id: next_date_id,
                day_id: day.id,
                time_slot_id: time_slot.id,
            });
            next_date_id += 1;
        }
    }
    let rooms: Vec<RawRoom> = (0..num_rooms)
        .map(|id| RawRoom {
            id,
            participant_size_id: 0,
            room_type_id: 0,
        })
        .collect();

    let num_slots = dates.len() as u32 * num_rooms;
    let mut remaining = num_slots;
    let events: Vec<RawEvent> = event_block_counts
        .into_iter()
        .enumerate()
        .map(|(id, requested)| {
            let weekly_blocks = requested.min(remaining);
            remaining = remaining.saturating_sub(weekly_blocks);
            RawEvent {
                id: id as u32,
                weekly_blocks,
                term_id: 0,
                participant_size_id: 0,
                room_type_id: 0,
            }
        })
        .collect();

    RawSnapshot {
        days,
        time_slots,
        dates,
        participant_sizes: vec![RawParticipantSize { id: 0, ordinal: 0 }],
        room_types: vec![RawRoomType { id: 0 }],
        rooms,
        terms: vec![RawTerm {
            id: 0,
            name: "Sommer".to_string(),
        }],
        events,
        ..RawSnapshot::default()
    }
}

fn problem_strategy() -> impl Strategy<Value = RawSnapshot> {
    (
        1..=5u32,
        1..=3u32,
        1..=3u32,
        prop::collection::vec(0..=3u32, 0..=4),
    )
        .prop_map(|(days, slots_per_day, rooms, blocks)| {
            build_snapshot(days, slots_per_day, rooms, blocks)
        })
}

proptest! {
    #[test]
    fn loaded_problems_always_fit_in_their_slots(snapshot in problem_strategy()) {
        let problem = Loader::load(&snapshot, Term::Sommer).unwrap();
        prop_assert!(problem.num_blocks() <= problem.num_slots());
    }

    #[test]
    fn random_chromosome_is_always_structurally_valid(snapshot in problem_strategy(), seed in any::<u64>()) {
        let problem = Loader::load(&snapshot, Term::Sommer).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let chromosome = Chromosome::random(&mut rng, problem.num_blocks(), problem.num_slots());
        prop_assert!(chromosome.is_structurally_valid(problem.num_slots()));
        prop_assert_eq!(chromosome.len(), problem.num_blocks());
    }

    #[test]
    fn search_always_returns_a_structurally_valid_candidate(
        snapshot in problem_strategy(),
        seed in any::<u64>(),
    ) {
        let problem = Loader::load(&snapshot, Term::Sommer).unwrap();
        let config = GeneticAlgorithmConfig {
            population_size: 10,
            num_generations: 5,
            num_parents_mating: 4,
            tournament_k: 3,
            random_seed: seed,
            ..Default::default()
        };
        let outcome = solver_core::run_solver(&problem, &config, None).unwrap();
        let chromosome = Chromosome::new(outcome.genes);
        prop_assert!(chromosome.is_structurally_valid(problem.num_slots()));
        prop_assert_eq!(chromosome.len(), problem.num_blocks());
    }

    #[test]
    fn same_seed_produces_identical_outcome(
        snapshot in problem_strategy(),
        seed in any::<u64>(),
    ) {
        let problem = Loader::load(&snapshot, Term::Sommer).unwrap();
        let config = GeneticAlgorithmConfig {
            population_size: 10,
            num_generations: 5,
            num_parents_mating: 4,
            tournament_k: 3,
            random_seed: seed,
            ..Default::default()
        };
        let a = solver_core::run_solver(&problem, &config, None).unwrap();
        let b = solver_core::run_solver(&problem, &config, None).unwrap();
        prop_assert_eq!(a, b);
    }
}
