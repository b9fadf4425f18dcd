//! The genetic algorithm.
//!
//! Population-based search: tournament selection, scattered crossover with
//! duplicate repair, adaptive per-individual mutation, and elitism, driven
//! to a generation budget or an early `stop_on_zero` exit. Mirrors
//! `original_source`'s PyGAD configuration (`parent_selection_type="tournament"`,
//! `crossover_type="scattered"`, `mutation_type="adaptive"`) faithfully, since
//! this crate owns the search loop PyGAD ran internally rather than
//! delegating to a library.
//!
//! # Random stream order
//!
//! Given a fixed seed, a run is fully reproducible because every draw from
//! the single owned [`StdRng`] happens in this order:
//!
//! 1. Initial population: `population_size` Fisher-Yates shuffles of the
//!    `0..num_slots` buffer (see [`crate::encoding::Chromosome::random`]).
//! 2. Per generation: `num_parents_mating * tournament_k` tournament draws,
//!    in order; then, per child needed to refill the non-elite slots, in
//!    order: `num_blocks` crossover parent-choice draws, repair draws (one
//!    or more per duplicate position encountered), and `num_blocks`
//!    mutation-decision draws each followed by replacement draws when
//!    triggered.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Solver;
use crate::encoding::Chromosome;
use crate::error::SolverError;
use crate::evaluator::evaluate;
use crate::loader::Problem;
use crate::models::{GeneticAlgorithmConfig, Outcome, ProgressCallback, ProgressUpdate, SearchOutcome};

pub struct GeneticAlgorithm {
    config: GeneticAlgorithmConfig,
}

impl GeneticAlgorithm {
    pub fn new(config: GeneticAlgorithmConfig) -> Self {
        GeneticAlgorithm { config }
    }

    fn validate(&self) -> Result<(), SolverError> {
        let c = &self.config;
        if c.population_size == 0 {
            return Err(SolverError::Configuration(
                "population_size must be greater than zero".to_string(),
            ));
        }
        if c.num_parents_mating == 0 {
            return Err(SolverError::Configuration(
                "num_parents_mating must be greater than zero".to_string(),
            ));
        }
        if c.tournament_k == 0 {
            return Err(SolverError::Configuration(
                "tournament_k must be greater than zero".to_string(),
            ));
        }
        if c.elitism > c.population_size {
            return Err(SolverError::Configuration(format!(
                "elitism ({}) cannot exceed population_size ({})",
                c.elitism, c.population_size
            )));
        }
        if !(0.0..=1.0).contains(&c.mutation_probability_high)
            || !(0.0..=1.0).contains(&c.mutation_probability_low)
        {
            return Err(SolverError::Configuration(
                "mutation probabilities must lie in [0.0, 1.0]".to_string(),
            ));
        }
        Ok(())
    }
}

impl Solver for GeneticAlgorithm {
    fn solve(
        &self,
        problem: &Problem,
        progress_callback: Option<&ProgressCallback>,
    ) -> Result<SearchOutcome, SolverError> {
        self.validate()?;

        let num_blocks = problem.num_blocks();
        let num_slots = problem.num_slots();
        let config = &self.config;
        let mut rng = StdRng::seed_from_u64(config.random_seed);

        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(&mut rng, num_blocks, num_slots))
            .collect();
        let mut fitnesses: Vec<u32> = population.iter().map(|c| evaluate(problem, c)).collect();

        let (best_idx, mut best_penalty) = best_of(&fitnesses);
        let mut best_chromosome = population[best_idx].clone();

        if config.logging.log_initial_state {
            log::debug!("initial population: best penalty {best_penalty}");
        }

        let mut generations_completed: u64 = 0;
        let outcome = loop {
            if generations_completed >= config.num_generations {
                break Outcome::GenerationLimit;
            }
            if config.stop_on_zero && best_penalty == 0 {
                break Outcome::ReachedZero;
            }

            let median = median_fitness(&fitnesses);

            if let Some(callback) = progress_callback {
                let update = ProgressUpdate {
                    generation: generations_completed,
                    max_generations: config.num_generations,
                    best_penalty,
                    median_penalty: median.round() as u32,
                };
                if !callback(&update) {
                    break Outcome::Cancelled;
                }
            }

            if let Some(freq) = config.logging.log_frequency {
                if freq > 0 && generations_completed % freq == 0 {
                    log::debug!(
                        "generation {generations_completed}: best={best_penalty} median={median}"
                    );
                }
            }

            let parent_indices: Vec<usize> = (0..config.num_parents_mating)
                .map(|_| tournament_select(&mut rng, &fitnesses, config.tournament_k))
                .collect();

            let elite_indices = top_n_indices(&fitnesses, config.elitism);
            let mut next_population = Vec::with_capacity(config.population_size);
            let mut next_fitnesses = Vec::with_capacity(config.population_size);
            for &idx in &elite_indices {
                next_population.push(population[idx].clone());
                next_fitnesses.push(fitnesses[idx]);
            }

            let num_children = config.population_size - elite_indices.len();
            for child_idx in 0..num_children {
                let parent_a = &population[parent_indices[child_idx % parent_indices.len()]];
                let parent_b =
                    &population[parent_indices[(child_idx + 1) % parent_indices.len()]];

                let mut genes = Vec::with_capacity(num_blocks);
                for gene_idx in 0..num_blocks {
                    let gene = if rng.random::<bool>() {
                        parent_a.genes[gene_idx]
                    } else {
                        parent_b.genes[gene_idx]
                    };
                    genes.push(gene);
                }
                repair(&mut genes, num_slots, &mut rng);

                let mut child = Chromosome::new(genes);
                let child_fitness = evaluate(problem, &child);
                let mutation_probability = if child_fitness as f64 >= median {
                    config.mutation_probability_high
                } else {
                    config.mutation_probability_low
                };
                mutate(&mut child, num_slots, mutation_probability, &mut rng);
                let child_fitness = evaluate(problem, &child);

                next_population.push(child);
                next_fitnesses.push(child_fitness);
            }

            population = next_population;
            fitnesses = next_fitnesses;
            generations_completed += 1;

            let (idx, penalty) = best_of(&fitnesses);
            if penalty < best_penalty {
                best_penalty = penalty;
                best_chromosome = population[idx].clone();
            }
        };

        if config.logging.log_stop_condition {
            log::debug!(
                "search stopped after {generations_completed} generations: {outcome:?}, best penalty {best_penalty}"
            );
        }

        Ok(SearchOutcome {
            genes: best_chromosome.genes,
            penalty: best_penalty,
            generations_completed,
            outcome,
        })
    }
}

/// Population median fitness, matching `numpy.median`'s convention of
/// averaging the two middle values for an even-sized population.
fn median_fitness(fitnesses: &[u32]) -> f64 {
    let mut sorted: Vec<u32> = fitnesses.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    }
}

fn best_of(fitnesses: &[u32]) -> (usize, u32) {
    let mut best_idx = 0;
    for i in 1..fitnesses.len() {
        if fitnesses[i] < fitnesses[best_idx] {
            best_idx = i;
        }
    }
    (best_idx, fitnesses[best_idx])
}

/// Indices of the `n` lowest-fitness individuals, ties broken by lower index.
fn top_n_indices(fitnesses: &[u32], n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitnesses.len()).collect();
    indices.sort_by(|&a, &b| fitnesses[a].cmp(&fitnesses[b]).then(a.cmp(&b)));
    indices.truncate(n);
    indices
}

/// Draws `k` population indices with replacement and returns the
/// best-fitness one, ties broken by lower population index.
fn tournament_select(rng: &mut impl Rng, fitnesses: &[u32], k: usize) -> usize {
    let mut best: Option<usize> = None;
    for _ in 0..k {
        let candidate = rng.random_range(0..fitnesses.len());
        best = Some(match best {
            None => candidate,
            Some(current) => {
                if fitnesses[candidate] < fitnesses[current]
                    || (fitnesses[candidate] == fitnesses[current] && candidate < current)
                {
                    candidate
                } else {
                    current
                }
            }
        });
    }
    best.expect("k must be greater than zero")
}

/// Replaces every duplicate gene (keeping the first occurrence) with a
/// uniformly random value not already present, one rejection-sampling draw
/// (or more, on collision) per duplicate encountered, in gene-index order.
fn repair(genes: &mut [u32], num_slots: usize, rng: &mut impl Rng) {
    let mut seen: HashSet<u32> = HashSet::with_capacity(genes.len());
    for i in 0..genes.len() {
        if seen.contains(&genes[i]) {
            loop {
                let candidate = rng.random_range(0..num_slots as u32);
                if !seen.contains(&candidate) {
                    genes[i] = candidate;
                    break;
                }
            }
        }
        seen.insert(genes[i]);
    }
}

/// Mutates each gene of `chromosome` independently with `probability`,
/// replacing a mutated gene with a uniformly random value not used
/// elsewhere in the chromosome.
fn mutate(chromosome: &mut Chromosome, num_slots: usize, probability: f64, rng: &mut impl Rng) {
    let mut used: HashSet<u32> = chromosome.genes.iter().copied().collect();
    for i in 0..chromosome.genes.len() {
        if rng.random::<f64>() < probability {
            used.remove(&chromosome.genes[i]);
            loop {
                let candidate = rng.random_range(0..num_slots as u32);
                if !used.contains(&candidate) {
                    chromosome.genes[i] = candidate;
                    break;
                }
            }
            used.insert(chromosome.genes[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{Block, Slot};
    use crate::models::{Day, DayAbbreviation, Event, Room, Term, TimeSlot};
    use std::collections::HashMap;

    fn tiny_problem(num_blocks: usize, num_slots: usize) -> Problem {
        let mut events = HashMap::new();
        for i in 0..num_blocks {
            events.insert(
                i as u32,
                Event {
                    id: i as u32,
                    term: Term::Sommer,
                    weekly_blocks: 1,
                    participant_size_ordinal: 0,
                    room_type_id: 0,
                    employee_ids: Default::default(),
                    participants: Default::default(),
                    disallowed_day_ids: Default::default(),
                },
            );
        }
        let blocks = (0..num_blocks).map(|i| Block { event_id: i as u32 }).collect();
        let slots = (0..num_slots)
            .map(|i| Slot {
                date_id: i as u32,
                day_id: 0,
                time_slot_id: 0,
                room_id: 0,
                room_participant_size_ordinal: 0,
                room_type_id: 0,
            })
            .collect();
        Problem {
            blocks,
            slots,
            events,
            days: HashMap::from([(
                0,
                Day {
                    id: 0,
                    abbreviation: DayAbbreviation::Mo,
                },
            )]),
            time_slots: HashMap::from([(
                0,
                TimeSlot {
                    id: 0,
                    start_minutes: 0,
                    end_minutes: 1,
                },
            )]),
            rooms: HashMap::from([(
                0,
                Room {
                    id: 0,
                    participant_size_ordinal: 0,
                    room_type_id: 0,
                },
            )]),
            employee_dislikes_date: HashMap::new(),
        }
    }

    #[test]
    fn reaches_zero_when_blocks_equal_slots() {
        let problem = tiny_problem(5, 5);
        let config = GeneticAlgorithmConfig {
            population_size: 20,
            num_generations: 500,
            num_parents_mating: 6,
            tournament_k: 4,
            random_seed: 7,
            ..Default::default()
        };
        let algorithm = GeneticAlgorithm::new(config);
        let outcome = algorithm.solve(&problem, None).unwrap();
        assert_eq!(outcome.penalty, 0);
        assert_eq!(outcome.outcome, Outcome::ReachedZero);
    }

    #[test]
    fn determinism_same_seed_same_trajectory() {
        let problem = tiny_problem(8, 12);
        let config = GeneticAlgorithmConfig {
            population_size: 30,
            num_generations: 25,
            num_parents_mating: 6,
            tournament_k: 5,
            stop_on_zero: false,
            random_seed: 42,
            ..Default::default()
        };
        let algorithm = GeneticAlgorithm::new(config.clone());
        let a = algorithm.solve(&problem, None).unwrap();
        let algorithm_again = GeneticAlgorithm::new(config);
        let b = algorithm_again.solve(&problem, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn elitism_is_monotonically_non_increasing() {
        let problem = tiny_problem(6, 9);
        let config = GeneticAlgorithmConfig {
            population_size: 15,
            num_generations: 30,
            num_parents_mating: 4,
            tournament_k: 3,
            stop_on_zero: false,
            elitism: 2,
            random_seed: 3,
            ..Default::default()
        };
        let algorithm = GeneticAlgorithm::new(config);
        let seen_best = std::cell::RefCell::new(Vec::new());
        let callback: ProgressCallback = Box::new(|update: &ProgressUpdate| {
            seen_best.borrow_mut().push(update.best_penalty);
            true
        });
        algorithm.solve(&problem, Some(&callback)).unwrap();
        let seen_best = seen_best.into_inner();
        for window in seen_best.windows(2) {
            assert!(window[1] <= window[0], "best penalty increased between generations");
        }
    }

    #[test]
    fn rejects_zero_population_size() {
        let problem = tiny_problem(1, 1);
        let config = GeneticAlgorithmConfig {
            population_size: 0,
            ..Default::default()
        };
        let algorithm = GeneticAlgorithm::new(config);
        assert!(matches!(
            algorithm.solve(&problem, None),
            Err(SolverError::Configuration(_))
        ));
    }

    #[test]
    fn repair_removes_duplicates() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut genes = vec![0u32, 0, 1, 1, 2];
        repair(&mut genes, 10, &mut rng);
        let unique: HashSet<u32> = genes.iter().copied().collect();
        assert_eq!(unique.len(), genes.len());
    }
}
