//! GA generation loop.
//!
//! [`GaRunner`] drives the evolutionary process:
//! evaluate → check stagnation → elitism + tournament selection →
//! crossover → mutation → evaluate children → replacement → repeat,
//! followed by one final evaluation pass.

use super::config::RunConfig;
use super::fitness::{best_of, evaluate, evaluate_and_sort, sort_by_fitness};
use super::operators::mutate;
use super::population::generate_population;
use super::replacement::next_generation;
use super::selection::select_pairs;
use super::types::{Assignment, Chromosome};
use crate::completion::per_node_completion_time;
use crate::error::{Result, SchedError};
use crate::random::rng_from_option;
use crate::workload::Workload;
use rand::Rng;
use tracing::{debug, info};

/// Number of trailing deltas summed into [`GenerationStats::delta_sum`].
pub const DELTA_SUM_WINDOW: usize = 3;

/// Per-generation progress record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness of this generation's population.
    pub best_fitness: f64,
    /// `best_fitness` minus the previous generation's best (0 before
    /// generation 0).
    pub delta: f64,
    /// Sum of the last (up to) [`DELTA_SUM_WINDOW`] deltas, this one
    /// included.
    pub delta_sum: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best assignment of the final population.
    pub best: Assignment,

    /// Fitness of `best` (`1 / makespan`).
    pub best_fitness: f64,

    /// Per-node completion times of `best`.
    pub completion_times: Vec<f64>,

    /// Number of completed breed-and-replace iterations.
    pub generations: usize,

    /// Whether the run stopped on the stagnation rule.
    pub stagnated: bool,

    /// Best fitness of every evaluated generation, followed by the
    /// final evaluation pass.
    pub fitness_history: Vec<f64>,

    /// Progress record of every evaluated generation.
    pub generation_stats: Vec<GenerationStats>,
}

impl GaResult {
    /// Maximum per-node completion time of the best assignment.
    pub fn makespan(&self) -> f64 {
        1.0 / self.best_fitness
    }
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use u_cloudsched::ga::{GaRunner, RunConfig};
/// use u_cloudsched::workload::WorkloadProfile;
///
/// let config = RunConfig::default()
///     .with_profile(WorkloadProfile::Testing)
///     .with_cloudlets(20)
///     .with_vms(4)
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
/// let (workload, result) = GaRunner::run_generated(&config).unwrap();
/// assert_eq!(result.best.len(), workload.job_count());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Generates the configured workload and runs the GA on it, drawing
    /// both from one generator seeded by `config.seed`.
    pub fn run_generated(config: &RunConfig) -> Result<(Workload, GaResult)> {
        config.validate()?;
        let mut rng = rng_from_option(config.seed);
        let workload = config.generate_workload(&mut rng)?;
        let result = Self::run_with_rng(&workload, config, &mut rng)?;
        Ok((workload, result))
    }

    /// Runs the GA on a given workload with a generator seeded by
    /// `config.seed`.
    pub fn run(workload: &Workload, config: &RunConfig) -> Result<GaResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(workload, config, &mut rng)
    }

    /// Runs the GA, drawing all randomness from `rng`.
    ///
    /// Only the GA parameters of `config` are checked; the workload
    /// generation fields are ignored since `workload` is given.
    ///
    /// # Errors
    /// Returns [`SchedError::Configuration`] if a GA parameter is invalid.
    pub fn run_with_rng<R: Rng>(
        workload: &Workload,
        config: &RunConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate_ga()?;

        let job_count = workload.job_count();
        let node_count = workload.node_count();
        let elite_count = config.elite_count();
        let crossover = config.crossover.operator::<R>();

        info!(
            jobs = job_count,
            nodes = node_count,
            population = config.population_size,
            elites = elite_count,
            crossover = ?config.crossover,
            "starting GA run"
        );

        let initial = generate_population(config.population_size, job_count, node_count, rng);
        let mut population = evaluate_and_sort(initial, workload, config.parallel)?;

        let mut fitness_history = Vec::with_capacity(config.n_generations + 1);
        let mut generation_stats: Vec<GenerationStats> = Vec::with_capacity(config.n_generations);
        let mut deltas = Vec::with_capacity(config.n_generations);
        let mut previous_best = 0.0;
        let mut generations = 0usize;
        let mut stagnated = false;

        for generation in 0..config.n_generations {
            let best_fitness = current_best(&population)?.fitness;
            let delta = best_fitness - previous_best;
            previous_best = best_fitness;
            deltas.push(delta);
            fitness_history.push(best_fitness);

            let tail = deltas.len().saturating_sub(DELTA_SUM_WINDOW);
            let stats = GenerationStats {
                generation,
                best_fitness,
                delta,
                delta_sum: deltas[tail..].iter().sum(),
            };
            debug!(
                generation,
                best_fitness,
                delta,
                delta_sum = stats.delta_sum,
                "generation evaluated"
            );
            generation_stats.push(stats);

            if is_stagnant(&deltas, config.stagnation_window, config.desired_delta_fitness) {
                info!(generation, best_fitness, "stopping: fitness stagnated");
                stagnated = true;
                break;
            }

            // Selection
            let pairs = select_pairs(&population, elite_count, config.tournament_size, rng)?;

            // Crossover
            let mut offspring = Vec::with_capacity(pairs.len() * 2);
            for &(a, b) in &pairs {
                let (o1, o2) = crossover(
                    &population[a].genes,
                    &population[b].genes,
                    config.crossover_rate,
                    rng,
                );
                offspring.push(o1);
                offspring.push(o2);
            }

            // Mutation
            for child in &mut offspring {
                mutate(child, node_count, config.mutation_rate, rng);
            }

            // Replacement
            let children = evaluate(offspring, workload, config.parallel)?;
            population = next_generation(&population, elite_count, &pairs, &children)?;
            sort_by_fitness(&mut population);

            generations += 1;
        }

        // Final evaluation pass
        let best = current_best(&population)?;
        fitness_history.push(best.fitness);
        let completion_times =
            per_node_completion_time(&best.genes, workload.jobs(), workload.nodes());

        info!(
            generations,
            stagnated,
            best_fitness = best.fitness,
            makespan = 1.0 / best.fitness,
            "GA run finished"
        );

        Ok(GaResult {
            best: best.genes.clone(),
            best_fitness: best.fitness,
            completion_times,
            generations,
            stagnated,
            fitness_history,
            generation_stats,
        })
    }
}

fn current_best(population: &[Chromosome]) -> Result<&Chromosome> {
    best_of(population).ok_or_else(|| SchedError::domain("population is empty"))
}

/// Stagnation stop rule.
///
/// True once at least `window` deltas exist and both the minimum and the
/// maximum of the last `window` deltas are `<= desired_delta`. A window
/// of 0 never stops.
pub fn is_stagnant(deltas: &[f64], window: usize, desired_delta: f64) -> bool {
    if window == 0 || deltas.len() < window {
        return false;
    }
    let recent = &deltas[deltas.len() - window..];
    let min = recent.iter().copied().fold(f64::INFINITY, f64::min);
    let max = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    min <= desired_delta && max <= desired_delta
}

// ============================================================================
// Tests
// ============================================================================
