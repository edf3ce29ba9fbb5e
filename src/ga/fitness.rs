//! Fitness evaluation and population ordering.
//!
//! After [`evaluate_and_sort`] the population is ordered by fitness,
//! best first. The sort is stable, so individuals with equal fitness keep
//! their relative order; elitism and every tie-break downstream rely on
//! this ordering being reproducible.

use super::types::{Assignment, Chromosome};
use crate::completion::{makespan, per_node_completion_time, validate_assignment};
use crate::error::{Result, SchedError};
use crate::workload::Workload;
use std::cmp::Ordering;

/// Computes `1 / makespan` for an assignment.
///
/// # Errors
/// Returns [`SchedError::Domain`] if the assignment does not cover the
/// workload's jobs, names a node that does not exist, or if the makespan
/// is exactly zero.
pub fn fitness(genes: &[usize], workload: &Workload) -> Result<f64> {
    validate_assignment(genes, workload.job_count(), workload.node_count())?;
    let times = per_node_completion_time(genes, workload.jobs(), workload.nodes());
    let span = makespan(&times);
    if span == 0.0 {
        return Err(SchedError::domain(
            "fitness undefined: maximum completion time is zero",
        ));
    }
    Ok(1.0 / span)
}

/// Scores every individual, preserving input order.
pub fn evaluate(
    individuals: Vec<Assignment>,
    workload: &Workload,
    parallel: bool,
) -> Result<Vec<Chromosome>> {
    evaluate_all(individuals, workload, parallel)
}

#[cfg(feature = "parallel")]
fn evaluate_all(
    individuals: Vec<Assignment>,
    workload: &Workload,
    parallel: bool,
) -> Result<Vec<Chromosome>> {
    use rayon::prelude::*;

    if parallel {
        individuals
            .into_par_iter()
            .map(|genes| Chromosome::evaluate(genes, workload))
            .collect()
    } else {
        individuals
            .into_iter()
            .map(|genes| Chromosome::evaluate(genes, workload))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(
    individuals: Vec<Assignment>,
    workload: &Workload,
    _parallel: bool,
) -> Result<Vec<Chromosome>> {
    individuals
        .into_iter()
        .map(|genes| Chromosome::evaluate(genes, workload))
        .collect()
}

/// Stable sort by fitness, descending.
pub fn sort_by_fitness(population: &mut [Chromosome]) {
    population.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
}

/// Scores every individual, then orders the population best first.
///
/// Parallel evaluation collects results in input order, so the sorted
/// output is identical with or without the `parallel` feature.
pub fn evaluate_and_sort(
    individuals: Vec<Assignment>,
    workload: &Workload,
    parallel: bool,
) -> Result<Vec<Chromosome>> {
    let mut population = evaluate(individuals, workload, parallel)?;
    sort_by_fitness(&mut population);
    Ok(population)
}

/// Returns the best individual of a sorted population.
///
/// Ties resolve to the earliest individual of maximal fitness.
pub fn best_of(sorted: &[Chromosome]) -> Option<&Chromosome> {
    sorted.first()
}
