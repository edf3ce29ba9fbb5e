//! Elitism and tournament selection.
//!
//! The population is expected to be sorted best first (see
//! [`super::fitness::sort_by_fitness`]), so the elites are always the
//! prefix `[0, elite_count)`. Tournaments only draw from the remaining
//! breeding pool `[elite_count, len)`.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::config::validate_tournament;
use super::types::Chromosome;
use crate::error::Result;
use rand::seq::index::sample;
use rand::Rng;
use std::ops::Range;

/// Indices of the elite individuals in a sorted population.
pub fn elite_indices(elite_count: usize, population_len: usize) -> Range<usize> {
    0..elite_count.min(population_len)
}

/// Runs one tournament over `pool`.
///
/// Samples `k` distinct indices from `pool` and returns the one with the
/// highest fitness. Ties go to the lowest index among the tied
/// competitors.
///
/// # Panics
/// Panics if `k > pool.len()` or `pool` is out of bounds for `population`.
pub fn tournament<R: Rng>(
    population: &[Chromosome],
    pool: Range<usize>,
    k: usize,
    rng: &mut R,
) -> usize {
    let offset = pool.start;
    sample(rng, pool.len(), k)
        .iter()
        .map(|i| offset + i)
        .reduce(|best, idx| {
            let (f_best, f_idx) = (population[best].fitness, population[idx].fitness);
            if f_idx > f_best || (f_idx == f_best && idx < best) {
                idx
            } else {
                best
            }
        })
        .unwrap_or(offset)
}

/// Selects breeding pairs from the non-elite part of a sorted population.
///
/// Produces `(len - elite_count) / 2` pairs; an odd breeding pool leaves
/// one slot unfilled. For each pair, two tournaments are drawn over the
/// whole breeding pool and redrawn together until their winners differ,
/// so no pair ever contains the same individual twice.
///
/// # Errors
/// Returns [`crate::SchedError::Configuration`] if `tournament_size` is 0,
/// or if the pool is too small to yield two distinct winners with the
/// given tournament size.
pub fn select_pairs<R: Rng>(
    population: &[Chromosome],
    elite_count: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>> {
    let pool = elite_count.min(population.len())..population.len();
    let pair_count = pool.len() / 2;
    validate_tournament(tournament_size, pool.len())?;

    let mut pairs = Vec::with_capacity(pair_count);
    for _ in 0..pair_count {
        let pair = loop {
            let a = tournament(population, pool.clone(), tournament_size, rng);
            let b = tournament(population, pool.clone(), tournament_size, rng);
            if a != b {
                break (a, b);
            }
        };
        pairs.push(pair);
    }
    Ok(pairs)
}
