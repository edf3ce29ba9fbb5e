//! Generational replacement.
//!
//! The next population is built wholesale: elites first, copied verbatim,
//! then for every breeding pair the two fittest of its parents and
//! children.

use super::types::Chromosome;
use crate::error::{Result, SchedError};
use std::cmp::Ordering;

/// Builds the next generation from a sorted population.
///
/// `children` holds two evaluated offspring per pair, in pair order.
/// For each pair `(p1, p2)` with children `(o1, o2)` the two fittest of
/// `[p1, p2, o1, o2]` survive; on equal fitness the candidate earlier in
/// that order wins. The two survivors are always distinct candidates.
///
/// The result has `elite_count + 2 * pairs.len()` individuals and is not
/// sorted.
pub fn next_generation(
    population: &[Chromosome],
    elite_count: usize,
    pairs: &[(usize, usize)],
    children: &[Chromosome],
) -> Result<Vec<Chromosome>> {
    if children.len() != pairs.len() * 2 {
        return Err(SchedError::domain(format!(
            "{} pairs produced {} children, expected {}",
            pairs.len(),
            children.len(),
            pairs.len() * 2
        )));
    }

    let elite_count = elite_count.min(population.len());
    let mut next = Vec::with_capacity(elite_count + children.len());
    next.extend_from_slice(&population[..elite_count]);

    for (&(a, b), offspring) in pairs.iter().zip(children.chunks_exact(2)) {
        let candidates = [&population[a], &population[b], &offspring[0], &offspring[1]];
        let (first, second) = best_two(candidates);
        next.push(first.clone());
        next.push(second.clone());
    }

    Ok(next)
}

/// Picks the two fittest candidates, preferring earlier ones on ties.
fn best_two(candidates: [&Chromosome; 4]) -> (&Chromosome, &Chromosome) {
    let mut order = [0usize, 1, 2, 3];
    order.sort_by(|&i, &j| {
        candidates[j]
            .fitness
            .partial_cmp(&candidates[i].fitness)
            .unwrap_or(Ordering::Equal)
    });
    (candidates[order[0]], candidates[order[1]])
}
