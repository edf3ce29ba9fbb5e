//! Random individual and population generation.

use super::types::Assignment;
use rand::Rng;

/// Draws a node index uniformly in `[0, node_count)`.
///
/// # Panics
/// Panics if `node_count == 0`.
#[inline]
pub fn random_allele<R: Rng>(node_count: usize, rng: &mut R) -> usize {
    rng.random_range(0..node_count)
}

/// Draws one allele per job independently.
pub fn random_individual<R: Rng>(job_count: usize, node_count: usize, rng: &mut R) -> Assignment {
    (0..job_count).map(|_| random_allele(node_count, rng)).collect()
}

/// Draws `size` independent individuals.
pub fn generate_population<R: Rng>(
    size: usize,
    job_count: usize,
    node_count: usize,
    rng: &mut R,
) -> Vec<Assignment> {
    (0..size)
        .map(|_| random_individual(job_count, node_count, rng))
        .collect()
}
