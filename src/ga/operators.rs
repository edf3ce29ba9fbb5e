//! Crossover and mutation operators for assignment chromosomes.
//!
//! Assignments are integer vectors where every gene lies in
//! `[0, node_count)`. Unlike permutation encodings, any recombination of
//! two valid parents is itself valid, so operators never need repair.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: per-gene Bernoulli inheritance — O(n)
//! - [`single_point_crossover`]: prefix/suffix swap at one cut — O(n)
//!
//! # Mutation Operators
//!
//! - [`mutate`]: per-gene random reset — O(n)
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::config::CrossoverKind;
use super::population::random_allele;
use super::types::Assignment;
use rand::Rng;

/// Signature shared by every crossover operator: `(parent1, parent2, rate, rng)`.
pub type CrossoverFn<R> = fn(&[usize], &[usize], f64, &mut R) -> (Assignment, Assignment);

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover.
///
/// For each position, with probability `rate` child 1 takes parent 1's
/// gene and child 2 takes parent 2's; otherwise the genes are swapped.
/// With `rate = 1.0` the children are exact copies of their parents.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rate: f64,
    rng: &mut R,
) -> (Assignment, Assignment) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(rate) { (a, b) } else { (b, a) })
        .unzip()
}

/// Single-point crossover.
///
/// Draws a cut point uniformly in `[0, n]` and returns
/// `(p1[..cut] ++ p2[cut..], p2[..cut] ++ p1[cut..])`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Assignment, Assignment) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let cut = rng.random_range(0..=n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

/// `head[..cut] ++ tail[cut..]`.
fn splice(head: &[usize], tail: &[usize], cut: usize) -> Assignment {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

fn single_point_operator<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    _rate: f64,
    rng: &mut R,
) -> (Assignment, Assignment) {
    single_point_crossover(parent1, parent2, rng)
}

impl CrossoverKind {
    /// Resolves the operator once so the generation loop does not
    /// re-dispatch on every pair.
    pub fn operator<R: Rng>(self) -> CrossoverFn<R> {
        match self {
            CrossoverKind::Uniform => uniform_crossover::<R>,
            CrossoverKind::SinglePoint => single_point_operator::<R>,
        }
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Per-gene reset mutation.
///
/// Each gene is independently replaced, with probability `rate`, by a
/// freshly drawn allele. The new value may equal the old one.
pub fn mutate<R: Rng>(genes: &mut [usize], node_count: usize, rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = random_allele(node_count, rng);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
