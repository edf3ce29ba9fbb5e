//! Core GA value types.
//!
//! An individual's genes and its fitness travel together as one
//! [`Chromosome`], so reordering the population can never separate a
//! schedule from its score.

use super::fitness::fitness;
use crate::error::Result;
use crate::workload::Workload;

/// A job-to-node assignment: `genes[i]` is the node index for job `i`.
pub type Assignment = Vec<usize>;

/// An evaluated individual.
///
/// Fitness is the reciprocal of the assignment's makespan; higher is
/// better.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    pub genes: Assignment,
    pub fitness: f64,
}

impl Chromosome {
    /// Scores `genes` against `workload`.
    pub fn evaluate(genes: Assignment, workload: &Workload) -> Result<Self> {
        let fitness = fitness(&genes, workload)?;
        Ok(Self { genes, fitness })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::{ComputeNode, Job};

    #[test]
    fn test_evaluate_keeps_genes() {
        let w = Workload::new(
            vec![Job::new(0, 8.0), Job::new(1, 4.0)],
            vec![ComputeNode::new(0, 2.0), ComputeNode::new(1, 4.0)],
        )
        .unwrap();
        let c = Chromosome::evaluate(vec![0, 1], &w).unwrap();
        assert_eq!(c.genes, vec![0, 1]);
        // makespan = max(8/2, 4/4) = 4
        assert!((c.fitness - 0.25).abs() < 1e-12);
    }
}
