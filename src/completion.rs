//! Per-node completion-time model.
//!
//! An assignment maps job position `i` to node index `assignment[i]`. The
//! completion time of a node is the sum of `length / speed` over the jobs
//! assigned to it; a node with no jobs completes at exactly 0.
//!
//! Every function here is pure and read-only over its inputs, so
//! different assignments may be evaluated concurrently against the same
//! tables.

use crate::error::{Result, SchedError};
use crate::workload::{ComputeNode, Job};

/// Computes the accumulated completion time of every node.
///
/// The returned vector has one entry per node.
///
/// Jobs beyond the end of `assignment` are ignored.
///
/// # Panics
/// Panics if `assignment` contains an index outside `0..nodes.len()`.
/// Use [`checked_completion_times`] for untrusted input.
pub fn per_node_completion_time(assignment: &[usize], jobs: &[Job], nodes: &[ComputeNode]) -> Vec<f64> {
    let mut load = vec![0.0; nodes.len()];
    for (job, &node) in jobs.iter().zip(assignment) {
        load[node] += nodes[node].processing_time(job);
    }
    load
}

/// Like [`per_node_completion_time`], but validates the assignment first.
pub fn checked_completion_times(
    assignment: &[usize],
    jobs: &[Job],
    nodes: &[ComputeNode],
) -> Result<Vec<f64>> {
    validate_assignment(assignment, jobs.len(), nodes.len())?;
    Ok(per_node_completion_time(assignment, jobs, nodes))
}

/// Checks that `assignment` has one gene per job and every gene names a node.
pub fn validate_assignment(assignment: &[usize], job_count: usize, node_count: usize) -> Result<()> {
    if assignment.len() != job_count {
        return Err(SchedError::domain(format!(
            "assignment has {} genes, expected {job_count}",
            assignment.len()
        )));
    }
    if let Some((i, &g)) = assignment.iter().enumerate().find(|(_, &g)| g >= node_count) {
        return Err(SchedError::domain(format!(
            "gene {i} assigns node {g}, but only {node_count} nodes exist"
        )));
    }
    Ok(())
}

/// Maximum per-node completion time.
pub fn makespan(completion_times: &[f64]) -> f64 {
    completion_times.iter().copied().fold(0.0, f64::max)
}
