//! Baseline assignment heuristics.
//!
//! Each heuristic processes jobs in id order and returns a complete
//! assignment. Greedy heuristics track a transient per-node load that
//! starts at zero on every call.
//!
//! # Complexity
//! Random and round-robin are O(n); least-loaded and min-min are
//! O(n * m) for n jobs and m nodes.
//!
//! # Reference
//! Braun et al. (2001), "A Comparison of Eleven Static Heuristics for
//! Mapping a Class of Independent Tasks onto Heterogeneous Distributed
//! Computing Systems"

use crate::ga::population::random_individual;
use crate::ga::Assignment;
use crate::workload::Workload;
use rand::Rng;

/// Uniformly random node per job.
pub fn random_assignment<R: Rng>(workload: &Workload, rng: &mut R) -> Assignment {
    random_individual(workload.job_count(), workload.node_count(), rng)
}

/// Job `i` goes to node `i mod node_count`.
pub fn round_robin(workload: &Workload) -> Assignment {
    let m = workload.node_count();
    (0..workload.job_count()).map(|i| i % m).collect()
}

/// Minimum completion time (MCT) as a least-loaded rule.
///
/// Each job goes to the node with the smallest accumulated load so far,
/// regardless of how fast that node would run this particular job.
pub fn least_loaded(workload: &Workload) -> Assignment {
    let nodes = workload.nodes();
    let mut load = vec![0.0; nodes.len()];
    workload
        .jobs()
        .iter()
        .map(|job| {
            let node = argmin(load.iter().copied());
            load[node] += nodes[node].processing_time(job);
            node
        })
        .collect()
}

/// Min-min: each job goes to the node whose load *after* running it would
/// be smallest, so the job's speed-dependent cost is part of the choice.
pub fn min_min(workload: &Workload) -> Assignment {
    let nodes = workload.nodes();
    let mut load = vec![0.0; nodes.len()];
    workload
        .jobs()
        .iter()
        .map(|job| {
            let node = argmin(
                load.iter()
                    .zip(nodes)
                    .map(|(&l, n)| l + n.processing_time(job)),
            );
            load[node] += nodes[node].processing_time(job);
            node
        })
        .collect()
}

/// Index of the smallest value; ties go to the lowest index.
fn argmin<I: Iterator<Item = f64>>(values: I) -> usize {
    let mut best = 0;
    let mut best_value = f64::INFINITY;
    for (i, v) in values.enumerate() {
        if v < best_value {
            best = i;
            best_value = v;
        }
    }
    best
}
