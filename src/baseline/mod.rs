//! Baseline schedulers for comparison against the GA.
//!
//! Four heuristics that share the GA's completion-time model but nothing
//! else:
//!
//! | Baseline | Rule |
//! |----------|------|
//! | [`Baseline::Random`] | uniform random node per job |
//! | [`Baseline::RoundRobin`] | job `i` → node `i mod m` |
//! | [`Baseline::LeastLoaded`] | node with smallest current load (MCT) |
//! | [`Baseline::MinMin`] | node with smallest load after running the job |

mod rules;

pub use rules::{least_loaded, min_min, random_assignment, round_robin};

use crate::completion::per_node_completion_time;
use crate::ga::Assignment;
use crate::workload::Workload;
use rand::Rng;
use tracing::debug;

/// Identifies a baseline heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Baseline {
    Random,
    RoundRobin,
    LeastLoaded,
    MinMin,
}

impl Baseline {
    /// All baselines in reporting order.
    pub const ALL: [Baseline; 4] = [
        Baseline::Random,
        Baseline::RoundRobin,
        Baseline::LeastLoaded,
        Baseline::MinMin,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Baseline::Random => "RS",
            Baseline::RoundRobin => "RR",
            Baseline::LeastLoaded => "MCT",
            Baseline::MinMin => "MIN-MIN",
        }
    }

    /// Whether this heuristic draws from the random generator.
    pub fn is_stochastic(self) -> bool {
        matches!(self, Baseline::Random)
    }

    /// Runs this heuristic on `workload`.
    ///
    /// `rng` is only advanced by [`Baseline::Random`].
    pub fn schedule<R: Rng>(self, workload: &Workload, rng: &mut R) -> BaselineSchedule {
        let assignment = match self {
            Baseline::Random => random_assignment(workload, rng),
            Baseline::RoundRobin => round_robin(workload),
            Baseline::LeastLoaded => least_loaded(workload),
            Baseline::MinMin => min_min(workload),
        };
        BaselineSchedule::new(self, assignment, workload)
    }

    /// Runs a deterministic heuristic; `None` for [`Baseline::Random`].
    pub fn schedule_deterministic(self, workload: &Workload) -> Option<BaselineSchedule> {
        let assignment = match self {
            Baseline::Random => return None,
            Baseline::RoundRobin => round_robin(workload),
            Baseline::LeastLoaded => least_loaded(workload),
            Baseline::MinMin => min_min(workload),
        };
        Some(BaselineSchedule::new(self, assignment, workload))
    }
}

/// An assignment produced by a baseline, with its per-node completion times.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineSchedule {
    pub baseline: Baseline,
    pub assignment: Assignment,
    pub completion_times: Vec<f64>,
}

impl BaselineSchedule {
    fn new(baseline: Baseline, assignment: Assignment, workload: &Workload) -> Self {
        let completion_times =
            per_node_completion_time(&assignment, workload.jobs(), workload.nodes());
        debug!(
            baseline = baseline.name(),
            makespan = completion_times.iter().copied().fold(0.0, f64::max),
            "baseline scheduled"
        );
        Self {
            baseline,
            assignment,
            completion_times,
        }
    }
}

/// Runs every baseline, in [`Baseline::ALL`] order.
///
/// The random baseline always draws from `rng` first. With the `parallel`
/// feature the deterministic heuristics run concurrently; their output
/// does not depend on scheduling order.
pub fn run_all<R: Rng>(workload: &Workload, rng: &mut R) -> Vec<BaselineSchedule> {
    let mut schedules = vec![Baseline::Random.schedule(workload, rng)];
    schedules.extend(run_deterministic(workload));
    schedules
}

#[cfg(feature = "parallel")]
fn run_deterministic(workload: &Workload) -> Vec<BaselineSchedule> {
    use rayon::prelude::*;

    Baseline::ALL[1..]
        .par_iter()
        .filter_map(|b| b.schedule_deterministic(workload))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_deterministic(workload: &Workload) -> Vec<BaselineSchedule> {
    Baseline::ALL[1..]
        .iter()
        .filter_map(|b| b.schedule_deterministic(workload))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::workload::{ComputeNode, Job};

    fn workload() -> Workload {
        Workload::new(
            vec![Job::new(0, 10.0), Job::new(1, 10.0), Job::new(2, 10.0)],
            vec![
                ComputeNode::new(0, 1.0),
                ComputeNode::new(1, 2.0),
                ComputeNode::new(2, 5.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_run_all_order() {
        let w = workload();
        let all = run_all(&w, &mut create_rng(1));
        let kinds: Vec<Baseline> = all.iter().map(|s| s.baseline).collect();
        assert_eq!(kinds, Baseline::ALL.to_vec());
    }

    #[test]
    fn test_completion_times_attached() {
        let w = workload();
        let mct = Baseline::LeastLoaded.schedule(&w, &mut create_rng(1));
        assert_eq!(mct.assignment, vec![0, 1, 2]);
        assert_eq!(mct.completion_times, vec![10.0, 5.0, 2.0]);

        let mm = Baseline::MinMin.schedule(&w, &mut create_rng(1));
        assert_eq!(mm.assignment, vec![2, 2, 1]);
        assert_eq!(mm.completion_times, vec![0.0, 5.0, 4.0]);
    }

    #[test]
    fn test_deterministic_baselines_ignore_rng() {
        let w = workload();
        for b in [Baseline::RoundRobin, Baseline::LeastLoaded, Baseline::MinMin] {
            assert!(!b.is_stochastic());
            let x = b.schedule(&w, &mut create_rng(1));
            let y = b.schedule(&w, &mut create_rng(999));
            assert_eq!(x, y);
            assert_eq!(b.schedule_deterministic(&w), Some(x));
        }
        assert!(Baseline::Random.schedule_deterministic(&w).is_none());
    }

    #[test]
    fn test_random_baseline_reproducible() {
        let w = workload();
        let a = run_all(&w, &mut create_rng(5));
        let b = run_all(&w, &mut create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = Baseline::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["RS", "RR", "MCT", "MIN-MIN"]);
    }
}
