//! Schedule quality metrics.
//!
//! Derived from a per-node completion-time vector.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | max completion time |
//! | Fastest | min non-zero completion time |
//! | Average | mean completion time over all nodes (idle nodes count as 0) |
//! | ARUR | average / makespan |
//! | Throughput | job count / makespan |

use crate::baseline::{Baseline, BaselineSchedule};
use crate::completion::makespan;
use crate::error::{Result, SchedError};

/// Performance indicators of one schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleMetrics {
    /// Slowest node's completion time (seconds).
    pub makespan: f64,
    /// Fastest busy node's completion time (seconds).
    pub fastest: f64,
    /// Mean completion time across all nodes (seconds).
    pub average: f64,
    /// Average resource utilization ratio (0.0..=1.0).
    pub arur: f64,
    /// Jobs completed per second of makespan.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from per-node completion times.
    ///
    /// # Errors
    /// Returns [`SchedError::Domain`] if no node has work.
    pub fn from_completion_times(completion_times: &[f64], job_count: usize) -> Result<Self> {
        let makespan = makespan(completion_times);
        if makespan <= 0.0 {
            return Err(SchedError::domain(
                "metrics undefined: no node has a positive completion time",
            ));
        }
        let fastest = completion_times
            .iter()
            .copied()
            .filter(|&t| t > 0.0)
            .fold(f64::INFINITY, f64::min);
        let average = completion_times.iter().sum::<f64>() / completion_times.len() as f64;

        Ok(Self {
            makespan,
            fastest,
            average,
            arur: average / makespan,
            throughput: job_count as f64 / makespan,
        })
    }
}

/// Metric-by-metric ratio `ga / baseline`.
///
/// For makespan, fastest and average, a ratio below 1 favours the GA;
/// for ARUR and throughput, a ratio above 1 does.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRatios {
    pub makespan: f64,
    pub fastest: f64,
    pub average: f64,
    pub arur: f64,
    pub throughput: f64,
}

impl MetricRatios {
    pub fn between(ga: &ScheduleMetrics, baseline: &ScheduleMetrics) -> Self {
        Self {
            makespan: ga.makespan / baseline.makespan,
            fastest: ga.fastest / baseline.fastest,
            average: ga.average / baseline.average,
            arur: ga.arur / baseline.arur,
            throughput: ga.throughput / baseline.throughput,
        }
    }
}

/// GA metrics compared against each baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub ga: ScheduleMetrics,
    pub baselines: Vec<(Baseline, ScheduleMetrics, MetricRatios)>,
}

impl Comparison {
    /// Builds the comparison from the GA's best completion times and a set
    /// of baseline schedules over the same workload.
    pub fn new(
        ga_completion_times: &[f64],
        baselines: &[BaselineSchedule],
        job_count: usize,
    ) -> Result<Self> {
        let ga = ScheduleMetrics::from_completion_times(ga_completion_times, job_count)?;
        let baselines = baselines
            .iter()
            .map(|s| -> Result<_> {
                let m = ScheduleMetrics::from_completion_times(&s.completion_times, job_count)?;
                Ok((s.baseline, m, MetricRatios::between(&ga, &m)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { ga, baselines })
    }

    /// Ratios against one baseline, if it was included.
    pub fn ratios(&self, baseline: Baseline) -> Option<&MetricRatios> {
        self.baselines
            .iter()
            .find(|(b, _, _)| *b == baseline)
            .map(|(_, _, r)| r)
    }
}
