//! Job and compute node value types.

use crate::error::{Result, SchedError};

/// A unit of work with a fixed instruction-length requirement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    /// Sequential identifier, equal to the job's position in its workload.
    pub id: usize,
    /// Instruction count (million instructions).
    pub length: f64,
}

impl Job {
    pub fn new(id: usize, length: f64) -> Self {
        Self { id, length }
    }
}

/// A processing resource with a fixed instruction-execution rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputeNode {
    /// Sequential identifier, equal to the node's position in its pool.
    pub id: usize,
    /// Processing rate (million instructions per second).
    pub speed: f64,
}

impl ComputeNode {
    pub fn new(id: usize, speed: f64) -> Self {
        Self { id, speed }
    }

    /// Seconds this node needs to process `job`.
    #[inline]
    pub fn processing_time(&self, job: &Job) -> f64 {
        job.length / self.speed
    }
}

/// The read-only job and node tables shared by every scheduler.
///
/// Generated once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workload {
    jobs: Vec<Job>,
    nodes: Vec<ComputeNode>,
}

impl Workload {
    /// Builds a workload, rejecting empty tables and non-positive
    /// lengths or speeds.
    pub fn new(jobs: Vec<Job>, nodes: Vec<ComputeNode>) -> Result<Self> {
        if jobs.is_empty() {
            return Err(SchedError::config("workload must contain at least 1 job"));
        }
        if nodes.is_empty() {
            return Err(SchedError::config(
                "workload must contain at least 1 compute node",
            ));
        }
        if let Some(j) = jobs.iter().find(|j| !(j.length > 0.0 && j.length.is_finite())) {
            return Err(SchedError::config(format!(
                "job {} has non-positive length {}",
                j.id, j.length
            )));
        }
        if let Some(n) = nodes.iter().find(|n| !(n.speed > 0.0 && n.speed.is_finite())) {
            return Err(SchedError::config(format!(
                "node {} has non-positive speed {}",
                n.id, n.speed
            )));
        }
        Ok(Self { jobs, nodes })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn nodes(&self) -> &[ComputeNode] {
        &self.nodes
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_time() {
        let node = ComputeNode::new(0, 250.0);
        let job = Job::new(0, 1000.0);
        assert!((node.processing_time(&job) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_workload_accessors() {
        let w = Workload::new(
            vec![Job::new(0, 10.0), Job::new(1, 20.0)],
            vec![ComputeNode::new(0, 1.0)],
        )
        .unwrap();
        assert_eq!(w.job_count(), 2);
        assert_eq!(w.node_count(), 1);
        assert_eq!(w.jobs()[1].length, 20.0);
    }

    #[test]
    fn test_workload_rejects_empty() {
        assert!(Workload::new(vec![], vec![ComputeNode::new(0, 1.0)]).is_err());
        assert!(Workload::new(vec![Job::new(0, 1.0)], vec![]).is_err());
    }

    #[test]
    fn test_workload_rejects_zero_speed() {
        let err = Workload::new(vec![Job::new(0, 1.0)], vec![ComputeNode::new(0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, SchedError::Configuration(_)));
    }

    #[test]
    fn test_workload_rejects_negative_length() {
        assert!(
            Workload::new(vec![Job::new(0, -5.0)], vec![ComputeNode::new(0, 1.0)]).is_err()
        );
    }
}
