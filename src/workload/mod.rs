//! Workload model: jobs, compute nodes, and their generators.
//!
//! # Key Types
//!
//! - [`Job`]: instruction-length requirement
//! - [`ComputeNode`]: instruction-execution rate
//! - [`Workload`]: the validated job and node tables for one run
//! - [`WorkloadProfile`]: bucketed job-length distributions

mod generate;
mod profile;
mod types;

pub use generate::{generate_bucketed_jobs, generate_jobs, generate_nodes, generate_profiled_jobs};
pub use profile::{Bucket, WorkloadProfile, TESTING_RANGE};
pub use types::{ComputeNode, Job, Workload};
