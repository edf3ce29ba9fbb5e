//! Job-to-VM scheduling with a Genetic Algorithm and baseline heuristics.
//!
//! Assigns a fixed batch of jobs (instruction counts) to a fixed pool of
//! heterogeneous compute nodes (instruction rates) so as to minimize the
//! makespan: the time the slowest node needs to finish its work.
//!
//! - **GA** ([`ga`]): tournament selection with elitism, uniform or
//!   single-point crossover, per-gene mutation, best-of-family
//!   replacement, stagnation-based early stop.
//! - **Baselines** ([`baseline`]): random, round-robin, least-loaded
//!   (MCT) and min-min greedy assignment.
//! - **Metrics** ([`metrics`]): makespan, utilization and throughput, and
//!   GA-to-baseline ratios.
//!
//! # Architecture
//!
//! Everything is a pure function of an immutable [`workload::Workload`],
//! an immutable [`ga::RunConfig`] and an explicit, seedable random
//! generator ([`random::create_rng`]). A fixed seed reproduces a run
//! exactly, with or without the `parallel` feature.
//!
//! ```
//! use u_cloudsched::baseline::run_all;
//! use u_cloudsched::ga::{GaRunner, RunConfig};
//! use u_cloudsched::metrics::Comparison;
//! use u_cloudsched::random::create_rng;
//! use u_cloudsched::workload::WorkloadProfile;
//!
//! let config = RunConfig::default()
//!     .with_profile(WorkloadProfile::Testing)
//!     .with_cloudlets(30)
//!     .with_vms(5)
//!     .with_population_size(20)
//!     .with_generations(20);
//! let mut rng = create_rng(7);
//! let workload = config.generate_workload(&mut rng).unwrap();
//!
//! let ga = GaRunner::run_with_rng(&workload, &config, &mut rng).unwrap();
//! let baselines = run_all(&workload, &mut rng);
//! let cmp = Comparison::new(&ga.completion_times, &baselines, workload.job_count()).unwrap();
//! assert_eq!(cmp.baselines.len(), 4);
//! ```

pub mod baseline;
pub mod completion;
pub mod error;
pub mod ga;
pub mod metrics;
pub mod random;
pub mod workload;

pub use error::{Result, SchedError};
