//! Genetic Algorithm for job-to-node assignment.
//!
//! Each individual is an [`Assignment`]: one node index per job. Fitness is
//! the reciprocal of the assignment's makespan, so higher is better.
//!
//! # Pipeline
//!
//! 1. [`population`]: random initial population
//! 2. [`fitness`]: evaluation and stable best-first ordering
//! 3. [`selection`]: elitism prefix + tournament pairs over the rest
//! 4. [`operators`]: uniform / single-point crossover, reset mutation
//! 5. [`replacement`]: elites + best two of each parent/child quartet
//! 6. [`GaRunner`]: generation loop with stagnation stop
//!
//! # Key Types
//!
//! - [`RunConfig`]: immutable run parameters
//! - [`Chromosome`]: genes paired with their fitness
//! - [`GaResult`]: best assignment, history and per-generation stats
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod replacement;
mod runner;
pub mod selection;
mod types;

pub use config::{CrossoverKind, RunConfig};
pub use runner::{is_stagnant, GaResult, GaRunner, GenerationStats, DELTA_SUM_WINDOW};
pub use types::{Assignment, Chromosome};
