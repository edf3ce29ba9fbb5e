//! GA run configuration.
//!
//! [`RunConfig`] is an immutable snapshot of every tunable parameter. It
//! owns no mutable state and is passed by reference into every operation.

use crate::error::{Result, SchedError};
use crate::workload::{generate_nodes, generate_profiled_jobs, Workload, WorkloadProfile};
use rand::Rng;

/// Crossover operator used to recombine two parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverKind {
    /// Per-gene Bernoulli choice biased by `crossover_rate`.
    #[default]
    Uniform,
    /// Prefix/suffix swap at a single random cut point.
    SinglePoint,
}

/// Configuration for a scheduling GA run.
///
/// # Defaults
///
/// ```
/// use u_cloudsched::ga::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.n_generations, 1000);
/// assert_eq!(config.elite_count(), 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_cloudsched::ga::{CrossoverKind, RunConfig};
///
/// let config = RunConfig::default()
///     .with_population_size(50)
///     .with_crossover(CrossoverKind::SinglePoint)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Hard cap on generation loop iterations.
    pub n_generations: usize,

    /// Number of compute nodes to generate.
    pub n_vms: usize,

    /// Number of jobs to generate. Only used by [`WorkloadProfile::Testing`];
    /// the other built-in profiles fix their own job count.
    pub n_cloudlets: usize,

    /// Number of individuals in the population.
    pub population_size: usize,

    /// Individuals sampled (without replacement) per tournament.
    pub tournament_size: usize,

    /// Crossover operator.
    pub crossover: CrossoverKind,

    /// Per-gene bias for uniform crossover (0.0–1.0).
    ///
    /// Probability that child 1 keeps parent 1's gene at a position.
    /// Ignored by single-point crossover.
    pub crossover_rate: f64,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population carried over unchanged (0.0–1.0).
    pub elitism_rate: f64,

    /// Upper bound on per-generation fitness improvement that still
    /// counts as stagnation.
    pub desired_delta_fitness: f64,

    /// Consecutive stagnating generations required to stop early.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_window: usize,

    /// Inclusive node speed range (MIPS); auto-ordered.
    pub node_speed_range: (u64, u64),

    /// Job-length distribution.
    pub profile: WorkloadProfile,

    /// Whether to evaluate individuals in parallel (requires the
    /// `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_generations: 1000,
            n_vms: 20,
            n_cloudlets: 100,
            population_size: 100,
            tournament_size: 2,
            crossover: CrossoverKind::Uniform,
            crossover_rate: 0.10,
            mutation_rate: 0.01,
            elitism_rate: 0.02,
            desired_delta_fitness: 0.0,
            stagnation_window: 7,
            node_speed_range: (250, 2000),
            profile: WorkloadProfile::Google,
            parallel: true,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Sets the generation cap.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.n_generations = n;
        self
    }

    /// Sets the number of compute nodes.
    pub fn with_vms(mut self, n: usize) -> Self {
        self.n_vms = n;
        self
    }

    /// Sets the number of jobs.
    pub fn with_cloudlets(mut self, n: usize) -> Self {
        self.n_cloudlets = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, kind: CrossoverKind) -> Self {
        self.crossover = kind;
        self
    }

    /// Sets the uniform crossover bias.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation thresholds.
    pub fn with_stagnation(mut self, desired_delta: f64, window: usize) -> Self {
        self.desired_delta_fitness = desired_delta;
        self.stagnation_window = window;
        self
    }

    /// Sets the node speed range.
    pub fn with_node_speed_range(mut self, low: u64, high: u64) -> Self {
        self.node_speed_range = (low, high);
        self
    }

    /// Sets the workload profile.
    pub fn with_profile(mut self, profile: WorkloadProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elite individuals: `floor(elitism_rate * population_size)`.
    pub fn elite_count(&self) -> usize {
        if self.elitism_rate > 0.0 {
            (self.elitism_rate * self.population_size as f64) as usize
        } else {
            0
        }
    }

    /// Number of non-elite individuals available for tournaments in the
    /// first generation.
    pub fn breeding_pool(&self) -> usize {
        self.population_size.saturating_sub(self.elite_count())
    }

    /// Number of breeding pairs per generation.
    ///
    /// An odd breeding pool drops its last slot, so the population shrinks
    /// by one after the first generation and stays at that size.
    pub fn pair_count(&self) -> usize {
        self.breeding_pool() / 2
    }

    /// Validates the whole configuration: GA parameters and workload
    /// generation parameters.
    ///
    /// Returns [`SchedError::Configuration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        self.validate_workload()?;
        self.validate_ga()
    }

    /// Validates only the parameters used to generate a workload
    /// (`n_vms`, `n_cloudlets`, `profile`).
    pub fn validate_workload(&self) -> Result<()> {
        if self.n_vms < 1 {
            return Err(SchedError::config("n_vms must be at least 1"));
        }
        if self.profile.job_count(self.n_cloudlets) < 1 {
            return Err(SchedError::config("workload must contain at least 1 job"));
        }
        Ok(())
    }

    /// Validates only the parameters of the generation loop. Runs over a
    /// caller-supplied workload check nothing else.
    pub fn validate_ga(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(SchedError::config("population_size must be at least 2"));
        }
        if self.n_generations == 0 {
            return Err(SchedError::config("n_generations must be at least 1"));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elitism_rate", self.elitism_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(SchedError::config(format!("{name} must be within [0, 1]")));
            }
        }
        if !self.desired_delta_fitness.is_finite() {
            return Err(SchedError::config("desired_delta_fitness must be finite"));
        }
        if self.elite_count() >= self.population_size {
            return Err(SchedError::config(
                "elitism_rate too high: elites fill entire population",
            ));
        }
        validate_tournament(self.tournament_size, self.pair_count() * 2)
    }

    /// Generates the job and node tables described by this configuration.
    ///
    /// Jobs are drawn first, then nodes, both from `rng`.
    ///
    /// # Errors
    /// Returns [`SchedError::Configuration`] if no node or no job would be
    /// generated.
    pub fn generate_workload<R: Rng>(&self, rng: &mut R) -> Result<Workload> {
        self.validate_workload()?;
        let jobs = generate_profiled_jobs(&self.profile, self.n_cloudlets, rng);
        let (low, high) = self.node_speed_range;
        let nodes = generate_nodes(low, high, self.n_vms, rng);
        Workload::new(jobs, nodes)
    }
}

/// Checks that two tournaments over a breeding pool of `pool` individuals
/// can produce distinct winners.
///
/// An empty tournament has no winner. Both tournaments sample without
/// replacement, so `tournament_size` may not exceed the pool; if it equals
/// the pool both tournaments see every individual and always agree on the
/// winner.
pub(crate) fn validate_tournament(tournament_size: usize, pool: usize) -> Result<()> {
    if tournament_size < 1 {
        return Err(SchedError::config("tournament_size must be at least 1"));
    }
    if pool < 2 {
        return Err(SchedError::config(format!(
            "breeding pool of {pool} cannot form a pair of distinct parents"
        )));
    }
    if tournament_size >= pool {
        return Err(SchedError::config(format!(
            "tournament_size {tournament_size} must be smaller than the breeding pool of {pool}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.n_generations, 1000);
        assert_eq!(config.n_vms, 20);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.tournament_size, 2);
        assert_eq!(config.crossover, CrossoverKind::Uniform);
        assert!((config.crossover_rate - 0.10).abs() < 1e-12);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!((config.elitism_rate - 0.02).abs() < 1e-12);
        assert_eq!(config.stagnation_window, 7);
        assert_eq!(config.profile, WorkloadProfile::Google);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RunConfig::default()
            .with_generations(50)
            .with_vms(4)
            .with_cloudlets(12)
            .with_population_size(30)
            .with_tournament_size(3)
            .with_crossover(CrossoverKind::SinglePoint)
            .with_crossover_rate(0.5)
            .with_mutation_rate(0.2)
            .with_elitism_rate(0.1)
            .with_stagnation(1e-6, 4)
            .with_node_speed_range(10, 20)
            .with_profile(WorkloadProfile::Testing)
            .with_parallel(false)
            .with_seed(9);

        assert_eq!(config.n_generations, 50);
        assert_eq!(config.n_vms, 4);
        assert_eq!(config.n_cloudlets, 12);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.crossover, CrossoverKind::SinglePoint);
        assert_eq!(config.elite_count(), 3);
        assert_eq!(config.stagnation_window, 4);
        assert_eq!(config.node_speed_range, (10, 20));
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_rates() {
        let config = RunConfig::default()
            .with_elitism_rate(1.5)
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert_eq!(config.elitism_rate, 1.0);
        assert_eq!(config.crossover_rate, 0.0);
        assert_eq!(config.mutation_rate, 1.0);
    }

    #[test]
    fn test_elite_count_floor() {
        let config = RunConfig::default()
            .with_population_size(99)
            .with_elitism_rate(0.02);
        assert_eq!(config.elite_count(), 1);
        assert_eq!(config.breeding_pool(), 98);

        let config = config.with_elitism_rate(0.0);
        assert_eq!(config.elite_count(), 0);
    }

    #[test]
    fn test_odd_pool_pair_count() {
        let config = RunConfig::default()
            .with_population_size(101)
            .with_elitism_rate(0.02);
        assert_eq!(config.breeding_pool(), 99);
        assert_eq!(config.pair_count(), 49);
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = RunConfig::default().with_population_size(1).validate();
        assert!(matches!(err, Err(SchedError::Configuration(_))));
    }

    #[test]
    fn test_validate_zero_counts() {
        assert!(RunConfig::default().with_vms(0).validate().is_err());
        assert!(RunConfig::default()
            .with_profile(WorkloadProfile::Testing)
            .with_cloudlets(0)
            .validate()
            .is_err());
        assert!(RunConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_elites_fill_population() {
        let config = RunConfig::default()
            .with_population_size(10)
            .with_elitism_rate(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_larger_than_pool() {
        let config = RunConfig::default()
            .with_population_size(10)
            .with_elitism_rate(0.2)
            .with_tournament_size(9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_equal_to_pool() {
        let config = RunConfig::default()
            .with_population_size(4)
            .with_elitism_rate(0.0)
            .with_tournament_size(4);
        assert!(config.validate().is_err());

        let config = config.with_tournament_size(3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(RunConfig::default().with_tournament_size(0).validate().is_err());
        assert!(matches!(
            validate_tournament(0, 10),
            Err(SchedError::Configuration(_))
        ));
    }

    #[test]
    fn test_ga_validation_ignores_workload_fields() {
        let config = RunConfig::default()
            .with_vms(0)
            .with_profile(WorkloadProfile::Testing)
            .with_cloudlets(0);
        assert!(config.validate_ga().is_ok());
        assert!(config.validate_workload().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generate_workload_rejects_zero_nodes() {
        let config = RunConfig::default().with_vms(0);
        let err = config.generate_workload(&mut create_rng(3)).unwrap_err();
        assert!(matches!(err, SchedError::Configuration(_)));
    }

    #[test]
    fn test_validate_rejects_unclamped_rate() {
        let mut config = RunConfig::default();
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generate_workload() {
        let config = RunConfig::default()
            .with_profile(WorkloadProfile::Testing)
            .with_cloudlets(15)
            .with_vms(4);
        let workload = config.generate_workload(&mut create_rng(3)).unwrap();
        assert_eq!(workload.job_count(), 15);
        assert_eq!(workload.node_count(), 4);
        assert!(workload
            .nodes()
            .iter()
            .all(|n| (250.0..=2000.0).contains(&n.speed)));
    }

    #[test]
    fn test_generate_workload_profile_overrides_count() {
        let config = RunConfig::default()
            .with_profile(WorkloadProfile::Synthetic)
            .with_cloudlets(3);
        let workload = config.generate_workload(&mut create_rng(3)).unwrap();
        assert_eq!(workload.job_count(), 100);
    }
}
