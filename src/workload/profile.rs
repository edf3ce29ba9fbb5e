//! Job-length distribution profiles.
//!
//! A profile is a list of [`Bucket`]s; jobs are emitted bucket by bucket.
//! The built-in tables approximate the task-length mix of a Google cluster
//! trace and a synthetic heavy-tailed mix.

/// A run of `count` jobs whose lengths are drawn uniformly in `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    pub count: usize,
    pub low: u64,
    pub high: u64,
}

impl Bucket {
    pub const fn new(count: usize, low: u64, high: u64) -> Self {
        Self { count, low, high }
    }
}

const GOOGLE_BUCKETS: [Bucket; 5] = [
    Bucket::new(20, 15_000, 55_000),
    Bucket::new(40, 59_000, 90_000),
    Bucket::new(30, 101_000, 135_000),
    Bucket::new(4, 150_000, 337_500),
    Bucket::new(6, 525_000, 900_000),
];

const SYNTHETIC_BUCKETS: [Bucket; 5] = [
    Bucket::new(20, 1, 250),
    Bucket::new(60, 800, 1_200),
    Bucket::new(5, 1_800, 2_500),
    Bucket::new(10, 7_000, 10_000),
    Bucket::new(5, 30_000, 45_000),
];

/// Length range used by the [`WorkloadProfile::Testing`] profile.
pub const TESTING_RANGE: (u64, u64) = (400, 1_000);

/// Selects the shape of the generated job list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkloadProfile {
    /// `job_count` jobs, lengths uniform in [`TESTING_RANGE`].
    ///
    /// Small and highly randomized; useful for smoke tests, less so for
    /// comparing schedulers.
    Testing,
    /// 100 jobs following a Google-cluster-like length mix.
    #[default]
    Google,
    /// 100 jobs following a synthetic heavy-tailed length mix.
    Synthetic,
    /// Caller-supplied buckets.
    Custom(Vec<Bucket>),
}

impl WorkloadProfile {
    /// Resolves the profile into its bucket table.
    ///
    /// `job_count` is only consulted by [`WorkloadProfile::Testing`]; the
    /// other profiles fix their own job count.
    pub fn buckets(&self, job_count: usize) -> Vec<Bucket> {
        match self {
            WorkloadProfile::Testing => {
                vec![Bucket::new(job_count, TESTING_RANGE.0, TESTING_RANGE.1)]
            }
            WorkloadProfile::Google => GOOGLE_BUCKETS.to_vec(),
            WorkloadProfile::Synthetic => SYNTHETIC_BUCKETS.to_vec(),
            WorkloadProfile::Custom(b) => b.clone(),
        }
    }

    /// Number of jobs this profile emits.
    pub fn job_count(&self, job_count: usize) -> usize {
        self.buckets(job_count).iter().map(|b| b.count).sum()
    }
}
