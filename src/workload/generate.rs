//! Randomized workload generators.
//!
//! Range arguments are auto-ordered: `low > high` is swapped, never an
//! error. Lengths and speeds are drawn as whole numbers inclusive on both
//! ends and clamped to at least 1 so that every entity stays positive.

use super::profile::{Bucket, WorkloadProfile};
use super::types::{ComputeNode, Job};
use rand::Rng;

/// Draws a whole number uniformly in `[min(low, high), max(low, high)]`,
/// never below 1.
fn draw_positive<R: Rng>(low: u64, high: u64, rng: &mut R) -> f64 {
    let (lo, hi) = if low > high { (high, low) } else { (low, high) };
    let lo = lo.max(1);
    let hi = hi.max(lo);
    rng.random_range(lo..=hi) as f64
}

/// Generates `count` nodes with ids `0..count` and uniform random speeds.
pub fn generate_nodes<R: Rng>(low: u64, high: u64, count: usize, rng: &mut R) -> Vec<ComputeNode> {
    (0..count)
        .map(|id| ComputeNode::new(id, draw_positive(low, high, rng)))
        .collect()
}

/// Generates `count` jobs with ids `0..count` and uniform random lengths.
pub fn generate_jobs<R: Rng>(low: u64, high: u64, count: usize, rng: &mut R) -> Vec<Job> {
    (0..count)
        .map(|id| Job::new(id, draw_positive(low, high, rng)))
        .collect()
}

/// Generates jobs bucket by bucket; ids are sequential from 0 across
/// all buckets.
pub fn generate_bucketed_jobs<R: Rng>(buckets: &[Bucket], rng: &mut R) -> Vec<Job> {
    let total = buckets.iter().map(|b| b.count).sum();
    let mut jobs = Vec::with_capacity(total);
    for bucket in buckets {
        for _ in 0..bucket.count {
            let id = jobs.len();
            jobs.push(Job::new(id, draw_positive(bucket.low, bucket.high, rng)));
        }
    }
    jobs
}

/// Generates jobs according to a [`WorkloadProfile`].
pub fn generate_profiled_jobs<R: Rng>(
    profile: &WorkloadProfile,
    job_count: usize,
    rng: &mut R,
) -> Vec<Job> {
    generate_bucketed_jobs(&profile.buckets(job_count), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_generate_nodes_ids_and_range() {
        let mut rng = create_rng(42);
        let nodes = generate_nodes(250, 2000, 20, &mut rng);
        assert_eq!(nodes.len(), 20);
        for (i, n) in nodes.iter().enumerate() {
            assert_eq!(n.id, i);
            assert!((250.0..=2000.0).contains(&n.speed), "speed {}", n.speed);
        }
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let mut rng = create_rng(1);
        let jobs = generate_jobs(1000, 400, 50, &mut rng);
        assert!(jobs.iter().all(|j| (400.0..=1000.0).contains(&j.length)));
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = create_rng(1);
        let jobs = generate_jobs(5, 5, 4, &mut rng);
        assert!(jobs.iter().all(|j| j.length == 5.0));
    }

    #[test]
    fn test_zero_lower_bound_clamped() {
        let mut rng = create_rng(3);
        let nodes = generate_nodes(0, 0, 3, &mut rng);
        assert!(nodes.iter().all(|n| n.speed == 1.0));
    }

    #[test]
    fn test_bucketed_jobs_follow_buckets() {
        let mut rng = create_rng(9);
        let buckets = [Bucket::new(2, 1, 10), Bucket::new(3, 100, 200)];
        let jobs = generate_bucketed_jobs(&buckets, &mut rng);

        assert_eq!(jobs.len(), 5);
        for (i, j) in jobs.iter().enumerate() {
            assert_eq!(j.id, i);
        }
        assert!(jobs[..2].iter().all(|j| (1.0..=10.0).contains(&j.length)));
        assert!(jobs[2..].iter().all(|j| (100.0..=200.0).contains(&j.length)));
    }

    #[test]
    fn test_google_profile_ranges() {
        let mut rng = create_rng(5);
        let jobs = generate_profiled_jobs(&WorkloadProfile::Google, 0, &mut rng);
        assert_eq!(jobs.len(), 100);
        assert!(jobs[..20].iter().all(|j| (15_000.0..=55_000.0).contains(&j.length)));
        assert!(jobs[94..].iter().all(|j| (525_000.0..=900_000.0).contains(&j.length)));
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate_jobs(1, 1000, 30, &mut create_rng(77));
        let b = generate_jobs(1, 1000, 30, &mut create_rng(77));
        assert_eq!(a, b);
    }
}
