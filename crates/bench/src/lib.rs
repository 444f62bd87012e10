use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `size` values drawn uniformly from `min..=max`.
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, size: usize, min: i64, max: i64) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(min..=max)).collect()
}

/// `1..=size`, ascending or descending.
pub fn sorted_array(size: usize, ascending: bool) -> Vec<i64> {
    let mut data: Vec<i64> = (1..=size as i64).collect();
    if !ascending {
        data.reverse();
    }
    data
}

/// Ascending `1..=size` disturbed by `swaps` random transpositions.
pub fn partially_ordered_array<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    swaps: usize,
) -> Vec<i64> {
    let mut data = sorted_array(size, true);
    if size == 0 {
        return data;
    }
    for _ in 0..swaps {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}

/// `size` values picked from a pool of `unique` distinct values in `1..=100`.
pub fn array_with_duplicates<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    unique: usize,
) -> Vec<i64> {
    let pool = random_array(rng, unique.max(1), 1, 100);
    (0..size)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generators_respect_their_shapes() {
        let mut rng = default_rng();

        let random = random_array(&mut rng, 200, -5, 5);
        assert_eq!(random.len(), 200);
        assert!(random.iter().all(|x| (-5..=5).contains(x)));

        assert_eq!(sorted_array(4, true), [1, 2, 3, 4]);
        assert_eq!(sorted_array(4, false), [4, 3, 2, 1]);
        assert!(sorted_array(0, false).is_empty());

        let mut partial = partially_ordered_array(&mut rng, 100, 10);
        partial.sort_unstable();
        assert_eq!(partial, sorted_array(100, true));
        assert!(partially_ordered_array(&mut rng, 0, 10).is_empty());

        let dups = array_with_duplicates(&mut rng, 300, 4);
        assert_eq!(dups.len(), 300);
        assert!(dups.iter().collect::<HashSet<_>>().len() <= 4);
    }

    #[test]
    fn default_rng_is_reproducible() {
        let a = random_array(&mut default_rng(), 16, 0, 1_000);
        let b = random_array(&mut default_rng(), 16, 0, 1_000);
        assert_eq!(a, b);
    }
}
