use arrays::{two_sum, two_sum_brute_force};
use bench::{apply_small_runtime_config, default_rng, random_array};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fibonacci::{
    MAX_N, fibonacci_dp, fibonacci_iterative, fibonacci_matrix, fibonacci_memoized,
    fibonacci_recursive,
};
use rand::Rng;
use std::hint::black_box;
use strings::{count_palindromic_substrings, is_palindrome, longest_palindrome};

fn bench_fibonacci(c: &mut Criterion) {
    const INDICES: [u32; 4] = [10, 20, 50, MAX_N];
    const RECURSIVE_LIMIT: u32 = 20;

    type FibFn = fn(u32) -> Option<u64>;
    let impls: [(&str, FibFn); 5] = [
        ("recursive", fibonacci_recursive),
        ("memoized", fibonacci_memoized),
        ("dp", fibonacci_dp),
        ("iterative", fibonacci_iterative),
        ("matrix", fibonacci_matrix),
    ];

    let mut group = c.benchmark_group("fibonacci");
    apply_small_runtime_config(&mut group);

    for &n in &INDICES {
        for &(name, func) in &impls {
            if name == "recursive" && n > RECURSIVE_LIMIT {
                continue;
            }
            group.bench_function(BenchmarkId::new(name, n), |bencher| {
                bencher.iter(|| black_box(func(black_box(n))))
            });
        }
    }
    group.finish();
}

fn bench_two_sum(c: &mut Criterion) {
    const SIZES: [usize; 3] = [100, 1_000, 5_000];

    type TwoSumFn = fn(&[i64], i64) -> Option<(usize, usize)>;
    let impls: [(&str, TwoSumFn); 2] =
        [("brute_force", two_sum_brute_force), ("hash_map", two_sum)];

    let mut rng = default_rng();
    let mut group = c.benchmark_group("two_sum");
    apply_small_runtime_config(&mut group);

    for &size in &SIZES {
        let nums = random_array(&mut rng, size, -1_000_000, 1_000_000);
        // Target taken from the tail so the match is found late in the scan.
        let target = nums[size - 2] + nums[size - 1];

        for &(name, func) in &impls {
            group.bench_function(BenchmarkId::new(name, size), |bencher| {
                bencher.iter(|| black_box(func(black_box(&nums), black_box(target))))
            });
        }
    }
    group.finish();
}

fn bench_palindromes(c: &mut Criterion) {
    const LENGTHS: [usize; 3] = [64, 512, 2_048];

    let mut rng = default_rng();
    let mut group = c.benchmark_group("palindrome");
    apply_small_runtime_config(&mut group);

    for &len in &LENGTHS {
        let text: String = (0..len)
            .map(|_| char::from(b'a' + rng.random_range(0..3_u8)))
            .collect();

        group.bench_function(BenchmarkId::new("is_palindrome", len), |bencher| {
            bencher.iter(|| black_box(is_palindrome(black_box(&text))))
        });
        group.bench_function(BenchmarkId::new("longest", len), |bencher| {
            bencher.iter(|| black_box(longest_palindrome(black_box(&text))))
        });
        group.bench_function(BenchmarkId::new("count", len), |bencher| {
            bencher.iter(|| black_box(count_palindromic_substrings(black_box(&text))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fibonacci, bench_two_sum, bench_palindromes);
criterion_main!(benches);
