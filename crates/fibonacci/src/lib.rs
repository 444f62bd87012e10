use std::collections::HashMap;

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_N: u32 = 93;

/// Naive double recursion, exponential time. Only practical for small `n`.
pub fn fibonacci_recursive(n: u32) -> Option<u64> {
    fn go(n: u32) -> u64 {
        if n < 2 {
            n as u64
        } else {
            go(n - 1) + go(n - 2)
        }
    }
    (n <= MAX_N).then(|| go(n))
}

/// Top-down recursion with a memo table.
pub fn fibonacci_memoized(n: u32) -> Option<u64> {
    fn go(n: u32, memo: &mut HashMap<u32, u64>) -> u64 {
        if n < 2 {
            return n as u64;
        }
        if let Some(&value) = memo.get(&n) {
            return value;
        }
        let value = go(n - 1, memo) + go(n - 2, memo);
        memo.insert(n, value);
        value
    }
    if n > MAX_N {
        return None;
    }
    Some(go(n, &mut HashMap::new()))
}

/// Bottom-up table of every value up to `n`.
pub fn fibonacci_dp(n: u32) -> Option<u64> {
    if n > MAX_N {
        return None;
    }
    let n = n as usize;
    let mut table = vec![0_u64; n + 1];
    if n >= 1 {
        table[1] = 1;
    }
    for i in 2..=n {
        table[i] = table[i - 1] + table[i - 2];
    }
    Some(table[n])
}

/// Two rolling values, O(1) space.
pub fn fibonacci_iterative(n: u32) -> Option<u64> {
    if n > MAX_N {
        return None;
    }
    if n == 0 {
        return Some(0);
    }
    let (mut prev, mut curr) = (0_u64, 1_u64);
    for _ in 1..n {
        (prev, curr) = (curr, prev + curr);
    }
    Some(curr)
}

type Matrix = [[u128; 2]; 2];

fn mul(a: &Matrix, b: &Matrix) -> Matrix {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// `[[1, 1], [1, 0]]^n` by repeated squaring; `F(n)` is the top-right entry.
pub fn fibonacci_matrix(n: u32) -> Option<u64> {
    if n > MAX_N {
        return None;
    }
    let mut result: Matrix = [[1, 0], [0, 1]];
    let mut base: Matrix = [[1, 1], [1, 0]];
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(&result, &base);
        }
        exp >>= 1;
        if exp > 0 {
            base = mul(&base, &base);
        }
    }
    u64::try_from(result[0][1]).ok()
}

/// The first `count` Fibonacci numbers, cut short where `u64` overflows.
pub fn fibonacci_sequence(count: usize) -> Vec<u64> {
    std::iter::successors(Some((0_u128, 1_u128)), |&(a, b)| Some((b, a + b)))
        .map_while(|(a, _)| u64::try_from(a).ok())
        .take(count)
        .collect()
}

/// `F(n + 1) / F(n)`, which approaches the golden ratio. `Some(0.0)` for
/// `n == 0`, `None` once `F(n + 1)` no longer fits.
pub fn golden_ratio(n: u32) -> Option<f64> {
    if n == 0 {
        return Some(0.0);
    }
    let numerator = fibonacci_iterative(n + 1)?;
    let denominator = fibonacci_iterative(n)?;
    Some(numerator as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    type FibFn = fn(u32) -> Option<u64>;

    const FAST: [(&str, FibFn); 4] = [
        ("memoized", fibonacci_memoized),
        ("dp", fibonacci_dp),
        ("iterative", fibonacci_iterative),
        ("matrix", fibonacci_matrix),
    ];

    const FIRST: [u64; 11] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];

    #[test]
    fn small_values_match_for_every_strategy() {
        for (n, &expected) in FIRST.iter().enumerate() {
            let n = n as u32;
            assert_eq!(fibonacci_recursive(n), Some(expected), "recursive n={n}");
            for &(name, fib) in &FAST {
                assert_eq!(fib(n), Some(expected), "{name} n={n}");
            }
        }
    }

    #[test]
    fn fast_strategies_agree_up_to_the_limit() {
        for n in 0..=MAX_N {
            let expected = fibonacci_iterative(n);
            for &(name, fib) in &FAST {
                assert_eq!(fib(n), expected, "{name} n={n}");
            }
        }
    }

    #[test]
    fn largest_value_fits_and_next_is_rejected() {
        for &(name, fib) in &FAST {
            assert_eq!(fib(MAX_N), Some(12_200_160_415_121_876_738), "{name}");
            assert_eq!(fib(MAX_N + 1), None, "{name}");
        }
        assert_eq!(fibonacci_recursive(MAX_N + 1), None);
    }

    #[test]
    fn recursive_matches_iterative_for_moderate_n() {
        assert_eq!(fibonacci_recursive(25), Some(75_025));
        assert_eq!(fibonacci_recursive(25), fibonacci_iterative(25));
    }

    #[test]
    fn sequence_prefix_and_overflow_cutoff() {
        assert!(fibonacci_sequence(0).is_empty());
        assert_eq!(fibonacci_sequence(11), FIRST);
        let all = fibonacci_sequence(200);
        assert_eq!(all.len(), MAX_N as usize + 1);
        assert_eq!(all.last().copied(), fibonacci_iterative(MAX_N));
    }

    #[test]
    fn golden_ratio_converges() {
        assert_eq!(golden_ratio(0), Some(0.0));
        assert_eq!(golden_ratio(1), Some(1.0));
        assert_eq!(golden_ratio(2), Some(2.0));
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let approx = golden_ratio(40).unwrap();
        assert!((approx - phi).abs() < 1e-12, "{approx}");
        assert_eq!(golden_ratio(MAX_N), None);
    }
}
