use std::collections::HashMap;

/// Indices `(i, j)` with `i < j` and `nums[i] + nums[j] == target`, checking
/// every pair.
pub fn two_sum_brute_force(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for i in 0..nums.len() {
        for j in (i + 1)..nums.len() {
            if nums[i].checked_add(nums[j]) == Some(target) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Single pass with a value-to-index map. Returns the pair whose second
/// index is smallest.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen = HashMap::with_capacity(nums.len());
    for (i, &x) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(x) {
            if let Some(&j) = seen.get(&complement) {
                return Some((j, i));
            }
        }
        seen.insert(x, i);
    }
    None
}
