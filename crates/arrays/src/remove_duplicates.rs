use std::collections::HashSet;
use std::hash::Hash;

/// Compacts a sorted slice so its first `k` elements are the distinct values,
/// returning `k`. Elements past `k` are left in unspecified order.
pub fn remove_duplicates<T: PartialEq>(nums: &mut [T]) -> usize {
    if nums.len() <= 1 {
        return nums.len();
    }

    let mut slow = 0usize;
    for fast in 1..nums.len() {
        if nums[fast] != nums[slow] {
            slow += 1;
            nums.swap(slow, fast);
        }
    }
    slow + 1
}

/// Same contract as [`remove_duplicates`], collecting distinct values through
/// a set first. Uses O(n) extra space.
pub fn remove_duplicates_with_set<T: Eq + Hash + Clone>(nums: &mut [T]) -> usize {
    let unique: Vec<T> = {
        let mut seen = HashSet::with_capacity(nums.len());
        nums.iter().filter(|x| seen.insert(*x)).cloned().collect()
    };
    nums[..unique.len()].clone_from_slice(&unique);
    unique.len()
}

/// Keeps the first occurrence of every value of an unsorted slice, in order.
pub fn remove_duplicates_unsorted<T: Eq + Hash + Clone>(nums: &mut [T]) -> usize {
    let mut seen = HashSet::with_capacity(nums.len());
    let mut write = 0usize;
    for read in 0..nums.len() {
        if seen.insert(nums[read].clone()) {
            nums.swap(write, read);
            write += 1;
        }
    }
    write
}
