use std::ops::RangeBounds;

pub fn quick_sort<T: PartialOrd>(data: &mut [T]) {
    quick_sort_range(data, ..);
}

/// The smaller side is always taken first, so the pending stack holds
/// O(log n) entries even on O(n^2) inputs.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `data`.
pub fn quick_sort_range<T: PartialOrd, R: RangeBounds<usize>>(data: &mut [T], range: R) {
    let data = &mut data[(range.start_bound().cloned(), range.end_bound().cloned())];

    let mut pending = Vec::new();
    if data.len() > 1 {
        pending.push((0, data.len()));
    }

    while let Some((lo, hi)) = pending.pop() {
        let pivot = lo + partition(&mut data[lo..hi]);
        let left = (lo, pivot);
        let right = (pivot + 1, hi);

        let (small, large) = if left.1 - left.0 < right.1 - right.0 {
            (left, right)
        } else {
            (right, left)
        };
        if large.1 - large.0 > 1 {
            pending.push(large);
        }
        if small.1 - small.0 > 1 {
            pending.push(small);
        }
    }
}

/// Lomuto partition around the last element. Returns the pivot's final
/// index; everything before it is strictly smaller.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn partition<T: PartialOrd>(data: &mut [T]) -> usize {
    let last = data.len() - 1;
    let mut store = 0usize;

    for j in 0..last {
        if data[j] < data[last] {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, last);
    store
}
