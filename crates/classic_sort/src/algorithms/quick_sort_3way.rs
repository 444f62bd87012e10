use std::ops::RangeBounds;

pub fn quick_sort_3way<T: PartialOrd>(data: &mut [T]) {
    quick_sort_3way_range(data, ..);
}

/// # Panics
///
/// Panics if `range` is out of bounds for `data`.
pub fn quick_sort_3way_range<T: PartialOrd, R: RangeBounds<usize>>(data: &mut [T], range: R) {
    sort_3way(&mut data[(range.start_bound().cloned(), range.end_bound().cloned())]);
}

fn sort_3way<T: PartialOrd>(mut data: &mut [T]) {
    while data.len() > 1 {
        let (lt, gt) = partition_3way(data);

        let (left, rest) = data.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        if left.len() < right.len() {
            sort_3way(left);
            data = right;
        } else {
            sort_3way(right);
            data = left;
        }
    }
}

/// Dutch national flag partition around the first element.
///
/// Returns `(lt, gt)` such that `data[..lt] < pivot`, `data[lt..gt] == pivot`
/// and `data[gt..] > pivot`. The equal region is non-empty for non-empty input.
pub fn partition_3way<T: PartialOrd>(data: &mut [T]) -> (usize, usize) {
    // `data[lt]` always holds a pivot-equal value while `lt < i`.
    let mut lt = 0usize;
    let mut i = 1usize;
    let mut gt = data.len();

    while i < gt {
        if data[i] < data[lt] {
            data.swap(lt, i);
            lt += 1;
            i += 1;
        } else if data[i] > data[lt] {
            gt -= 1;
            data.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}
