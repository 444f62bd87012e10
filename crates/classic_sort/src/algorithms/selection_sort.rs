pub fn selection_sort<T: PartialOrd>(data: &mut [T]) {
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
        }
    }
}
