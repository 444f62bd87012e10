pub fn shell_sort<T: PartialOrd>(data: &mut [T]) {
    let len = data.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && data[j - gap] > data[j] {
                data.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_across_gap_rounds() {
        let mut data = [23, 29, 15, 19, 31, 7, 9, 5, 2];
        shell_sort(&mut data);
        assert_eq!(data, [2, 5, 7, 9, 15, 19, 23, 29, 31]);

        let mut descending: Vec<i64> = (-50..50).rev().collect();
        shell_sort(&mut descending);
        assert_eq!(descending, (-50..50).collect::<Vec<_>>());
    }
}
