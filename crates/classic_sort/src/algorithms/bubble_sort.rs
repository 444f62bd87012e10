use log::debug;

/// Returns the number of passes. Sorted input takes one, reversed input
/// `len - 1`.
pub fn bubble_sort<T: PartialOrd>(data: &mut [T]) -> usize {
    let len = data.len();
    let mut passes = 0;

    for i in 0..len.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;

        // The last `i` slots already hold the largest values.
        for j in 0..(len - 1 - i) {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            debug!("bubble sort settled early after {passes} of {} passes", len - 1);
            break;
        }
    }

    passes
}

/// Bidirectional bubble sort, returning the number of directional passes.
pub fn cocktail_sort<T: PartialOrd>(data: &mut [T]) -> usize {
    if data.len() < 2 {
        return 0;
    }

    let mut start = 0usize;
    let mut end = data.len() - 1;
    let mut passes = 0usize;

    loop {
        let mut swapped = false;
        for i in start..end {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        passes += 1;
        if !swapped {
            break;
        }
        end -= 1;

        swapped = false;
        for i in ((start + 1)..=end).rev() {
            if data[i] < data[i - 1] {
                data.swap(i, i - 1);
                swapped = true;
            }
        }
        passes += 1;
        if !swapped {
            break;
        }
        start += 1;
    }

    debug!("cocktail sort finished after {passes} passes");
    passes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_input_uses_every_pass() {
        let mut data: Vec<u32> = (1..=10).rev().collect();
        assert_eq!(bubble_sort(&mut data), 9);
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let mut data = [1, 2, 3, 4, 5];
        assert_eq!(bubble_sort(&mut data), 1);
        assert_eq!(data, [1, 2, 3, 4, 5]);

        let mut single = [42];
        assert_eq!(bubble_sort(&mut single), 0);
        let mut empty: [i32; 0] = [];
        assert_eq!(bubble_sort(&mut empty), 0);
    }

    #[test]
    fn cocktail_sort_handles_turtles() {
        // A small value at the tail needs many plain bubble passes.
        let mut data = [2, 3, 4, 5, 1];
        let passes = cocktail_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
        assert!(passes <= 3, "passes={passes}");

        let mut demo = [5, 3, 8, 1, 6];
        cocktail_sort(&mut demo);
        assert_eq!(demo, [1, 3, 5, 6, 8]);

        let mut sorted = [1, 2, 3];
        assert_eq!(cocktail_sort(&mut sorted), 1);
    }
}
