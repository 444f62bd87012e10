pub fn insertion_sort<T: PartialOrd>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[i] {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
}
