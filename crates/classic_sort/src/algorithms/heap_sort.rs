pub fn heap_sort<T: PartialOrd>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(data, root);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0);
    }
}

#[inline]
pub fn sift_down<T: PartialOrd>(heap: &mut [T], mut root: usize) {
    let end = heap.len();
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut largest = child;
        if child + 1 < end && heap[child] < heap[child + 1] {
            largest = child + 1;
        }

        if heap[root] >= heap[largest] {
            break;
        }

        heap.swap(root, largest);
        root = largest;
    }
}
