mod algorithms;
mod error;

use log::trace;

pub use algorithms::bubble_sort::{bubble_sort, cocktail_sort};
pub use algorithms::bucket_sort::{bucket_sort, bucket_sort_with_config};
pub use algorithms::common::{IntegerKey, is_sorted};
pub use algorithms::counting_sort::{counting_sort, counting_sort_with_config};
pub use algorithms::heap_sort::{heap_sort, sift_down};
pub use algorithms::insertion_sort::insertion_sort;
pub use algorithms::merge_sort::{merge, merge_sort};
pub use algorithms::quick_sort::{partition, quick_sort, quick_sort_range};
pub use algorithms::quick_sort_3way::{partition_3way, quick_sort_3way, quick_sort_3way_range};
pub use algorithms::radix_sort::{counting_sort_by_digit, radix_sort};
pub use algorithms::selection_sort::selection_sort;
pub use algorithms::shell_sort::shell_sort;
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    CocktailSort,
    SelectionSort,
    InsertionSort,
    ShellSort,
    MergeSort,
    QuickSort,
    QuickSort3Way,
    HeapSort,
    CountingSort,
    BucketSort,
    RadixSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 12] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::CocktailSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::ShellSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::QuickSort3Way,
    SortAlgorithm::HeapSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::BucketSort,
    SortAlgorithm::RadixSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    /// Quadratic comparison sorts.
    Basic,
    /// Insertion sort over shrinking gaps.
    Improved,
    /// O(n log n) comparison sorts.
    Efficient,
    /// Sorts that index tables by value instead of comparing.
    NonComparison,
}

/// Asymptotic costs; `n` is the length, `k` the value range or radix, `d`
/// the digit count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

impl SortAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::BubbleSort => "bubble_sort",
            Self::CocktailSort => "cocktail_sort",
            Self::SelectionSort => "selection_sort",
            Self::InsertionSort => "insertion_sort",
            Self::ShellSort => "shell_sort",
            Self::MergeSort => "merge_sort",
            Self::QuickSort => "quick_sort",
            Self::QuickSort3Way => "quick_sort_3way",
            Self::HeapSort => "heap_sort",
            Self::CountingSort => "counting_sort",
            Self::BucketSort => "bucket_sort",
            Self::RadixSort => "radix_sort",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::BubbleSort | Self::CocktailSort | Self::SelectionSort | Self::InsertionSort => {
                Category::Basic
            }
            Self::ShellSort => Category::Improved,
            Self::MergeSort | Self::QuickSort | Self::QuickSort3Way | Self::HeapSort => {
                Category::Efficient
            }
            Self::CountingSort | Self::BucketSort | Self::RadixSort => Category::NonComparison,
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Self::BubbleSort
                | Self::CocktailSort
                | Self::InsertionSort
                | Self::MergeSort
                | Self::CountingSort
                | Self::BucketSort
                | Self::RadixSort
        )
    }

    /// Whether the algorithm rearranges the caller's slice directly. The
    /// others build a new vector which [`sort`] copies back.
    pub fn in_place(self) -> bool {
        !matches!(
            self,
            Self::MergeSort | Self::CountingSort | Self::BucketSort | Self::RadixSort
        )
    }

    pub fn complexity(self) -> Complexity {
        let (best, average, worst, space) = match self {
            Self::BubbleSort | Self::CocktailSort | Self::InsertionSort => {
                ("O(n)", "O(n^2)", "O(n^2)", "O(1)")
            }
            Self::SelectionSort => ("O(n^2)", "O(n^2)", "O(n^2)", "O(1)"),
            Self::ShellSort => ("O(n log n)", "O(n^1.3)", "O(n^2)", "O(1)"),
            Self::MergeSort => ("O(n log n)", "O(n log n)", "O(n log n)", "O(n)"),
            Self::QuickSort | Self::QuickSort3Way => {
                ("O(n log n)", "O(n log n)", "O(n^2)", "O(log n)")
            }
            Self::HeapSort => ("O(n log n)", "O(n log n)", "O(n log n)", "O(1)"),
            Self::CountingSort => ("O(n + k)", "O(n + k)", "O(n + k)", "O(k)"),
            Self::BucketSort => ("O(n + k)", "O(n + k)", "O(n^2)", "O(n + k)"),
            Self::RadixSort => ("O(d(n + k))", "O(d(n + k))", "O(d(n + k))", "O(n + k)"),
        };
        Complexity {
            best,
            average,
            worst,
            space,
        }
    }
}

pub const DEFAULT_BUCKET_WIDTH: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    /// Values per bucket in bucket sort.
    pub bucket_width: usize,
    /// Largest count table or bucket array the non-comparison sorts allocate.
    pub max_table_len: usize,
}

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    bucket_width: DEFAULT_BUCKET_WIDTH,
    max_table_len: 1 << 24,
};

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl SortConfig {
    pub const fn with_bucket_width(self, bucket_width: usize) -> Self {
        Self {
            bucket_width,
            ..self
        }
    }

    pub const fn with_max_table_len(self, max_table_len: usize) -> Self {
        Self {
            max_table_len,
            ..self
        }
    }
}

pub fn sort<K: IntegerKey>(algo: SortAlgorithm, data: &mut [K]) -> Result<(), SortError> {
    sort_with_config(algo, data, &DEFAULT_CONFIG)
}

/// Sorts `data` ascending with `algo`. On error `data` is left unchanged.
pub fn sort_with_config<K: IntegerKey>(
    algo: SortAlgorithm,
    data: &mut [K],
    config: &SortConfig,
) -> Result<(), SortError> {
    trace!("{} on {} elements", algo.name(), data.len());
    match algo {
        SortAlgorithm::BubbleSort => {
            bubble_sort(data);
        }
        SortAlgorithm::CocktailSort => {
            cocktail_sort(data);
        }
        SortAlgorithm::SelectionSort => selection_sort(data),
        SortAlgorithm::InsertionSort => insertion_sort(data),
        SortAlgorithm::ShellSort => shell_sort(data),
        SortAlgorithm::MergeSort => {
            let sorted = merge_sort(data);
            data.copy_from_slice(&sorted);
        }
        SortAlgorithm::QuickSort => quick_sort(data),
        SortAlgorithm::QuickSort3Way => quick_sort_3way(data),
        SortAlgorithm::HeapSort => heap_sort(data),
        SortAlgorithm::CountingSort => {
            let sorted = counting_sort_with_config(data, config)?;
            data.copy_from_slice(&sorted);
        }
        SortAlgorithm::BucketSort => {
            let sorted = bucket_sort_with_config(data, config)?;
            data.copy_from_slice(&sorted);
        }
        SortAlgorithm::RadixSort => {
            let sorted = radix_sort(data)?;
            data.copy_from_slice(&sorted);
        }
    }
    Ok(())
}
