use crate::support::SupportSize;

/// Reorder `supports` by increasing [`SupportSize::num_degrees_of_freedom`].
///
/// This is a counting sort: supports are bucketed by their size through an explicit
/// permutation array and keep their relative order within a bucket.
pub fn sort_by_size<S: SupportSize>(supports: Vec<S>) -> Vec<S> {
    let sizes: Vec<usize> = supports
        .iter()
        .map(|it| it.num_degrees_of_freedom())
        .collect();
    let max_size = sizes.iter().copied().max().unwrap_or(0);

    // Bucket starts, computed from per-size counts.
    let mut starts = vec![0usize; max_size + 2];
    for size in &sizes {
        starts[size + 1] += 1;
    }
    for i in 1..starts.len() {
        starts[i] += starts[i - 1];
    }

    let mut permutation = vec![0usize; supports.len()];
    for (index, size) in sizes.iter().enumerate() {
        permutation[starts[*size]] = index;
        starts[*size] += 1;
    }

    let mut slots: Vec<Option<S>> = supports.into_iter().map(Some).collect();
    permutation
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}
