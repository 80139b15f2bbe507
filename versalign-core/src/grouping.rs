//! Consecutive index grouping

/// Partition indices into maximal runs of consecutive values.
///
/// Input order does not matter and duplicates are collapsed.
///
/// ```
/// use versalign_core::group_consecutive;
/// assert_eq!(
///     group_consecutive(&[10, 2, 3, 5, 6, 7]),
///     vec![vec![2, 3], vec![5, 6, 7], vec![10]]
/// );
/// ```
pub fn group_consecutive(indices: &[usize]) -> Vec<Vec<usize>> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut groups: Vec<Vec<usize>> = Vec::new();
    for index in sorted {
        match groups.last_mut() {
            Some(run) if run.last().is_some_and(|&last| last + 1 == index) => run.push(index),
            _ => groups.push(vec![index]),
        }
    }
    groups
}
