use crate::core::{FileMetrics, FileSizeRecord, FunctionMetric};

/// Keep records matching `predicate`, ordered by `key` from highest to lowest.
///
/// The sort is stable: records with equal keys stay in discovery order.
pub fn select_and_sort<T, P, K>(records: impl IntoIterator<Item = T>, predicate: P, key: K) -> Vec<T>
where
    P: Fn(&T) -> bool,
    K: Fn(&T) -> u64,
{
    let mut selected: Vec<T> = records.into_iter().filter(|r| predicate(r)).collect();
    selected.sort_by(|a, b| key(b).cmp(&key(a)));
    selected
}

/// Functions with complexity strictly above `threshold`, most complex first.
pub fn high_complexity(files: &[FileMetrics], threshold: u32) -> Vec<FunctionMetric> {
    select_and_sort(
        files.iter().flat_map(|f| f.functions.iter().cloned()),
        |m| m.is_complex(threshold),
        |m| u64::from(m.complexity),
    )
}

/// Files with strictly more than `threshold` lines, largest first.
pub fn large_files(records: Vec<FileSizeRecord>, threshold: usize) -> Vec<FileSizeRecord> {
    select_and_sort(
        records,
        |r| r.line_count > threshold,
        |r| r.line_count as u64,
    )
}
