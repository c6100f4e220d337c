//! Quadratic comparison sorts: bubble, selection and insertion
//!
//! Each driver records an idle frame before it starts and another once the
//! array is sorted, with the per-step frames described on each function in
//! between.

use super::errors::SortError;
use crate::snapshot::SnapshotRecorder;

/// Adjacent-pair bubbling.
///
/// Every compared pair `(j, j+1)` is highlighted before the test, and again
/// after a swap if one happened.
pub fn bubble_sort(values: &mut [u8], recorder: &mut SnapshotRecorder) -> Result<(), SortError> {
    recorder.record(values, &[])?;

    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            recorder.record(values, &[j, j + 1])?;
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                recorder.record(values, &[j, j + 1])?;
            }
        }
    }

    recorder.record(values, &[])
}

/// Selection of the running minimum.
///
/// Each scanned `j` is recorded as `{i, j, min}` before the minimum is
/// updated. The swap into position `i` happens even when `min == i`.
pub fn selection_sort(
    values: &mut [u8],
    recorder: &mut SnapshotRecorder,
) -> Result<(), SortError> {
    recorder.record(values, &[])?;

    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            recorder.record(values, &[i, j, min_index])?;
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
        recorder.record(values, &[i, min_index])?;
    }

    recorder.record(values, &[])
}

/// Insertion into the sorted prefix.
///
/// For each key the pair `{i, i-1}` is recorded first. Every shift records
/// the pair it just moved, then the next pair to compare (if the pointer
/// has not run off the front). Finally the key's slot is recorded alone.
pub fn insertion_sort(
    values: &mut [u8],
    recorder: &mut SnapshotRecorder,
) -> Result<(), SortError> {
    recorder.record(values, &[])?;

    for i in 1..values.len() {
        let key = values[i];
        recorder.record(values, &[i, i - 1])?;

        // `slot` is where the key lands; `slot - 1` is the neighbour under test
        let mut slot = i;
        while slot > 0 && values[slot - 1] > key {
            values[slot] = values[slot - 1];
            recorder.record(values, &[slot - 1, slot])?;
            slot -= 1;
            if slot > 0 {
                recorder.record(values, &[slot - 1, slot])?;
            }
        }

        values[slot] = key;
        recorder.record(values, &[slot])?;
    }

    recorder.record(values, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    fn run(
        driver: fn(&mut [u8], &mut SnapshotRecorder) -> Result<(), SortError>,
        input: &[u8],
    ) -> (Vec<u8>, Vec<Snapshot>) {
        let mut values = input.to_vec();
        let mut recorder = SnapshotRecorder::new();
        driver(&mut values, &mut recorder).unwrap();
        (values, recorder.into_snapshots())
    }

    #[test]
    fn test_bubble_frames() {
        let (values, frames) = run(bubble_sort, &[3, 1, 2]);

        assert_eq!(values, vec![1, 2, 3]);
        // idle, (0,1) compare+swap, (1,2) compare+swap, (0,1) compare, idle
        assert_eq!(frames.len(), 7);
        assert!(frames[0].is_idle());
        assert_eq!(frames[1].active(), &[0, 1]);
        assert_eq!(frames[1].values(), &[3, 1, 2]);
        assert_eq!(frames[2].values(), &[1, 3, 2]);
        assert_eq!(frames[4].values(), &[1, 2, 3]);
        assert!(frames[6].is_idle());
    }

    #[test]
    fn test_bubble_sorted_input_has_no_swaps() {
        let (_, frames) = run(bubble_sort, &[1, 2, 3, 4]);
        // 3 + 2 + 1 comparisons plus the two idle frames
        assert_eq!(frames.len(), 8);
    }

    #[test]
    fn test_selection_frames() {
        let (values, frames) = run(selection_sort, &[2, 1]);

        assert_eq!(values, vec![1, 2]);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[1].active(), &[0, 1, 0]);
        assert_eq!(frames[2].active(), &[0, 1]);
        assert_eq!(frames[2].values(), &[1, 2]);
    }

    #[test]
    fn test_selection_swaps_in_place_when_minimum_is_current() {
        let (_, frames) = run(selection_sort, &[1, 2]);
        assert_eq!(frames[2].active(), &[0, 0]);
        assert_eq!(frames[2].values(), &[1, 2]);
    }

    #[test]
    fn test_insertion_frames() {
        let (values, frames) = run(insertion_sort, &[2, 1]);

        assert_eq!(values, vec![1, 2]);
        let active: Vec<Vec<usize>> = frames.iter().map(|f| f.active().to_vec()).collect();
        assert_eq!(active, vec![vec![], vec![1, 0], vec![0, 1], vec![0], vec![]]);
        assert_eq!(frames[2].values(), &[2, 2]);
        assert_eq!(frames[3].values(), &[1, 2]);
    }

    #[test]
    fn test_insertion_records_next_comparison() {
        let (values, frames) = run(insertion_sort, &[2, 3, 1]);

        assert_eq!(values, vec![1, 2, 3]);
        let active: Vec<Vec<usize>> = frames.iter().map(|f| f.active().to_vec()).collect();
        assert_eq!(
            active,
            vec![
                vec![],
                vec![1, 0],
                vec![1],
                vec![2, 1],
                vec![1, 2],
                vec![0, 1],
                vec![0, 1],
                vec![0],
                vec![],
            ]
        );
    }

    #[test]
    fn test_all_sort_reverse_input() {
        for driver in [bubble_sort, selection_sort, insertion_sort] {
            let (values, frames) = run(driver, &[9, 7, 7, 4, 2, 0]);
            assert_eq!(values, vec![0, 2, 4, 7, 7, 9]);
            assert_eq!(frames.last().unwrap().values(), &[0, 2, 4, 7, 7, 9]);
        }
    }

    #[test]
    fn test_single_element() {
        for driver in [bubble_sort, selection_sort, insertion_sort] {
            let (values, frames) = run(driver, &[5]);
            assert_eq!(values, vec![5]);
            assert_eq!(frames.len(), 2);
        }
    }
}
