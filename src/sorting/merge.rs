//! Top-down merge sort over index ranges of a single buffer

use super::errors::SortError;
use crate::snapshot::SnapshotRecorder;

/// Recursive merge sort.
///
/// During each merge the two run heads are highlighted before they are
/// compared, and the whole array is recorded after every element placed,
/// including the leftovers copied once one run is exhausted.
pub fn merge_sort(values: &mut [u8], recorder: &mut SnapshotRecorder) -> Result<(), SortError> {
    recorder.record(values, &[])?;
    if !values.is_empty() {
        let right = values.len() - 1;
        sort_range(values, 0, right, recorder)?;
    }
    recorder.record(values, &[])
}

/// Sort the inclusive range `left..=right`
fn sort_range(
    values: &mut [u8],
    left: usize,
    right: usize,
    recorder: &mut SnapshotRecorder,
) -> Result<(), SortError> {
    if left < right {
        let middle = left + (right - left) / 2;
        sort_range(values, left, middle, recorder)?;
        sort_range(values, middle + 1, right, recorder)?;
        merge(values, left, middle, right, recorder)?;
    }
    Ok(())
}

fn merge(
    values: &mut [u8],
    left: usize,
    middle: usize,
    right: usize,
    recorder: &mut SnapshotRecorder,
) -> Result<(), SortError> {
    let left_run = values[left..=middle].to_vec();
    let right_run = values[middle + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        recorder.record(values, &[left + i, middle + 1 + j])?;
        // Ties go to the left run to keep the sort stable
        if left_run[i] <= right_run[j] {
            values[k] = left_run[i];
            i += 1;
        } else {
            values[k] = right_run[j];
            j += 1;
        }
        k += 1;
        recorder.record(values, &[])?;
    }

    for &value in left_run[i..].iter().chain(&right_run[j..]) {
        values[k] = value;
        k += 1;
        recorder.record(values, &[])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_elements() {
        let mut values = vec![2, 1];
        let mut recorder = SnapshotRecorder::new();
        merge_sort(&mut values, &mut recorder).unwrap();

        assert_eq!(values, vec![1, 2]);
        // idle, compare {0,1}, placed 1, leftover 2, idle
        assert_eq!(recorder.len(), 5);
        assert_eq!(recorder.get(1).unwrap().active(), &[0, 1]);
        assert_eq!(recorder.get(2).unwrap().values(), &[1, 1]);
        assert_eq!(recorder.get(3).unwrap().values(), &[1, 2]);
    }

    #[test]
    fn test_ties_take_left_first() {
        let mut values = vec![1, 1];
        let mut recorder = SnapshotRecorder::new();
        merge_sort(&mut values, &mut recorder).unwrap();

        // Left head wins the tie, so the compare pointer stays on the right head
        assert_eq!(recorder.len(), 5);
        assert_eq!(recorder.get(1).unwrap().active(), &[0, 1]);
        assert!(recorder.get(2).unwrap().is_idle());
    }

    #[test]
    fn test_comparison_indices_track_run_heads() {
        let mut values = vec![1, 3, 2, 4];
        let mut recorder = SnapshotRecorder::new();
        merge_sort(&mut values, &mut recorder).unwrap();

        assert_eq!(values, vec![1, 2, 3, 4]);
        let compares: Vec<Vec<usize>> = recorder
            .snapshots()
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.active().to_vec())
            .collect();
        // [1,3] merge, [2,4] merge, then the final merge walks the heads
        assert_eq!(
            compares,
            vec![vec![0, 1], vec![2, 3], vec![0, 2], vec![1, 2], vec![1, 3]]
        );
    }

    #[test]
    fn test_empty_input() {
        let mut values: Vec<u8> = Vec::new();
        let mut recorder = SnapshotRecorder::new();
        merge_sort(&mut values, &mut recorder).unwrap();
        assert_eq!(recorder.len(), 2);
    }
}
