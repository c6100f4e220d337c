//! Quick sort with a Lomuto partition around the last element

use super::errors::SortError;
use crate::snapshot::SnapshotRecorder;

pub fn quick_sort(values: &mut [u8], recorder: &mut SnapshotRecorder) -> Result<(), SortError> {
    recorder.record(values, &[])?;
    if !values.is_empty() {
        let high = values.len() - 1;
        sort_range(values, 0, high, recorder)?;
    }
    recorder.record(values, &[])
}

fn sort_range(
    values: &mut [u8],
    low: usize,
    high: usize,
    recorder: &mut SnapshotRecorder,
) -> Result<(), SortError> {
    if low < high {
        let pivot = partition(values, low, high, recorder)?;
        if pivot > low {
            sort_range(values, low, pivot - 1, recorder)?;
        }
        sort_range(values, pivot + 1, high, recorder)?;
    }
    Ok(())
}

/// Partition `low..=high` and return the pivot's final position.
///
/// Each scanned element is highlighted with the pivot before the test; every
/// swap into the "less than" prefix is recorded with the swapped pair, and
/// the final pivot placement with `{store, high}`.
fn partition(
    values: &mut [u8],
    low: usize,
    high: usize,
    recorder: &mut SnapshotRecorder,
) -> Result<usize, SortError> {
    let pivot = values[high];
    // Next free slot of the "less than pivot" prefix
    let mut store = low;

    for j in low..high {
        recorder.record(values, &[j, high])?;
        if values[j] < pivot {
            values.swap(store, j);
            recorder.record(values, &[store, j])?;
            store += 1;
        }
    }

    values.swap(store, high);
    recorder.record(values, &[store, high])?;
    Ok(store)
}
