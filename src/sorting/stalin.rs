//! Stalin sort: a single pass that drops anything smaller than the running
//! maximum.
//!
//! Dropped positions are only marked in the frames' eliminated set; the
//! array itself is never compacted or reordered.

use super::errors::SortError;
use crate::snapshot::SnapshotRecorder;

pub fn stalin_sort(values: &mut [u8], recorder: &mut SnapshotRecorder) -> Result<(), SortError> {
    recorder.record(values, &[])?;
    if values.is_empty() {
        return Ok(());
    }

    let mut max_value = values[0];
    let mut max_index = 0;
    let mut eliminated = Vec::new();

    for i in 1..values.len() {
        recorder.record_with_eliminated(values, &[i, max_index], &eliminated)?;
        if values[i] < max_value {
            eliminated.push(i);
        } else {
            max_value = values[i];
            max_index = i;
        }
    }

    recorder.record_with_eliminated(values, &[], &eliminated)
}
