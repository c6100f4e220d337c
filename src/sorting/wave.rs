//! Wave: not a sort at all, just an animation that rotates the array left
//! one position at a time for a fixed number of laps.

use super::errors::SortError;
use crate::engine::constants::WAVE_LAPS;
use crate::snapshot::SnapshotRecorder;

/// Rotate `values` left by one, `WAVE_LAPS * len` times.
///
/// Each rotation is recorded with the last position (the element that just
/// wrapped around) highlighted. An empty array records nothing, since there
/// is nothing to rotate.
pub fn wave(values: &mut [u8], recorder: &mut SnapshotRecorder) -> Result<(), SortError> {
    let n = values.len();
    if n == 0 {
        return Ok(());
    }

    recorder.record(values, &[])?;
    for _ in 0..n * WAVE_LAPS {
        values.rotate_left(1);
        recorder.record(values, &[n - 1])?;
    }
    recorder.record(values, &[])
}
