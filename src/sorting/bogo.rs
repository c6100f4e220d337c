//! Bogo sort: shuffle until sorted
//!
//! Nothing bounds how long this takes. With `max_shuffles` left at `None`
//! the driver keeps shuffling until it happens upon sorted order, exactly
//! like the reference behaviour; callers that cannot accept that should set
//! a ceiling and handle [`SortError::ShuffleLimitExceeded`].

use super::errors::SortError;
use super::ops::{all_indices, is_sorted, shuffle};
use crate::snapshot::SnapshotRecorder;
use rand::Rng;

/// Shuffle `values` until they are in non-descending order.
///
/// Every shuffle is recorded with all positions highlighted.
pub fn bogo_sort<R: Rng + ?Sized>(
    values: &mut [u8],
    recorder: &mut SnapshotRecorder,
    rng: &mut R,
    max_shuffles: Option<usize>,
) -> Result<(), SortError> {
    recorder.record(values, &[])?;

    let everything = all_indices(values.len());
    let mut shuffles = 0;

    while !is_sorted(values) {
        if let Some(limit) = max_shuffles {
            if shuffles >= limit {
                return Err(SortError::ShuffleLimitExceeded { limit });
            }
        }

        shuffle(values, rng);
        shuffles += 1;
        recorder.record(values, &everything)?;
    }

    recorder.record(values, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sorted_input_never_shuffles() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut values = vec![1, 2, 2, 3];
        let mut recorder = SnapshotRecorder::new();
        bogo_sort(&mut values, &mut recorder, &mut rng, Some(0)).unwrap();

        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_shuffle_frames_highlight_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut values = vec![3, 2, 1];
        let mut recorder = SnapshotRecorder::new();
        bogo_sort(&mut values, &mut recorder, &mut rng, None).unwrap();

        assert_eq!(values, vec![1, 2, 3]);
        let frames = recorder.snapshots();
        assert!(frames.len() >= 3);
        assert!(frames[0].is_idle());
        assert!(frames[frames.len() - 1].is_idle());
        for frame in &frames[1..frames.len() - 1] {
            assert_eq!(frame.active(), &[0, 1, 2]);
        }
        assert_eq!(frames[frames.len() - 2].values(), &[1, 2, 3]);
    }

    #[test]
    fn test_shuffle_limit() {
        let mut rng = StdRng::seed_from_u64(9);
        // Nine distinct digits: sorted by chance in 1 of 362880 shuffles
        let mut values = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut recorder = SnapshotRecorder::new();
        let result = bogo_sort(&mut values, &mut recorder, &mut rng, Some(1));

        assert_eq!(result, Err(SortError::ShuffleLimitExceeded { limit: 1 }));
        // The initial frame and the single shuffle were kept
        assert_eq!(recorder.len(), 2);
    }
}
