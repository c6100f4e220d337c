//! Sorting drivers
//!
//! Each driver takes the array by mutable slice, sorts (or filters, or
//! animates) it in place, and records [`Snapshot`](crate::snapshot::Snapshot)s
//! at fixed points along the way:
//!
//! - [`simple`]: bubble, selection and insertion sort
//! - [`merge`]: top-down merge sort
//! - [`quick`]: Lomuto quick sort
//! - [`bogo`]: shuffle until sorted (unbounded unless capped)
//! - [`stalin`]: single-pass filter that marks rather than removes
//! - [`wave`]: rotation animation, not a sort
//!
//! [`Algorithm`] is the closed set of drivers, parsed from the identifiers
//! the outer layers pass in.

pub mod bogo;
pub mod errors;
pub mod merge;
pub mod quick;
pub mod simple;
pub mod stalin;
pub mod wave;

mod ops;

pub use ops::is_sorted;

use crate::engine::constants::{DEFAULT_PLAYBACK_DELAY, FAST_PLAYBACK_DELAY};
use crate::snapshot::SnapshotRecorder;
use errors::SortError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The available drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Bogo,
    Stalin,
    Wave,
}

impl Algorithm {
    /// Every driver, in menu order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Bogo,
        Algorithm::Stalin,
        Algorithm::Wave,
    ];

    /// The identifier used on the command line and in run records
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Bogo => "bogo",
            Algorithm::Stalin => "stalin",
            Algorithm::Wave => "wave",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Bogo => "Bogo Sort",
            Algorithm::Stalin => "Stalin Sort",
            Algorithm::Wave => "Wave",
        }
    }

    /// One-paragraph explanation shown next to the replay
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Compares neighbouring elements and swaps them whenever they are out of \
                 order, repeating until no swaps remain. One of the simplest algorithms."
            }
            Algorithm::Selection => {
                "Finds the smallest element of the unsorted part and moves it to the end \
                 of the sorted part, one position at a time."
            }
            Algorithm::Insertion => {
                "Takes elements from the unsorted part one by one and inserts each into \
                 its place in the sorted part."
            }
            Algorithm::Merge => {
                "Splits the data in halves until single elements remain, then merges the \
                 sorted halves back together."
            }
            Algorithm::Quick => {
                "Picks a pivot, partitions the rest into smaller and larger elements, and \
                 sorts each side recursively."
            }
            Algorithm::Bogo => {
                "Shuffles everything at random until it happens to come out sorted. \
                 Leaves the outcome entirely to fate."
            }
            Algorithm::Stalin => {
                "Walks the array from the front and purges every element smaller than \
                 the one before it."
            }
            Algorithm::Wave => {
                "Not a sort. Rotates the elements around the array so they roll past \
                 like a wave."
            }
        }
    }

    /// Delay between frames when the replay is auto-playing
    pub fn playback_delay(self) -> Duration {
        match self {
            Algorithm::Bogo | Algorithm::Wave => FAST_PLAYBACK_DELAY,
            _ => DEFAULT_PLAYBACK_DELAY,
        }
    }

    /// Whether the final frame is expected to hold the input in sorted order
    pub fn sorts(self) -> bool {
        !matches!(self, Algorithm::Stalin | Algorithm::Wave)
    }

    /// Run this driver over `values`, recording into `recorder`
    pub fn run<R: Rng + ?Sized>(
        self,
        values: &mut [u8],
        recorder: &mut SnapshotRecorder,
        rng: &mut R,
        max_shuffles: Option<usize>,
    ) -> Result<(), SortError> {
        match self {
            Algorithm::Bubble => simple::bubble_sort(values, recorder),
            Algorithm::Selection => simple::selection_sort(values, recorder),
            Algorithm::Insertion => simple::insertion_sort(values, recorder),
            Algorithm::Merge => merge::merge_sort(values, recorder),
            Algorithm::Quick => quick::quick_sort(values, recorder),
            Algorithm::Bogo => bogo::bogo_sort(values, recorder, rng, max_shuffles),
            Algorithm::Stalin => stalin::stalin_sort(values, recorder),
            Algorithm::Wave => wave::wave(values, recorder),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| SortError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
