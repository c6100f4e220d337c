//! # Introduction
//!
//! sortreplay runs a sorting algorithm over a handful of digits and records a
//! snapshot of the array at every interesting step. The snapshot history can
//! then be replayed forward and backward, either programmatically or through
//! a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Text → Normalizer → Digits → Driver → Snapshots → Replay / TUI
//!                                   ↘ RunRecord
//! ```
//!
//! 1. [`input`]: keeps the decimal digits of the raw text.
//! 2. [`sorting`]: the eight drivers and the [`sorting::Algorithm`] enum
//!    that selects between them.
//! 3. [`snapshot`]: immutable frames and the append-only
//!    [`snapshot::SnapshotRecorder`].
//! 4. [`engine`]: ties the above together into a [`engine::RunOutcome`] and
//!    provides the [`engine::Replay`] cursor.
//! 5. [`record`]: run records and the [`record::RunStore`] seam.
//! 6. [`ui`]: ratatui-based replay viewer; not part of the stable library API.
//!
//! ## Drivers
//!
//! Bubble, selection, insertion, merge and quick sort; bogo sort (shuffle
//! until sorted, with no upper bound unless one is configured); Stalin sort
//! (marks out-of-order elements instead of sorting); and wave, a rotation
//! animation that does not sort at all.

pub mod engine;
pub mod input;
pub mod record;
pub mod snapshot;
pub mod sorting;
pub mod ui;
