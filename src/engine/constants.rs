// Constants for the sort engine and replay viewer

use std::time::Duration;

/// Number of full laps the wave animation makes around the array
pub const WAVE_LAPS: usize = 5;

/// Digits shuffled together when no input is supplied
pub const RANDOM_DIGIT_POOL: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Delay between frames during auto-play
pub const DEFAULT_PLAYBACK_DELAY: Duration = Duration::from_millis(300);

/// Faster cadence for the drivers that produce many near-identical frames
pub const FAST_PLAYBACK_DELAY: Duration = Duration::from_millis(50);

/// Snapshot memory limit used by the command-line binary (1 GB)
pub const CLI_SNAPSHOT_LIMIT: usize = 1024 * 1024 * 1024;
