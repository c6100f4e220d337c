// Snapshot recording for step-by-step replay

use crate::sorting::errors::SortError;
use std::fmt;
use std::mem::size_of;

/// One frame of a sort run: the whole array plus the highlighted positions
///
/// Values are copied when the frame is recorded, so later writes to the live
/// array never show up in an earlier frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    values: Vec<u8>,
    active: Vec<usize>,
    eliminated: Vec<usize>,
}

impl Snapshot {
    fn new(values: &[u8], active: &[usize], eliminated: &[usize]) -> Result<Self, SortError> {
        let len = values.len();
        if let Some(&index) = active.iter().chain(eliminated).find(|&&i| i >= len) {
            return Err(SortError::IndexOutOfRange { index, len });
        }

        Ok(Snapshot {
            values: values.to_vec(),
            active: active.to_vec(),
            eliminated: eliminated.to_vec(),
        })
    }

    /// The array as it was when this frame was recorded
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Positions being compared, moved or otherwise acted on
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Positions the filter driver has dropped (empty for every other driver)
    pub fn eliminated(&self) -> &[usize] {
        &self.eliminated
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    pub fn is_eliminated(&self, index: usize) -> bool {
        self.eliminated.contains(&index)
    }

    /// Whether this is an idle frame (nothing highlighted)
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        size_of::<Snapshot>()
            + self.values.len()
            + (self.active.len() + self.eliminated.len()) * size_of::<usize>()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} active={} eliminated={}",
            self.values,
            IndexSet(&self.active),
            IndexSet(&self.eliminated)
        )
    }
}

struct IndexSet<'a>(&'a [usize]);

impl fmt::Display for IndexSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, index) in self.0.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}

/// Append-only history of the frames produced by one run
#[derive(Debug, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<Snapshot>,
    max_memory: Option<usize>,
    current_memory: usize,
}

impl SnapshotRecorder {
    /// Create a recorder with no memory limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that refuses to grow past `max_memory` bytes
    pub fn with_memory_limit(max_memory: usize) -> Self {
        SnapshotRecorder {
            max_memory: Some(max_memory),
            ..Self::default()
        }
    }

    /// Record a frame with the given positions highlighted
    pub fn record(&mut self, values: &[u8], active: &[usize]) -> Result<(), SortError> {
        self.record_with_eliminated(values, active, &[])
    }

    /// Record a frame that also carries the filter driver's eliminated set
    pub fn record_with_eliminated(
        &mut self,
        values: &[u8],
        active: &[usize],
        eliminated: &[usize],
    ) -> Result<(), SortError> {
        let snapshot = Snapshot::new(values, active, eliminated)?;
        self.push(snapshot)
    }

    fn push(&mut self, snapshot: Snapshot) -> Result<(), SortError> {
        let snapshot_size = snapshot.estimated_size();

        if let Some(limit) = self.max_memory {
            if self.current_memory + snapshot_size > limit {
                return Err(SortError::SnapshotLimitExceeded {
                    current: self.current_memory,
                    limit,
                });
            }
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Hand the finished history over, read-only from here on
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit, if any
    pub fn memory_limit(&self) -> Option<usize> {
        self.max_memory
    }
}
