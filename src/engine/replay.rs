// Cursor over a finished run for stepping backward and forward

use super::RunOutcome;
use crate::snapshot::Snapshot;
use thiserror::Error;

/// Errors from moving the replay cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("Already at the beginning of the run")]
    AtStart,

    #[error("No more frames (run finished)")]
    AtEnd,

    #[error("No frames recorded")]
    Empty,
}

/// Steps through the frames of a [`RunOutcome`]
#[derive(Debug, Clone)]
pub struct Replay {
    outcome: RunOutcome,
    position: usize,
}

impl Replay {
    pub fn new(outcome: RunOutcome) -> Self {
        Replay {
            outcome,
            position: 0,
        }
    }

    pub fn outcome(&self) -> &RunOutcome {
        &self.outcome
    }

    /// The frame under the cursor, or `None` when nothing was recorded
    pub fn current(&self) -> Option<&Snapshot> {
        self.outcome.snapshots.get(self.position)
    }

    /// Get the current position in the run
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the total number of frames
    pub fn len(&self) -> usize {
        self.outcome.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcome.snapshots.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.len()
    }

    /// Move to the next frame
    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        if self.is_empty() {
            return Err(ReplayError::Empty);
        }
        if self.is_at_end() {
            return Err(ReplayError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    /// Move to the previous frame
    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        if self.is_empty() {
            return Err(ReplayError::Empty);
        }
        if self.position == 0 {
            return Err(ReplayError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` frames; returns how many were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        while stepped < n && self.step_forward().is_ok() {
            stepped += 1;
        }
        stepped
    }

    /// Rewind to the first frame
    pub fn rewind_to_start(&mut self) -> Result<(), ReplayError> {
        if self.is_empty() {
            return Err(ReplayError::Empty);
        }
        self.position = 0;
        Ok(())
    }

    /// Jump to the last frame
    pub fn jump_to_end(&mut self) -> Result<(), ReplayError> {
        if self.is_empty() {
            return Err(ReplayError::Empty);
        }
        self.position = self.len() - 1;
        Ok(())
    }
}
