//! Run orchestration
//!
//! [`Engine`] is the boundary the outer layers talk to. A run goes:
//!
//! ```text
//! text → normalize → Algorithm → driver → RunOutcome
//! ```
//!
//! - [`constants`]: tunables shared by the engine, drivers and viewer
//! - [`replay`]: cursor over a finished run's frames
//!
//! Every run owns its array and its recorder, so an [`Engine`] can be shared
//! freely between callers.

pub mod constants;
pub mod replay;

pub use replay::{Replay, ReplayError};

use crate::input::{flatten, normalize_checked};
use crate::snapshot::{Snapshot, SnapshotRecorder};
use crate::sorting::errors::SortError;
use crate::sorting::Algorithm;
use rand::Rng;

/// Limits applied to each run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Abort once recorded frames are estimated to use this many bytes
    pub snapshot_memory_limit: Option<usize>,

    /// Give up on bogo sort after this many shuffles. `None` shuffles for as
    /// long as it takes, which may be forever in practice.
    pub max_shuffles: Option<usize>,
}

/// Everything a finished run hands back
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The identifier as the caller passed it
    pub identifier: String,

    /// `None` only for runs made through [`Engine::run_lenient`] with an
    /// unknown identifier
    pub algorithm: Option<Algorithm>,

    /// The raw input text
    pub input: String,

    pub snapshots: Vec<Snapshot>,

    /// The array after the driver finished
    pub final_values: Vec<u8>,
}

impl RunOutcome {
    /// Final values as a digit string, e.g. `[1, 2, 3]` → `"123"`
    pub fn flattened(&self) -> String {
        flatten(&self.final_values)
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn estimated_size(&self) -> usize {
        self.snapshots.iter().map(Snapshot::estimated_size).sum()
    }
}

/// Runs drivers over normalised input
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalise `text` and run the driver named by `identifier`.
    ///
    /// Input is checked before the identifier, so text without digits is
    /// reported as [`SortError::NoValidNumbers`] whatever the identifier.
    pub fn run(&self, identifier: &str, text: &str) -> Result<RunOutcome, SortError> {
        self.run_with_rng(identifier, text, &mut rand::thread_rng())
    }

    /// [`Engine::run`] with an explicit random source for bogo sort
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        identifier: &str,
        text: &str,
        rng: &mut R,
    ) -> Result<RunOutcome, SortError> {
        let values = normalize_checked(text)?;
        let algorithm: Algorithm = identifier.parse()?;
        self.execute(identifier, algorithm, text, values, rng)
    }

    /// Run an already-resolved algorithm
    pub fn run_algorithm<R: Rng + ?Sized>(
        &self,
        algorithm: Algorithm,
        text: &str,
        rng: &mut R,
    ) -> Result<RunOutcome, SortError> {
        let values = normalize_checked(text)?;
        self.execute(algorithm.name(), algorithm, text, values, rng)
    }

    /// Compatibility shim: an unknown identifier is a silent no-op.
    ///
    /// This mirrors the old web handler, which fell through its dispatch
    /// without running anything and still reported the unsorted digits. It
    /// hides caller typos; prefer [`Engine::run`].
    pub fn run_lenient(&self, identifier: &str, text: &str) -> Result<RunOutcome, SortError> {
        let values = normalize_checked(text)?;
        match identifier.parse::<Algorithm>() {
            Ok(algorithm) => {
                self.execute(identifier, algorithm, text, values, &mut rand::thread_rng())
            }
            Err(SortError::UnknownAlgorithm { .. }) => Ok(RunOutcome {
                identifier: identifier.to_string(),
                algorithm: None,
                input: text.to_string(),
                snapshots: Vec::new(),
                final_values: values,
            }),
            Err(e) => Err(e),
        }
    }

    fn execute<R: Rng + ?Sized>(
        &self,
        identifier: &str,
        algorithm: Algorithm,
        text: &str,
        mut values: Vec<u8>,
        rng: &mut R,
    ) -> Result<RunOutcome, SortError> {
        let mut recorder = match self.config.snapshot_memory_limit {
            Some(limit) => SnapshotRecorder::with_memory_limit(limit),
            None => SnapshotRecorder::new(),
        };

        algorithm.run(&mut values, &mut recorder, rng, self.config.max_shuffles)?;

        Ok(RunOutcome {
            identifier: identifier.to_string(),
            algorithm: Some(algorithm),
            input: text.to_string(),
            snapshots: recorder.into_snapshots(),
            final_values: values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_input_checked_before_identifier() {
        let engine = Engine::default();
        assert_eq!(
            engine.run("nonsense", "abc").unwrap_err(),
            SortError::NoValidNumbers
        );
    }

    #[test]
    fn test_unknown_identifier_is_an_error() {
        let engine = Engine::default();
        assert_eq!(
            engine.run("heap", "312").unwrap_err(),
            SortError::UnknownAlgorithm {
                name: "heap".to_string()
            }
        );
    }

    #[test]
    fn test_lenient_unknown_identifier_is_noop() {
        let engine = Engine::default();
        let outcome = engine.run_lenient("heap", "3a1 2").unwrap();

        assert!(outcome.algorithm.is_none());
        assert!(outcome.snapshots.is_empty());
        assert_eq!(outcome.final_values, vec![3, 1, 2]);
        assert_eq!(outcome.flattened(), "312");
    }

    #[test]
    fn test_lenient_still_rejects_empty_input() {
        let engine = Engine::default();
        assert_eq!(
            engine.run_lenient("heap", "").unwrap_err(),
            SortError::NoValidNumbers
        );
    }

    #[test]
    fn test_memory_limit_applies() {
        let engine = Engine::new(EngineConfig {
            snapshot_memory_limit: Some(1),
            max_shuffles: None,
        });
        let err = engine.run("bubble", "21").unwrap_err();
        assert!(matches!(err, SortError::SnapshotLimitExceeded { limit: 1, .. }));
    }

    #[test]
    fn test_run_algorithm_records_name() {
        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = engine
            .run_algorithm(Algorithm::Quick, "9 1 5", &mut rng)
            .unwrap();

        assert_eq!(outcome.identifier, "quick");
        assert_eq!(outcome.flattened(), "159");
        assert_eq!(outcome.input, "9 1 5");
    }
}
