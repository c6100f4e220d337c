//! Run records
//!
//! One [`RunRecord`] is written per completed run: which algorithm, the raw
//! input, the final digits and when it happened. Records are never updated
//! or deleted.
//!
//! [`RunStore`] is the seam where a durable backend plugs in;
//! [`MemoryRunStore`] keeps records for the lifetime of the process.

use crate::engine::RunOutcome;
use rustc_hash::FxHashMap;
use std::time::SystemTime;

/// A run that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRunRecord {
    pub algorithm: String,
    pub original_input: String,
    pub sorted_digits: String,
    pub executed_at: SystemTime,
}

impl NewRunRecord {
    /// Build a record for `outcome`, stamped with the current time
    pub fn from_outcome(outcome: &RunOutcome) -> Self {
        NewRunRecord {
            algorithm: outcome.identifier.clone(),
            original_input: outcome.input.clone(),
            sorted_digits: outcome.flattened(),
            executed_at: SystemTime::now(),
        }
    }
}

/// A stored run with its assigned id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub id: u64,
    pub algorithm: String,
    pub original_input: String,
    pub sorted_digits: String,
    pub executed_at: SystemTime,
}

/// Append-only storage for run records
pub trait RunStore {
    /// Store `record` and return it with its new id
    fn save(&mut self, record: NewRunRecord) -> RunRecord;

    fn get(&self, id: u64) -> Option<&RunRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records, oldest first
    fn records(&self) -> Vec<&RunRecord>;
}

/// In-process [`RunStore`]; ids start at 1 and increase by one per save
#[derive(Debug, Default)]
pub struct MemoryRunStore {
    records: FxHashMap<u64, RunRecord>,
    next_id: u64,
}

impl MemoryRunStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunStore for MemoryRunStore {
    fn save(&mut self, record: NewRunRecord) -> RunRecord {
        self.next_id += 1;
        let stored = RunRecord {
            id: self.next_id,
            algorithm: record.algorithm,
            original_input: record.original_input,
            sorted_digits: record.sorted_digits,
            executed_at: record.executed_at,
        };
        self.records.insert(stored.id, stored.clone());
        stored
    }

    fn get(&self, id: u64) -> Option<&RunRecord> {
        self.records.get(&id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn records(&self) -> Vec<&RunRecord> {
        let mut records: Vec<&RunRecord> = self.records.values().collect();
        records.sort_by_key(|record| record.id);
        records
    }
}
