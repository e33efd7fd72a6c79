use iotrace_types::TimelineEvent;
use serde::{Deserialize, Serialize};

/// Record of one rejected row: identifier plus reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRejection {
    /// Table or column family the row came from (e.g. "TB_IPUDairy")
    pub table: String,
    /// Zero-based position of the row within its source
    pub row_index: usize,
    /// Human-readable failure description
    pub reason: String,
}

/// Result of classifying all rows from one source
///
/// `rows_processed` counts every row examined; `events` holds the rows that
/// classified cleanly and `rejects` the per-row hard failures. A rejected
/// row never stops classification of the rows after it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClassifyOutcome {
    pub events: Vec<TimelineEvent>,
    pub rejects: Vec<RowRejection>,
    pub rows_processed: usize,
}

impl ClassifyOutcome {
    pub fn rows_rejected(&self) -> usize {
        self.rejects.len()
    }
}
