use std::path::Path;

use rusqlite::Connection;

use iotrace_types::DeviceRegistry;

use crate::error::{Error, Result, RowError};
use crate::outcome::{ClassifyOutcome, RowRejection};

use super::mapper::classify_activity;
use super::schema::ActivityRecord;

const ELEMENTS_TABLE: &str = "Elements";

const ACTIVITY_QUERY: &str = "SELECT json FROM Elements WHERE Type = 'activity'";

/// Materialize the raw JSON documents of all activity elements
pub fn read_activity_rows(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(ACTIVITY_QUERY)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Classify raw activity JSON documents against one shared registry.
///
/// Documents that do not parse as activity records are rejected per row;
/// registry invariant violations abort the pass.
pub fn classify_activities(
    rows: &[String],
    registry: &mut DeviceRegistry,
) -> Result<ClassifyOutcome> {
    let mut outcome = ClassifyOutcome::default();

    for (row_index, json) in rows.iter().enumerate() {
        outcome.rows_processed += 1;
        let record: ActivityRecord = match serde_json::from_str(json) {
            Ok(record) => record,
            Err(err) => {
                outcome.rejects.push(RowRejection {
                    table: ELEMENTS_TABLE.to_string(),
                    row_index,
                    reason: RowError::MalformedJson {
                        detail: err.to_string(),
                    }
                    .to_string(),
                });
                continue;
            }
        };

        match classify_activity(&record, registry) {
            Ok(event) => outcome.events.push(event),
            Err(Error::Row(reason)) => outcome.rejects.push(RowRejection {
                table: ELEMENTS_TABLE.to_string(),
                row_index,
                reason: reason.to_string(),
            }),
            Err(fatal) => return Err(fatal),
        }
    }

    Ok(outcome)
}

/// Open a Wink persistence database and classify its activity elements
pub fn parse_persistence_db(
    path: &Path,
    registry: &mut DeviceRegistry,
) -> Result<ClassifyOutcome> {
    let conn = Connection::open(path)?;
    let rows = read_activity_rows(&conn)?;
    classify_activities(&rows, registry)
}
