use std::path::Path;

use rusqlite::Connection;
use rusqlite::types::ValueRef;

use iotrace_types::DeviceRegistry;

use crate::error::{Error, Result};
use crate::outcome::{ClassifyOutcome, RowRejection};

use super::mapper::{classify_action_row, classify_sensor_row};
use super::schema::{ActionRow, SensorRow};

const ACTION_LOG_TABLE: &str = "TB_IPUDairy";
const SENSOR_LOG_TABLE: &str = "TB_SensorDairy";

const ACTION_LOG_QUERY: &str =
    "SELECT date, action, IPUID, logType, sensorName, operator, profileName FROM TB_IPUDairy";
// Column order differs from the canonical struct order on purpose: this is
// the order the app writes, and the boundary converts exactly once here.
const SENSOR_LOG_QUERY: &str =
    "SELECT sensorID, date, action, model, operator, name, logtype FROM TB_SensorDairy";

/// Read a column as text the way JDBC's getString does: NULL becomes the
/// empty string and numeric storage classes are rendered decimal.
fn text_like(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(v) => v.to_string(),
        ValueRef::Real(v) => v.to_string(),
        ValueRef::Text(v) | ValueRef::Blob(v) => String::from_utf8_lossy(v).into_owned(),
    })
}

/// Materialize all `TB_IPUDairy` rows in canonical field order
pub fn read_action_rows(conn: &Connection) -> Result<Vec<ActionRow>> {
    let mut stmt = conn.prepare(ACTION_LOG_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok(ActionRow {
            date: row.get(0)?,
            action: text_like(row, 1)?,
            ipu_id: text_like(row, 2)?,
            log_type: row.get(3)?,
            sensor_name: text_like(row, 4)?,
            operator: text_like(row, 5)?,
            profile_name: text_like(row, 6)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Materialize all `TB_SensorDairy` rows in canonical field order
pub fn read_sensor_rows(conn: &Connection) -> Result<Vec<SensorRow>> {
    let mut stmt = conn.prepare(SENSOR_LOG_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok(SensorRow {
            date: row.get(1)?,
            sensor_id: text_like(row, 0)?,
            action: text_like(row, 2)?,
            model: text_like(row, 3)?,
            operator: text_like(row, 4)?,
            name: text_like(row, 5)?,
            log_type: text_like(row, 6)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Run both diary streams through their classifiers against one shared
/// registry, actions first.
///
/// Row-level failures are collected as rejections; anything else (SQLite,
/// registry invariants) aborts the pass.
pub fn classify_rows(
    actions: &[ActionRow],
    sensors: &[SensorRow],
    registry: &mut DeviceRegistry,
) -> Result<ClassifyOutcome> {
    let mut outcome = ClassifyOutcome::default();

    for (row_index, row) in actions.iter().enumerate() {
        outcome.rows_processed += 1;
        match classify_action_row(row, registry) {
            Ok(event) => outcome.events.push(event),
            Err(Error::Row(reason)) => outcome.rejects.push(RowRejection {
                table: ACTION_LOG_TABLE.to_string(),
                row_index,
                reason: reason.to_string(),
            }),
            Err(fatal) => return Err(fatal),
        }
    }

    for (row_index, row) in sensors.iter().enumerate() {
        outcome.rows_processed += 1;
        match classify_sensor_row(row, registry) {
            Ok(event) => outcome.events.push(event),
            Err(Error::Row(reason)) => outcome.rejects.push(RowRejection {
                table: SENSOR_LOG_TABLE.to_string(),
                row_index,
                reason: reason.to_string(),
            }),
            Err(fatal) => return Err(fatal),
        }
    }

    Ok(outcome)
}

/// Open an `iSmartAlarm.DB` file and classify both diary tables
pub fn parse_diary_db(path: &Path, registry: &mut DeviceRegistry) -> Result<ClassifyOutcome> {
    let conn = Connection::open(path)?;
    let actions = read_action_rows(&conn)?;
    let sensors = read_sensor_rows(&conn)?;
    classify_rows(&actions, &sensors, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotrace_types::DeviceKind;

    fn diary_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE TB_IPUDairy (
                date INTEGER, action TEXT, IPUID TEXT, logType INTEGER,
                sensorName TEXT, operator TEXT, profileName TEXT
            );
            CREATE TABLE TB_SensorDairy (
                sensorID TEXT, date INTEGER, action TEXT, model TEXT,
                operator TEXT, name TEXT, logtype TEXT
            );
            "#,
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_read_action_rows_converts_column_order() {
        let conn = diary_db();
        conn.execute(
            "INSERT INTO TB_IPUDairy VALUES (1526000000, '1', 'BASE1', 1, 'SENSOR1', '', '')",
            [],
        )
        .unwrap();

        let rows = read_action_rows(&conn).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, 1526000000);
        assert_eq!(rows[0].log_type, 1);
        assert_eq!(rows[0].sensor_name, "SENSOR1");
    }

    #[test]
    fn test_read_sensor_rows_converts_column_order() {
        let conn = diary_db();
        // Stored sensorID-first; the canonical struct is date-first
        conn.execute(
            "INSERT INTO TB_SensorDairy VALUES ('S1', 1526000000, '5', '3', '', '', '0')",
            [],
        )
        .unwrap();

        let rows = read_sensor_rows(&conn).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, 1526000000);
        assert_eq!(rows[0].sensor_id, "S1");
        assert_eq!(rows[0].action, "5");
    }

    #[test]
    fn test_null_text_columns_become_empty_strings() {
        let conn = diary_db();
        conn.execute(
            "INSERT INTO TB_IPUDairy VALUES (1526000000, '2', 'BASE1', 5, NULL, NULL, NULL)",
            [],
        )
        .unwrap();

        let rows = read_action_rows(&conn).unwrap();
        assert_eq!(rows[0].sensor_name, "");
        assert_eq!(rows[0].profile_name, "");
    }

    #[test]
    fn test_numeric_code_columns_read_as_text() {
        let conn = diary_db();
        // Some app versions store the action code as an integer
        conn.execute(
            "INSERT INTO TB_SensorDairy VALUES ('S1', 1526000000, 5, 3, '', '', 0)",
            [],
        )
        .unwrap();

        let rows = read_sensor_rows(&conn).unwrap();
        assert_eq!(rows[0].action, "5");
        assert_eq!(rows[0].log_type, "0");
    }

    #[test]
    fn test_classify_rows_rejects_bad_rows_and_continues() {
        let conn = diary_db();
        conn.execute_batch(
            r#"
            INSERT INTO TB_IPUDairy VALUES (1526000000, '1', 'BASE1', 1, 'SENSOR1', '', '');
            INSERT INTO TB_IPUDairy VALUES (1526000100, '1', 'BASE1', 99, 'SENSOR1', '', '');
            INSERT INTO TB_IPUDairy VALUES (1526000200, '2', 'BASE1', 5, '', '', '');
            INSERT INTO TB_SensorDairy VALUES ('S1', 1526000300, '5', '3', '', '', '0');
            "#,
        )
        .unwrap();

        let actions = read_action_rows(&conn).unwrap();
        let sensors = read_sensor_rows(&conn).unwrap();

        let mut registry = DeviceRegistry::new();
        let outcome = classify_rows(&actions, &sensors, &mut registry).unwrap();

        assert_eq!(outcome.rows_processed, 4);
        assert_eq!(outcome.events.len(), 3);
        assert_eq!(outcome.rows_rejected(), 1);
        assert_eq!(outcome.rejects[0].table, "TB_IPUDairy");
        assert_eq!(outcome.rejects[0].row_index, 1);
        assert!(outcome.rejects[0].reason.contains("99"));

        // BASE1, SENSOR1, S1
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_both_streams_share_one_identity() {
        let conn = diary_db();
        conn.execute_batch(
            r#"
            INSERT INTO TB_SensorDairy VALUES ('SENSOR1', 1526000000, '6', '3', '', '', '0');
            INSERT INTO TB_SensorDairy VALUES ('SENSOR1', 1526000100, '1', '3', '', '', '0');
            INSERT INTO TB_IPUDairy VALUES (1526000200, '1', 'BASE1', 1, 'SENSOR1', '', '');
            "#,
        )
        .unwrap();

        let actions = read_action_rows(&conn).unwrap();
        let sensors = read_sensor_rows(&conn).unwrap();

        let mut registry = DeviceRegistry::new();
        classify_rows(&actions, &sensors, &mut registry).unwrap();

        // Three rows, one identity, and the specific kind wins
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("SENSOR1").unwrap().kind,
            DeviceKind::ContactSensor
        );
    }
}
