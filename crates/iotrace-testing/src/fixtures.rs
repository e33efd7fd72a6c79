//! Fixtures for sample vendor artifacts.
//!
//! Provides utilities to:
//! - Build canonical rows without repeating field lists in every test
//! - Seed throwaway SQLite databases in the vendor on-disk shapes

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use iotrace_providers::ismartalarm::{ActionRow, SensorRow};

/// Build a `TB_IPUDairy` row; operator and profile name stay empty
pub fn action_row(date: i64, action: &str, ipu: &str, log_type: i64, sensor: &str) -> ActionRow {
    ActionRow {
        date,
        action: action.to_string(),
        ipu_id: ipu.to_string(),
        log_type,
        sensor_name: sensor.to_string(),
        operator: String::new(),
        profile_name: String::new(),
    }
}

/// Build a `TB_SensorDairy` row; operator and name stay empty
pub fn sensor_row(date: i64, sensor_id: &str, action: &str, model: &str, log_type: &str) -> SensorRow {
    SensorRow {
        date,
        sensor_id: sensor_id.to_string(),
        action: action.to_string(),
        model: model.to_string(),
        operator: String::new(),
        name: String::new(),
        log_type: log_type.to_string(),
    }
}

/// Create the iSmartAlarm diary schema and a small event history:
/// a contact alarm, a profile change, a cube status change, one sensor
/// detection on the alarmed sensor, a remote-tag action, and a model-0
/// smoke self-test.
pub fn seed_diary_db(conn: &Connection) -> Result<()> {
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

        INSERT INTO TB_IPUDairy VALUES (1526000000, '1', 'BASE1', 1, 'DOOR1', '', '');
        INSERT INTO TB_IPUDairy VALUES (1526000100, '', 'BASE1', 2, '', 'PHONE1', 'ARM');
        INSERT INTO TB_IPUDairy VALUES (1526000200, '2', 'BASE1', 5, '', '', '');

        INSERT INTO TB_SensorDairy VALUES ('DOOR1', 1526000300, '1', '3', '', '', '0');
        INSERT INTO TB_SensorDairy VALUES ('TAG1', 1526000400, '0', '', '', 'TAG1', '1');
        INSERT INTO TB_SensorDairy VALUES ('S9', 1526000500, '8', '0', '', '', '0');
        "#,
    )?;
    Ok(())
}

/// Write a seeded iSmartAlarm diary database to `path`
pub fn create_diary_db(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
    seed_diary_db(&conn)
}

/// Create the Wink element store with two activities and one non-activity
/// element
pub fn seed_persistence_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE Elements (Type TEXT, json TEXT);

        INSERT INTO Elements VALUES ('activity',
            '{"object":{"object_name":"Porch Light","object_type":"light_bulb"},"action":{"reading":"powered on"},"created_at":1526000600}');
        INSERT INTO Elements VALUES ('activity',
            '{"object":{"object_name":"Front Door","object_type":"door_sensor"},"action":{"reading":"opened"},"created_at":"1526000700"}');
        INSERT INTO Elements VALUES ('device', '{"object_id":"x"}');
        "#,
    )?;
    Ok(())
}

/// Write a seeded Wink persistence database to `path`
pub fn create_persistence_db(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
    seed_persistence_db(&conn)
}
