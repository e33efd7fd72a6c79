//! iSmartAlarm alarm-hub adapter.
//!
//! The companion app keeps two diary tables in `iSmartAlarm.DB` with
//! different row shapes: `TB_IPUDairy` (hub actions: alarms, profile
//! changes, cube status) and `TB_SensorDairy` (per-sensor detections and
//! remote-tag use). Both feed one shared device registry so a sensor
//! reported in both streams collapses to a single identity. Account
//! credentials live in the `iSmartAlermData.xml` settings store (the typo
//! is the vendor's).

mod io;
mod mapper;
mod schema;
mod settings;
mod tables;

pub use io::{classify_rows, parse_diary_db, read_action_rows, read_sensor_rows};
pub use mapper::{classify_action_row, classify_sensor_row};
pub use schema::{ActionRow, SensorRow};
pub use settings::credentials_from_settings;
