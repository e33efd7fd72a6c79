use iotrace_types::{DeviceKind, DeviceRegistry, EventKind, TimelineEvent, normalize_epoch};

use crate::error::{Error, Result, RowError};

use super::schema::{ActionRow, SensorRow};
use super::tables;

fn parse_code(field: &'static str, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        Error::Row(RowError::InvalidCode {
            field,
            value: value.to_string(),
        })
    })
}

/// Classify one `TB_IPUDairy` row into a timeline event.
///
/// The registry is consulted with `insert_or_get`: a device already known
/// to the run is returned as-is, without the unknown-kind upgrade the
/// sensor stream applies. Rows with a log type outside {1, 2, 5} are a
/// hard per-row failure (`RowError::UnknownLogType`).
pub fn classify_action_row(
    row: &ActionRow,
    registry: &mut DeviceRegistry,
) -> Result<TimelineEvent> {
    let timestamp = normalize_epoch(row.date);
    let kind = tables::action_log_kind(row.log_type);

    let (name, serial, device_kind) = match row.log_type {
        1 => {
            let code = parse_code("action", &row.action)?;
            let device_kind = if code == 1 {
                DeviceKind::ContactSensor
            } else {
                DeviceKind::MotionDetector
            };
            (
                tables::alarm_label(code).to_string(),
                row.sensor_name.as_str(),
                device_kind,
            )
        }
        2 => (
            row.profile_name.clone(),
            row.operator.as_str(),
            DeviceKind::RemoteTagOrSmartphone,
        ),
        5 => {
            let code = parse_code("action", &row.action)?;
            (
                tables::cube_status_label(code).to_string(),
                row.ipu_id.as_str(),
                DeviceKind::BaseStation,
            )
        }
        other => return Err(Error::Row(RowError::UnknownLogType { log_type: other })),
    };

    // The serial doubles as the display name on first sight
    let device = registry.insert_or_get(serial, serial, device_kind)?;
    Ok(TimelineEvent::new(
        timestamp,
        name,
        kind,
        device.serial.clone(),
    ))
}

/// Classify one `TB_SensorDairy` row into a timeline event.
///
/// Rows with log type "1" are remote-tag actions and report as
/// "?User Info?"; everything else is sensor telemetry. This is the stream
/// that can upgrade a previously-unknown device's kind, via
/// `DeviceRegistry::resolve`.
pub fn classify_sensor_row(
    row: &SensorRow,
    registry: &mut DeviceRegistry,
) -> Result<TimelineEvent> {
    let timestamp = normalize_epoch(row.date);

    if row.log_type == "1" {
        let code = parse_code("action", &row.action)?;
        let device = registry.resolve(&row.name, &row.name, DeviceKind::RemoteTag)?;
        return Ok(TimelineEvent::new(
            timestamp,
            tables::remote_tag_label(code),
            EventKind::UserInfo,
            device.serial.clone(),
        ));
    }

    let code = parse_code("action", &row.action)?;
    let name = if row.model == "0" && code == tables::SMOKE_ALARM_ACTION {
        // Model 0 units emit the smoke code during self-tests
        "Unknown Device Test (Likely Smoke Detector)".to_string()
    } else {
        tables::sensor_action_label(code).to_string()
    };

    let device_kind = tables::device_kind_for_action(code);
    let device = registry.resolve(&row.sensor_id, &row.sensor_id, device_kind)?;
    Ok(TimelineEvent::new(
        timestamp,
        name,
        EventKind::SensorInfo,
        device.serial.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_row(date: i64, action: &str, ipu: &str, log_type: i64, sensor: &str) -> ActionRow {
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

    fn sensor_row(date: i64, sensor_id: &str, action: &str, model: &str, log_type: &str) -> SensorRow {
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

    #[test]
    fn test_alarm_row() {
        let mut registry = DeviceRegistry::new();
        let row = action_row(1526000000, "1", "BASE1", 1, "SENSOR1");

        let event = classify_action_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "Contact Sensor Alarm");
        assert_eq!(event.kind, EventKind::Alarm);
        assert_eq!(event.device.as_str(), "SENSOR1");
        assert_eq!(event.timestamp.timestamp(), 1526000000);

        let device = registry.get("SENSOR1").unwrap();
        assert_eq!(device.kind, DeviceKind::ContactSensor);
    }

    #[test]
    fn test_motion_alarm_row() {
        let mut registry = DeviceRegistry::new();
        let row = action_row(1526000000, "2", "BASE1", 1, "SENSOR2");

        let event = classify_action_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "Motion Sensor Alarm");
        assert_eq!(registry.get("SENSOR2").unwrap().kind, DeviceKind::MotionDetector);
    }

    #[test]
    fn test_profile_change_row() {
        let mut registry = DeviceRegistry::new();
        let row = ActionRow {
            date: 1526000000,
            action: String::new(),
            ipu_id: "BASE1".to_string(),
            log_type: 2,
            sensor_name: String::new(),
            operator: "PHONE1".to_string(),
            profile_name: "ARM".to_string(),
        };

        let event = classify_action_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "ARM");
        assert_eq!(event.kind, EventKind::ProfileChange);
        assert_eq!(event.device.as_str(), "PHONE1");
        assert_eq!(
            registry.get("PHONE1").unwrap().kind,
            DeviceKind::RemoteTagOrSmartphone
        );
    }

    #[test]
    fn test_cube_status_row() {
        let mut registry = DeviceRegistry::new();
        let row = action_row(1526000000123, "2", "BASE1", 5, "");

        let event = classify_action_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "Cube Online");
        assert_eq!(event.kind, EventKind::CubeStatus);
        assert_eq!(event.device.as_str(), "BASE1");
        // Millisecond path
        assert_eq!(event.timestamp.timestamp(), 1526000000);
        assert_eq!(registry.get("BASE1").unwrap().kind, DeviceKind::BaseStation);
    }

    #[test]
    fn test_unknown_log_type_is_rejected() {
        let mut registry = DeviceRegistry::new();
        let row = action_row(1526000000, "1", "BASE1", 99, "SENSOR1");

        match classify_action_row(&row, &mut registry) {
            Err(Error::Row(RowError::UnknownLogType { log_type })) => assert_eq!(log_type, 99),
            other => panic!("Expected UnknownLogType, got {:?}", other),
        }
        // The row left no trace in the registry
        assert!(registry.is_empty());
    }

    #[test]
    fn test_non_numeric_action_code_is_rejected() {
        let mut registry = DeviceRegistry::new();
        let row = action_row(1526000000, "bogus", "BASE1", 1, "SENSOR1");

        assert!(matches!(
            classify_action_row(&row, &mut registry),
            Err(Error::Row(RowError::InvalidCode { field: "action", .. }))
        ));
    }

    #[test]
    fn test_action_row_does_not_upgrade_existing_device() {
        let mut registry = DeviceRegistry::new();
        registry.resolve("SENSOR1", "SENSOR1", DeviceKind::Unknown).unwrap();

        let row = action_row(1526000000, "1", "BASE1", 1, "SENSOR1");
        classify_action_row(&row, &mut registry).unwrap();
        // Asymmetry with the sensor stream: no upgrade on this path
        assert_eq!(registry.get("SENSOR1").unwrap().kind, DeviceKind::Unknown);
    }

    #[test]
    fn test_sensor_contact_row() {
        let mut registry = DeviceRegistry::new();
        let row = sensor_row(1526000000, "S1", "1", "3", "0");

        let event = classify_sensor_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "Contact Sensor Open");
        assert_eq!(event.kind, EventKind::SensorInfo);
        assert_eq!(registry.get("S1").unwrap().kind, DeviceKind::ContactSensor);
    }

    #[test]
    fn test_sensor_unknown_action_degrades() {
        let mut registry = DeviceRegistry::new();
        let row = sensor_row(1526000000, "S1", "42", "3", "0");

        let event = classify_sensor_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "Unknown");
        assert_eq!(registry.get("S1").unwrap().kind, DeviceKind::Unknown);
    }

    #[test]
    fn test_model_zero_smoke_test_override() {
        let mut registry = DeviceRegistry::new();
        let row = sensor_row(1526000000, "S1", "8", "0", "0");

        let event = classify_sensor_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "Unknown Device Test (Likely Smoke Detector)");
        assert_eq!(registry.get("S1").unwrap().kind, DeviceKind::SmokeDetector);
    }

    #[test]
    fn test_model_zero_without_smoke_code_keeps_lookup() {
        let mut registry = DeviceRegistry::new();
        let row = sensor_row(1526000000, "S1", "5", "0", "0");

        let event = classify_sensor_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "Motion Detected");
    }

    #[test]
    fn test_remote_tag_row() {
        let mut registry = DeviceRegistry::new();
        let row = SensorRow {
            date: 1526000000,
            sensor_id: "S1".to_string(),
            action: "2".to_string(),
            model: String::new(),
            operator: String::new(),
            name: "TAG1".to_string(),
            log_type: "1".to_string(),
        };

        let event = classify_sensor_row(&row, &mut registry).unwrap();
        assert_eq!(event.name, "DISARM");
        assert_eq!(event.kind, EventKind::UserInfo);
        assert_eq!(event.device.as_str(), "TAG1");
        assert_eq!(registry.get("TAG1").unwrap().kind, DeviceKind::RemoteTag);
    }

    #[test]
    fn test_sensor_row_upgrades_unknown_device() {
        let mut registry = DeviceRegistry::new();
        // First sighting through a code with no device class
        classify_sensor_row(&sensor_row(1526000000, "S1", "6", "3", "0"), &mut registry).unwrap();
        assert_eq!(registry.get("S1").unwrap().kind, DeviceKind::Unknown);

        // A typed sighting upgrades the same identity in place
        classify_sensor_row(&sensor_row(1526000100, "S1", "5", "3", "0"), &mut registry).unwrap();
        assert_eq!(registry.get("S1").unwrap().kind, DeviceKind::MotionDetector);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_device_id_is_fatal() {
        let mut registry = DeviceRegistry::new();
        let row = sensor_row(1526000000, "", "5", "3", "0");

        assert!(matches!(
            classify_sensor_row(&row, &mut registry),
            Err(Error::Registry(iotrace_types::Error::EmptyDeviceId))
        ));
    }
}
