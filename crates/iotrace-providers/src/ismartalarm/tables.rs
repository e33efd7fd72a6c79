use iotrace_types::{DeviceKind, EventKind};

// Static code tables for the two diary streams. Misses degrade to a
// literal "Unknown …" label instead of failing, so rows written by
// unrecognized firmware versions still make it onto the timeline.

/// Smoke-alarm action code in `TB_SensorDairy`
pub(crate) const SMOKE_ALARM_ACTION: i64 = 8;

/// Base-station status codes (`TB_IPUDairy`, log type 5)
pub(crate) fn cube_status_label(code: i64) -> &'static str {
    match code {
        1 => "Cube Offline",
        2 => "Cube Online",
        _ => "Unknown Cube Status",
    }
}

/// Alarm-type codes (`TB_IPUDairy`, log type 1)
pub(crate) fn alarm_label(code: i64) -> &'static str {
    match code {
        1 => "Contact Sensor Alarm",
        2 => "Motion Sensor Alarm",
        _ => "Unknown Alarm",
    }
}

/// Log-type discriminator of `TB_IPUDairy`
pub(crate) fn action_log_kind(log_type: i64) -> EventKind {
    match log_type {
        1 => EventKind::Alarm,
        2 => EventKind::ProfileChange,
        5 => EventKind::CubeStatus,
        _ => EventKind::Unknown,
    }
}

/// Remote-tag / smartphone action codes (`TB_SensorDairy`, log type "1").
/// Codes 0 and 4 both mean HOME in the vendor firmware.
pub(crate) fn remote_tag_label(code: i64) -> &'static str {
    match code {
        0 => "HOME",
        1 => "ARM",
        2 => "DISARM",
        4 => "HOME",
        5 => "LEFT HOME",
        _ => "Unknown Action",
    }
}

/// Sensor action codes (`TB_SensorDairy`). Codes 9-13 carry the vendor's
/// internal diagnostic strings verbatim.
pub(crate) fn sensor_action_label(code: i64) -> &'static str {
    match code {
        1 => "Contact Sensor Open",
        2 => "Contact Sensor Closed",
        3 => "Contact Sensor Open",
        4 => "Contact Sensor Closed",
        5 => "Motion Detected",
        6 => "Low Battery Power",
        7 => "Nominal Battery Power",
        8 => "Smoke Alarm",
        9 => "tv_5_13_notrigger",
        10 => "tv_5_13_online",
        11 => "act3_7_disconnected",
        12 => "timer_task_open",
        13 => "timer_task_close",
        14 => "Device Added",
        15 => "Device Deleted",
        _ => "Unknown",
    }
}

/// Device class implied by a sensor action code
pub(crate) fn device_kind_for_action(code: i64) -> DeviceKind {
    match code {
        1..=4 => DeviceKind::ContactSensor,
        5 => DeviceKind::MotionDetector,
        8 => DeviceKind::SmokeDetector,
        _ => DeviceKind::Unknown,
    }
}
