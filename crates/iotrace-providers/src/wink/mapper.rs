use iotrace_types::{DeviceKind, DeviceRegistry, EventKind, TimelineEvent, normalize_epoch};

use crate::error::Result;

use super::schema::ActivityRecord;

/// Classify one activity document into a timeline event.
///
/// The object name is both identity and label for Wink devices; the
/// object type is carried through as the device kind. Activities use the
/// upgrade path, so an activity can type a device first seen untyped
/// elsewhere in the run.
pub fn classify_activity(
    record: &ActivityRecord,
    registry: &mut DeviceRegistry,
) -> Result<TimelineEvent> {
    let timestamp = normalize_epoch(record.created_at);

    let kind = if record.object.object_type.is_empty() {
        DeviceKind::Unknown
    } else {
        DeviceKind::Other(record.object.object_type.clone())
    };
    let device = registry.resolve(&record.object.object_name, &record.object.object_name, kind)?;

    Ok(TimelineEvent::new(
        timestamp,
        record.action.reading.clone(),
        EventKind::Activity,
        device.serial.clone(),
    ))
}
