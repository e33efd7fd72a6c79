use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::device::DeviceId;

/// Semantic category of a classified occurrence
///
/// Labels are the analyst-facing strings the source plugins have always
/// reported, including the `?User Info?` placeholder used for remote-tag
/// rows, kept verbatim because downstream case tooling matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Alarm,
    #[serde(rename = "Profile Change")]
    ProfileChange,
    #[serde(rename = "Cube Status")]
    CubeStatus,
    #[serde(rename = "Sensor Info")]
    SensorInfo,
    #[serde(rename = "?User Info?")]
    UserInfo,
    Activity,
    #[serde(rename = "Unknown Event Type")]
    Unknown,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Alarm => "Alarm",
            EventKind::ProfileChange => "Profile Change",
            EventKind::CubeStatus => "Cube Status",
            EventKind::SensorInfo => "Sensor Info",
            EventKind::UserInfo => "?User Info?",
            EventKind::Activity => "Activity",
            EventKind::Unknown => "Unknown Event Type",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified, timestamped occurrence derived from a single raw log row
///
/// `device` is a back-reference into the run's registry, not an owned
/// device: upgrades to the device's kind after this event was built are
/// visible through the registry.
///
/// The type deliberately does not implement `Ord`/`PartialEq`; ordering is
/// by timestamp only and is supplied as an explicit comparator
/// (`iotrace-engine`) so that generic code never trips over the
/// timestamp-only equality the legacy timelines rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub kind: EventKind,
    pub device: DeviceId,
}

impl TimelineEvent {
    pub fn new(
        timestamp: DateTime<Utc>,
        name: impl Into<String>,
        kind: EventKind,
        device: DeviceId,
    ) -> Self {
        Self {
            timestamp,
            name: name.into(),
            kind,
            device,
        }
    }
}

impl fmt::Display for TimelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - [{}]",
            self.name,
            self.kind,
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.device
        )
    }
}
