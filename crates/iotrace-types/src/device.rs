use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Stable device identity key (vendor serial or hub identifier)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(serial: impl Into<String>) -> Self {
        Self(serial.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DeviceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Device classification as reported or inferred from log rows
///
/// `Other` carries vendor-reported free-form types (e.g. Wink object types)
/// that have no fixed variant. `Unknown` is the starting point for devices
/// first seen through rows that carry no type information; it can be
/// upgraded once a better-typed row arrives, and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    BaseStation,
    ContactSensor,
    MotionDetector,
    SmokeDetector,
    RemoteTag,
    RemoteTagOrSmartphone,
    Other(String),
    Unknown,
}

impl DeviceKind {
    /// Analyst-facing label
    pub fn label(&self) -> &str {
        match self {
            DeviceKind::BaseStation => "Base Station",
            DeviceKind::ContactSensor => "Contact Sensor",
            DeviceKind::MotionDetector => "Motion Detector",
            DeviceKind::SmokeDetector => "Smoke Detector",
            DeviceKind::RemoteTag => "Remote Tag",
            DeviceKind::RemoteTagOrSmartphone => "Remote Tag or Smartphone",
            DeviceKind::Other(kind) => kind,
            DeviceKind::Unknown => "Unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, DeviceKind::Unknown)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DeviceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DeviceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(match label.as_str() {
            "Base Station" => DeviceKind::BaseStation,
            "Contact Sensor" => DeviceKind::ContactSensor,
            "Motion Detector" => DeviceKind::MotionDetector,
            "Smoke Detector" => DeviceKind::SmokeDetector,
            "Remote Tag" => DeviceKind::RemoteTag,
            "Remote Tag or Smartphone" => DeviceKind::RemoteTagOrSmartphone,
            "Unknown" => DeviceKind::Unknown,
            _ => DeviceKind::Other(label),
        })
    }
}

/// One physical or logical endpoint referenced by one or more events
///
/// Identity is the serial alone: `display_name` and `kind` never
/// participate in equality or hashing. Devices are owned by the
/// [`DeviceRegistry`](crate::DeviceRegistry) and live for the whole
/// reconstruction pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub display_name: String,
    pub serial: DeviceId,
    pub kind: DeviceKind,
}

impl Device {
    pub fn new(
        display_name: impl Into<String>,
        serial: impl Into<String>,
        kind: DeviceKind,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            serial: DeviceId::new(serial),
            kind,
        }
    }

    /// Apply the monotonic type-upgrade rule: only an `Unknown` device can
    /// change kind, and only to a non-`Unknown` kind.
    pub(crate) fn upgrade_from_unknown(&mut self, kind: DeviceKind) {
        if self.kind.is_unknown() && !kind.is_unknown() {
            self.kind = kind;
        }
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serial.hash(state);
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - SN={}", self.display_name, self.serial)
    }
}
