use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceId, DeviceKind};
use crate::error::{Error, Result};

/// Run-scoped store deduplicating device identities by serial
///
/// One registry is constructed per reconstruction pass and threaded through
/// every classifier for that pass, so the same identifier reported through
/// different log streams collapses to a single [`Device`]. Devices are
/// never removed during a run.
///
/// `resolve` performs a read-check-then-write upgrade and therefore takes
/// `&mut self`; callers that parallelize must keep a single writer per
/// registry.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeviceRegistry {
    devices: BTreeMap<DeviceId, Device>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the device for `serial`, inserting it on first sight.
    ///
    /// If the device already exists with kind `Unknown` and `kind` is more
    /// specific, the stored device is upgraded in place before being
    /// returned. The upgrade is monotonic: a typed device never reverts.
    pub fn resolve(
        &mut self,
        serial: &str,
        display_name: &str,
        kind: DeviceKind,
    ) -> Result<&Device> {
        if serial.is_empty() {
            return Err(Error::EmptyDeviceId);
        }
        match self.devices.entry(DeviceId::new(serial)) {
            Entry::Occupied(occupied) => {
                let device = occupied.into_mut();
                device.upgrade_from_unknown(kind);
                Ok(device)
            }
            Entry::Vacant(vacant) => Ok(vacant.insert(Device::new(display_name, serial, kind))),
        }
    }

    /// Return the device for `serial`, inserting it on first sight.
    ///
    /// Unlike [`resolve`](Self::resolve), an existing device is returned
    /// unmodified even if its kind is `Unknown`; the action-log stream has
    /// always left previously-seen devices untouched.
    pub fn insert_or_get(
        &mut self,
        serial: &str,
        display_name: &str,
        kind: DeviceKind,
    ) -> Result<&Device> {
        if serial.is_empty() {
            return Err(Error::EmptyDeviceId);
        }
        match self.devices.entry(DeviceId::new(serial)) {
            Entry::Occupied(occupied) => Ok(occupied.into_mut()),
            Entry::Vacant(vacant) => Ok(vacant.insert(Device::new(display_name, serial, kind))),
        }
    }

    pub fn get(&self, serial: &str) -> Option<&Device> {
        self.devices.get(serial)
    }

    /// Devices in serial order
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
