use anyhow::{Result, anyhow};

/// Descriptor for one supported source family
#[derive(Debug, Clone)]
pub struct VendorMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Primary artifact filename this family's adapter reads. Finding the
    /// file is the host's job; this is what it should look for.
    pub artifact: &'static str,
}

const VENDORS: &[VendorMetadata] = &[
    VendorMetadata {
        name: "ismartalarm",
        description: "iSmartAlarm alarm hub companion app",
        artifact: "iSmartAlarm.DB",
    },
    VendorMetadata {
        name: "wink",
        description: "Wink smart-home hub companion app",
        artifact: "persistenceDB",
    },
    VendorMetadata {
        name: "nest",
        description: "Nest thermostat and camera companion app",
        artifact: "Phoenix.xml",
    },
    VendorMetadata {
        name: "qbee",
        description: "QBee / Swisscom Home camera app",
        artifact: "com.swisscom.internetbox_preferences.xml",
    },
];

pub fn all_vendors() -> &'static [VendorMetadata] {
    VENDORS
}

pub fn vendor_names() -> Vec<&'static str> {
    VENDORS.iter().map(|v| v.name).collect()
}

pub fn vendor_metadata(name: &str) -> Option<&'static VendorMetadata> {
    VENDORS.iter().find(|v| v.name == name)
}

/// Match an artifact filename to the vendor that can interpret it
pub fn detect_vendor(artifact_name: &str) -> Result<&'static VendorMetadata> {
    VENDORS
        .iter()
        .find(|v| artifact_name.contains(v.artifact))
        .ok_or_else(|| anyhow!("Cannot detect vendor from artifact: {}", artifact_name))
}
