use serde::{Deserialize, Serialize};

// The diary queries at different call sites historically selected columns
// in different orders. The field declaration order below is the canonical
// row shape; io.rs converts from column order once, at the boundary, and
// the classifiers only ever see these structs.

/// One row of `TB_IPUDairy` (hub action log)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRow {
    /// Raw epoch, seconds or milliseconds
    pub date: i64,
    /// Action or name code; interpretation depends on `log_type`
    pub action: String,
    /// Serial of the base station ("cube") itself
    pub ipu_id: String,
    /// Row discriminator: 1 alarm, 2 profile change, 5 cube status
    pub log_type: i64,
    pub sensor_name: String,
    /// Identity of whoever performed a profile change
    pub operator: String,
    pub profile_name: String,
}

/// One row of `TB_SensorDairy` (sensor detection log)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorRow {
    /// Raw epoch, seconds or milliseconds
    pub date: i64,
    pub sensor_id: String,
    /// Numeric action code, stored as text
    pub action: String,
    /// Sensor model; "0" marks the self-test quirk
    pub model: String,
    pub operator: String,
    /// Remote-tag display name (used only for log type "1" rows)
    pub name: String,
    /// Row discriminator, stored as text: "1" marks remote-tag rows
    pub log_type: String,
}
