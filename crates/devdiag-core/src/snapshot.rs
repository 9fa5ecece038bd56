use serde::{Deserialize, Serialize};
use thiserror::Error;

// Hardware flags are booleans but `charges_overnight` and `water_damage`
// are "yes"/"no". Keep the split; rules match on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub os: String,

    pub device_age: u32,
    pub battery_health: u8,
    pub battery_cycle_count: u32,
    pub fast_charging: bool,
    pub charges_overnight: YesNo,
    pub battery_bulging: bool,
    #[serde(default)]
    pub previous_repairs: Vec<String>,

    pub storage_usage: u8,
    pub ram_usage: u8,

    pub overheating: bool,
    pub drop_history: DropHistory,
    pub water_damage: YesNo,
    pub sensor_issues: bool,
    pub screen_cracked: bool,
    pub buttons_not_working: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_status: Option<WarrantyStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_concern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_temp: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_software: Option<YesNo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

// Only `Frequent` feeds any rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropHistory {
    None,
    Occasional,
    Frequent,
}

impl DropHistory {
    pub fn is_frequent(self) -> bool {
        self == DropHistory::Frequent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantyStatus {
    In,
    Out,
}

#[derive(Debug, Error)]
pub enum InvalidSnapshot {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{field} is {value}, expected at most {max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

impl DeviceSnapshot {
    pub fn from_json(raw: &str) -> Result<Self, InvalidSnapshot> {
        let snapshot: DeviceSnapshot = serde_json::from_str(raw)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<(), InvalidSnapshot> {
        let percents = [
            ("battery_health", self.battery_health),
            ("storage_usage", self.storage_usage),
            ("ram_usage", self.ram_usage),
        ];
        for (field, value) in percents {
            if value > 100 {
                return Err(InvalidSnapshot::OutOfRange {
                    field,
                    value: u32::from(value),
                    max: 100,
                });
            }
        }
        Ok(())
    }

    pub fn repair_count(&self) -> usize {
        self.previous_repairs.len()
    }
}
