use serde::{Deserialize, Serialize};

use crate::snapshot::DeviceSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Healthy,
    Fair,
    Poor,
}

pub fn battery_band(health: u8) -> Band {
    if health >= 80 {
        Band::Healthy
    } else if health >= 50 {
        Band::Fair
    } else {
        Band::Poor
    }
}

pub fn usage_band(percent: u8) -> Band {
    if percent <= 70 {
        Band::Healthy
    } else if percent <= 90 {
        Band::Fair
    } else {
        Band::Poor
    }
}

// Battery-only rating for report listings. Cut-offs differ from `battery_band`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListStatus {
    Good,
    Moderate,
    Poor,
}

pub fn quick_status(battery_health: u8) -> ListStatus {
    if battery_health >= 80 {
        ListStatus::Good
    } else if battery_health >= 60 {
        ListStatus::Moderate
    } else {
        ListStatus::Poor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauges {
    pub battery: Band,
    pub storage: Band,
    pub ram: Band,
}

impl Gauges {
    pub fn of(snapshot: &DeviceSnapshot) -> Self {
        Self {
            battery: battery_band(snapshot.battery_health),
            storage: usage_band(snapshot.storage_usage),
            ram: usage_band(snapshot.ram_usage),
        }
    }
}
