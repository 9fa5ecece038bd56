use crate::snapshot::{DeviceSnapshot, DropHistory, YesNo};

/// A device that trips no rule at all.
pub(crate) fn healthy() -> DeviceSnapshot {
    DeviceSnapshot {
        brand: "Pixel".to_string(),
        model: "7a".to_string(),
        os: "Android 14".to_string(),
        device_age: 10,
        battery_health: 85,
        battery_cycle_count: 240,
        fast_charging: true,
        charges_overnight: YesNo::No,
        battery_bulging: false,
        previous_repairs: Vec::new(),
        storage_usage: 40,
        ram_usage: 40,
        overheating: false,
        drop_history: DropHistory::None,
        water_damage: YesNo::No,
        sensor_issues: false,
        screen_cracked: false,
        buttons_not_working: false,
        storage_capacity: None,
        ram_capacity: None,
        warranty_status: None,
        major_concern: None,
        screen_time: None,
        charge_frequency: None,
        charge_time: None,
        environment: None,
        region_temp: None,
        updated_software: None,
    }
}

pub(crate) fn repairs(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("repair-{i}")).collect()
}
