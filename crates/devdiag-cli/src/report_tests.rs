use crate::report::{write_report, OutputFormat};
use chrono::{TimeZone, Utc};
use devdiag_core::{DeviceSnapshot, Engine};

const SNAPSHOT: &str = r#"{"brand":"Nokia","model":"G22","os":"Android 13","device_age":30,"battery_health":65,"battery_cycle_count":800,"fast_charging":false,"charges_overnight":"yes","battery_bulging":false,"previous_repairs":["Screen Replacement"],"storage_usage":95,"ram_usage":60,"overheating":false,"drop_history":"occasional","water_damage":"no","sensor_issues":false,"screen_cracked":true,"buttons_not_working":false,"screen_time":">6h","charge_frequency":"2/day","charge_time":"1-2h","updated_software":"no"}"#;

fn render(format: OutputFormat) -> String {
    let engine = Engine::default();
    let snapshot = DeviceSnapshot::from_json(SNAPSHOT).expect("valid snapshot");
    let result = engine.evaluate(&snapshot);
    let evaluated_at = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
        .single()
        .expect("valid date");

    let mut out = Vec::new();
    write_report(&mut out, &engine, &snapshot, &result, format, evaluated_at).expect("render");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn json_report_has_device_time_result_and_gauges() {
    // Act
    let rendered = render(OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("json report");

    // Assert
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("object report")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["device", "evaluated_at", "gauges", "result"]);

    assert_eq!(value["device"]["brand"], "Nokia");
    assert_eq!(value["device"]["model"], "G22");
    assert_eq!(value["device"]["os"], "Android 13");
    assert_eq!(value["evaluated_at"], "2026-03-01T09:30:00Z");
    assert_eq!(value["result"]["status"], "Critical");
    assert_eq!(value["result"]["forecast"][0], "1–3 months: Battery or power system may fail.");
    assert_eq!(value["gauges"]["battery"], "Fair");
    assert_eq!(value["gauges"]["storage"], "Poor");
    assert_eq!(value["gauges"]["ram"], "Healthy");
}

#[test]
fn human_report_explains_status_and_lists_advice() {
    // Act
    let rendered = render(OutputFormat::Human);
    let lines: Vec<&str> = rendered.lines().collect();

    // Assert
    assert_eq!(lines[0], "=== Device Health ===");
    assert!(lines.contains(&"Device:     Nokia G22 (Android 13)"));
    assert!(lines.contains(&"Battery:    65% [Fair] cycles=800 fast_charging=false"));
    assert!(lines.contains(&"Usage:      storage=95% [Poor] ram=60% [Healthy]"));
    assert!(lines.contains(&"Screen:     >6h per day"));
    assert!(lines.contains(&"Charging:   2/day for 1-2h"));
    assert!(lines.contains(&"Software:   updated=no"));
    assert!(lines.contains(&"Repairs:    Screen Replacement"));
    assert!(lines.contains(&"Status:     Critical"));
    assert!(lines.contains(&"Because:    storage-critical, screen-cracked"));
    assert!(lines.contains(&"  - Battery health is below 80%. Consider replacing it soon."));
    assert!(lines.contains(&"  - Avoid overnight charging to improve battery lifespan."));
    assert!(lines.contains(&"  - Heavy usage. Optimize apps or consider reset."));
    assert!(lines.contains(&"  - 6–9 months: Performance drop likely due to high resource usage."));
    assert!(!rendered.contains("Capacity:"), "capacity needs both sizes");
}

#[test]
fn good_device_prints_no_reasons() {
    let healthy = SNAPSHOT
        .replace(r#""device_age":30"#, r#""device_age":5"#)
        .replace(r#""battery_health":65"#, r#""battery_health":90"#)
        .replace(r#""storage_usage":95"#, r#""storage_usage":30"#)
        .replace(r#""screen_cracked":true"#, r#""screen_cracked":false"#);
    let engine = Engine::default();
    let snapshot = DeviceSnapshot::from_json(&healthy).expect("valid snapshot");
    let result = engine.evaluate(&snapshot);

    let mut out = Vec::new();
    write_report(&mut out, &engine, &snapshot, &result, OutputFormat::Human, Utc::now()).expect("render");
    let rendered = String::from_utf8(out).expect("utf8 output");

    assert!(rendered.contains("Status:     Good"));
    assert!(!rendered.contains("Because:"));
}
