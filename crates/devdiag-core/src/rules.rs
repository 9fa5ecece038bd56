use std::fmt;

use serde::Serialize;

use crate::config::Thresholds;
use crate::snapshot::DeviceSnapshot;

type Predicate = fn(&DeviceSnapshot, &Thresholds) -> bool;

#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub message: &'static str,
    predicate: Predicate,
}

impl Rule {
    pub fn matches(&self, snapshot: &DeviceSnapshot, thresholds: &Thresholds) -> bool {
        (self.predicate)(snapshot, thresholds)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

pub static CRITICAL_RULES: &[Rule] = &[
    Rule {
        id: "battery-critical",
        message: "Battery health below the critical floor",
        predicate: |s, t| s.battery_health < t.battery_critical_below,
    },
    Rule {
        id: "storage-critical",
        message: "Storage usage above the critical ceiling",
        predicate: |s, t| s.storage_usage > t.usage_critical_above,
    },
    Rule {
        id: "ram-critical",
        message: "RAM usage above the critical ceiling",
        predicate: |s, t| s.ram_usage > t.usage_critical_above,
    },
    Rule {
        id: "overheating",
        message: "Device reported overheating",
        predicate: |s, _| s.overheating,
    },
    Rule {
        id: "frequent-drops",
        message: "Device is dropped frequently",
        predicate: |s, _| s.drop_history.is_frequent(),
    },
    Rule {
        id: "water-damage",
        message: "Device has water damage",
        predicate: |s, _| s.water_damage.is_yes(),
    },
    Rule {
        id: "sensor-issues",
        message: "Sensors are misbehaving",
        predicate: |s, _| s.sensor_issues,
    },
    Rule {
        id: "battery-bulging",
        message: "Battery is bulging",
        predicate: |s, _| s.battery_bulging,
    },
    Rule {
        id: "screen-cracked",
        message: "Screen is cracked",
        predicate: |s, _| s.screen_cracked,
    },
    Rule {
        id: "buttons-not-working",
        message: "Physical buttons are not working",
        predicate: |s, _| s.buttons_not_working,
    },
];

pub static ATTENTION_RULES: &[Rule] = &[
    Rule {
        id: "battery-attention",
        message: "Battery health below the attention floor",
        predicate: |s, t| s.battery_health < t.battery_attention_below,
    },
    Rule {
        id: "storage-attention",
        message: "Storage usage above the attention ceiling",
        predicate: |s, t| s.storage_usage > t.usage_attention_above,
    },
    Rule {
        id: "ram-attention",
        message: "RAM usage above the attention ceiling",
        predicate: |s, t| s.ram_usage > t.usage_attention_above,
    },
];

pub const SUGGESTION_FALLBACK: &str = "Device is in good shape. Keep performing routine checkups.";

pub static SUGGESTION_RULES: &[Rule] = &[
    Rule {
        id: "battery-replace",
        message: "Battery health is below 80%. Consider replacing it soon.",
        predicate: |s, t| s.battery_health < t.battery_replace_below,
    },
    Rule {
        id: "overnight-charging",
        message: "Avoid overnight charging to improve battery lifespan.",
        predicate: |s, _| s.charges_overnight.is_yes(),
    },
    Rule {
        id: "overheating",
        message: "Device is overheating. Monitor background apps and heat.",
        predicate: |s, _| s.overheating,
    },
    Rule {
        id: "repeated-repairs",
        message: "Frequent repairs suggest instability. Consider upgrading.",
        predicate: |s, t| s.repair_count() >= t.repairs_unstable_at,
    },
    Rule {
        id: "heavy-usage",
        message: "Heavy usage. Optimize apps or consider reset.",
        predicate: |s, t| {
            s.storage_usage > t.usage_heavy_above || s.ram_usage > t.usage_heavy_above
        },
    },
    Rule {
        id: "internal-damage",
        message: "Possible internal damage detected.",
        predicate: |s, _| s.drop_history.is_frequent() || s.water_damage.is_yes(),
    },
    Rule {
        id: "hardware-irregularities",
        message: "Hardware irregularities present.",
        predicate: |s, _| s.sensor_issues || s.battery_bulging || s.buttons_not_working,
    },
];

pub const FORECAST_FALLBACK: &str = "No critical failures expected in the next 6–12 months.";

pub static FORECAST_RULES: &[Rule] = &[
    Rule {
        id: "power-system",
        message: "1–3 months: Battery or power system may fail.",
        predicate: |s, t| {
            s.device_age >= t.device_age_risk_months
                || s.battery_health < t.battery_forecast_below
                || s.battery_bulging
        },
    },
    Rule {
        id: "internal-components",
        message: "3–6 months: Internal component risk (e.g. motherboard).",
        predicate: |s, t| {
            s.repair_count() >= t.repairs_unstable_at
                || s.drop_history.is_frequent()
                || s.water_damage.is_yes()
        },
    },
    Rule {
        id: "performance",
        message: "6–9 months: Performance drop likely due to high resource usage.",
        predicate: |s, t| {
            s.storage_usage > t.usage_forecast_above || s.ram_usage > t.usage_forecast_above
        },
    },
];

pub fn matching<'a>(
    table: &'a [Rule],
    snapshot: &'a DeviceSnapshot,
    thresholds: &'a Thresholds,
) -> impl Iterator<Item = &'a Rule> + 'a {
    table
        .iter()
        .filter(move |rule| rule.matches(snapshot, thresholds))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    Critical,
    Attention,
    Suggestion,
    Forecast,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogueEntry {
    pub group: RuleGroup,
    pub id: &'static str,
    pub message: &'static str,
}

pub fn catalogue() -> Vec<CatalogueEntry> {
    let groups = [
        (RuleGroup::Critical, CRITICAL_RULES),
        (RuleGroup::Attention, ATTENTION_RULES),
        (RuleGroup::Suggestion, SUGGESTION_RULES),
        (RuleGroup::Forecast, FORECAST_RULES),
    ];

    groups
        .into_iter()
        .flat_map(|(group, table)| {
            table.iter().map(move |rule| CatalogueEntry {
                group,
                id: rule.id,
                message: rule.message,
            })
        })
        .collect()
}
