use serde::{Deserialize, Serialize};
use thiserror::Error;

// `*_below` triggers on `<`, `*_above` on `>`, `*_at` / `*_months` on `>=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub battery_critical_below: u8,
    pub battery_attention_below: u8,
    pub battery_replace_below: u8,
    pub battery_forecast_below: u8,
    pub usage_critical_above: u8,
    pub usage_attention_above: u8,
    pub usage_heavy_above: u8,
    pub usage_forecast_above: u8,
    pub repairs_unstable_at: usize,
    pub device_age_risk_months: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            battery_critical_below: 50,
            battery_attention_below: 70,
            battery_replace_below: 80,
            battery_forecast_below: 70,
            usage_critical_above: 90,
            usage_attention_above: 80,
            usage_heavy_above: 85,
            usage_forecast_above: 90,
            repairs_unstable_at: 3,
            device_age_risk_months: 24,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidThresholds {
    #[error("{field} is {value}, percent cut-offs must be at most 100")]
    PercentOutOfRange { field: &'static str, value: u8 },
    #[error("battery_critical_below ({critical}) exceeds battery_attention_below ({attention})")]
    BatteryOrder { critical: u8, attention: u8 },
    #[error("usage_attention_above ({attention}) exceeds usage_critical_above ({critical})")]
    UsageOrder { attention: u8, critical: u8 },
    #[error("repairs_unstable_at must be at least 1")]
    ZeroRepairs,
}

impl Thresholds {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), InvalidThresholds> {
        let percents = [
            ("battery_critical_below", self.battery_critical_below),
            ("battery_attention_below", self.battery_attention_below),
            ("battery_replace_below", self.battery_replace_below),
            ("battery_forecast_below", self.battery_forecast_below),
            ("usage_critical_above", self.usage_critical_above),
            ("usage_attention_above", self.usage_attention_above),
            ("usage_heavy_above", self.usage_heavy_above),
            ("usage_forecast_above", self.usage_forecast_above),
        ];
        for (field, value) in percents {
            if value > 100 {
                return Err(InvalidThresholds::PercentOutOfRange { field, value });
            }
        }

        if self.battery_critical_below > self.battery_attention_below {
            return Err(InvalidThresholds::BatteryOrder {
                critical: self.battery_critical_below,
                attention: self.battery_attention_below,
            });
        }

        if self.usage_attention_above > self.usage_critical_above {
            return Err(InvalidThresholds::UsageOrder {
                attention: self.usage_attention_above,
                critical: self.usage_critical_above,
            });
        }

        if self.repairs_unstable_at == 0 {
            return Err(InvalidThresholds::ZeroRepairs);
        }

        Ok(())
    }
}
