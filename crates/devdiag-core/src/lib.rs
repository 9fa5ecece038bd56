pub mod config;
pub mod engine;
pub mod gauge;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use config::{InvalidThresholds, Thresholds};
pub use engine::{classify, diagnose, forecast, suggest, DiagnosticResult, Engine, Status};
pub use gauge::{battery_band, quick_status, usage_band, Band, Gauges, ListStatus};
pub use rules::{catalogue, CatalogueEntry, Rule, RuleGroup};
pub use snapshot::{DeviceSnapshot, DropHistory, InvalidSnapshot, WarrantyStatus, YesNo};
