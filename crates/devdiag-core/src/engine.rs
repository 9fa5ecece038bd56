use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{InvalidThresholds, Thresholds};
use crate::rules::{
    matching, Rule, ATTENTION_RULES, CRITICAL_RULES, FORECAST_FALLBACK, FORECAST_RULES,
    SUGGESTION_FALLBACK, SUGGESTION_RULES,
};
use crate::snapshot::{DeviceSnapshot, InvalidSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    Good,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    Critical,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::NeedsAttention => "Needs Attention",
            Status::Critical => "Critical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub status: Status,
    pub suggestions: Vec<String>,
    pub forecast: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    thresholds: Thresholds,
}

impl Engine {
    pub fn new(thresholds: Thresholds) -> Result<Self, InvalidThresholds> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    // First match of the highest tier decides; matches are never counted.
    pub fn classify(&self, snapshot: &DeviceSnapshot) -> Status {
        if let Some(rule) = matching(CRITICAL_RULES, snapshot, &self.thresholds).next() {
            debug!(rule = rule.id, "critical rule matched");
            return Status::Critical;
        }
        if let Some(rule) = matching(ATTENTION_RULES, snapshot, &self.thresholds).next() {
            debug!(rule = rule.id, "attention rule matched");
            return Status::NeedsAttention;
        }
        Status::Good
    }

    pub fn status_reasons(&self, snapshot: &DeviceSnapshot) -> Vec<&'static Rule> {
        for table in [CRITICAL_RULES, ATTENTION_RULES] {
            let hits: Vec<&'static Rule> = table
                .iter()
                .filter(|rule| rule.matches(snapshot, &self.thresholds))
                .collect();
            if !hits.is_empty() {
                return hits;
            }
        }
        Vec::new()
    }

    pub fn suggest(&self, snapshot: &DeviceSnapshot) -> Vec<String> {
        self.collect(SUGGESTION_RULES, SUGGESTION_FALLBACK, snapshot)
    }

    pub fn forecast(&self, snapshot: &DeviceSnapshot) -> Vec<String> {
        self.collect(FORECAST_RULES, FORECAST_FALLBACK, snapshot)
    }

    pub fn diagnose(&self, snapshot: &DeviceSnapshot) -> Result<DiagnosticResult, InvalidSnapshot> {
        snapshot.validate()?;
        Ok(self.evaluate(snapshot))
    }

    // No range check; for snapshots already accepted by `DeviceSnapshot::from_json`.
    pub fn evaluate(&self, snapshot: &DeviceSnapshot) -> DiagnosticResult {
        DiagnosticResult {
            status: self.classify(snapshot),
            suggestions: self.suggest(snapshot),
            forecast: self.forecast(snapshot),
        }
    }

    fn collect(&self, table: &[Rule], fallback: &str, snapshot: &DeviceSnapshot) -> Vec<String> {
        let out: Vec<String> = matching(table, snapshot, &self.thresholds)
            .inspect(|rule| debug!(rule = rule.id, "rule matched"))
            .map(|rule| rule.message.to_string())
            .collect();

        if out.is_empty() {
            vec![fallback.to_string()]
        } else {
            out
        }
    }
}

pub fn classify(snapshot: &DeviceSnapshot) -> Status {
    Engine::default().classify(snapshot)
}

pub fn suggest(snapshot: &DeviceSnapshot) -> Vec<String> {
    Engine::default().suggest(snapshot)
}

pub fn forecast(snapshot: &DeviceSnapshot) -> Vec<String> {
    Engine::default().forecast(snapshot)
}

pub fn diagnose(snapshot: &DeviceSnapshot) -> Result<DiagnosticResult, InvalidSnapshot> {
    Engine::default().diagnose(snapshot)
}
