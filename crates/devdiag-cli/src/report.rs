use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use devdiag_core::{DeviceSnapshot, DiagnosticResult, Engine, Gauges};
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    device: DeviceLabel<'a>,
    evaluated_at: DateTime<Utc>,
    result: &'a DiagnosticResult,
    gauges: Gauges,
}

#[derive(Debug, Serialize)]
struct DeviceLabel<'a> {
    brand: &'a str,
    model: &'a str,
    os: &'a str,
}

pub fn write_report<W: Write>(
    mut out: W,
    engine: &Engine,
    snapshot: &DeviceSnapshot,
    result: &DiagnosticResult,
    format: OutputFormat,
    evaluated_at: DateTime<Utc>,
) -> Result<()> {
    let gauges = Gauges::of(snapshot);

    match format {
        OutputFormat::Json => {
            let report = Report {
                device: DeviceLabel {
                    brand: &snapshot.brand,
                    model: &snapshot.model,
                    os: &snapshot.os,
                },
                evaluated_at,
                result,
                gauges,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Human => {
            writeln!(out, "=== Device Health ===")?;
            writeln!(out, "Device:     {} {} ({})", snapshot.brand, snapshot.model, snapshot.os)?;
            writeln!(out, "Age:        {} months", snapshot.device_age)?;
            writeln!(
                out,
                "Battery:    {}% [{:?}] cycles={} fast_charging={}",
                snapshot.battery_health,
                gauges.battery,
                snapshot.battery_cycle_count,
                snapshot.fast_charging
            )?;
            writeln!(
                out,
                "Usage:      storage={}% [{:?}] ram={}% [{:?}]",
                snapshot.storage_usage, gauges.storage, snapshot.ram_usage, gauges.ram
            )?;
            if let (Some(storage), Some(ram)) = (snapshot.storage_capacity, snapshot.ram_capacity) {
                writeln!(out, "Capacity:   storage={storage} GB ram={ram} GB")?;
            }
            if let Some(screen_time) = &snapshot.screen_time {
                writeln!(out, "Screen:     {screen_time} per day")?;
            }
            if let Some(frequency) = &snapshot.charge_frequency {
                let duration = snapshot.charge_time.as_deref().unwrap_or("n/a");
                writeln!(out, "Charging:   {frequency} for {duration}")?;
            }
            if let Some(updated) = snapshot.updated_software {
                writeln!(out, "Software:   updated={}", if updated.is_yes() { "yes" } else { "no" })?;
            }
            if let Some(environment) = &snapshot.environment {
                match snapshot.region_temp {
                    Some(temp) => writeln!(out, "Env:        {environment} ({temp} C)")?,
                    None => writeln!(out, "Env:        {environment}")?,
                }
            }
            if !snapshot.previous_repairs.is_empty() {
                writeln!(out, "Repairs:    {}", snapshot.previous_repairs.join(", "))?;
            }
            writeln!(out, "Status:     {}", result.status)?;

            let reasons = engine.status_reasons(snapshot);
            if !reasons.is_empty() {
                let ids = reasons.iter().map(|rule| rule.id).collect::<Vec<_>>();
                writeln!(out, "Because:    {}", ids.join(", "))?;
            }

            writeln!(out, "Suggestions:")?;
            for line in &result.suggestions {
                writeln!(out, "  - {line}")?;
            }
            writeln!(out, "Forecast:")?;
            for line in &result.forecast {
                writeln!(out, "  - {line}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
