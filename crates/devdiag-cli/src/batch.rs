use std::io::{BufRead, Write};

use anyhow::Result;
use devdiag_core::{quick_status, DeviceSnapshot, Engine, Status};
use serde_json::json;
use tracing::warn;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub good: usize,
    pub needs_attention: usize,
    pub critical: usize,
    pub rejected: usize,
}

impl BatchSummary {
    fn record(&mut self, status: Status) {
        match status {
            Status::Good => self.good += 1,
            Status::NeedsAttention => self.needs_attention += 1,
            Status::Critical => self.critical += 1,
        }
    }

    pub fn evaluated(&self) -> usize {
        self.good + self.needs_attention + self.critical
    }
}

/// Diagnoses one NDJSON snapshot per line, writing one NDJSON line back
/// for each. A rejected line is reported in place and never stops the run.
pub fn run_batch<R: BufRead, W: Write>(engine: &Engine, reader: R, mut out: W) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record = match DeviceSnapshot::from_json(&line) {
            Ok(snapshot) => {
                let result = engine.evaluate(&snapshot);
                summary.record(result.status);
                json!({
                    "line": line_no,
                    "quick_status": quick_status(snapshot.battery_health),
                    "result": result,
                })
            }
            Err(err) => {
                warn!(line = line_no, error = %err, "rejected snapshot");
                summary.rejected += 1;
                json!({ "line": line_no, "error": err.to_string() })
            }
        };

        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(summary)
}
