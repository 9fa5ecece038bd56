use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use devdiag_core::{Engine, Thresholds};
use tracing::debug;

const STDIN_MARKER: &str = "-";

/// Opens `source` for line reading; `-` means stdin.
pub fn open_lines(source: &str) -> Result<Box<dyn BufRead>> {
    if source == STDIN_MARKER {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(source).with_context(|| format!("failed to open {source}"))?;
    Ok(Box::new(BufReader::new(file)))
}

pub fn read_all(source: &str) -> Result<String> {
    if source == STDIN_MARKER {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read snapshot from stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
}

/// Builds the engine, overriding cut-offs from a JSON file when given.
pub fn load_engine(thresholds: Option<&Path>) -> Result<Engine> {
    let Some(path) = thresholds else {
        return Ok(Engine::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read thresholds from {}", path.display()))?;
    let parsed = Thresholds::from_json(&raw)
        .with_context(|| format!("failed to parse thresholds in {}", path.display()))?;
    debug!(?parsed, "loaded thresholds");

    Engine::new(parsed).with_context(|| format!("rejected thresholds in {}", path.display()))
}
