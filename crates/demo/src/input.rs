//! Demo inputs: the built-in sample mappings and file loading.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use intake_core::RawRecord;
use serde_json::{json, Value};

use crate::config::DemoConfig;

/// Built-in patient input used when no file is configured.
pub fn sample_patient() -> RawRecord {
    record([
        ("name", json!("Tej")),
        ("email", json!("abc@hdfc.com")),
        ("linkedin_url", json!("https://linkedin.com/in/1322")),
        ("age", json!(30)),
        ("height", json!(1.5)),
        ("weight", json!(75.2)),
        ("married", json!(true)),
        ("allergies", json!(["Pollen", "Dust"])),
        (
            "contact_details",
            json!({"phone": "6462887216", "emergency": "23456"}),
        ),
    ])
}

/// Built-in address for the nested-dump demo.
pub fn sample_address() -> RawRecord {
    record([
        ("city", json!("Baglung")),
        ("state", json!("Gandaki")),
        ("pin", json!("14200")),
    ])
}

/// Patient input from the configured file, or the built-in sample.
pub fn patient_input(config: &DemoConfig) -> Result<RawRecord> {
    match &config.patient_file {
        Some(path) => read_record(path),
        None => Ok(sample_patient()),
    }
}

/// Read a JSON file whose top level must be an object.
pub fn read_record(path: &Path) -> Result<RawRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read patient input {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Patient input {} is not valid JSON", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!(
            "Patient input {} must be a JSON object at the top level",
            path.display()
        ),
    }
}

fn record<const N: usize>(fields: [(&str, Value); N]) -> RawRecord {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
