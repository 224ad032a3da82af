use std::path::PathBuf;

/// Demo configuration loaded from environment variables.
///
/// All fields have defaults; the demo runs with no environment at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// JSON file holding the patient input mapping. The built-in sample is
    /// used when unset.
    pub patient_file: Option<PathBuf>,
    /// Pretty-print JSON dumps (default: `true`).
    pub pretty_dump: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            patient_file: None,
            pretty_dump: true,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `INTAKE_PATIENT_FILE` | unset   |
    /// | `INTAKE_PRETTY_DUMP`  | `true`  |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let patient_file = lookup("INTAKE_PATIENT_FILE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let pretty_dump = match lookup("INTAKE_PRETTY_DUMP") {
            None => defaults.pretty_dump,
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    "INTAKE_PRETTY_DUMP is not a boolean, using default"
                );
                defaults.pretty_dump
            }),
        };

        Self {
            patient_file,
            pretty_dump,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
