//! Integration tests for the intake demo: input loading and the printed
//! reports.

use std::io::Write;

use assert_matches::assert_matches;
use intake_core::{Address, CoreError, Patient, PatientProfile};
use intake_demo::config::DemoConfig;
use intake_demo::consumer::{patient_report, profile_dump_report, INSERTED_MESSAGE};
use intake_demo::input::{patient_input, read_record, sample_address, sample_patient};

// ---------------------------------------------------------------------------
// Test: built-in sample validates and prints the expected report
// ---------------------------------------------------------------------------

/// The built-in sample prints name, age, allergies, BMI, then the insert line.
#[test]
fn sample_patient_report() {
    let patient = Patient::from_raw(&sample_patient()).expect("sample must validate");

    assert_eq!(
        patient_report(&patient),
        vec![
            "TEJ".to_string(),
            "30".to_string(),
            r#"["Pollen", "Dust"]"#.to_string(),
            "BMI 33.42".to_string(),
            INSERTED_MESSAGE.to_string(),
        ]
    );
}

/// Null allergies print as `None`.
#[test]
fn report_shows_none_for_missing_allergies() {
    let mut raw = sample_patient();
    raw.insert("allergies".into(), serde_json::Value::Null);
    let patient = Patient::from_raw(&raw).unwrap();
    assert_eq!(patient_report(&patient)[2], "None");
}

// ---------------------------------------------------------------------------
// Test: input loading honours configuration
// ---------------------------------------------------------------------------

/// Without a patient file the built-in sample is used.
#[test]
fn default_config_uses_sample() {
    let raw = patient_input(&DemoConfig::default()).unwrap();
    assert_eq!(raw, sample_patient());
}

/// A configured file is loaded and goes through full validation.
#[test]
fn patient_file_is_read_and_validated() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "name": "Asha",
            "email": "asha@icici.com",
            "linkedin_url": "https://linkedin.com/in/asha",
            "age": 72,
            "weight": 64,
            "height": "1.6",
            "contact_details": {{"emegency": "555"}}
        }}"#
    )
    .unwrap();

    let config = DemoConfig {
        patient_file: Some(file.path().to_path_buf()),
        pretty_dump: false,
    };
    let raw = patient_input(&config).unwrap();
    let patient = Patient::from_raw(&raw).unwrap();

    assert_eq!(patient.name(), "ASHA");
    assert_eq!(patient.bmi(), 25.0);
    assert_eq!(patient.married(), None);
}

/// Validation failures from file input keep their core error.
#[test]
fn file_with_invalid_patient_surfaces_core_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut body = serde_json::Value::Object(sample_patient());
    body["email"] = "abc@gmail.com".into();
    write!(file, "{body}").unwrap();

    let raw = read_record(file.path()).unwrap();
    assert_matches!(
        Patient::from_raw(&raw),
        Err(CoreError::InvalidDomain { .. })
    );
}

/// Top-level arrays are refused before validation.
#[test]
fn non_object_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[1, 2, 3]").unwrap();
    let err = read_record(file.path()).unwrap_err();
    assert!(err.to_string().contains("JSON object"));
}

/// Read errors name the offending path.
#[test]
fn missing_file_reports_path() {
    let err = read_record(std::path::Path::new("/nonexistent/patient.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/patient.json"));
}

// ---------------------------------------------------------------------------
// Test: nested profile dump
// ---------------------------------------------------------------------------

/// The profile dump prints nested JSON and the key count.
#[test]
fn profile_dump_report_expands_address() {
    let address = Address::from_raw(&sample_address()).unwrap();
    let profile = PatientProfile::new("Tej", "male", 34, address);

    let lines = profile_dump_report(&profile, false).unwrap();

    assert_eq!(
        lines[0],
        r#"{"name":"Tej","gender":"male","age":34,"address":{"city":"Baglung","state":"Gandaki","pin":"14200"}}"#
    );
    assert_eq!(lines[1], "mapping with 4 keys");
}
