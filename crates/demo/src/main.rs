//! `intake-demo` -- validates one patient record and dumps one nested
//! profile.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default            | Description                          |
//! |-----------------------|----------|--------------------|--------------------------------------|
//! | `INTAKE_PATIENT_FILE` | no       | --                 | JSON file with the patient input     |
//! | `INTAKE_PRETTY_DUMP`  | no       | `true`             | Pretty-print the profile dump        |
//! | `RUST_LOG`            | no       | `intake_demo=info` | Log filter                           |

use intake_core::{Address, Patient, PatientProfile};
use intake_demo::config::DemoConfig;
use intake_demo::{consumer, input};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intake_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let raw = input::patient_input(&config).unwrap_or_else(|e| {
        tracing::error!(error = %format!("{e:#}"), "Could not load patient input");
        std::process::exit(1);
    });

    let patient = Patient::from_raw(&raw).unwrap_or_else(|e| {
        tracing::error!(code = e.code(), field = ?e.field(), error = %e, "Patient validation failed");
        std::process::exit(1);
    });
    consumer::insert_patient_data(&patient);

    let profile = Address::from_raw(&input::sample_address())
        .map(|address| PatientProfile::new("Tej", "male", 34, address))
        .unwrap_or_else(|e| {
            tracing::error!(code = e.code(), error = %e, "Address validation failed");
            std::process::exit(1);
        });

    if let Err(e) = consumer::print_profile_dump(&profile, config.pretty_dump) {
        tracing::error!(error = %e, "Profile dump failed");
        std::process::exit(1);
    }
}
