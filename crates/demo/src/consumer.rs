//! Demonstration consumers of validated records.
//!
//! Nothing here stores anything: "insertion" is a placeholder message.

use intake_core::{CoreError, Dump, Patient, PatientProfile};

/// Message standing in for a real storage write.
pub const INSERTED_MESSAGE: &str = "Inserted into database";

/// Lines printed for an accepted patient, in print order.
pub fn patient_report(patient: &Patient) -> Vec<String> {
    let allergies = match patient.allergies() {
        Some(list) => format!("{list:?}"),
        None => "None".to_string(),
    };
    vec![
        patient.name().to_string(),
        patient.age().to_string(),
        allergies,
        format!("BMI {}", patient.bmi()),
        INSERTED_MESSAGE.to_string(),
    ]
}

/// Print the selected fields and derived BMI, then the placeholder insert.
pub fn insert_patient_data(patient: &Patient) {
    for line in patient_report(patient) {
        println!("{line}");
    }
    tracing::info!(
        name = %patient.name(),
        age = patient.age(),
        bmi = patient.bmi(),
        "Patient accepted",
    );
}

/// Text printed for a profile dump: the nested mapping, then its shape.
pub fn profile_dump_report(
    profile: &PatientProfile,
    pretty: bool,
) -> Result<Vec<String>, CoreError> {
    let map = profile.dump()?;
    let text = profile.dump_json(pretty)?;
    Ok(vec![text, format!("mapping with {} keys", map.len())])
}

/// Print a profile dump with the nested address expanded.
pub fn print_profile_dump(profile: &PatientProfile, pretty: bool) -> Result<(), CoreError> {
    for line in profile_dump_report(profile, pretty)? {
        println!("{line}");
    }
    tracing::debug!(name = %profile.name, city = %profile.address.city, "Profile dumped");
    Ok(())
}
