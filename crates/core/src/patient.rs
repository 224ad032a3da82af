//! Patient intake record: field rules, normalization, the emergency-contact
//! invariant, and the derived BMI.
//!
//! A [`Patient`] can only be obtained through [`Patient::from_raw`], which
//! validates every field eagerly and then checks the whole record. Fields are
//! private, so a constructed record never changes.

use serde::Serialize;

use crate::coerce::{self, Mode};
use crate::dump::{self, Dump};
use crate::error::CoreError;
use crate::types::{ContactDetails, RawRecord};
use crate::validation::rules::{
    DomainAllowList, EmailSyntax, ExclusiveRange, GreaterThan, MaxChars, MaxItems, UrlWithHost,
    Uppercase,
};
use crate::validation::Validator;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Email domains accepted for patient registration.
pub const ALLOWED_EMAIL_DOMAINS: &[&str] = &["hdfc.com", "icici.com"];

/// Contact key required for patients older than [`EMERGENCY_CONTACT_AGE`].
///
/// The spelling is intentional: existing intake data uses this exact key.
pub const EMERGENCY_CONTACT_KEY: &str = "emegency";

/// Patients strictly older than this must list an emergency contact.
pub const EMERGENCY_CONTACT_AGE: i64 = 60;

/// Maximum length of a patient name in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Maximum number of recorded allergies.
pub const MAX_ALLERGIES: usize = 10;

/// Primary age bounds, both exclusive.
pub const AGE_BOUNDS: (i64, i64) = (0, 120);

/// Secondary age bounds, both exclusive. Checked after [`AGE_BOUNDS`].
pub const AGE_WINDOW: (i64, i64) = (0, 100);

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A validated, normalized patient record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    name: String,
    email: String,
    linkedin_url: String,
    age: i64,
    weight: f64,
    height: f64,
    married: Option<bool>,
    allergies: Option<Vec<String>>,
    contact_details: ContactDetails,
}

/// Secondary age check, reported separately from the primary bound.
struct AgeWindow;

impl Validator<i64> for AgeWindow {
    fn validate(&self, _field: &'static str, age: i64) -> Result<i64, CoreError> {
        let (min, max) = AGE_WINDOW;
        if age > min && age < max {
            Ok(age)
        } else {
            Err(CoreError::AgeOutOfRange { age })
        }
    }
}

impl Patient {
    /// Validate a raw input mapping and build a patient.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned. The emergency-contact rule runs only once every field has
    /// passed, against the normalized values.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, CoreError> {
        let name = MaxChars(MAX_NAME_CHARS)
            .then(Uppercase)
            .validate("name", coerce::text(raw, "name")?)?;

        let email = EmailSyntax
            .then(DomainAllowList(ALLOWED_EMAIL_DOMAINS))
            .validate("email", coerce::text(raw, "email")?)?;

        let linkedin_url =
            UrlWithHost.validate("linkedin_url", coerce::text(raw, "linkedin_url")?)?;

        let age = ExclusiveRange::new(AGE_BOUNDS.0, AGE_BOUNDS.1)
            .then(AgeWindow)
            .validate("age", coerce::integer(raw, "age")?)?;

        let weight = coerce::float(raw, "weight", Mode::Strict)?;
        let weight = GreaterThan(0.0).validate("weight", weight)?;

        let height = coerce::float(raw, "height", Mode::Lax)?;
        let height = GreaterThan(0.0).validate("height", height)?;

        let married = coerce::optional_bool(raw, "married")?;

        let allergies = coerce::optional_text_list(raw, "allergies")?
            .map(|list| MaxItems(MAX_ALLERGIES).validate("allergies", list))
            .transpose()?;

        let contact_details = coerce::text_map(raw, "contact_details")?;

        let patient = Self {
            name,
            email,
            linkedin_url,
            age,
            weight,
            height,
            married,
            allergies,
            contact_details,
        };
        check_emergency_contact(&patient)?;
        Ok(patient)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn linkedin_url(&self) -> &str {
        &self.linkedin_url
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn married(&self) -> Option<bool> {
        self.married
    }

    pub fn allergies(&self) -> Option<&[String]> {
        self.allergies.as_deref()
    }

    pub fn contact_details(&self) -> &ContactDetails {
        &self.contact_details
    }

    /// Whether the contact details carry the emergency contact key.
    pub fn has_emergency_contact(&self) -> bool {
        self.contact_details.contains_key(EMERGENCY_CONTACT_KEY)
    }

    /// Body mass index, `weight / height²`, rounded to two decimals.
    ///
    /// Computed on every call; never stored.
    pub fn bmi(&self) -> f64 {
        round2(self.weight / (self.height * self.height))
    }
}

impl TryFrom<&RawRecord> for Patient {
    type Error = CoreError;

    fn try_from(raw: &RawRecord) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl Dump for Patient {
    /// Stored fields in declaration order, followed by the computed `bmi`.
    fn dump(&self) -> Result<RawRecord, CoreError> {
        let mut map = dump::to_map(self)?;
        map.insert("bmi".into(), serde_json::json!(self.bmi()));
        Ok(map)
    }
}

/// Whole-record rule: older patients need an emergency contact.
fn check_emergency_contact(patient: &Patient) -> Result<(), CoreError> {
    if patient.age > EMERGENCY_CONTACT_AGE && !patient.has_emergency_contact() {
        return Err(CoreError::MissingEmergencyContact { age: patient.age });
    }
    Ok(())
}

/// Round to two decimal places from the exact binary value, ties to even.
///
/// Precision formatting rounds the exact decimal expansion of `value`, so no
/// error is introduced by scaling first.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
