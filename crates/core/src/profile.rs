//! Patient profile with an embedded postal address.
//!
//! These records carry no rules beyond field presence and primitive typing.
//! Their purpose is composition: a profile owns its [`Address`] by value and
//! dumps it as a nested mapping.

use serde::Serialize;

use crate::coerce;
use crate::dump::Dump;
use crate::error::CoreError;
use crate::types::RawRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub pin: String,
}

impl Address {
    pub fn from_raw(raw: &RawRecord) -> Result<Self, CoreError> {
        Ok(Self {
            city: coerce::text(raw, "city")?,
            state: coerce::text(raw, "state")?,
            pin: coerce::text(raw, "pin")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientProfile {
    pub name: String,
    pub gender: String,
    pub age: i64,
    pub address: Address,
}

impl PatientProfile {
    /// Build a profile around an already-constructed address.
    pub fn new(
        name: impl Into<String>,
        gender: impl Into<String>,
        age: i64,
        address: Address,
    ) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            age,
            address,
        }
    }

    /// Build a profile from a raw mapping whose `address` is itself a mapping.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, CoreError> {
        let name = coerce::text(raw, "name")?;
        let gender = coerce::text(raw, "gender")?;
        let age = coerce::integer(raw, "age")?;
        let address = Address::from_raw(coerce::record(raw, "address")?)?;
        Ok(Self::new(name, gender, age, address))
    }
}

impl Dump for Address {}
impl Dump for PatientProfile {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn address_requires_text_fields() {
        let err = Address::from_raw(&raw(json!({
            "city": "Baglung",
            "state": "Gandaki",
            "pin": 14200
        })));
        assert_eq!(
            err,
            Err(CoreError::FieldType {
                field: "pin",
                expected: "a string"
            })
        );
    }

    #[test]
    fn profile_from_raw_expands_nested_address() {
        let profile = PatientProfile::from_raw(&raw(json!({
            "name": "Tej",
            "gender": "male",
            "age": 34,
            "address": {"city": "Baglung", "state": "Gandaki", "pin": "14200"}
        })))
        .unwrap();
        assert_eq!(profile.address.city, "Baglung");
        assert_eq!(profile.name, "Tej");
    }

    #[test]
    fn profile_without_address_is_rejected() {
        let err =
            PatientProfile::from_raw(&raw(json!({"name": "Tej", "gender": "male", "age": 34})));
        assert!(matches!(
            err,
            Err(CoreError::FieldType {
                field: "address",
                ..
            })
        ));
    }

    #[test]
    fn dump_nests_address_mapping() {
        let address = Address {
            city: "Baglung".into(),
            state: "Gandaki".into(),
            pin: "14200".into(),
        };
        let profile = PatientProfile::new("Tej", "male", 34, address);
        let map = profile.dump().unwrap();
        assert_eq!(
            serde_json::Value::Object(map),
            json!({
                "name": "Tej",
                "gender": "male",
                "age": 34,
                "address": {"city": "Baglung", "state": "Gandaki", "pin": "14200"}
            })
        );
    }
}
