//! Patient intake records: raw-input coercion, field rules, whole-record
//! checks, derived attributes, and structural dumps.
//!
//! This crate has no I/O and emits no logs. Callers own all side effects.

pub mod coerce;
pub mod dump;
pub mod error;
pub mod patient;
pub mod profile;
pub mod types;
pub mod validation;

pub use dump::Dump;
pub use error::CoreError;
pub use patient::Patient;
pub use profile::{Address, PatientProfile};
pub use types::{ContactDetails, RawRecord};
