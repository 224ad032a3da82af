use indexmap::IndexMap;

/// Raw input for a record: field name to untyped JSON value.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Contact label (e.g. `phone`) to contact value. Keys are unique and keep
/// their input order.
pub type ContactDetails = IndexMap<String, String>;
