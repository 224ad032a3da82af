//! Structural dumps of records into plain JSON mappings.
//!
//! Nested records are expanded recursively into nested mappings of
//! primitives. Key order follows field declaration order.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::RawRecord;

/// Serialize any record into a top-level mapping.
pub fn to_map<T: Serialize + ?Sized>(record: &T) -> Result<RawRecord, CoreError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::Serialization(format!(
            "expected a mapping, got {other}"
        ))),
    }
}

/// A record that can be dumped to a plain mapping or JSON text.
pub trait Dump: Serialize {
    /// Plain nested mapping of primitive values.
    fn dump(&self) -> Result<RawRecord, CoreError> {
        to_map(self)
    }

    /// JSON text of [`Dump::dump`], optionally pretty-printed.
    fn dump_json(&self, pretty: bool) -> Result<String, CoreError> {
        let map = self.dump()?;
        let text = if pretty {
            serde_json::to_string_pretty(&map)?
        } else {
            serde_json::to_string(&map)?
        };
        Ok(text)
    }
}
