//! What every stored record provides: validation, a type discriminator, creation
//! stamping, list filtering and its CBOR encoding.
use crate::error::{Result, ValidationError};
use crate::types::TimeStamp;
use crate::validate::Validate;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Record:
    Validate
    + Filterable
    + Serialize
    + DeserializeOwned
    + minicbor::Encode<()>
    + for<'b> minicbor::Decode<'b, ()>
{
    /// Type discriminator stamped into `doc_type`
    const DOC_TYPE: &'static str;

    /// Set creation metadata. Stateful records also set their update time.
    fn stamp_created(&mut self, at: TimeStamp);

    /// Refresh the update time after a status change
    fn touch(&mut self, _at: TimeStamp) {}
}

/// Field access for in-memory equality filters on list operations
pub trait Filterable {
    const FILTER_FIELDS: &'static [&'static str];

    fn field_value(&self, field: &str) -> Option<&str>;
}

pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>> {
    Ok(minicbor::to_vec(record)?)
}

pub fn decode<R: Record>(bytes: &[u8]) -> Result<R> {
    Ok(minicbor::decode(bytes)?)
}

/// Decode a JSON request payload into a typed value, once, at the boundary.
pub fn from_payload<T: DeserializeOwned>(payload: &[u8]) -> std::result::Result<T, ValidationError> {
    serde_json::from_slice(payload).map_err(|err| ValidationError::Malformed {
        field: "payload".to_string(),
        reason: err.to_string(),
    })
}
