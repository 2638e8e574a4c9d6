//! Scan/filter layer: drain a key range from the store, decode every entry and
//! keep the ones a predicate accepts. Full linear scan; order is key order.
use crate::error::{Result, ValidationError};
use crate::keys::prefix_range;
use crate::record::{self, Record};
use crate::store::{LedgerStore, Scope};
use serde::{Deserialize, Serialize};

/// Equality filter on one named record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Reject field names the record type does not expose for filtering
    pub fn check<R: Record>(&self) -> std::result::Result<(), ValidationError> {
        if R::FILTER_FIELDS.contains(&self.field.as_str()) {
            return Ok(());
        }
        Err(ValidationError::NotPermitted {
            field: "filter.field",
            value: self.field.clone(),
            allowed: R::FILTER_FIELDS,
        })
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        record.field_value(&self.field) == Some(self.value.as_str())
    }
}

pub fn scan_with<R, S, P>(store: &S, scope: Scope<'_>, start: &str, end: &str, predicate: P) -> Result<Vec<R>>
where
    R: Record,
    S: LedgerStore + ?Sized,
    P: Fn(&R) -> bool,
{
    let mut matched = Vec::new();
    for (_key, bytes) in scope.scan(store, start, end)? {
        let record: R = record::decode(&bytes)?;
        if predicate(&record) {
            matched.push(record);
        }
    }
    Ok(matched)
}

/// Every record under `prefix` in `scope`, optionally narrowed by `filter`.
pub fn scan_prefix<R, S>(store: &S, scope: Scope<'_>, prefix: &str, filter: Option<&FieldFilter>) -> Result<Vec<R>>
where
    R: Record,
    S: LedgerStore + ?Sized,
{
    if let Some(filter) = filter {
        filter.check::<R>()?;
    }
    let (start, end) = prefix_range(prefix);
    scan_with(store, scope, &start, &end, |record: &R| {
        filter.is_none_or(|filter| filter.matches(record))
    })
}
