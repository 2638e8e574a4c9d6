//! Bilateral partition routing.
//!
//! A partition is shared by exactly two agencies. Its name depends only on the
//! set of the two identifiers, so either party (or any caller ordering) resolves
//! the same partition. Charges, corrections and settlements between the same
//! pair land in the same partition.
use crate::error::ValidationError;
use crate::validate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PARTITION_PREFIX: &str = "charges";
/// Agency identifiers may not contain the separator, or two different pairs
/// could join to the same name (`A_B` + `C` and `A` + `B_C`).
pub const PARTITION_SEPARATOR: char = '_';

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition(String);

impl Partition {
    /// Resolve the partition shared by `a` and `b`. Argument order is irrelevant.
    pub fn between(a: &str, b: &str) -> Result<Self, ValidationError> {
        Self::between_fields("agency_a", a, "agency_b", b)
    }

    /// Same as [`Partition::between`], reporting failures against the caller's field names.
    pub fn between_fields(
        first: &'static str,
        a: &str,
        second: &'static str,
        b: &str,
    ) -> Result<Self, ValidationError> {
        validate::required(first, a)?;
        validate::required(second, b)?;
        validate::without_separator(first, a, PARTITION_SEPARATOR)?;
        validate::without_separator(second, b, PARTITION_SEPARATOR)?;
        validate::distinct(first, a, second, b)?;

        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Ok(Partition(format!(
            "{PARTITION_PREFIX}{PARTITION_SEPARATOR}{low}{PARTITION_SEPARATOR}{high}"
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
