//! Field validation contract and the rule helpers the records compose.
//!
//! Every record checks its rules in a fixed order and stops at the first failure:
//! required fields, enumerated values, cross-field consistency, conditional
//! requirements, numeric ranges. Validation never mutates the record.
use crate::error::ValidationError;
use crate::types::{Amount, TimeStamp};

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub fn required_some<T>(field: &'static str, value: Option<&T>) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::Required { field }),
    }
}

pub fn required_list(field: &'static str, values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub fn one_of(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::NotPermitted {
        field,
        value: value.to_string(),
        allowed,
    })
}

pub fn distinct(
    first: &'static str,
    a: &str,
    second: &'static str,
    b: &str,
) -> Result<(), ValidationError> {
    if a == b {
        return Err(ValidationError::MustDiffer {
            first,
            second,
            value: a.to_string(),
        });
    }
    Ok(())
}

pub fn required_when(
    field: &'static str,
    value: &str,
    condition: impl FnOnce() -> String,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredWhen {
            field,
            condition: condition(),
        });
    }
    Ok(())
}

pub fn not_after(
    earlier: &'static str,
    a: &TimeStamp,
    later: &'static str,
    b: &TimeStamp,
) -> Result<(), ValidationError> {
    if a > b {
        return Err(ValidationError::OutOfOrder { earlier, later });
    }
    Ok(())
}

pub fn non_negative_amount(field: &'static str, value: &Amount) -> Result<(), ValidationError> {
    if value.is_negative() {
        return Err(ValidationError::OutOfRange {
            field,
            rule: "non-negative",
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field,
            rule: "non-negative",
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn at_least_one(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 1 {
        return Err(ValidationError::OutOfRange {
            field,
            rule: "at least 1",
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn representable(field: &'static str, value: &TimeStamp) -> Result<(), ValidationError> {
    if !value.is_representable() {
        return Err(ValidationError::OutOfRange {
            field,
            rule: "between 1677-09-21 and 2262-04-11",
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Identifiers joined into a partition name must not contain the join character
pub fn without_separator(
    field: &'static str,
    value: &str,
    separator: char,
) -> Result<(), ValidationError> {
    if value.contains(separator) {
        return Err(ValidationError::Malformed {
            field: field.to_string(),
            reason: format!("must not contain {separator:?}"),
        });
    }
    Ok(())
}

pub fn sequence_number(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if !(0..=crate::keys::MAX_CORRECTION_SEQ).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            rule: "between 0 and 999",
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_missing() {
        assert_eq!(
            required("agency_id", "  "),
            Err(ValidationError::Required { field: "agency_id" })
        );
        assert!(required("agency_id", "NJ").is_ok());
    }

    #[test]
    fn enumerations_are_case_sensitive() {
        assert!(one_of("status", "active", &["active", "inactive"]).is_ok());
        assert!(one_of("status", "Active", &["active", "inactive"]).is_err());
    }

    #[test]
    fn sequence_bounds() {
        assert!(sequence_number("correction_seq_no", 0).is_ok());
        assert!(sequence_number("correction_seq_no", 999).is_ok());
        assert!(sequence_number("correction_seq_no", 1000).is_err());
        assert!(sequence_number("correction_seq_no", -1).is_err());
    }

    #[test]
    fn timestamps_past_2262_are_out_of_range() {
        let late = TimeStamp::new_with(2300, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            representable("exit_datetime", &late),
            Err(ValidationError::OutOfRange { field: "exit_datetime", .. })
        ));
        let early = TimeStamp::new_with(1600, 1, 1, 0, 0, 0).unwrap();
        assert!(representable("exit_datetime", &early).is_err());
        let ok = TimeStamp::new_with(2024, 6, 1, 0, 0, 0).unwrap();
        assert!(representable("exit_datetime", &ok).is_ok());
    }

    #[test]
    fn negative_zero_amount_is_allowed() {
        let zero: Amount = "-0.00".parse().unwrap();
        assert!(non_negative_amount("amount", &zero).is_ok());
    }
}
