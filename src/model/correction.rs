use crate::error::ValidationError;
use crate::model::{RECORD_TYPES, vehicle_identification};
use crate::record::{Filterable, Record};
use crate::types::{Amount, TimeStamp};
use crate::validate::{self, Validate};
use serde::{Deserialize, Serialize};

/// C class, I incorrect amount, L late or lost transaction, T tag/plate, O other
pub const CORRECTION_REASONS: &[&str] = &["C", "I", "L", "T", "O"];

/// An append-only amendment of a charge, numbered per charge. Lives in the charge's partition.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, minicbor::Encode, minicbor::Decode,
)]
#[serde(default)]
pub struct Correction {
    #[n(0)]
    pub original_charge_id: String,
    #[n(1)]
    pub correction_seq_no: i64,
    #[n(2)]
    pub correction_reason: String,
    #[n(3)]
    pub record_type: String,
    #[n(4)]
    pub away_agency_id: String,
    #[n(5)]
    pub home_agency_id: String,
    #[n(6)]
    pub tag_serial_number: Option<String>,
    #[n(7)]
    pub plate_number: Option<String>,
    #[n(8)]
    pub plate_state: Option<String>,
    #[n(9)]
    pub vehicle_class: i64,
    #[n(10)]
    pub amount: Option<Amount>,
    #[n(11)]
    pub fee: Amount,
    #[n(12)]
    pub created_at: Option<TimeStamp>,
    #[n(13)]
    pub doc_type: String,
}

impl Validate for Correction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("original_charge_id", &self.original_charge_id)?;
        validate::required("correction_reason", &self.correction_reason)?;
        validate::required("record_type", &self.record_type)?;
        validate::required("away_agency_id", &self.away_agency_id)?;
        validate::required("home_agency_id", &self.home_agency_id)?;
        validate::required_some("amount", self.amount.as_ref())?;

        validate::one_of("correction_reason", &self.correction_reason, CORRECTION_REASONS)?;
        validate::one_of("record_type", &self.record_type, RECORD_TYPES)?;

        validate::distinct(
            "away_agency_id",
            &self.away_agency_id,
            "home_agency_id",
            &self.home_agency_id,
        )?;

        vehicle_identification(
            &self.record_type,
            self.tag_serial_number.as_deref(),
            self.plate_number.as_deref(),
            self.plate_state.as_deref(),
        )?;

        validate::sequence_number("correction_seq_no", self.correction_seq_no)?;
        if let Some(amount) = &self.amount {
            validate::non_negative_amount("amount", amount)?;
        }
        validate::non_negative_amount("fee", &self.fee)?;
        validate::at_least_one("vehicle_class", self.vehicle_class)
    }
}

impl Filterable for Correction {
    const FILTER_FIELDS: &'static [&'static str] =
        &["original_charge_id", "correction_reason", "record_type"];

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "original_charge_id" => Some(&self.original_charge_id),
            "correction_reason" => Some(&self.correction_reason),
            "record_type" => Some(&self.record_type),
            _ => None,
        }
    }
}

impl Record for Correction {
    const DOC_TYPE: &'static str = "correction";

    fn stamp_created(&mut self, at: TimeStamp) {
        self.created_at = Some(at);
        self.doc_type = Self::DOC_TYPE.to_string();
    }
}
