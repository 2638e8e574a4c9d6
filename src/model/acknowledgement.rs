use crate::error::ValidationError;
use crate::record::{Filterable, Record};
use crate::types::TimeStamp;
use crate::validate::{self, Validate};
use serde::{Deserialize, Serialize};

pub const SUBMISSION_TYPES: &[&str] = &["TVL", "TRAN", "CORR", "RECON", "SETL"];

/// 00 accepted, 01 duplicate submission, 02 invalid format, 03 invalid sender,
/// 04 invalid recipient, 05 record count mismatch, 06 unsupported version, 07 other
pub const RETURN_CODES: &[&str] = &["00", "01", "02", "03", "04", "05", "06", "07"];

/// Receipt for a delivered submission. Append-only, shared.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, minicbor::Encode, minicbor::Decode,
)]
#[serde(default)]
pub struct Acknowledgement {
    #[n(0)]
    pub acknowledgement_id: String,
    #[n(1)]
    pub from_agency_id: String,
    #[n(2)]
    pub to_agency_id: String,
    #[n(3)]
    pub submission_type: String,
    #[n(4)]
    pub submission_id: String,
    #[n(5)]
    pub return_code: String,
    #[n(6)]
    pub return_message: Option<String>,
    #[n(7)]
    pub record_count: i64,
    #[n(8)]
    pub created_at: Option<TimeStamp>,
    #[n(9)]
    pub doc_type: String,
}

impl Validate for Acknowledgement {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("acknowledgement_id", &self.acknowledgement_id)?;
        validate::required("from_agency_id", &self.from_agency_id)?;
        validate::required("to_agency_id", &self.to_agency_id)?;
        validate::required("submission_type", &self.submission_type)?;
        validate::required("submission_id", &self.submission_id)?;
        validate::required("return_code", &self.return_code)?;

        validate::one_of("submission_type", &self.submission_type, SUBMISSION_TYPES)?;
        validate::one_of("return_code", &self.return_code, RETURN_CODES)?;

        validate::distinct(
            "from_agency_id",
            &self.from_agency_id,
            "to_agency_id",
            &self.to_agency_id,
        )?;

        validate::non_negative("record_count", self.record_count)
    }
}

impl Filterable for Acknowledgement {
    const FILTER_FIELDS: &'static [&'static str] =
        &["from_agency_id", "to_agency_id", "submission_type", "return_code"];

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "from_agency_id" => Some(&self.from_agency_id),
            "to_agency_id" => Some(&self.to_agency_id),
            "submission_type" => Some(&self.submission_type),
            "return_code" => Some(&self.return_code),
            _ => None,
        }
    }
}

impl Record for Acknowledgement {
    const DOC_TYPE: &'static str = "acknowledgement";

    fn stamp_created(&mut self, at: TimeStamp) {
        self.created_at = Some(at);
        self.doc_type = Self::DOC_TYPE.to_string();
    }
}
