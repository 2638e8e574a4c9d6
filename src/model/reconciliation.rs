use crate::error::ValidationError;
use crate::record::{Filterable, Record};
use crate::types::{Amount, TimeStamp};
use crate::validate::{self, Validate};
use serde::{Deserialize, Serialize};

/// P posted, D duplicate, I invalid, N not posted, S system issue,
/// T tag/plate not on file, C account closed, O other
pub const POSTING_DISPOSITIONS: &[&str] = &["P", "D", "I", "N", "S", "T", "C", "O"];
pub const POSTED: &str = "P";

/// The home agency's posting outcome for one charge. At most one per charge, shared.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, minicbor::Encode, minicbor::Decode,
)]
#[serde(default)]
pub struct Reconciliation {
    #[n(0)]
    pub charge_id: String,
    #[n(1)]
    pub away_agency_id: String,
    #[n(2)]
    pub home_agency_id: String,
    #[n(3)]
    pub posting_disposition: String,
    #[n(4)]
    pub posted_amount: Amount,
    #[n(5)]
    pub posted_datetime: Option<TimeStamp>,
    #[n(6)]
    pub adjustment_count: i64,
    #[n(7)]
    pub resubmit_count: i64,
    #[n(8)]
    pub created_at: Option<TimeStamp>,
    #[n(9)]
    pub doc_type: String,
}

impl Validate for Reconciliation {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("charge_id", &self.charge_id)?;
        validate::required("away_agency_id", &self.away_agency_id)?;
        validate::required("home_agency_id", &self.home_agency_id)?;
        validate::required("posting_disposition", &self.posting_disposition)?;

        validate::one_of(
            "posting_disposition",
            &self.posting_disposition,
            POSTING_DISPOSITIONS,
        )?;

        validate::distinct(
            "away_agency_id",
            &self.away_agency_id,
            "home_agency_id",
            &self.home_agency_id,
        )?;
        if self.posting_disposition == POSTED && self.posted_datetime.is_none() {
            return Err(ValidationError::RequiredWhen {
                field: "posted_datetime",
                condition: "posting_disposition is P (posted)".to_string(),
            });
        }

        if let Some(posted) = &self.posted_datetime {
            validate::representable("posted_datetime", posted)?;
        }
        validate::non_negative_amount("posted_amount", &self.posted_amount)?;
        validate::non_negative("adjustment_count", self.adjustment_count)?;
        validate::non_negative("resubmit_count", self.resubmit_count)
    }
}

impl Filterable for Reconciliation {
    const FILTER_FIELDS: &'static [&'static str] =
        &["posting_disposition", "away_agency_id", "home_agency_id"];

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "posting_disposition" => Some(&self.posting_disposition),
            "away_agency_id" => Some(&self.away_agency_id),
            "home_agency_id" => Some(&self.home_agency_id),
            _ => None,
        }
    }
}

impl Record for Reconciliation {
    const DOC_TYPE: &'static str = "reconciliation";

    fn stamp_created(&mut self, at: TimeStamp) {
        self.created_at = Some(at);
        self.doc_type = Self::DOC_TYPE.to_string();
    }
}
