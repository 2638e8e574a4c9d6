use crate::error::ValidationError;
use crate::lifecycle::Lifecycle;
use crate::record::{Filterable, Record};
use crate::types::{Amount, TimeStamp};
use crate::validate::{self, Validate};
use serde::{Deserialize, Serialize};

pub const SETTLEMENT_TYPES: &[&str] = &["net", "gross"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettlementStatus {
    Draft,
    Submitted,
    Accepted,
    Disputed,
    Paid,
}

impl Lifecycle for SettlementStatus {
    const ENTITY: &'static str = "settlement";
    const ALL: &'static [Self] = &[
        SettlementStatus::Draft,
        SettlementStatus::Submitted,
        SettlementStatus::Accepted,
        SettlementStatus::Disputed,
        SettlementStatus::Paid,
    ];
    const NAMES: &'static [&'static str] = &["draft", "submitted", "accepted", "disputed", "paid"];
    const INITIAL: Self = SettlementStatus::Draft;

    fn as_str(self) -> &'static str {
        match self {
            SettlementStatus::Draft => "draft",
            SettlementStatus::Submitted => "submitted",
            SettlementStatus::Accepted => "accepted",
            SettlementStatus::Disputed => "disputed",
            SettlementStatus::Paid => "paid",
        }
    }

    fn successors(self) -> &'static [Self] {
        use SettlementStatus::*;
        match self {
            Draft => &[Submitted],
            Submitted => &[Accepted, Disputed],
            Accepted => &[Paid],
            Disputed => &[Submitted, Accepted],
            Paid => &[],
        }
    }
}

fn initial_status() -> String {
    SettlementStatus::INITIAL.as_str().to_string()
}

/// Funds owed by the payor agency to the payee agency for a period.
/// Stored in the pair's partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, minicbor::Encode, minicbor::Decode)]
#[serde(default)]
pub struct Settlement {
    #[n(0)]
    pub settlement_id: String,
    #[n(1)]
    pub payor_agency_id: String,
    #[n(2)]
    pub payee_agency_id: String,
    #[n(3)]
    pub settlement_type: String,
    #[n(4)]
    pub period_start: Option<TimeStamp>,
    #[n(5)]
    pub period_end: Option<TimeStamp>,
    #[n(6)]
    pub gross_amount: Option<Amount>,
    #[n(7)]
    pub net_amount: Option<Amount>,
    #[n(8)]
    pub charge_count: i64,
    #[n(9)]
    pub correction_count: i64,
    #[n(10)]
    #[serde(default = "initial_status")]
    pub status: String,
    #[n(11)]
    pub created_at: Option<TimeStamp>,
    #[n(12)]
    pub updated_at: Option<TimeStamp>,
    #[n(13)]
    pub doc_type: String,
}

impl Default for Settlement {
    fn default() -> Self {
        Self {
            settlement_id: String::new(),
            payor_agency_id: String::new(),
            payee_agency_id: String::new(),
            settlement_type: String::new(),
            period_start: None,
            period_end: None,
            gross_amount: None,
            net_amount: None,
            charge_count: 0,
            correction_count: 0,
            status: initial_status(),
            created_at: None,
            updated_at: None,
            doc_type: String::new(),
        }
    }
}

impl Validate for Settlement {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("settlement_id", &self.settlement_id)?;
        validate::required("payor_agency_id", &self.payor_agency_id)?;
        validate::required("payee_agency_id", &self.payee_agency_id)?;
        validate::required("settlement_type", &self.settlement_type)?;
        validate::required_some("period_start", self.period_start.as_ref())?;
        validate::required_some("period_end", self.period_end.as_ref())?;
        validate::required_some("gross_amount", self.gross_amount.as_ref())?;
        validate::required_some("net_amount", self.net_amount.as_ref())?;
        validate::required("status", &self.status)?;

        validate::one_of("settlement_type", &self.settlement_type, SETTLEMENT_TYPES)?;
        validate::one_of("status", &self.status, SettlementStatus::NAMES)?;

        validate::distinct(
            "payor_agency_id",
            &self.payor_agency_id,
            "payee_agency_id",
            &self.payee_agency_id,
        )?;
        if let (Some(start), Some(end)) = (&self.period_start, &self.period_end) {
            validate::not_after("period_start", start, "period_end", end)?;
        }

        for (field, at) in [("period_start", &self.period_start), ("period_end", &self.period_end)] {
            if let Some(at) = at {
                validate::representable(field, at)?;
            }
        }
        if let Some(gross) = &self.gross_amount {
            validate::non_negative_amount("gross_amount", gross)?;
        }
        if let Some(net) = &self.net_amount {
            validate::non_negative_amount("net_amount", net)?;
        }
        validate::non_negative("charge_count", self.charge_count)?;
        validate::non_negative("correction_count", self.correction_count)
    }
}

impl Filterable for Settlement {
    const FILTER_FIELDS: &'static [&'static str] =
        &["status", "settlement_type", "payor_agency_id", "payee_agency_id"];

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(&self.status),
            "settlement_type" => Some(&self.settlement_type),
            "payor_agency_id" => Some(&self.payor_agency_id),
            "payee_agency_id" => Some(&self.payee_agency_id),
            _ => None,
        }
    }
}

impl Record for Settlement {
    const DOC_TYPE: &'static str = "settlement";

    fn stamp_created(&mut self, at: TimeStamp) {
        self.created_at = Some(at);
        self.updated_at = Some(at);
        self.doc_type = Self::DOC_TYPE.to_string();
    }

    fn touch(&mut self, at: TimeStamp) {
        self.updated_at = Some(at);
    }
}
