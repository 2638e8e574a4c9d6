use crate::error::ValidationError;
use crate::lifecycle::Lifecycle;
use crate::model::{PROTOCOLS, RECORD_TYPES, vehicle_identification};
use crate::record::{Filterable, Record};
use crate::types::{Amount, TimeStamp};
use crate::validate::{self, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChargeStatus {
    Pending,
    Posted,
    Rejected,
    Disputed,
    Settled,
}

impl Lifecycle for ChargeStatus {
    const ENTITY: &'static str = "charge";
    const ALL: &'static [Self] = &[
        ChargeStatus::Pending,
        ChargeStatus::Posted,
        ChargeStatus::Rejected,
        ChargeStatus::Disputed,
        ChargeStatus::Settled,
    ];
    const NAMES: &'static [&'static str] = &["pending", "posted", "rejected", "disputed", "settled"];
    const INITIAL: Self = ChargeStatus::Pending;

    fn as_str(self) -> &'static str {
        match self {
            ChargeStatus::Pending => "pending",
            ChargeStatus::Posted => "posted",
            ChargeStatus::Rejected => "rejected",
            ChargeStatus::Disputed => "disputed",
            ChargeStatus::Settled => "settled",
        }
    }

    fn successors(self) -> &'static [Self] {
        use ChargeStatus::*;
        match self {
            Pending => &[Posted, Rejected],
            Posted => &[Disputed, Settled],
            Disputed => &[Posted, Settled],
            Rejected => &[Pending],
            Settled => &[],
        }
    }
}

fn initial_status() -> String {
    ChargeStatus::INITIAL.as_str().to_string()
}

/// A toll transaction submitted by the away agency (where the vehicle travelled)
/// to the home agency (that holds the customer account). Stored in their shared partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, minicbor::Encode, minicbor::Decode)]
#[serde(default)]
pub struct Charge {
    #[n(0)]
    pub charge_id: String,
    #[n(1)]
    pub record_type: String,
    #[n(2)]
    pub protocol_type: String,
    #[n(3)]
    pub away_agency_id: String,
    #[n(4)]
    pub home_agency_id: String,
    #[n(5)]
    pub tag_serial_number: Option<String>,
    #[n(6)]
    pub plate_number: Option<String>,
    #[n(7)]
    pub plate_state: Option<String>,
    #[n(8)]
    pub plate_type: Option<String>,
    #[n(9)]
    pub facility_id: String,
    #[n(10)]
    pub plaza_id: String,
    #[n(11)]
    pub lane_id: String,
    #[n(12)]
    pub entry_plaza_id: Option<String>,
    #[n(13)]
    pub entry_datetime: Option<TimeStamp>,
    #[n(14)]
    pub exit_datetime: Option<TimeStamp>,
    #[n(15)]
    pub vehicle_class: i64,
    #[n(16)]
    pub occupancy: i64,
    #[n(17)]
    pub amount: Option<Amount>,
    #[n(18)]
    pub fee: Amount,
    #[n(19)]
    pub discount_plan_type: Option<String>,
    #[n(20)]
    #[serde(default = "initial_status")]
    pub status: String,
    #[n(21)]
    pub created_at: Option<TimeStamp>,
    #[n(22)]
    pub updated_at: Option<TimeStamp>,
    #[n(23)]
    pub doc_type: String,
}

impl Default for Charge {
    fn default() -> Self {
        Self {
            charge_id: String::new(),
            record_type: String::new(),
            protocol_type: String::new(),
            away_agency_id: String::new(),
            home_agency_id: String::new(),
            tag_serial_number: None,
            plate_number: None,
            plate_state: None,
            plate_type: None,
            facility_id: String::new(),
            plaza_id: String::new(),
            lane_id: String::new(),
            entry_plaza_id: None,
            entry_datetime: None,
            exit_datetime: None,
            vehicle_class: 0,
            occupancy: 0,
            amount: None,
            fee: Amount::default(),
            discount_plan_type: None,
            status: initial_status(),
            created_at: None,
            updated_at: None,
            doc_type: String::new(),
        }
    }
}

impl Validate for Charge {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("charge_id", &self.charge_id)?;
        validate::required("record_type", &self.record_type)?;
        validate::required("protocol_type", &self.protocol_type)?;
        validate::required("away_agency_id", &self.away_agency_id)?;
        validate::required("home_agency_id", &self.home_agency_id)?;
        validate::required("facility_id", &self.facility_id)?;
        validate::required("plaza_id", &self.plaza_id)?;
        validate::required("lane_id", &self.lane_id)?;
        validate::required_some("exit_datetime", self.exit_datetime.as_ref())?;
        validate::required_some("amount", self.amount.as_ref())?;
        validate::required("status", &self.status)?;

        validate::one_of("record_type", &self.record_type, RECORD_TYPES)?;
        validate::one_of("protocol_type", &self.protocol_type, PROTOCOLS)?;
        validate::one_of("status", &self.status, ChargeStatus::NAMES)?;

        validate::distinct(
            "away_agency_id",
            &self.away_agency_id,
            "home_agency_id",
            &self.home_agency_id,
        )?;
        if let (Some(entry), Some(exit)) = (&self.entry_datetime, &self.exit_datetime) {
            validate::not_after("entry_datetime", entry, "exit_datetime", exit)?;
        }

        vehicle_identification(
            &self.record_type,
            self.tag_serial_number.as_deref(),
            self.plate_number.as_deref(),
            self.plate_state.as_deref(),
        )?;

        for (field, at) in [
            ("entry_datetime", &self.entry_datetime),
            ("exit_datetime", &self.exit_datetime),
        ] {
            if let Some(at) = at {
                validate::representable(field, at)?;
            }
        }
        if let Some(amount) = &self.amount {
            validate::non_negative_amount("amount", amount)?;
        }
        validate::non_negative_amount("fee", &self.fee)?;
        validate::at_least_one("vehicle_class", self.vehicle_class)?;
        validate::non_negative("occupancy", self.occupancy)
    }
}

impl Filterable for Charge {
    const FILTER_FIELDS: &'static [&'static str] = &[
        "status",
        "record_type",
        "away_agency_id",
        "home_agency_id",
        "facility_id",
        "tag_serial_number",
    ];

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(&self.status),
            "record_type" => Some(&self.record_type),
            "away_agency_id" => Some(&self.away_agency_id),
            "home_agency_id" => Some(&self.home_agency_id),
            "facility_id" => Some(&self.facility_id),
            "tag_serial_number" => self.tag_serial_number.as_deref(),
            _ => None,
        }
    }
}

impl Record for Charge {
    const DOC_TYPE: &'static str = "charge";

    fn stamp_created(&mut self, at: TimeStamp) {
        self.created_at = Some(at);
        self.updated_at = Some(at);
        self.doc_type = Self::DOC_TYPE.to_string();
    }

    fn touch(&mut self, at: TimeStamp) {
        self.updated_at = Some(at);
    }
}
