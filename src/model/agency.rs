use crate::error::ValidationError;
use crate::model::PROTOCOLS;
use crate::record::{Filterable, Record};
use crate::types::TimeStamp;
use crate::validate::{self, Validate};
use serde::{Deserialize, Serialize};

pub const AGENCY_ROLES: &[&str] = &["home", "away", "home_and_away", "hub"];
pub const CONNECTIVITY: &[&str] = &["direct", "hub"];
pub const AGENCY_STATUSES: &[&str] = &["active", "suspended", "inactive"];

/// A toll agency participating in interoperability. Shared with every participant.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, minicbor::Encode, minicbor::Decode,
)]
#[serde(default)]
pub struct Agency {
    #[n(0)]
    pub agency_id: String,
    #[n(1)]
    pub name: String,
    #[n(2)]
    pub consortium: String,
    #[n(3)]
    pub state: String,
    #[n(4)]
    pub role: String,
    #[n(5)]
    pub connectivity: String,
    #[n(6)]
    pub hub_id: Option<String>, // required when routed through a hub
    #[n(7)]
    pub protocols: Vec<String>,
    #[n(8)]
    pub status: String,
    #[n(9)]
    pub created_at: Option<TimeStamp>,
    #[n(10)]
    pub updated_at: Option<TimeStamp>,
    #[n(11)]
    pub doc_type: String,
}

impl Validate for Agency {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("agency_id", &self.agency_id)?;
        validate::required("name", &self.name)?;
        validate::required("consortium", &self.consortium)?;
        validate::required("state", &self.state)?;
        validate::required("role", &self.role)?;
        validate::required("connectivity", &self.connectivity)?;
        validate::required("status", &self.status)?;
        validate::required_list("protocols", &self.protocols)?;

        validate::one_of("role", &self.role, AGENCY_ROLES)?;
        validate::one_of("connectivity", &self.connectivity, CONNECTIVITY)?;
        validate::one_of("status", &self.status, AGENCY_STATUSES)?;
        for protocol in &self.protocols {
            validate::one_of("protocols", protocol, PROTOCOLS)?;
        }

        if self.connectivity == "hub" {
            validate::required_when("hub_id", self.hub_id.as_deref().unwrap_or_default(), || {
                "connectivity is hub".to_string()
            })?;
        }
        Ok(())
    }
}

impl Filterable for Agency {
    const FILTER_FIELDS: &'static [&'static str] =
        &["agency_id", "status", "role", "connectivity", "consortium", "state"];

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "agency_id" => Some(&self.agency_id),
            "status" => Some(&self.status),
            "role" => Some(&self.role),
            "connectivity" => Some(&self.connectivity),
            "consortium" => Some(&self.consortium),
            "state" => Some(&self.state),
            _ => None,
        }
    }
}

impl Record for Agency {
    const DOC_TYPE: &'static str = "agency";

    fn stamp_created(&mut self, at: TimeStamp) {
        self.created_at = Some(at);
        self.updated_at = Some(at);
        self.doc_type = Self::DOC_TYPE.to_string();
    }

    fn touch(&mut self, at: TimeStamp) {
        self.updated_at = Some(at);
    }
}
