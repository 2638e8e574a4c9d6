use crate::error::ValidationError;
use crate::lifecycle::Lifecycle;
use crate::model::PROTOCOLS;
use crate::record::{Filterable, Record};
use crate::types::TimeStamp;
use crate::validate::{self, Validate};
use serde::{Deserialize, Serialize};

pub const TAG_TYPES: &[&str] = &["single", "switchable"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagStatus {
    Valid,
    Invalid,
    Inactive,
    Lost,
    Stolen,
}

impl Lifecycle for TagStatus {
    const ENTITY: &'static str = "tag";
    const ALL: &'static [Self] = &[
        TagStatus::Valid,
        TagStatus::Invalid,
        TagStatus::Inactive,
        TagStatus::Lost,
        TagStatus::Stolen,
    ];
    const NAMES: &'static [&'static str] = &["valid", "invalid", "inactive", "lost", "stolen"];
    const INITIAL: Self = TagStatus::Valid;

    fn as_str(self) -> &'static str {
        match self {
            TagStatus::Valid => "valid",
            TagStatus::Invalid => "invalid",
            TagStatus::Inactive => "inactive",
            TagStatus::Lost => "lost",
            TagStatus::Stolen => "stolen",
        }
    }

    fn successors(self) -> &'static [Self] {
        use TagStatus::*;
        match self {
            Valid => &[Invalid, Inactive, Lost, Stolen],
            Invalid => &[Valid],
            Inactive => &[Valid, Invalid],
            Lost => &[Valid, Invalid],
            Stolen => &[Valid, Invalid],
        }
    }
}

/// A transponder issued by a home agency. Shared with every participant.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, minicbor::Encode, minicbor::Decode,
)]
#[serde(default)]
pub struct Tag {
    #[n(0)]
    pub tag_serial_number: String,
    #[n(1)]
    pub tag_agency_id: String, // agency that issued the tag id range
    #[n(2)]
    pub home_agency_id: String,
    #[n(3)]
    pub account_id: String,
    #[n(4)]
    pub tag_status: String,
    #[n(5)]
    pub tag_type: String,
    #[n(6)]
    pub tag_protocol: String,
    #[n(7)]
    pub tag_class: i64,
    #[n(8)]
    pub plate_number: Option<String>,
    #[n(9)]
    pub plate_state: Option<String>,
    #[n(10)]
    pub created_at: Option<TimeStamp>,
    #[n(11)]
    pub updated_at: Option<TimeStamp>,
    #[n(12)]
    pub doc_type: String,
}

impl Validate for Tag {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("tag_serial_number", &self.tag_serial_number)?;
        validate::required("tag_agency_id", &self.tag_agency_id)?;
        validate::required("home_agency_id", &self.home_agency_id)?;
        validate::required("account_id", &self.account_id)?;
        validate::required("tag_status", &self.tag_status)?;
        validate::required("tag_type", &self.tag_type)?;
        validate::required("tag_protocol", &self.tag_protocol)?;

        validate::one_of("tag_status", &self.tag_status, TagStatus::NAMES)?;
        validate::one_of("tag_type", &self.tag_type, TAG_TYPES)?;
        validate::one_of("tag_protocol", &self.tag_protocol, PROTOCOLS)?;

        if self.plate_number.as_deref().is_some_and(|plate| !plate.trim().is_empty()) {
            validate::required_when("plate_state", self.plate_state.as_deref().unwrap_or_default(), || {
                "plate_number is present".to_string()
            })?;
        }

        validate::at_least_one("tag_class", self.tag_class)
    }
}

impl Filterable for Tag {
    const FILTER_FIELDS: &'static [&'static str] = &[
        "tag_agency_id",
        "home_agency_id",
        "account_id",
        "tag_status",
        "tag_protocol",
    ];

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "tag_agency_id" => Some(&self.tag_agency_id),
            "home_agency_id" => Some(&self.home_agency_id),
            "account_id" => Some(&self.account_id),
            "tag_status" => Some(&self.tag_status),
            "tag_protocol" => Some(&self.tag_protocol),
            _ => None,
        }
    }
}

impl Record for Tag {
    const DOC_TYPE: &'static str = "tag";

    fn stamp_created(&mut self, at: TimeStamp) {
        self.created_at = Some(at);
        self.updated_at = Some(at);
        self.doc_type = Self::DOC_TYPE.to_string();
    }

    fn touch(&mut self, at: TimeStamp) {
        self.updated_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransitionError;
    use crate::lifecycle::validate_transition;

    fn tag() -> Tag {
        Tag {
            tag_serial_number: "0000123456".into(),
            tag_agency_id: "NJTA".into(),
            home_agency_id: "NJTA".into(),
            account_id: "ACCT-9".into(),
            tag_status: "valid".into(),
            tag_type: "single".into(),
            tag_protocol: "TDM".into(),
            tag_class: 2,
            ..Default::default()
        }
    }

    #[test]
    fn valid_tag() {
        assert_eq!(tag().validate(), Ok(()));
    }

    #[test]
    fn plate_number_needs_state() {
        let mut bad = tag();
        bad.plate_number = Some("ABC123".into());
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::RequiredWhen { field: "plate_state", .. })
        ));
    }

    #[test]
    fn class_zero_rejected() {
        let mut bad = tag();
        bad.tag_class = 0;
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::OutOfRange { field: "tag_class", .. })
        ));
    }

    #[test]
    fn stolen_tag_can_only_be_recovered_or_invalidated() {
        assert_eq!(
            validate_transition::<TagStatus>("valid", "stolen"),
            Ok(TagStatus::Stolen)
        );
        assert!(matches!(
            validate_transition::<TagStatus>("stolen", "lost"),
            Err(TransitionError::NotPermitted { .. })
        ));
        assert_eq!(
            validate_transition::<TagStatus>("stolen", "valid"),
            Ok(TagStatus::Valid)
        );
    }
}
