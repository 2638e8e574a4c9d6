//! Record types exchanged between agencies
pub mod acknowledgement;
pub mod agency;
pub mod charge;
pub mod correction;
pub mod reconciliation;
pub mod settlement;
pub mod tag;

pub use acknowledgement::Acknowledgement;
pub use agency::Agency;
pub use charge::{Charge, ChargeStatus};
pub use correction::Correction;
pub use reconciliation::Reconciliation;
pub use settlement::{Settlement, SettlementStatus};
pub use tag::{Tag, TagStatus};

use crate::error::ValidationError;
use crate::validate;

/// Tag protocols an agency can read
pub const PROTOCOLS: &[&str] = &["6C", "TDM", "SeGo", "ATA"];

/// Transaction record types. `T*` are tag-based, `V*` are plate (video) based.
pub const RECORD_TYPES: &[&str] = &["TB01", "TC01", "TC02", "VB01", "VC01", "VC02"];

pub fn is_tag_based(record_type: &str) -> bool {
    record_type.starts_with('T')
}

/// Tag-based records need a tag serial number; plate-based records need plate number and state.
pub(crate) fn vehicle_identification(
    record_type: &str,
    tag_serial_number: Option<&str>,
    plate_number: Option<&str>,
    plate_state: Option<&str>,
) -> Result<(), ValidationError> {
    if is_tag_based(record_type) {
        validate::required_when("tag_serial_number", tag_serial_number.unwrap_or_default(), || {
            format!("record_type is tag-based ({record_type})")
        })
    } else {
        let condition = || format!("record_type is plate-based ({record_type})");
        validate::required_when("plate_number", plate_number.unwrap_or_default(), condition)?;
        validate::required_when("plate_state", plate_state.unwrap_or_default(), condition)
    }
}
