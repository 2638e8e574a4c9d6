//! Persisted key layout. These patterns are part of the stored format and must stay stable.

pub const AGENCY_PREFIX: &str = "AGENCY_";
pub const TAG_PREFIX: &str = "TAG_";
pub const CHARGE_PREFIX: &str = "CHARGE_";
pub const CORRECTION_PREFIX: &str = "CORRECTION_";
pub const SETTLEMENT_PREFIX: &str = "SETTLEMENT_";
pub const RECONCILIATION_PREFIX: &str = "RECON_";
pub const ACKNOWLEDGEMENT_PREFIX: &str = "ACK_";

pub const MAX_CORRECTION_SEQ: i64 = 999;

pub fn agency_key(agency_id: &str) -> String {
    format!("{AGENCY_PREFIX}{agency_id}")
}

pub fn tag_key(serial_number: &str) -> String {
    format!("{TAG_PREFIX}{serial_number}")
}

pub fn charge_key(charge_id: &str) -> String {
    format!("{CHARGE_PREFIX}{charge_id}")
}

/// Sequence is zero-padded to three digits so key order matches numeric order.
/// Callers validate the range first.
pub fn correction_key(original_charge_id: &str, seq: i64) -> String {
    format!("{CORRECTION_PREFIX}{original_charge_id}_{seq:03}")
}

pub fn corrections_of(original_charge_id: &str) -> String {
    format!("{CORRECTION_PREFIX}{original_charge_id}_")
}

pub fn settlement_key(settlement_id: &str) -> String {
    format!("{SETTLEMENT_PREFIX}{settlement_id}")
}

pub fn reconciliation_key(charge_id: &str) -> String {
    format!("{RECONCILIATION_PREFIX}{charge_id}")
}

pub fn acknowledgement_key(acknowledgement_id: &str) -> String {
    format!("{ACKNOWLEDGEMENT_PREFIX}{acknowledgement_id}")
}

/// Half-open range `[prefix, end)` covering every key that starts with `prefix`.
/// `end` is the prefix with its last character bumped by one.
pub fn prefix_range(prefix: &str) -> (String, String) {
    let mut end = prefix.to_string();
    match end.pop().and_then(|last| char::from_u32(last as u32 + 1)) {
        Some(next) => end.push(next),
        // empty prefix, or nothing sorts after the last char: scan to the end
        None => end.clear(),
    }
    (prefix.to_string(), end)
}
