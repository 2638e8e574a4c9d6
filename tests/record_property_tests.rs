//! Property-based tests for partition routing, record encoding and the lifecycles
//!
//! These cover invariants that must hold for any input rather than hand-picked
//! cases: partition names ignore argument order, stored bytes survive a decode and
//! re-encode unchanged, the transition check agrees with the tables, duplicates are
//! refused without touching the first record, and validation always reports the
//! first broken rule.

mod common;

use common::*;
use proptest::prelude::*;
use std::fmt::Debug;
use rust_decimal::Decimal;
use toll_ledger::error::{ErrorKind, ValidationError};
use toll_ledger::lifecycle::{self, Lifecycle};
use toll_ledger::model::{
    Agency, Charge, ChargeStatus, Correction, PROTOCOLS, Reconciliation, Settlement,
    SettlementStatus, TagStatus,
};
use toll_ledger::partition::Partition;
use toll_ledger::record::{self, Record};
use toll_ledger::types::Amount;
use toll_ledger::validate::Validate;
use toll_ledger::{MemoryStore, RecordService};

// PROPERTY TEST STRATEGIES

fn agency_id_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,7}"
}

fn agency_pair_strategy() -> impl Strategy<Value = (String, String)> {
    (agency_id_strategy(), agency_id_strategy()).prop_filter("agencies must differ", |(a, b)| a != b)
}

/// Non-negative amounts with zero to four decimal places
fn amount_strategy() -> impl Strategy<Value = Amount> {
    (0i64..=10_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Amount::new(Decimal::new(mantissa, scale)))
}

fn charge_strategy() -> impl Strategy<Value = Charge> {
    (
        "[A-Z0-9-]{1,16}",
        agency_pair_strategy(),
        amount_strategy(),
        amount_strategy(),
        1i64..=9,
        1u32..=28,
        prop::option::of("[A-Z]{2}"),
    )
        .prop_map(|(charge_id, (away, home), amount, fee, class, day, discount)| {
            let mut charge = charge(&charge_id, &away, &home);
            charge.amount = Some(amount);
            charge.fee = fee;
            charge.vehicle_class = class;
            charge.exit_datetime = Some(at(day));
            charge.discount_plan_type = discount;
            charge
        })
}

fn settlement_strategy() -> impl Strategy<Value = Settlement> {
    (
        "[A-Z0-9-]{1,16}",
        agency_pair_strategy(),
        amount_strategy(),
        amount_strategy(),
        0i64..=100_000,
    )
        .prop_map(|(settlement_id, (payor, payee), gross, net, count)| {
            let mut settlement = settlement(&settlement_id, &payor, &payee);
            settlement.gross_amount = Some(gross);
            settlement.net_amount = Some(net);
            settlement.charge_count = count;
            settlement
        })
}

/// Agencies with one to four distinct protocols, optionally routed through a hub
fn agency_strategy() -> impl Strategy<Value = Agency> {
    (
        agency_id_strategy(),
        prop::sample::subsequence(PROTOCOLS, 1..=PROTOCOLS.len()),
        prop::sample::select(vec!["home", "away", "home_and_away", "hub"]),
        prop::sample::select(vec!["active", "suspended", "inactive"]),
        prop::option::of("[A-Z]{3}-HUB"),
        1u32..=28,
    )
        .prop_map(|(agency_id, protocols, role, status, hub_id, day)| {
            let mut agency = agency(&agency_id);
            agency.protocols = protocols.into_iter().map(str::to_string).collect();
            agency.role = role.to_string();
            agency.status = status.to_string();
            agency.connectivity = if hub_id.is_some() { "hub" } else { "direct" }.to_string();
            agency.hub_id = hub_id;
            agency.created_at = Some(at(day));
            agency
        })
}

fn correction_strategy() -> impl Strategy<Value = Correction> {
    (
        "[A-Z0-9-]{1,16}",
        0i64..=999,
        agency_pair_strategy(),
        prop::sample::select(vec!["C", "I", "L", "T", "O"]),
        amount_strategy(),
        amount_strategy(),
    )
        .prop_map(|(charge_id, seq, (away, home), reason, amount, fee)| {
            let mut correction = correction(&charge_id, seq, &away, &home);
            correction.correction_reason = reason.to_string();
            correction.amount = Some(amount);
            correction.fee = fee;
            correction
        })
}

/// Posted reconciliations carry a posting time, the other dispositions may omit it
fn reconciliation_strategy() -> impl Strategy<Value = Reconciliation> {
    (
        "[A-Z0-9-]{1,16}",
        agency_pair_strategy(),
        prop::sample::select(vec!["P", "D", "I", "N", "S", "T", "C", "O"]),
        amount_strategy(),
        prop::option::of(1u32..=28),
        0i64..=5,
    )
        .prop_map(|(charge_id, (away, home), disposition, posted, day, adjustments)| {
            let mut reconciliation = reconciliation(&charge_id, &away, &home);
            reconciliation.posting_disposition = disposition.to_string();
            reconciliation.posted_amount = posted;
            reconciliation.posted_datetime = match (disposition, day) {
                ("P", None) => Some(at(1)),
                (_, day) => day.map(at),
            };
            reconciliation.adjustment_count = adjustments;
            reconciliation
        })
}

/// Decoding stored bytes gives back the record, and re-encoding gives back the bytes
fn round_trips<R: Record + PartialEq + Debug>(record: &R) -> Result<(), TestCaseError> {
    prop_assert!(record.validate().is_ok(), "{:?}", record.validate());

    let bytes = record::encode(record).unwrap();
    let decoded: R = record::decode(&bytes).unwrap();
    prop_assert_eq!(&decoded, record);
    prop_assert_eq!(record::encode(&decoded).unwrap(), bytes);
    Ok(())
}

/// Required charge fields in the order they are checked
const CHARGE_REQUIRED: [&str; 8] = [
    "charge_id",
    "record_type",
    "protocol_type",
    "away_agency_id",
    "home_agency_id",
    "facility_id",
    "plaza_id",
    "lane_id",
];

fn blank(charge: &mut Charge, field: &str) {
    let slot = match field {
        "charge_id" => &mut charge.charge_id,
        "record_type" => &mut charge.record_type,
        "protocol_type" => &mut charge.protocol_type,
        "away_agency_id" => &mut charge.away_agency_id,
        "home_agency_id" => &mut charge.home_agency_id,
        "facility_id" => &mut charge.facility_id,
        "plaza_id" => &mut charge.plaza_id,
        "lane_id" => &mut charge.lane_id,
        other => panic!("no such field {other}"),
    };
    slot.clear();
}

/// Exhaustive check of one lifecycle against its own table
fn transition_check_matches_table<S: Lifecycle>() -> Result<(), TestCaseError> {
    for from in S::ALL {
        for to in S::ALL {
            let result = lifecycle::validate_transition::<S>(from.as_str(), to.as_str());
            let allowed = from != to && from.successors().contains(to);
            prop_assert_eq!(result.is_ok(), allowed, "{:?} -> {:?}", from, to);
        }
    }
    Ok(())
}

// PROPERTY TESTS
proptest! {
    /// Either agency order resolves the same partition, named after the sorted pair
    #[test]
    fn prop_partition_symmetry((a, b) in agency_pair_strategy()) {
        let ab = Partition::between(&a, &b).unwrap();
        let ba = Partition::between(&b, &a).unwrap();
        prop_assert_eq!(&ab, &ba);

        let (low, high) = if a < b { (&a, &b) } else { (&b, &a) };
        prop_assert_eq!(ab.as_str(), format!("charges_{low}_{high}"));
    }

    /// Stored charge bytes re-encode to the same bytes after a decode
    #[test]
    fn prop_charge_round_trip(charge in charge_strategy()) {
        round_trips(&charge)?;
    }

    #[test]
    fn prop_settlement_round_trip(settlement in settlement_strategy()) {
        round_trips(&settlement)?;
    }

    /// The protocol list keeps its length and order through storage
    #[test]
    fn prop_agency_round_trip(agency in agency_strategy()) {
        round_trips(&agency)?;
    }

    #[test]
    fn prop_correction_round_trip(correction in correction_strategy()) {
        round_trips(&correction)?;
    }

    #[test]
    fn prop_reconciliation_round_trip(reconciliation in reconciliation_strategy()) {
        round_trips(&reconciliation)?;
    }

    /// A second create under the same identity is a conflict and the first record stands
    #[test]
    fn prop_duplicate_create_rejected(agency_id in agency_id_strategy(), second_name in "[a-z ]{1,20}") {
        let service = RecordService::new(MemoryStore::new());
        let first = service.create_agency(&ctx_at(1), agency(&agency_id)).unwrap();

        let mut duplicate = agency(&agency_id);
        duplicate.name = second_name;
        let err = service.create_agency(&ctx_at(2), duplicate).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Conflict);
        prop_assert_eq!(service.get_agency(&agency_id).unwrap(), first);
    }

    /// With several rules broken at once, the earliest required field is the one reported
    #[test]
    fn prop_validation_reports_first_rule(blanked in prop::collection::vec(any::<bool>(), CHARGE_REQUIRED.len())) {
        let mut charge = charge("CHG-1", "A", "B");
        charge.status = "bogus".to_string();
        for (field, blank_it) in CHARGE_REQUIRED.iter().zip(&blanked) {
            if *blank_it {
                blank(&mut charge, field);
            }
        }

        let err = charge.validate().unwrap_err();
        match CHARGE_REQUIRED.iter().zip(&blanked).find(|(_, blank_it)| **blank_it) {
            Some((field, _)) => {
                prop_assert_eq!(err, ValidationError::Required { field: *field });
            }
            None => {
                let is_status_rejection = matches!(err, ValidationError::NotPermitted { field: "status", .. });
                prop_assert!(is_status_rejection);
            }
        }
    }
}

/// Every status reachable from the initial one is in the table, and the
/// transition check accepts exactly the table's edges.
#[test]
fn transition_tables_are_complete() {
    fn complete<S: Lifecycle>() {
        let reachable = lifecycle::reachable::<S>();
        for status in &reachable {
            assert!(S::ALL.contains(status));
            assert!(status.successors().iter().all(|next| S::ALL.contains(next)));
        }
        assert_eq!(reachable.len(), S::ALL.len(), "{} has unreachable statuses", S::ENTITY);
        transition_check_matches_table::<S>().unwrap();
    }

    complete::<TagStatus>();
    complete::<ChargeStatus>();
    complete::<SettlementStatus>();
}
