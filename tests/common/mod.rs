//! Record fixtures shared by the integration tests. Every fixture passes validation as built.
#![allow(dead_code)]

use toll_ledger::InvocationContext;
use toll_ledger::model::{
    Acknowledgement, Agency, Charge, Correction, Reconciliation, Settlement, Tag,
};
use toll_ledger::types::{Amount, TimeStamp};

pub fn at(day: u32) -> TimeStamp {
    TimeStamp::new_with(2024, 3, day, 12, 0, 0).unwrap()
}

pub fn ctx() -> InvocationContext {
    InvocationContext::new("NJTA", "tx-0001", at(15))
}

pub fn ctx_at(day: u32) -> InvocationContext {
    InvocationContext::new("NJTA", format!("tx-{day:04}"), at(day))
}

pub fn amount(value: &str) -> Amount {
    value.parse().unwrap()
}

pub fn agency(agency_id: &str) -> Agency {
    Agency {
        agency_id: agency_id.to_string(),
        name: format!("{agency_id} Toll Authority"),
        consortium: "E-ZPass".to_string(),
        state: "NJ".to_string(),
        role: "home_and_away".to_string(),
        connectivity: "direct".to_string(),
        protocols: vec!["TDM".to_string(), "6C".to_string()],
        status: "active".to_string(),
        ..Default::default()
    }
}

pub fn tag(serial: &str) -> Tag {
    Tag {
        tag_serial_number: serial.to_string(),
        tag_agency_id: "NJTA".to_string(),
        home_agency_id: "NJTA".to_string(),
        account_id: "ACCT-77".to_string(),
        tag_status: "valid".to_string(),
        tag_type: "single".to_string(),
        tag_protocol: "6C".to_string(),
        tag_class: 2,
        ..Default::default()
    }
}

pub fn charge(charge_id: &str, away: &str, home: &str) -> Charge {
    Charge {
        charge_id: charge_id.to_string(),
        record_type: "TC01".to_string(),
        protocol_type: "6C".to_string(),
        away_agency_id: away.to_string(),
        home_agency_id: home.to_string(),
        tag_serial_number: Some("0123".to_string()),
        facility_id: "GSP".to_string(),
        plaza_id: "P12".to_string(),
        lane_id: "L3".to_string(),
        exit_datetime: Some(at(1)),
        vehicle_class: 2,
        occupancy: 1,
        amount: Some(amount("4.75")),
        ..Default::default()
    }
}

pub fn correction(original_charge_id: &str, seq: i64, away: &str, home: &str) -> Correction {
    Correction {
        original_charge_id: original_charge_id.to_string(),
        correction_seq_no: seq,
        correction_reason: "I".to_string(),
        record_type: "TC01".to_string(),
        away_agency_id: away.to_string(),
        home_agency_id: home.to_string(),
        tag_serial_number: Some("0123".to_string()),
        vehicle_class: 2,
        amount: Some(amount("3.50")),
        ..Default::default()
    }
}

pub fn reconciliation(charge_id: &str, away: &str, home: &str) -> Reconciliation {
    Reconciliation {
        charge_id: charge_id.to_string(),
        away_agency_id: away.to_string(),
        home_agency_id: home.to_string(),
        posting_disposition: "P".to_string(),
        posted_amount: amount("4.75"),
        posted_datetime: Some(at(2)),
        ..Default::default()
    }
}

pub fn settlement(settlement_id: &str, payor: &str, payee: &str) -> Settlement {
    Settlement {
        settlement_id: settlement_id.to_string(),
        payor_agency_id: payor.to_string(),
        payee_agency_id: payee.to_string(),
        settlement_type: "net".to_string(),
        period_start: Some(at(1)),
        period_end: Some(at(7)),
        gross_amount: Some(amount("1250.00")),
        net_amount: Some(amount("1180.25")),
        charge_count: 250,
        ..Default::default()
    }
}

pub fn acknowledgement(acknowledgement_id: &str) -> Acknowledgement {
    Acknowledgement {
        acknowledgement_id: acknowledgement_id.to_string(),
        from_agency_id: "PANYNJ".to_string(),
        to_agency_id: "NJTA".to_string(),
        submission_type: "TRAN".to_string(),
        submission_id: "SUB-1".to_string(),
        return_code: "00".to_string(),
        record_count: 12,
        ..Default::default()
    }
}
