//! Named-function dispatch surface.
//!
//! The host runtime invokes one function by name with a JSON payload. The payload
//! is decoded once into a typed request, handed to the matching [`RecordService`]
//! handler, and the result is returned as JSON. Failures keep their
//! classification so the wrapping boundary can map them to a response code.
use crate::context::InvocationContext;
use crate::error::{Error, ErrorKind, Result, ValidationError};
use crate::partition::Partition;
use crate::record;
use crate::scan::FieldFilter;
use crate::service::RecordService;
use crate::store::LedgerStore;
use crate::validate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FUNCTIONS: &[&str] = &[
    "CreateAgency",
    "GetAgency",
    "UpdateAgencyStatus",
    "ListAgencies",
    "CreateTag",
    "GetTag",
    "UpdateTagStatus",
    "ListTags",
    "CreateCharge",
    "GetCharge",
    "UpdateChargeStatus",
    "ListCharges",
    "CreateCorrection",
    "GetCorrection",
    "ListCorrections",
    "CreateReconciliation",
    "GetReconciliation",
    "ListReconciliations",
    "CreateSettlement",
    "GetSettlement",
    "UpdateSettlementStatus",
    "ListSettlements",
    "CreateAcknowledgement",
    "GetAcknowledgement",
    "ListAcknowledgements",
    "ResolvePartition",
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AgencyRequest {
    agency_id: String,
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TagRequest {
    tag_serial_number: String,
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChargeRequest {
    charge_id: String,
    away_agency_id: String,
    home_agency_id: String,
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CorrectionRequest {
    original_charge_id: String,
    correction_seq_no: Option<i64>,
    away_agency_id: String,
    home_agency_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettlementRequest {
    settlement_id: String,
    payor_agency_id: String,
    payee_agency_id: String,
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReconciliationRequest {
    charge_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AcknowledgementRequest {
    acknowledgement_id: String,
}

/// List over shared state
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListRequest {
    filter: Option<FieldFilter>,
}

/// List over the partition of an agency pair
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PairListRequest {
    agency_a: String,
    agency_b: String,
    original_charge_id: Option<String>,
    filter: Option<FieldFilter>,
}

/// Outcome of one invocation as seen by the wrapping boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Response {
    Ok { result: Value },
    Error(Failure),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: String,
    pub status_code: u16,
    pub message: String,
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        let kind: ErrorKind = err.kind();
        Failure {
            kind: kind.to_string(),
            status_code: kind.status_code(),
            message: err.to_string(),
        }
    }
}

impl Response {
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }
}

/// Invoke `function` and wrap the outcome for the boundary
pub fn respond<S: LedgerStore>(
    service: &RecordService<S>,
    ctx: &InvocationContext,
    function: &str,
    payload: &[u8],
) -> Response {
    match invoke(service, ctx, function, payload) {
        Ok(result) => Response::Ok { result },
        Err(err) => Response::Error(Failure::from(&err)),
    }
}

pub fn invoke<S: LedgerStore>(
    service: &RecordService<S>,
    ctx: &InvocationContext,
    function: &str,
    payload: &[u8],
) -> Result<Value> {
    tracing::debug!(function, caller = %ctx.caller_id, tx_id = %ctx.tx_id, "invoke");

    match function {
        "CreateAgency" => to_json(&service.create_agency(ctx, decode(payload)?)?),
        "GetAgency" => {
            let req: AgencyRequest = decode(payload)?;
            to_json(&service.get_agency(&req.agency_id)?)
        }
        "UpdateAgencyStatus" => {
            let req: AgencyRequest = decode(payload)?;
            to_json(&service.update_agency_status(ctx, &req.agency_id, &req.status)?)
        }
        "ListAgencies" => {
            let req: ListRequest = decode(payload)?;
            to_json(&service.list_agencies(req.filter.as_ref())?)
        }

        "CreateTag" => to_json(&service.create_tag(ctx, decode(payload)?)?),
        "GetTag" => {
            let req: TagRequest = decode(payload)?;
            to_json(&service.get_tag(&req.tag_serial_number)?)
        }
        "UpdateTagStatus" => {
            let req: TagRequest = decode(payload)?;
            to_json(&service.update_tag_status(ctx, &req.tag_serial_number, &req.status)?)
        }
        "ListTags" => {
            let req: ListRequest = decode(payload)?;
            to_json(&service.list_tags(req.filter.as_ref())?)
        }

        "CreateCharge" => to_json(&service.create_charge(ctx, decode(payload)?)?),
        "GetCharge" => {
            let req: ChargeRequest = decode(payload)?;
            to_json(&service.get_charge(
                &req.charge_id,
                &req.away_agency_id,
                &req.home_agency_id,
            )?)
        }
        "UpdateChargeStatus" => {
            let req: ChargeRequest = decode(payload)?;
            to_json(&service.update_charge_status(
                ctx,
                &req.charge_id,
                &req.away_agency_id,
                &req.home_agency_id,
                &req.status,
            )?)
        }
        "ListCharges" => {
            let req: PairListRequest = decode(payload)?;
            to_json(&service.list_charges(&req.agency_a, &req.agency_b, req.filter.as_ref())?)
        }

        "CreateCorrection" => to_json(&service.create_correction(ctx, decode(payload)?)?),
        "GetCorrection" => {
            let req: CorrectionRequest = decode(payload)?;
            validate::required("original_charge_id", &req.original_charge_id)?;
            let Some(seq) = req.correction_seq_no else {
                return Err(ValidationError::Required {
                    field: "correction_seq_no",
                }
                .into());
            };
            to_json(&service.get_correction(
                &req.original_charge_id,
                seq,
                &req.away_agency_id,
                &req.home_agency_id,
            )?)
        }
        "ListCorrections" => {
            let req: PairListRequest = decode(payload)?;
            to_json(&service.list_corrections(
                &req.agency_a,
                &req.agency_b,
                req.original_charge_id.as_deref(),
                req.filter.as_ref(),
            )?)
        }

        "CreateReconciliation" => to_json(&service.create_reconciliation(ctx, decode(payload)?)?),
        "GetReconciliation" => {
            let req: ReconciliationRequest = decode(payload)?;
            to_json(&service.get_reconciliation(&req.charge_id)?)
        }
        "ListReconciliations" => {
            let req: ListRequest = decode(payload)?;
            to_json(&service.list_reconciliations(req.filter.as_ref())?)
        }

        "CreateSettlement" => to_json(&service.create_settlement(ctx, decode(payload)?)?),
        "GetSettlement" => {
            let req: SettlementRequest = decode(payload)?;
            to_json(&service.get_settlement(
                &req.settlement_id,
                &req.payor_agency_id,
                &req.payee_agency_id,
            )?)
        }
        "UpdateSettlementStatus" => {
            let req: SettlementRequest = decode(payload)?;
            to_json(&service.update_settlement_status(
                ctx,
                &req.settlement_id,
                &req.payor_agency_id,
                &req.payee_agency_id,
                &req.status,
            )?)
        }
        "ListSettlements" => {
            let req: PairListRequest = decode(payload)?;
            to_json(&service.list_settlements(
                &req.agency_a,
                &req.agency_b,
                req.filter.as_ref(),
            )?)
        }

        "CreateAcknowledgement" => {
            to_json(&service.create_acknowledgement(ctx, decode(payload)?)?)
        }
        "GetAcknowledgement" => {
            let req: AcknowledgementRequest = decode(payload)?;
            to_json(&service.get_acknowledgement(&req.acknowledgement_id)?)
        }
        "ListAcknowledgements" => {
            let req: ListRequest = decode(payload)?;
            to_json(&service.list_acknowledgements(req.filter.as_ref())?)
        }

        "ResolvePartition" => {
            let req: PairListRequest = decode(payload)?;
            let partition = Partition::between(&req.agency_a, &req.agency_b)?;
            Ok(serde_json::json!({ "partition": partition }))
        }

        other => Err(ValidationError::NotPermitted {
            field: "function",
            value: other.to_string(),
            allowed: FUNCTIONS,
        }
        .into()),
    }
}

/// An empty payload decodes as the request's defaults
fn decode<T: DeserializeOwned + Default>(payload: &[u8]) -> std::result::Result<T, ValidationError> {
    if payload.trim_ascii().is_empty() {
        return Ok(T::default());
    }
    record::from_payload(payload)
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|err| Error::Codec(err.to_string()))
}
