use super::RecordService;
use crate::context::InvocationContext;
use crate::error::Result;
use crate::keys;
use crate::lifecycle::{self, Lifecycle};
use crate::model::{Settlement, SettlementStatus};
use crate::partition::Partition;
use crate::scan::FieldFilter;
use crate::store::{LedgerStore, Scope};
use crate::validate::{self, Validate};

impl<S: LedgerStore> RecordService<S> {
    pub fn create_settlement(
        &self,
        ctx: &InvocationContext,
        settlement: Settlement,
    ) -> Result<Settlement> {
        settlement.validate()?;
        let partition = Partition::between(
            &settlement.payor_agency_id,
            &settlement.payee_agency_id,
        )?;
        let key = keys::settlement_key(&settlement.settlement_id);
        self.insert(ctx, Scope::Partition(&partition), key, settlement)
    }

    pub fn get_settlement(
        &self,
        settlement_id: &str,
        payor_agency_id: &str,
        payee_agency_id: &str,
    ) -> Result<Settlement> {
        validate::required("settlement_id", settlement_id)?;
        let partition = Partition::between_fields(
            "payor_agency_id",
            payor_agency_id,
            "payee_agency_id",
            payee_agency_id,
        )?;
        self.load(
            Scope::Partition(&partition),
            &keys::settlement_key(settlement_id),
            settlement_id,
        )
    }

    pub fn update_settlement_status(
        &self,
        ctx: &InvocationContext,
        settlement_id: &str,
        payor_agency_id: &str,
        payee_agency_id: &str,
        status: &str,
    ) -> Result<Settlement> {
        validate::required("settlement_id", settlement_id)?;
        lifecycle::parse_target::<SettlementStatus>(status)?;
        let partition = Partition::between_fields(
            "payor_agency_id",
            payor_agency_id,
            "payee_agency_id",
            payee_agency_id,
        )?;

        let scope = Scope::Partition(&partition);
        let key = keys::settlement_key(settlement_id);
        let mut settlement: Settlement = self.load(scope, &key, settlement_id)?;
        let next =
            lifecycle::validate_transition::<SettlementStatus>(&settlement.status, status)?;

        settlement.status = next.as_str().to_string();
        self.replace(ctx, scope, &key, settlement, status)
    }

    pub fn list_settlements(
        &self,
        agency_a: &str,
        agency_b: &str,
        filter: Option<&FieldFilter>,
    ) -> Result<Vec<Settlement>> {
        let partition = Partition::between(agency_a, agency_b)?;
        self.list(Scope::Partition(&partition), keys::SETTLEMENT_PREFIX, filter)
    }
}
