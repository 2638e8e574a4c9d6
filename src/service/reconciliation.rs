use super::RecordService;
use crate::context::InvocationContext;
use crate::error::Result;
use crate::keys;
use crate::model::Reconciliation;
use crate::partition::Partition;
use crate::scan::FieldFilter;
use crate::store::{LedgerStore, Scope};
use crate::validate::{self, Validate};

impl<S: LedgerStore> RecordService<S> {
    /// Record the posting outcome of a charge. One per charge.
    pub fn create_reconciliation(
        &self,
        ctx: &InvocationContext,
        reconciliation: Reconciliation,
    ) -> Result<Reconciliation> {
        reconciliation.validate()?;
        let partition = Partition::between(
            &reconciliation.away_agency_id,
            &reconciliation.home_agency_id,
        )?;
        self.require_charge(&partition, &reconciliation.charge_id)?;

        let key = keys::reconciliation_key(&reconciliation.charge_id);
        self.insert(ctx, Scope::Shared, key, reconciliation)
    }

    pub fn get_reconciliation(&self, charge_id: &str) -> Result<Reconciliation> {
        validate::required("charge_id", charge_id)?;
        self.load(
            Scope::Shared,
            &keys::reconciliation_key(charge_id),
            charge_id,
        )
    }

    pub fn list_reconciliations(&self, filter: Option<&FieldFilter>) -> Result<Vec<Reconciliation>> {
        self.list(Scope::Shared, keys::RECONCILIATION_PREFIX, filter)
    }
}
