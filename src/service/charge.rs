use super::RecordService;
use crate::context::InvocationContext;
use crate::error::Result;
use crate::keys;
use crate::lifecycle::{self, Lifecycle};
use crate::model::{Charge, ChargeStatus};
use crate::partition::Partition;
use crate::scan::FieldFilter;
use crate::store::{LedgerStore, Scope};
use crate::validate::{self, Validate};

impl<S: LedgerStore> RecordService<S> {
    /// Submit a charge into the away/home partition
    pub fn create_charge(&self, ctx: &InvocationContext, charge: Charge) -> Result<Charge> {
        charge.validate()?;
        let partition = Partition::between(&charge.away_agency_id, &charge.home_agency_id)?;
        let key = keys::charge_key(&charge.charge_id);
        self.insert(ctx, Scope::Partition(&partition), key, charge)
    }

    /// Either agency order resolves the same partition
    pub fn get_charge(
        &self,
        charge_id: &str,
        away_agency_id: &str,
        home_agency_id: &str,
    ) -> Result<Charge> {
        validate::required("charge_id", charge_id)?;
        let partition = Partition::between_fields(
            "away_agency_id",
            away_agency_id,
            "home_agency_id",
            home_agency_id,
        )?;
        self.load(
            Scope::Partition(&partition),
            &keys::charge_key(charge_id),
            charge_id,
        )
    }

    pub fn update_charge_status(
        &self,
        ctx: &InvocationContext,
        charge_id: &str,
        away_agency_id: &str,
        home_agency_id: &str,
        status: &str,
    ) -> Result<Charge> {
        validate::required("charge_id", charge_id)?;
        lifecycle::parse_target::<ChargeStatus>(status)?;
        let partition = Partition::between_fields(
            "away_agency_id",
            away_agency_id,
            "home_agency_id",
            home_agency_id,
        )?;

        let scope = Scope::Partition(&partition);
        let key = keys::charge_key(charge_id);
        let mut charge: Charge = self.load(scope, &key, charge_id)?;
        let next = lifecycle::validate_transition::<ChargeStatus>(&charge.status, status)?;

        charge.status = next.as_str().to_string();
        self.replace(ctx, scope, &key, charge, status)
    }

    /// Charges exchanged between two agencies
    pub fn list_charges(
        &self,
        agency_a: &str,
        agency_b: &str,
        filter: Option<&FieldFilter>,
    ) -> Result<Vec<Charge>> {
        let partition = Partition::between(agency_a, agency_b)?;
        self.list(Scope::Partition(&partition), keys::CHARGE_PREFIX, filter)
    }
}
