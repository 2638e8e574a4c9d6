use super::RecordService;
use crate::context::InvocationContext;
use crate::error::{Result, TransitionError};
use crate::keys;
use crate::model::Agency;
use crate::model::agency::AGENCY_STATUSES;
use crate::scan::FieldFilter;
use crate::store::{LedgerStore, Scope};
use crate::validate::{self, Validate};

impl<S: LedgerStore> RecordService<S> {
    /// Register a new agency
    pub fn create_agency(&self, ctx: &InvocationContext, agency: Agency) -> Result<Agency> {
        agency.validate()?;
        let key = keys::agency_key(&agency.agency_id);
        self.insert(ctx, Scope::Shared, key, agency)
    }

    pub fn get_agency(&self, agency_id: &str) -> Result<Agency> {
        validate::required("agency_id", agency_id)?;
        self.load(Scope::Shared, &keys::agency_key(agency_id), agency_id)
    }

    /// Agencies have no transition table: any listed status other than the current one.
    pub fn update_agency_status(
        &self,
        ctx: &InvocationContext,
        agency_id: &str,
        status: &str,
    ) -> Result<Agency> {
        validate::required("agency_id", agency_id)?;
        validate::one_of("status", status, AGENCY_STATUSES)?;

        let key = keys::agency_key(agency_id);
        let mut agency: Agency = self.load(Scope::Shared, &key, agency_id)?;
        if agency.status == status {
            return Err(TransitionError::AlreadyInStatus {
                entity: "agency",
                status: status.to_string(),
            }
            .into());
        }

        agency.status = status.to_string();
        self.replace(ctx, Scope::Shared, &key, agency, status)
    }

    pub fn list_agencies(&self, filter: Option<&FieldFilter>) -> Result<Vec<Agency>> {
        self.list(Scope::Shared, keys::AGENCY_PREFIX, filter)
    }
}
