use super::RecordService;
use crate::context::InvocationContext;
use crate::error::Result;
use crate::keys;
use crate::model::Acknowledgement;
use crate::scan::FieldFilter;
use crate::store::{LedgerStore, Scope};
use crate::validate::{self, Validate};

impl<S: LedgerStore> RecordService<S> {
    pub fn create_acknowledgement(
        &self,
        ctx: &InvocationContext,
        acknowledgement: Acknowledgement,
    ) -> Result<Acknowledgement> {
        acknowledgement.validate()?;
        let key = keys::acknowledgement_key(&acknowledgement.acknowledgement_id);
        self.insert(ctx, Scope::Shared, key, acknowledgement)
    }

    pub fn get_acknowledgement(&self, acknowledgement_id: &str) -> Result<Acknowledgement> {
        validate::required("acknowledgement_id", acknowledgement_id)?;
        self.load(
            Scope::Shared,
            &keys::acknowledgement_key(acknowledgement_id),
            acknowledgement_id,
        )
    }

    pub fn list_acknowledgements(
        &self,
        filter: Option<&FieldFilter>,
    ) -> Result<Vec<Acknowledgement>> {
        self.list(Scope::Shared, keys::ACKNOWLEDGEMENT_PREFIX, filter)
    }
}
