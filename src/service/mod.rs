//! Record handlers: create / get / update-status / list per record type.
//!
//! Every handler validates before touching the store, resolves the key (and the
//! bilateral partition where one applies), and reads before it writes. No handler
//! writes more than one record.
use crate::context::InvocationContext;
use crate::error::{Error, Result};
use crate::partition::Partition;
use crate::record::{self, Record};
use crate::scan::{self, FieldFilter};
use crate::store::{LedgerStore, Scope};

mod acknowledgement;
mod agency;
mod charge;
mod correction;
mod reconciliation;
mod settlement;
mod tag;

pub struct RecordService<S> {
    store: S,
}

impl<S: LedgerStore> RecordService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stamp and write a validated record, refusing to overwrite an existing key
    fn insert<R: Record>(
        &self,
        ctx: &InvocationContext,
        scope: Scope<'_>,
        key: String,
        mut record: R,
    ) -> Result<R> {
        if scope.get(&self.store, &key)?.is_some() {
            return Err(Error::AlreadyExists {
                kind: R::DOC_TYPE,
                key,
            });
        }

        record.stamp_created(ctx.timestamp());
        scope.put(&self.store, &key, record::encode(&record)?)?;

        tracing::debug!(
            doc_type = R::DOC_TYPE,
            %key,
            %scope,
            tx_id = %ctx.tx_id,
            "record created"
        );
        Ok(record)
    }

    fn load<R: Record>(&self, scope: Scope<'_>, key: &str, id: &str) -> Result<R> {
        let bytes = scope
            .get(&self.store, key)?
            .ok_or_else(|| Error::NotFound {
                kind: R::DOC_TYPE,
                id: id.to_string(),
            })?;
        record::decode(&bytes)
    }

    /// Rewrite a whole record under its existing key after a status change
    fn replace<R: Record>(
        &self,
        ctx: &InvocationContext,
        scope: Scope<'_>,
        key: &str,
        mut record: R,
        status: &str,
    ) -> Result<R> {
        record.touch(ctx.timestamp());
        record.validate()?;
        scope.put(&self.store, key, record::encode(&record)?)?;

        tracing::debug!(
            doc_type = R::DOC_TYPE,
            %key,
            %scope,
            status,
            tx_id = %ctx.tx_id,
            "status updated"
        );
        Ok(record)
    }

    fn list<R: Record>(
        &self,
        scope: Scope<'_>,
        prefix: &str,
        filter: Option<&FieldFilter>,
    ) -> Result<Vec<R>> {
        scan::scan_prefix(&self.store, scope, prefix, filter)
    }

    /// Fail with not-found unless the charge is on file in `partition`
    fn require_charge(&self, partition: &Partition, charge_id: &str) -> Result<()> {
        let key = crate::keys::charge_key(charge_id);
        if Scope::Partition(partition).get(&self.store, &key)?.is_none() {
            return Err(Error::NotFound {
                kind: crate::model::Charge::DOC_TYPE,
                id: charge_id.to_string(),
            });
        }
        Ok(())
    }
}
