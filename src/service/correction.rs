use super::RecordService;
use crate::context::InvocationContext;
use crate::error::Result;
use crate::keys;
use crate::model::Correction;
use crate::partition::Partition;
use crate::scan::{self, FieldFilter};
use crate::store::{LedgerStore, Scope};
use crate::validate::{self, Validate};

impl<S: LedgerStore> RecordService<S> {
    /// Append a correction to a charge already on file in the same partition
    pub fn create_correction(
        &self,
        ctx: &InvocationContext,
        correction: Correction,
    ) -> Result<Correction> {
        correction.validate()?;
        let partition =
            Partition::between(&correction.away_agency_id, &correction.home_agency_id)?;
        self.require_charge(&partition, &correction.original_charge_id)?;

        let key = keys::correction_key(
            &correction.original_charge_id,
            correction.correction_seq_no,
        );
        self.insert(ctx, Scope::Partition(&partition), key, correction)
    }

    pub fn get_correction(
        &self,
        original_charge_id: &str,
        correction_seq_no: i64,
        away_agency_id: &str,
        home_agency_id: &str,
    ) -> Result<Correction> {
        validate::required("original_charge_id", original_charge_id)?;
        validate::sequence_number("correction_seq_no", correction_seq_no)?;
        let partition = Partition::between_fields(
            "away_agency_id",
            away_agency_id,
            "home_agency_id",
            home_agency_id,
        )?;

        let key = keys::correction_key(original_charge_id, correction_seq_no);
        self.load(Scope::Partition(&partition), &key, &key)
    }

    /// Corrections in a partition, in sequence order when narrowed to one charge
    pub fn list_corrections(
        &self,
        agency_a: &str,
        agency_b: &str,
        original_charge_id: Option<&str>,
        filter: Option<&FieldFilter>,
    ) -> Result<Vec<Correction>> {
        let partition = Partition::between(agency_a, agency_b)?;
        let scope = Scope::Partition(&partition);

        let Some(charge_id) = original_charge_id else {
            return self.list(scope, keys::CORRECTION_PREFIX, filter);
        };

        if let Some(filter) = filter {
            filter.check::<Correction>()?;
        }
        // charge ids may themselves contain '_', so the prefix alone is not enough
        let (start, end) = keys::prefix_range(&keys::corrections_of(charge_id));
        scan::scan_with(&self.store, scope, &start, &end, |correction: &Correction| {
            correction.original_charge_id == charge_id
                && filter.is_none_or(|filter| filter.matches(correction))
        })
    }
}
