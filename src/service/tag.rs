use super::RecordService;
use crate::context::InvocationContext;
use crate::error::Result;
use crate::keys;
use crate::lifecycle::{self, Lifecycle};
use crate::model::{Tag, TagStatus};
use crate::scan::FieldFilter;
use crate::store::{LedgerStore, Scope};
use crate::validate::{self, Validate};

impl<S: LedgerStore> RecordService<S> {
    pub fn create_tag(&self, ctx: &InvocationContext, tag: Tag) -> Result<Tag> {
        tag.validate()?;
        let key = keys::tag_key(&tag.tag_serial_number);
        self.insert(ctx, Scope::Shared, key, tag)
    }

    pub fn get_tag(&self, tag_serial_number: &str) -> Result<Tag> {
        validate::required("tag_serial_number", tag_serial_number)?;
        self.load(
            Scope::Shared,
            &keys::tag_key(tag_serial_number),
            tag_serial_number,
        )
    }

    /// Move a tag to a new status if the tag table allows it
    pub fn update_tag_status(
        &self,
        ctx: &InvocationContext,
        tag_serial_number: &str,
        status: &str,
    ) -> Result<Tag> {
        validate::required("tag_serial_number", tag_serial_number)?;
        lifecycle::parse_target::<TagStatus>(status)?;

        let key = keys::tag_key(tag_serial_number);
        let mut tag: Tag = self.load(Scope::Shared, &key, tag_serial_number)?;
        let next = lifecycle::validate_transition::<TagStatus>(&tag.tag_status, status)?;

        tag.tag_status = next.as_str().to_string();
        self.replace(ctx, Scope::Shared, &key, tag, status)
    }

    pub fn list_tags(&self, filter: Option<&FieldFilter>) -> Result<Vec<Tag>> {
        self.list(Scope::Shared, keys::TAG_PREFIX, filter)
    }
}
