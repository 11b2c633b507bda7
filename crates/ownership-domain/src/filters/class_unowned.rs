use crate::filtering::{FilterContext, OwnershipFilter};
use ownership_types::ids;

pub struct ClassUnowned;

impl OwnershipFilter for ClassUnowned {
    fn id(&self) -> &str {
        ids::FILTER_CLASS_UNOWNED
    }

    fn test(&self, ctx: &FilterContext<'_>) -> bool {
        ctx.candidate.class_owner().is_none()
    }
}
