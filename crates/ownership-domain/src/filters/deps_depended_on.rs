use crate::filtering::{FilterContext, OwnershipFilter};
use ownership_types::ids;

/// Keeps a record when another record of the full domain depends on it.
///
/// Resolves every dependency of every other record, so cost grows with the square of
/// the domain size.
pub struct DepsDependedOn;

impl OwnershipFilter for DepsDependedOn {
    fn id(&self) -> &str {
        ids::FILTER_DEPS_DEPENDED_ON
    }

    fn test(&self, ctx: &FilterContext<'_>) -> bool {
        ctx.domain
            .iter()
            .filter(|other| *other != ctx.candidate)
            .any(|other| {
                other
                    .resolved_dependencies()
                    .any(|(_, dependency)| &dependency == ctx.candidate)
            })
    }
}
