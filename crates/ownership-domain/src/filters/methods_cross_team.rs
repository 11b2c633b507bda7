use crate::filtering::{FilterContext, OwnershipFilter};
use ownership_types::ids;

pub struct MethodsCrossTeam;

impl OwnershipFilter for MethodsCrossTeam {
    fn id(&self) -> &str {
        ids::FILTER_METHODS_CROSS_TEAM
    }

    fn test(&self, ctx: &FilterContext<'_>) -> bool {
        let class_owner = ctx.candidate.class_owner();
        ctx.candidate
            .method_owners()
            .values()
            .any(|team| Some(team.as_str()) != class_owner)
    }
}
