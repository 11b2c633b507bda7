use super::FilterBuildError;
use crate::filtering::{FilterContext, OwnershipFilter};
use ownership_types::ids;
use std::collections::BTreeSet;

pub struct OwnerIn {
    teams: BTreeSet<String>,
}

impl OwnerIn {
    pub fn new(teams: &[String]) -> Result<Self, FilterBuildError> {
        if teams.is_empty() {
            return Err(FilterBuildError::MissingValues {
                filter: ids::FILTER_OWNER_IN,
            });
        }
        Ok(Self {
            teams: teams.iter().cloned().collect(),
        })
    }
}

impl OwnershipFilter for OwnerIn {
    fn id(&self) -> &str {
        ids::FILTER_OWNER_IN
    }

    fn test(&self, ctx: &FilterContext<'_>) -> bool {
        ctx.candidate
            .class_owner()
            .is_some_and(|owner| self.teams.contains(owner))
    }
}
