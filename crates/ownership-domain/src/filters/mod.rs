//! Built-in filters, selected and parameterized by [`EffectiveConfig`].

use crate::filtering::OwnershipFilter;
use crate::policy::{EffectiveConfig, FilterPolicy};
use ownership_types::ids;

mod class_matches;
mod class_unowned;
mod deps_depended_on;
mod methods_cross_team;
mod owner_in;


pub use class_matches::ClassMatches;
pub use class_unowned::ClassUnowned;
pub use deps_depended_on::DepsDependedOn;
pub use methods_cross_team::MethodsCrossTeam;
pub use owner_in::OwnerIn;

#[derive(Debug, thiserror::Error)]
pub enum FilterBuildError {
    #[error("unknown filter: {0}")]
    Unknown(String),
    #[error("filter {filter} requires at least one value")]
    MissingValues { filter: &'static str },
    #[error("invalid pattern for {filter}: {pattern}")]
    InvalidPattern {
        filter: &'static str,
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Instantiate every enabled filter, in filter ID order.
pub fn build_filters(
    cfg: &EffectiveConfig,
) -> Result<Vec<Box<dyn OwnershipFilter>>, FilterBuildError> {
    cfg.enabled_filters()
        .map(|(id, policy)| build_filter(id, policy))
        .collect()
}

pub fn build_filter(
    id: &str,
    policy: &FilterPolicy,
) -> Result<Box<dyn OwnershipFilter>, FilterBuildError> {
    let filter: Box<dyn OwnershipFilter> = match id {
        ids::FILTER_OWNER_IN => Box::new(OwnerIn::new(&policy.values)?),
        ids::FILTER_CLASS_MATCHES => Box::new(ClassMatches::new(&policy.values)?),
        ids::FILTER_CLASS_UNOWNED => Box::new(ClassUnowned),
        ids::FILTER_METHODS_CROSS_TEAM => Box::new(MethodsCrossTeam),
        ids::FILTER_DEPS_DEPENDED_ON => Box::new(DepsDependedOn),
        other => return Err(FilterBuildError::Unknown(other.to_string())),
    };
    Ok(filter)
}
