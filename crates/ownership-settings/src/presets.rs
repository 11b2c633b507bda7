use ownership_domain::policy::{EffectiveConfig, FilterPolicy, StylingMode};
use ownership_types::ids::*;
use std::collections::BTreeMap;

/// Preset profiles: named sets of enabled filters.
///
/// Unknown names are rejected during resolution, before this is called.
pub fn preset(profile: &str) -> EffectiveConfig {
    let filters = match profile {
        PROFILE_CROSS_TEAM => enabled(&[FILTER_METHODS_CROSS_TEAM, FILTER_DEPS_DEPENDED_ON]),
        PROFILE_UNOWNED => enabled(&[FILTER_CLASS_UNOWNED]),
        _ => BTreeMap::new(),
    };

    EffectiveConfig {
        profile: profile.to_string(),
        styling: StylingMode::Hashed,
        filters,
    }
}

pub(crate) fn known_profile(profile: &str) -> bool {
    matches!(profile, PROFILE_ALL | PROFILE_CROSS_TEAM | PROFILE_UNOWNED)
}

fn enabled(ids: &[&str]) -> BTreeMap<String, FilterPolicy> {
    ids.iter()
        .map(|id| (id.to_string(), FilterPolicy::enabled()))
        .collect()
}
