use crate::style::{EdgeStyler, HashedStyler, RandomStyler};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StylingMode {
    /// Derived from edge endpoints; identical on every run.
    Hashed,
    /// Random, optionally seeded.
    Random { seed: Option<u64> },
}

impl StylingMode {
    pub fn styler(self) -> Box<dyn EdgeStyler> {
        match self {
            StylingMode::Hashed => Box::new(HashedStyler),
            StylingMode::Random { seed: Some(seed) } => Box::new(RandomStyler::seeded(seed)),
            StylingMode::Random { seed: None } => Box::new(RandomStyler::from_os_rng()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    pub enabled: bool,
    /// Filter-specific values (team names, glob patterns, ...).
    pub values: Vec<String>,
}

impl FilterPolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            values: Vec::new(),
        }
    }

    pub fn enabled_with(values: Vec<String>) -> Self {
        Self {
            enabled: true,
            values,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub styling: StylingMode,
    pub filters: BTreeMap<String, FilterPolicy>,
}

impl EffectiveConfig {
    pub fn filter_policy(&self, filter_id: &str) -> Option<&FilterPolicy> {
        self.filters.get(filter_id).filter(|p| p.enabled)
    }

    pub fn enabled_filters(&self) -> impl Iterator<Item = (&str, &FilterPolicy)> {
        self.filters
            .iter()
            .filter(|(_, p)| p.enabled)
            .map(|(id, p)| (id.as_str(), p))
    }
}
