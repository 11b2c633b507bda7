use super::FilterBuildError;
use crate::filtering::{FilterContext, OwnershipFilter};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ownership_types::ids;

pub struct ClassMatches {
    patterns: GlobSet,
}

impl ClassMatches {
    pub fn new(patterns: &[String]) -> Result<Self, FilterBuildError> {
        if patterns.is_empty() {
            return Err(FilterBuildError::MissingValues {
                filter: ids::FILTER_CLASS_MATCHES,
            });
        }

        let invalid = |pattern: &str, source: globset::Error| FilterBuildError::InvalidPattern {
            filter: ids::FILTER_CLASS_MATCHES,
            pattern: pattern.to_string(),
            source,
        };

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern).map_err(|e| invalid(pattern, e))?);
        }
        let patterns = builder.build().map_err(|e| invalid("<set>", e))?;
        Ok(Self { patterns })
    }
}

impl OwnershipFilter for ClassMatches {
    fn id(&self) -> &str {
        ids::FILTER_CLASS_MATCHES
    }

    fn test(&self, ctx: &FilterContext<'_>) -> bool {
        self.patterns.is_match(ctx.candidate.subject().as_str())
    }
}
