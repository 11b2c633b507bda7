//! Domain filtering: keep the records at least one filter accepts.

use crate::progress::{FilterObserver, ProgressTracker};
use ownership_types::OwnershipRecord;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// What a filter sees: the candidate and the whole unfiltered domain.
#[derive(Clone, Copy, Debug)]
pub struct FilterContext<'a> {
    pub candidate: &'a OwnershipRecord,
    pub domain: &'a [OwnershipRecord],
}

/// A pure predicate over a candidate record and its domain.
pub trait OwnershipFilter {
    /// Stable filter ID, used in logs and configuration.
    fn id(&self) -> &str;

    fn test(&self, ctx: &FilterContext<'_>) -> bool;
}

/// Adapter turning a closure into an [`OwnershipFilter`].
pub struct FnFilter<F> {
    id: String,
    predicate: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&FilterContext<'_>) -> bool,
{
    pub fn new(id: impl Into<String>, predicate: F) -> Self {
        Self {
            id: id.into(),
            predicate,
        }
    }
}

impl<F> OwnershipFilter for FnFilter<F>
where
    F: Fn(&FilterContext<'_>) -> bool,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn test(&self, ctx: &FilterContext<'_>) -> bool {
        (self.predicate)(ctx)
    }
}

#[derive(Clone, Debug, Default)]
pub struct FilteredDomain {
    pub records: BTreeSet<OwnershipRecord>,
    /// Longest time spent filtering a single candidate; zero when nothing was evaluated.
    pub longest: Duration,
    /// Candidates run through the filters.
    pub evaluated: usize,
}

/// Whether any filter accepts `candidate`.
pub fn accepts(
    candidate: &OwnershipRecord,
    domain: &[OwnershipRecord],
    filters: &[Box<dyn OwnershipFilter>],
) -> bool {
    let ctx = FilterContext { candidate, domain };
    filters.iter().any(|filter| filter.test(&ctx))
}

/// Filter `domain`, keeping every record accepted by at least one filter.
///
/// With no filters the whole domain is kept and the observer is never called.
pub fn filter_domain(
    domain: &[OwnershipRecord],
    filters: &[Box<dyn OwnershipFilter>],
    observer: &mut dyn FilterObserver,
) -> FilteredDomain {
    if filters.is_empty() {
        return FilteredDomain {
            records: domain.iter().cloned().collect(),
            ..FilteredDomain::default()
        };
    }

    let mut tracker = ProgressTracker::new(domain.len());
    let mut records = BTreeSet::new();

    for candidate in domain {
        let started = Instant::now();
        let keep = accepts(candidate, domain, filters);
        tracker.record(candidate.subject(), started.elapsed(), observer);

        if keep {
            records.insert(candidate.clone());
        }
    }

    FilteredDomain {
        records,
        longest: tracker.longest(),
        evaluated: tracker.processed(),
    }
}
