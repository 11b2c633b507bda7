//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Filtering (identity without filters, subset with filters, order independence)
//! - Graph construction (one component per record, owner grouping loses nothing)
//! - Relationship derivation (no team self-loops, dependency edges match lookups)

use crate::filtering::{FnFilter, OwnershipFilter, filter_domain};
use crate::graph::{build_graph, group_owners};
use crate::progress::NoopObserver;
use crate::relationships::{NodeRef, derive_relationships};
use crate::test_support::{FixedStyler, RecordingObserver};
use ownership_types::{DependencyLookup, OwnershipRecord};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

const TEAMS: &[&str] = &["TeamA", "TeamB", "TeamC", "TeamD"];

fn arb_team() -> impl Strategy<Value = String> {
    prop::sample::select(TEAMS).prop_map(|t| t.to_string())
}

/// Shape of one class before dependency lookups are wired.
#[derive(Clone, Debug)]
struct ClassShape {
    owner: Option<String>,
    methods: Vec<String>,
    /// Indices into the domain; out-of-range indices become absent dependencies.
    dependencies: Vec<usize>,
    /// Duplicate of an earlier subject, to exercise deduplication.
    alias_of: Option<usize>,
}

fn arb_class_shape() -> impl Strategy<Value = ClassShape> {
    (
        prop::option::of(arb_team()),
        prop::collection::vec(arb_team(), 0..4),
        prop::collection::vec(0usize..40, 0..4),
        prop::option::weighted(0.1, 0usize..20),
    )
        .prop_map(|(owner, methods, dependencies, alias_of)| ClassShape {
            owner,
            methods,
            dependencies,
            alias_of,
        })
}

/// Domain of up to 30 records with dependencies pointing into (or outside) the domain.
fn arb_domain() -> impl Strategy<Value = Vec<OwnershipRecord>> {
    prop::collection::vec(arb_class_shape(), 0..30).prop_map(|shapes| {
        let subject = |i: usize| {
            let idx = shapes[i].alias_of.filter(|a| *a < i).unwrap_or(i);
            format!("com.acme.C{idx:02}")
        };

        let bare: Vec<OwnershipRecord> = (0..shapes.len())
            .map(|i| OwnershipRecord::new(subject(i), shapes[i].owner.clone()))
            .collect();

        shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| {
                let mut record = bare[i].clone();
                for (m, team) in shape.methods.iter().enumerate() {
                    record = record.with_method_owner(format!("m{m}()"), team.clone());
                }
                for (f, target) in shape.dependencies.iter().enumerate() {
                    let lookup = match bare.get(*target) {
                        Some(dep) => DependencyLookup::resolved(dep.clone()),
                        None if target % 7 == 0 => {
                            DependencyLookup::failing(format!("f{f}").into(), "generated")
                        }
                        None => DependencyLookup::absent(),
                    };
                    record = record.with_dependency(format!("f{f}"), lookup);
                }
                record
            })
            .collect()
    })
}

fn arb_owner_filter() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_team(), 0..3)
}

fn owner_filters(teams: &[String]) -> Vec<Box<dyn OwnershipFilter>> {
    teams
        .iter()
        .cloned()
        .map(|team| {
            Box::new(FnFilter::new(format!("owner.is.{team}"), move |ctx| {
                ctx.candidate.class_owner() == Some(team.as_str())
            })) as Box<dyn OwnershipFilter>
        })
        .collect()
}

fn distinct_subjects(domain: &[OwnershipRecord]) -> BTreeSet<String> {
    domain.iter().map(|r| r.subject().to_string()).collect()
}

// ============================================================================
// Property tests: Filtering
// ============================================================================

proptest! {
    /// Without filters every distinct record survives.
    #[test]
    fn no_filters_is_identity(domain in arb_domain()) {
        let filtered = filter_domain(&domain, &[], &mut NoopObserver);
        let kept: BTreeSet<String> =
            filtered.records.iter().map(|r| r.subject().to_string()).collect();
        prop_assert_eq!(kept, distinct_subjects(&domain));
    }

    /// Filtering never invents records.
    #[test]
    fn filtered_is_subset(domain in arb_domain(), teams in arb_owner_filter()) {
        let filters = owner_filters(&teams);
        let filtered = filter_domain(&domain, &filters, &mut NoopObserver);
        for record in &filtered.records {
            prop_assert!(domain.contains(record));
        }
    }

    /// Reversing the evaluation order does not change the result.
    #[test]
    fn filtering_is_order_independent(domain in arb_domain(), teams in arb_owner_filter()) {
        let filters = owner_filters(&teams);
        let forward = filter_domain(&domain, &filters, &mut NoopObserver);

        let mut reversed_domain = domain.clone();
        reversed_domain.reverse();
        let backward = filter_domain(&reversed_domain, &filters, &mut NoopObserver);

        let subjects = |set: &BTreeSet<OwnershipRecord>| -> Vec<String> {
            set.iter().map(|r| r.subject().to_string()).collect()
        };
        // A duplicated subject survives when any of its entries is accepted.
        prop_assert_eq!(subjects(&forward.records), subjects(&backward.records));
    }

    /// Progress percentages strictly increase, so none is reported twice.
    #[test]
    fn progress_never_repeats(domain in arb_domain()) {
        let filters = owner_filters(&["TeamA".to_string()]);
        let mut observer = RecordingObserver::default();
        filter_domain(&domain, &filters, &mut observer);

        let percents: Vec<usize> = observer.progress.iter().map(|p| p.percent).collect();
        prop_assert!(percents.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(percents.iter().all(|p| *p <= 100));
    }
}

// ============================================================================
// Property tests: Graph construction and relationships
// ============================================================================

proptest! {
    /// One component per surviving record.
    #[test]
    fn components_match_filtered_records(domain in arb_domain()) {
        let filtered = filter_domain(&domain, &[], &mut NoopObserver);
        let graph = build_graph(&filtered.records);
        prop_assert_eq!(graph.components.len(), filtered.records.len());
    }

    /// Owners plus unowned components account for every component exactly once.
    #[test]
    fn grouping_never_loses_components(domain in arb_domain()) {
        let filtered = filter_domain(&domain, &[], &mut NoopObserver);
        let graph = build_graph(&filtered.records);

        let owned: usize = graph.owners.iter().map(|o| o.components().len()).sum();
        prop_assert_eq!(owned + graph.unowned.len(), graph.components.len());

        let distinct_owners: BTreeSet<&str> =
            graph.components.iter().filter_map(|c| c.owner()).collect();
        let grouped: Vec<String> = group_owners(&graph.components)
            .iter()
            .map(|o| o.name().to_string())
            .collect();
        prop_assert_eq!(grouped.len(), distinct_owners.len());
    }

    /// No method-usage edge points back at the component's own team.
    #[test]
    fn method_edges_never_self_loop(domain in arb_domain(), teams in arb_owner_filter()) {
        let filters = owner_filters(&teams);
        let filtered = filter_domain(&domain, &filters, &mut NoopObserver);
        let graph = build_graph(&filtered.records);
        let rels = derive_relationships(&graph, &mut FixedStyler::default());

        for edge in &rels.method_usages {
            let source = graph.components.get(&edge.source).expect("source component");
            match &edge.target {
                NodeRef::Owner(name) => {
                    prop_assert_ne!(source.owner(), Some(name.as_str()));
                    prop_assert!(graph.owners.iter().any(|o| o.name() == name));
                }
                NodeRef::Component(_) => prop_assert!(false, "method edge to a component"),
            }
        }
    }

    /// A dependency edge exists exactly for resolved dependencies that are components.
    #[test]
    fn dependency_edges_match_resolved_lookups(
        domain in arb_domain(),
        teams in arb_owner_filter(),
    ) {
        let filters = owner_filters(&teams);
        let filtered = filter_domain(&domain, &filters, &mut NoopObserver);
        let graph = build_graph(&filtered.records);
        let rels = derive_relationships(&graph, &mut FixedStyler::default());

        let mut expected = Vec::new();
        for component in &graph.components {
            for (field, dependency) in component.record().resolved_dependencies() {
                if graph.components.contains(dependency.subject()) {
                    expected.push((
                        component.subject().to_string(),
                        field.to_string(),
                        dependency.subject().to_string(),
                    ));
                }
            }
        }

        let actual: Vec<(String, String, String)> = rels
            .dependencies
            .iter()
            .map(|edge| (
                edge.source.to_string(),
                edge.via.as_ref().map(|f| f.to_string()).unwrap_or_default(),
                edge.target.name().to_string(),
            ))
            .collect();

        prop_assert_eq!(actual, expected);
    }
}
