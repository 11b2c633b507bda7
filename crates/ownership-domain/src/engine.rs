use crate::filtering::{OwnershipFilter, filter_domain};
use crate::graph::{OwnershipGraph, build_graph};
use crate::progress::FilterObserver;
use crate::relationships::{Relationships, derive_relationships};
use crate::style::EdgeStyler;
use ownership_types::OwnershipRecord;
use std::time::Duration;

/// Everything the renderer needs for one diagram.
#[derive(Clone, Debug, Default)]
pub struct DiagramModel {
    pub graph: OwnershipGraph,
    pub relationships: Relationships,
    pub input_records: usize,
    pub filtered_records: usize,
    pub longest_filter_time: Duration,
}

/// Filter the full domain, build the graph and derive its relationships.
pub fn evaluate(
    domain: &[OwnershipRecord],
    filters: &[Box<dyn OwnershipFilter>],
    observer: &mut dyn FilterObserver,
    styler: &mut dyn EdgeStyler,
) -> DiagramModel {
    let filtered = filter_domain(domain, filters, observer);
    let graph = build_graph(&filtered.records);
    let relationships = derive_relationships(&graph, styler);

    DiagramModel {
        input_records: domain.len(),
        filtered_records: filtered.records.len(),
        longest_filter_time: filtered.longest,
        graph,
        relationships,
    }
}
