//! The `generate` use case: snapshot + config in, PlantUML source out.

use crate::renderable::{LabelStyle, to_renderable};
use anyhow::Context;
use ownership_domain::filters::build_filters;
use ownership_domain::progress::TracingObserver;
use ownership_render::{AssembledDiagram, PlantUmlBackend, assemble};
use ownership_settings::{Overrides, ResolvedConfig};
use ownership_types::OwnershipRecord;
use std::time::Duration;

/// Input for the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    /// Snapshot JSON contents.
    pub snapshot_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub input_records: usize,
    pub filtered_records: usize,
    pub owners: usize,
    pub components: usize,
    pub unowned: usize,
    pub dependency_edges: usize,
    pub method_usage_edges: usize,
    pub longest_filter_time: Duration,
}

/// Output from the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateOutput {
    pub diagram: AssembledDiagram,
    pub stats: GenerateStats,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse config and snapshot, then generate the diagram.
pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    let cfg = ownership_settings::parse_config_toml(input.config_text).context("parse config")?;
    let resolved =
        ownership_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let records =
        ownership_snapshot::parse_snapshot(input.snapshot_text).context("parse snapshot")?;

    generate_diagram(&records, resolved)
}

/// Filter, build, and render already loaded records with a resolved config.
pub fn generate_diagram(
    records: &[OwnershipRecord],
    resolved: ResolvedConfig,
) -> anyhow::Result<GenerateOutput> {
    let filters = build_filters(&resolved.effective).context("build filters")?;
    let mut styler = resolved.effective.styling.styler();

    tracing::debug!(
        profile = %resolved.effective.profile,
        filters = filters.len(),
        records = records.len(),
        "generating diagram"
    );

    let model =
        ownership_domain::evaluate(records, &filters, &mut TracingObserver, styler.as_mut());

    let labels = if resolved.diagram.simple_names {
        LabelStyle::Simple
    } else {
        LabelStyle::Qualified
    };
    let renderable = to_renderable(&model, labels);
    let diagram = assemble(&PlantUmlBackend, &resolved.diagram, &renderable);

    let stats = GenerateStats {
        input_records: model.input_records,
        filtered_records: model.filtered_records,
        owners: model.graph.owners.len(),
        components: model.graph.components.len(),
        unowned: model.graph.unowned.len(),
        dependency_edges: model.relationships.dependencies.len(),
        method_usage_edges: model.relationships.method_usages.len(),
        longest_filter_time: model.longest_filter_time,
    };

    Ok(GenerateOutput {
        diagram,
        stats,
        resolved_config: resolved,
    })
}
