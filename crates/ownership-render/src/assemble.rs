use crate::{RenderableComponent, RenderableDiagram, RenderableEdge, RenderableOwner};

/// Global diagram settings, rendered verbatim after the opening marker.
pub trait DiagramConfiguration {
    fn render(&self) -> String;
}

impl DiagramConfiguration for String {
    fn render(&self) -> String {
        self.clone()
    }
}

/// Markup primitives a diagram backend has to provide.
pub trait DiagramBackend {
    fn open(&self) -> String;

    fn close(&self) -> String;

    /// An owner node containing its components.
    fn owner_node(&self, owner: &RenderableOwner) -> String;

    /// A top-level component node.
    fn component_node(&self, component: &RenderableComponent) -> String;

    fn edge(&self, edge: &RenderableEdge) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledDiagram {
    pub source: String,
    pub lines: usize,
}

/// Assemble the diagram source.
///
/// Order: opening marker, configuration, owners, unowned components, dependency edges,
/// method-usage edges, closing marker.
pub fn assemble(
    backend: &dyn DiagramBackend,
    config: &dyn DiagramConfiguration,
    diagram: &RenderableDiagram,
) -> AssembledDiagram {
    let mut source = backend.open();
    source.push_str(&config.render());

    for owner in &diagram.owners {
        source.push_str(&backend.owner_node(owner));
    }
    for component in &diagram.unowned {
        source.push_str(&backend.component_node(component));
    }
    for edge in diagram.dependencies.iter().chain(&diagram.method_usages) {
        source.push_str(&backend.edge(edge));
    }

    source.push_str(&backend.close());

    let lines = count_lines(Some(&source));
    tracing::info!("generated diagram with {} lines", lines);

    AssembledDiagram { source, lines }
}

/// Newline count plus one; zero for absent or empty input.
pub fn count_lines(input: Option<&str>) -> usize {
    match input {
        None | Some("") => 0,
        Some(text) => text.bytes().filter(|b| *b == b'\n').count() + 1,
    }
}
