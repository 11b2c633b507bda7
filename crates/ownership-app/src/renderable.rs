//! Conversion from the domain graph to the backend-agnostic render model.

use ownership_domain::DiagramModel;
use ownership_domain::graph::Component;
use ownership_domain::relationships::{NodeRef, Relationship};
use ownership_domain::style::{ArrowStyle, HeadStyle, LineStyle};
use ownership_render::{
    RenderableArrow, RenderableComponent, RenderableDiagram, RenderableEdge, RenderableHead,
    RenderableLine, RenderableNode, RenderableNodeKind, RenderableOwner,
};

/// How component nodes are labelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Last segment of the class identifier.
    #[default]
    Simple,
    /// The full class identifier.
    Qualified,
}

pub fn to_renderable(model: &DiagramModel, labels: LabelStyle) -> RenderableDiagram {
    let component = |c: &Component| renderable_component(c, labels);

    RenderableDiagram {
        owners: model
            .graph
            .owners
            .iter()
            .map(|owner| RenderableOwner {
                name: owner.name().to_string(),
                components: owner.components().iter().map(component).collect(),
            })
            .collect(),
        unowned: model.graph.unowned.iter().map(component).collect(),
        dependencies: model
            .relationships
            .dependencies
            .iter()
            .map(renderable_edge)
            .collect(),
        method_usages: model
            .relationships
            .method_usages
            .iter()
            .map(renderable_edge)
            .collect(),
    }
}

fn renderable_component(component: &Component, labels: LabelStyle) -> RenderableComponent {
    let subject = component.subject();
    let label = match labels {
        LabelStyle::Simple => subject.simple_name(),
        LabelStyle::Qualified => subject.as_str(),
    };
    RenderableComponent {
        id: subject.to_string(),
        label: label.to_string(),
    }
}

fn renderable_edge(rel: &Relationship) -> RenderableEdge {
    let target = match &rel.target {
        NodeRef::Component(id) => RenderableNode {
            kind: RenderableNodeKind::Component,
            name: id.to_string(),
        },
        NodeRef::Owner(name) => RenderableNode {
            kind: RenderableNodeKind::Owner,
            name: name.clone(),
        },
    };
    RenderableEdge {
        source: RenderableNode {
            kind: RenderableNodeKind::Component,
            name: rel.source.to_string(),
        },
        target,
        arrow: renderable_arrow(&rel.style),
    }
}

fn renderable_arrow(style: &ArrowStyle) -> RenderableArrow {
    RenderableArrow {
        line: match style.line {
            LineStyle::Solid => RenderableLine::Solid,
            LineStyle::Dotted => RenderableLine::Dotted,
        },
        head: match style.head {
            HeadStyle::Open => RenderableHead::Open,
            HeadStyle::Full => RenderableHead::Full,
        },
        bold: style.bold,
        length: style.length,
        color: style.color.hex(),
    }
}
