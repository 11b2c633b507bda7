use crate::{
    DiagramBackend, RenderableComponent, RenderableEdge, RenderableHead, RenderableLine,
    RenderableNode, RenderableNodeKind, RenderableOwner,
};
use sha2::{Digest, Sha256};

/// PlantUML component-diagram backend.
///
/// Owners become packages holding their components; unowned components are drawn at
/// top level. Node aliases are derived from names, so edges can refer to them.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlantUmlBackend;

impl PlantUmlBackend {
    /// Alias for a node name, distinct for distinct names of the same kind.
    ///
    /// Dotted alphanumeric names map their dots to `_`. Any other name is sanitized and
    /// suffixed with `__` and a digest of the original, which a plain alias never contains.
    pub fn alias(kind: RenderableNodeKind, name: &str) -> String {
        let prefix = match kind {
            RenderableNodeKind::Component => "comp_",
            RenderableNodeKind::Owner => "owner_",
        };
        if is_plain(name) {
            return format!("{prefix}{}", name.replace('.', "_"));
        }
        let body: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let digest = Sha256::digest(name.as_bytes()).to_vec();
        format!("{prefix}{body}__{}", &hex::encode(digest)[..8])
    }

    fn node_alias(node: &RenderableNode) -> String {
        Self::alias(node.kind, &node.name)
    }

    fn component_line(component: &RenderableComponent) -> String {
        format!(
            "[{}] as {}",
            sanitize_label(&component.label),
            Self::alias(RenderableNodeKind::Component, &component.id)
        )
    }
}

impl DiagramBackend for PlantUmlBackend {
    fn open(&self) -> String {
        "@startuml\n".to_string()
    }

    fn close(&self) -> String {
        "@enduml\n".to_string()
    }

    fn owner_node(&self, owner: &RenderableOwner) -> String {
        let mut out = format!(
            "package \"{}\" as {} {{\n",
            owner.name.replace('"', "'"),
            Self::alias(RenderableNodeKind::Owner, &owner.name)
        );
        for component in &owner.components {
            out.push_str("  ");
            out.push_str(&Self::component_line(component));
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    fn component_node(&self, component: &RenderableComponent) -> String {
        format!("{}\n", Self::component_line(component))
    }

    fn edge(&self, edge: &RenderableEdge) -> String {
        let arrow = &edge.arrow;
        let body = match arrow.line {
            RenderableLine::Solid => '-',
            RenderableLine::Dotted => '.',
        };
        let head = match arrow.head {
            RenderableHead::Open => ">",
            RenderableHead::Full => "|>",
        };
        let mut style = format!("#{}", arrow.color);
        if arrow.bold {
            style.push_str(",bold");
        }
        let tail = body.to_string().repeat(usize::from(arrow.length.max(1)));

        format!(
            "{} {body}[{style}]{tail}{head} {}\n",
            Self::node_alias(&edge.source),
            Self::node_alias(&edge.target),
        )
    }
}

/// Non-empty alphanumeric segments separated by single dots.
fn is_plain(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

/// Square brackets close a PlantUML component label early.
fn sanitize_label(label: &str) -> String {
    label.replace('[', "(").replace(']', ")")
}
