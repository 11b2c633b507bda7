use crate::graph::{Component, Owner, OwnershipGraph};
use crate::style::{ArrowStyle, EdgeStyler};
use ownership_types::{ClassId, FieldId};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationshipKind {
    /// Component -> component: a field's type is another rendered component.
    Dependency,
    /// Component -> owner: a method is owned by another team.
    MethodUsage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeRef {
    Component(ClassId),
    Owner(String),
}

impl NodeRef {
    pub fn name(&self) -> &str {
        match self {
            NodeRef::Component(id) => id.as_str(),
            NodeRef::Owner(name) => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub source: ClassId,
    pub target: NodeRef,
    /// Field that produced a dependency edge.
    pub via: Option<FieldId>,
    pub style: ArrowStyle,
}

#[derive(Clone, Debug, Default)]
pub struct Relationships {
    pub dependencies: Vec<Relationship>,
    pub method_usages: Vec<Relationship>,
}

impl Relationships {
    pub fn len(&self) -> usize {
        self.dependencies.len() + self.method_usages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One edge per resolved dependency field whose record is a component in `components`.
///
/// Dependencies that resolve outside the set, resolve to nothing, or fail to resolve
/// produce no edge.
pub fn dependency_relationships(
    components: &BTreeSet<Component>,
    styler: &mut dyn EdgeStyler,
) -> Vec<Relationship> {
    let mut out = Vec::new();

    for component in components {
        for (field, dependency) in component.record().resolved_dependencies() {
            let Some(target) = components.get(dependency.subject()) else {
                tracing::trace!(
                    class = %component.subject(),
                    field = %field,
                    dependency = %dependency.subject(),
                    "dependency is not rendered; dropping edge"
                );
                continue;
            };

            let source_name = component.subject().as_str();
            let target_name = target.subject().as_str();
            let style = ArrowStyle::dependency(
                styler.length(source_name, target_name),
                styler.color(source_name, target_name),
            );
            out.push(Relationship {
                kind: RelationshipKind::Dependency,
                source: component.subject().clone(),
                target: NodeRef::Component(target.subject().clone()),
                via: Some(field.clone()),
                style,
            });
        }
    }

    out
}

/// One edge per component and distinct foreign team owning one of its methods, when
/// that team has an owner node.
pub fn method_relationships(
    components: &BTreeSet<Component>,
    owners: &[Owner],
    styler: &mut dyn EdgeStyler,
) -> Vec<Relationship> {
    let mut out = Vec::new();

    for component in components {
        let method_teams: BTreeSet<&str> = component
            .record()
            .method_owners()
            .values()
            .map(String::as_str)
            .collect();

        for team in method_teams {
            if component.owner() == Some(team) {
                continue;
            }
            let Some(owner) = owners.iter().find(|owner| owner.name() == team) else {
                continue;
            };

            let source_name = component.subject().as_str();
            let style = ArrowStyle::method_usage(
                styler.length(source_name, owner.name()),
                styler.color(source_name, owner.name()),
            );
            out.push(Relationship {
                kind: RelationshipKind::MethodUsage,
                source: component.subject().clone(),
                target: NodeRef::Owner(owner.name().to_string()),
                via: None,
                style,
            });
        }
    }

    out
}

pub fn derive_relationships(graph: &OwnershipGraph, styler: &mut dyn EdgeStyler) -> Relationships {
    let dependencies = dependency_relationships(&graph.components, styler);
    let method_usages = method_relationships(&graph.components, &graph.owners, styler);

    tracing::debug!(
        dependencies = dependencies.len(),
        method_usages = method_usages.len(),
        "derived relationships"
    );

    Relationships {
        dependencies,
        method_usages,
    }
}
