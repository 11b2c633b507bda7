use ownership_types::{ClassId, OwnershipRecord};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Renderable node wrapping one ownership record. Identity is the record's identity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Component {
    record: OwnershipRecord,
}

impl Component {
    pub fn new(record: OwnershipRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &OwnershipRecord {
        &self.record
    }

    pub fn subject(&self) -> &ClassId {
        self.record.subject()
    }

    pub fn owner(&self) -> Option<&str> {
        self.record.class_owner()
    }
}

impl Borrow<ClassId> for Component {
    fn borrow(&self) -> &ClassId {
        self.record.subject()
    }
}

/// Renderable node for a team and the components it owns. Identity is the name.
#[derive(Clone, Debug)]
pub struct Owner {
    name: String,
    components: BTreeSet<Component>,
}

impl Owner {
    pub fn new(name: impl Into<String>, components: BTreeSet<Component>) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &BTreeSet<Component> {
        &self.components
    }

    /// Union the members of another group with the same name into this one.
    pub fn merge(&mut self, other: Owner) {
        debug_assert_eq!(self.name, other.name);
        self.components.extend(other.components);
    }
}

impl PartialEq for Owner {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Owner {}

impl PartialOrd for Owner {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Owner {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct OwnershipGraph {
    pub components: BTreeSet<Component>,
    /// Sorted by name, one entry per distinct owner.
    pub owners: Vec<Owner>,
    /// Components without an owner; drawn as top-level nodes.
    pub unowned: BTreeSet<Component>,
}

/// One component per distinct record.
pub fn build_components<'a, I>(records: I) -> BTreeSet<Component>
where
    I: IntoIterator<Item = &'a OwnershipRecord>,
{
    records.into_iter().cloned().map(Component::new).collect()
}

/// Group owned components by owner name, merging groups that share a name.
pub fn group_owners(components: &BTreeSet<Component>) -> Vec<Owner> {
    let mut groups: BTreeMap<&str, Owner> = BTreeMap::new();
    for component in components {
        let Some(name) = component.owner() else {
            continue;
        };
        let group = Owner::new(name, BTreeSet::from([component.clone()]));
        match groups.entry(name) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(group),
            Entry::Vacant(slot) => {
                slot.insert(group);
            }
        }
    }
    groups.into_values().collect()
}

pub fn unowned_components(components: &BTreeSet<Component>) -> BTreeSet<Component> {
    components
        .iter()
        .filter(|component| component.owner().is_none())
        .cloned()
        .collect()
}

pub fn build_graph(filtered: &BTreeSet<OwnershipRecord>) -> OwnershipGraph {
    let components = build_components(filtered);
    let owners = group_owners(&components);
    let unowned = unowned_components(&components);

    tracing::debug!(
        components = components.len(),
        owners = owners.len(),
        unowned = unowned.len(),
        "built ownership graph"
    );

    OwnershipGraph {
        components,
        owners,
        unowned,
    }
}
