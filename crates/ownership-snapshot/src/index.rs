use crate::model::{ClassEntry, SnapshotV1};
use ownership_types::{ClassId, DependencyLookup, FieldId, LookupError, OwnershipRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Snapshot entries indexed by class id, shared by every lookup closure.
#[derive(Debug, Default)]
pub struct SnapshotIndex {
    order: Vec<ClassId>,
    entries: BTreeMap<ClassId, ClassEntry>,
}

impl SnapshotIndex {
    /// Index the snapshot, keeping the first entry per class.
    pub fn build(snapshot: SnapshotV1) -> Arc<Self> {
        let mut index = Self::default();

        for (position, entry) in snapshot.classes.into_iter().enumerate() {
            let class = entry.class.trim();
            if class.is_empty() {
                tracing::warn!("snapshot entry {} has a blank class name; skipped", position);
                continue;
            }
            let id = ClassId::new(class);
            if index.entries.contains_key(&id) {
                tracing::warn!("duplicate snapshot entry for {}; keeping the first", id);
                continue;
            }
            index.order.push(id.clone());
            index.entries.insert(id, entry);
        }

        tracing::debug!("indexed {} snapshot classes", index.order.len());
        Arc::new(index)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All records, in snapshot order.
    pub fn records(self: &Arc<Self>) -> Vec<OwnershipRecord> {
        self.order
            .iter()
            .filter_map(|id| self.record(id))
            .collect()
    }

    /// Record for `id`, or `None` when the class is not in the snapshot.
    pub fn record(self: &Arc<Self>, id: &ClassId) -> Option<OwnershipRecord> {
        let entry = self.entries.get(id)?;
        let owner = entry
            .owner
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string);

        let mut record = OwnershipRecord::new(id.clone(), owner);
        for (method, team) in &entry.methods {
            record = record.with_method_owner(method.as_str(), team.clone());
        }
        for (field, target) in &entry.dependencies {
            let lookup = self.lookup(FieldId::new(field.as_str()), target.clone());
            record = record.with_dependency(field.as_str(), lookup);
        }
        Some(record)
    }

    fn lookup(self: &Arc<Self>, field: FieldId, target: String) -> DependencyLookup {
        let index = Arc::clone(self);
        DependencyLookup::new(move || {
            let target = target.trim();
            if target.is_empty() {
                return Err(LookupError::Malformed {
                    field: field.clone(),
                    reason: "blank class reference".to_string(),
                });
            }
            Ok(index.record(&ClassId::new(target)))
        })
    }
}
