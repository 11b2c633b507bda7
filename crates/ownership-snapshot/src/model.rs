use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk snapshot format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotV1 {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

/// Ownership facts of one class as written in the snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub class: String,

    /// Owning team; missing or blank means unowned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Method id -> owning team.
    #[serde(default)]
    pub methods: BTreeMap<String, String>,

    /// Field name -> referenced class id.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}
