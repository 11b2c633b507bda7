//! Snapshot adapter: reads resolved ownership facts from a JSON file.
//!
//! This crate is allowed to do filesystem IO. Dependency lookups stay lazy: the
//! records it returns resolve their dependency fields against a shared in-memory
//! index only when asked.

#![forbid(unsafe_code)]

mod index;
mod model;

use anyhow::Context;
use camino::Utf8Path;
use ownership_types::OwnershipRecord;

pub use index::SnapshotIndex;
pub use model::{ClassEntry, SnapshotV1};

/// Parse snapshot JSON into ownership records, in file order.
///
/// Duplicate class entries keep the first occurrence.
pub fn parse_snapshot(text: &str) -> anyhow::Result<Vec<OwnershipRecord>> {
    let snapshot: SnapshotV1 = serde_json::from_str(text).context("parse snapshot json")?;
    Ok(SnapshotIndex::build(snapshot).records())
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: &Utf8Path) -> anyhow::Result<Vec<OwnershipRecord>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    parse_snapshot(&text).with_context(|| format!("parse {}", path))
}
