//! Stable types and IDs used across the ownership-diagram workspace.
//!
//! This crate is intentionally boring:
//! - identifiers for classes, methods and fields
//! - the per-class ownership record and its lazy dependency lookups
//! - stable filter IDs
//! - explain registry for built-in filters

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod record;

pub use explain::{Explanation, all_filter_ids, lookup_explanation};
pub use record::{
    ClassId, DependencyLookup, FieldId, LookupError, LookupResult, MethodId, OwnershipRecord,
};
