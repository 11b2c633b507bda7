use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `ownership.toml` schema v1.
///
/// User-facing and permissive: every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OwnershipConfigV1 {
    /// Optional schema string for tooling (`ownership.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset of enabled filters: `all`, `cross-team` or `unowned`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Edge styling: `hashed` (default, reproducible) or `random`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling: Option<String>,

    /// Seed for `random` styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default)]
    pub diagram: DiagramConfig,

    /// Map of filter_id -> config.
    #[serde(default)]
    pub filters: BTreeMap<String, FilterConfig>,
}

/// Global diagram settings emitted right after `@startuml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagramConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `left to right` (default) or `top to bottom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// Label components with their simple class name (default) instead of the full id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_names: Option<bool>,

    /// Raw `skinparam <name> <value>` lines.
    #[serde(default)]
    pub skinparams: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FilterConfig {
    /// Override preset enable/disable. Listing a filter enables it unless set to false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Filter-specific values (team names for `owner.in`, globs for `class.matches`).
    #[serde(default)]
    pub values: Vec<String>,
}
