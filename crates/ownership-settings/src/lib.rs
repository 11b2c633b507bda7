//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod diagram;
mod model;
mod presets;
mod resolve;

pub use diagram::{DiagramSettings, Direction};
pub use model::{DiagramConfig, FilterConfig, OwnershipConfigV1};
pub use presets::preset;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `ownership.toml` (or equivalent) into a typed model.
///
/// Blank input yields the default model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<OwnershipConfigV1> {
    if input.trim().is_empty() {
        return Ok(OwnershipConfigV1::default());
    }
    let cfg: OwnershipConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (profile preset + per-filter config + overrides).
pub fn resolve_config(
    cfg: OwnershipConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of `ownership.toml`, pretty-printed.
pub fn config_schema() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(OwnershipConfigV1);
    let mut text = serde_json::to_string_pretty(&schema)?;
    text.push('\n');
    Ok(text)
}
