use crate::diagram::DiagramSettings;
use crate::{model::OwnershipConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use ownership_domain::policy::{EffectiveConfig, FilterPolicy, StylingMode};
use ownership_types::{all_filter_ids, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub styling: Option<String>,
    pub seed: Option<u64>,
    /// Extra teams for `owner.in`; non-empty enables the filter.
    pub owners: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub diagram: DiagramSettings,
}

pub fn resolve_config(
    cfg: OwnershipConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| ids::PROFILE_ALL.to_string());

    if !presets::known_profile(&profile) {
        anyhow::bail!("unknown profile: {profile} (expected all|cross-team|unowned)");
    }

    let mut effective = presets::preset(&profile);

    // Styling
    let seed = overrides.seed.or(cfg.seed);
    if let Some(styling) = overrides.styling.clone().or(cfg.styling.clone()) {
        effective.styling = parse_styling(&styling, seed)?;
    }
    if let (Some(seed), StylingMode::Hashed) = (seed, &effective.styling) {
        anyhow::bail!("seed {seed} requires styling = \"random\"");
    }

    // per-filter overrides
    for (filter_id, fc) in cfg.filters.iter() {
        if !all_filter_ids().iter().any(|id| *id == filter_id.as_str()) {
            anyhow::bail!(
                "unknown filter: {filter_id} (expected one of {})",
                all_filter_ids().join(", ")
            );
        }

        let entry = effective
            .filters
            .entry(filter_id.clone())
            .or_insert_with(FilterPolicy::disabled);

        entry.enabled = fc.enabled.unwrap_or(true);
        if !fc.values.is_empty() {
            entry.values = fc.values.clone();
        }
    }

    if !overrides.owners.is_empty() {
        let entry = effective
            .filters
            .entry(ids::FILTER_OWNER_IN.to_string())
            .or_insert_with(FilterPolicy::disabled);
        entry.enabled = true;
        for owner in &overrides.owners {
            if !entry.values.contains(owner) {
                entry.values.push(owner.clone());
            }
        }
    }

    if let Some(policy) = effective.filter_policy(ids::FILTER_CLASS_MATCHES) {
        validate_patterns(ids::FILTER_CLASS_MATCHES, &policy.values)?;
    }

    let diagram =
        DiagramSettings::from_config(&cfg.diagram).context("invalid [diagram] settings")?;

    Ok(ResolvedConfig { effective, diagram })
}

fn validate_patterns(filter_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid glob for {filter_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_styling(v: &str, seed: Option<u64>) -> anyhow::Result<StylingMode> {
    match v {
        "hashed" => Ok(StylingMode::Hashed),
        "random" => Ok(StylingMode::Random { seed }),
        other => anyhow::bail!("unknown styling: {other} (expected hashed|random)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterConfig;
    use crate::parse_config_toml;

    fn resolve(toml: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(toml)?, overrides)
    }

    fn enabled_ids(resolved: &ResolvedConfig) -> Vec<String> {
        resolved
            .effective
            .enabled_filters()
            .map(|(id, _)| id.to_string())
            .collect()
    }

    #[test]
    fn defaults_are_all_profile_with_hashed_styling() {
        let resolved = resolve("", Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.profile, "all");
        assert_eq!(resolved.effective.styling, StylingMode::Hashed);
        assert!(enabled_ids(&resolved).is_empty());
        assert_eq!(resolved.diagram, DiagramSettings::default());
    }

    #[test]
    fn override_profile_wins_over_config() {
        let resolved = resolve(
            "profile = \"unowned\"",
            Overrides {
                profile: Some("cross-team".to_string()),
                ..Overrides::default()
            },
        )
        .expect("resolve");
        assert_eq!(resolved.effective.profile, "cross-team");
        assert_eq!(
            enabled_ids(&resolved),
            vec![ids::FILTER_DEPS_DEPENDED_ON, ids::FILTER_METHODS_CROSS_TEAM]
        );
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let err = resolve("profile = \"strict\"", Overrides::default()).expect_err("should fail");
        assert!(err.to_string().contains("unknown profile: strict"));
    }

    #[test]
    fn unknown_styling_is_rejected() {
        let err = resolve("styling = \"pastel\"", Overrides::default()).expect_err("should fail");
        assert!(err.to_string().contains("expected hashed|random"));
    }

    #[test]
    fn random_styling_takes_seed_from_override_then_config() {
        let from_config = resolve("styling = \"random\"\nseed = 7", Overrides::default())
            .expect("resolve");
        assert_eq!(from_config.effective.styling, StylingMode::Random { seed: Some(7) });

        let overridden = resolve(
            "styling = \"random\"\nseed = 7",
            Overrides {
                seed: Some(9),
                ..Overrides::default()
            },
        )
        .expect("resolve");
        assert_eq!(overridden.effective.styling, StylingMode::Random { seed: Some(9) });

        let unseeded = resolve("styling = \"random\"", Overrides::default()).expect("resolve");
        assert_eq!(unseeded.effective.styling, StylingMode::Random { seed: None });
    }

    #[test]
    fn seed_without_random_styling_is_rejected() {
        let err = resolve("seed = 42", Overrides::default()).expect_err("config seed");
        assert_eq!(err.to_string(), "seed 42 requires styling = \"random\"");

        let err = resolve(
            "styling = \"hashed\"",
            Overrides {
                seed: Some(3),
                ..Overrides::default()
            },
        )
        .expect_err("override seed");
        assert!(err.to_string().starts_with("seed 3 requires"));
    }

    #[test]
    fn filters_section_layers_over_preset() {
        let resolved = resolve(
            r#"
profile = "cross-team"

[filters."deps.depended_on"]
enabled = false

[filters."class.matches"]
values = ["com.acme.billing.*"]
"#,
            Overrides::default(),
        )
        .expect("resolve");

        assert_eq!(
            enabled_ids(&resolved),
            vec![ids::FILTER_CLASS_MATCHES, ids::FILTER_METHODS_CROSS_TEAM]
        );
        let policy = resolved
            .effective
            .filter_policy(ids::FILTER_CLASS_MATCHES)
            .expect("class.matches");
        assert_eq!(policy.values, vec!["com.acme.billing.*"]);
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let mut cfg = OwnershipConfigV1::default();
        cfg.filters
            .insert("deps.no_wildcards".to_string(), FilterConfig::default());
        let err = resolve_config(cfg, Overrides::default()).expect_err("should fail");
        assert!(err.to_string().contains("unknown filter: deps.no_wildcards"));
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let err = resolve(
            "[filters.\"class.matches\"]\nvalues = [\"com.[acme\"]",
            Overrides::default(),
        )
        .expect_err("should fail");
        assert!(err.to_string().contains("invalid glob for class.matches"));
    }

    #[test]
    fn override_owners_extend_owner_in() {
        let resolved = resolve(
            "[filters.\"owner.in\"]\nvalues = [\"TeamA\"]",
            Overrides {
                owners: vec!["TeamB".to_string(), "TeamA".to_string()],
                ..Overrides::default()
            },
        )
        .expect("resolve");

        let policy = resolved
            .effective
            .filter_policy(ids::FILTER_OWNER_IN)
            .expect("owner.in");
        assert_eq!(policy.values, vec!["TeamA", "TeamB"]);
    }

    #[test]
    fn diagram_section_is_resolved() {
        let resolved = resolve(
            "[diagram]\ntitle = \"Teams\"\nsimple_names = false",
            Overrides::default(),
        )
        .expect("resolve");
        assert_eq!(resolved.diagram.title.as_deref(), Some("Teams"));
        assert!(!resolved.diagram.simple_names);
    }

    #[test]
    fn invalid_direction_is_reported_with_context() {
        let err = resolve("[diagram]\ndirection = \"up\"", Overrides::default())
            .expect_err("should fail");
        assert_eq!(err.to_string(), "invalid [diagram] settings");
        assert!(format!("{err:#}").contains("unknown direction: up"));
    }
}
