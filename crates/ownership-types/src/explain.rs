//! Explain registry for built-in filters.
//!
//! Maps filter IDs to human-readable explanations and a configuration example.

use crate::ids;

/// Explanation entry for a filter.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the filter.
    pub title: &'static str,
    /// Which records the filter keeps.
    pub description: &'static str,
    /// What `values` means for this filter (empty when it takes none).
    pub values: &'static str,
    /// `ownership.toml` snippet enabling the filter.
    pub example: &'static str,
}

/// Look up an explanation by filter ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::FILTER_OWNER_IN => Some(explain_owner_in()),
        ids::FILTER_CLASS_MATCHES => Some(explain_class_matches()),
        ids::FILTER_CLASS_UNOWNED => Some(explain_class_unowned()),
        ids::FILTER_METHODS_CROSS_TEAM => Some(explain_methods_cross_team()),
        ids::FILTER_DEPS_DEPENDED_ON => Some(explain_deps_depended_on()),
        _ => None,
    }
}

/// List all known filter IDs.
pub fn all_filter_ids() -> &'static [&'static str] {
    &[
        ids::FILTER_OWNER_IN,
        ids::FILTER_CLASS_MATCHES,
        ids::FILTER_CLASS_UNOWNED,
        ids::FILTER_METHODS_CROSS_TEAM,
        ids::FILTER_DEPS_DEPENDED_ON,
    ]
}

fn explain_owner_in() -> Explanation {
    Explanation {
        title: "Classes owned by selected teams",
        description: "Keeps a class when its owning team is one of the configured teams. \
Classes without an owner never match.",
        values: "Team names, matched exactly.",
        example: r#"[filters."owner.in"]
enabled = true
values = ["payments", "checkout"]
"#,
    }
}

fn explain_class_matches() -> Explanation {
    Explanation {
        title: "Classes matching name patterns",
        description: "Keeps a class when its identifier matches one of the configured glob \
patterns. Patterns are matched against the whole identifier, so `com.acme.*` matches \
`com.acme.Order` and `com.acme.billing.Invoice`.",
        values: "Glob patterns.",
        example: r#"[filters."class.matches"]
enabled = true
values = ["com.acme.billing.*"]
"#,
    }
}

fn explain_class_unowned() -> Explanation {
    Explanation {
        title: "Classes without an owner",
        description: "Keeps a class when no team owns it. Useful to find ownership gaps; \
unowned classes are drawn as top-level components.",
        values: "",
        example: r#"[filters."class.unowned"]
enabled = true
"#,
    }
}

fn explain_methods_cross_team() -> Explanation {
    Explanation {
        title: "Classes with methods owned by other teams",
        description: "Keeps a class when at least one of its methods is owned by a team \
other than the class owner. These classes are the sources of method-usage edges.",
        values: "",
        example: r#"[filters."methods.cross_team"]
enabled = true
"#,
    }
}

fn explain_deps_depended_on() -> Explanation {
    Explanation {
        title: "Classes something else depends on",
        description: "Keeps a class when another class in the full, unfiltered domain has a \
dependency field that resolves to it. Leaf classes that nothing uses are dropped.",
        values: "",
        example: r#"[filters."deps.depended_on"]
enabled = true
"#,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_filter_has_an_explanation() {
        for id in all_filter_ids() {
            let exp = lookup_explanation(id).unwrap_or_else(|| panic!("missing {id}"));
            assert!(!exp.title.is_empty());
            assert!(exp.example.contains(id));
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("deps.no_wildcards").is_none());
    }
}
