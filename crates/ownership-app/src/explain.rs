//! The `explain` use case: look up filter documentation.

use ownership_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the filter id.
    Found(Explanation),
    /// Unknown identifier; includes the available filter ids.
    NotFound {
        identifier: String,
        available_filter_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a filter id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_filter_ids: explain::all_filter_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    if !exp.values.is_empty() {
        out.push_str("Values\n");
        out.push_str("------\n");
        out.push_str(exp.values);
        out.push_str("\n\n");
    }
    out.push_str("Example\n");
    out.push_str("-------\n\n");
    out.push_str("```toml\n");
    out.push_str(exp.example);
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, filter_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown filter id: {}\n\n", identifier));
    out.push_str("Available filter ids:\n");
    for id in filter_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

/// One line per built-in filter: id and title.
pub fn format_filter_list() -> String {
    let ids = explain::all_filter_ids();
    let width = ids.iter().map(|id| id.len()).max().unwrap_or(0);

    let mut out = String::new();
    for id in ids {
        let title = explain::lookup_explanation(id)
            .map(|exp| exp.title)
            .unwrap_or_default();
        out.push_str(&format!("{id:<width$}  {title}\n"));
    }
    out
}
