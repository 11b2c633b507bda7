//! Use case orchestration for ownership-diagram.
//!
//! This crate coordinates the settings, snapshot, domain and render layers. The CLI crate
//! depends on it and only handles argument parsing and IO.

#![forbid(unsafe_code)]

mod explain;
mod generate;
mod renderable;

pub use explain::{
    ExplainOutput, format_explanation, format_filter_list, format_not_found, run_explain,
};
pub use generate::{GenerateInput, GenerateOutput, GenerateStats, generate_diagram, run_generate};
pub use renderable::{LabelStyle, to_renderable};
