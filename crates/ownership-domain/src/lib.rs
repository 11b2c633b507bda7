//! Pure ownership graph construction (no IO).
//!
//! Input: ownership records resolved elsewhere, plus filters and an edge styler.
//! Output: components, owners and relationships ready to be rendered.

#![forbid(unsafe_code)]

pub mod filtering;
pub mod filters;
pub mod graph;
pub mod policy;
pub mod progress;
pub mod relationships;
pub mod style;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{DiagramModel, evaluate};
