//! Rendering of ownership graphs into diagram source text.
//!
//! The assembler only knows the [`DiagramBackend`] primitives (labelled nodes and
//! styled directed edges); [`PlantUmlBackend`] is the built-in implementation.

#![forbid(unsafe_code)]

mod assemble;
mod model;
mod plantuml;

pub use assemble::{
    AssembledDiagram, DiagramBackend, DiagramConfiguration, assemble, count_lines,
};
pub use model::{
    RenderableArrow, RenderableComponent, RenderableDiagram, RenderableEdge, RenderableHead,
    RenderableLine, RenderableNode, RenderableNodeKind, RenderableOwner,
};
pub use plantuml::PlantUmlBackend;
