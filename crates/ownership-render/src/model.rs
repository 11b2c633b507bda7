#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableLine {
    Solid,
    Dotted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableHead {
    Open,
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableArrow {
    pub line: RenderableLine,
    pub head: RenderableHead,
    pub bold: bool,
    pub length: u8,
    /// `rrggbb`, without a leading `#`.
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableNodeKind {
    Component,
    Owner,
}

/// Edge endpoint, named the same way as the node it refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableNode {
    pub kind: RenderableNodeKind,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableComponent {
    /// Class identifier; also the node name edges refer to.
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableOwner {
    pub name: String,
    pub components: Vec<RenderableComponent>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEdge {
    pub source: RenderableNode,
    pub target: RenderableNode,
    pub arrow: RenderableArrow,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableDiagram {
    pub owners: Vec<RenderableOwner>,
    pub unowned: Vec<RenderableComponent>,
    pub dependencies: Vec<RenderableEdge>,
    pub method_usages: Vec<RenderableEdge>,
}
