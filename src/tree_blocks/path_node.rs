use crate::Hub;

/// Index of a node inside the arena of its [`PathTree`](super::path_tree::PathTree).
pub type NodeId = usize;

/// The root always sits at the start of the arena.
pub const ROOT: NodeId = 0;

/// Role of a node inside its tree.
///
/// - `Root`: the tree origin, depth 0
/// - `Trunk`: a direct peer of the root, depth 1; its parent is always [`ROOT`]
/// - `Branch`: depth 2 or more, remembers its parent and the trunk it grew from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Trunk,
    Branch { parent: NodeId, trunk: NodeId },
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Root => write!(f, "Root"),
            NodeKind::Trunk => write!(f, "Trunk"),
            NodeKind::Branch { .. } => write!(f, "Branch"),
        }
    }
}

/// One occurrence of a hub inside a path tree.
#[derive(Debug, Clone)]
pub struct PathNode {
    pub(crate) hub: Hub,
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<NodeId>,
    pub(crate) stripped: bool,
}

impl PathNode {
    pub(crate) fn new(hub: Hub, kind: NodeKind) -> Self {
        Self {
            hub,
            kind,
            children: Vec::new(),
            stripped: false,
        }
    }

    pub fn hub(&self) -> Hub {
        self.hub
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_stripped(&self) -> bool {
        self.stripped
    }

    pub fn parent(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Root => None,
            NodeKind::Trunk => Some(ROOT),
            NodeKind::Branch { parent, .. } => Some(parent),
        }
    }

    /// Trunk ancestor of the node stored at `id`. The root has none, a trunk is its own.
    pub fn trunk(&self, id: NodeId) -> Option<NodeId> {
        match self.kind {
            NodeKind::Root => None,
            NodeKind::Trunk => Some(id),
            NodeKind::Branch { trunk, .. } => Some(trunk),
        }
    }

    /// Kind a child of the node stored at `id` gets.
    pub fn child_kind(&self, id: NodeId) -> NodeKind {
        match self.kind {
            NodeKind::Root => NodeKind::Trunk,
            NodeKind::Trunk => NodeKind::Branch {
                parent: id,
                trunk: id,
            },
            NodeKind::Branch { trunk, .. } => NodeKind::Branch { parent: id, trunk },
        }
    }

    /// Same logical position: both nodes wrap the same hub.
    pub fn same_position(&self, other: &PathNode) -> bool {
        self.hub == other.hub
    }
}
