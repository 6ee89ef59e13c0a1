//! Search-tree nodes and the arena that owns them.
//!
//! Parents are stored as [`NodeId`] indices into the owning [`SearchTree`],
//! never as references. Path reconstruction is an index walk, and the whole
//! tree is dropped at once when the search that built it returns.

/// Stable handle of a node inside one [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena (also its creation order).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A search-tree node.
///
/// Invariants (established by [`crate::expand::expand`]):
/// `path_cost(child) = path_cost(parent) + step_cost`,
/// `depth(child) = depth(parent) + 1`. The root has no parent and no action,
/// cost 0 and depth 0.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    /// Problem state at this node.
    pub state: S,
    /// Parent handle (`None` for the root).
    pub parent: Option<NodeId>,
    /// The action that produced this node from its parent.
    pub action: Option<A>,
    /// Cumulative path cost from the root.
    pub path_cost: f64,
    /// Tree depth (root = 0).
    pub depth: u32,
}

impl<S, A> Node<S, A> {
    /// A root node for `state`.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena of nodes for a single search invocation.
///
/// Nodes are append-only: a [`NodeId`] stays valid for the lifetime of the
/// tree. Nodes produced by expansion are detached until [`SearchTree::insert`]
/// attaches them, so strategies only pay for children they keep.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> SearchTree<S, A> {
    /// Create a tree holding only the root node for `initial`.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            nodes: vec![Node::root(initial)],
        }
    }

    /// Handle of the root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach a node and return its handle.
    pub fn insert(&mut self, node: Node<S, A>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    /// Number of attached nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles from the root to `id`, inclusive.
    #[must_use]
    pub fn path_from_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.get(node_id).parent;
        }
        path.reverse();
        path
    }
}

impl<S, A: Clone> SearchTree<S, A> {
    /// The action sequence leading from the root to `id`.
    #[must_use]
    pub fn actions_to(&self, id: NodeId) -> Vec<A> {
        self.path_from_root(id)
            .into_iter()
            .filter_map(|n| self.get(n).action.clone())
            .collect()
    }
}

impl<S: Clone, A> SearchTree<S, A> {
    /// The state sequence from the root to `id`, inclusive.
    #[must_use]
    pub fn states_to(&self, id: NodeId) -> Vec<S> {
        self.path_from_root(id)
            .into_iter()
            .map(|n| self.get(n).state.clone())
            .collect()
    }
}
