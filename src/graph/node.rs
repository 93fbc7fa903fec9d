use std::fmt;

/// Identifies a vertex of a [`FlowNetwork`](super::FlowNetwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Position of the node in the network, usable as a vector index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A contiguous run of nodes sharing one role, e.g. "buyer" or "time slot".
///
/// Role-local indices `0..len` map onto consecutive [`NodeId`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeBlock {
    role: &'static str,
    start: usize,
    len: usize,
}

impl NodeBlock {
    /// Returns the node for role-local index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn at(&self, i: usize) -> NodeId {
        assert!(
            i < self.len,
            "{} index {} out of range (block has {} nodes)",
            self.role,
            i,
            self.len
        );
        NodeId(self.start + i)
    }

    pub fn role(&self) -> &'static str {
        self.role
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if `node` was reserved by this block.
    pub fn contains(&self, node: NodeId) -> bool {
        node.0 >= self.start && node.0 < self.start + self.len
    }

    /// Inverse of [`at`](Self::at).
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.contains(node).then(|| node.0 - self.start)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> {
        (self.start..self.start + self.len).map(NodeId)
    }
}

/// Allocates node ids for the roles of a network model.
///
/// Replaces hand-maintained offset counters: each call to [`single`](Self::single)
/// or [`block`](Self::block) reserves the next free ids, and [`locate`](Self::locate)
/// translates an id back to its role and local index.
#[derive(Debug, Clone, Default)]
pub struct NodeLayout {
    blocks: Vec<NodeBlock>,
    next: usize,
}

impl NodeLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a single node, such as a source or sink.
    pub fn single(&mut self, role: &'static str) -> NodeId {
        self.block(role, 1).at(0)
    }

    /// Reserves `len` consecutive nodes for `role`.
    ///
    /// # Arguments
    /// * `role` - Name reported by [`locate`](Self::locate) and in out-of-range panics
    /// * `len` - Number of nodes; empty blocks are allowed
    ///
    /// # Returns
    /// * A [`NodeBlock`] mapping local indices `0..len` to the reserved ids
    pub fn block(&mut self, role: &'static str, len: usize) -> NodeBlock {
        let block = NodeBlock {
            role,
            start: self.next,
            len,
        };
        self.next += len;
        self.blocks.push(block);
        block
    }

    /// Total number of nodes reserved so far.
    pub fn node_count(&self) -> usize {
        self.next
    }

    /// Returns the role and role-local index of `node`, if it was reserved.
    ///
    /// # Complexity
    /// * Time: O(log B) for B blocks
    pub fn locate(&self, node: NodeId) -> Option<(&'static str, usize)> {
        // Blocks are allocated in increasing order of start.
        let pos = self
            .blocks
            .partition_point(|b| b.start + b.len <= node.0);
        let block = self.blocks.get(pos)?;
        block.index_of(node).map(|i| (block.role, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_assigns_consecutive_ids() {
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let buyers = layout.block("buyer", 3);
        let sites = layout.block("site", 2);

        assert_eq!(source, NodeId(0));
        assert_eq!(sink, NodeId(1));
        assert_eq!(buyers.at(0), NodeId(2));
        assert_eq!(buyers.at(2), NodeId(4));
        assert_eq!(sites.at(0), NodeId(5));
        assert_eq!(layout.node_count(), 7);
    }

    #[test]
    fn test_locate_inverts_at() {
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let empty = layout.block("unused", 0);
        let items = layout.block("item", 4);
        let slots = layout.block("slot", 5);

        assert!(empty.is_empty());
        assert_eq!(layout.locate(source), Some(("source", 0)));
        for i in 0..items.len() {
            assert_eq!(layout.locate(items.at(i)), Some(("item", i)));
        }
        for i in 0..slots.len() {
            assert_eq!(layout.locate(slots.at(i)), Some(("slot", i)));
        }
        assert_eq!(layout.locate(NodeId(layout.node_count())), None);
    }

    #[test]
    fn test_block_iter_and_contains() {
        let mut layout = NodeLayout::new();
        layout.single("source");
        let block = layout.block("station", 3);
        let ids: Vec<_> = block.iter().collect();
        assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert!(block.contains(NodeId(3)));
        assert!(!block.contains(NodeId(0)));
        assert_eq!(block.index_of(NodeId(2)), Some(1));
        assert_eq!(block.role(), "station");
    }

    #[test]
    #[should_panic(expected = "station index 3 out of range")]
    fn test_block_at_out_of_range_panics() {
        let mut layout = NodeLayout::new();
        let block = layout.block("station", 3);
        block.at(3);
    }
}
