use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};

use crate::error::{Error, Result};
use crate::graph::NodeId;

/// Integer type usable for capacities, costs and flow values.
pub trait FlowNum: PrimInt + Signed + Debug + Display {}

impl<T> FlowNum for T where T: PrimInt + Signed + Debug + Display {}

/// Handle to an edge returned by [`FlowNetwork::add_edge`].
///
/// Forward edges have even ids; the reverse companion of edge `e` is `e ^ 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Position of the edge in the network's edge arena.
    pub fn index(self) -> usize {
        self.0
    }

    /// The companion edge carrying the negated flow.
    pub fn reverse(self) -> EdgeId {
        EdgeId(self.0 ^ 1)
    }

    pub fn is_forward(self) -> bool {
        self.0 & 1 == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: T,
    pub cost: T,
    pub flow: T,
}

impl<T: FlowNum> Edge<T> {
    /// Capacity still available for pushing flow along this edge.
    pub fn residual(&self) -> T {
        self.capacity - self.flow
    }
}

/// A directed network of capacitated, costed edges stored as forward/reverse pairs.
#[derive(Debug, Clone)]
pub struct FlowNetwork<T = i64> {
    edges: Vec<Edge<T>>,
    adjacency: Vec<Vec<usize>>,
}

impl<T: FlowNum> FlowNetwork<T> {
    /// Creates a network with nodes `0..n` and no edges.
    ///
    /// # Arguments
    /// * `n` - Number of nodes; more can be added with [`add_node`](Self::add_node)
    ///
    /// # Examples
    ///
    /// ```
    /// use flownet::graph::{FlowNetwork, NodeId};
    ///
    /// let mut net: FlowNetwork = FlowNetwork::new(2);
    /// let e = net.add_edge(NodeId(0), NodeId(1), 4, 1);
    /// assert_eq!(net.residual(e), 4);
    /// assert_eq!(net.residual(e.reverse()), 0);
    /// ```
    pub fn new(n: usize) -> Self {
        FlowNetwork {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Appends an isolated node and returns its id.
    pub fn add_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        NodeId(self.adjacency.len() - 1)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added with [`add_edge`](Self::add_edge), reverse companions excluded.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Adds an edge `from -> to` together with its zero-capacity, negated-cost reverse edge.
    ///
    /// Parallel edges and edges in both directions between two nodes are allowed; each
    /// call creates an independent pair.
    ///
    /// # Arguments
    /// * `from`, `to` - Endpoints, both nodes of the network
    /// * `capacity` - Upper bound on the flow, at least zero
    /// * `cost` - Cost per unit of flow, may be negative
    ///
    /// # Returns
    /// * The id of the forward edge; its reverse is `id.reverse()`
    ///
    /// # Complexity
    /// * Time: O(1) amortised
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a node of the network or `capacity` is negative.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: T, cost: T) -> EdgeId {
        let n = self.node_count();
        assert!(from.0 < n, "edge source {} out of range ({} nodes)", from, n);
        assert!(to.0 < n, "edge target {} out of range ({} nodes)", to, n);
        assert!(
            capacity >= T::zero(),
            "edge {} -> {} has negative capacity {}",
            from,
            to,
            capacity
        );

        let id = self.edges.len();
        self.edges.push(Edge {
            from,
            to,
            capacity,
            cost,
            flow: T::zero(),
        });
        self.edges.push(Edge {
            from: to,
            to: from,
            capacity: T::zero(),
            cost: -cost,
            flow: T::zero(),
        });
        self.adjacency[from.0].push(id);
        self.adjacency[to.0].push(id + 1);
        EdgeId(id)
    }

    /// The edge with the given id, forward or reverse.
    pub fn edge(&self, id: EdgeId) -> &Edge<T> {
        &self.edges[id.0]
    }

    pub fn flow(&self, id: EdgeId) -> T {
        self.edges[id.0].flow
    }

    pub fn residual(&self, id: EdgeId) -> T {
        self.edges[id.0].residual()
    }

    /// Iterates over the edges added by the caller, skipping reverse companions.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<T>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .step_by(2)
            .map(|(i, e)| (EdgeId(i), e))
    }

    /// Ids of all edges (forward and reverse) leaving `node`.
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency[node.0].iter().map(|&i| EdgeId(i))
    }

    /// Net flow entering `node` minus flow leaving it.
    pub fn excess(&self, node: NodeId) -> T {
        self.adjacency[node.0]
            .iter()
            .map(|&i| &self.edges[i])
            .fold(T::zero(), |acc, e| acc - e.flow)
    }

    /// Net flow leaving `source`.
    pub fn flow_value(&self, source: NodeId) -> T {
        -self.excess(source)
    }

    /// Sum of `flow * cost` over forward edges.
    pub fn total_cost(&self) -> T {
        self.edges()
            .fold(T::zero(), |acc, (_, e)| acc + e.flow * e.cost)
    }

    /// Sets the flow on every edge back to zero, keeping capacities and costs.
    pub fn reset_flow(&mut self) {
        for edge in &mut self.edges {
            edge.flow = T::zero();
        }
    }

    /// Checks capacity bounds on every edge and conservation at every node other
    /// than `source` and `sink`.
    ///
    /// # Returns
    /// * `Ok(())` - The stored flow is feasible
    /// * `Err(Error::InvalidFlow)` - Describes the first violated edge or node
    ///
    /// # Complexity
    /// * Time: O(V + E)
    pub fn validate_flow(&self, source: NodeId, sink: NodeId) -> Result<()> {
        for (id, e) in self.edges() {
            if e.flow < T::zero() || e.flow > e.capacity {
                return Err(Error::InvalidFlow(format!(
                    "edge {} ({} -> {}) carries {} with capacity {}",
                    id.0, e.from, e.to, e.flow, e.capacity
                )));
            }
            if self.edges[id.0 + 1].flow != -e.flow {
                return Err(Error::InvalidFlow(format!(
                    "reverse of edge {} out of sync",
                    id.0
                )));
            }
        }
        for v in (0..self.node_count()).map(NodeId) {
            if v == source || v == sink {
                continue;
            }
            let excess = self.excess(v);
            if excess != T::zero() {
                return Err(Error::InvalidFlow(format!(
                    "node {} has excess {}",
                    v, excess
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, id: usize, amount: T) {
        self.edges[id].flow = self.edges[id].flow + amount;
        self.edges[id ^ 1].flow = self.edges[id ^ 1].flow - amount;
    }

    pub(crate) fn raw_edge(&self, id: usize) -> &Edge<T> {
        &self.edges[id]
    }

    pub(crate) fn adjacent(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub(crate) fn check_vertex(&self, node: NodeId) -> Result<()> {
        if node.0 < self.node_count() {
            Ok(())
        } else {
            Err(Error::InvalidVertex(node.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_creates_reverse_pair() {
        let mut net: FlowNetwork = FlowNetwork::new(2);
        let e = net.add_edge(NodeId(0), NodeId(1), 5, 3);

        assert!(e.is_forward());
        assert_eq!(net.edge_count(), 1);
        let rev = net.edge(e.reverse());
        assert_eq!(rev.from, NodeId(1));
        assert_eq!(rev.to, NodeId(0));
        assert_eq!(rev.capacity, 0);
        assert_eq!(rev.cost, -3);
        assert_eq!(net.residual(e), 5);
        assert_eq!(net.residual(e.reverse()), 0);
    }

    #[test]
    fn test_push_updates_both_directions() {
        let mut net: FlowNetwork = FlowNetwork::new(3);
        let a = net.add_edge(NodeId(0), NodeId(1), 4, 2);
        let b = net.add_edge(NodeId(1), NodeId(2), 4, 1);
        net.push(a.index(), 3);
        net.push(b.index(), 3);

        assert_eq!(net.flow(a), 3);
        assert_eq!(net.residual(a), 1);
        assert_eq!(net.residual(a.reverse()), 3);
        assert_eq!(net.flow_value(NodeId(0)), 3);
        assert_eq!(net.excess(NodeId(2)), 3);
        assert_eq!(net.total_cost(), 9);
        assert!(net.validate_flow(NodeId(0), NodeId(2)).is_ok());

        net.reset_flow();
        assert_eq!(net.total_cost(), 0);
        assert_eq!(net.flow_value(NodeId(0)), 0);
    }

    #[test]
    fn test_validate_flow_reports_conservation_violation() {
        let mut net: FlowNetwork = FlowNetwork::new(3);
        let a = net.add_edge(NodeId(0), NodeId(1), 4, 0);
        net.add_edge(NodeId(1), NodeId(2), 4, 0);
        net.push(a.index(), 2);

        let result = net.validate_flow(NodeId(0), NodeId(2));
        assert!(matches!(result, Err(Error::InvalidFlow(_))));
    }

    #[test]
    fn test_add_node_and_edges_iterator() {
        let mut net: FlowNetwork<i32> = FlowNetwork::new(1);
        let v = net.add_node();
        assert_eq!(v, NodeId(1));
        net.add_edge(NodeId(0), v, 1, 7);
        net.add_edge(v, NodeId(0), 2, -1);

        let costs: Vec<_> = net.edges().map(|(_, e)| e.cost).collect();
        assert_eq!(costs, vec![7, -1]);
        assert_eq!(net.out_edges(NodeId(0)).count(), 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_add_edge_rejects_unknown_node() {
        let mut net: FlowNetwork = FlowNetwork::new(2);
        net.add_edge(NodeId(0), NodeId(2), 1, 0);
    }

    #[test]
    #[should_panic(expected = "negative capacity")]
    fn test_add_edge_rejects_negative_capacity() {
        let mut net: FlowNetwork = FlowNetwork::new(2);
        net.add_edge(NodeId(0), NodeId(1), -1, 0);
    }
}
