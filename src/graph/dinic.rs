use log::debug;
use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, FlowNum, NodeId};

/// Computes a maximum flow from `source` to `sink` with Dinic's algorithm.
///
/// Edge costs are ignored. Flow already stored in the network is extended, and
/// the returned value is the total flow leaving `source`.
///
/// # Arguments
/// * `network` - The network to saturate; its edge flows are updated in place
/// * `source`, `sink` - Distinct nodes of `network`
///
/// # Returns
/// * `Ok(T)` - The flow value leaving `source` once no augmenting path remains
/// * `Err(Error)` - If a terminal is out of range or `source == sink`
///
/// # Complexity
/// * Time: O(V²E), O(E√V) on unit-capacity networks
/// * Space: O(V), independent of path length
pub fn max_flow<T: FlowNum>(
    network: &mut FlowNetwork<T>,
    source: NodeId,
    sink: NodeId,
) -> Result<T> {
    network.check_vertex(source)?;
    network.check_vertex(sink)?;
    if source == sink {
        return Err(Error::invalid_input("source and sink must differ"));
    }

    let n = network.node_count();
    let mut level = vec![-1i64; n];
    let mut phases = 0usize;
    while bfs(network, source.0, sink.0, &mut level) {
        let mut start = vec![0usize; n];
        while augment(network, source.0, sink.0, &level, &mut start) > T::zero() {}
        phases += 1;
    }

    let total = network.flow_value(source);
    debug!(
        "max flow {} -> {}: {} after {} phases",
        source, sink, total, phases
    );
    Ok(total)
}

/// Returns, for every node, whether it lies on the source side of a minimum cut.
///
/// Meaningful after [`max_flow`]: the source side is the set of nodes reachable
/// from `source` over edges with positive residual capacity.
pub fn min_cut<T: FlowNum>(network: &FlowNetwork<T>, source: NodeId) -> Result<Vec<bool>> {
    network.check_vertex(source)?;
    let mut visited = vec![false; network.node_count()];
    visited[source.0] = true;
    let mut queue = VecDeque::from([source.0]);

    while let Some(u) = queue.pop_front() {
        for &id in network.adjacent(u) {
            let edge = network.raw_edge(id);
            if edge.residual() > T::zero() && !visited[edge.to.0] {
                visited[edge.to.0] = true;
                queue.push_back(edge.to.0);
            }
        }
    }
    Ok(visited)
}

/// Total capacity of the edges leaving the node set marked in `side`.
///
/// # Panics
///
/// Panics if `side` is shorter than the number of nodes.
pub fn cut_capacity<T: FlowNum>(network: &FlowNetwork<T>, side: &[bool]) -> T {
    assert!(
        side.len() >= network.node_count(),
        "cut side covers {} of {} nodes",
        side.len(),
        network.node_count()
    );
    network
        .edges()
        .filter(|(_, e)| side[e.from.0] && !side[e.to.0])
        .fold(T::zero(), |acc, (_, e)| acc + e.capacity)
}

fn bfs<T: FlowNum>(network: &FlowNetwork<T>, s: usize, t: usize, level: &mut [i64]) -> bool {
    level.fill(-1);
    level[s] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(s);

    while let Some(u) = queue.pop_front() {
        for &id in network.adjacent(u) {
            let edge = network.raw_edge(id);
            if edge.residual() > T::zero() && level[edge.to.0] == -1 {
                level[edge.to.0] = level[u] + 1;
                queue.push_back(edge.to.0);
            }
        }
    }
    level[t] != -1
}

/// Pushes the bottleneck of one path from `s` to `t` through the level graph.
///
/// The path is kept as an explicit stack of edge ids. `start[u]` is the current
/// arc of `u`; arcs behind it are saturated or lead to dead ends for this phase.
/// Returns zero once the level graph holds no more paths.
fn augment<T: FlowNum>(
    network: &mut FlowNetwork<T>,
    s: usize,
    t: usize,
    level: &[i64],
    start: &mut [usize],
) -> T {
    let mut path: Vec<usize> = Vec::new();
    let mut u = s;
    loop {
        if u == t {
            let amount = path.iter().fold(T::max_value(), |acc, &id| {
                acc.min(network.raw_edge(id).residual())
            });
            for &id in &path {
                network.push(id, amount);
            }
            return amount;
        }

        let mut next = None;
        while start[u] < network.adjacent(u).len() {
            let id = network.adjacent(u)[start[u]];
            let edge = network.raw_edge(id);
            if edge.residual() > T::zero() && level[edge.to.0] == level[u] + 1 {
                next = Some((id, edge.to.0));
                break;
            }
            start[u] += 1;
        }

        match next {
            Some((id, to)) => {
                path.push(id);
                u = to;
            }
            None => {
                // Dead end: retreat and skip the arc that led here.
                let Some(id) = path.pop() else {
                    return T::zero();
                };
                u = network.raw_edge(id).from.0;
                start[u] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::min_cost_flow;

    fn network(n: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork {
        let mut net = FlowNetwork::new(n);
        for &(from, to, capacity) in edges {
            net.add_edge(NodeId(from), NodeId(to), capacity, 0);
        }
        net
    }

    #[test]
    fn test_dinic_max_flow() {
        let mut net = network(
            6,
            &[
                (0, 1, 10),
                (0, 2, 10),
                (1, 3, 4),
                (1, 4, 8),
                (2, 4, 9),
                (3, 5, 10),
                (4, 3, 6),
                (4, 5, 10),
            ],
        );
        assert_eq!(max_flow(&mut net, NodeId(0), NodeId(5)).unwrap(), 19);
        assert!(net.validate_flow(NodeId(0), NodeId(5)).is_ok());

        let side = min_cut(&net, NodeId(0)).unwrap();
        assert!(side[0] && !side[5]);
        assert_eq!(cut_capacity(&net, &side), 19);
    }

    #[test]
    fn test_max_flow_extends_existing_flow() {
        // One unit already routed along the cheap path 0 -> 1 -> 2.
        let mut net: FlowNetwork = FlowNetwork::new(3);
        net.add_edge(NodeId(0), NodeId(1), 3, 1);
        net.add_edge(NodeId(1), NodeId(2), 3, 1);
        net.add_edge(NodeId(0), NodeId(2), 2, 5);
        let partial = min_cost_flow(&mut net, NodeId(0), NodeId(2), 1).unwrap();
        assert_eq!(partial.flow, 1);

        assert_eq!(max_flow(&mut net, NodeId(0), NodeId(2)).unwrap(), 5);
        assert!(net.validate_flow(NodeId(0), NodeId(2)).is_ok());
    }

    #[test]
    fn test_max_flow_ignores_costs() {
        let mut net: FlowNetwork = FlowNetwork::new(3);
        net.add_edge(NodeId(0), NodeId(1), 4, -7);
        net.add_edge(NodeId(1), NodeId(2), 4, 100);
        net.add_edge(NodeId(0), NodeId(2), 1, -3);
        assert_eq!(max_flow(&mut net, NodeId(0), NodeId(2)).unwrap(), 5);
    }

    #[test]
    fn test_max_flow_long_path() {
        // Deep enough that a recursive path search would exhaust the stack.
        let n = 100_000;
        let mut net: FlowNetwork = FlowNetwork::new(n);
        for v in 0..n - 1 {
            let capacity = if v == n / 2 { 2 } else { 3 };
            net.add_edge(NodeId(v), NodeId(v + 1), capacity, 0);
        }
        assert_eq!(max_flow(&mut net, NodeId(0), NodeId(n - 1)).unwrap(), 2);

        let side = min_cut(&net, NodeId(0)).unwrap();
        assert!(side[n / 2] && !side[n / 2 + 1]);
    }

    #[test]
    fn test_min_cut_source_side() {
        // Bottleneck is the 1 -> 2 edge.
        let mut net = network(4, &[(0, 1, 5), (1, 2, 2), (2, 3, 5)]);
        assert_eq!(max_flow(&mut net, NodeId(0), NodeId(3)).unwrap(), 2);
        let side = min_cut(&net, NodeId(0)).unwrap();
        assert_eq!(side, vec![true, true, false, false]);
    }

    #[test]
    fn test_dinic_invalid_vertex() {
        let mut net = network(2, &[(0, 1, 1)]);
        assert!(matches!(
            max_flow(&mut net, NodeId(0), NodeId(2)),
            Err(Error::InvalidVertex(2))
        ));
    }
}
