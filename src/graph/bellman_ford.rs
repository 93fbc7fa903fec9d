use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, FlowNum, NodeId};

/// Shortest path distances from `source` over edges with positive residual capacity.
///
/// Uses the queue-based Bellman-Ford variant. Unreachable vertices get `None`.
/// Returns [`Error::NegativeCycle`] if a negative-cost cycle is reachable from `source`.
///
/// # Complexity
/// * Time: O(VE) worst case
/// * Space: O(V)
pub fn residual_distances<T: FlowNum>(
    network: &FlowNetwork<T>,
    source: NodeId,
) -> Result<Vec<Option<T>>> {
    network.check_vertex(source)?;
    let n = network.node_count();
    let mut dist: Vec<Option<T>> = vec![None; n];
    let mut in_queue = vec![false; n];
    // Number of edges on the current shortest path; reaching n means a cycle.
    let mut hops = vec![0usize; n];
    let mut queue = VecDeque::new();

    dist[source.0] = Some(T::zero());
    in_queue[source.0] = true;
    queue.push_back(source.0);

    while let Some(u) = queue.pop_front() {
        in_queue[u] = false;
        let du = match dist[u] {
            Some(d) => d,
            None => continue,
        };
        for &id in network.adjacent(u) {
            let edge = network.raw_edge(id);
            if edge.residual() <= T::zero() {
                continue;
            }
            let v = edge.to.0;
            let candidate = du + edge.cost;
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                hops[v] = hops[u] + 1;
                if hops[v] >= n {
                    return Err(Error::NegativeCycle);
                }
                if !in_queue[v] {
                    in_queue[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_distances_with_negative_edge() {
        let mut net: FlowNetwork = FlowNetwork::new(4);
        net.add_edge(NodeId(0), NodeId(1), 1, 4);
        net.add_edge(NodeId(0), NodeId(2), 1, 1);
        net.add_edge(NodeId(1), NodeId(2), 1, -5);

        let dist = residual_distances(&net, NodeId(0)).unwrap();
        assert_eq!(dist, vec![Some(0), Some(4), Some(-1), None]);
    }

    #[test]
    fn test_saturated_edges_are_skipped() {
        let mut net: FlowNetwork = FlowNetwork::new(3);
        let e = net.add_edge(NodeId(0), NodeId(1), 1, 2);
        net.add_edge(NodeId(1), NodeId(2), 1, 2);
        net.push(e.index(), 1);

        let dist = residual_distances(&net, NodeId(0)).unwrap();
        assert_eq!(dist, vec![Some(0), None, None]);
    }

    #[test]
    fn test_negative_cycle_detected() {
        let mut net: FlowNetwork = FlowNetwork::new(3);
        net.add_edge(NodeId(0), NodeId(1), 1, 1);
        net.add_edge(NodeId(1), NodeId(2), 1, -3);
        net.add_edge(NodeId(2), NodeId(1), 1, 1);

        assert!(matches!(
            residual_distances(&net, NodeId(0)),
            Err(Error::NegativeCycle)
        ));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let net: FlowNetwork = FlowNetwork::new(2);
        assert!(matches!(
            residual_distances(&net, NodeId(5)),
            Err(Error::InvalidVertex(5))
        ));
    }
}
