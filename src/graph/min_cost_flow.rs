use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::bellman_ford::residual_distances;
use crate::graph::{FlowNetwork, FlowNum, NodeId};

/// Flow value leaving the source and total cost of the flow stored in a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowResult<T> {
    pub flow: T,
    pub cost: T,
}

/// Computes a maximum flow of minimum cost from `source` to `sink`.
///
/// Flow already present in `network` is kept and extended, so solving an
/// already optimal network changes nothing. The result reports the totals
/// stored in the network afterwards.
///
/// # Errors
/// * [`Error::InvalidVertex`] if `source` or `sink` is not in the network
/// * [`Error::InvalidInput`] if `source == sink`
/// * [`Error::NegativeCycle`] if the residual network has a negative-cost cycle
///   reachable from `source`
///
/// # Examples
///
/// ```
/// use flownet::graph::{min_cost_max_flow, FlowNetwork, NodeId};
///
/// let mut net: FlowNetwork = FlowNetwork::new(2);
/// net.add_edge(NodeId(0), NodeId(1), 5, 3);
/// let result = min_cost_max_flow(&mut net, NodeId(0), NodeId(1)).unwrap();
/// assert_eq!((result.flow, result.cost), (5, 15));
/// ```
pub fn min_cost_max_flow<T: FlowNum>(
    network: &mut FlowNetwork<T>,
    source: NodeId,
    sink: NodeId,
) -> Result<FlowResult<T>> {
    min_cost_flow(network, source, sink, T::max_value())
}

/// Like [`min_cost_max_flow`], but stops once the flow value out of `source`
/// reaches `limit`.
///
/// `limit` bounds the total flow stored in the network, not the amount added by
/// this call. Flow is never removed to reach a smaller total.
///
/// # Arguments
/// * `network` - The network to augment; flows are updated in place
/// * `source`, `sink` - Distinct nodes of `network`
/// * `limit` - Upper bound on the flow value leaving `source`
///
/// # Returns
/// * `Ok(FlowResult)` - Flow value and total cost stored in the network afterwards
/// * `Err(Error::InvalidInput)` - If `source == sink` or `limit` is below the flow
///   already leaving `source`
/// * `Err(Error)` - Any other error listed for [`min_cost_max_flow`]
///
/// # Complexity
/// * Time: O(F · E log V) for F augmentations, plus O(VE) once if some residual
///   edge has negative cost
/// * Space: O(V + E)
pub fn min_cost_flow<T: FlowNum>(
    network: &mut FlowNetwork<T>,
    source: NodeId,
    sink: NodeId,
    limit: T,
) -> Result<FlowResult<T>> {
    network.check_vertex(source)?;
    network.check_vertex(sink)?;
    if source == sink {
        return Err(Error::invalid_input("source and sink must differ"));
    }

    let mut flow = network.flow_value(source);
    if limit < flow {
        return Err(Error::invalid_input(format!(
            "flow limit {} is below the {} units already leaving {}",
            limit, flow, source
        )));
    }
    let mut potentials = initial_potentials(network, source)?;
    let mut augmentations = 0usize;

    while flow < limit {
        let Some(path) = shortest_path(network, source, sink, &mut potentials) else {
            break;
        };

        let mut amount = limit - flow;
        for &id in &path {
            amount = amount.min(network.raw_edge(id).residual());
        }
        let path_cost = path
            .iter()
            .fold(T::zero(), |acc, &id| acc + network.raw_edge(id).cost);
        trace!(
            "augmenting {} units along {} edges at unit cost {}",
            amount,
            path.len(),
            path_cost
        );

        for &id in &path {
            network.push(id, amount);
        }
        flow = flow + amount;
        augmentations += 1;
    }

    let result = FlowResult {
        flow,
        cost: network.total_cost(),
    };
    debug!(
        "min cost flow {} -> {}: flow {} cost {} after {} augmentations",
        source, sink, result.flow, result.cost, augmentations
    );
    Ok(result)
}

/// Computes a flow of exactly `target` units at minimum cost.
///
/// Returns `Ok(None)` when the network cannot carry `target` units, and the same
/// errors as [`min_cost_flow`], including [`Error::InvalidInput`] when the network
/// already carries more than `target`.
pub fn min_cost_flow_exact<T: FlowNum>(
    network: &mut FlowNetwork<T>,
    source: NodeId,
    sink: NodeId,
    target: T,
) -> Result<Option<FlowResult<T>>> {
    let result = min_cost_flow(network, source, sink, target)?;
    Ok((result.flow == target).then_some(result))
}

fn initial_potentials<T: FlowNum>(network: &FlowNetwork<T>, source: NodeId) -> Result<Vec<T>> {
    let has_negative = network
        .edges()
        .flat_map(|(id, _)| [id, id.reverse()])
        .any(|id| network.residual(id) > T::zero() && network.edge(id).cost < T::zero());
    if !has_negative {
        return Ok(vec![T::zero(); network.node_count()]);
    }

    debug!("negative residual costs present, seeding potentials with Bellman-Ford");
    let dist = residual_distances(network, source)?;
    // Unreachable vertices stay unreachable for the rest of the solve.
    Ok(dist.into_iter().map(|d| d.unwrap_or_else(T::zero)).collect())
}

/// Dijkstra on reduced costs. Updates `potentials` for every reached vertex and
/// returns the raw edge ids of the path from `source` to `sink`.
fn shortest_path<T: FlowNum>(
    network: &FlowNetwork<T>,
    source: NodeId,
    sink: NodeId,
    potentials: &mut [T],
) -> Option<Vec<usize>> {
    let n = network.node_count();
    let mut dist: Vec<Option<T>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut done = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source.0] = Some(T::zero());
    heap.push(Reverse((T::zero(), source.0)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if done[u] {
            continue;
        }
        done[u] = true;
        for &id in network.adjacent(u) {
            let edge = network.raw_edge(id);
            let v = edge.to.0;
            if done[v] || edge.residual() <= T::zero() {
                continue;
            }
            let reduced = edge.cost + potentials[u] - potentials[v];
            debug_assert!(reduced >= T::zero(), "negative reduced cost on edge {}", id);
            let candidate = d + reduced;
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                parent[v] = Some(id);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    dist[sink.0]?;
    for (p, d) in potentials.iter_mut().zip(&dist) {
        if let Some(d) = d {
            *p = *p + *d;
        }
    }

    let mut path = Vec::new();
    let mut v = sink.0;
    while v != source.0 {
        let id = parent[v]?;
        path.push(id);
        v = network.raw_edge(id).from.0;
    }
    path.reverse();
    Some(path)
}
