//! How soon can every agent be safe inside a shelter?
//!
//! Input per case: `n m a s c d`, then `m` roads `kind x y z` where `kind` is `S` (one-way
//! slope from `x` to `y`) or `L` (two-way lift), taking `z` time units. Then `a` agent
//! positions and `s` shelter positions. A shelter admits `c` agents one after another;
//! entering takes `d` time units. Answer: the earliest time at which all agents are inside.
//!
//! The `j`-th agent to use a shelter must arrive `j * d` earlier, so each shelter becomes
//! `c` slots with staggered deadlines. Whether a deadline `t` works is a bipartite
//! matching between agents and slots, which is monotone in `t`.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{max_flow, residual_distances, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadKind {
    Slope,
    Lift,
}

#[derive(Debug, Clone, Copy)]
pub struct Road {
    pub kind: RoadKind,
    pub from: usize,
    pub to: usize,
    pub time: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub positions: usize,
    pub roads: Vec<Road>,
    pub agents: Vec<usize>,
    pub shelters: Vec<usize>,
    pub capacity: usize,
    pub entry_time: i64,
}

impl Case {
    /// Travel time from each agent to each shelter slot, `None` if unreachable.
    fn slot_times(&self) -> Result<Vec<Vec<Option<i64>>>> {
        let mut layout = NodeLayout::new();
        let positions = layout.block("position", self.positions);
        let mut map: FlowNetwork = FlowNetwork::new(layout.node_count());
        for road in &self.roads {
            let (x, y) = (positions.at(road.from), positions.at(road.to));
            map.add_edge(x, y, 1, road.time);
            if road.kind == RoadKind::Lift {
                map.add_edge(y, x, 1, road.time);
            }
        }

        let slots = self.shelters.len() * self.capacity;
        let mut times = Vec::with_capacity(self.agents.len());
        for &agent in &self.agents {
            let dist = residual_distances(&map, positions.at(agent))?;
            let mut row = vec![None; slots];
            for (k, &shelter) in self.shelters.iter().enumerate() {
                for j in 0..self.capacity {
                    row[j * self.shelters.len() + k] = dist[positions.at(shelter).index()]
                        .map(|d| d + j as i64 * self.entry_time);
                }
            }
            times.push(row);
        }
        Ok(times)
    }
}

/// True if every agent can be matched to its own slot reachable within `deadline`.
fn all_sheltered(times: &[Vec<Option<i64>>], deadline: i64) -> Result<bool> {
    let slots = times.first().map_or(0, Vec::len);
    let mut layout = NodeLayout::new();
    let source = layout.single("source");
    let sink = layout.single("sink");
    let agents = layout.block("agent", times.len());
    let slot_nodes = layout.block("shelter slot", slots);
    let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

    for (i, row) in times.iter().enumerate() {
        net.add_edge(source, agents.at(i), 1, 0);
        for (k, time) in row.iter().enumerate() {
            if matches!(time, Some(t) if *t <= deadline) {
                net.add_edge(agents.at(i), slot_nodes.at(k), 1, 0);
            }
        }
    }
    for slot in slot_nodes.iter() {
        net.add_edge(slot, sink, 1, 0);
    }
    Ok(max_flow(&mut net, source, sink)? == times.len() as i64)
}

pub struct SecretService;

impl Problem for SecretService {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let positions = sc.usize()?;
        let m = sc.usize()?;
        let a = sc.usize()?;
        let s = sc.usize()?;
        let capacity = sc.usize()?;
        let entry_time = sc.next::<i64>()?;
        if entry_time < 0 {
            return Err(Error::invalid_input("shelter entry time must be non-negative"));
        }

        let mut roads = Vec::with_capacity(m);
        for _ in 0..m {
            let kind = match sc.next::<String>()?.as_str() {
                "S" => RoadKind::Slope,
                "L" => RoadKind::Lift,
                other => {
                    return Err(Error::invalid_input(format!(
                        "road kind must be S or L, got {}",
                        other
                    )))
                }
            };
            let road = Road {
                kind,
                from: sc.usize()?,
                to: sc.usize()?,
                time: sc.next()?,
            };
            if road.from >= positions || road.to >= positions {
                return Err(Error::invalid_input("road leads to an unknown position"));
            }
            if road.time < 0 {
                return Err(Error::invalid_input("road time must be non-negative"));
            }
            roads.push(road);
        }

        let agents = sc.vec::<usize>(a)?;
        let shelters = sc.vec::<usize>(s)?;
        if agents.iter().chain(&shelters).any(|&p| p >= positions) {
            return Err(Error::invalid_input("agent or shelter at an unknown position"));
        }
        Ok(Case {
            positions,
            roads,
            agents,
            shelters,
            capacity,
            entry_time,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let times = case.slot_times()?;
        // The earliest feasible deadline is zero or one of the slot times.
        let mut deadlines: Vec<i64> = times.iter().flatten().flatten().copied().collect();
        deadlines.push(0);
        deadlines.sort_unstable();
        deadlines.dedup();

        let (mut low, mut high) = (0, deadlines.len() - 1);
        if !all_sheltered(&times, deadlines[high])? {
            return Err(Error::invalid_input("not every agent can reach a shelter"));
        }
        while low < high {
            let mid = low + (high - low) / 2;
            if all_sheltered(&times, deadlines[mid])? {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        debug!(
            "secret service: all agents reach shelters by {}",
            deadlines[low]
        );
        Ok((deadlines[low] + case.entry_time).to_string())
    }
}
