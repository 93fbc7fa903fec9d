//! Police cars leave their stations, pick up a photograph each, and bring it back to a station.
//!
//! Input per case: `n m k l`, then `k` station intersections, then `l` photograph
//! intersections, then `m` one-way roads `x y`. On the way to a photograph roads can be
//! shared freely; carrying a photograph, every road can be used only once.
//! Answer: the maximum number of photographs brought to stations.
//!
//! The network has two copies of the city: cars travel empty in the first and loaded in the
//! second, and picking up a photograph moves them from one copy to the other.

use crate::error::{Error, Result};
use crate::graph::{max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone)]
pub struct Case {
    pub intersections: usize,
    pub stations: Vec<usize>,
    pub photographs: Vec<usize>,
    pub roads: Vec<(usize, usize)>,
}

fn counts(locations: &[usize], n: usize) -> Vec<i64> {
    let mut counts = vec![0; n];
    for &x in locations {
        counts[x] += 1;
    }
    counts
}

pub struct SurveillancePhotograph;

impl Problem for SurveillancePhotograph {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let n = sc.usize()?;
        let m = sc.usize()?;
        let k = sc.usize()?;
        let l = sc.usize()?;
        let stations = sc.vec::<usize>(k)?;
        let photographs = sc.vec::<usize>(l)?;
        let mut roads = Vec::with_capacity(m);
        for _ in 0..m {
            let (x, y) = (sc.usize()?, sc.usize()?);
            if x == y {
                return Err(Error::invalid_input(format!("road {} -> {} is a loop", x, y)));
            }
            roads.push((x, y));
        }
        let out_of_range = stations
            .iter()
            .chain(&photographs)
            .chain(roads.iter().flat_map(|(x, y)| [x, y]))
            .any(|&v| v >= n);
        if out_of_range {
            return Err(Error::invalid_input("intersection out of range"));
        }
        Ok(Case {
            intersections: n,
            stations,
            photographs,
            roads,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let n = case.intersections;
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let empty = layout.block("empty car", n);
        let loaded = layout.block("loaded car", n);
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        for (i, &count) in counts(&case.stations, n).iter().enumerate() {
            if count > 0 {
                net.add_edge(source, empty.at(i), count, 0);
                net.add_edge(loaded.at(i), sink, count, 0);
            }
        }
        for (i, &count) in counts(&case.photographs, n).iter().enumerate() {
            if count > 0 {
                net.add_edge(empty.at(i), loaded.at(i), count, 0);
            }
        }
        // No more than this many cars or photographs can be on the move at once.
        let unbounded = case.stations.len().min(case.photographs.len()) as i64;
        for &(x, y) in &case.roads {
            net.add_edge(empty.at(x), empty.at(y), unbounded, 0);
            net.add_edge(loaded.at(x), loaded.at(y), 1, 0);
        }

        Ok(max_flow(&mut net, source, sink)?.to_string())
    }
}
