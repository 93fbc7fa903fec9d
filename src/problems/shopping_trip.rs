//! Can every store be visited from home (intersection 0) along street-disjoint routes?
//!
//! Input per case: `n m s`, then `s` store intersections, then `m` undirected streets `a b`.
//! Answer: `yes` or `no`.

use crate::error::{Error, Result};
use crate::graph::{max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone)]
pub struct Case {
    pub intersections: usize,
    pub stores: Vec<usize>,
    pub streets: Vec<(usize, usize)>,
}

pub struct ShoppingTrip;

impl Problem for ShoppingTrip {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let n = sc.usize()?;
        let m = sc.usize()?;
        let s = sc.usize()?;
        let stores = sc.vec::<usize>(s)?;
        let mut streets = Vec::with_capacity(m);
        for _ in 0..m {
            streets.push((sc.usize()?, sc.usize()?));
        }
        if n == 0 {
            return Err(Error::invalid_input("shopping trip needs at least one intersection"));
        }
        let out_of_range = stores
            .iter()
            .chain(streets.iter().flat_map(|(a, b)| [a, b]))
            .any(|&v| v >= n);
        if out_of_range {
            return Err(Error::invalid_input("intersection out of range"));
        }
        Ok(Case {
            intersections: n,
            stores,
            streets,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let mut layout = NodeLayout::new();
        let intersections = layout.block("intersection", case.intersections);
        let sink = layout.single("sink");
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        let mut stores_at = vec![0i64; case.intersections];
        for &store in &case.stores {
            stores_at[store] += 1;
        }
        for (i, &count) in stores_at.iter().enumerate() {
            if count > 0 {
                net.add_edge(intersections.at(i), sink, count, 0);
            }
        }
        for &(a, b) in &case.streets {
            net.add_edge(intersections.at(a), intersections.at(b), 1, 0);
            net.add_edge(intersections.at(b), intersections.at(a), 1, 0);
        }

        let flow = max_flow(&mut net, intersections.at(0), sink)?;
        let ok = flow == case.stores.len() as i64;
        Ok(if ok { "yes" } else { "no" }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_shopping_trip_samples() {
        let input = "3\n\
                     3 2 2\n1 2\n0 1\n0 2\n\
                     3 2 2\n1 2\n0 1\n1 2\n\
                     2 1 1\n0\n0 1\n";
        let answers = run::<ShoppingTrip>(input).unwrap();
        assert_eq!(answers, vec!["yes", "no", "yes"]);
    }

    #[test]
    fn test_shopping_trip_rejects_unknown_intersection() {
        let input = "1\n2 1 1\n1\n0 5\n";
        assert!(matches!(
            run::<ShoppingTrip>(input),
            Err(Error::InvalidInput(_))
        ));
    }
}
