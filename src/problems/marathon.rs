//! How many runners can take part in a marathon if every one of them runs a shortest route?
//!
//! Input per case: `n m s f`, then `m` two-way streets `a b c d` of width `c` and length `d`.
//! Every unit of width carries one runner. Answer: the largest number of runners going from
//! `s` to `f` along shortest routes.
//!
//! Shortest distances from `s` are computed on the street network itself, with lengths as
//! costs. The streets lying on some shortest route then form the flow network.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{max_flow, residual_distances, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone, Copy)]
pub struct Street {
    pub a: usize,
    pub b: usize,
    pub width: i64,
    pub length: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub intersections: usize,
    pub start: usize,
    pub finish: usize,
    pub streets: Vec<Street>,
}

pub struct Marathon;

impl Problem for Marathon {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let n = sc.usize()?;
        let m = sc.usize()?;
        let start = sc.usize()?;
        let finish = sc.usize()?;
        if start >= n || finish >= n || start == finish {
            return Err(Error::invalid_input("start and finish must be distinct intersections"));
        }
        let mut streets = Vec::with_capacity(m);
        for _ in 0..m {
            let street = Street {
                a: sc.usize()?,
                b: sc.usize()?,
                width: sc.next()?,
                length: sc.next()?,
            };
            if street.a >= n || street.b >= n {
                return Err(Error::invalid_input("street leads to an unknown intersection"));
            }
            if street.width < 0 || street.length < 0 {
                return Err(Error::invalid_input("street width and length must be non-negative"));
            }
            // Loops never lie on a shortest route.
            if street.a != street.b {
                streets.push(street);
            }
        }
        Ok(Case {
            intersections: n,
            start,
            finish,
            streets,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let mut layout = NodeLayout::new();
        let intersections = layout.block("intersection", case.intersections);
        let (start, finish) = (intersections.at(case.start), intersections.at(case.finish));

        // Width doubles as residual capacity so that only usable streets count as reachable.
        let mut city: FlowNetwork = FlowNetwork::new(layout.node_count());
        for street in &case.streets {
            let (a, b) = (intersections.at(street.a), intersections.at(street.b));
            city.add_edge(a, b, street.width, street.length);
            city.add_edge(b, a, street.width, street.length);
        }
        let dist = residual_distances(&city, start)?;

        let mut routes: FlowNetwork = FlowNetwork::new(layout.node_count());
        for (_, e) in city.edges() {
            if let (Some(du), Some(dv)) = (dist[e.from.index()], dist[e.to.index()]) {
                if dv - du == e.cost {
                    routes.add_edge(e.from, e.to, e.capacity, 0);
                }
            }
        }
        debug!(
            "marathon: {} of {} street directions on shortest routes",
            routes.edge_count(),
            city.edge_count()
        );

        Ok(max_flow(&mut routes, start, finish)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_marathon_samples() {
        let input = "2\n\
                     4 5 0 3\n0 1 2 1\n1 3 2 1\n0 2 5 1\n2 3 1 1\n0 3 10 5\n\
                     3 1 0 2\n0 1 3 1\n";
        let answers = run::<Marathon>(input).unwrap();
        assert_eq!(answers, vec!["3", "0"]);
    }

    #[test]
    fn test_marathon_longer_route_is_ignored() {
        // The wide detour through 2 is one unit longer than the narrow direct street.
        let input = "1\n3 3 0 1\n0 1 1 2\n0 2 9 1\n2 1 9 2\n";
        assert_eq!(run::<Marathon>(input).unwrap(), vec!["1"]);
    }

    #[test]
    fn test_marathon_rejects_equal_terminals() {
        assert!(matches!(
            run::<Marathon>("1\n2 0 1 1\n"),
            Err(Error::InvalidInput(_))
        ));
    }
}
