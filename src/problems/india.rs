//! Ship as many suitcases as possible from one city to another on a fixed budget.
//!
//! Input per case: `c g b k a` (cities, guides, budget, start city, target city), then `g`
//! lines `x y d e`: a guide travelling from `x` to `y` charging `d` per suitcase for up to
//! `e` suitcases. Answer: the largest number of suitcases whose cheapest shipping cost fits
//! the budget.
//!
//! The minimum cost of shipping `f` suitcases is non-decreasing in `f`, so the answer is
//! found by binary search over the flow value.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{min_cost_flow, FlowNetwork, FlowResult, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone, Copy)]
pub struct Guide {
    pub from: usize,
    pub to: usize,
    pub cost: i64,
    pub capacity: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub cities: usize,
    pub guides: Vec<Guide>,
    pub budget: i64,
    pub start: usize,
    pub target: usize,
}

impl Case {
    /// Cheapest way to ship up to `limit` suitcases.
    fn ship(&self, limit: i64) -> Result<FlowResult<i64>> {
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let cities = layout.block("city", self.cities);
        let guides = layout.block("guide", self.guides.len());
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        net.add_edge(source, cities.at(self.start), limit, 0);
        for (i, guide) in self.guides.iter().enumerate() {
            net.add_edge(cities.at(guide.from), guides.at(i), guide.capacity, guide.cost);
            net.add_edge(guides.at(i), cities.at(guide.to), guide.capacity, 0);
        }
        min_cost_flow(&mut net, source, cities.at(self.target), limit)
    }
}

pub struct India;

impl Problem for India {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let cities = sc.usize()?;
        let g = sc.usize()?;
        let budget = sc.next::<i64>()?;
        let start = sc.usize()?;
        let target = sc.usize()?;
        if start >= cities || target >= cities || start == target {
            return Err(Error::invalid_input("start and target must be distinct cities"));
        }
        let mut guides = Vec::with_capacity(g);
        for _ in 0..g {
            let guide = Guide {
                from: sc.usize()?,
                to: sc.usize()?,
                cost: sc.next()?,
                capacity: sc.next()?,
            };
            if guide.from >= cities || guide.to >= cities {
                return Err(Error::invalid_input("guide travels between unknown cities"));
            }
            if guide.cost < 0 || guide.capacity < 0 {
                return Err(Error::invalid_input("guide cost and capacity must be non-negative"));
            }
            guides.push(guide);
        }
        Ok(Case {
            cities,
            guides,
            budget,
            start,
            target,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let upper: i64 = case.guides.iter().map(|g| g.capacity).sum();
        let full = case.ship(upper)?;
        if full.cost <= case.budget {
            return Ok(full.flow.to_string());
        }

        // Invariant: `low` suitcases fit the budget, `high` do not.
        let (mut low, mut high) = (0, full.flow);
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if case.ship(mid)?.cost <= case.budget {
                low = mid;
            } else {
                high = mid;
            }
        }
        debug!("india: {} suitcases within budget {}", low, case.budget);
        Ok(low.to_string())
    }
}
