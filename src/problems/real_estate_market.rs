//! Sell land sites to buyers, respecting per-state sale limits, to maximise sales then profit.
//!
//! Input per case: `n m s`, then `s` state limits, then the state (1-based) of each of the
//! `m` sites, then an `n x m` matrix of bids. Every buyer buys at most one site.
//! Answer: `<sites sold> <total profit>`.

use crate::error::{Error, Result};
use crate::graph::{min_cost_max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

pub const MAX_BID: i64 = 100;

#[derive(Debug, Clone)]
pub struct Case {
    pub state_limits: Vec<i64>,
    pub state_of_site: Vec<usize>,
    pub bids: Vec<Vec<i64>>,
}

pub struct RealEstateMarket;

impl Problem for RealEstateMarket {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let n = sc.usize()?;
        let m = sc.usize()?;
        let s = sc.usize()?;
        let state_limits = sc.vec::<i64>(s)?;
        let mut state_of_site = Vec::with_capacity(m);
        for _ in 0..m {
            let state = sc.usize()?;
            if state == 0 || state > s {
                return Err(Error::invalid_input(format!("state {} out of range", state)));
            }
            state_of_site.push(state - 1);
        }
        let mut bids = Vec::with_capacity(n);
        for _ in 0..n {
            let row = sc.vec::<i64>(m)?;
            if let Some(bid) = row.iter().find(|b| !(0..=MAX_BID).contains(*b)) {
                return Err(Error::invalid_input(format!("bid {} out of range", bid)));
            }
            bids.push(row);
        }
        if state_limits.iter().any(|&l| l < 0) {
            return Err(Error::invalid_input("state limits must be non-negative"));
        }
        Ok(Case {
            state_limits,
            state_of_site,
            bids,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let buyers = layout.block("buyer", case.bids.len());
        let sites = layout.block("site", case.state_of_site.len());
        let states = layout.block("state", case.state_limits.len());
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        for (i, bids) in case.bids.iter().enumerate() {
            net.add_edge(source, buyers.at(i), 1, 0);
            for (j, &bid) in bids.iter().enumerate() {
                net.add_edge(buyers.at(i), sites.at(j), 1, MAX_BID - bid);
            }
        }
        for (j, &state) in case.state_of_site.iter().enumerate() {
            net.add_edge(sites.at(j), states.at(state), 1, 0);
        }
        for (k, &limit) in case.state_limits.iter().enumerate() {
            net.add_edge(states.at(k), sink, limit, 0);
        }

        let result = min_cost_max_flow(&mut net, source, sink)?;
        let profit = result.flow * MAX_BID - result.cost;
        Ok(format!("{} {}", result.flow, profit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_real_estate_market_samples() {
        let input = "3\n\
                     1 1 1\n1\n1\n5\n\
                     2 2 1\n1\n1 1\n3 4\n5 1\n\
                     2 3 2\n1 1\n1 2 2\n9 8 1\n10 1 7\n";
        let answers = run::<RealEstateMarket>(input).unwrap();
        assert_eq!(answers, vec!["1 5", "1 5", "2 18"]);
    }
}
