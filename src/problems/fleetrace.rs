//! Pair boats with sailors to maximise the total spectacle of the race.
//!
//! Input per case: `b s p`, then `p` lines `boat sailor spectacle`. Each boat takes at most
//! one sailor and each sailor at most one boat. Answer: the maximum spectacle sum.

use crate::error::{Error, Result};
use crate::graph::{min_cost_max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

/// Upper bound on the spectacle of a single pairing; offsets costs to be non-negative.
pub const MAX_SPECTACLE: i64 = 50;

#[derive(Debug, Clone, Copy)]
pub struct Pairing {
    pub boat: usize,
    pub sailor: usize,
    pub spectacle: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub boats: usize,
    pub sailors: usize,
    pub pairings: Vec<Pairing>,
}

pub struct Fleetrace;

impl Problem for Fleetrace {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let boats = sc.usize()?;
        let sailors = sc.usize()?;
        let p = sc.usize()?;
        let mut pairings = Vec::with_capacity(p);
        for _ in 0..p {
            let pairing = Pairing {
                boat: sc.usize()?,
                sailor: sc.usize()?,
                spectacle: sc.next()?,
            };
            if pairing.boat >= boats || pairing.sailor >= sailors {
                return Err(Error::invalid_input("pairing refers to unknown boat or sailor"));
            }
            if !(0..=MAX_SPECTACLE).contains(&pairing.spectacle) {
                return Err(Error::invalid_input(format!(
                    "spectacle {} outside 0..={}",
                    pairing.spectacle, MAX_SPECTACLE
                )));
            }
            pairings.push(pairing);
        }
        Ok(Case {
            boats,
            sailors,
            pairings,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let boats = layout.block("boat", case.boats);
        let sailors = layout.block("sailor", case.sailors);
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        // Every boat sends one unit: through a sailor, or straight to the sink
        // at the cost of a pairing with zero spectacle.
        for boat in boats.iter() {
            net.add_edge(source, boat, 1, 0);
            net.add_edge(boat, sink, 1, MAX_SPECTACLE);
        }
        for sailor in sailors.iter() {
            net.add_edge(sailor, sink, 1, 0);
        }
        for pairing in &case.pairings {
            net.add_edge(
                boats.at(pairing.boat),
                sailors.at(pairing.sailor),
                1,
                MAX_SPECTACLE - pairing.spectacle,
            );
        }

        let result = min_cost_max_flow(&mut net, source, sink)?;
        let spectacle = result.flow * MAX_SPECTACLE - result.cost;
        Ok(spectacle.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_fleetrace_samples() {
        let input = "3\n\
                     1 1 1\n0 0 5\n\
                     2 2 3\n0 0 10\n0 1 2\n1 0 9\n\
                     2 1 2\n0 0 7\n1 0 4\n";
        let answers = run::<Fleetrace>(input).unwrap();
        assert_eq!(answers, vec!["5", "11", "7"]);
    }

    #[test]
    fn test_fleetrace_without_pairings() {
        assert_eq!(run::<Fleetrace>("1\n3 2 0\n").unwrap(), vec!["0"]);
    }
}
