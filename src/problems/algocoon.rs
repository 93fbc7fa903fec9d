//! Split a sculpture of figures into two non-empty parts as cheaply as possible.
//!
//! Input per case: `n m`, then `m` limbs `a b c`: cutting the limb from figure `a` to figure
//! `b` costs `c`. The part containing some figure pays for every limb leaving it. Answer: the
//! cheapest such cut.
//!
//! Any bipartition puts some figure `i` on the paying side and `i + 1 (mod n)` on the other,
//! so the answer is the smallest of the `n` minimum cuts between consecutive figures.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{cut_capacity, max_flow, min_cut, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone, Copy)]
pub struct Limb {
    pub from: usize,
    pub to: usize,
    pub cost: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub figures: usize,
    pub limbs: Vec<Limb>,
}

pub struct Algocoon;

impl Problem for Algocoon {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let figures = sc.usize()?;
        let m = sc.usize()?;
        if figures < 2 {
            return Err(Error::invalid_input("sculpture needs at least two figures"));
        }
        let mut limbs = Vec::with_capacity(m);
        for _ in 0..m {
            let limb = Limb {
                from: sc.usize()?,
                to: sc.usize()?,
                cost: sc.next()?,
            };
            if limb.from >= figures || limb.to >= figures || limb.from == limb.to {
                return Err(Error::invalid_input(format!(
                    "limb {} -> {} does not join two figures",
                    limb.from, limb.to
                )));
            }
            if limb.cost < 0 {
                return Err(Error::invalid_input("limb cost must be non-negative"));
            }
            limbs.push(limb);
        }
        Ok(Case { figures, limbs })
    }

    fn solve(case: &Case) -> Result<String> {
        let mut layout = NodeLayout::new();
        let figures = layout.block("figure", case.figures);
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());
        for limb in &case.limbs {
            net.add_edge(figures.at(limb.from), figures.at(limb.to), limb.cost, 0);
        }

        let mut best = i64::MAX;
        for i in 0..case.figures {
            let (mine, theirs) = (figures.at(i), figures.at((i + 1) % case.figures));
            net.reset_flow();
            max_flow(&mut net, mine, theirs)?;
            let side = min_cut(&net, mine)?;
            let cost = cut_capacity(&net, &side);
            debug!("algocoon: cut separating {} from {} costs {}", mine, theirs, cost);
            best = best.min(cost);
        }
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_algocoon_samples() {
        let input = "3\n\
                     2 2\n0 1 3\n1 0 5\n\
                     3 5\n0 1 3\n1 2 3\n2 0 3\n0 2 1\n2 1 1\n\
                     3 0\n";
        let answers = run::<Algocoon>(input).unwrap();
        assert_eq!(answers, vec!["3", "3", "0"]);
    }

    #[test]
    fn test_algocoon_parallel_limbs_add_up() {
        let input = "1\n2 3\n0 1 2\n0 1 2\n1 0 5\n";
        assert_eq!(run::<Algocoon>(input).unwrap(), vec!["4"]);
    }

    #[test]
    fn test_algocoon_rejects_single_figure() {
        assert!(matches!(
            run::<Algocoon>("1\n1 0\n"),
            Err(Error::InvalidInput(_))
        ));
    }
}
