//! Move soldiers along one-way paths so that every town ends up defended.
//!
//! Input per case: `l p`, then `l` lines `g d` (soldiers present, soldiers needed),
//! then `p` lines `f t c C` (a path from `f` to `t` that must carry between `c` and `C`
//! soldiers). Answer: `yes` if some movement satisfies all towns and paths, else `no`.
//!
//! Lower bounds are removed by pre-routing `c` soldiers over each path and adjusting the
//! demands of its endpoints; the rest is a feasibility max flow.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone, Copy)]
pub struct Town {
    pub stationed: i64,
    pub needed: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct Path {
    pub from: usize,
    pub to: usize,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub towns: Vec<Town>,
    pub paths: Vec<Path>,
}

pub struct KingdomDefence;

impl Problem for KingdomDefence {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let l = sc.usize()?;
        let p = sc.usize()?;
        let mut towns = Vec::with_capacity(l);
        for _ in 0..l {
            towns.push(Town {
                stationed: sc.next()?,
                needed: sc.next()?,
            });
        }
        let mut paths = Vec::with_capacity(p);
        for _ in 0..p {
            let path = Path {
                from: sc.usize()?,
                to: sc.usize()?,
                min: sc.next()?,
                max: sc.next()?,
            };
            if path.from >= l || path.to >= l {
                return Err(Error::invalid_input("path endpoint out of range"));
            }
            if path.min < 0 || path.min > path.max {
                return Err(Error::invalid_input(format!(
                    "path bounds {}..{} are not a valid range",
                    path.min, path.max
                )));
            }
            paths.push(path);
        }
        Ok(Case { towns, paths })
    }

    fn solve(case: &Case) -> Result<String> {
        let stationed: i64 = case.towns.iter().map(|t| t.stationed).sum();
        let needed: i64 = case.towns.iter().map(|t| t.needed).sum();
        if needed > stationed {
            return Ok("no".to_string());
        }

        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let towns = layout.block("town", case.towns.len());
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        // Positive demand: soldiers the town still has to receive.
        let mut demand: Vec<i64> = case.towns.iter().map(|t| t.needed - t.stationed).collect();
        for path in &case.paths {
            demand[path.from] += path.min;
            demand[path.to] -= path.min;
            net.add_edge(towns.at(path.from), towns.at(path.to), path.max - path.min, 0);
        }

        let mut target = 0;
        for (i, &d) in demand.iter().enumerate() {
            if d > 0 {
                net.add_edge(towns.at(i), sink, d, 0);
                target += d;
            } else if d < 0 {
                net.add_edge(source, towns.at(i), -d, 0);
            }
        }

        let flow = max_flow(&mut net, source, sink)?;
        debug!("kingdom defence: flow {} of {}", flow, target);
        Ok(if flow == target { "yes" } else { "no" }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_kingdom_defence_samples() {
        let input = "4\n\
                     2 1\n3 1\n0 2\n0 1 0 2\n\
                     2 1\n3 1\n0 2\n0 1 0 1\n\
                     2 1\n3 1\n0 2\n0 1 3 5\n\
                     2 0\n1 2\n5 0\n";
        let answers = run::<KingdomDefence>(input).unwrap();
        assert_eq!(answers, vec!["yes", "no", "no", "no"]);
    }

    #[test]
    fn test_kingdom_defence_lower_bound_satisfiable() {
        // Two soldiers must travel 0 -> 1 and one of them has to come back.
        let input = "1\n2 2\n2 1\n0 1\n0 1 2 2\n1 0 0 3\n";
        assert_eq!(run::<KingdomDefence>(input).unwrap(), vec!["yes"]);
    }

    #[test]
    fn test_kingdom_defence_rejects_inverted_bounds() {
        let input = "1\n2 1\n1 1\n1 1\n0 1 3 2\n";
        assert!(matches!(
            run::<KingdomDefence>(input),
            Err(Error::InvalidInput(_))
        ));
    }
}
