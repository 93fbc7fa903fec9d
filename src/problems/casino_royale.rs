//! Smuggle agents aboard a train with limited seats to maximise total mission priority.
//!
//! Input per case: `n m l` (stops, missions, seats), then `m` lines `x y q`: an agent riding
//! from stop `x` to stop `y > x` with priority `q`. Answer: the maximum priority sum.

use crate::error::{Error, Result};
use crate::graph::{min_cost_max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

pub const MAX_PRIORITY: i64 = 1 << 7;

#[derive(Debug, Clone, Copy)]
pub struct Mission {
    pub from: usize,
    pub to: usize,
    pub priority: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub stops: usize,
    pub seats: i64,
    pub missions: Vec<Mission>,
}

pub struct CasinoRoyale;

impl Problem for CasinoRoyale {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let stops = sc.usize()?;
        let m = sc.usize()?;
        let seats = sc.next::<i64>()?;
        if stops < 2 || seats < 0 {
            return Err(Error::invalid_input("need two stops and a non-negative seat count"));
        }
        let mut missions = Vec::with_capacity(m);
        for _ in 0..m {
            let mission = Mission {
                from: sc.usize()?,
                to: sc.usize()?,
                priority: sc.next()?,
            };
            if mission.from >= mission.to || mission.to >= stops {
                return Err(Error::invalid_input(format!(
                    "mission {} -> {} is not a forward ride",
                    mission.from, mission.to
                )));
            }
            if !(0..=MAX_PRIORITY).contains(&mission.priority) {
                return Err(Error::invalid_input("mission priority out of range"));
            }
            missions.push(mission);
        }
        Ok(Case {
            stops,
            seats,
            missions,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let stops = layout.block("stop", case.stops);
        let missions = layout.block("mission", case.missions.len());
        let sink = stops.at(case.stops - 1);
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        // Riding a segment empty costs MAX_PRIORITY; a mission replaces its
        // segments' cost with MAX_PRIORITY per segment minus its priority.
        net.add_edge(source, stops.at(0), case.seats, 0);
        for i in 1..case.stops {
            net.add_edge(stops.at(i - 1), stops.at(i), case.seats, MAX_PRIORITY);
        }
        for (k, mission) in case.missions.iter().enumerate() {
            let span = (mission.to - mission.from) as i64;
            net.add_edge(
                stops.at(mission.from),
                missions.at(k),
                1,
                MAX_PRIORITY * span - mission.priority,
            );
            net.add_edge(missions.at(k), stops.at(mission.to), 1, 0);
        }

        let result = min_cost_max_flow(&mut net, source, sink)?;
        let baseline = result.flow * (case.stops as i64 - 1) * MAX_PRIORITY;
        Ok((baseline - result.cost).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_casino_royale_samples() {
        let input = "4\n\
                     2 1 1\n0 1 5\n\
                     3 3 1\n0 2 10\n0 1 4\n1 2 4\n\
                     3 3 1\n0 2 10\n0 1 6\n1 2 6\n\
                     3 2 2\n0 2 10\n0 2 3\n";
        let answers = run::<CasinoRoyale>(input).unwrap();
        assert_eq!(answers, vec!["5", "10", "12", "13"]);
    }

    #[test]
    fn test_casino_royale_rejects_backward_mission() {
        assert!(matches!(
            run::<CasinoRoyale>("1\n3 1 1\n2 1 5\n"),
            Err(Error::InvalidInput(_))
        ));
    }
}
