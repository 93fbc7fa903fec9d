//! Accept car rental bookings between stations to maximise profit.
//!
//! Input per case: `n s`, then the initial number of cars at each of the `s` stations,
//! then `n` bookings `from to departure arrival profit` (stations 1-based).
//! Answer: the maximum total profit.
//!
//! Each station gets one node per time at which something happens there. Cars flow
//! forward in time, either waiting at a station or travelling on a booking. Waiting costs
//! `MAX_PROFIT` per elapsed global time step, and a booking costs the same minus its
//! profit, which keeps all costs non-negative.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::graph::{min_cost_max_flow, FlowNetwork, NodeBlock, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

pub const MAX_PROFIT: i64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct Booking {
    pub from: usize,
    pub to: usize,
    pub departure: i64,
    pub arrival: i64,
    pub profit: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub cars: Vec<i64>,
    pub bookings: Vec<Booking>,
}

/// Sorted, deduplicated set of times supporting rank lookups.
#[derive(Debug, Clone, Default)]
struct TimeIndex {
    times: Vec<i64>,
}

impl TimeIndex {
    fn from_set(set: BTreeSet<i64>) -> Self {
        TimeIndex {
            times: set.into_iter().collect(),
        }
    }

    /// Rank of `t`, which must be one of the indexed times.
    fn rank(&self, t: i64) -> usize {
        self.times
            .binary_search(&t)
            .unwrap_or_else(|_| panic!("time {} was never indexed", t))
    }

    fn len(&self) -> usize {
        self.times.len()
    }
}

pub struct CarSharing;

impl Problem for CarSharing {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let n = sc.usize()?;
        let s = sc.usize()?;
        let cars = sc.vec::<i64>(s)?;
        if cars.iter().any(|&c| c < 0) {
            return Err(Error::invalid_input("negative number of cars"));
        }
        // Stations are numbered from 1 in the input.
        let station = |label: usize| {
            label
                .checked_sub(1)
                .filter(|&i| i < s)
                .ok_or_else(|| Error::invalid_input(format!("unknown station {}", label)))
        };
        let mut bookings = Vec::with_capacity(n);
        for _ in 0..n {
            let booking = Booking {
                from: station(sc.usize()?)?,
                to: station(sc.usize()?)?,
                departure: sc.next()?,
                arrival: sc.next()?,
                profit: sc.next()?,
            };
            if booking.departure >= booking.arrival {
                return Err(Error::invalid_input("booking must arrive after it departs"));
            }
            if !(0..=MAX_PROFIT).contains(&booking.profit) {
                return Err(Error::invalid_input("booking profit out of range"));
            }
            bookings.push(booking);
        }
        Ok(Case { cars, bookings })
    }

    fn solve(case: &Case) -> Result<String> {
        let global: BTreeSet<i64> = case
            .bookings
            .iter()
            .flat_map(|b| [b.departure, b.arrival])
            .collect();
        let (Some(&first), Some(&last)) = (global.first(), global.last()) else {
            return Ok("0".to_string());
        };
        let global = TimeIndex::from_set(global);

        // Every station sees the first and last global time so that each car pays
        // for the whole horizon.
        let mut local_sets = vec![BTreeSet::from([first, last]); case.cars.len()];
        for b in &case.bookings {
            local_sets[b.from].insert(b.departure);
            local_sets[b.to].insert(b.arrival);
        }
        let locals: Vec<TimeIndex> = local_sets.into_iter().map(TimeIndex::from_set).collect();

        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let slots: Vec<NodeBlock> = locals
            .iter()
            .map(|local| layout.block("station time", local.len()))
            .collect();
        let trips = layout.block("trip", case.bookings.len());
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        let total_cars: i64 = case.cars.iter().sum();
        let steps = |from: i64, to: i64| (global.rank(to) - global.rank(from)) as i64;

        for (station, local) in locals.iter().enumerate() {
            let slot = slots[station];
            net.add_edge(source, slot.at(0), case.cars[station], 0);
            net.add_edge(slot.at(local.len() - 1), sink, total_cars, 0);
            for w in 1..local.len() {
                let wait = steps(local.times[w - 1], local.times[w]) * MAX_PROFIT;
                net.add_edge(slot.at(w - 1), slot.at(w), total_cars, wait);
            }
        }

        for (k, b) in case.bookings.iter().enumerate() {
            let depart = slots[b.from].at(locals[b.from].rank(b.departure));
            let arrive = slots[b.to].at(locals[b.to].rank(b.arrival));
            let cost = steps(b.departure, b.arrival) * MAX_PROFIT - b.profit;
            net.add_edge(depart, trips.at(k), 1, cost);
            net.add_edge(trips.at(k), arrive, 1, 0);
        }

        let result = min_cost_max_flow(&mut net, source, sink)?;
        let horizon = (global.len() - 1) as i64;
        let profit = total_cars * horizon * MAX_PROFIT - result.cost;
        Ok(profit.to_string())
    }
}
