//! Is there a group of provinces that could settle all its debts on its own?
//!
//! Input per case: `n m`, then `n` province balances, then `m` debts `i j d`: province `i`
//! owes `d` to province `j`. A group is free if its total balance exceeds the debts it
//! owes to provinces outside the group. Answer: `yes` if a free group exists, else `no`.
//!
//! Positive balances are supplied by the source and negative ones drained into the sink.
//! A free group exists exactly when the minimum cut is smaller than the total positive
//! balance, i.e. when the maximum flow cannot carry all of it.

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone, Copy)]
pub struct Debt {
    pub debtor: usize,
    pub creditor: usize,
    pub amount: i64,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub balances: Vec<i64>,
    pub debts: Vec<Debt>,
}

pub struct AsterixInSwitzerland;

impl Problem for AsterixInSwitzerland {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let n = sc.usize()?;
        let m = sc.usize()?;
        let balances = sc.vec::<i64>(n)?;
        let mut debts = Vec::with_capacity(m);
        for _ in 0..m {
            let debt = Debt {
                debtor: sc.usize()?,
                creditor: sc.usize()?,
                amount: sc.next()?,
            };
            if debt.debtor >= n || debt.creditor >= n || debt.debtor == debt.creditor {
                return Err(Error::invalid_input(format!(
                    "debt {} -> {} does not join two provinces",
                    debt.debtor, debt.creditor
                )));
            }
            if debt.amount < 0 {
                return Err(Error::invalid_input("debt amount must be non-negative"));
            }
            debts.push(debt);
        }
        Ok(Case { balances, debts })
    }

    fn solve(case: &Case) -> Result<String> {
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let provinces = layout.block("province", case.balances.len());
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        let mut surplus = 0;
        for (i, &balance) in case.balances.iter().enumerate() {
            if balance >= 0 {
                net.add_edge(source, provinces.at(i), balance, 0);
                surplus += balance;
            } else {
                net.add_edge(provinces.at(i), sink, -balance, 0);
            }
        }
        for debt in &case.debts {
            net.add_edge(
                provinces.at(debt.debtor),
                provinces.at(debt.creditor),
                debt.amount,
                0,
            );
        }

        let flow = max_flow(&mut net, source, sink)?;
        debug!("asterix: flow {} of surplus {}", flow, surplus);
        Ok(if flow < surplus { "yes" } else { "no" }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_asterix_samples() {
        let input = "4\n\
                     2 1\n5 -3\n0 1 3\n\
                     2 1\n2 -3\n0 1 3\n\
                     2 0\n-1 -2\n\
                     3 2\n4 -2 -2\n0 1 2\n0 2 2\n";
        let answers = run::<AsterixInSwitzerland>(input).unwrap();
        assert_eq!(answers, vec!["yes", "no", "no", "no"]);
    }

    #[test]
    fn test_asterix_free_group_behind_a_cheap_debt() {
        // Provinces 0 and 1 together hold 6 and owe only 1 to province 2.
        let input = "1\n3 2\n3 3 -5\n0 1 3\n1 2 1\n";
        assert_eq!(run::<AsterixInSwitzerland>(input).unwrap(), vec!["yes"]);
    }

    #[test]
    fn test_asterix_rejects_self_debt() {
        assert!(matches!(
            run::<AsterixInSwitzerland>("1\n2 1\n1 1\n0 0 3\n"),
            Err(Error::InvalidInput(_))
        ));
    }
}
