//! How many knights can escape a labyrinth of halls and intersections?
//!
//! The labyrinth is a grid of `m` columns and `n` rows. Each intersection joins the hall
//! segments around it, and the segments at the border lead out. Every hall segment can be
//! used by a single knight, and each intersection lets at most `c` knights through.
//!
//! Input per case: `m n k c`, then `k` knight positions `x y` (column, row).
//! Answer: the maximum number of knights that can escape.
//!
//! Every intersection is split into an entry and an exit node joined by an edge of
//! capacity `c`, so that the vertex capacity becomes an edge capacity.

use crate::error::{Error, Result};
use crate::graph::{max_flow, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

#[derive(Debug, Clone)]
pub struct Case {
    pub columns: usize,
    pub rows: usize,
    pub capacity: i64,
    pub knights: Vec<(usize, usize)>,
}

pub struct Knights;

impl Problem for Knights {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let columns = sc.usize()?;
        let rows = sc.usize()?;
        let k = sc.usize()?;
        let capacity = sc.next::<i64>()?;
        if capacity < 0 {
            return Err(Error::invalid_input("intersection capacity must be non-negative"));
        }
        let mut knights = Vec::with_capacity(k);
        for _ in 0..k {
            let (x, y) = (sc.usize()?, sc.usize()?);
            if x >= columns || y >= rows {
                return Err(Error::invalid_input(format!(
                    "knight at ({}, {}) is outside the labyrinth",
                    x, y
                )));
            }
            knights.push((x, y));
        }
        Ok(Case {
            columns,
            rows,
            capacity,
            knights,
        })
    }

    fn solve(case: &Case) -> Result<String> {
        let (m, n) = (case.columns, case.rows);
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let entries = layout.block("intersection entry", m * n);
        let exits = layout.block("intersection exit", m * n);
        // Column `col` has halls `0..=n` between and around its intersections.
        let column_halls = layout.block("column hall", m * (n + 1));
        let row_halls = layout.block("row hall", n * (m + 1));
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        let entry = |col: usize, row: usize| entries.at(col * n + row);
        let exit = |col: usize, row: usize| exits.at(col * n + row);
        let column_hall = |col: usize, hall: usize| column_halls.at(col * (n + 1) + hall);
        let row_hall = |row: usize, hall: usize| row_halls.at(row * (m + 1) + hall);

        for col in 0..m {
            net.add_edge(column_hall(col, 0), sink, 1, 0);
            net.add_edge(column_hall(col, n), sink, 1, 0);
            for row in 0..n {
                for hall in [row, row + 1] {
                    net.add_edge(column_hall(col, hall), entry(col, row), 1, 0);
                    net.add_edge(exit(col, row), column_hall(col, hall), 1, 0);
                }
            }
        }
        for row in 0..n {
            net.add_edge(row_hall(row, 0), sink, 1, 0);
            net.add_edge(row_hall(row, m), sink, 1, 0);
            for col in 0..m {
                for hall in [col, col + 1] {
                    net.add_edge(row_hall(row, hall), entry(col, row), 1, 0);
                    net.add_edge(exit(col, row), row_hall(row, hall), 1, 0);
                }
            }
        }
        for col in 0..m {
            for row in 0..n {
                net.add_edge(entry(col, row), exit(col, row), case.capacity, 0);
            }
        }
        for &(x, y) in &case.knights {
            net.add_edge(source, entry(x, y), 1, 0);
        }

        Ok(max_flow(&mut net, source, sink)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_knights_single_intersection() {
        // A lone intersection has four exits; `c` limits how many knights pass it.
        let input = "4\n\
                     1 1 1 1\n0 0\n\
                     1 1 1 0\n0 0\n\
                     1 1 5 4\n0 0\n0 0\n0 0\n0 0\n0 0\n\
                     1 1 3 2\n0 0\n0 0\n0 0\n";
        let answers = run::<Knights>(input).unwrap();
        assert_eq!(answers, vec!["1", "0", "4", "2"]);
    }

    #[test]
    fn test_knights_share_hall_segments() {
        // One row of three columns. Knights starting in the middle leave through its own
        // column halls or through a neighbouring intersection.
        let input = "3\n\
                     3 1 3 1\n0 0\n1 0\n2 0\n\
                     3 1 4 4\n1 0\n1 0\n1 0\n1 0\n\
                     3 1 4 2\n1 0\n1 0\n1 0\n1 0\n";
        let answers = run::<Knights>(input).unwrap();
        assert_eq!(answers, vec!["3", "4", "2"]);
    }

    #[test]
    fn test_knights_rejects_knight_outside() {
        assert!(matches!(
            run::<Knights>("1\n2 2 1 1\n2 0\n"),
            Err(Error::InvalidInput(_))
        ));
    }
}
