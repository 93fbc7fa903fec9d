//! Maximum number of mutually non-attacking knights on the usable squares of a board.
//!
//! Input per case: `n`, then an `n x n` grid of `0`/`1` (1 = square usable).
//! Answer: the maximum number of knights.
//!
//! Knights always attack squares of the other colour, so the attack graph is bipartite and
//! the answer is a maximum independent set, read off a minimum cut.

use crate::error::{Error, Result};
use crate::graph::{max_flow, min_cut, FlowNetwork, NodeLayout};
use crate::io::Scanner;
use crate::problems::Problem;

const KNIGHT_MOVES: [(i64, i64); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Clone)]
pub struct Case {
    pub n: usize,
    pub usable: Vec<Vec<bool>>,
}

impl Case {
    fn is_usable(&self, i: i64, j: i64) -> bool {
        let n = self.n as i64;
        i >= 0 && i < n && j >= 0 && j < n && self.usable[i as usize][j as usize]
    }
}

pub struct PlacingKnights;

impl Problem for PlacingKnights {
    type Case = Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Case> {
        let n = sc.usize()?;
        let mut usable = vec![vec![false; n]; n];
        for row in usable.iter_mut() {
            for cell in row.iter_mut() {
                *cell = match sc.next::<u8>()? {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(Error::invalid_input(format!(
                            "board cell must be 0 or 1, got {}",
                            other
                        )))
                    }
                };
            }
        }
        Ok(Case { n, usable })
    }

    fn solve(case: &Case) -> Result<String> {
        let n = case.n;
        let mut layout = NodeLayout::new();
        let source = layout.single("source");
        let sink = layout.single("sink");
        let squares = layout.block("square", n * n);
        let square = |i: usize, j: usize| squares.at(i * n + j);
        let mut net: FlowNetwork = FlowNetwork::new(layout.node_count());

        for i in 0..n {
            for j in 0..n {
                if !case.usable[i][j] {
                    continue;
                }
                if (i + j) % 2 == 1 {
                    net.add_edge(square(i, j), sink, 1, 0);
                    continue;
                }
                net.add_edge(source, square(i, j), 1, 0);
                for (di, dj) in KNIGHT_MOVES {
                    let (ai, aj) = (i as i64 + di, j as i64 + dj);
                    if case.is_usable(ai, aj) {
                        net.add_edge(square(i, j), square(ai as usize, aj as usize), 1, 0);
                    }
                }
            }
        }

        max_flow(&mut net, source, sink)?;
        let reachable = min_cut(&net, source)?;

        // Keep white squares on the source side and black squares on the sink side.
        let mut knights = 0;
        for i in 0..n {
            for j in 0..n {
                let white = (i + j) % 2 == 0;
                if case.usable[i][j] && white == reachable[square(i, j).index()] {
                    knights += 1;
                }
            }
        }
        Ok(knights.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::run;

    #[test]
    fn test_placing_knights_samples() {
        let input = "4\n\
                     1\n1\n\
                     2\n1 1\n1 1\n\
                     3\n1 1 1\n1 1 1\n1 1 1\n\
                     3\n0 0 0\n0 1 0\n0 0 0\n";
        let answers = run::<PlacingKnights>(input).unwrap();
        assert_eq!(answers, vec!["1", "4", "5", "1"]);
    }

    #[test]
    fn test_placing_knights_rejects_bad_cell() {
        assert!(matches!(
            run::<PlacingKnights>("1\n1\n2\n"),
            Err(Error::InvalidInput(_))
        ));
    }
}
