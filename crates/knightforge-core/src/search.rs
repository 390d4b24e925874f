use crate::board::Board;
use crate::core_types::{Cell, Score, Weights};
use crate::scoring::step_score;

/// Depth-first branch-and-bound explorer for a single (start, target,
/// weights) question. Owns its visited bitmask and path buffer; never
/// shared across threads.
pub struct PathFinder<'a> {
    board: &'a Board,
    weights: Weights,
    target: Cell,
    target_score: Score,
    visited: u64,
    path: Vec<Cell>,
}

impl<'a> PathFinder<'a> {
    /// Find a simple path from `start` to `target` whose score lands on
    /// `target_score` exactly. `None` means every branch was exhausted,
    /// which is a legitimate outcome, not an error.
    pub fn search(
        board: &'a Board,
        weights: Weights,
        start: Cell,
        target: Cell,
        initial_score: Score,
        target_score: Score,
    ) -> Option<Vec<Cell>> {
        let mut finder = PathFinder {
            board,
            weights,
            target,
            target_score,
            visited: 1u64 << start.index(board.size()),
            path: Vec::with_capacity(board.cell_count()),
        };
        finder.path.push(start);
        if finder.dfs(start, initial_score) {
            Some(finder.path)
        } else {
            None
        }
    }

    fn dfs(&mut self, pos: Cell, score: Score) -> bool {
        let board = self.board;

        // Weights are positive, so the score never decreases along an edge.
        // Anything already past the target can be abandoned outright.
        if score > self.target_score {
            return false;
        }
        // Arrival ends the path: exact hit or dead branch. Walking on past
        // the target is not permitted.
        if pos == self.target {
            return score == self.target_score;
        }
        for &next in board.neighbors(pos) {
            let bit = 1u64 << next.index(board.size());
            if self.visited & bit != 0 {
                continue;
            }
            let next_score = step_score(board, pos, next, self.weights, score);
            if next_score > self.target_score {
                continue;
            }
            self.visited |= bit;
            self.path.push(next);
            if self.dfs(next, next_score) {
                return true;
            }
            self.path.pop();
            self.visited &= !bit;
        }
        false
    }
}
