use crate::board::Board;
use crate::core_types::{Cell, Score, Weights};
use crate::error::{KnResult, KnightForgeError};

/// Apply one move to the running score: add the destination weight when both
/// cells share a category, multiply by it otherwise.
#[inline(always)]
pub fn step_score(board: &Board, from: Cell, to: Cell, weights: Weights, score: Score) -> Score {
    let w = weights.get(board.category(to)) as Score;
    if board.category(from) == board.category(to) {
        score.saturating_add(w)
    } else {
        score.saturating_mul(w)
    }
}

/// Recompute a path's final score from scratch. Rejects paths that leave the
/// board, break adjacency, or revisit a cell, so it doubles as an
/// independent check on search output.
pub fn replay_score(board: &Board, path: &[Cell], weights: Weights, initial: Score) -> KnResult<Score> {
    let mut seen = 0u64;
    for &cell in path {
        if !board.contains(cell) {
            return Err(KnightForgeError::Validation(format!(
                "Cell {} is outside the {}x{} board",
                cell,
                board.size(),
                board.size()
            )));
        }
        let bit = 1u64 << cell.index(board.size());
        if seen & bit != 0 {
            return Err(KnightForgeError::Validation(format!(
                "Cell {} visited twice",
                cell
            )));
        }
        seen |= bit;
    }

    let mut score = initial;
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if !board.neighbors(from).contains(&to) {
            return Err(KnightForgeError::Validation(format!(
                "{} -> {} is not a legal move",
                from, to
            )));
        }
        score = step_score(board, from, to, weights, score);
    }
    Ok(score)
}
