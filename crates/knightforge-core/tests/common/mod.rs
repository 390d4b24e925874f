#![allow(dead_code)]

use knightforge_core::board::Board;
use knightforge_core::core_types::Weights;

/// Diagonal step offsets for toy boards.
pub const DIAG_OFFSETS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// 3x3 toy board with diagonal moves only. Categories (rank 1 first):
///   rank 1: B A A
///   rank 2: A B A
///   rank 3: A A A
/// The only simple path a1 -> c3 is a1,b2,c3; with A=1, B=3 and seed 1 it
/// scores 1 + 3 = 4, then 4 x 1 = 4.
pub fn diag_board() -> Board {
    Board::new(3, &["BAA", "ABA", "AAA"], &DIAG_OFFSETS).expect("toy board is valid")
}

/// Weights for the toy board: A=1, B=3 (C never appears on the board).
pub fn toy_weights() -> Weights {
    Weights::new(1, 3, 9)
}
