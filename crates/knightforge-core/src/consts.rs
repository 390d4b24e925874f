// ===== knightforge/crates/knightforge-core/src/consts.rs =====
/// Side length of the standard board.
pub const GRID_SIZE: usize = 6;

/// Upper limit on total cells. The search tracks visited cells in a u64
/// bitmask, one bit per cell, so larger boards are rejected at build time.
pub const MAX_CELLS: usize = 64;

/// The eight knight move offsets, in the order branches are explored.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Category layout of the standard board, rank 1 (the "a1" row) first.
pub const STANDARD_ROWS: [&str; 6] = ["AAABBC", "AAABBC", "AABBCC", "AABBCC", "ABBCCC", "ABBCCC"];

/// Exact score every trip must land on.
pub const DEFAULT_TARGET_SCORE: u64 = 2024;

/// Exclusive upper bound on the candidate weight sum A+B+C.
pub const DEFAULT_SUM_BOUND: u32 = 50;

/// The two standard trips: opposite corner runs.
pub const DEFAULT_TRIPS: &str = "a1-f6,a6-f1";
