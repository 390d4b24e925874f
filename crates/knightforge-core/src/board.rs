use crate::consts::{GRID_SIZE, KNIGHT_OFFSETS, MAX_CELLS, STANDARD_ROWS};
use crate::core_types::{Category, Cell};
use crate::error::{KnResult, KnightForgeError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct BoardFile {
    size: usize,
    rows: Vec<String>,
}

/// The playing board: one category per cell plus the precomputed move
/// adjacency. Immutable after construction; shared read-only by every
/// search invocation.
#[derive(Debug)]
pub struct Board {
    size: usize,
    categories: Vec<Category>,
    neighbors: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board from category rows (rank 1 first) and a move-offset
    /// table. Offset declaration order fixes the neighbor order, and with it
    /// the exploration order of every search.
    pub fn new(size: usize, rows: &[&str], offsets: &[(i8, i8)]) -> KnResult<Self> {
        if size == 0 || size * size > MAX_CELLS {
            return Err(KnightForgeError::Config(format!(
                "Board size {} unsupported; the visited mask holds at most {} cells",
                size, MAX_CELLS
            )));
        }
        if rows.len() != size {
            return Err(KnightForgeError::Validation(format!(
                "Board has {} rows, expected {}",
                rows.len(),
                size
            )));
        }

        let mut categories = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(KnightForgeError::Validation(format!(
                    "Row {} has {} cells, expected {}",
                    r + 1,
                    row.chars().count(),
                    size
                )));
            }
            for ch in row.chars() {
                categories.push(Category::try_from(ch)?);
            }
        }

        let mut neighbors = Vec::with_capacity(size * size);
        for r in 0..size {
            for c in 0..size {
                let mut nbrs = Vec::new();
                for &(dr, dc) in offsets {
                    let nr = r as i16 + dr as i16;
                    let nc = c as i16 + dc as i16;
                    if nr >= 0 && nc >= 0 && (nr as usize) < size && (nc as usize) < size {
                        nbrs.push(Cell::new(nr as u8, nc as u8));
                    }
                }
                neighbors.push(nbrs);
            }
        }

        Ok(Self {
            size,
            categories,
            neighbors,
        })
    }

    /// The fixed 6x6 knight-move instance.
    pub fn standard() -> Self {
        // Invariant: the embedded layout always parses.
        Self::new(GRID_SIZE, &STANDARD_ROWS, &KNIGHT_OFFSETS).expect("embedded board is valid")
    }

    /// Load a knight-move board from a JSON file:
    /// `{"size": 6, "rows": ["AAABBC", ...]}` with rank 1 first.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KnResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: BoardFile = serde_json::from_str(&raw)?;
        let rows: Vec<&str> = file.rows.iter().map(String::as_str).collect();
        let board = Self::new(file.size, &rows, &KNIGHT_OFFSETS)?;
        debug!("Loaded {}x{} board", board.size, board.size);
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (cell.row as usize) < self.size && (cell.col as usize) < self.size
    }

    #[inline(always)]
    pub fn category(&self, cell: Cell) -> Category {
        self.categories[cell.index(self.size)]
    }

    #[inline(always)]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        &self.neighbors[cell.index(self.size)]
    }
}
