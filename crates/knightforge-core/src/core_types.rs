use crate::error::{KnResult, KnightForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Accumulated path score. Per-edge updates saturate rather than wrap, which
/// keeps the over-target prune sound for any target the config accepts.
pub type Score = u64;

/// A position on the board. Row 0 is rank 1 (the "a1" row), column 0 is
/// file 'a'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat index into per-cell tables and the visited bitmask.
    #[inline(always)]
    pub fn index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    /// Parse algebraic notation, e.g. "a1" or "f6".
    pub fn parse(s: &str) -> KnResult<Cell> {
        let s = s.trim();
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(|| {
            KnightForgeError::Config("Empty cell; expected algebraic notation like 'a1'".to_string())
        })?;
        if !file.is_ascii_lowercase() {
            return Err(KnightForgeError::Config(format!(
                "Cell '{}' must start with a file letter a-z",
                s
            )));
        }
        let rank: u8 = chars.as_str().parse().map_err(|_| {
            KnightForgeError::Config(format!("Cell '{}' has no valid rank number", s))
        })?;
        if rank == 0 {
            return Err(KnightForgeError::Config(format!(
                "Cell '{}' rank is 1-based",
                s
            )));
        }
        Ok(Cell::new(rank - 1, file as u8 - b'a'))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// Label partitioning cells into scoring groups. A move within a group adds
/// the destination weight; a move across groups multiplies by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize,
)]
pub enum Category {
    A,
    B,
    C,
}

impl TryFrom<char> for Category {
    type Error = KnightForgeError;

    fn try_from(c: char) -> KnResult<Self> {
        match c {
            'A' => Ok(Category::A),
            'B' => Ok(Category::B),
            'C' => Ok(Category::C),
            other => Err(KnightForgeError::Validation(format!(
                "Unknown category '{}'",
                other
            ))),
        }
    }
}

/// One candidate weight assignment: a positive integer per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Weights {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    #[inline(always)]
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::A => self.a,
            Category::B => self.b,
            Category::C => self.c,
        }
    }

    pub fn sum(&self) -> u32 {
        self.a + self.b + self.c
    }

    pub fn is_distinct(&self) -> bool {
        self.a != self.b && self.a != self.c && self.b != self.c
    }

    /// Parse "1,2,3" in category order A,B,C.
    pub fn parse(s: &str) -> KnResult<Weights> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(KnightForgeError::Config(format!(
                "Weights '{}' must be three comma-separated integers",
                s
            )));
        }
        let mut vals = [0u32; 3];
        for (i, p) in parts.iter().enumerate() {
            vals[i] = p.trim().parse().map_err(|_| {
                KnightForgeError::Config(format!("Invalid weight '{}'", p.trim()))
            })?;
        }
        Ok(Weights::new(vals[0], vals[1], vals[2]))
    }

    pub fn validate(&self) -> KnResult<()> {
        if self.a == 0 || self.b == 0 || self.c == 0 {
            return Err(KnightForgeError::Validation(format!(
                "Weights must be positive, got {}",
                self
            )));
        }
        if !self.is_distinct() {
            return Err(KnightForgeError::Validation(format!(
                "Weights must be pairwise distinct, got {}",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Category::iter()
            .map(|cat| format!("{}={}", cat, self.get(cat)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
