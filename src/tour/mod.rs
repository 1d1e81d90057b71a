//! Tour module - board and pre-computed knight path
//!
//! The path is read from a plain text file; nothing here checks that the
//! steps are legal knight moves.

mod parse;

pub use parse::*;

/// A board cell, 0-indexed (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Ordered cells in visiting order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourPath {
    steps: Vec<Coordinate>,
}

impl TourPath {
    pub fn new(steps: Vec<Coordinate>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<Coordinate> {
        self.steps.get(step).copied()
    }

    pub fn steps(&self) -> &[Coordinate] {
        &self.steps
    }
}

/// Square board read from the board file. Only the row count matters for
/// rendering; cell values are kept as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: Vec<Vec<i32>>,
}

impl BoardConfig {
    pub fn new(rows: Vec<Vec<i32>>) -> Self {
        Self { rows }
    }

    /// Board dimension N (number of rows)
    pub fn size(&self) -> usize {
        self.rows.len()
    }
}
