//! Cells of the board and the arena that owns them.
use std::{
    fmt,
    hash::{Hash, Hasher},
};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a [`Cell`] stored in a [`CellArena`].
    pub struct CellHandle;
}

/// Arena owning every cell of a game. Everything else refers to cells by [`CellHandle`].
pub type CellArena = SlotMap<CellHandle, Cell>;

/// What occupies a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Uninitialized,
}

/// A discrete board position with a kind tag.
///
/// Two cells are equal when they sit on the same coordinate, whatever their kind.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub kind: CellKind,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32, kind: CellKind) -> Self {
        Self { x, y, kind }
    }

    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(0, 0, CellKind::Uninitialized)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position().hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            CellKind::Head => "Head",
            CellKind::Body => "Body",
            CellKind::Food => "Food",
            CellKind::Uninitialized => "UnknownType",
        };
        write!(f, "({}, {}, {kind})", self.x, self.y)
    }
}
