//! Coordinate lookup for the cells the snake currently covers.
use std::collections::HashMap;

use super::cell::CellHandle;

/// Maps a board coordinate to the snake cell sitting on it.
#[derive(Clone, Debug, Default)]
pub struct OccupancyIndex {
    occupied: HashMap<(i32, i32), CellHandle>,
}

impl OccupancyIndex {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            occupied: HashMap::with_capacity(capacity),
        }
    }

    /// Claims `position` for `handle`.
    ///
    /// # Errors
    ///
    /// If the position is already taken the index is left untouched and the current
    /// occupant is returned.
    pub fn try_insert(&mut self, position: (i32, i32), handle: CellHandle) -> Result<(), CellHandle> {
        if let Some(occupant) = self.occupied.get(&position) {
            return Err(*occupant);
        }
        self.occupied.insert(position, handle);
        Ok(())
    }

    pub fn remove(&mut self, position: (i32, i32)) -> Option<CellHandle> {
        self.occupied.remove(&position)
    }

    #[must_use]
    pub fn get(&self, position: (i32, i32)) -> Option<CellHandle> {
        self.occupied.get(&position).copied()
    }

    #[must_use]
    pub fn contains(&self, position: (i32, i32)) -> bool {
        self.occupied.contains_key(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::snake::cell::{Cell, CellArena, CellKind};

    use super::*;

    #[test]
    fn test_insert_reports_occupant() {
        let mut arena = CellArena::with_key();
        let body = arena.insert(Cell::new(1, 1, CellKind::Body));
        let head = arena.insert(Cell::new(1, 1, CellKind::Head));

        let mut index = OccupancyIndex::default();
        assert_eq!(index.try_insert((1, 1), body), Ok(()));
        assert_eq!(index.try_insert((1, 1), head), Err(body));
        assert_eq!(index.get((1, 1)), Some(body));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_frees_position() {
        let mut arena = CellArena::with_key();
        let tail = arena.insert(Cell::new(0, 2, CellKind::Body));

        let mut index = OccupancyIndex::with_capacity(4);
        assert!(index.is_empty());
        index.try_insert((0, 2), tail).unwrap();
        assert!(index.contains((0, 2)));
        assert_eq!(index.remove((0, 2)), Some(tail));
        assert!(!index.contains((0, 2)));
        assert_eq!(index.remove((0, 2)), None);
        assert!(index.is_empty());
    }
}
