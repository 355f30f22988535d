//! Per-step bookkeeping of which cells a renderer has to touch.
use super::cell::{Cell, CellArena, CellHandle};

/// Cells added, removed and changed in place during the last step.
#[derive(Clone, Debug, Default)]
pub struct ChangeSets {
    pub added: Vec<CellHandle>,
    pub removed: Vec<CellHandle>,
    pub changed: Vec<CellHandle>,
}

impl ChangeSets {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // usually a step adds a head and maybe a food
            added: Vec::with_capacity(3),
            removed: Vec::with_capacity(1),
            changed: Vec::with_capacity(2),
        }
    }

    /// Empties all three sets. Removed cells are released from `arena`, except `keep`,
    /// which is a slot that outlives the step.
    pub fn reset(&mut self, arena: &mut CellArena, keep: CellHandle) {
        self.added.clear();
        self.changed.clear();
        for handle in self.removed.drain(..) {
            if handle != keep {
                arena.remove(handle);
            }
        }
    }

    /// Copies the cells behind `handles` out of the arena.
    #[must_use]
    pub fn snapshot(arena: &CellArena, handles: &[CellHandle]) -> Vec<Cell> {
        handles
            .iter()
            .filter_map(|handle| arena.get(*handle).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::snake::cell::CellKind;

    use super::*;

    #[test]
    fn test_reset_releases_removed_cells() {
        let mut arena = CellArena::with_key();
        let food = arena.insert(Cell::new(4, 4, CellKind::Food));
        let tail = arena.insert(Cell::new(0, 0, CellKind::Body));
        let head = arena.insert(Cell::new(2, 0, CellKind::Head));

        let mut changes = ChangeSets::new();
        changes.removed.push(tail);
        changes.removed.push(food);
        changes.added.push(head);
        changes.changed.push(head);

        changes.reset(&mut arena, food);

        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());
        assert!(changes.changed.is_empty());
        assert!(arena.get(tail).is_none());
        assert!(arena.get(food).is_some());
        assert!(arena.get(head).is_some());
    }

    #[test]
    fn test_snapshot_copies() {
        let mut arena = CellArena::with_key();
        let head = arena.insert(Cell::new(1, 2, CellKind::Head));

        let mut copy = ChangeSets::snapshot(&arena, &[head]);
        copy[0].kind = CellKind::Body;

        assert_eq!(arena[head].kind, CellKind::Head);
    }
}
