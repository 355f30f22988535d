//! Keeps one sprite per visible cell, updated from the change sets of each step.
use std::collections::HashMap;

use log::warn;

use crate::models::snake::cell::{Cell, CellKind};

/// Lower bound of the key stride. Keys are `x * stride + y`.
pub const SPRITE_KEY_STRIDE: u64 = 1000;

/// Image a sprite is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Texture {
    Food,
    Snake,
    SnakeHead,
    Error,
}

impl Texture {
    #[must_use]
    pub fn for_kind(kind: CellKind) -> Self {
        match kind {
            CellKind::Food => Texture::Food,
            CellKind::Body => Texture::Snake,
            CellKind::Head => Texture::SnakeHead,
            CellKind::Uninitialized => Texture::Error,
        }
    }

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Texture::Food => "Food.png",
            Texture::Snake => "Snake.png",
            Texture::SnakeHead => "SnakeHead.png",
            Texture::Error => "Error.png",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub x: i32,
    pub y: i32,
    pub texture: Texture,
}

/// Sprites of the board keyed by cell coordinate.
#[derive(Clone, Debug)]
pub struct SpriteScene {
    stride: u64,
    sprites: HashMap<u64, Sprite>,
}

impl SpriteScene {
    /// Creates an empty scene for a board `board_height` cells high.
    #[must_use]
    pub fn new(board_height: usize) -> Self {
        let height = u64::try_from(board_height).unwrap_or(u64::MAX - 1);
        Self {
            stride: SPRITE_KEY_STRIDE.max(height + 1),
            sprites: HashMap::new(),
        }
    }

    /// Key of the sprite at `(x, y)`. Off-board coordinates have no key.
    #[must_use]
    pub fn sprite_key(&self, x: i32, y: i32) -> Option<u64> {
        let x = u64::try_from(x).ok()?;
        let y = u64::try_from(y).ok()?;
        if y >= self.stride {
            return None;
        }
        x.checked_mul(self.stride)?.checked_add(y)
    }

    /// Applies one step: removals first, then retextures, then new sprites.
    pub fn apply_step(&mut self, removed: &[Cell], changed: &[Cell], added: &[Cell]) {
        for cell in removed {
            self.remove_sprite(cell);
        }
        for cell in changed {
            self.update_sprite(cell);
        }
        for cell in added {
            self.create_and_put_sprite(cell);
        }
    }

    pub fn create_and_put_sprite(&mut self, cell: &Cell) {
        let Some(key) = self.sprite_key(cell.x, cell.y) else {
            warn!("No sprite key for {cell}");
            return;
        };
        let sprite = Sprite {
            x: cell.x,
            y: cell.y,
            texture: Texture::for_kind(cell.kind),
        };
        if let Some(previous) = self.sprites.insert(key, sprite) {
            warn!("Replaced sprite {previous:?} with {cell}");
        }
    }

    pub fn update_sprite(&mut self, cell: &Cell) {
        let sprite = self
            .sprite_key(cell.x, cell.y)
            .and_then(|key| self.sprites.get_mut(&key));
        match sprite {
            Some(sprite) => sprite.texture = Texture::for_kind(cell.kind),
            None => warn!("No sprite to update for {cell}"),
        }
    }

    pub fn remove_sprite(&mut self, cell: &Cell) {
        let removed = self
            .sprite_key(cell.x, cell.y)
            .and_then(|key| self.sprites.remove(&key));
        if removed.is_none() {
            warn!("No sprite to remove for {cell}");
        }
    }

    #[must_use]
    pub fn sprite_at(&self, x: i32, y: i32) -> Option<&Sprite> {
        self.sprite_key(x, y).and_then(|key| self.sprites.get(&key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
