//! The snake simulation: board, snake, food and the per-step change sets.

pub mod cell;
pub mod change_set;
pub mod direction;
pub mod occupancy;
pub mod snake_game;
