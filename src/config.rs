//! Settings of the snake window and its timer.

/// Pixels per grid cell. Touch screens get bigger cells.
#[cfg(any(target_os = "ios", target_os = "android"))]
pub const DISPLAY_RATIO: u16 = 40;
/// Pixels per grid cell. Touch screens get bigger cells.
#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub const DISPLAY_RATIO: u16 = 20;

/// Amount of time between two steps of the snake.
pub const MILLIS_BETWEEN_FRAMES: u64 = 500;
/// How long the game over banner stays before going back home.
pub const GAME_OVER_DELAY_MILLIS: u64 = 5000;

/// Configuration of the game window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the playing area in pixels
    pub viewport_width: u16,
    /// Height of the playing area in pixels
    pub viewport_height: u16,
    /// Pixels per grid cell
    pub display_ratio: u16,
    pub millis_between_frames: u64,
    pub game_over_delay_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800,
            viewport_height: 600,
            display_ratio: DISPLAY_RATIO,
            millis_between_frames: MILLIS_BETWEEN_FRAMES,
            game_over_delay_millis: GAME_OVER_DELAY_MILLIS,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a viewport of the given size in pixels.
    #[must_use]
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Default::default()
        }
    }

    /// Board size in cells, `(width, height)`. A zero ratio gives an empty board.
    #[must_use]
    pub fn board_size(&self) -> (usize, usize) {
        let cells = |pixels: u16| {
            usize::from(pixels)
                .checked_div(usize::from(self.display_ratio))
                .unwrap_or(0)
        };
        (cells(self.viewport_width), cells(self.viewport_height))
    }
}
