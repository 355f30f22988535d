use std::time::{Duration, Instant};

use iced::{keyboard::Key, Point};
use log::{debug, error, info, warn};

use crate::{
    app::Message,
    config::GameConfig,
    models::snake::{
        direction::Direction,
        snake_game::{GameStatus, SnakeError, SnakeGame},
    },
    view_model::ViewModel,
    views::snake::snake_game_screen::{SnakeGameMessage, SnakeMessage},
};

use super::{
    snake_input::{direction_from_key, direction_from_screen_swipe},
    sprite_scene::SpriteScene,
};

/// Drives a [`SnakeGame`] from the timer and user input, and mirrors it into a
/// [`SpriteScene`] for drawing.
#[derive(Debug)]
pub struct SnakeViewModel {
    config: GameConfig,
    model: SnakeGame,
    scene: SpriteScene,
    user_command: Direction,
    touch_begin: Option<Point>,
    status: Option<GameStatus>,
    game_over_at: Option<Instant>,
}

impl SnakeViewModel {
    /// Creates a new game sized from the viewport in `config`.
    ///
    /// # Errors
    ///
    /// If the viewport is too small for a board, returns [`SnakeError::InvalidBoardSize`].
    pub fn new(config: GameConfig) -> Result<Self, SnakeError> {
        let (width, height) = config.board_size();
        debug!("New SnakeViewModel with a {width}x{height} board: {config:#?}");
        let model = SnakeGame::new(width, height)?;
        Ok(Self::with_game(config, model))
    }

    /// Wraps an existing game. The scene starts from the cells the game reports as added.
    #[must_use]
    pub fn with_game(config: GameConfig, model: SnakeGame) -> Self {
        let height = usize::try_from(model.get_height()).unwrap_or_default();
        let mut scene = SpriteScene::new(height);
        scene.apply_step(&[], &[], &model.get_nodes_added());
        Self {
            config,
            model,
            scene,
            user_command: Direction::Undefined,
            touch_begin: None,
            status: None,
            game_over_at: None,
        }
    }

    /// Runs one step and copies its changes into the scene. Once the game is over this
    /// only waits for the game over delay, then asks to go back home.
    pub fn tick(&mut self, now: Instant) -> Option<Message> {
        if let Some(ended) = self.game_over_at {
            let delay = Duration::from_millis(self.config.game_over_delay_millis);
            if now.saturating_duration_since(ended) >= delay {
                debug!("Game over shown long enough, going home");
                return Some(Message::new_home());
            }
            return None;
        }

        match self.model.update(self.user_command) {
            Ok(status) => {
                self.status = Some(status);
                // removed before changed before added
                self.scene.apply_step(
                    &self.model.get_nodes_removed(),
                    &self.model.get_nodes_changed(),
                    &self.model.get_nodes_added(),
                );
                if status.is_terminal() {
                    info!(
                        "Game ended with {status:?}, {} food eaten",
                        self.model.get_food_eaten()
                    );
                    self.game_over_at = Some(now);
                }
            }
            Err(e) => {
                error!("Stopping the game, snake could not move: {e}");
                self.game_over_at = Some(now);
            }
        }
        None
    }

    pub fn handle_key(&mut self, key: &Key) {
        if let Some(direction) = direction_from_key(key) {
            self.user_command = direction;
        }
    }

    pub fn begin_touch(&mut self, position: Point) {
        self.touch_begin = Some(position);
    }

    pub fn end_touch(&mut self, position: Point) {
        if let Some(start) = self.touch_begin.take() {
            self.user_command = direction_from_screen_swipe(start, position);
        } else {
            debug!("Touch ended at {position:?} without a start");
        }
    }

    #[must_use]
    pub fn get_scene(&self) -> &SpriteScene {
        &self.scene
    }

    #[must_use]
    pub fn get_board_dims(&self) -> (i32, i32) {
        (self.model.get_width(), self.model.get_height())
    }

    #[must_use]
    pub fn get_food_eaten(&self) -> usize {
        self.model.get_food_eaten()
    }

    #[must_use]
    pub fn get_status(&self) -> Option<GameStatus> {
        self.status
    }

    #[must_use]
    pub fn get_user_command(&self) -> Direction {
        self.user_command
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over_at.is_some()
    }

    #[must_use]
    pub fn get_config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> u64 {
        self.config.millis_between_frames
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Snake(SnakeMessage::Game(game_message)) = message {
            match game_message {
                SnakeGameMessage::Key(key) => {
                    self.handle_key(&key);
                    None
                }
                SnakeGameMessage::Timer(now) => self.tick(now),
                SnakeGameMessage::TouchBegan(position) => {
                    self.begin_touch(position);
                    None
                }
                SnakeGameMessage::TouchEnded(position) => {
                    self.end_touch(position);
                    None
                }
                SnakeGameMessage::Reset => {
                    debug!("Reset requested");
                    Some(Message::Snake(SnakeMessage::Default))
                }
            }
        } else {
            warn!("Non-game message sent to SnakeViewModel: {:#?}", message);
            None
        }
    }
}
