use iced::{Element, Subscription};
use log::error;

use crate::{
    config::GameConfig,
    view::View,
    view_models::snake::snake_view_model::SnakeViewModel,
    views::{
        home::{Home, HomeMessage},
        snake::snake_game_screen::{SnakeGameScreen, SnakeMessage},
    },
};

pub struct State {
    screen: Screen,
    config: GameConfig,
}

#[derive(Debug)]
enum Screen {
    Home(Home),
    Snake(SnakeGameScreen),
}

impl Screen {
    pub fn new_home() -> Self {
        Screen::Home(Home::new())
    }

    /// Starts a game, or falls back to the home screen if the board cannot be built.
    pub fn new_snake(config: &GameConfig) -> Self {
        match SnakeViewModel::new(config.clone()) {
            Ok(view_model) => Screen::Snake(SnakeGameScreen::new(view_model)),
            Err(e) => {
                error!("Could not start a snake game: {e}");
                Screen::Home(Home::with_error(e.to_string()))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    Home(HomeMessage),
    Snake(SnakeMessage),
}

impl Message {
    #[must_use]
    pub fn new_home() -> Self {
        Message::Home(HomeMessage::new())
    }

    #[must_use]
    pub fn new_snake() -> Self {
        Message::Snake(SnakeMessage::new())
    }
}

impl View for Screen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match (self, message) {
            (Screen::Home(screen), msg) => screen.update(msg),
            (Screen::Snake(screen), msg) => screen.update(msg),
        }
    }

    fn view(&self) -> Element<Message> {
        match self {
            Screen::Home(screen) => screen.view(),
            Screen::Snake(screen) => screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            Screen::Home(screen) => screen.subscription(),
            Screen::Snake(screen) => screen.subscription(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            screen: Screen::new_home(),
            config,
        }
    }

    pub fn update(state: &mut State, message: Message) {
        if let Some(next) = state.screen.update(message) {
            match next {
                Message::Home(_) => state.screen = Screen::new_home(),
                Message::Snake(_) => state.screen = Screen::new_snake(&state.config),
            }
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Snake(_))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
