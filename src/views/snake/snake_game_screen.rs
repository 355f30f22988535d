use std::time::{Duration, Instant};

use iced::{
    event::{self, Event},
    keyboard::{self, Key},
    time, touch,
    widget::{button, column, container, row, text, Column, Row},
    window, Border, Color, Element, Length, Point, Subscription,
};

use crate::{
    app::Message,
    models::snake::snake_game::GameStatus,
    view::View,
    view_model::ViewModel,
    view_models::snake::{snake_view_model::SnakeViewModel, sprite_scene::Texture},
};

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    /// Start a fresh game.
    Default,
    Home,
    Game(SnakeGameMessage),
}

impl SnakeMessage {
    #[must_use]
    pub fn new() -> Self {
        SnakeMessage::Default
    }
}

impl Default for SnakeMessage {
    fn default() -> Self {
        SnakeMessage::new()
    }
}

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    Key(Key),
    Timer(Instant),
    TouchBegan(Point),
    TouchEnded(Point),
    Reset,
}

fn game_message(message: SnakeGameMessage) -> Message {
    Message::Snake(SnakeMessage::Game(message))
}

fn touch_message(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(game_message(SnakeGameMessage::TouchBegan(position)))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(game_message(SnakeGameMessage::TouchEnded(position)))
        }
        _ => None,
    }
}

fn texture_color(texture: Option<Texture>) -> Color {
    match texture {
        None => Color::WHITE,
        Some(Texture::Food) => Color::from_rgb(1.0, 0.0, 0.0),
        Some(Texture::Snake) => Color::from_rgba(0.0, 1.0, 0.0, 0.8),
        Some(Texture::SnakeHead) => Color::from_rgb(0.0, 0.5, 0.0),
        Some(Texture::Error) => Color::from_rgb(1.0, 0.0, 1.0),
    }
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel) -> Self {
        Self { view_model }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Snake(SnakeMessage::Home) => Some(Message::new_home()),
            Message::Snake(SnakeMessage::Default) => Some(Message::new_snake()),
            other => self.view_model.update(other),
        }
    }

    fn view(&self) -> Element<Message> {
        let cell_size = self.view_model.get_config().display_ratio;
        let make_container = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(cell_size)
                .height(cell_size)
                .style(move |_: &_| container::Style {
                    border: Border {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                        width: 1.0,
                        ..Default::default()
                    },
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        // board y grows upwards, the first row drawn is the top one
        let scene = self.view_model.get_scene();
        let (width, height) = self.view_model.get_board_dims();
        let mut grid_view = Column::new();
        for y in (0..height).rev() {
            let mut grid_row = Row::new();
            for x in 0..width {
                let texture = scene.sprite_at(x, y).map(|sprite| sprite.texture);
                grid_row = grid_row.push(make_container(texture_color(texture)));
            }
            grid_view = grid_view.push(grid_row);
        }

        let home_button = button(text("Back to Home"))
            .on_press(Message::Snake(SnakeMessage::Home))
            .width(160)
            .height(40);
        let restart_button = button(text("Restart"))
            .on_press(game_message(SnakeGameMessage::Reset))
            .width(80)
            .height(40);
        let score = text(format!("Food eaten: {}", self.view_model.get_food_eaten()));

        let banner = match self.view_model.get_status() {
            Some(GameStatus::Win) => text("YOU WON!").size(40),
            Some(GameStatus::Lose) => text("GAME OVER").size(40),
            Some(GameStatus::Normal) | None if self.view_model.game_over() => {
                text("GAME OVER").size(40)
            }
            _ => text(""),
        };

        container(
            column![
                row![home_button, restart_button, score].spacing(10),
                grid_view,
                banner,
            ]
            .spacing(10)
            .align_x(iced::alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let timer = time::every(Duration::from_millis(
            self.view_model.get_time_between_frames(),
        ))
        .map(|now| game_message(SnakeGameMessage::Timer(now)));
        let keyboard =
            keyboard::on_key_press(|key, _| Some(game_message(SnakeGameMessage::Key(key))));
        let touches = event::listen_with(touch_message);
        Subscription::batch(vec![timer, keyboard, touches])
    }
}

