use iced::{
    widget::{button, column, container, text, Column},
    Alignment, Color, Element, Length,
};
use log::debug;

use crate::{app::Message, view::View, views::snake::snake_game_screen::SnakeMessage};

#[derive(Clone, Debug)]
pub enum HomeMessage {
    Default,
    Snake,
}

impl HomeMessage {
    #[must_use]
    pub fn new() -> Self {
        HomeMessage::Default
    }
}

impl Default for HomeMessage {
    fn default() -> Self {
        HomeMessage::new()
    }
}

#[derive(Debug)]
pub struct Home {
    error: Option<String>,
}

impl Home {
    #[must_use]
    pub fn new() -> Self {
        Self { error: None }
    }

    /// Home screen explaining why a game could not be started.
    #[must_use]
    pub fn with_error(error: String) -> Self {
        Self { error: Some(error) }
    }

    #[must_use]
    pub fn get_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl View for Home {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Home(message) = message {
            match message {
                HomeMessage::Snake => Some(Message::Snake(SnakeMessage::Default)),
                HomeMessage::Default => None,
            }
        } else {
            debug!("Received message for Home but was: {:#?}", message);
            None
        }
    }

    fn view(&self) -> Element<Message> {
        let play_button = button(
            text("Play Snake")
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center),
        )
        .on_press(Message::Home(HomeMessage::Snake))
        .width(120)
        .height(50);

        let mut content: Column<Message> = column![text("Snake").size(40), play_button]
            .spacing(20)
            .align_x(Alignment::Center);
        if let Some(error) = &self.error {
            content = content
                .push(text(format!("Could not start: {error}")).color(Color::from_rgb(0.8, 0.0, 0.0)));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}
