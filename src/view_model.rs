//! Glue between a screen and the state it drives.

use crate::app::Message;

/// Owns the state behind a [`crate::view::View`] and reacts to its messages.
pub trait ViewModel {
    /// Handles `message`. A returned message asks the app to switch screens.
    fn update(&mut self, message: Message) -> Option<Message>;
}
