use iced::Size;
use log::debug;
use snake_grid::{app::State, config::GameConfig};

fn main() -> iced::Result {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "snake_grid=debug");
    }
    env_logger::init();

    let config = GameConfig::default();
    debug!("Starting with {config:#?}");
    // room for the buttons above the board and the banner below it
    let window = Size::new(
        f32::from(config.viewport_width) + 40.0,
        f32::from(config.viewport_height) + 160.0,
    );
    iced::application("Snake", State::update, State::view)
        .window_size(window)
        .subscription(State::subscription)
        .run()
}
