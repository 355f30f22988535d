pub mod snake_input;
pub mod snake_view_model;
pub mod sprite_scene;
