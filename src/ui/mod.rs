//! Terminal front end: the input/render loop that drives the game, and the
//! board view drawn from each frame's scene.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{App, DisplayConfig};
