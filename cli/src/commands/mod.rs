//! CLI command implementations

pub mod interactive;
pub mod pages;
pub mod predict;
pub mod render;

pub use interactive::interactive_command;
pub use pages::pages_command;
pub use predict::{predict_command, PredictArgs};
pub use render::render_command;
