//! Terminal output for non-interactive commands
//!
//! Pages are rendered to strings here; the interactive TUI reuses the chart
//! and text helpers.

pub mod chart;
pub mod plain;
pub mod style;
pub mod text;

pub use plain::{render_page, RenderOptions};
pub use style::TextStyle;
