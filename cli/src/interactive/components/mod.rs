//! UI components for interactive mode
//!
//! Blocks of a [`hms_core::PageView`] each map to one component here; the
//! sidebar and help bar frame them.

pub mod chart;
pub mod form;
pub mod help;
pub mod notice;
pub mod sidebar;
pub mod table;

pub use chart::ChartBlock;
pub use form::FormBlock;
pub use help::HelpBar;
pub use notice::Notice;
pub use sidebar::Sidebar;
pub use table::TableBlock;

use hms_core::Rgb;
use iocraft::prelude::Color;

/// Theme colour as a terminal colour
pub fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_color() {
        assert_eq!(
            rgb_color(Rgb::new(0x16, 0x73, 0xBA)),
            Color::Rgb {
                r: 0x16,
                g: 0x73,
                b: 0xBA
            }
        );
    }
}
