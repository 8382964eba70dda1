//! Page navigation sidebar

use super::rgb_color;
use hms_core::{theme, Page};
use iocraft::prelude::*;

pub const SIDEBAR_TITLE: &str = "Hospital Management System";
pub const SIDEBAR_WIDTH: u32 = 30;

#[derive(Default, Props)]
pub struct SidebarProps {
    /// Highlighted entry
    pub cursor: usize,
    /// Page being shown
    pub current: Option<Page>,
    /// Whether keys currently move the highlight
    pub focused: bool,
}

/// Marker in front of a sidebar entry
pub fn entry_marker(page: Page, cursor: usize, current: Option<Page>) -> &'static str {
    match (page.index() == cursor, Some(page) == current) {
        (true, _) => "▸ ",
        (false, true) => "• ",
        (false, false) => "  ",
    }
}

#[component]
pub fn Sidebar(props: &SidebarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: SIDEBAR_WIDTH,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            background_color: rgb_color(theme.sidebar),
            padding: 1,
        ) {
            Text(
                content: SIDEBAR_TITLE,
                color: rgb_color(theme.sidebar_text),
                weight: Weight::Bold,
            )
            View(height: 1)
            #(Page::ALL.iter().map(|page| {
                let highlighted = props.focused && page.index() == props.cursor;
                let background = if highlighted { theme.button_hover } else { theme.sidebar };
                let weight = if Some(*page) == props.current { Weight::Bold } else { Weight::Normal };
                element! {
                    View(key: page.slug(), background_color: rgb_color(background)) {
                        Text(
                            content: format!(
                                "{}{}. {}",
                                entry_marker(*page, props.cursor, props.current),
                                page.index() + 1,
                                page.label()
                            ),
                            color: rgb_color(theme.sidebar_text),
                            weight: weight,
                        )
                    }
                }
            }))
        }
    }
}
