//! Key help shown along the bottom edge

use super::rgb_color;
use hms_core::theme;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct HelpBarProps {
    pub form_focused: bool,
    /// Current page has a form Tab can focus
    pub form_available: bool,
    pub can_go_back: bool,
}

/// Key hints for the current focus
pub fn help_text(form_focused: bool, form_available: bool, can_go_back: bool) -> String {
    if form_focused {
        return "tab/shift-tab field · ↑↓←→ change · type diagnosis · enter predict · esc sidebar"
            .to_string();
    }
    let mut parts = vec!["↑↓/jk move", "enter/1-4 open"];
    if can_go_back {
        parts.push("b back");
    }
    if form_available {
        parts.push("tab form");
    }
    parts.extend(["pgup/pgdn scroll", "q quit"]);
    parts.join(" · ")
}

#[component]
pub fn HelpBar(props: &HelpBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    element! {
        View(
            width: 100pct,
            padding_left: 1,
            background_color: rgb_color(theme.sidebar),
        ) {
            Text(
                content: help_text(props.form_focused, props.form_available, props.can_go_back),
                color: rgb_color(theme.sidebar_text),
                wrap: TextWrap::NoWrap,
            )
        }
    }
}
