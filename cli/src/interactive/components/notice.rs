//! Info and success callouts

use super::rgb_color;
use hms_core::{theme, Rgb};
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct NoticeProps {
    pub text: String,
    pub accent: Option<Rgb>,
}

#[component]
pub fn Notice(props: &NoticeProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let accent = props.accent.unwrap_or(theme.info_accent);
    element! {
        View(
            border_style: BorderStyle::Round,
            border_color: rgb_color(accent),
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: props.text.clone(), color: rgb_color(theme.label))
        }
    }
}
