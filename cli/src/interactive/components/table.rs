//! Boxed data table

use super::rgb_color;
use crate::output::plain::table_lines;
use crate::output::TextStyle;
use hms_core::data::Table;
use hms_core::theme;
use iocraft::prelude::*;

/// Row of the boxed layout that holds the column names
pub const HEADER_ROW: usize = 1;

#[derive(Default, Props)]
pub struct TableBlockProps {
    pub table: Option<Table>,
}

#[component]
pub fn TableBlock(props: &TableBlockProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let lines = props
        .table
        .as_ref()
        .map(|table| table_lines(table, theme, &TextStyle::plain()))
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Column) {
            #(lines.into_iter().enumerate().map(|(i, line)| {
                let (color, weight) = if i == HEADER_ROW {
                    (theme.table_header, Weight::Bold)
                } else {
                    (theme.table_text, Weight::Normal)
                };
                element! {
                    Text(
                        key: i,
                        content: line,
                        color: rgb_color(color),
                        weight: weight,
                        wrap: TextWrap::NoWrap,
                    )
                }
            }))
        }
    }
}
