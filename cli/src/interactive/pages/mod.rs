//! Page content for the interactive application
//!
//! Draws a [`PageView`] produced by the core page registry, one component
//! per block.

use super::components::{rgb_color, ChartBlock, FormBlock, Notice, TableBlock};
use crate::output::chart::ChartArea;
use hms_core::form::FormField;
use hms_core::{theme, Block, PageView};
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct PageContentProps {
    pub view: Option<PageView>,
    /// Form field with keyboard focus, if any
    pub focus: Option<FormField>,
    /// Leading blocks to leave out
    pub skip: usize,
    pub chart_width: usize,
    pub chart_height: usize,
}

fn block_element(block: &Block, props: &PageContentProps) -> AnyElement<'static> {
    let theme = theme();
    match block {
        Block::Text(text) => element! {
            Text(content: text.clone(), color: rgb_color(theme.label))
        }
        .into(),
        Block::Bullets(items) => element! {
            View(flex_direction: FlexDirection::Column) {
                #(items.iter().enumerate().map(|(i, item)| element! {
                    Text(key: i, content: format!("  • {}", item), color: rgb_color(theme.label))
                }))
            }
        }
        .into(),
        Block::Subheader(text) => element! {
            Text(content: text.clone(), color: rgb_color(theme.title), weight: Weight::Bold)
        }
        .into(),
        Block::Info(text) => element! {
            Notice(text: text.clone(), accent: Some(theme.info_accent))
        }
        .into(),
        Block::Success(text) => element! {
            Notice(text: text.clone(), accent: Some(theme.success_accent))
        }
        .into(),
        Block::Table(table) => element! {
            TableBlock(table: Some(table.clone()))
        }
        .into(),
        Block::Chart(chart) => element! {
            ChartBlock(
                chart: Some(chart.clone()),
                area: Some(ChartArea {
                    width: props.chart_width,
                    height: props.chart_height,
                }),
            )
        }
        .into(),
        Block::Form(form) => element! {
            FormBlock(form: form.clone(), focus: props.focus)
        }
        .into(),
    }
}

#[component]
pub fn PageContent(props: &PageContentProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(view) = &props.view else {
        return element! { View {} };
    };

    let skip = props.skip.min(view.blocks.len().saturating_sub(1));
    let blocks: Vec<AnyElement<'static>> = view
        .blocks
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, block)| {
            element! {
                View(key: i, margin_bottom: 1) {
                    #(block_element(block, props))
                }
            }
            .into()
        })
        .collect();

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(
                content: format!("{} {}", view.icon, view.title),
                color: rgb_color(theme.title),
                weight: Weight::Bold,
            )
            View(height: 1)
            #(if skip > 0 {
                Some(element! {
                    Text(content: format!("↑ {} more", skip), color: Color::DarkGrey)
                })
            } else {
                None
            })
            #(blocks)
        }
    }
}
