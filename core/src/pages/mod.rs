//! Page renderers
//!
//! Each renderer is a pure function from a [`RenderContext`] to a
//! [`PageView`]; sample data is rebuilt on every call.

mod capacity;
mod home;
mod predictions;
mod quality;

use crate::data::Table;
use crate::error::TableError;
use crate::router::{Page, PageRenderer, RenderContext};
use crate::view::{Block, PageView};
use tracing::warn;

/// Renderer for `page`
pub fn renderer(page: Page) -> PageRenderer {
    match page {
        Page::Home => home::render,
        Page::PatientPredictions => predictions::render,
        Page::CapacityPlanning => capacity::render,
        Page::QualitySafety => quality::render,
    }
}

/// One-line summary shown next to the route
pub fn description(page: Page) -> &'static str {
    match page {
        Page::Home => "Overview and dataset preview",
        Page::PatientPredictions => "Length of stay and readmission risk",
        Page::CapacityPlanning => "Bed demand and admissions",
        Page::QualitySafety => "Infections, satisfaction and readmissions",
    }
}

/// Render `page` with `ctx`
pub fn render(page: Page, ctx: &RenderContext) -> PageView {
    renderer(page)(ctx)
}

/// A sample table, or a notice in its place when it failed to build
fn table_block(table: Result<Table, TableError>) -> Block {
    match table {
        Ok(table) => Block::Table(table),
        Err(e) => {
            warn!("Sample table rejected: {}", e);
            Block::Info(format!("Table unavailable: {}", e))
        }
    }
}

/// Label/count pairs from the first two columns of a sample table
fn categories(table: Result<Table, TableError>) -> Vec<(String, i64)> {
    match table {
        Ok(table) => table
            .text_column(0)
            .into_iter()
            .zip(table.int_column(1))
            .collect(),
        Err(e) => {
            warn!("Sample table rejected: {}", e);
            Vec::new()
        }
    }
}
