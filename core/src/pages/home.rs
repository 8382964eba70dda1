use super::table_block;
use crate::data;
use crate::router::{Page, RenderContext};
use crate::view::{Block, PageView};

pub(super) fn render(_ctx: &RenderContext) -> PageView {
    PageView::new(Page::Home, "🏥", "Hospital Management Dashboard")
        .text("Welcome to the Hospital Management System dashboard.")
        .text("This app provides:")
        .push(Block::Bullets(vec![
            "📊 Predicting patient Length of Stay (LOS) & Readmission Risk".into(),
            "🛏 Capacity Planning (bed demand & staffing recommendations)".into(),
            "✅ Monitoring Quality & Safety indicators".into(),
        ]))
        .subheader("Dataset Overview")
        .push(Block::Info(
            "📂 Data preview will be shown here once connected.".into(),
        ))
        .push(table_block(data::unit_occupancy()))
}
