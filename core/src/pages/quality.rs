use super::categories;
use crate::chart::{BarChart, Chart, Histogram, LineChart, Point};
use crate::data;
use crate::router::{Page, RenderContext};
use crate::theme::theme;
use crate::view::{Block, PageView};

const INFECTION_BINS: usize = 5;

pub(super) fn render(_ctx: &RenderContext) -> PageView {
    let theme = theme();

    let infections = Histogram {
        label: "Infection Rate".into(),
        samples: data::infection_rates(),
        bins: INFECTION_BINS,
        color: theme.histogram,
    };

    let satisfaction = LineChart {
        x_label: "Month".into(),
        y_label: "Satisfaction".into(),
        points: data::satisfaction_trend()
            .into_iter()
            .map(|(month, score)| Point {
                label: month.to_string(),
                value: score,
            })
            .collect(),
        color: theme.trend_line,
        markers: true,
    };

    let genders = categories(data::readmission_by_gender());

    PageView::new(Page::QualitySafety, "✅", "Quality & Safety Monitors")
        .text("Track infection rates, adverse events, and satisfaction trends.")
        .subheader("Infection Rate Distribution")
        .push(Block::Chart(Chart::Histogram(infections)))
        .subheader("Patient Satisfaction Trends")
        .push(Block::Chart(Chart::Line(satisfaction)))
        .subheader("Readmission Rate by Gender")
        .push(Block::Chart(Chart::Bar(BarChart::from_categories(
            "Gender",
            "Readmission Rate",
            &genders,
            &theme.palette,
        ))))
}
