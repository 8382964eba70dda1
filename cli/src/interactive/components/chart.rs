//! Charts drawn with the same text layout as plain output, coloured per row

use super::rgb_color;
use crate::output::chart::{chart_lines, primary_color, ChartArea};
use crate::output::TextStyle;
use hms_core::chart::Chart;
use hms_core::{theme, Rgb};
use iocraft::prelude::*;

/// Chart text split into rows, each with the colour it should be drawn in.
/// `None` rows (axes, labels, caption) use the label colour.
pub fn chart_rows(chart: &Chart, area: ChartArea) -> Vec<(String, Option<Rgb>)> {
    let lines = chart_lines(chart, area, &TextStyle::plain());
    let plotted = match chart {
        Chart::Bar(bar) => bar.bars.len(),
        Chart::Histogram(hist) => hist.bin_counts().len(),
        Chart::Line(line) if line.points.is_empty() => 0,
        Chart::Line(_) => area.height.max(2),
    };

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let color = match chart {
                Chart::Bar(bar) => bar.bars.get(i).map(|b| b.color),
                _ if i < plotted => primary_color(chart),
                _ => None,
            };
            (line, color)
        })
        .collect()
}

#[derive(Default, Props)]
pub struct ChartBlockProps {
    pub chart: Option<Chart>,
    pub area: Option<ChartArea>,
}

#[component]
pub fn ChartBlock(props: &ChartBlockProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let area = props.area.unwrap_or(ChartArea {
        width: 40,
        height: 8,
    });
    let rows = props
        .chart
        .as_ref()
        .map(|chart| chart_rows(chart, area))
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Column) {
            #(rows.into_iter().enumerate().map(|(i, (line, color))| element! {
                Text(
                    key: i,
                    content: line,
                    color: rgb_color(color.unwrap_or(theme.label)),
                    wrap: TextWrap::NoWrap,
                )
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_core::{pages, Page, RenderContext};

    const AREA: ChartArea = ChartArea {
        width: 40,
        height: 6,
    };

    fn charts(page: Page) -> Vec<Chart> {
        pages::render(page, &RenderContext::default())
            .charts()
            .cloned()
            .collect()
    }

    #[test]
    fn test_bar_rows_take_bar_colours() {
        let charts = charts(Page::CapacityPlanning);
        let Chart::Bar(bar) = &charts[0] else {
            panic!("expected bar chart");
        };
        let rows = chart_rows(&charts[0], AREA);
        assert_eq!(rows.len(), bar.bars.len() + 1);
        for (row, b) in rows.iter().zip(&bar.bars) {
            assert_eq!(row.1, Some(b.color));
        }
        assert_eq!(rows.last().map(|r| r.1), Some(None));
    }

    #[test]
    fn test_line_rows_colour_only_plot() {
        let charts = charts(Page::CapacityPlanning);
        let rows = chart_rows(&charts[1], AREA);
        assert_eq!(rows.len(), AREA.height + 3);
        assert!(rows[..AREA.height].iter().all(|r| r.1.is_some()));
        assert!(rows[AREA.height..].iter().all(|r| r.1.is_none()));
    }

    #[test]
    fn test_histogram_rows_use_histogram_colour() {
        let charts = charts(Page::QualitySafety);
        let rows = chart_rows(&charts[0], AREA);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].1, Some(theme().histogram));
        assert_eq!(rows[5].1, None);
    }
}
