//! Text drawing for dashboard charts
//!
//! Bar charts and histograms are drawn as horizontal bars; line charts as a
//! character grid with one marker per point.

use super::style::TextStyle;
use super::text::{pad_left, pad_right, text_width};
use hms_core::chart::{Bar, BarChart, Chart, Histogram, LineChart};
use hms_core::Rgb;

pub const BAR_CHAR: char = '█';
pub const MARKER_CHAR: char = '●';
pub const PLAIN_POINT_CHAR: char = '•';
pub const TRACE_CHAR: char = '·';

/// Drawing area for a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartArea {
    pub width: usize,
    pub height: usize,
}

/// Draw any chart into lines of text
pub fn chart_lines(chart: &Chart, area: ChartArea, style: &TextStyle) -> Vec<String> {
    match chart {
        Chart::Bar(bar) => bar_chart_lines(bar, chart.max_value(), area.width, style),
        Chart::Histogram(hist) => histogram_lines(hist, chart.max_value(), area.width, style),
        Chart::Line(line) => line_chart_lines(line, area, style),
    }
}

/// Length of a bar for `value` when `max` fills `width` columns
pub fn bar_length(value: i64, max: i64, width: usize) -> usize {
    if max <= 0 || value <= 0 {
        return 0;
    }
    ((value as f64 / max as f64) * width as f64).round() as usize
}

/// One row per bar, scaled so `max` fills the plot width
fn horizontal_bars(bars: &[Bar], max: i64, width: usize, style: &TextStyle) -> Vec<String> {
    let label_width = bars.iter().map(|b| text_width(&b.label)).max().unwrap_or(0);
    let value_width = bars
        .iter()
        .map(|b| b.value.to_string().len())
        .max()
        .unwrap_or(1);
    let plot_width = width.saturating_sub(label_width + value_width + 3).max(1);

    bars.iter()
        .map(|bar| {
            let len = bar_length(bar.value, max, plot_width);
            let filled: String = std::iter::repeat(BAR_CHAR).take(len).collect();
            format!(
                "{} │{}{} {}",
                pad_right(&bar.label, label_width),
                style.fg(&filled, bar.color),
                " ".repeat(plot_width - len),
                pad_left(&bar.value.to_string(), value_width),
            )
        })
        .collect()
}

pub fn bar_chart_lines(chart: &BarChart, max: i64, width: usize, style: &TextStyle) -> Vec<String> {
    let mut lines = horizontal_bars(&chart.bars, max, width, style);
    lines.push(style.gray(&format!("{} by {}", chart.y_label, chart.x_label)));
    lines
}

pub fn histogram_lines(hist: &Histogram, max: i64, width: usize, style: &TextStyle) -> Vec<String> {
    let bars: Vec<Bar> = hist
        .bin_counts()
        .iter()
        .map(|bin| Bar {
            label: bin.label(),
            value: bin.count as i64,
            color: hist.color,
        })
        .collect();

    let mut lines = horizontal_bars(&bars, max, width, style);
    lines.push(style.gray(&format!(
        "Count of {} ({} bins)",
        hist.label,
        hist.bins.max(1)
    )));
    lines
}

/// Row of the grid for `value`; row 0 is the top
fn value_row(value: f64, min: f64, max: f64, height: usize) -> usize {
    let span = (max - min).max(f64::EPSILON);
    (((max - value) / span) * (height - 1) as f64).round() as usize
}

pub fn line_chart_lines(chart: &LineChart, area: ChartArea, style: &TextStyle) -> Vec<String> {
    let points = &chart.points;
    if points.is_empty() {
        return vec![style.gray("(no data)")];
    }

    let height = area.height.max(2);
    let label_width = points.iter().map(|p| text_width(&p.label)).max().unwrap_or(1);
    let column = (label_width + 1).max(area.width / points.len()).max(2);
    let plot_width = column * (points.len() - 1) + 1;

    let mut min = points.iter().map(|p| p.value).min().unwrap_or(0) as f64;
    let mut max = points.iter().map(|p| p.value).max().unwrap_or(0) as f64;
    if min == max {
        min -= 1.0;
        max += 1.0;
    }

    let mut grid = vec![vec![' '; plot_width]; height];

    for (i, pair) in points.windows(2).enumerate() {
        let x0 = i * column;
        let (v0, v1) = (pair[0].value as f64, pair[1].value as f64);
        for step in 1..column {
            let t = step as f64 / column as f64;
            let row = value_row(v0 + (v1 - v0) * t, min, max, height);
            grid[row][x0 + step] = TRACE_CHAR;
        }
    }

    let marker = if chart.markers {
        MARKER_CHAR
    } else {
        PLAIN_POINT_CHAR
    };
    for (i, point) in points.iter().enumerate() {
        let row = value_row(point.value as f64, min, max, height);
        grid[row][i * column] = marker;
    }

    let max_label = format!("{}", max as i64);
    let min_label = format!("{}", min as i64);
    let axis_width = text_width(&max_label).max(text_width(&min_label));

    let mut lines: Vec<String> = grid
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let tick = if row == 0 {
                max_label.as_str()
            } else if row == height - 1 {
                min_label.as_str()
            } else {
                ""
            };
            let plot: String = cells.iter().collect();
            format!(
                "{} ┤{}",
                pad_left(tick, axis_width),
                style.fg(plot.trim_end(), chart.color)
            )
        })
        .collect();

    lines.push(format!(
        "{} └{}",
        " ".repeat(axis_width),
        "─".repeat(plot_width)
    ));

    let mut x_labels = " ".repeat(axis_width + 2);
    for point in points {
        x_labels.push_str(&pad_right(&point.label, column));
    }
    lines.push(x_labels.trim_end().to_string());
    lines.push(style.gray(&format!("{} over {}", chart.y_label, chart.x_label)));
    lines
}

/// Colour used for the first series of a chart
pub fn primary_color(chart: &Chart) -> Option<Rgb> {
    match chart {
        Chart::Bar(bar) => bar.bars.first().map(|b| b.color),
        Chart::Line(line) => Some(line.color),
        Chart::Histogram(hist) => Some(hist.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_core::pages;
    use hms_core::{Page, RenderContext};

    fn charts_of(page: Page) -> Vec<Chart> {
        pages::render(page, &RenderContext::default())
            .charts()
            .cloned()
            .collect()
    }

    #[test]
    fn test_bar_length_scaling() {
        assert_eq!(bar_length(30, 30, 20), 20);
        assert_eq!(bar_length(15, 30, 20), 10);
        assert_eq!(bar_length(0, 30, 20), 0);
        assert_eq!(bar_length(5, 0, 20), 0);
    }

    #[test]
    fn test_bed_bars() {
        let charts = charts_of(Page::CapacityPlanning);
        let Chart::Bar(bar) = &charts[0] else {
            panic!("expected bar chart");
        };
        let lines = bar_chart_lines(bar, charts[0].max_value(), 40, &TextStyle::plain());
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ICU      │"));
        assert!(lines[1].ends_with(" 30"));

        let longest = lines[1].chars().filter(|c| *c == BAR_CHAR).count();
        let shortest = lines[0].chars().filter(|c| *c == BAR_CHAR).count();
        assert!(longest > shortest);
        assert_eq!(lines[3], "Beds by Unit");

        // A larger scale leaves the longest bar short of the plot width
        let scaled = bar_chart_lines(bar, 60, 40, &TextStyle::plain());
        let half = scaled[1].chars().filter(|c| *c == BAR_CHAR).count();
        assert_eq!(half, (longest as f64 / 2.0).round() as usize);
    }

    #[test]
    fn test_histogram_bins_drawn() {
        let charts = charts_of(Page::QualitySafety);
        let lines = chart_lines(
            &charts[0],
            ChartArea {
                width: 40,
                height: 8,
            },
            &TextStyle::plain(),
        );
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("2-3 │"));
        assert!(lines[4].ends_with(" 3"));
        assert_eq!(lines[5], "Count of Infection Rate (5 bins)");
    }

    #[test]
    fn test_line_chart_has_marker_per_point() {
        let charts = charts_of(Page::CapacityPlanning);
        let area = ChartArea {
            width: 42,
            height: 6,
        };
        let lines = chart_lines(&charts[1], area, &TextStyle::plain());

        let markers: usize = lines
            .iter()
            .map(|l| l.chars().filter(|c| *c == MARKER_CHAR).count())
            .sum();
        assert_eq!(markers, 7);

        // 6 plot rows, axis, x labels, caption
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("22 ┤"));
        assert!(lines[5].starts_with("10 ┤●"));
        assert!(lines[7].contains("01-01"));
        assert!(lines[7].contains("01-07"));
    }

    #[test]
    fn test_flat_and_empty_lines() {
        let flat = LineChart {
            x_label: "x".into(),
            y_label: "y".into(),
            points: vec![
                hms_core::chart::Point {
                    label: "a".into(),
                    value: 5,
                },
                hms_core::chart::Point {
                    label: "b".into(),
                    value: 5,
                },
            ],
            color: Rgb::new(0, 0, 0),
            markers: false,
        };
        let area = ChartArea {
            width: 10,
            height: 3,
        };
        let lines = line_chart_lines(&flat, area, &TextStyle::plain());
        assert_eq!(
            lines
                .iter()
                .map(|l| l.chars().filter(|c| *c == PLAIN_POINT_CHAR).count())
                .sum::<usize>(),
            2
        );

        let empty = LineChart {
            points: vec![],
            ..flat
        };
        assert_eq!(line_chart_lines(&empty, area, &TextStyle::plain()), vec!["(no data)"]);
    }
}
