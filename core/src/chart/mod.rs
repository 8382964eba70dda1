//! Chart models
//!
//! Charts are plain data: categories, values and colours. Drawing them is
//! left to whichever surface renders a [`crate::view::PageView`].

mod histogram;

pub use histogram::{Bin, Histogram};

use crate::theme::Rgb;

/// One bar of a bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
    pub color: Rgb,
}

/// Categorical bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Build a bar chart whose bars take palette colours in order
    pub fn from_categories(
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        categories: &[(String, i64)],
        palette: &[Rgb],
    ) -> Self {
        let bars = categories
            .iter()
            .enumerate()
            .map(|(i, (label, value))| Bar {
                label: label.clone(),
                value: *value,
                color: palette
                    .get(i % palette.len().max(1))
                    .copied()
                    .unwrap_or(Rgb::new(0x16, 0x73, 0xBA)),
            })
            .collect();

        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars,
        }
    }
}

/// One point on a line chart
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: String,
    pub value: i64,
}

/// Line chart over labelled x positions
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<Point>,
    pub color: Rgb,
    /// Draw a marker at every point
    pub markers: bool,
}

/// Any chart the dashboard can show
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    Line(LineChart),
    Histogram(Histogram),
}

impl Chart {
    /// Largest plotted value, used to scale the value axis
    pub fn max_value(&self) -> i64 {
        match self {
            Chart::Bar(chart) => chart.bars.iter().map(|b| b.value).max().unwrap_or(0),
            Chart::Line(chart) => chart.points.iter().map(|p| p.value).max().unwrap_or(0),
            Chart::Histogram(hist) => hist
                .bin_counts()
                .iter()
                .map(|b| b.count as i64)
                .max()
                .unwrap_or(0),
        }
    }
}
