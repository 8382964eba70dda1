use super::categories;
use crate::chart::{BarChart, Chart, LineChart, Point};
use crate::data;
use crate::router::{Page, RenderContext};
use crate::theme::theme;
use crate::view::{Block, PageView};

pub(super) fn render(_ctx: &RenderContext) -> PageView {
    let theme = theme();

    let beds = categories(data::unit_beds());

    let admissions = LineChart {
        x_label: "Day".into(),
        y_label: "Admissions".into(),
        points: data::admissions_trend()
            .into_iter()
            .map(|(day, count)| Point {
                label: day.format("%m-%d").to_string(),
                value: count,
            })
            .collect(),
        color: theme.palette_color(0),
        markers: true,
    };

    PageView::new(Page::CapacityPlanning, "📈", "Capacity Planning")
        .text("Visualizations of bed demand & staffing will appear here.")
        .subheader("Bed Occupancy by Unit")
        .push(Block::Chart(Chart::Bar(BarChart::from_categories(
            "Unit",
            "Beds",
            &beds,
            &theme.palette,
        ))))
        .subheader("Daily Admissions Trend")
        .push(Block::Chart(Chart::Line(admissions)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_chart_categories() {
        let view = render(&RenderContext::default());
        let charts: Vec<_> = view.charts().collect();
        assert_eq!(charts.len(), 2);

        let Chart::Bar(bar) = charts[0] else {
            panic!("expected a bar chart first");
        };
        let bars: Vec<(&str, i64)> = bar.bars.iter().map(|b| (b.label.as_str(), b.value)).collect();
        assert_eq!(bars, vec![("ICU", 12), ("Surgical", 30), ("Medical", 25)]);
        assert_eq!(bar.bars[2].color.to_hex(), "#4896FE");
    }

    #[test]
    fn test_admissions_line() {
        let view = render(&RenderContext::default());
        let Some(Chart::Line(line)) = view.charts().nth(1) else {
            panic!("expected a line chart second");
        };
        assert!(line.markers);
        let values: Vec<i64> = line.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10, 15, 18, 12, 20, 22, 19]);
        assert_eq!(line.points[0].label, "01-01");
        assert_eq!(line.points[6].label, "01-07");
    }
}
