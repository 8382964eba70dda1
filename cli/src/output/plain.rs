//! Plain-text rendering of a page view

use super::chart::{chart_lines, ChartArea};
use super::style::TextStyle;
use super::text::{pad_left, pad_right, text_width, wrap_text};
use hms_core::data::{Cell, Table};
use hms_core::form::{AdmissionType, Choice, Gender, PatientForm};
use hms_core::{theme, Block, DashboardConfig, PageView, Theme};

/// Layout and colour settings for plain-text output
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub style: TextStyle,
    /// Column budget for wrapped text
    pub width: usize,
    pub chart: ChartArea,
}

impl RenderOptions {
    pub fn from_config(config: &DashboardConfig, width: usize) -> Self {
        Self {
            style: TextStyle::new(config.color),
            width,
            chart: ChartArea {
                width: config.chart_width,
                height: config.chart_height,
            },
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default(), 80)
    }
}

/// Render a whole page
pub fn render_page(view: &PageView, opts: &RenderOptions) -> String {
    let theme = theme();
    let style = &opts.style;
    let mut out: Vec<String> = Vec::new();

    let title = format!("{} {}", view.icon, view.title);
    out.push(style.strong(&title, theme.title));
    out.push(style.fg(&"═".repeat(text_width(&title)), theme.title));

    for block in &view.blocks {
        out.push(String::new());
        match block {
            Block::Text(text) => out.extend(wrap_text(text, opts.width)),
            Block::Bullets(items) => {
                for item in items {
                    for (i, line) in wrap_text(item, opts.width.saturating_sub(4))
                        .into_iter()
                        .enumerate()
                    {
                        let lead = if i == 0 { "  • " } else { "    " };
                        out.push(format!("{}{}", lead, line));
                    }
                }
            }
            Block::Subheader(text) => out.push(style.strong(&format!("── {}", text), theme.title)),
            Block::Info(text) => out.extend(notice(text, theme.info_accent, opts)),
            Block::Success(text) => out.extend(notice(text, theme.success_accent, opts)),
            Block::Table(table) => out.extend(table_lines(table, theme, style)),
            Block::Chart(chart) => out.extend(chart_lines(chart, opts.chart, style)),
            Block::Form(form) => out.extend(form_lines(form, theme, style)),
        }
    }

    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}

fn notice(text: &str, accent: hms_core::Rgb, opts: &RenderOptions) -> Vec<String> {
    wrap_text(text, opts.width.saturating_sub(2))
        .into_iter()
        .map(|line| format!("{} {}", opts.style.fg("▌", accent), line))
        .collect()
}

/// Boxed table with a highlighted header row
pub fn table_lines(table: &Table, theme: &Theme, style: &TextStyle) -> Vec<String> {
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            table
                .rows()
                .iter()
                .map(|row| text_width(&row[i].to_string()))
                .chain(std::iter::once(text_width(name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(name, w)| {
            style.on(
                &format!(" {} ", pad_right(name, *w)),
                theme.table_header_text,
                theme.table_header,
            )
        })
        .collect();

    let mut lines = vec![
        rule("┌", "┬", "┐"),
        format!("│{}│", header.join("│")),
        rule("├", "┼", "┤"),
    ];

    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let text = cell.to_string();
                let aligned = match cell {
                    Cell::Int(_) => pad_left(&text, *w),
                    Cell::Text(_) => pad_right(&text, *w),
                };
                format!(" {} ", style.fg(&aligned, theme.table_text))
            })
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
    }

    lines.push(rule("└", "┴", "┘"));
    lines
}

fn choice_row<C: Choice>(selected: C) -> String {
    C::ALL
        .iter()
        .map(|c| {
            if *c == selected {
                format!("({})", c.label())
            } else {
                c.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// The patient form laid out as label/value rows
pub fn form_lines(form: &PatientForm, theme: &Theme, style: &TextStyle) -> Vec<String> {
    let label = |text: &str| style.fg(&pad_right(text, 16), theme.label);
    let diagnosis = if form.diagnosis.is_empty() {
        style.gray("(empty)")
    } else {
        form.diagnosis.clone()
    };

    vec![
        format!("{}{}  {}", label("Age"), form.age, style.gray("[0-120]")),
        format!("{}{}", label("Gender"), choice_row::<Gender>(form.gender)),
        format!(
            "{}{}",
            label("Admission Type"),
            choice_row::<AdmissionType>(form.admission_type)
        ),
        format!("{}{}", label("Diagnosis"), diagnosis),
        String::new(),
        style.on("[ Predict ]", theme.sidebar_text, theme.button),
    ]
}
