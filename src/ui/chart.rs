use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};

use crate::ui::theme::Theme;

/// Static description of one trend chart. The x axis always spans the
/// history capacity so the line grows from the left as samples arrive.
pub struct LineChart<'a> {
    pub title: &'a str,
    pub legend: &'a str,
    pub y_label: &'a str,
    pub y_max: f64,
    pub color: Color,
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    chart: &LineChart,
    data: &[f64],
    capacity: usize,
    theme: &Theme,
) {
    let points: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, &value)| (i as f64, value))
        .collect();

    let x_max = capacity.max(1) as f64;
    let y_max = if chart.y_max > 0.0 { chart.y_max } else { 1.0 };
    let axis_style = Style::default().fg(theme.axis);

    let dataset = Dataset::default()
        .name(chart.legend)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(chart.color))
        .data(&points);

    let widget = Chart::new(vec![dataset])
        .block(Block::default().title(Span::styled(
            format!(" {} ", chart.title),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        )))
        .x_axis(
            Axis::default()
                .title("Samples")
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(vec!["0".to_string(), capacity.to_string()]),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label)
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels(vec!["0".to_string(), format!("{y_max:.0}")]),
        );

    frame.render_widget(widget, area);
}
