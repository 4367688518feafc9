use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::format::format_gb;
use crate::ui::chart::{self, LineChart};
use crate::ui::{label_line, panel_block};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = panel_block("RAM Information", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(inner);

    let snapshot = app.snapshot.as_ref();
    let lines = vec![
        label_line("Total RAM", Some(format_gb(app.ram_total_gb)), theme),
        label_line("Used RAM", snapshot.map(|s| format_gb(s.ram_used_gb)), theme),
        label_line(
            "Available RAM",
            snapshot.map(|s| format_gb(s.ram_available_gb)),
            theme,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let line_chart = LineChart {
        title: "RAM Usage",
        legend: "Used RAM (GB)",
        y_label: "GB",
        y_max: app.ram_total_gb,
        color: theme.ram_line,
    };
    let data = snapshot
        .map(|s| s.history.ram_used_gb.as_slice())
        .unwrap_or_default();
    chart::render(frame, chunks[1], &line_chart, data, app.history_capacity, theme);
}
