use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Tabs};

use crate::app::{App, CpuChart};
use crate::format::{format_mhz, format_percent};
use crate::ui::chart::{self, LineChart};
use crate::ui::{label_line, panel_block};

/// Upper bound of the clock speed chart.
pub const FREQUENCY_CHART_MAX_MHZ: f64 = 5000.0;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = panel_block("CPU Information", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(inner);

    let snapshot = app.snapshot.as_ref();
    let lines = vec![
        label_line(
            "Clock Speed",
            snapshot.map(|s| format_mhz(s.cpu_frequency_mhz)),
            theme,
        ),
        label_line(
            "CPU Usage",
            snapshot.map(|s| format_percent(s.cpu_usage_percent)),
            theme,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let tabs = Tabs::new(CpuChart::titles().map(Line::from))
        .select(app.cpu_chart.index())
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[1]);

    let (line_chart, data) = match app.cpu_chart {
        CpuChart::Frequency => (
            LineChart {
                title: "CPU Clock Speed",
                legend: "CPU Frequency (MHz)",
                y_label: "MHz",
                y_max: FREQUENCY_CHART_MAX_MHZ,
                color: theme.frequency_line,
            },
            snapshot.map(|s| s.history.cpu_frequency_mhz.as_slice()),
        ),
        CpuChart::Usage => (
            LineChart {
                title: "CPU Core Usage",
                legend: "CPU Usage (%)",
                y_label: "Usage (%)",
                y_max: 100.0,
                color: theme.usage_line,
            },
            snapshot.map(|s| s.history.cpu_usage_percent.as_slice()),
        ),
    };
    chart::render(
        frame,
        chunks[2],
        &line_chart,
        data.unwrap_or_default(),
        app.history_capacity,
        theme,
    );
}
