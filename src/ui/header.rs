use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.panel_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let secondary = Style::default().fg(theme.text_secondary);
    let line = Line::from(vec![
        Span::styled(
            " System Monitor ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Refresh: {:.1}s", app.refresh_interval.as_secs_f64()),
            secondary,
        ),
        Span::raw("  "),
        Span::styled(format!("History: {} samples", app.history_capacity), secondary),
        Span::raw("  "),
        Span::styled(format!("Polls: {}", app.poll_count()), secondary),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
