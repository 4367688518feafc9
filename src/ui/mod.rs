pub mod chart;
pub mod cpu_panel;
pub mod header;
pub mod ram_panel;
pub mod statusbar;
pub mod storage_panel;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::app::App;
use crate::ui::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Min(8),
            Constraint::Length(storage_panel::required_height(app)),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    cpu_panel::render(frame, chunks[1], app);
    ram_panel::render(frame, chunks[2], app);
    storage_panel::render(frame, chunks[3], app);
    statusbar::render(frame, chunks[4], &app.theme);
}

pub(crate) fn panel_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.panel_border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ))
}

/// `Key: value` row; a missing value reads as "Calculating..." until the
/// first poll arrives.
pub(crate) fn label_line(key: &str, value: Option<String>, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {key}: "),
            Style::default()
                .fg(theme.label_key)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            value.unwrap_or_else(|| "Calculating...".to_string()),
            Style::default().fg(theme.text_primary),
        ),
    ])
}
