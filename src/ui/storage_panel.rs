use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::format::{disk_status_text, truncate_unicode};
use crate::system::snapshot::DiskStatus;
use crate::ui::panel_block;

/// Rows needed to show every registered device plus the border.
pub fn required_height(app: &App) -> u16 {
    u16::try_from(app.devices.len().max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = panel_block("Storage Information", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.devices.is_empty() {
        let line = Line::from(Span::styled(
            " No partitions found",
            Style::default().fg(theme.text_secondary),
        ));
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    let device_width = (inner.width as usize / 2).max(8);
    let lines: Vec<Line> = app
        .devices
        .iter()
        .map(|device| {
            let status = app.disk_status(device);
            let status_style = match status {
                Some(DiskStatus::PermissionDenied) => Style::default().fg(theme.status_err),
                _ => Style::default().fg(theme.text_primary),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {}: ", truncate_unicode(device, device_width)),
                    Style::default()
                        .fg(theme.label_key)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(disk_status_text(status), status_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
