use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use visionvault::model::{Toast, ToastLevel};

fn level_theme(level: ToastLevel) -> (&'static str, Color) {
    match level {
        ToastLevel::Info => ("✓ ", Color::Green),
        ToastLevel::Warning => ("! ", Color::Yellow),
        ToastLevel::Error => ("✗ ", Color::Red),
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    let max_width = (area.width as usize).min(80);
    let toast_width = (toast.message.width() + 6).min(max_width) as u16;
    let toast_height = 4.min(area.height);

    let toast_area = Rect {
        x: area.x + (area.width.saturating_sub(toast_width)) / 2,
        y: area.y + 3.min(area.height.saturating_sub(toast_height)),
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = level_theme(toast.level);
    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(toast.message.clone()),
    ]);

    let toast_text = Paragraph::new(vec![toast_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
