//! Search Input UI
//!
//! Renders the search input box with the query and a blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, active: bool, vim_mode: bool) {
    let title = if active {
        " Search VisionVault - Enter to search, Esc to cancel ".to_string()
    } else {
        let search_key = if vim_mode { "/" } else { "/ or Ctrl-F" };
        format!(" Search VisionVault ({}) ", search_key)
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Query: "),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Query: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);
    f.render_widget(paragraph, area);
}
