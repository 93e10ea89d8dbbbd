use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use visionvault::model::TreeEntry;

/// Render the folder tree pane (configured root folders)
pub fn render_folder_tree(
    f: &mut Frame,
    area: Rect,
    entries: &[TreeEntry],
    selected: Option<usize>,
    current_folder: Option<&str>,
    is_focused: bool,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let is_current = current_folder.is_some_and(|current| {
                let entry_path = visionvault::logic::path::normalize_path(&entry.path);
                current == entry_path || current.starts_with(&format!("{}/", entry_path))
            });
            let style = if is_current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled("▸ ", Style::default().fg(Color::Yellow)),
                Span::styled(entry.name.clone(), style),
            ]))
        })
        .collect();

    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Folders ")
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if is_focused {
        state.select(selected);
    }
    f.render_stateful_widget(list, area, &mut state);
}
