//! Item Grid UI
//!
//! Renders the grid region: either a single message or a wrap of item cards.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use visionvault::logic::layout::{first_visible_row, grid_columns, grid_rows, CARD_HEIGHT, CARD_WIDTH};
use visionvault::model::{Card, CardKind, GridView};

use crate::utils::truncate_to_width;

fn icon_style(card: &Card) -> Style {
    match card.kind {
        CardKind::Folder => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        CardKind::Image { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        CardKind::Other { .. } => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    }
}

/// Text lines inside a card: icon, name, tags
fn card_lines(card: &Card, inner_width: usize) -> Vec<Line<'static>> {
    let tags = match card.kind {
        // Folders carry no tags
        CardKind::Folder => String::new(),
        _ => card.tags.clone().unwrap_or_default(),
    };

    vec![
        Line::from(Span::styled(card.icon().to_string(), icon_style(card))),
        Line::from(truncate_to_width(&card.name, inner_width)),
        Line::from(Span::styled(
            truncate_to_width(&tags, inner_width),
            Style::default().fg(Color::Rgb(120, 120, 120)),
        )),
    ]
}

fn render_message(f: &mut Frame, area: Rect, block: Block, message: &str, color: Color) {
    let paragraph = Paragraph::new(message.to_string())
        .block(block)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render the grid region; returns the number of card columns used
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    grid: &GridView,
    selected: Option<usize>,
    is_focused: bool,
) -> usize {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    let columns = grid_columns(inner.width);

    let cards = match grid {
        GridView::Placeholder(msg) | GridView::Message(msg) => {
            render_message(f, area, block, msg, Color::Gray);
            return columns;
        }
        GridView::Error(msg) => {
            render_message(f, area, block, msg, Color::Red);
            return columns;
        }
        GridView::Loading => {
            render_message(f, area, block, "Loading…", Color::Gray);
            return columns;
        }
        GridView::Cards(cards) => cards,
    };

    f.render_widget(block.title(format!(" {} items ", cards.len())), area);

    let rows = grid_rows(inner.height);
    let first_row = first_visible_row(selected, columns, rows);

    for (idx, card) in cards.iter().enumerate().skip(first_row * columns) {
        let row = idx / columns - first_row;
        if row >= rows {
            break;
        }
        let col = idx % columns;

        let card_area = Rect {
            x: inner.x + col as u16 * CARD_WIDTH,
            y: inner.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT.min(inner.height),
        };

        let is_selected = is_focused && selected == Some(idx);
        let card_border = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let paragraph = Paragraph::new(card_lines(card, CARD_WIDTH.saturating_sub(2) as usize))
            .block(Block::default().borders(Borders::ALL).border_style(card_border))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, card_area);
    }

    columns
}
