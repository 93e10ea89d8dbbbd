use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use visionvault::model::{EditField, EditModalState};

const FIELDS: [(EditField, &str); 3] = [
    (EditField::Name, "Name"),
    (EditField::Tags, "Tags"),
    (EditField::Description, "Description"),
];

/// Build the lines of the edit form (extracted for testability)
fn build_edit_lines(modal: &EditModalState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            modal.path.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (field, label) in FIELDS {
        let is_focused = modal.focused == field && modal.submitting.is_none();
        let label_style = if is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(format!("{:<12}", label), label_style),
            Span::raw(modal.field(field).to_string()),
        ];
        if is_focused {
            spans.push(Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let footer = if modal.submitting.is_some() {
        Span::styled("Saving…", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "Enter: Save  Tab: Next field  Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        )
    };
    lines.push(Line::from(footer));
    lines
}

/// Render the edit metadata modal
pub fn render_edit_modal(f: &mut Frame, modal: &EditModalState) {
    let area = f.area();
    let modal_width = 70.min(area.width);
    let modal_height = 12.min(area.height);
    let modal_area = Rect {
        x: (area.width.saturating_sub(modal_width)) / 2,
        y: (area.height.saturating_sub(modal_height)) / 2,
        width: modal_width,
        height: modal_height,
    };

    let dialog = Paragraph::new(build_edit_lines(modal))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Edit File ")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, modal_area);
    f.render_widget(dialog, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> EditModalState {
        EditModalState {
            path: "spacex/falcon.jpg".to_string(),
            name: "falcon.jpg".to_string(),
            tags: "rocket".to_string(),
            description: String::new(),
            focused: EditField::Tags,
            submitting: None,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_cursor_on_focused_field() {
        let lines = build_edit_lines(&modal());
        assert!(line_text(&lines[4]).starts_with("Tags"));
        assert!(line_text(&lines[4]).ends_with("rocket█"));
        assert!(!line_text(&lines[2]).contains('█'));
    }

    #[test]
    fn test_submitting_footer() {
        let mut state = modal();
        state.submitting = Some(3);
        let lines = build_edit_lines(&state);
        assert_eq!(line_text(lines.last().unwrap()), "Saving…");
        assert!(!lines.iter().any(|l| line_text(l).contains('█')));
    }
}
