use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use visionvault::model::Pane;

/// What the legend should describe
#[derive(Clone, Copy, Debug)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub focus: Pane,
    pub has_tree: bool,
    pub has_open_command: bool,
    pub search_mode: bool,
    pub editing: bool,
}

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Text inputs swallow every other key
    if ctx.editing {
        hotkey_spans.extend(key("Tab", ":Next field  "));
        hotkey_spans.extend(key("Enter", ":Save  "));
        hotkey_spans.extend(key("Esc", ":Cancel"));
        return hotkey_spans;
    }
    if ctx.search_mode {
        hotkey_spans.extend(key("Enter", ":Search  "));
        hotkey_spans.extend(key("Esc", ":Cancel"));
        return hotkey_spans;
    }

    if ctx.vim_mode {
        hotkey_spans.extend(key("hjkl", ":Nav  "));
    } else {
        hotkey_spans.extend(key("←↑↓→", ":Nav  "));
    }
    if ctx.has_tree {
        hotkey_spans.extend(key("Tab", ":Pane  "));
    }

    match ctx.focus {
        Pane::Tree | Pane::Breadcrumbs => {
            hotkey_spans.extend(key("Enter", ":Open  "));
        }
        Pane::Grid => {
            hotkey_spans.extend(key("Enter", ":Open  "));
            hotkey_spans.extend(key("e", ":Edit  "));
            if ctx.has_open_command {
                hotkey_spans.extend(key("o", ":View image  "));
            }
        }
    }

    hotkey_spans.extend(key("Bksp", ":Up  "));
    let search_key = if ctx.vim_mode { "/" } else { "^F" };
    hotkey_spans.extend(key(search_key, ":Search  "));
    hotkey_spans.extend(key("^V", ":Paste image  "));
    hotkey_spans.extend(key("r", ":Refresh  "));
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph
fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count lines without the block; line_count() misreports with borders attached
    let paragraph_for_counting =
        Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))]).wrap(Wrap { trim: false });

    let line_count = paragraph_for_counting.line_count(terminal_width.saturating_sub(2));

    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LegendContext {
        LegendContext {
            vim_mode: false,
            focus: Pane::Grid,
            has_tree: true,
            has_open_command: true,
            search_mode: false,
            editing: false,
        }
    }

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_grid_focus_shows_edit_and_view() {
        let text = spans_to_text(&build_hotkey_spans(ctx()));
        assert!(text.contains("e:Edit"), "got: {}", text);
        assert!(text.contains("o:View image"), "got: {}", text);
        assert!(text.contains("^F:Search"), "got: {}", text);
    }

    #[test]
    fn test_view_hidden_without_open_command() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext {
            has_open_command: false,
            ..ctx()
        }));
        assert!(!text.contains("View image"), "got: {}", text);
    }

    #[test]
    fn test_breadcrumb_focus_has_no_edit() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext {
            focus: Pane::Breadcrumbs,
            ..ctx()
        }));
        assert!(!text.contains("e:Edit"), "got: {}", text);
    }

    #[test]
    fn test_vim_mode_keys() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext {
            vim_mode: true,
            ..ctx()
        }));
        assert!(text.contains("hjkl:Nav"));
        assert!(text.contains("/:Search"));
    }

    #[test]
    fn test_edit_modal_legend() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext {
            editing: true,
            ..ctx()
        }));
        assert_eq!(text, "Tab:Next field  Enter:Save  Esc:Cancel");
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        assert_eq!(calculate_legend_height(400, ctx()), 3);
        assert!(calculate_legend_height(30, ctx()) > 3);
    }
}
