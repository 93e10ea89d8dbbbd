use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use visionvault::model::BreadcrumbBar;

/// Build the spans for the breadcrumb bar (extracted for testability)
///
/// Every crumb but the last is a link; the last is the current marker. The
/// selected crumb is highlighted while the bar has focus.
fn build_breadcrumb_spans(
    bar: &BreadcrumbBar,
    selected: Option<usize>,
    is_focused: bool,
) -> Vec<Span<'static>> {
    match bar {
        BreadcrumbBar::Empty => vec![],
        BreadcrumbBar::SearchResults => vec![Span::styled(
            "Search Results",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )],
        BreadcrumbBar::Trail(crumbs) => {
            let last = crumbs.len().saturating_sub(1);
            let mut spans = Vec::with_capacity(crumbs.len() * 2);

            for (idx, crumb) in crumbs.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
                }

                let mut style = if idx == last {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED)
                };
                if is_focused && selected == Some(idx) {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                spans.push(Span::styled(crumb.name.clone(), style));
            }
            spans
        }
    }
}

/// Render the breadcrumb bar
pub fn render_breadcrumbs(
    f: &mut Frame,
    area: Rect,
    bar: &BreadcrumbBar,
    selected: Option<usize>,
    is_focused: bool,
) {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let paragraph = Paragraph::new(Line::from(build_breadcrumb_spans(bar, selected, is_focused)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(paragraph, area);
}
