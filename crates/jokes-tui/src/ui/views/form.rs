use jokes_core::{Session, TabKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::{layout, theme};

/// Hint shown in an empty input
pub fn placeholder(tab: TabKind) -> &'static str {
    match tab {
        TabKind::Ask => "e.g., Tell me a programming joke",
        TabKind::Search => "Search for jokes...",
        TabKind::Id => "Enter joke ID",
    }
}

fn submit_label(tab: TabKind) -> &'static str {
    match tab {
        TabKind::Search => "Search",
        TabKind::Ask | TabKind::Id => "Get Joke",
    }
}

/// Input line for the active tab plus, on the search tab, the category
/// selector underneath.
pub fn render_form(f: &mut Frame, session: &Session, area: Rect) {
    let tab = session.active_tab();
    let category_height = if tab == TabKind::Search {
        layout::CATEGORY_ROW_HEIGHT
    } else {
        0
    };
    let chunks = Layout::vertical([
        Constraint::Length(layout::INPUT_HEIGHT),
        Constraint::Length(category_height),
    ])
    .split(area);

    let input = session.input(tab);
    let border_style = if session.is_loading() {
        theme::border_unfocused()
    } else {
        theme::border_focused()
    };
    let title = if session.is_loading() {
        " Loading... ".to_string()
    } else {
        format!(" {} · Enter ", submit_label(tab))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, theme::text_muted()))
        .style(Style::default().bg(theme::BG_INPUT));

    let content = if input.is_empty() {
        Span::styled(placeholder(tab), theme::text_dim())
    } else {
        Span::styled(input.to_string(), theme::text_primary())
    };
    let inner = block.inner(chunks[0]);
    f.render_widget(Paragraph::new(Line::from(content)).block(block), chunks[0]);

    // Keep the cursor inside the box even for long input
    let cursor_x = inner.x + (input.width() as u16).min(inner.width.saturating_sub(1));
    f.set_cursor_position(Position::new(cursor_x, inner.y));

    if tab == TabKind::Search {
        let line = Line::from(vec![
            Span::styled("Category: ", theme::text_muted()),
            Span::styled("◀ ", theme::text_dim()),
            Span::styled(session.selected_category().to_string(), theme::category_label()),
            Span::styled(" ▶", theme::text_dim()),
            Span::styled("  (↑/↓ to change)", theme::text_dim()),
        ]);
        f.render_widget(Paragraph::new(line), chunks[1]);
    }
}
