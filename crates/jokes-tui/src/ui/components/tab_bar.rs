use jokes_core::{Session, TabKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::{layout, theme};

/// Title shown for a tab, with the number of jokes it currently holds
fn tab_title(session: &Session, tab: TabKind) -> String {
    let count = session.tab(tab).jokes.len();
    if count > 0 {
        format!(" {} ({}) ", tab.label(), count)
    } else {
        format!(" {} ", tab.label())
    }
}

/// Renders a two-line tab bar:
/// - Line 1: tab titles, active one highlighted
/// - Line 2: underline beneath the active title
pub fn render_tab_bar(f: &mut Frame, session: &Session, area: Rect) {
    let lines = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let padding = " ".repeat(layout::CONTENT_PADDING_H as usize);
    let mut title_spans = vec![Span::raw(padding.clone())];
    let mut underline_spans = vec![Span::raw(padding)];

    for (i, tab) in TabKind::ALL.into_iter().enumerate() {
        if i > 0 {
            title_spans.push(Span::styled("│", theme::text_dim()));
            underline_spans.push(Span::raw(" "));
        }

        let title = tab_title(session, tab);
        let width = title.width();
        let active = tab == session.active_tab();

        let style = if active {
            theme::tab_active()
        } else {
            theme::tab_inactive()
        };
        title_spans.push(Span::styled(title, style));

        let underline = if active { "▔" } else { " " };
        underline_spans.push(Span::styled(
            underline.repeat(width),
            Style::default().fg(theme::ACCENT_PRIMARY),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(title_spans)), lines[0]);
    f.render_widget(Paragraph::new(Line::from(underline_spans)), lines[1]);
}
