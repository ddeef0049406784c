// Global status bar at the very bottom of the app.
// Shows the request state on the left and the service address on the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::{theme, App};

/// Truncate to a display width, adding an ellipsis when cut
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max_width - 3 {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push_str("...");
    result
}

pub fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let address = format!(" {} ", app.api_base_url());
    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(address.width() as u16),
    ])
    .split(area);

    let left = if app.session.is_loading() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.spinner_char()),
                Style::default().fg(theme::ACCENT_PRIMARY),
            ),
            Span::styled("Loading...", theme::text_muted()),
        ])
    } else if let Some(status) = app.status() {
        let max = (chunks[0].width as usize).saturating_sub(3);
        Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(theme::ACCENT_SUCCESS)),
            Span::styled(truncate_to_width(status, max), theme::text_muted()),
        ])
    } else {
        Line::from(Span::styled(" Ready", theme::text_dim()))
    };

    f.render_widget(Paragraph::new(left), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(address, theme::text_dim())),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer message", 8), "a lon...");
        assert_eq!(truncate_to_width("abc", 2), "..");
    }
}
