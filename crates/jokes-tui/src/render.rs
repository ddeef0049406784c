use jokes_core::TabKind;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::components::{render_statusbar, render_tab_bar};
use crate::ui::layout;
use crate::ui::views::{render_form, render_results};
use crate::ui::App;

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let session = &app.session;
    let form_height = layout::INPUT_HEIGHT
        + if session.active_tab() == TabKind::Search {
            layout::CATEGORY_ROW_HEIGHT
        } else {
            0
        };
    let error_height = if session.error().is_some() {
        layout::ERROR_BANNER_HEIGHT
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Length(layout::TAB_BAR_HEIGHT),
        Constraint::Length(form_height),
        Constraint::Length(error_height),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    // Chrome turns red while a quit is pending
    let chrome_color = if app.pending_quit {
        ui::theme::ACCENT_ERROR
    } else {
        ui::theme::ACCENT_PRIMARY
    };
    let padding = " ".repeat(layout::CONTENT_PADDING_H as usize);
    let header = Paragraph::new(format!("{}Joke Generator", padding)).style(
        Style::default()
            .fg(chrome_color)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(header, chunks[0]);

    render_tab_bar(f, session, chunks[1]);
    render_form(f, session, chunks[2]);

    if let Some(error) = session.error() {
        let banner = Paragraph::new(Line::from(vec![
            Span::raw(padding.clone()),
            Span::styled(format!("✗ {}", error), ui::theme::error_banner()),
        ]));
        f.render_widget(banner, chunks[3]);
    }

    let max_scroll = render_results(f, session, app.scroll_offset, chunks[4]);
    app.set_max_scroll(max_scroll);

    let (footer_text, footer_style) = if app.pending_quit {
        (
            "⚠ Press Ctrl+C again to quit".to_string(),
            Style::default().fg(ui::theme::ACCENT_ERROR),
        )
    } else {
        (footer_hints(app), ui::theme::text_dim())
    };
    f.render_widget(
        Paragraph::new(format!("{}{}", padding, footer_text)).style(footer_style),
        chunks[5],
    );

    render_statusbar(f, app, chunks[6]);
}

fn footer_hints(app: &App) -> String {
    let mut hints = vec!["Tab switch", "Enter submit"];
    if app.session.active_tab() == TabKind::Search {
        hints.push("↑/↓ category");
    }
    if app.session.can_load_more() {
        hints.push("Ctrl+N more");
    }
    hints.extend(["Ctrl+L clear", "PgUp/PgDn scroll", "Esc quit"]);
    hints.join(" · ")
}
