use jokes_core::{Joke, JokeShape, Session, TabKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::views::analysis::{analysis_height, render_analysis};
use crate::ui::{layout, theme};

/// Lines for one joke: category header, then either setup and delivery or
/// the single text.
pub fn joke_lines(joke: &Joke) -> Vec<Line<'static>> {
    let mut header = vec![
        Span::styled("Category: ", theme::text_muted()),
        Span::styled(joke.category.clone(), theme::category_label()),
    ];
    if !joke.is_safe {
        header.push(Span::styled("  [not safe]", theme::unsafe_badge()));
    }

    let mut lines = vec![Line::from(header)];
    match joke.shape() {
        JokeShape::TwoPart { setup, delivery } => {
            lines.push(Line::from(Span::styled(setup.to_string(), theme::text_primary())));
            lines.push(Line::from(Span::styled(delivery.to_string(), theme::delivery())));
        }
        JokeShape::Single(text) => {
            lines.push(Line::from(Span::styled(text.to_string(), theme::text_primary())));
        }
    }
    lines
}

fn empty_hint(tab: TabKind) -> &'static str {
    match tab {
        TabKind::Ask => "Describe the joke you want and press Enter.",
        TabKind::Search => "Type keywords, pick a category, press Enter.",
        TabKind::Id => "Enter a numeric joke ID and press Enter.",
    }
}

/// Rows `lines` occupy once wrapped to `width`
pub(crate) fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum()
}

/// Results area for the active tab: optional analysis panel (ask tab),
/// then the joke list and a load-more hint when more pages exist.
///
/// Returns the largest useful scroll offset for the list.
pub fn render_results(f: &mut Frame, session: &Session, scroll: u16, area: Rect) -> u16 {
    let tab = session.active_tab();
    let state = session.active_state();

    let panel_height = if tab == TabKind::Ask {
        analysis_height(state, area.width)
    } else {
        0
    };
    let chunks =
        Layout::vertical([Constraint::Length(panel_height), Constraint::Min(0)]).split(area);

    if panel_height > 0 {
        if let Some(analysis) = &state.analysis {
            render_analysis(f, analysis, state.context_response.as_deref(), chunks[0]);
        }
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_unfocused())
        .style(Style::default().bg(theme::BG_CARD));

    if state.jokes.is_empty() {
        let hint = Paragraph::new(Span::styled(empty_hint(tab), theme::text_dim())).block(block);
        f.render_widget(hint, chunks[1]);
        return 0;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, joke) in state.jokes.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(joke_lines(joke));
    }

    if tab == TabKind::Search && state.has_more {
        lines.push(Line::from(""));
        let hint_style = if session.can_load_more() {
            theme::text_bold()
        } else {
            theme::text_dim()
        };
        lines.push(Line::from(Span::styled("── Ctrl+N: load more ──", hint_style)));
    }

    let padding = layout::CONTENT_PADDING_H;
    let inner = Rect {
        x: chunks[1].x + padding,
        width: chunks[1].width.saturating_sub(padding * 2),
        ..chunks[1]
    };
    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let max_scroll = wrapped_height(&lines, list_area.width)
        .saturating_sub(usize::from(list_area.height));
    let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);

    f.render_widget(block, chunks[1]);
    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));
    f.render_widget(list, list_area);
    max_scroll
}
