use jokes_core::{Analysis, TabState};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{layout, theme};

/// Lines for the AI analysis panel
pub fn analysis_lines(analysis: &Analysis, context_response: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(context) = context_response {
        lines.push(Line::from(Span::styled(context.to_string(), theme::text_primary())));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Category: ", theme::text_muted()),
        Span::styled(analysis.category.clone(), theme::category_label()),
        Span::styled("   User Mood: ", theme::text_muted()),
        Span::styled(analysis.user_mood.clone(), theme::text_primary()),
    ]));

    if analysis.has_keywords() {
        let mut spans = vec![Span::styled("Keywords: ", theme::text_muted())];
        for keyword in &analysis.keywords {
            spans.push(Span::styled(format!(" {} ", keyword), theme::keyword_tag()));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled("AI Reasoning: ", theme::text_muted()),
        Span::styled(analysis.reasoning.clone(), theme::text_primary()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Suggested Amount: ", theme::text_muted()),
        Span::styled(
            format!("{} jokes", analysis.suggested_amount),
            theme::text_primary(),
        ),
    ]));

    lines
}

/// Rows the panel needs for `state`, 0 when there is no analysis.
/// Approximates wrapping by line width; capped so jokes stay visible.
pub(crate) fn analysis_height(state: &TabState, width: u16) -> u16 {
    let Some(analysis) = &state.analysis else {
        return 0;
    };
    let usable = width.saturating_sub(2).max(1) as usize;
    let rows: usize = analysis_lines(analysis, state.context_response.as_deref())
        .iter()
        .map(|line| line.width().max(1).div_ceil(usable))
        .sum();
    // Borders
    ((rows + 2) as u16).min(layout::ANALYSIS_MAX_HEIGHT)
}

pub fn render_analysis(
    f: &mut Frame,
    analysis: &Analysis,
    context_response: Option<&str>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_unfocused())
        .title(Span::styled(" AI Analysis ", theme::analysis_heading()))
        .title_bottom(Span::styled(" Powered by LLM ", theme::text_dim()));

    let panel = Paragraph::new(analysis_lines(analysis, context_response))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(keywords: Vec<&str>) -> Analysis {
        Analysis {
            category: "Programming".to_string(),
            keywords: keywords.into_iter().map(String::from).collect(),
            reasoning: "Mentions bugs".to_string(),
            user_mood: "frustrated".to_string(),
            suggested_amount: 2,
        }
    }

    #[test]
    fn test_keywords_line_omitted_when_empty() {
        let with = analysis_lines(&analysis(vec!["bugs"]), None);
        let without = analysis_lines(&analysis(vec![]), None);
        assert_eq!(with.len(), without.len() + 1);
        assert!(with.iter().any(|l| l.to_string().contains(" bugs ")));
    }

    #[test]
    fn test_context_response_comes_first() {
        let lines = analysis_lines(&analysis(vec![]), Some("Rough day? Here's one."));
        assert_eq!(lines[0].to_string(), "Rough day? Here's one.");
        assert_eq!(lines.last().unwrap().to_string(), "Suggested Amount: 2 jokes");
    }

    #[test]
    fn test_height_zero_without_analysis() {
        assert_eq!(analysis_height(&TabState::default(), 80), 0);

        let state = TabState {
            analysis: Some(analysis(vec!["bugs"])),
            ..TabState::default()
        };
        let height = analysis_height(&state, 80);
        assert!(height > 2 && height <= layout::ANALYSIS_MAX_HEIGHT);
    }
}
