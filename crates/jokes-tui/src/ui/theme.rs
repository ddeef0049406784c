// Centralized theme for the joke browser.
// All colors and styles live here so views never hardcode a color.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Joke card background
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Active tab background
pub const BG_TAB_ACTIVE: Color = Color::Rgb(28, 28, 32);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Interactive elements, focus
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);
/// AI analysis panel
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLES
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .bg(BG_TAB_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn border_focused() -> Style {
    Style::default().fg(BORDER_ACTIVE)
}

pub fn border_unfocused() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn category_label() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

/// Punchline of a two-part joke
pub fn delivery() -> Style {
    Style::default()
        .fg(ACCENT_SUCCESS)
        .add_modifier(Modifier::ITALIC)
}

pub fn unsafe_badge() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

pub fn error_banner() -> Style {
    Style::default()
        .fg(ACCENT_ERROR)
        .add_modifier(Modifier::BOLD)
}

pub fn analysis_heading() -> Style {
    Style::default()
        .fg(ACCENT_SPECIAL)
        .add_modifier(Modifier::BOLD)
}

pub fn keyword_tag() -> Style {
    Style::default().fg(BG_APP).bg(ACCENT_SPECIAL)
}
