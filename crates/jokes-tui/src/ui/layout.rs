// Layout constants shared by the views

/// Horizontal padding for main content areas
pub const CONTENT_PADDING_H: u16 = 2;

/// Title line at the top
pub const HEADER_HEIGHT: u16 = 1;

/// Tab bar (labels + underline)
pub const TAB_BAR_HEIGHT: u16 = 2;

/// Bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;

/// Category selector row on the search tab
pub const CATEGORY_ROW_HEIGHT: u16 = 1;

/// Error banner when an error is shown
pub const ERROR_BANNER_HEIGHT: u16 = 1;

/// Key hints
pub const FOOTER_HEIGHT: u16 = 1;

/// Status line at the very bottom
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Analysis panel height cap on the ask tab
pub const ANALYSIS_MAX_HEIGHT: u16 = 12;

/// Lines moved per PageUp/PageDown
pub const SCROLL_PAGE: u16 = 5;
