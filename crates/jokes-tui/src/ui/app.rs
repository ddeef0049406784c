use jokes_core::{FetchOutcome, FetchRequest, Session, TabKind};

use crate::ui::layout;
use crate::ui::services::AnimationClock;

/// Top-level UI state. Request/result bookkeeping lives in the injected
/// `Session`; this struct only adds what the terminal needs on top of it.
pub struct App {
    pub session: Session,
    pub running: bool,
    /// First Ctrl+C seen; a second one quits
    pub pending_quit: bool,
    /// Vertical scroll of the results list
    pub scroll_offset: u16,
    /// Largest offset that still shows content; updated on every render
    max_scroll_offset: u16,
    /// Transient one-line message for the status bar
    status: Option<String>,
    api_base_url: String,
    animation_clock: AnimationClock,
}

impl App {
    pub fn new(session: Session, api_base_url: impl Into<String>) -> Self {
        Self {
            session,
            running: true,
            pending_quit: false,
            scroll_offset: 0,
            max_scroll_offset: 0,
            status: None,
            api_base_url: api_base_url.into(),
            animation_clock: AnimationClock::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        self.animation_clock.tick();
    }

    pub fn spinner_char(&self) -> char {
        self.animation_clock.spinner_char()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // =============================================================================
    // SESSION ACTIONS
    // =============================================================================

    pub fn switch_tab(&mut self, tab: TabKind) {
        if self.session.active_tab() != tab {
            self.scroll_offset = 0;
        }
        self.session.switch_tab(tab);
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.session.active_tab().next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.session.active_tab().prev());
    }

    pub fn enter_char(&mut self, c: char) {
        let tab = self.session.active_tab();
        self.session.input_mut(tab).push(c);
    }

    pub fn delete_char(&mut self) {
        let tab = self.session.active_tab();
        self.session.input_mut(tab).pop();
    }

    pub fn clear_input(&mut self) {
        let tab = self.session.active_tab();
        self.session.input_mut(tab).clear();
    }

    /// Paste into the active input; line breaks become spaces
    pub fn paste(&mut self, text: &str) {
        for c in text.chars() {
            self.enter_char(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    pub fn submit(&mut self) -> Option<FetchRequest> {
        let request = self.session.submit();
        if request.is_some() {
            self.clear_status();
        }
        request
    }

    pub fn load_more(&mut self) -> Option<FetchRequest> {
        let request = self.session.load_more();
        if request.is_none() && !self.session.is_loading() {
            self.set_status("Nothing more to load");
        }
        request
    }

    pub fn clear_active_tab(&mut self) {
        let tab = self.session.active_tab();
        if self.session.clear(tab) {
            self.scroll_offset = 0;
            self.set_status(format!("Cleared {}", tab.label()));
        } else {
            self.set_status("Wait for the current request to finish");
        }
    }

    /// Merge a finished fetch and describe it in the status bar
    pub fn apply(&mut self, outcome: FetchOutcome) {
        if let FetchOutcome::Jokes { request, result } = &outcome {
            match result {
                Ok(page) if request.page() <= 1 => {
                    self.scroll_offset = 0;
                    self.set_status(format!("Loaded {} joke(s)", page.jokes.len()));
                }
                Ok(page) => {
                    self.set_status(format!("Loaded {} more joke(s)", page.jokes.len()));
                }
                Err(_) => self.clear_status(),
            }
        }
        self.session.apply(outcome);
    }

    /// Record the result list's scroll limit from the last render
    pub fn set_max_scroll(&mut self, max: u16) {
        self.max_scroll_offset = max;
        self.scroll_offset = self.scroll_offset.min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(layout::SCROLL_PAGE);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(layout::SCROLL_PAGE)
            .min(self.max_scroll_offset);
    }
}
