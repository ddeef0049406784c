//! Session state for the three request modes.
//!
//! `Session` is a self-contained state machine: user actions produce a
//! `FetchRequest` (or nothing, when blocked), the caller runs it through
//! `JokeClient::execute`, and the resulting `FetchOutcome` is merged back
//! with `apply`. It never performs I/O itself.

use crate::client::JokeError;
use crate::config::CoreConfig;
use crate::constants::ANY_CATEGORY;
use crate::models::{Analysis, Joke, PageResult};

/// One of the three independent request modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabKind {
    #[default]
    Ask,
    Search,
    Id,
}

impl TabKind {
    pub const ALL: [TabKind; 3] = [TabKind::Ask, TabKind::Search, TabKind::Id];

    pub fn index(self) -> usize {
        match self {
            TabKind::Ask => 0,
            TabKind::Search => 1,
            TabKind::Id => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TabKind::Ask => "Ask for a Joke",
            TabKind::Search => "Search Jokes",
            TabKind::Id => "Get by ID",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Results shown in one tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabState {
    /// Jokes accumulated across load-more
    pub jokes: Vec<Joke>,
    pub has_more: bool,
    /// Last page merged into `jokes`; 0 before any fetch
    pub current_page: u32,
    pub analysis: Option<Analysis>,
    pub context_response: Option<String>,
}

impl TabState {
    /// Merge a page fetched as `page`. Page 1 replaces everything; later
    /// pages append and keep the analysis from the first fetch.
    fn merge(&mut self, page: u32, result: PageResult) {
        if page <= 1 {
            self.jokes = result.jokes;
            self.analysis = result.ai_analysis;
            self.context_response = result.context_response;
            self.current_page = 1;
        } else {
            self.jokes.extend(result.jokes);
            self.current_page = page;
        }
        self.has_more = result.has_more;
    }

    fn fail(&mut self) {
        self.jokes.clear();
        self.has_more = false;
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty() && self.analysis.is_none() && self.context_response.is_none()
    }
}

/// A transport call the session wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Ask {
        request_text: String,
        amount: u32,
    },
    Search {
        query: String,
        category: String,
        page: u32,
        amount: u32,
    },
    ById {
        id: u64,
    },
    Categories,
}

impl FetchRequest {
    /// Tab whose results this request feeds
    pub fn tab(&self) -> Option<TabKind> {
        match self {
            FetchRequest::Ask { .. } => Some(TabKind::Ask),
            FetchRequest::Search { .. } => Some(TabKind::Search),
            FetchRequest::ById { .. } => Some(TabKind::Id),
            FetchRequest::Categories => None,
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            FetchRequest::Search { page, .. } => *page,
            _ => 1,
        }
    }
}

/// Result of a `FetchRequest`, ready to merge with `Session::apply`
#[derive(Debug)]
pub enum FetchOutcome {
    Jokes {
        request: FetchRequest,
        result: Result<PageResult, JokeError>,
    },
    Categories(Result<Vec<String>, JokeError>),
}

/// Query and category a search was submitted with; load-more pages
/// continue with these even if the inputs were edited since.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchKey {
    query: String,
    category: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    ask_amount: u32,
    search_amount: u32,
    active: TabKind,
    tabs: [TabState; 3],
    inputs: [String; 3],
    categories: Vec<String>,
    selected_category: usize,
    /// One flag for all tabs: at most one user request in flight
    loading: bool,
    error: Option<String>,
    last_search: Option<SearchKey>,
}

impl Session {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            ask_amount: config.ask_amount,
            search_amount: config.search_amount,
            active: TabKind::default(),
            tabs: Default::default(),
            inputs: Default::default(),
            categories: vec![ANY_CATEGORY.to_string()],
            selected_category: 0,
            loading: false,
            error: None,
            last_search: None,
        }
    }

    pub fn active_tab(&self) -> TabKind {
        self.active
    }

    /// Show another tab. Clears the visible error; never fetches.
    pub fn switch_tab(&mut self, tab: TabKind) {
        self.active = tab;
        self.error = None;
    }

    pub fn tab(&self, tab: TabKind) -> &TabState {
        &self.tabs[tab.index()]
    }

    pub fn active_state(&self) -> &TabState {
        self.tab(self.active)
    }

    pub fn input(&self, tab: TabKind) -> &str {
        &self.inputs[tab.index()]
    }

    pub fn input_mut(&mut self, tab: TabKind) -> &mut String {
        &mut self.inputs[tab.index()]
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Startup request for the category list. Does not touch the loading flag.
    pub fn categories_request(&self) -> FetchRequest {
        FetchRequest::Categories
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_category(&self) -> &str {
        self.categories
            .get(self.selected_category)
            .map(String::as_str)
            .unwrap_or(ANY_CATEGORY)
    }

    /// Replace the category list, keeping "Any" first and the current
    /// selection when it still exists.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        let selected = self.selected_category().to_string();

        let mut list = Vec::with_capacity(categories.len() + 1);
        list.push(ANY_CATEGORY.to_string());
        for category in categories {
            if !list.contains(&category) {
                list.push(category);
            }
        }

        self.selected_category = list.iter().position(|c| *c == selected).unwrap_or(0);
        self.categories = list;
    }

    pub fn select_next_category(&mut self) {
        self.selected_category = (self.selected_category + 1) % self.categories.len();
    }

    pub fn select_prev_category(&mut self) {
        let len = self.categories.len();
        self.selected_category = (self.selected_category + len - 1) % len;
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Submit the active tab's form as a fresh page-1 fetch.
    ///
    /// Returns `None` while another request is in flight, when the id field
    /// is empty, or when the id is not a number (which sets the error).
    pub fn submit(&mut self) -> Option<FetchRequest> {
        if self.loading {
            return None;
        }

        let request = match self.active {
            TabKind::Ask => FetchRequest::Ask {
                request_text: self.input(TabKind::Ask).to_string(),
                amount: self.ask_amount,
            },
            TabKind::Search => FetchRequest::Search {
                query: self.input(TabKind::Search).to_string(),
                category: self.selected_category().to_string(),
                page: 1,
                amount: self.search_amount,
            },
            TabKind::Id => {
                let raw = self.input(TabKind::Id).trim();
                if raw.is_empty() {
                    return None;
                }
                match raw.parse::<u64>() {
                    Ok(id) => FetchRequest::ById { id },
                    Err(_) => {
                        self.error = Some(JokeError::InvalidId.to_string());
                        return None;
                    }
                }
            }
        };

        self.begin();
        Some(request)
    }

    /// Whether load-more is currently available on the active tab
    pub fn can_load_more(&self) -> bool {
        self.active == TabKind::Search
            && !self.loading
            && self.tab(TabKind::Search).has_more
            && self.last_search.is_some()
    }

    /// Request the next search page. No-op unless `can_load_more`.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() {
            return None;
        }
        let key = self.last_search.clone()?;

        let request = FetchRequest::Search {
            query: key.query,
            category: key.category,
            page: self.tab(TabKind::Search).current_page + 1,
            amount: self.search_amount,
        };
        self.begin();
        Some(request)
    }

    /// Reset one tab's results and input. Other tabs are untouched.
    /// Returns false (and does nothing) while a request is in flight.
    pub fn clear(&mut self, tab: TabKind) -> bool {
        if self.loading {
            return false;
        }
        self.tabs[tab.index()] = TabState::default();
        self.inputs[tab.index()].clear();
        if tab == TabKind::Search {
            self.last_search = None;
        }
        true
    }

    /// Merge a finished request into the tab it was issued for
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Categories(Ok(categories)) => {
                tracing::debug!(count = categories.len(), "categories loaded");
                self.set_categories(categories);
            }
            FetchOutcome::Categories(Err(e)) => {
                tracing::warn!(error = ?e, "failed to load categories");
                self.error = Some(e.to_string());
            }
            FetchOutcome::Jokes { request, result } => {
                self.loading = false;
                let Some(tab) = request.tab() else {
                    return;
                };
                let page = request.page();

                match result {
                    Ok(result) => {
                        tracing::debug!(?tab, page, count = result.jokes.len(), "jokes loaded");
                        if let FetchRequest::Search {
                            query, category, ..
                        } = request
                        {
                            if page <= 1 {
                                self.last_search = Some(SearchKey { query, category });
                            }
                        }
                        self.tabs[tab.index()].merge(page, result);
                    }
                    Err(e) => {
                        tracing::warn!(?tab, page, error = ?e, "request failed");
                        self.tabs[tab.index()].fail();
                        self.error = Some(e.to_string());
                    }
                }
            }
        }
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&CoreConfig::default())
    }
}
