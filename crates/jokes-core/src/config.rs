use std::time::Duration;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_ASK_AMOUNT, DEFAULT_SEARCH_AMOUNT};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base address of the joke service, without a trailing slash
    pub api_base_url: String,
    /// Number of jokes requested per ask
    pub ask_amount: u32,
    /// Page size for search and load-more
    pub search_amount: u32,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl CoreConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut base: String = api_base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            api_base_url: base,
            ..Self::default()
        }
    }

    pub fn with_amounts(mut self, ask_amount: u32, search_amount: u32) -> Self {
        self.ask_amount = ask_amount.max(1);
        self.search_amount = search_amount.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ask_amount: DEFAULT_ASK_AMOUNT,
            search_amount: DEFAULT_SEARCH_AMOUNT,
            request_timeout: None,
        }
    }
}
