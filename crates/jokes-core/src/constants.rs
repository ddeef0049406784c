//! Application-wide constants
//!
//! Endpoint paths, defaults and the user-facing failure messages shared by
//! the transport and the front-ends.

/// Default joke service address
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Jokes requested per ask unless configured otherwise
pub const DEFAULT_ASK_AMOUNT: u32 = 1;

/// Search page size unless configured otherwise
pub const DEFAULT_SEARCH_AMOUNT: u32 = 5;

/// Category sentinel meaning "no filter"
pub const ANY_CATEGORY: &str = "Any";

pub mod paths {
    pub const ASK: &str = "/api/ask";
    pub const SEARCH: &str = "/api/search";
    pub const JOKE: &str = "/api/joke";
    pub const CATEGORIES: &str = "/api/categories";
}

pub mod messages {
    pub const FETCH_JOKE_FAILED: &str = "Failed to fetch joke";
    pub const SEARCH_FAILED: &str = "Failed to search joke";
    pub const CATEGORIES_FAILED: &str = "Failed to fetch categories";
    pub const INVALID_ID: &str = "Joke ID must be a number";
}
