use serde::{Deserialize, Serialize};

use super::{Analysis, Joke};

/// One batch of jokes returned by ask or search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub jokes: Vec<Joke>,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_response: Option<String>,
}

impl PageResult {
    /// Wrap a lone joke (get-by-id) as a complete, final page
    pub fn single(joke: Joke) -> Self {
        Self {
            jokes: vec![joke],
            total: 1,
            page: 1,
            has_more: false,
            ai_analysis: None,
            context_response: None,
        }
    }
}

fn first_page() -> u32 {
    1
}

/// Body of `GET /api/categories`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<String>,
}
