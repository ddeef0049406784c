use serde::{Deserialize, Serialize};

/// Interpretation of a free-text ask request, produced by the joke service.
/// The content is opaque to the client; it is only displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub reasoning: String,
    pub user_mood: String,
    pub suggested_amount: u32,
}

impl Analysis {
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }
}
