use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A joke in the client's internal shape.
///
/// A well-formed joke is either two-part (`setup` and `delivery`) or
/// single-line (`joke`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joke: Option<String>,
    pub is_safe: bool,
}

/// Borrowed view of how a joke should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeShape<'a> {
    TwoPart { setup: &'a str, delivery: &'a str },
    Single(&'a str),
}

impl Joke {
    pub fn single(category: impl Into<String>, text: impl Into<String>, is_safe: bool) -> Self {
        Self {
            category: category.into(),
            setup: None,
            delivery: None,
            joke: Some(text.into()),
            is_safe,
        }
    }

    pub fn two_part(
        category: impl Into<String>,
        setup: impl Into<String>,
        delivery: impl Into<String>,
        is_safe: bool,
    ) -> Self {
        Self {
            category: category.into(),
            setup: Some(setup.into()),
            delivery: Some(delivery.into()),
            joke: None,
            is_safe,
        }
    }

    /// Two-part when both halves are present and non-empty, otherwise the
    /// single text (empty if the service sent neither).
    pub fn shape(&self) -> JokeShape<'_> {
        match (self.setup.as_deref(), self.delivery.as_deref()) {
            (Some(setup), Some(delivery)) if !setup.is_empty() && !delivery.is_empty() => {
                JokeShape::TwoPart { setup, delivery }
            }
            _ => JokeShape::Single(self.joke.as_deref().unwrap_or_default()),
        }
    }
}

/// Joke as served by `GET /api/joke/{id}`, which proxies the upstream
/// joke API schema unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalJoke {
    #[serde(default)]
    pub error: bool,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub joke: Option<String>,
    #[serde(default)]
    pub flags: HashMap<String, bool>,
    pub id: u64,
    pub safe: bool,
    #[serde(default)]
    pub lang: String,
}

impl From<ExternalJoke> for Joke {
    fn from(external: ExternalJoke) -> Self {
        Self {
            category: external.category,
            setup: external.setup,
            delivery: external.delivery,
            joke: external.joke,
            is_safe: external.safe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_joke_normalization() {
        let external: ExternalJoke = serde_json::from_str(
            r#"{
                "error": false,
                "category": "Programming",
                "type": "single",
                "joke": "Why do programmers prefer dark mode?",
                "flags": {},
                "id": 1,
                "safe": true,
                "lang": "en"
            }"#,
        )
        .unwrap();

        let joke = Joke::from(external);
        assert_eq!(
            joke,
            Joke::single("Programming", "Why do programmers prefer dark mode?", true)
        );

        // Only the internal fields survive serialization
        let value = serde_json::to_value(&joke).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "category": "Programming",
                "joke": "Why do programmers prefer dark mode?",
                "is_safe": true
            })
        );
    }

    #[test]
    fn test_external_two_part_keeps_both_halves() {
        let external: ExternalJoke = serde_json::from_str(
            r#"{
                "error": false,
                "category": "Pun",
                "type": "twopart",
                "setup": "What do you call a fake noodle?",
                "delivery": "An impasta.",
                "flags": {"nsfw": false, "racist": false},
                "id": 42,
                "safe": false,
                "lang": "en"
            }"#,
        )
        .unwrap();
        assert_eq!(external.kind, "twopart");
        assert_eq!(external.flags.get("nsfw"), Some(&false));

        let joke: Joke = external.into();
        assert!(!joke.is_safe);
        assert_eq!(
            joke.shape(),
            JokeShape::TwoPart {
                setup: "What do you call a fake noodle?",
                delivery: "An impasta.",
            }
        );
    }

    #[test]
    fn test_shape_falls_back_to_single() {
        let mut joke = Joke::two_part("Misc", "Setup only", "", true);
        joke.delivery = None;
        joke.joke = Some("Fallback".to_string());
        assert_eq!(joke.shape(), JokeShape::Single("Fallback"));

        let empty = Joke {
            category: "Misc".to_string(),
            setup: None,
            delivery: None,
            joke: None,
            is_safe: true,
        };
        assert_eq!(empty.shape(), JokeShape::Single(""));
    }

    #[test]
    fn test_blank_half_uses_single_text() {
        let mut joke = Joke::two_part("Pun", "", "An impasta.", true);
        joke.joke = Some("Whole joke".to_string());
        assert_eq!(joke.shape(), JokeShape::Single("Whole joke"));

        joke.setup = Some("A fake noodle?".to_string());
        joke.delivery = Some(String::new());
        assert_eq!(joke.shape(), JokeShape::Single("Whole joke"));
    }
}
