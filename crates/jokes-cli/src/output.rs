use jokes_core::{JokeShape, PageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    PrettyJson,
}

impl OutputFormat {
    pub fn from_flags(json: bool, pretty: bool) -> Self {
        match (json, pretty) {
            (_, true) => OutputFormat::PrettyJson,
            (true, false) => OutputFormat::Json,
            (false, false) => OutputFormat::Text,
        }
    }

    fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> serde_json::Result<String> {
        if self == OutputFormat::PrettyJson {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }

    pub fn page(self, page: &PageResult) -> serde_json::Result<String> {
        if self != OutputFormat::Text {
            return self.json(page);
        }
        Ok(page_text(page))
    }

    pub fn categories(self, categories: &[String]) -> serde_json::Result<String> {
        if self != OutputFormat::Text {
            return self.json(categories);
        }
        Ok(categories.join("\n"))
    }
}

fn page_text(page: &PageResult) -> String {
    let mut blocks = Vec::new();

    if let Some(analysis) = &page.ai_analysis {
        let mut lines = Vec::new();
        if let Some(context) = &page.context_response {
            lines.push(context.clone());
        }
        lines.push(format!(
            "AI Analysis: {} (mood: {})",
            analysis.category, analysis.user_mood
        ));
        if analysis.has_keywords() {
            lines.push(format!("Keywords: {}", analysis.keywords.join(", ")));
        }
        lines.push(format!("Reasoning: {}", analysis.reasoning));
        lines.push(format!("Suggested Amount: {} jokes", analysis.suggested_amount));
        blocks.push(lines.join("\n"));
    }

    if page.jokes.is_empty() {
        blocks.push("No jokes found.".to_string());
    }

    for joke in &page.jokes {
        let body = match joke.shape() {
            JokeShape::TwoPart { setup, delivery } => format!("{}\n  {}", setup, delivery),
            JokeShape::Single(text) => text.to_string(),
        };
        let safety = if joke.is_safe { "" } else { " [not safe]" };
        blocks.push(format!("[{}]{}\n{}", joke.category, safety, body));
    }

    if page.has_more {
        blocks.push(format!("(more results: try --page {})", page.page.saturating_add(1)));
    }

    blocks.join("\n\n")
}
