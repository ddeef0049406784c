use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CoreConfig;
use crate::constants::{messages, paths};
use crate::models::{CategoriesResponse, ExternalJoke, Joke, PageResult};
use crate::session::{FetchOutcome, FetchRequest};

/// Why a request to the joke service did not produce a usable body
#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Errors surfaced to the user. Each remote operation collapses every
/// failure into one generic message; the cause is kept as the source.
#[derive(Debug, thiserror::Error)]
pub enum JokeError {
    #[error("{}", messages::FETCH_JOKE_FAILED)]
    AskFailed(#[source] RequestFailure),

    #[error("{}", messages::SEARCH_FAILED)]
    SearchFailed(#[source] RequestFailure),

    #[error("{}", messages::FETCH_JOKE_FAILED)]
    FetchFailed(#[source] RequestFailure),

    #[error("{}", messages::CATEGORIES_FAILED)]
    CategoriesFailed(#[source] RequestFailure),

    #[error("{}", messages::INVALID_ID)]
    InvalidId,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Serialize)]
struct AskBody<'a> {
    request: &'a str,
}

/// HTTP client for the joke service
#[derive(Debug, Clone)]
pub struct JokeClient {
    base_url: String,
    client: reqwest::Client,
}

impl JokeClient {
    pub fn new(config: &CoreConfig) -> Result<Self, JokeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(JokeError::Client)?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a free-text request for `amount` jokes
    pub async fn ask(&self, request: &str, amount: u32) -> Result<PageResult, JokeError> {
        tracing::debug!(amount, "ask");
        let builder = self
            .client
            .post(self.url(paths::ASK))
            .query(&[("amount", amount)])
            .json(&AskBody { request });

        fetch_json(builder).await.map_err(JokeError::AskFailed)
    }

    /// Keyword search. `category` is passed through as-is, including "Any".
    pub async fn search(
        &self,
        query: &str,
        category: &str,
        page: u32,
        amount: u32,
    ) -> Result<PageResult, JokeError> {
        tracing::debug!(query, category, page, amount, "search");
        let page = page.to_string();
        let amount = amount.to_string();
        let builder = self.client.get(self.url(paths::SEARCH)).query(&[
            ("query", query),
            ("category", category),
            ("page", page.as_str()),
            ("amount", amount.as_str()),
        ]);

        fetch_json(builder).await.map_err(JokeError::SearchFailed)
    }

    /// Fetch one joke and normalize it from the upstream schema
    pub async fn get_by_id(&self, id: u64) -> Result<Joke, JokeError> {
        tracing::debug!(id, "get joke by id");
        let builder = self.client.get(self.url(&format!("{}/{}", paths::JOKE, id)));

        let external: ExternalJoke = fetch_json(builder).await.map_err(JokeError::FetchFailed)?;
        Ok(external.into())
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, JokeError> {
        tracing::debug!("list categories");
        let builder = self.client.get(self.url(paths::CATEGORIES));

        let response: CategoriesResponse = fetch_json(builder)
            .await
            .map_err(JokeError::CategoriesFailed)?;
        Ok(response.categories)
    }

    /// Run a request produced by the session and package the result so it
    /// can be merged back with `Session::apply`.
    pub async fn execute(&self, request: FetchRequest) -> FetchOutcome {
        let result = match &request {
            FetchRequest::Categories => {
                return FetchOutcome::Categories(self.list_categories().await);
            }
            FetchRequest::Ask {
                request_text,
                amount,
            } => self.ask(request_text, *amount).await,
            FetchRequest::Search {
                query,
                category,
                page,
                amount,
            } => self.search(query, category, *page, *amount).await,
            FetchRequest::ById { id } => self.get_by_id(*id).await.map(PageResult::single),
        };
        FetchOutcome::Jokes { request, result }
    }
}

async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, RequestFailure> {
    let response = builder.send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%status, url = %response.url(), "joke service returned an error");
        return Err(RequestFailure::Status(status));
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, TabKind};
    use axum::{
        extract::{Path, Query},
        http::StatusCode as AxumStatus,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Serve `app` on an ephemeral port and return a client pointed at it
    async fn spawn_server(app: Router) -> JokeClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        JokeClient::new(&CoreConfig::new(format!("http://{}", addr))).unwrap()
    }

    fn echo_page(params: &HashMap<String, String>) -> Value {
        json!({
            "jokes": [{
                "category": params.get("category").cloned().unwrap_or_default(),
                "joke": params.get("query").cloned().unwrap_or_default(),
                "is_safe": true
            }],
            "total": 1,
            "page": params.get("page").and_then(|p| p.parse::<u32>().ok()).unwrap_or(1),
            "has_more": false
        })
    }

    #[tokio::test]
    async fn test_ask_posts_request_with_amount() {
        let app = Router::new().route(
            "/api/ask",
            post(
                |Query(params): Query<HashMap<String, String>>, Json(body): Json<Value>| async move {
                    Json(json!({
                        "jokes": [{
                            "category": "Programming",
                            "setup": body["request"],
                            "delivery": params["amount"],
                            "is_safe": true
                        }],
                        "total": 1,
                        "page": 1,
                        "has_more": false,
                        "ai_analysis": {
                            "category": "Programming",
                            "keywords": ["programming"],
                            "reasoning": "explicit topic",
                            "user_mood": "curious",
                            "suggested_amount": 1
                        }
                    }))
                },
            ),
        );
        let client = spawn_server(app).await;

        let page = client.ask("Tell me a programming joke", 3).await.unwrap();
        assert_eq!(page.jokes.len(), 1);
        assert_eq!(
            page.jokes[0].setup.as_deref(),
            Some("Tell me a programming joke")
        );
        assert_eq!(page.jokes[0].delivery.as_deref(), Some("3"));
        assert_eq!(page.ai_analysis.unwrap().user_mood, "curious");
    }

    #[tokio::test]
    async fn test_ask_failure_is_generic() {
        let app = Router::new().route(
            "/api/ask",
            post(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = spawn_server(app).await;

        let err = client.ask("Tell me a joke", 1).await.unwrap_err();
        assert!(matches!(
            err,
            JokeError::AskFailed(RequestFailure::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
        assert_eq!(err.to_string(), "Failed to fetch joke");
    }

    #[tokio::test]
    async fn test_search_sends_all_query_parameters() {
        let app = Router::new().route(
            "/api/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("amount").map(String::as_str), Some("5"));
                Json(echo_page(&params))
            }),
        );
        let client = spawn_server(app).await;

        let page = client
            .search("programming", "Programming", 1, 5)
            .await
            .unwrap();
        assert_eq!(page.jokes.len(), 1);
        assert_eq!(page.jokes[0].category, "Programming");
        assert_eq!(page.jokes[0].joke.as_deref(), Some("programming"));
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_search_encodes_values_and_passes_any_through() {
        let app = Router::new().route(
            "/api/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(echo_page(&params))
            }),
        );
        let client = spawn_server(app).await;

        let page = client.search("cats & dogs", "Any", 2, 5).await.unwrap();
        assert_eq!(page.jokes[0].joke.as_deref(), Some("cats & dogs"));
        assert_eq!(page.jokes[0].category, "Any");
        assert_eq!(page.page, 2);
    }

    #[tokio::test]
    async fn test_get_by_id_normalizes_external_schema() {
        let app = Router::new().route(
            "/api/joke/:id",
            get(|Path(id): Path<u64>| async move {
                Json(json!({
                    "error": false,
                    "category": "Programming",
                    "type": "single",
                    "joke": "Why do programmers prefer dark mode?",
                    "flags": {},
                    "id": id,
                    "safe": true,
                    "lang": "en"
                }))
            }),
        );
        let client = spawn_server(app).await;

        let joke = client.get_by_id(1).await.unwrap();
        assert_eq!(
            joke,
            Joke::single("Programming", "Why do programmers prefer dark mode?", true)
        );
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let app = Router::new().route(
            "/api/joke/:id",
            get(|| async { (AxumStatus::NOT_FOUND, "Joke not found") }),
        );
        let client = spawn_server(app).await;

        let err = client.get_by_id(99999).await.unwrap_err();
        assert!(matches!(err, JokeError::FetchFailed(_)));
        assert_eq!(err.to_string(), "Failed to fetch joke");
    }

    #[tokio::test]
    async fn test_list_categories() {
        let app = Router::new().route(
            "/api/categories",
            get(|| async { Json(json!({"categories": ["Programming", "Misc", "Dark"]})) }),
        );
        let client = spawn_server(app).await;

        let categories = client.list_categories().await.unwrap();
        assert_eq!(categories, vec!["Programming", "Misc", "Dark"]);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_categories_failure() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = JokeClient::new(&CoreConfig::new(format!("http://{}", addr))).unwrap();
        let err = client.list_categories().await.unwrap_err();
        assert!(matches!(
            err,
            JokeError::CategoriesFailed(RequestFailure::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_execute_round_trip_through_session() {
        let app = Router::new().route(
            "/api/joke/:id",
            get(|| async {
                Json(json!({
                    "error": false,
                    "category": "Pun",
                    "type": "twopart",
                    "setup": "What do you call a fake noodle?",
                    "delivery": "An impasta.",
                    "flags": {},
                    "id": 7,
                    "safe": true,
                    "lang": "en"
                }))
            }),
        );
        let client = spawn_server(app).await;

        let mut session = Session::new(&CoreConfig::default());
        session.switch_tab(TabKind::Id);
        session.input_mut(TabKind::Id).push_str("7");
        let request = session.submit().unwrap();
        assert!(session.is_loading());

        let outcome = client.execute(request).await;
        session.apply(outcome);

        assert!(!session.is_loading());
        let tab = session.tab(TabKind::Id);
        assert_eq!(tab.jokes.len(), 1);
        assert_eq!(tab.jokes[0].category, "Pun");
        assert!(!tab.has_more);
    }
}
