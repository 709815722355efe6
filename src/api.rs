//! Wire types and request plumbing for the TLDR backend
//!
//! The backend is an opaque HTTP service with three operations: search,
//! summarize, chat. Requests are submitted from the UI thread, executed
//! off it, and their answers drained once per frame. Every failure is
//! surfaced to the page as one generic kind; there are no retries.

use serde::{Deserialize, Serialize};

/// Default backend base URL. Override with the `TLDR_API` env var
/// natively, or `window.__tldr_api_base` on the web.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// One article as returned by `/search`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Article {
    pub id: i64,
    pub headline: String,
    pub url: String,
}

impl Article {
    /// Host part of the article URL, shown as the source line on a card.
    pub fn source(&self) -> &str {
        let rest = self.url.split("://").nth(1).unwrap_or(&self.url);
        rest.split('/').next().unwrap_or("")
    }
}

/// `GET /search?query=...` response body.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Article>,
}

/// `GET /summarize/<id>` response body.
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub article_id: i64,
    pub summary: String,
}

/// `POST /chat` request body.
#[derive(Debug, Serialize)]
pub struct ChatBody {
    pub article_id: i64,
    pub question: String,
}

/// `POST /chat` response body. The backend echoes the question back;
/// only the answer is consumed.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// A request the page wants issued against the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiRequest {
    Search { query: String },
    Summarize { article_id: i64 },
    Chat { article_id: i64, question: String },
}

/// Answer (or failure) delivered back to the page.
#[derive(Debug)]
pub enum ApiEvent {
    SearchResults(Vec<Article>),
    Summary { article_id: i64, summary: String },
    ChatAnswer(String),
    Failed(ApiError),
}

/// Client-side failure. The page folds every variant into the same
/// static user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered {0}")]
    Status(reqwest::StatusCode),
}

/// Execute one request against the backend. Shared by the native and web
/// clients; `base` has no trailing slash.
pub(crate) async fn perform(
    client: &reqwest::Client,
    base: &str,
    request: ApiRequest,
) -> Result<ApiEvent, ApiError> {
    match request {
        ApiRequest::Search { query } => {
            let response = client
                .get(format!("{base}/search"))
                .query(&[("query", query.as_str())])
                .send()
                .await?;
            let body: SearchResponse = ok_json(response).await?;
            Ok(ApiEvent::SearchResults(body.results))
        }
        ApiRequest::Summarize { article_id } => {
            let response = client
                .get(format!("{base}/summarize/{article_id}"))
                .send()
                .await?;
            let body: SummaryResponse = ok_json(response).await?;
            Ok(ApiEvent::Summary {
                article_id: body.article_id,
                summary: body.summary,
            })
        }
        ApiRequest::Chat {
            article_id,
            question,
        } => {
            let response = client
                .post(format!("{base}/chat"))
                .json(&ChatBody {
                    article_id,
                    question,
                })
                .send()
                .await?;
            let body: ChatResponse = ok_json(response).await?;
            Ok(ApiEvent::ChatAnswer(body.answer))
        }
    }
}

/// Treat any non-2xx status as a failure, then decode the JSON body.
async fn ok_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_decodes() {
        let json = r#"{
            "results": [
                {"id": 3, "headline": "The Future of AI in Healthcare", "url": "https://techcrunch.com/ai-health"},
                {"id": 7, "headline": "Climate Change: What You Need to Know", "url": "https://nature.com/climate"}
            ]
        }"#;
        let body: SearchResponse = serde_json::from_str(json).expect("valid search body");
        assert_eq!(body.results.len(), 2);
        assert_eq!(body.results[0].id, 3);
        assert_eq!(body.results[0].headline, "The Future of AI in Healthcare");
        assert_eq!(body.results[1].source(), "nature.com");
    }

    #[test]
    fn summary_response_decodes() {
        let json = r#"{"article_id": 3, "summary": "A deep dive into diagnostics."}"#;
        let body: SummaryResponse = serde_json::from_str(json).expect("valid summary body");
        assert_eq!(body.article_id, 3);
        assert_eq!(body.summary, "A deep dive into diagnostics.");
    }

    #[test]
    fn chat_response_ignores_echoed_fields() {
        let json = r#"{"article_id": 3, "question": "why?", "answer": "Because."}"#;
        let body: ChatResponse = serde_json::from_str(json).expect("valid chat body");
        assert_eq!(body.answer, "Because.");
    }

    #[test]
    fn chat_body_encodes() {
        let body = ChatBody {
            article_id: 5,
            question: "What changed?".to_string(),
        };
        let json = serde_json::to_value(&body).expect("serializable");
        assert_eq!(json["article_id"], 5);
        assert_eq!(json["question"], "What changed?");
    }

    #[test]
    fn article_source_strips_scheme_and_path() {
        let article = Article {
            id: 1,
            headline: "x".into(),
            url: "https://www.forbes.com/crypto/2024".into(),
        };
        assert_eq!(article.source(), "www.forbes.com");

        let bare = Article {
            id: 2,
            headline: "y".into(),
            url: "nasa.gov".into(),
        };
        assert_eq!(bare.source(), "nasa.gov");
    }
}
