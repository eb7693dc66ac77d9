//! Backend quiz API.
//!
//! [`QuizApi`] is the boundary the runner talks to; [`HttpQuizApi`] is the
//! REST implementation used by the binary.

use std::future::Future;
use std::sync::Arc;

use quiz_core::{QuizResult, StartedQuiz, SubmittedAnswer};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// The four backend operations the quiz flow depends on.
pub trait QuizApi: Send + Sync {
    /// Start a quiz for a deck and receive its cards.
    fn start_quiz(&self, deck_id: &str) -> impl Future<Output = Result<StartedQuiz>> + Send;

    /// Submit answers for grading.
    fn submit_quiz(
        &self,
        quiz_id: &str,
        answers: &[SubmittedAnswer],
    ) -> impl Future<Output = Result<QuizResult>> + Send;

    /// All graded quizzes of the current user.
    fn quiz_history(&self) -> impl Future<Output = Result<Vec<QuizResult>>> + Send;

    /// A single graded quiz with its per-question review.
    fn quiz_detail(&self, quiz_id: &str) -> impl Future<Output = Result<QuizResult>> + Send;
}

// === API Request/Response Types ===

/// Response envelope used by every backend endpoint.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    fn into_data(self) -> Result<T> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "request was not successful".to_string());
            return Err(ClientError::Rejected(message));
        }
        self.data
            .ok_or_else(|| ClientError::Parse("response has no data".to_string()))
    }
}

/// Error body of a non-2xx response, when the backend sends one.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StartQuizRequest<'a> {
    deck_id: &'a str,
}

#[derive(Debug, Serialize)]
struct SubmitQuizRequest<'a> {
    answers: &'a [SubmittedAnswer],
}

struct HttpQuizApiInner {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

/// REST client for the quiz endpoints.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct HttpQuizApi {
    inner: Arc<HttpQuizApiInner>,
}

impl HttpQuizApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let base_url = Url::parse(&config.api_url)
            .map_err(|e| ClientError::Config(format!("invalid API URL {:?}: {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "invalid API URL {:?}: not a base URL",
                config.api_url
            )));
        }

        Ok(Self {
            inner: Arc::new(HttpQuizApiInner {
                client,
                base_url,
                token: config.token.clone(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str().trim_end_matches('/')
    }

    /// Endpoint URL below the base path. Each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.inner.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.ok();
            let message = error_message(status, body);
            tracing::warn!(status = status.as_u16(), %message, "backend returned an error");
            return Err(ClientError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        envelope.into_data().inspect_err(|e| {
            tracing::warn!(error = %e, "backend rejected request");
        })
    }
}

/// Message for a non-2xx response: the body's `message`, the raw body, or the
/// status reason when the body is empty or unreadable.
fn error_message(status: StatusCode, body: Option<String>) -> String {
    match body.filter(|b| !b.trim().is_empty()) {
        Some(body) => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body),
        None => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}

impl QuizApi for HttpQuizApi {
    async fn start_quiz(&self, deck_id: &str) -> Result<StartedQuiz> {
        let url = self.url(&["api", "quiz", "start"]);
        tracing::debug!(%url, deck_id, "starting quiz");

        let request = self
            .inner
            .client
            .post(url)
            .json(&StartQuizRequest { deck_id });
        self.send(request).await
    }

    async fn submit_quiz(&self, quiz_id: &str, answers: &[SubmittedAnswer]) -> Result<QuizResult> {
        let url = self.url(&["api", "quiz", quiz_id, "submit"]);
        tracing::debug!(%url, answers = answers.len(), "submitting quiz");

        let request = self
            .inner
            .client
            .post(url)
            .json(&SubmitQuizRequest { answers });
        self.send(request).await
    }

    async fn quiz_history(&self) -> Result<Vec<QuizResult>> {
        let url = self.url(&["api", "quiz", "history"]);
        tracing::debug!(%url, "fetching quiz history");

        let request = self.inner.client.get(url);
        self.send(request).await
    }

    async fn quiz_detail(&self, quiz_id: &str) -> Result<QuizResult> {
        let url = self.url(&["api", "quiz", quiz_id]);
        tracing::debug!(%url, "fetching quiz detail");

        let request = self.inner.client.get(url);
        self.send(request).await
    }
}
