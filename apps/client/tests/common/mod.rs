//! Common test utilities for client integration tests.
//!
//! Provides an in-process mock of the quiz backend served by axum on an
//! ephemeral port, plus helpers to point clients at it.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use flashquiz_client::api::HttpQuizApi;
use flashquiz_client::config::ClientConfig;
use quiz_core::{finalize, Card, QuestionReview, QuizResult, SubmittedAnswer};

pub const TEST_TOKEN: &str = "test-token";

#[derive(Default)]
struct MockState {
    decks: HashMap<String, (String, Vec<Card>)>,
    quizzes: Mutex<HashMap<String, (String, Vec<Card>)>>,
    results: Mutex<Vec<QuizResult>>,
    submissions: Mutex<Vec<Vec<SubmittedAnswer>>>,
}

/// Mock backend running in the background for the duration of a test.
pub struct TestBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl TestBackend {
    /// Start a backend serving the fixture decks.
    pub async fn spawn() -> Self {
        let mut decks = HashMap::new();
        decks.insert(
            fixtures::CAPITALS_DECK.to_string(),
            ("Capitals".to_string(), fixtures::capital_cards()),
        );
        decks.insert(
            fixtures::EMPTY_DECK.to_string(),
            ("Empty".to_string(), Vec::new()),
        );

        let state = Arc::new(MockState {
            decks,
            ..Default::default()
        });

        let app = Router::new()
            .route("/api/quiz/start", post(start_quiz))
            .route("/api/quiz/history", get(history))
            .route("/api/quiz/:quiz_id", get(detail))
            .route("/api/quiz/:quiz_id/submit", post(submit))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url).with_token(TEST_TOKEN)
    }

    pub fn api(&self) -> HttpQuizApi {
        HttpQuizApi::new(&self.config()).expect("Failed to build client")
    }

    /// Answer lists received so far, one per submit call.
    pub fn submissions(&self) -> Vec<Vec<SubmittedAnswer>> {
        self.state.submissions.lock().unwrap().clone()
    }

    /// Seed a graded result directly into history.
    pub fn insert_result(&self, result: QuizResult) {
        self.state.results.lock().unwrap().push(result);
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "unauthorized", "message": "Missing or invalid token" })),
    )
        .into_response()
}

fn ok(data: impl serde::Serialize) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

fn rejected(message: &str) -> Response {
    Json(json!({ "success": false, "message": message })).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartBody {
    deck_id: String,
}

#[derive(Deserialize)]
struct SubmitBody {
    answers: Vec<SubmittedAnswer>,
}

async fn start_quiz(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<StartBody>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let Some((_, cards)) = state.decks.get(&body.deck_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "not_found", "message": "Deck not found" })),
        )
            .into_response();
    };

    let quiz_id = Uuid::new_v4().to_string();
    state
        .quizzes
        .lock()
        .unwrap()
        .insert(quiz_id.clone(), (body.deck_id.clone(), cards.clone()));

    ok(json!({ "quizId": quiz_id, "cards": cards }))
}

async fn submit(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(quiz_id): Path<String>,
    Json(body): Json<SubmitBody>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let Some((deck_id, cards)) = state.quizzes.lock().unwrap().get(&quiz_id).cloned() else {
        return rejected("Quiz not found");
    };
    let deck_name = state
        .decks
        .get(&deck_id)
        .map(|(name, _)| name.clone())
        .unwrap_or_default();

    let details: Vec<QuestionReview> = cards
        .iter()
        .map(|card| {
            let user_answer = body
                .answers
                .iter()
                .find(|a| a.card_id == card.id)
                .map(|a| a.answer.clone())
                .unwrap_or_default();
            QuestionReview {
                question: card.front.clone(),
                is_correct: user_answer == card.back,
                user_answer,
                correct_answer: card.back.clone(),
                explanation: None,
            }
        })
        .collect();
    let correct = details.iter().filter(|d| d.is_correct).count();

    let result = QuizResult {
        id: quiz_id,
        deck_id,
        deck_name,
        score: finalize(correct, cards.len()).percentage,
        total_questions: cards.len(),
        correct_answers: correct,
        played_at: Utc::now(),
        details,
    };

    state.submissions.lock().unwrap().push(body.answers);
    state.results.lock().unwrap().push(result.clone());
    ok(result)
}

async fn history(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let results: Vec<QuizResult> = state.results.lock().unwrap().clone();
    ok(results)
}

async fn detail(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(quiz_id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let found = state
        .results
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.id == quiz_id)
        .cloned();
    match found {
        Some(result) => ok(result),
        None => rejected("Quiz not found"),
    }
}

/// Graded result played `hours_ago` hours before now.
pub fn seeded_result(id: &str, hours_ago: i64, score: u8) -> QuizResult {
    QuizResult {
        id: id.to_string(),
        deck_id: fixtures::CAPITALS_DECK.to_string(),
        deck_name: "Capitals".to_string(),
        score,
        total_questions: 4,
        correct_answers: (score as usize * 4) / 100,
        played_at: Utc::now() - chrono::Duration::hours(hours_ago),
        details: vec![],
    }
}
