//! Core types for quiz sessions and results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flashcard as handed out for a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Quiz handed out by the backend when a quiz is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedQuiz {
    pub quiz_id: String,
    pub cards: Vec<Card>,
}

/// Answer given for a single card, as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub card_id: String,
    pub answer: String,
}

/// Per-question answer state.
///
/// Reset every time the session moves to a new question. Once answered the
/// selection cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionState {
    pub selected_answer: Option<String>,
    pub is_answered: bool,
}

impl QuestionState {
    /// Whether `option` is the answer the user picked.
    pub fn is_selected(&self, option: &str) -> bool {
        self.selected_answer.as_deref() == Some(option)
    }
}

/// Session-scoped progress counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRunState {
    pub current_index: usize,
    pub correct_count: usize,
    pub is_finished: bool,
}

/// Review of one question inside a graded quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Graded quiz as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: String,
    pub deck_id: String,
    pub deck_name: String,
    /// Percentage score (0-100).
    pub score: u8,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub played_at: DateTime<Utc>,
    #[serde(default)]
    pub details: Vec<QuestionReview>,
}

impl QuizResult {
    /// Number of wrong answers recorded for this result.
    pub fn wrong_answers(&self) -> usize {
        self.total_questions.saturating_sub(self.correct_answers)
    }
}
