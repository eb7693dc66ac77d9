//! Drives a quiz from start to graded result.

use quiz_core::{aggregate, QuizHistory, QuizResult, QuizSession};

use crate::api::QuizApi;
use crate::error::Result;

/// Connects the backend boundary to the in-memory quiz session.
pub struct QuizRunner<A> {
    api: A,
    option_count: usize,
}

impl<A: QuizApi> QuizRunner<A> {
    pub fn new(api: A, option_count: usize) -> Self {
        Self { api, option_count }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Start a quiz for `deck_id` and build its session.
    ///
    /// A deck without cards yields [`quiz_core::QuizError::EmptyQuiz`].
    pub async fn start(&self, deck_id: &str) -> Result<QuizSession> {
        let quiz = self.api.start_quiz(deck_id).await?;
        tracing::info!(
            deck_id,
            quiz_id = %quiz.quiz_id,
            cards = quiz.cards.len(),
            "quiz started"
        );
        Ok(QuizSession::new(quiz, self.option_count)?)
    }

    /// Submit the answers of a finished session for grading.
    pub async fn submit<R>(&self, session: &QuizSession<R>) -> Result<QuizResult> {
        let score = session.require_score()?;
        tracing::info!(
            quiz_id = session.quiz_id(),
            percentage = score.percentage,
            correct = score.correct,
            wrong = score.wrong,
            "submitting finished quiz"
        );

        let result = self
            .api
            .submit_quiz(session.quiz_id(), session.answers())
            .await?;

        if result.score != score.percentage {
            tracing::debug!(
                local = score.percentage,
                server = result.score,
                "server score differs from local score"
            );
        }
        Ok(result)
    }

    /// Load past results ordered newest first.
    pub async fn history(&self) -> Result<QuizHistory> {
        let results = self.api.quiz_history().await?;
        tracing::debug!(count = results.len(), "quiz history loaded");
        Ok(aggregate(results))
    }

    pub async fn detail(&self, quiz_id: &str) -> Result<QuizResult> {
        self.api.quiz_detail(quiz_id).await
    }
}
