//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by quiz session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("quiz has no cards")]
    EmptyQuiz,

    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("quiz is already finished")]
    Finished,

    #[error("quiz is not finished yet")]
    NotFinished,
}
