//! Core quiz library shared by the flashquiz client and its front ends.
//!
//! Provides:
//! - Multiple-choice option generation (distractor selection)
//! - Quiz session state machine
//! - Score calculation (truncating percentage)
//! - Quiz history ordering
//! - Shared types (Card, QuizResult, QuestionReview, etc.)

pub mod error;
pub mod history;
pub mod options;
pub mod scoring;
pub mod session;
pub mod types;

pub use error::{QuizError, Result};
pub use history::{aggregate, QuizHistory};
pub use options::{select_options, select_options_with_rng, DEFAULT_OPTION_COUNT};
pub use scoring::{finalize, Score};
pub use session::{AnswerOutcome, QuizSession, QuizState};
pub use types::{
    Card, QuestionReview, QuestionState, QuizResult, QuizRunState, StartedQuiz, SubmittedAnswer,
};
