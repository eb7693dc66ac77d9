//! Quiz session state machine.
//!
//! A session walks forward through the cards of a started quiz. Each question
//! can be answered once; advancing from the last question finishes the quiz.
//! There is no way back to a previous question.

use crate::error::{QuizError, Result};
use crate::options::select_options_with_rng;
use crate::scoring::{finalize, Score};
use crate::types::{Card, QuestionState, QuizRunState, StartedQuiz, SubmittedAnswer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        current_index: usize,
        correct_count: usize,
    },
    Finished {
        correct_count: usize,
        total_questions: usize,
    },
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// A quiz in progress, owned by whoever is presenting it.
#[derive(Debug)]
pub struct QuizSession<R = StdRng> {
    quiz_id: String,
    cards: Vec<Card>,
    option_count: usize,
    rng: R,
    state: QuizState,
    question: QuestionState,
    options: Vec<String>,
    answers: Vec<SubmittedAnswer>,
}

impl QuizSession<StdRng> {
    /// Start a session with an entropy-seeded RNG.
    pub fn new(quiz: StartedQuiz, option_count: usize) -> Result<Self> {
        Self::with_rng(quiz, option_count, StdRng::from_entropy())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session drawing option shuffles from `rng`.
    ///
    /// Fails with [`QuizError::EmptyQuiz`] when the quiz has no cards.
    pub fn with_rng(quiz: StartedQuiz, option_count: usize, rng: R) -> Result<Self> {
        if quiz.cards.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }

        let mut session = Self {
            quiz_id: quiz.quiz_id,
            cards: quiz.cards,
            option_count,
            rng,
            state: QuizState::InProgress {
                current_index: 0,
                correct_count: 0,
            },
            question: QuestionState::default(),
            options: Vec::new(),
            answers: Vec::new(),
        };
        session.refresh_options();
        Ok(session)
    }

    /// Answer the current question with `selected`.
    ///
    /// The selection is compared verbatim with the card's back. A question can
    /// only be answered once.
    pub fn answer(&mut self, selected: &str) -> Result<AnswerOutcome> {
        let (current_index, correct_count) = match self.state {
            QuizState::InProgress {
                current_index,
                correct_count,
            } => (current_index, correct_count),
            QuizState::Finished { .. } => return Err(QuizError::Finished),
        };

        if self.question.is_answered {
            return Err(QuizError::AlreadyAnswered {
                index: current_index,
            });
        }

        let card = &self.cards[current_index];
        let is_correct = selected == card.back;

        self.question = QuestionState {
            selected_answer: Some(selected.to_string()),
            is_answered: true,
        };
        self.answers.push(SubmittedAnswer {
            card_id: card.id.clone(),
            answer: selected.to_string(),
        });

        if is_correct {
            self.state = QuizState::InProgress {
                current_index,
                correct_count: correct_count + 1,
            };
        }

        Ok(AnswerOutcome {
            is_correct,
            correct_answer: card.back.clone(),
        })
    }

    /// Move to the next question, or finish when on the last one.
    ///
    /// An unanswered question counts as wrong. Does nothing once finished.
    pub fn advance(&mut self) -> QuizState {
        if let QuizState::InProgress {
            current_index,
            correct_count,
        } = self.state
        {
            self.question = QuestionState::default();

            if current_index + 1 < self.cards.len() {
                self.state = QuizState::InProgress {
                    current_index: current_index + 1,
                    correct_count,
                };
                self.refresh_options();
            } else {
                self.state = QuizState::Finished {
                    correct_count,
                    total_questions: self.cards.len(),
                };
                self.options.clear();
            }
        }

        self.state
    }

    fn refresh_options(&mut self) {
        if let QuizState::InProgress { current_index, .. } = self.state {
            self.options = select_options_with_rng(
                &self.cards[current_index],
                &self.cards,
                self.option_count,
                &mut self.rng,
            );
        }
    }
}

impl<R> QuizSession<R> {
    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn total_questions(&self) -> usize {
        self.cards.len()
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished { .. })
    }

    /// Card being asked, `None` once finished.
    pub fn current_card(&self) -> Option<&Card> {
        match self.state {
            QuizState::InProgress { current_index, .. } => self.cards.get(current_index),
            QuizState::Finished { .. } => None,
        }
    }

    /// Options for the current question. Stable until the next `advance`.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn question_state(&self) -> &QuestionState {
        &self.question
    }

    pub fn correct_count(&self) -> usize {
        match self.state {
            QuizState::InProgress { correct_count, .. } | QuizState::Finished { correct_count, .. } => {
                correct_count
            }
        }
    }

    /// Progress counters in flat form.
    pub fn run_state(&self) -> QuizRunState {
        match self.state {
            QuizState::InProgress {
                current_index,
                correct_count,
            } => QuizRunState {
                current_index,
                correct_count,
                is_finished: false,
            },
            QuizState::Finished {
                correct_count,
                total_questions,
            } => QuizRunState {
                current_index: total_questions.saturating_sub(1),
                correct_count,
                is_finished: true,
            },
        }
    }

    /// Answers given so far, in question order.
    pub fn answers(&self) -> &[SubmittedAnswer] {
        &self.answers
    }

    /// Final score, available once the session is finished.
    pub fn score(&self) -> Option<Score> {
        match self.state {
            QuizState::Finished {
                correct_count,
                total_questions,
            } => Some(finalize(correct_count, total_questions)),
            QuizState::InProgress { .. } => None,
        }
    }

    /// Final score, or [`QuizError::NotFinished`] while questions remain.
    pub fn require_score(&self) -> Result<Score> {
        self.score().ok_or(QuizError::NotFinished)
    }
}
