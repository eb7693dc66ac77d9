//! Ordering of past quiz results.

use crate::types::QuizResult;

/// Quiz history split into the latest attempt and everything before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizHistory {
    pub recent: Option<QuizResult>,
    pub past: Vec<QuizResult>,
}

impl QuizHistory {
    pub fn is_empty(&self) -> bool {
        self.recent.is_none()
    }

    /// Total number of attempts, recent included.
    pub fn len(&self) -> usize {
        self.past.len() + usize::from(self.recent.is_some())
    }
}

/// Sort results newest first and split off the most recent one.
///
/// Results played at the same instant keep their input order.
pub fn aggregate(results: impl IntoIterator<Item = QuizResult>) -> QuizHistory {
    let mut sorted: Vec<QuizResult> = results.into_iter().collect();
    sorted.sort_by(|a, b| b.played_at.cmp(&a.played_at));

    let mut iter = sorted.into_iter();
    let recent = iter.next();

    QuizHistory {
        recent,
        past: iter.collect(),
    }
}
