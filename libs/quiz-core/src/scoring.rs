//! Score calculation for finished quizzes.

/// Final tally of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Percentage of correct answers (0-100), truncated toward zero.
    pub percentage: u8,
    pub correct: usize,
    pub wrong: usize,
}

/// Compute the score for `correct_count` right answers out of `total_questions`.
///
/// The percentage is truncated, so 2 out of 3 scores 66. An empty quiz scores 0.
/// `correct_count` is clamped to `total_questions`.
pub fn finalize(correct_count: usize, total_questions: usize) -> Score {
    let correct = correct_count.min(total_questions);
    let percentage = if total_questions > 0 {
        (correct * 100 / total_questions) as u8
    } else {
        0
    };

    Score {
        percentage,
        correct,
        wrong: total_questions - correct,
    }
}
