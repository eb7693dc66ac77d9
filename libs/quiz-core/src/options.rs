//! Multiple-choice option generation.
//!
//! Wrong options are drawn from the backs of the other cards in the quiz.
//! The correct answer appears exactly once and its position is shuffled.

use crate::types::Card;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Number of options shown per question unless configured otherwise.
pub const DEFAULT_OPTION_COUNT: usize = 3;

/// Build the option set for `current` using the thread-local RNG.
pub fn select_options(current: &Card, all_cards: &[Card], option_count: usize) -> Vec<String> {
    select_options_with_rng(current, all_cards, option_count, &mut rand::thread_rng())
}

/// Build the option set for `current`, drawing randomness from `rng`.
///
/// Returns at most `option_count` entries. When the other cards do not provide
/// enough distinct backs the result is shorter. An `option_count` of zero is
/// treated as one.
pub fn select_options_with_rng<R: Rng + ?Sized>(
    current: &Card,
    all_cards: &[Card],
    option_count: usize,
    rng: &mut R,
) -> Vec<String> {
    let wanted = option_count.max(1) - 1;

    // Duplicate backs would render the same option twice or hide the answer.
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(current.back.as_str());

    let mut distractors: Vec<&str> = all_cards
        .iter()
        .filter(|c| c.id != current.id)
        .map(|c| c.back.as_str())
        .filter(|back| seen.insert(*back))
        .collect();

    distractors.shuffle(rng);
    distractors.truncate(wanted);

    let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
    options.push(current.back.clone());
    options.shuffle(rng);

    options
}
