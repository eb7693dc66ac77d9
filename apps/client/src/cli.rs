//! Terminal front end for taking quizzes.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use quiz_core::{QuestionState, QuizHistory, QuizResult, QuizSession};

use crate::api::QuizApi;
use crate::runner::QuizRunner;

const USAGE: &str = "usage: flashquiz <quiz <deck-id> | history | show <quiz-id>>";

/// Subcommand selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quiz { deck_id: String },
    History,
    Show { quiz_id: String },
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = match (args.next().as_deref(), args.next()) {
            (Some("quiz"), Some(deck_id)) => Self::Quiz { deck_id },
            (Some("history"), None) => Self::History,
            (Some("show"), Some(quiz_id)) => Self::Show { quiz_id },
            _ => bail!(USAGE),
        };

        if args.next().is_some() {
            bail!(USAGE);
        }
        Ok(command)
    }
}

/// What the user typed for the current question.
enum Choice {
    Option(usize),
    Skip,
}

/// Take a quiz interactively and return the graded result.
pub async fn play<A, R, W>(
    runner: &QuizRunner<A>,
    deck_id: &str,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<QuizResult>
where
    A: QuizApi,
    R: BufRead,
    W: Write,
{
    let mut session = runner.start(deck_id).await?;
    let total = session.total_questions();

    while let Some(card) = session.current_card().cloned() {
        let number = session.run_state().current_index + 1;
        writeln!(out, "\nQuestion {number}/{total}: {}", card.front)?;
        render_options(session.options(), session.question_state(), None, out)?;

        match read_choice(session.options().len(), input, out)? {
            Choice::Option(index) => {
                let selected = session.options()[index].clone();
                let outcome = session.answer(&selected)?;
                render_options(
                    session.options(),
                    session.question_state(),
                    Some(outcome.correct_answer.as_str()),
                    out,
                )?;
                if outcome.is_correct {
                    writeln!(out, "Correct!")?;
                } else {
                    writeln!(out, "Wrong. The answer was: {}", outcome.correct_answer)?;
                }
            }
            Choice::Skip => writeln!(out, "Skipped. The answer was: {}", card.back)?,
        }

        session.advance();
    }

    render_score(&session, out)?;

    let result = runner.submit(&session).await?;
    render_result(&result, out)?;
    Ok(result)
}

/// Print numbered options. Once answered, `>` marks the pick and `*` the answer.
fn render_options<W: Write>(
    options: &[String],
    question: &QuestionState,
    correct: Option<&str>,
    out: &mut W,
) -> std::io::Result<()> {
    for (i, option) in options.iter().enumerate() {
        let picked = if question.is_selected(option) { '>' } else { ' ' };
        let right = if correct == Some(option.as_str()) { '*' } else { ' ' };
        writeln!(out, "{picked}{right} {}. {option}", i + 1)?;
    }
    Ok(())
}

fn read_choice<R: BufRead, W: Write>(
    option_count: usize,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Choice> {
    loop {
        write!(out, "Your answer (1-{option_count}, s to skip): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read answer")? == 0 {
            bail!("input closed before the quiz was finished");
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("s") {
            return Ok(Choice::Skip);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => return Ok(Choice::Option(n - 1)),
            _ => writeln!(out, "Please enter a number between 1 and {option_count}.")?,
        }
    }
}

fn render_score<R, W: Write>(session: &QuizSession<R>, out: &mut W) -> anyhow::Result<()> {
    let score = session.require_score()?;
    writeln!(
        out,
        "\nYou scored {}% ({} correct, {} wrong).",
        score.percentage, score.correct, score.wrong
    )?;
    Ok(())
}

/// Print a graded quiz with its per-question review.
pub fn render_result<W: Write>(result: &QuizResult, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "\n{} - {}% ({}/{} correct) on {}",
        result.deck_name,
        result.score,
        result.correct_answers,
        result.total_questions,
        result.played_at.format("%Y-%m-%d %H:%M")
    )?;

    for (i, review) in result.details.iter().enumerate() {
        let mark = if review.is_correct { "ok" } else { "x " };
        writeln!(out, "  [{mark}] {}. {}", i + 1, review.question)?;
        if !review.is_correct {
            writeln!(
                out,
                "        your answer: {} | correct: {}",
                review.user_answer, review.correct_answer
            )?;
        }
        if let Some(explanation) = &review.explanation {
            writeln!(out, "        {explanation}")?;
        }
    }
    Ok(())
}

/// Print the latest attempt followed by older ones.
pub fn render_history<W: Write>(history: &QuizHistory, out: &mut W) -> std::io::Result<()> {
    let Some(recent) = &history.recent else {
        return writeln!(out, "No quizzes taken yet.");
    };

    writeln!(out, "Most recent:")?;
    write_summary(recent, out)?;

    if !history.past.is_empty() {
        writeln!(out, "\nPast attempts:")?;
        for result in &history.past {
            write_summary(result, out)?;
        }
    }
    Ok(())
}

fn write_summary<W: Write>(result: &QuizResult, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "  {}  {:<24} {:>3}%  ({} correct, {} wrong)  id {}",
        result.played_at.format("%Y-%m-%d %H:%M"),
        result.deck_name,
        result.score,
        result.correct_answers,
        result.wrong_answers(),
        result.id
    )
}
