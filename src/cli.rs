use crate::libquiz::error::Error;
use crate::libquiz::question::Question;
use crate::libquiz::session::{QuizSession, SessionState, Summary};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq)]
enum Input {
    Guess(String),
    Hint,
    Quit,
}

impl Input {
    fn from_str(input: &str) -> Input {
        match input.trim() {
            ":q" | ":quit" => Input::Quit,
            ":h" | ":hint" => Input::Hint,
            _ => Input::Guess(input.trim().to_string()),
        }
    }
}

fn score_label(summary: Summary) -> String {
    if summary.answered() == 0 {
        String::from("No Answers")
    } else {
        summary.to_string()
    }
}

/// Prints `text` and reads one line. `None` once the input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>, Error> {
    write!(output, "{} ", text.cyan())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("[CLI] Input exhausted.");
        return Ok(None);
    }
    Ok(Some(line))
}

fn show_question<W: Write>(
    output: &mut W,
    session: &QuizSession,
    question: &Question,
) -> Result<(), Error> {
    writeln!(
        output,
        "{} {}",
        format!("Question {} of {}", session.position() + 1, session.len()).cyan(),
        format!("({})", score_label(session.summary())).dimmed()
    )?;
    writeln!(
        output,
        "{}",
        format!(" {} ", question.image_tag).black().bold().on_white()
    )?;
    writeln!(output, "{}", question.image_url().underline())?;
    Ok(())
}

fn play_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, Error> {
    Ok(match prompt(input, output, "Play again? (y/n)")? {
        Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        None => false,
    })
}

pub fn cli_loop<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    bank: &[Question],
    mut session: QuizSession,
    question_count: usize,
) -> Result<(), Error> {
    loop {
        while session.state() == SessionState::InProgress {
            let question = session.current_question()?.clone();
            show_question(output, &session, &question)?;

            let correct = loop {
                let line = prompt(
                    input,
                    output,
                    "Your guess (:h for a hint, :q to quit prematurely):",
                )?;
                let choice = line.as_deref().map_or(Input::Quit, Input::from_str);
                debug!("input: {:?}", choice);

                match choice {
                    Input::Hint => {
                        writeln!(output, "{}", format!("Hint: {}", question.hint).yellow())?
                    }
                    Input::Quit => {
                        writeln!(output, "{}", "Quitting Early!".cyan())?;
                        writeln!(output, "{}", session.summary())?;
                        return Ok(());
                    }
                    Input::Guess(guess) => match session.submit_answer(&guess) {
                        Ok(correct) => break correct,
                        Err(Error::EmptyAnswer) => {
                            writeln!(output, "{}", "No Guess. Give me your guess.".yellow())?
                        }
                        Err(err) => return Err(err),
                    },
                }
            };

            if correct {
                writeln!(output, "{}", "Correct!".bright_green())?;
            } else {
                writeln!(
                    output,
                    "{}",
                    format!("Wrong! The answer was {}.", question.answer).bright_red()
                )?;
            }
            session.advance()?;
        }

        writeln!(
            output,
            "{}",
            format!("Game Over: {}", session.summary()).bold().cyan()
        )?;
        if !play_again(input, output)? {
            return Ok(());
        }
        session.restart(bank, question_count)?;
    }
}
