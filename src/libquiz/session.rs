use crate::libquiz::error::Error;
use crate::libquiz::question::Question;
use log::debug;
use rand::seq::SliceRandom;
use rand::{rng, Rng};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Summary {
    pub correct: u32,
    pub incorrect: u32,
}

impl Summary {
    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Correct, {} Wrong", self.correct, self.incorrect)
    }
}

/// One playthrough of a deck sampled from the bank.
///
/// The session is `Finished` once `position` reaches the end of the deck.
/// Answers are scored against the question at `position` and never move it;
/// only [`QuizSession::advance`] does.
#[derive(Debug, Clone)]
pub(crate) struct QuizSession {
    deck: Vec<Question>,
    position: usize,
    correct: u32,
    incorrect: u32,
}

impl QuizSession {
    pub fn start(bank: &[Question], count: usize) -> Result<Self, Error> {
        Self::start_with_rng(bank, count, &mut rng())
    }

    /// Samples `count` distinct questions from `bank`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientQuestions` if `bank` holds fewer than
    /// `count` distinct questions.
    pub fn start_with_rng<R: Rng + ?Sized>(
        bank: &[Question],
        count: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        Ok(Self {
            deck: sample_deck(bank, count, rng)?,
            position: 0,
            correct: 0,
            incorrect: 0,
        })
    }

    pub fn restart(&mut self, bank: &[Question], count: usize) -> Result<(), Error> {
        self.restart_with_rng(bank, count, &mut rng())
    }

    /// Draws a fresh deck and clears the score. Leaves the session as it was
    /// if the new deck cannot be drawn.
    pub fn restart_with_rng<R: Rng + ?Sized>(
        &mut self,
        bank: &[Question],
        count: usize,
        rng: &mut R,
    ) -> Result<(), Error> {
        *self = Self::start_with_rng(bank, count, rng)?;
        debug!("[Session] Restarted with {} questions.", self.deck.len());
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        if self.position == self.deck.len() {
            SessionState::Finished
        } else {
            SessionState::InProgress
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn current_question(&self) -> Result<&Question, Error> {
        self.deck.get(self.position).ok_or(Error::SessionFinished)
    }

    pub fn submit_answer(&mut self, guess: &str) -> Result<bool, Error> {
        if guess.trim().is_empty() {
            return Err(Error::EmptyAnswer);
        }
        let correct = self.current_question()?.is_answer(guess);
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        debug!(
            "[Session] Guess {:?} at {} was {}.",
            guess,
            self.position,
            if correct { "correct" } else { "incorrect" }
        );
        Ok(correct)
    }

    pub fn advance(&mut self) -> Result<SessionState, Error> {
        if self.state() == SessionState::Finished {
            return Err(Error::SessionFinished);
        }
        self.position += 1;
        Ok(self.state())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            correct: self.correct,
            incorrect: self.incorrect,
        }
    }
}

fn sample_deck<R: Rng + ?Sized>(
    bank: &[Question],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, Error> {
    let mut seen = HashSet::with_capacity(bank.len());
    let mut distinct: Vec<&Question> = bank.iter().filter(|q| seen.insert(*q)).collect();
    if distinct.len() < count {
        return Err(Error::InsufficientQuestions {
            requested: count,
            available: distinct.len(),
        });
    }

    let (picked, _) = distinct.partial_shuffle(rng, count);
    debug!(
        "[Session] Sampled {} of {} distinct questions.",
        count,
        seen.len()
    );
    Ok(picked.iter().map(|q| (*q).clone()).collect())
}
