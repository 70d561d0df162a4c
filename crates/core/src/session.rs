//! Single-attempt quiz session for one city.
//!
//! A session walks through the quiz questions in order. Each question is
//! scored once, when the player advances past it. Reaching the end moves the
//! session to `Completed` and produces a `QuizOutcome`, which `commit` writes
//! to the `ProgressStore` at most once.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{CityId, Question, Quiz};
use crate::progress::ProgressStore;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectError {
    #[error("option {option} is out of range for {option_count} options")]
    InvalidSelection { option: usize, option_count: usize },

    #[error("quiz already completed")]
    Completed,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Observable session state between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingSelection { index: usize },
    Completed,
}

/// Result of a single `advance` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Nothing selected (or already completed); state is unchanged.
    NoSelection,
    /// Moved on to the question at `index`.
    Next { index: usize },
    /// The last question was answered.
    Completed(QuizOutcome),
}

/// Final result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub city_id: CityId,
    pub score: u32,
    pub question_count: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    phase: QuizPhase,
    selection: Option<usize>,
    score: u32,
    started_at: DateTime<Utc>,
    outcome: Option<QuizOutcome>,
    committed: bool,
}

impl QuizSession {
    /// Starts a session at the first question with nothing selected.
    ///
    /// `started_at` should come from the services layer clock.
    #[must_use]
    pub fn new(quiz: Quiz, started_at: DateTime<Utc>) -> Self {
        Self {
            quiz,
            phase: QuizPhase::AwaitingSelection { index: 0 },
            selection: None,
            score: 0,
            started_at,
            outcome: None,
            committed: false,
        }
    }

    #[must_use]
    pub fn city_id(&self) -> &CityId {
        self.quiz.city_id()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Zero-based index of the question being shown, `None` once completed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::AwaitingSelection { index } => Some(index),
            QuizPhase::Completed => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index()
            .and_then(|index| self.quiz.questions().get(index))
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.question_count()
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Correct answers so far. Equals the final score once completed.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Chooses an option for the current question. May be called repeatedly
    /// to change the choice before advancing.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::InvalidSelection` if `option` is not an index into
    /// the current options, and `SelectError::Completed` after completion.
    /// The session is left untouched on error.
    pub fn select(&mut self, option: usize) -> Result<(), SelectError> {
        let question = self.current_question().ok_or(SelectError::Completed)?;
        let option_count = question.option_count();
        if option >= option_count {
            return Err(SelectError::InvalidSelection {
                option,
                option_count,
            });
        }
        self.selection = Some(option);
        Ok(())
    }

    /// Scores the current selection and moves to the next question, or
    /// completes the session after the last one.
    ///
    /// Without a selection this is a no-op returning `Advance::NoSelection`.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Advance {
        let QuizPhase::AwaitingSelection { index } = self.phase else {
            return Advance::NoSelection;
        };
        let Some(selected) = self.selection else {
            return Advance::NoSelection;
        };
        let Some(question) = self.quiz.questions().get(index) else {
            return Advance::NoSelection;
        };

        // Every question, the last included, is scored here and only here.
        if question.is_correct(selected) {
            self.score = self.score.saturating_add(1);
        }
        self.selection = None;

        let next = index + 1;
        if next < self.quiz.question_count() {
            self.phase = QuizPhase::AwaitingSelection { index: next };
            return Advance::Next { index: next };
        }

        self.phase = QuizPhase::Completed;
        let outcome = QuizOutcome {
            city_id: self.quiz.city_id().clone(),
            score: self.score,
            question_count: self.quiz.question_count(),
            started_at: self.started_at,
            completed_at: now,
        };
        self.outcome = Some(outcome.clone());
        Advance::Completed(outcome)
    }

    /// Writes the final score and the visit to `progress`, exactly once.
    ///
    /// Returns the committed outcome on the first call after completion and
    /// `None` otherwise (not yet completed, or already committed).
    pub fn commit(&mut self, progress: &mut ProgressStore) -> Option<QuizOutcome> {
        if self.committed {
            return None;
        }
        let outcome = self.outcome.clone()?;
        self.committed = true;
        progress.add_score(outcome.score);
        progress.mark_visited(outcome.city_id.clone());
        Some(outcome)
    }
}
