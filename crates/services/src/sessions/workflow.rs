use std::sync::Arc;

use storage::{CatalogError, CatalogRepository};
use tour_core::model::CityId;
use tour_core::session::QuizOutcome;
use tour_core::{Advance, Clock, ProgressStore, QuizSession};
use tracing::{debug, info, warn};

use super::progress::JourneyProgress;
use crate::error::TourError;

/// Result of one `advance` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizStep {
    pub advance: Advance,
    pub is_complete: bool,
    /// Outcome written to the progress store by this call, if any.
    pub committed: Option<QuizOutcome>,
}

/// Orchestrates quiz start, answering and the completion commit.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    catalog: Arc<dyn CatalogRepository>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { clock, catalog }
    }

    /// Start a new quiz session for the given city.
    ///
    /// Lookup failures never create a session and never touch progress.
    ///
    /// # Errors
    ///
    /// Returns `TourError::CityNotFound` for an unknown city,
    /// `TourError::QuizNotFound` when the city has no quiz, and
    /// `TourError::Catalog` for other catalog failures.
    pub async fn start_quiz(&self, city_id: &CityId) -> Result<QuizSession, TourError> {
        match self.catalog.get_city(city_id).await {
            Ok(_) => {}
            Err(CatalogError::NotFound) => {
                warn!(%city_id, "quiz requested for unknown city");
                return Err(TourError::CityNotFound(city_id.clone()));
            }
            Err(err) => return Err(err.into()),
        }

        let quiz = match self.catalog.get_quiz(city_id).await {
            Ok(quiz) => quiz,
            Err(CatalogError::NotFound) => {
                warn!(%city_id, "no quiz available");
                return Err(TourError::QuizNotFound(city_id.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        debug!(%city_id, questions = quiz.question_count(), "quiz started");
        Ok(QuizSession::new(quiz, self.clock.now()))
    }

    /// Select an option for the current question.
    ///
    /// # Errors
    ///
    /// Returns `TourError::Select` if the option is out of range or the quiz is over.
    pub fn select(&self, session: &mut QuizSession, option: usize) -> Result<(), TourError> {
        session.select(option)?;
        Ok(())
    }

    /// Score the current answer, move on, and commit the outcome when the
    /// last question is answered.
    pub fn advance(&self, session: &mut QuizSession, progress: &mut ProgressStore) -> QuizStep {
        let advance = session.advance(self.clock.now());
        match &advance {
            Advance::NoSelection => {
                debug!(city_id = %session.city_id(), "advance ignored without selection");
            }
            Advance::Next { index } => {
                debug!(city_id = %session.city_id(), index, score = session.score(), "next question");
            }
            Advance::Completed(outcome) => {
                info!(
                    city_id = %outcome.city_id,
                    score = outcome.score,
                    questions = outcome.question_count,
                    "quiz completed"
                );
            }
        }

        let committed = self.finalize(session, progress);
        QuizStep {
            advance,
            is_complete: session.is_complete(),
            committed,
        }
    }

    /// Run the completion commit for a completed session.
    ///
    /// Safe to call any number of times; only the first call after completion
    /// writes to `progress`.
    pub fn finalize(
        &self,
        session: &mut QuizSession,
        progress: &mut ProgressStore,
    ) -> Option<QuizOutcome> {
        if !session.is_complete() {
            return None;
        }
        let committed = session.commit(progress);
        match &committed {
            Some(outcome) => info!(
                city_id = %outcome.city_id,
                added = outcome.score,
                total_score = progress.total_score(),
                visited = progress.visited_count(),
                "progress committed"
            ),
            None => debug!(city_id = %session.city_id(), "progress already committed"),
        }
        committed
    }

    /// Journey snapshot for the current progress.
    ///
    /// # Errors
    ///
    /// Returns `TourError::Catalog` if the city count cannot be read.
    pub async fn journey(&self, progress: &ProgressStore) -> Result<JourneyProgress, TourError> {
        let total = self.catalog.city_count().await?;
        Ok(JourneyProgress::from_store(progress, total))
    }
}
