use services::{QuizLoopService, QuizStep, TourError};
use tour_core::model::CityId;
use tour_core::{ProgressStore, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

/// The question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub progress_label: String,
    pub can_advance: bool,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let index = self.session.current_index()?;
        let question = self.session.current_question()?;
        let selection = self.session.selection();
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, label)| OptionVm {
                index: i,
                label: label.clone(),
                selected: selection == Some(i),
            })
            .collect();

        Some(QuestionVm {
            prompt: question.prompt().to_owned(),
            options,
            progress_label: format!(
                "Question {} / {}",
                index + 1,
                self.session.question_count()
            ),
            can_advance: selection.is_some(),
        })
    }

    /// "You scored s / n" once the quiz is over.
    #[must_use]
    pub fn score_label(&self) -> Option<String> {
        self.session.outcome().map(|outcome| {
            format!(
                "You scored {} / {}",
                outcome.score, outcome.question_count
            )
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the option is rejected.
    pub fn select(&mut self, quiz_loop: &QuizLoopService, option: usize) -> Result<(), ViewError> {
        quiz_loop
            .select(&mut self.session, option)
            .map_err(|_| ViewError::Unknown)
    }

    /// Moves past the current question, committing the result on completion.
    pub fn advance(&mut self, quiz_loop: &QuizLoopService, progress: &mut ProgressStore) -> QuizStep {
        quiz_loop.advance(&mut self.session, progress)
    }
}

/// # Errors
///
/// Returns `ViewError::NotFound` for an unknown city, `ViewError::NoQuiz` when
/// the city has no quiz and `ViewError::Unknown` for other failures.
pub async fn start_quiz(quiz_loop: &QuizLoopService, city_id: &str) -> Result<QuizVm, ViewError> {
    let city_id = CityId::new(city_id).map_err(|_| ViewError::NotFound)?;
    let session = match quiz_loop.start_quiz(&city_id).await {
        Ok(session) => session,
        Err(TourError::CityNotFound(_)) => return Err(ViewError::NotFound),
        Err(TourError::QuizNotFound(_)) => return Err(ViewError::NoQuiz),
        Err(_) => return Err(ViewError::Unknown),
    };

    Ok(QuizVm::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use services::Clock;
    use storage::json::load_from_str;
    use tour_core::Advance;
    use tour_core::time::fixed_now;

    fn quiz_loop() -> QuizLoopService {
        let catalog = load_from_str(
            r#"[{"id": "goa", "name": "Goa"}, {"id": "leh", "name": "Leh"}]"#,
            r#"[{"cityId": "goa", "questions": [
                {"question": "Beach state?", "options": ["Yes", "No"], "correctIndex": 0},
                {"question": "Capital?", "options": ["Margao", "Panaji"], "correctIndex": 1}
            ]}]"#,
        )
        .unwrap();
        QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(catalog))
    }

    #[tokio::test]
    async fn walks_through_questions_and_reports_score() {
        let quiz_loop = quiz_loop();
        let mut store = ProgressStore::new();
        let mut vm = start_quiz(&quiz_loop, "goa").await.unwrap();

        let first = vm.question().unwrap();
        assert_eq!(first.prompt, "Beach state?");
        assert_eq!(first.progress_label, "Question 1 / 2");
        assert!(!first.can_advance);

        let idle = vm.advance(&quiz_loop, &mut store);
        assert_eq!(idle.advance, Advance::NoSelection);
        assert_eq!(vm.question().unwrap().progress_label, "Question 1 / 2");

        vm.select(&quiz_loop, 0).unwrap();
        let selected = vm.question().unwrap();
        assert!(selected.options[0].selected);
        assert!(!selected.options[1].selected);
        vm.advance(&quiz_loop, &mut store);

        vm.select(&quiz_loop, 0).unwrap();
        let last = vm.advance(&quiz_loop, &mut store);
        assert!(last.is_complete);
        assert_eq!(last.committed.map(|outcome| outcome.score), Some(1));

        assert!(vm.is_complete());
        assert!(vm.question().is_none());
        assert_eq!(vm.score_label().as_deref(), Some("You scored 1 / 2"));
        assert_eq!(store.total_score(), 1);
        assert_eq!(store.visited_count(), 1);
    }

    #[tokio::test]
    async fn maps_lookup_failures() {
        let quiz_loop = quiz_loop();
        assert_eq!(
            start_quiz(&quiz_loop, "leh").await.err(),
            Some(ViewError::NoQuiz)
        );
        assert_eq!(
            start_quiz(&quiz_loop, "ooty").await.err(),
            Some(ViewError::NotFound)
        );
    }

    #[tokio::test]
    async fn out_of_range_selection_is_an_error() {
        let quiz_loop = quiz_loop();
        let mut vm = start_quiz(&quiz_loop, "goa").await.unwrap();
        assert_eq!(vm.select(&quiz_loop, 5), Err(ViewError::Unknown));
    }
}
