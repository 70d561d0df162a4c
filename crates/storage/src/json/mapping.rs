use serde::Deserialize;
use tour_core::model::{City, CityId, CitySections, Question, Quiz};

use crate::repository::CatalogError;

/// On-disk shape of a city entry in `cities.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(default)]
    pub festivals: Vec<String>,
    #[serde(default)]
    pub monuments: Vec<String>,
    #[serde(default)]
    pub art: Vec<String>,
    #[serde(default)]
    pub facts: Vec<String>,
}

/// On-disk shape of a quiz entry in `quizzes.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub city_id: String,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

fn content_err<E: Into<tour_core::Error>>(city_id: &str) -> impl FnOnce(E) -> CatalogError + '_ {
    move |e| CatalogError::Content {
        city_id: city_id.to_owned(),
        source: e.into(),
    }
}

impl CityRecord {
    /// Convert the record into a domain `City`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Content` if the id or name fail validation.
    pub fn into_city(self) -> Result<City, CatalogError> {
        let id = CityId::new(self.id.as_str()).map_err(content_err(&self.id))?;
        let sections = CitySections {
            food: self.food,
            festivals: self.festivals,
            monuments: self.monuments,
            art: self.art,
            facts: self.facts,
        };
        City::new(id, self.name, self.tagline, self.description, sections)
            .map_err(content_err(&self.id))
    }
}

impl QuizRecord {
    /// Convert the record into a domain `Quiz`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Content` if the quiz is empty or a question is malformed.
    pub fn into_quiz(self) -> Result<Quiz, CatalogError> {
        let city_id = CityId::new(self.city_id.as_str()).map_err(content_err(&self.city_id))?;
        let questions = self
            .questions
            .into_iter()
            .map(|q| Question::new(q.question, q.options, q.correct_index))
            .collect::<Result<Vec<_>, _>>()
            .map_err(content_err(&self.city_id))?;
        Quiz::new(city_id, questions).map_err(content_err(&self.city_id))
    }
}
