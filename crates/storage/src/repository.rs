use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tour_core::model::{City, CityId, Quiz};

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("not found")]
    NotFound,

    #[error("duplicate city id: {0}")]
    DuplicateCity(CityId),

    #[error("duplicate quiz for city: {0}")]
    DuplicateQuiz(CityId),

    #[error("quiz references unknown city: {0}")]
    UnknownCity(CityId),

    #[error("invalid content for {city_id:?}: {source}")]
    Content {
        city_id: String,
        #[source]
        source: tour_core::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only catalog of cities and their quizzes.
///
/// Content is loaded once and never changes while the app runs.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All cities in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backend cannot be read.
    async fn list_cities(&self) -> Result<Vec<City>, CatalogError>;

    /// Fetch a city by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if missing, or other catalog errors.
    async fn get_city(&self, id: &CityId) -> Result<City, CatalogError>;

    /// Fetch the quiz attached to a city.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the city has no quiz.
    async fn get_quiz(&self, city_id: &CityId) -> Result<Quiz, CatalogError>;

    /// Number of cities in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backend cannot be read.
    async fn city_count(&self) -> Result<usize, CatalogError>;
}

/// Immutable in-memory catalog.
///
/// Construction enforces the catalog guarantees the quiz session relies on:
/// unique city ids, at most one quiz per city and no quiz for an unknown city.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    cities: Arc<Vec<City>>,
    index: Arc<HashMap<CityId, usize>>,
    quizzes: Arc<HashMap<CityId, Quiz>>,
}

impl InMemoryCatalog {
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateCity`, `CatalogError::DuplicateQuiz` or
    /// `CatalogError::UnknownCity` when the content is inconsistent.
    pub fn new(cities: Vec<City>, quizzes: Vec<Quiz>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(cities.len());
        for (pos, city) in cities.iter().enumerate() {
            if index.insert(city.id().clone(), pos).is_some() {
                return Err(CatalogError::DuplicateCity(city.id().clone()));
            }
        }

        let mut by_city = HashMap::with_capacity(quizzes.len());
        for quiz in quizzes {
            let city_id = quiz.city_id().clone();
            if !index.contains_key(&city_id) {
                return Err(CatalogError::UnknownCity(city_id));
            }
            if by_city.contains_key(&city_id) {
                return Err(CatalogError::DuplicateQuiz(city_id));
            }
            by_city.insert(city_id, quiz);
        }

        Ok(Self {
            cities: Arc::new(cities),
            index: Arc::new(index),
            quizzes: Arc::new(by_city),
        })
    }

    #[must_use]
    pub fn quiz_count(&self) -> usize {
        self.quizzes.len()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_cities(&self) -> Result<Vec<City>, CatalogError> {
        Ok(self.cities.as_ref().clone())
    }

    async fn get_city(&self, id: &CityId) -> Result<City, CatalogError> {
        self.index
            .get(id)
            .and_then(|pos| self.cities.get(*pos))
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn get_quiz(&self, city_id: &CityId) -> Result<Quiz, CatalogError> {
        self.quizzes
            .get(city_id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn city_count(&self) -> Result<usize, CatalogError> {
        Ok(self.cities.len())
    }
}

/// Catalog handle behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(catalog: InMemoryCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled content fails validation.
    pub fn embedded() -> Result<Self, CatalogError> {
        crate::json::load_embedded().map(Self::in_memory)
    }

    /// Catalog parsed from in-memory JSON documents.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Serialization` for malformed JSON, or a validation error.
    pub fn from_json(cities_json: &str, quizzes_json: &str) -> Result<Self, CatalogError> {
        crate::json::load_from_str(cities_json, quizzes_json).map(Self::in_memory)
    }

    /// Load `cities.json` and `quizzes.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if a file cannot be read, or a parse/validation error.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        crate::json::load_dir(dir).map(Self::in_memory)
    }
}
