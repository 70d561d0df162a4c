//! JSON catalog loader.
//!
//! The catalog is two files: `cities.json` and `quizzes.json`. A default copy
//! of both is compiled into the binary.

use std::path::Path;

use tracing::info;

use crate::repository::{CatalogError, InMemoryCatalog};

mod mapping;

pub use mapping::{CityRecord, QuestionRecord, QuizRecord};

pub const CITIES_FILE: &str = "cities.json";
pub const QUIZZES_FILE: &str = "quizzes.json";

const EMBEDDED_CITIES: &str = include_str!("../../data/cities.json");
const EMBEDDED_QUIZZES: &str = include_str!("../../data/quizzes.json");

fn ser<E: core::fmt::Display>(e: E) -> CatalogError {
    CatalogError::Serialization(e.to_string())
}

/// Parse and validate a catalog from the two JSON documents.
///
/// # Errors
///
/// Returns `CatalogError::Serialization` for malformed JSON and a validation
/// error for inconsistent content.
pub fn load_from_str(cities_json: &str, quizzes_json: &str) -> Result<InMemoryCatalog, CatalogError> {
    let city_records: Vec<CityRecord> = serde_json::from_str(cities_json).map_err(ser)?;
    let quiz_records: Vec<QuizRecord> = serde_json::from_str(quizzes_json).map_err(ser)?;

    let cities = city_records
        .into_iter()
        .map(CityRecord::into_city)
        .collect::<Result<Vec<_>, _>>()?;
    let quizzes = quiz_records
        .into_iter()
        .map(QuizRecord::into_quiz)
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = InMemoryCatalog::new(cities, quizzes)?;
    info!(quizzes = catalog.quiz_count(), "catalog loaded");
    Ok(catalog)
}

/// Load the catalog bundled with the binary.
///
/// # Errors
///
/// Returns `CatalogError` if the bundled content fails validation.
pub fn load_embedded() -> Result<InMemoryCatalog, CatalogError> {
    load_from_str(EMBEDDED_CITIES, EMBEDDED_QUIZZES)
}

/// Load `cities.json` and `quizzes.json` from `dir`.
///
/// # Errors
///
/// Returns `CatalogError::Io` if a file cannot be read, otherwise as `load_from_str`.
pub fn load_dir(dir: &Path) -> Result<InMemoryCatalog, CatalogError> {
    let read = |name: &str| {
        let path = dir.join(name);
        std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })
    };
    let cities = read(CITIES_FILE)?;
    let quizzes = read(QUIZZES_FILE)?;
    info!(dir = %dir.display(), "loading catalog from directory");
    load_from_str(&cities, &quizzes)
}
