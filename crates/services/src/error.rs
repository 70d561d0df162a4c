//! Shared error types for the services crate.

use thiserror::Error;

use storage::CatalogError;
use tour_core::SelectError;
use tour_core::model::CityId;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error("city not found: {0}")]
    CityNotFound(CityId),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors emitted by the quiz loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TourError {
    #[error("city not found: {0}")]
    CityNotFound(CityId),
    #[error("no quiz available for {0}")]
    QuizNotFound(CityId),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
