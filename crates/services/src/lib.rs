#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod sessions;

pub use tour_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{AppServicesError, CatalogServiceError, TourError};
pub use sessions::{JourneyProgress, QuizLoopService, QuizStep};
