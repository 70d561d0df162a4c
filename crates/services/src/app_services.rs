use std::sync::Arc;

use storage::Storage;
use tour_core::Clock;

use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::sessions::QuizLoopService;

/// Assembles app-facing services over a loaded catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.catalog)));
        let quiz_loop = Arc::new(QuizLoopService::new(clock, Arc::clone(&storage.catalog)));
        Self { catalog, quiz_loop }
    }

    /// Build services over the catalog bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the bundled content is invalid.
    pub fn embedded(clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::embedded()?;
        Ok(Self::new(&storage, clock))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
