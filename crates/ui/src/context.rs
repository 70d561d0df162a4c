use std::sync::Arc;

use dioxus::prelude::*;
use services::{AppServices, CatalogService, QuizLoopService};
use tour_core::ProgressStore;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

impl UiApp for AppServices {
    fn catalog(&self) -> Arc<CatalogService> {
        AppServices::catalog(self)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        AppServices::quiz_loop(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            quiz_loop: app.quiz_loop(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Session-wide progress store provided by `App`.
#[must_use]
pub fn use_progress() -> Signal<ProgressStore> {
    use_context::<Signal<ProgressStore>>()
}
