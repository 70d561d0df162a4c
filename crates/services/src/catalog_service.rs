use std::sync::Arc;

use storage::{CatalogError, CatalogRepository};
use tour_core::model::{City, CityId};
use tracing::warn;

use crate::error::CatalogServiceError;

/// Read access to the city catalog for browsing views.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// List cities in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Catalog` if repository access fails.
    pub async fn list_cities(&self) -> Result<Vec<City>, CatalogServiceError> {
        Ok(self.catalog.list_cities().await?)
    }

    /// Fetch a city by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::CityNotFound` when the id is unknown.
    /// Returns `CatalogServiceError::Catalog` if repository access fails.
    pub async fn get_city(&self, city_id: &CityId) -> Result<City, CatalogServiceError> {
        match self.catalog.get_city(city_id).await {
            Ok(city) => Ok(city),
            Err(CatalogError::NotFound) => {
                warn!(%city_id, "city lookup failed");
                Err(CatalogServiceError::CityNotFound(city_id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Catalog` if repository access fails.
    pub async fn city_count(&self) -> Result<usize, CatalogServiceError> {
        Ok(self.catalog.city_count().await?)
    }
}
