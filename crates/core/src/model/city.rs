use thiserror::Error;

use crate::model::ids::CityId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CityError {
    #[error("city name cannot be empty")]
    EmptyName,
}

//
// ─── CITY ──────────────────────────────────────────────────────────────────────
//

/// Descriptive list sections shown on a city page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitySections {
    pub food: Vec<String>,
    pub festivals: Vec<String>,
    pub monuments: Vec<String>,
    pub art: Vec<String>,
    pub facts: Vec<String>,
}

/// A stop on the tour.
///
/// Cities are immutable once built; the catalog owns them for the life of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    id: CityId,
    name: String,
    tagline: String,
    description: String,
    sections: CitySections,
}

impl City {
    /// Creates a validated city.
    ///
    /// # Errors
    ///
    /// Returns `CityError::EmptyName` if the display name is blank.
    pub fn new(
        id: CityId,
        name: impl Into<String>,
        tagline: impl Into<String>,
        description: impl Into<String>,
        sections: CitySections,
    ) -> Result<Self, CityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CityError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            tagline: tagline.into(),
            description: description.into(),
            sections,
        })
    }

    #[must_use]
    pub fn id(&self) -> &CityId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn sections(&self) -> &CitySections {
        &self.sections
    }
}
