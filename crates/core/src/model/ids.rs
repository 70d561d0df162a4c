use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for a city in the catalog (e.g. `"jaipur"`).
///
/// Quiz records reference cities through the same identifier, and the
/// visited set in `ProgressStore` is keyed by it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityId(String);

impl CityId {
    /// Creates a new `CityId`.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the identifier is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ParseIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ParseIdError { raw: id });
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for parsing a city id from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid city id: {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CityId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CityId::new(s)
    }
}

impl TryFrom<String> for CityId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CityId::new(value)
    }
}

impl From<CityId> for String {
    fn from(id: CityId) -> Self {
        id.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_id_display() {
        let id = CityId::new("jaipur").unwrap();
        assert_eq!(id.to_string(), "jaipur");
    }

    #[test]
    fn city_id_from_str() {
        let id: CityId = "varanasi".parse().unwrap();
        assert_eq!(id.as_str(), "varanasi");
    }

    #[test]
    fn city_id_rejects_blank() {
        assert!("".parse::<CityId>().is_err());
        assert!("   ".parse::<CityId>().is_err());
    }

    #[test]
    fn city_id_deserialize_rejects_blank() {
        let result: Result<CityId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
        let id: CityId = serde_json::from_str("\"kochi\"").unwrap();
        assert_eq!(id.as_str(), "kochi");
    }
}
