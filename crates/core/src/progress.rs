//! Session-wide tour progress: accumulated score and the set of visited cities.

use std::collections::BTreeSet;

use crate::model::CityId;

/// Accumulates score and visited cities for the lifetime of the app session.
///
/// The store only grows. Its fields are private so `add_score` and
/// `mark_visited` are the only write surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    total_score: u64,
    visited: BTreeSet<CityId>,
}

impl ProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` points to the running total.
    pub fn add_score(&mut self, delta: u32) {
        self.total_score = self.total_score.saturating_add(u64::from(delta));
    }

    /// Records a visit. Returns `true` if the city was not visited before.
    pub fn mark_visited(&mut self, city_id: CityId) -> bool {
        self.visited.insert(city_id)
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Visited cities in a stable (sorted) order.
    pub fn visited(&self) -> impl Iterator<Item = &CityId> {
        self.visited.iter()
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[must_use]
    pub fn has_visited(&self, city_id: &CityId) -> bool {
        self.visited.contains(city_id)
    }

    /// Visited fraction of a catalog holding `total_cities` cities.
    #[must_use]
    pub fn ratio(&self, total_cities: usize) -> f64 {
        progress_ratio(self.visited_count(), total_cities)
    }
}

/// Fraction of cities visited, in `[0, 1]`.
///
/// An empty catalog yields `0.0` instead of dividing by zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_ratio(visited: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (visited as f64 / total as f64).clamp(0.0, 1.0)
}
