use tour_core::ProgressStore;

/// Snapshot of the whole journey, used by the landing view and the train bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JourneyProgress {
    pub visited: usize,
    pub total: usize,
    pub total_score: u64,
    pub ratio: f64,
}

impl JourneyProgress {
    #[must_use]
    pub fn from_store(store: &ProgressStore, total: usize) -> Self {
        Self {
            visited: store.visited_count(),
            total,
            total_score: store.total_score(),
            ratio: store.ratio(total),
        }
    }

    /// Ratio as a percentage in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}
