use services::JourneyProgress;
use tour_core::ProgressStore;

/// Half the train icon width, so the icon is centred on the progress point.
const TRAIN_HALF_WIDTH_PX: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct TrainBarVm {
    pub percent: f64,
    /// CSS value for the `--train-x` custom property.
    pub offset: String,
    pub label: String,
}

impl From<&JourneyProgress> for TrainBarVm {
    fn from(journey: &JourneyProgress) -> Self {
        let percent = journey.percent();
        Self {
            percent,
            offset: format!("calc({percent}% - {TRAIN_HALF_WIDTH_PX}px)"),
            label: format!(
                "Journey progress: {}/{} cities",
                journey.visited, journey.total
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeStatsVm {
    pub label: String,
}

impl From<&ProgressStore> for HomeStatsVm {
    fn from(store: &ProgressStore) -> Self {
        Self {
            label: format!(
                "Cities visited: {} | Total score: {}",
                store.visited_count(),
                store.total_score()
            ),
        }
    }
}
