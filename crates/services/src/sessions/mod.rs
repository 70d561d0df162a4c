mod progress;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::TourError;
pub use progress::JourneyProgress;
pub use workflow::{QuizLoopService, QuizStep};
