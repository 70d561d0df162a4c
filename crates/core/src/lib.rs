#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;
pub mod session;
pub mod time;

pub use error::Error;
pub use progress::{ProgressStore, progress_ratio};
pub use session::{Advance, QuizOutcome, QuizPhase, QuizSession, SelectError};
pub use time::Clock;
