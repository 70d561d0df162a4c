mod city;
mod ids;
mod quiz;

pub use city::{City, CityError, CitySections};
pub use ids::{CityId, ParseIdError};
pub use quiz::{MIN_OPTIONS, Question, Quiz, QuizError};
