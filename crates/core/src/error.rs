use thiserror::Error;

use crate::model::{CityError, ParseIdError, QuizError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    CityId(#[from] ParseIdError),
    #[error(transparent)]
    City(#[from] CityError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
