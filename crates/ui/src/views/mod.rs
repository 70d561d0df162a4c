mod cities;
mod city;
mod home;
mod quiz;
mod state;
mod train_bar;

#[cfg(test)]
mod quiz_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use cities::CityListView;
pub use city::CityView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use train_bar::TrainBar;
