mod city_vm;
mod progress_vm;
mod quiz_vm;

pub use city_vm::{CityDetailVm, CityListItemVm, CitySectionVm, map_city_detail, map_city_list};
pub use progress_vm::{HomeStatsVm, TrainBarVm};
pub use quiz_vm::{OptionVm, QuestionVm, QuizVm, start_quiz};
