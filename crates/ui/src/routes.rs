use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{CityListView, CityView, HomeView, QuizView, TrainBar};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/cities", CityListView)] Cities {},
        #[route("/city/:id", CityView)] City { id: String },
        #[route("/quiz/:city_id", QuizView)] Quiz { city_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "journey",
            main { class: "train-window",
                Outlet::<Route> {}
            }
            TrainBar {}
        }
    }
}
