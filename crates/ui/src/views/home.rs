use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::use_progress;
use crate::routes::Route;
use crate::vm::HomeStatsVm;

#[component]
pub fn HomeView() -> Element {
    let progress = use_progress();
    let stats = HomeStatsVm::from(&*progress.read());

    rsx! {
        div { class: "page",
            h1 { "Train Through India" }
            p { "Explore Indian cities through a virtual train journey and fun quizzes." }
            p { class: "home-stats", "{stats.label}" }
            Link { class: "btn", to: Route::Cities {}, "Start Journey" }
        }
    }
}
