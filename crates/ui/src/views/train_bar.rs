use dioxus::prelude::*;
use services::JourneyProgress;

use crate::context::{AppContext, use_progress};
use crate::vm::TrainBarVm;

/// Bottom bar showing how far along the line the player is.
#[component]
pub fn TrainBar() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = use_progress();

    let total = use_resource(move || {
        let catalog = catalog.clone();
        async move { catalog.city_count().await }
    });
    let total_cities = total
        .value()
        .read()
        .as_ref()
        .and_then(|value| value.as_ref().ok())
        .copied()
        .unwrap_or(0);
    let bar = TrainBarVm::from(&JourneyProgress::from_store(&progress.read(), total_cities));

    rsx! {
        div { class: "train-track",
            div { class: "train-icon", style: "--train-x: {bar.offset}" }
            div { class: "train-label", "{bar.label}" }
        }
    }
}
