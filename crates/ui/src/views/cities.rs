use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CityListItemVm, map_city_list};

#[component]
pub fn CityListView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let cities = catalog
                .list_cities()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_city_list(&cities))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Select a City" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(items) => rsx! {
                    if items.is_empty() {
                        p { "No cities on this line yet." }
                    } else {
                        ul { class: "city-list",
                            for item in items {
                                CityListItem { item }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            Link { class: "btn", to: Route::Home {}, "Back to Home" }
        }
    }
}

#[component]
fn CityListItem(item: CityListItemVm) -> Element {
    rsx! {
        li {
            Link { to: Route::City { id: item.id.clone() }, "{item.label}" }
        }
    }
}
