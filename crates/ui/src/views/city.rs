use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::CatalogServiceError;
use tour_core::model::CityId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CityDetailVm, CitySectionVm, map_city_detail};

#[component]
pub fn CityView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();

    let id_for_resource = id.clone();
    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let id = id_for_resource.clone();
        async move {
            let city_id = CityId::new(id).map_err(|_| ViewError::NotFound)?;
            let city = catalog.get_city(&city_id).await.map_err(|err| match err {
                CatalogServiceError::CityNotFound(_) => ViewError::NotFound,
                _ => ViewError::Unknown,
            })?;
            Ok::<_, ViewError>(map_city_detail(&city))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(city) => {
                    let city_id = city.id.clone();
                    rsx! {
                        CityDetails { city }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| {
                                navigator.push(Route::Quiz { city_id: city_id.clone() });
                            },
                            "Take Quiz"
                        }
                    }
                }
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
            br {}
            Link { class: "btn", to: Route::Cities {}, "Back to Cities" }
        }
    }
}

#[component]
fn CityDetails(city: CityDetailVm) -> Element {
    rsx! {
        h2 { "{city.name}" }
        p { "{city.description}" }
        for section in city.sections {
            CitySection { section }
        }
    }
}

#[component]
fn CitySection(section: CitySectionVm) -> Element {
    rsx! {
        h3 { "{section.title}" }
        ul {
            for item in section.items {
                li { "{item}" }
            }
        }
    }
}
