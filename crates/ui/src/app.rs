use dioxus::prelude::*;
use dioxus_router::Router;
use tour_core::ProgressStore;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // One progress store for the whole app session; views read it through context.
    let progress = use_signal(ProgressStore::new);
    use_context_provider(|| progress);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Train Through India" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
