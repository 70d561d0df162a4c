use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, Clock};
use storage::Storage;
use tour_core::ProgressStore;
use tour_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{CityListView, CityView, HomeView, QuizView, TrainBar};

pub const TEST_CITIES: &str = r#"[
    {"id": "jaipur", "name": "Jaipur", "tagline": "The Pink City",
     "description": "Founded in 1727.", "food": ["Ghewar"], "art": ["Blue pottery"]},
    {"id": "leh", "name": "Leh", "tagline": "Land of high passes"}
]"#;

pub const TEST_QUIZZES: &str = r#"[
    {"cityId": "jaipur", "questions": [
        {"question": "Which palace has 953 windows?", "options": ["Hawa Mahal", "City Palace"], "correctIndex": 0}
    ]}
]"#;

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Cities,
    City(String),
    Quiz(String),
    TrainBar,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    progress: ProgressStore,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let progress = use_signal(|| props.progress.clone());
    use_context_provider(|| progress);
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Cities => rsx! { CityListView {} },
        ViewKind::City(id) => rsx! { CityView { id } },
        ViewKind::Quiz(city_id) => rsx! { QuizView { city_id } },
        ViewKind::TrainBar => rsx! { TrainBar {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let resources resolve and their follow-up renders run.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, progress: ProgressStore) -> ViewHarness {
    let storage = Storage::from_json(TEST_CITIES, TEST_QUIZZES).expect("test catalog");
    let app = Arc::new(AppServices::new(&storage, Clock::fixed(fixed_now())));

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            progress,
        },
    );

    ViewHarness { dom }
}
