use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, Clock};
use storage::Storage;
use tour_core::ProgressStore;
use tour_core::model::CityId;
use tour_core::time::fixed_now;

use crate::context::{UiApp, build_app_context, use_progress};
use crate::views::{HomeView, TrainBar};

use super::quiz::{QuizHandle, render_quiz, use_quiz};
use super::test_harness::{TEST_CITIES, TEST_QUIZZES, ViewHarness, drive_dom};

#[derive(Clone, Default)]
struct HarnessHandles {
    quiz: Rc<RefCell<Option<QuizHandle>>>,
    progress: Rc<RefCell<Option<Signal<ProgressStore>>>>,
}

impl HarnessHandles {
    fn quiz(&self) -> QuizHandle {
        (*self.quiz.borrow()).expect("quiz registered")
    }

    fn progress(&self) -> Signal<ProgressStore> {
        (*self.progress.borrow()).expect("progress registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<AppServices>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizFlowHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let progress = use_signal(ProgressStore::new);
    use_context_provider(|| progress);
    use_context_provider(|| props.handles.clone());
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
    let handles = use_context::<HarnessHandles>();
    let quiz = use_quiz("jaipur");
    let progress = use_progress();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.quiz.borrow_mut() = Some(quiz);
        *handles.progress.borrow_mut() = Some(progress);
    }
    rsx! {
        {render_quiz("jaipur", quiz)}
        HomeView {}
        TrainBar {}
    }
}

fn setup() -> (ViewHarness, HarnessHandles) {
    let storage = Storage::from_json(TEST_CITIES, TEST_QUIZZES).expect("test catalog");
    let app = Arc::new(AppServices::new(&storage, Clock::fixed(fixed_now())));
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizFlowHarness,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    (ViewHarness { dom }, handles)
}

fn snapshot(harness: &ViewHarness, progress: Signal<ProgressStore>) -> ProgressStore {
    harness.dom.in_runtime(|| progress.read().clone())
}

#[tokio::test(flavor = "current_thread")]
async fn answering_quiz_updates_shared_progress() {
    let (mut harness, handles) = setup();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Which palace has 953 windows?"), "missing prompt in {html}");
    assert!(html.contains("Cities visited: 0 | Total score: 0"), "missing stats in {html}");
    assert!(html.contains("Journey progress: 0/2 cities"), "missing bar in {html}");

    let quiz = handles.quiz();
    let progress = handles.progress();

    // Next without a selection leaves the question on screen.
    harness.dom.in_runtime(|| quiz.on_next.call(()));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 1 / 1"), "quiz moved on in {html}");
    assert_eq!(snapshot(&harness, progress).total_score(), 0);

    harness.dom.in_runtime(|| quiz.on_select.call(0));
    drive_dom(&mut harness.dom);
    harness.dom.in_runtime(|| quiz.on_next.call(()));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("You scored 1 / 1"), "missing score in {html}");
    assert!(html.contains("Back to Cities"), "missing back button in {html}");
    assert!(html.contains("Cities visited: 1 | Total score: 1"), "stats not updated in {html}");
    assert!(html.contains("Journey progress: 1/2 cities"), "bar not updated in {html}");
    assert!(html.contains("calc(50% - 50px)"), "train not moved in {html}");

    let store = snapshot(&harness, progress);
    assert_eq!(store.total_score(), 1);
    assert_eq!(store.visited_count(), 1);
    assert!(store.has_visited(&CityId::new("jaipur").unwrap()));
}

#[tokio::test(flavor = "current_thread")]
async fn finished_quiz_ignores_further_events() {
    let (mut harness, handles) = setup();
    harness.settle().await;

    let quiz = handles.quiz();
    let progress = handles.progress();

    harness.dom.in_runtime(|| quiz.on_select.call(1));
    drive_dom(&mut harness.dom);
    harness.dom.in_runtime(|| quiz.on_next.call(()));
    drive_dom(&mut harness.dom);

    harness.dom.in_runtime(|| {
        quiz.on_select.call(0);
        quiz.on_next.call(());
    });
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("You scored 0 / 1"), "missing score in {html}");
    let store = snapshot(&harness, progress);
    assert_eq!(store.total_score(), 0);
    assert_eq!(store.visited_count(), 1);
}
