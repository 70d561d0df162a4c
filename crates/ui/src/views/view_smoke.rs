use tour_core::ProgressStore;
use tour_core::model::CityId;

use super::test_harness::{ViewKind, setup_view_harness};

fn visited_jaipur() -> ProgressStore {
    let mut store = ProgressStore::new();
    store.add_score(3);
    store.mark_visited(CityId::new("jaipur").unwrap());
    store
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_progress_totals() {
    let mut harness = setup_view_harness(ViewKind::Home, visited_jaipur());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Train Through India"), "missing title in {html}");
    let expected = "Cities visited: 1 | Total score: 3";
    assert!(html.contains(expected), "missing {expected} in {html}");
    assert!(html.contains("Start Journey"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn city_list_smoke_renders_name_and_tagline() {
    let mut harness = setup_view_harness(ViewKind::Cities, ProgressStore::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Select a City"), "missing heading in {html}");
    assert!(html.contains("Jaipur – The Pink City"), "missing city in {html}");
    assert!(html.contains("Leh – Land of high passes"), "missing city in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn city_view_smoke_renders_sections() {
    let mut harness = setup_view_harness(ViewKind::City("jaipur".into()), ProgressStore::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Founded in 1727."), "missing description in {html}");
    assert!(html.contains("Art &amp; Crafts") || html.contains("Art & Crafts"), "missing section in {html}");
    assert!(html.contains("Blue pottery"), "missing item in {html}");
    assert!(html.contains("Take Quiz"), "missing quiz button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn city_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::City("atlantis".into()), ProgressStore::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("City not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("jaipur".into()), ProgressStore::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quiz – JAIPUR"), "missing heading in {html}");
    assert!(html.contains("Which palace has 953 windows?"), "missing prompt in {html}");
    assert!(html.contains("Hawa Mahal"), "missing option in {html}");
    assert!(html.contains("Question 1 / 1"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_missing_quiz() {
    let mut harness = setup_view_harness(ViewKind::Quiz("leh".into()), ProgressStore::new());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No quiz for this city."), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn train_bar_smoke_renders_journey_label() {
    let mut harness = setup_view_harness(ViewKind::TrainBar, visited_jaipur());
    harness.settle().await;
    let html = harness.render();
    let expected = "Journey progress: 1/2 cities";
    assert!(html.contains(expected), "missing {expected} in {html}");
    assert!(html.contains("calc(50% - 50px)"), "missing offset in {html}");
}
