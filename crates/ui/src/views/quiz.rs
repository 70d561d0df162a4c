use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tour_core::Advance;
use tracing::{debug, warn};

use crate::context::{AppContext, use_progress};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuestionVm, QuizVm, start_quiz};

#[derive(Clone, Debug, PartialEq)]
enum QuizScreen {
    Loading,
    Error(ViewError),
    Question(QuestionVm),
    Finished { score_label: String },
}

/// Running quiz for one city plus the handlers that drive it.
///
/// `on_next` writes the completed result into the shared progress store.
#[derive(Clone, Copy)]
pub(crate) struct QuizHandle {
    vm: Signal<Option<QuizVm>>,
    resource: Resource<Result<(), ViewError>>,
    pub(crate) on_select: Callback<usize>,
    pub(crate) on_next: Callback<()>,
    on_back: Callback<()>,
}

impl QuizHandle {
    fn screen(&self) -> QuizScreen {
        match view_state_from_resource(&self.resource) {
            ViewState::Idle | ViewState::Loading => QuizScreen::Loading,
            ViewState::Error(err) => QuizScreen::Error(err),
            ViewState::Ready(()) => {
                let vm_guard = self.vm.read();
                match vm_guard.as_ref() {
                    None => QuizScreen::Loading,
                    Some(quiz) => match (quiz.score_label(), quiz.question()) {
                        (Some(score_label), _) => QuizScreen::Finished { score_label },
                        (None, Some(question)) => QuizScreen::Question(question),
                        (None, None) => QuizScreen::Error(ViewError::Unknown),
                    },
                }
            }
        }
    }
}

pub(crate) fn use_quiz(city_id: &str) -> QuizHandle {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let navigator = use_navigator();
    let progress = use_progress();
    let vm = use_signal(|| None::<QuizVm>);

    let quiz_loop_for_resource = quiz_loop.clone();
    let city_id_for_resource = city_id.to_owned();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let city_id = city_id_for_resource.clone();
        let mut vm = vm;

        async move {
            let started = start_quiz(&quiz_loop, &city_id).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let on_select = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |option: usize| {
            let mut vm = vm;
            if let Some(vm) = vm.write().as_mut() {
                if vm.select(&quiz_loop, option).is_err() {
                    warn!(option, "rejected quiz selection");
                }
            }
        })
    };

    let on_next = use_callback(move |()| {
        let mut vm = vm;
        let mut progress = progress;
        let mut store = progress.write();
        if let Some(vm) = vm.write().as_mut() {
            let step = vm.advance(&quiz_loop, &mut store);
            if step.advance == Advance::NoSelection {
                debug!("next pressed without a selection");
            }
        }
    });

    let on_back = use_callback(move |()| {
        navigator.push(Route::Cities {});
    });

    QuizHandle {
        vm,
        resource,
        on_select,
        on_next,
        on_back,
    }
}

pub(crate) fn render_quiz(city_id: &str, quiz: QuizHandle) -> Element {
    let screen = quiz.screen();
    let on_select = quiz.on_select;
    let on_next = quiz.on_next;
    let on_back = quiz.on_back;
    let heading = format!("Quiz – {}", city_id.to_uppercase());

    rsx! {
        div { class: "page",
            h2 { "{heading}" }

            match screen {
                QuizScreen::Loading => rsx! {
                    p { "Loading..." }
                },
                QuizScreen::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                QuizScreen::Question(question) => rsx! {
                    p { class: "quiz-progress", "{question.progress_label}" }
                    p { class: "quiz-prompt", "{question.prompt}" }
                    ul { class: "quiz-options",
                        for option in question.options {
                            li { key: "{option.index}",
                                label {
                                    input {
                                        r#type: "radio",
                                        name: "option",
                                        checked: option.selected,
                                        onchange: move |_| on_select.call(option.index),
                                    }
                                    " {option.label}"
                                }
                            }
                        }
                    }
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: !question.can_advance,
                        onclick: move |_| on_next.call(()),
                        "Next"
                    }
                },
                QuizScreen::Finished { score_label } => rsx! {
                    p { class: "quiz-score", "{score_label}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_back.call(()),
                        "Back to Cities"
                    }
                },
            }
        }
    }
}

#[component]
pub fn QuizView(city_id: String) -> Element {
    let quiz = use_quiz(&city_id);
    render_quiz(&city_id, quiz)
}
