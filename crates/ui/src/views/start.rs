use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{ActiveQuiz, AppContext};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq, Eq)]
struct StartData {
    questions: usize,
    quiz_count: usize,
}

#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveQuiz>();
    let navigator = use_navigator();
    let quiz_service = ctx.quiz_service();
    let mut start_error = use_signal(|| None::<ViewError>);

    let service_for_resource = quiz_service.clone();
    let resource = use_resource(move || {
        let quiz_service = service_for_resource.clone();
        async move {
            let loaded = quiz_service.load_pool().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(StartData {
                questions: loaded.pool.len(),
                quiz_count: quiz_service.quiz_count().min(loaded.pool.len()),
            })
        }
    });
    let state = view_state_from_resource(resource);
    let can_start = matches!(state, ViewState::Ready(_));

    // The start screen never keeps a quiz alive.
    use_effect(move || active.clear());

    let on_start = use_callback(move |()| match active.restart(&quiz_service) {
        Ok(()) => {
            start_error.set(None);
            navigator.push(Route::Quiz {});
        }
        Err(err) => {
            tracing::error!(?err, "could not start quiz");
            start_error.set(Some(err));
        }
    });

    rsx! {
        div { class: "page start-page",
            h2 { "Multiple-choice quiz" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "status", "Loading questions..." }
                },
                ViewState::Ready(data) => rsx! {
                    p { class: "status",
                        "{data.questions} questions available. Each quiz asks {data.quiz_count}."
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "status error", id: "load-error", "{err.message()}" }
                },
            }

            if let Some(err) = start_error() {
                p { class: "error", "{err.message()}" }
            }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    id: "start-quiz-btn",
                    r#type: "button",
                    disabled: !can_start,
                    onclick: move |_| on_start.call(()),
                    "Start quiz"
                }
                button {
                    class: "btn btn-secondary",
                    id: "show-explanation-btn",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Explanation {});
                    },
                    "Study notes"
                }
            }
        }
    }
}
