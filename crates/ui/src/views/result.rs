use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{ActiveQuiz, AppContext};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::ResultScreenVm;

#[component]
pub fn ResultView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveQuiz>();
    let navigator = use_navigator();
    let quiz_service = ctx.quiz_service();
    let mut restart_error = use_signal(|| None::<ViewError>);

    let screen = active.0.read().as_ref().and_then(|vm| vm.result_screen());

    let on_retry = use_callback(move |()| match active.restart(&quiz_service) {
        Ok(()) => {
            restart_error.set(None);
            navigator.push(Route::Quiz {});
        }
        Err(err) => {
            tracing::error!(?err, "could not restart quiz");
            restart_error.set(Some(err));
        }
    });

    let on_home = use_callback(move |()| {
        active.clear();
        navigator.push(Route::Start {});
    });

    rsx! {
        div { class: "page result-page",
            h2 { "Result" }

            if let Some(screen) = screen {
                ResultSummary { screen }
            } else {
                p { class: "status", "No finished quiz yet." }
            }

            if let Some(err) = restart_error() {
                p { class: "error", "{err.message()}" }
            }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    id: "retry-btn",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
                button {
                    class: "btn btn-secondary",
                    id: "result-explanation-btn",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Explanation {});
                    },
                    "Study notes"
                }
                button {
                    class: "btn btn-ghost",
                    id: "back-to-start-btn",
                    r#type: "button",
                    onclick: move |_| on_home.call(()),
                    "Back to start"
                }
            }
        }
    }
}

#[component]
fn ResultSummary(screen: ResultScreenVm) -> Element {
    rsx! {
        p { class: "score", id: "score-text", "{screen.score_label}" }
        p { class: "status", id: "answered-text", "{screen.answered_label}" }
        ul { class: "answer-list", id: "answer-list",
            for (idx, row) in screen.rows.into_iter().enumerate() {
                li { key: "{idx}", class: "{row.class}",
                    span { class: "answer-label", "{row.label}" }
                    span { class: "answer-verdict", "{row.verdict}" }
                }
            }
        }
    }
}
