use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::ActiveQuiz;
use crate::routes::Route;
use crate::vm::QuizVm;

#[component]
pub fn App() -> Element {
    let active = use_signal(|| None::<QuizVm>);
    use_context_provider(|| ActiveQuiz(active));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Quiz" }

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
