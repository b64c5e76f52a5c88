use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ExplanationView, QuizView, ResultView, StartView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StartView)] Start {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/result", ResultView)] Results {},
        #[route("/explanation", ExplanationView)] Explanation {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                Link { class: "app-title", to: Route::Start {}, "Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
