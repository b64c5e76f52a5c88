use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{NoteCardVm, map_note_cards};

#[component]
pub fn ExplanationView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_service = ctx.quiz_service();

    let resource = use_resource(move || {
        let quiz_service = quiz_service.clone();
        async move {
            let loaded = quiz_service.load_pool().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_note_cards(&loaded.notes))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page explanation-page",
            h2 { "Study notes" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "status", "Loading notes..." }
                },
                ViewState::Ready(cards) if cards.is_empty() => rsx! {
                    p { class: "status", id: "notes-empty", "No study notes in this question set." }
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "note-grid",
                        for (idx, card) in cards.into_iter().enumerate() {
                            NoteCard { key: "{idx}", card }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "status error", "{err.message()}" }
                },
            }

            button {
                class: "btn btn-ghost",
                id: "explanation-back-btn",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::Start {});
                },
                "Back to start"
            }
        }
    }
}

#[component]
fn NoteCard(card: NoteCardVm) -> Element {
    rsx! {
        article { class: "note-card",
            header { class: "note-header",
                if !card.icon.is_empty() {
                    span { class: "note-icon", "{card.icon}" }
                }
                div {
                    h3 { class: "note-title", "{card.title}" }
                    if !card.subtitle.is_empty() {
                        p { class: "note-subtitle", "{card.subtitle}" }
                    }
                }
            }
            if !card.source.is_empty() {
                p { class: "note-source", "{card.source}" }
            }
            for part in card.sections.iter() {
                section { class: "note-section",
                    if !part.heading.is_empty() {
                        h4 { "{part.heading}" }
                    }
                    ul {
                        // Already sanitized by the view-model.
                        for point in part.points_html.iter() {
                            li { dangerous_inner_html: "{point}" }
                        }
                    }
                }
            }
        }
    }
}
