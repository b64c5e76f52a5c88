use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::ActiveQuiz;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{QuizIntent, QuizOutcome, QuizScreenVm};

/// Maps a digit key to an option index ("1" selects the first option).
fn option_index_for_key(key: &str) -> Option<usize> {
    let digit = key.parse::<usize>().ok()?;
    digit.checked_sub(1)
}

#[component]
pub fn QuizView() -> Element {
    let active = use_context::<ActiveQuiz>();
    let navigator = use_navigator();
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut slot = active.0;
        let mut error = error;

        let result = match slot.write().as_mut() {
            Some(vm) => vm.dispatch(intent),
            None => Err(ViewError::NoActiveQuiz),
        };

        match result {
            Ok(QuizOutcome::Continue) => error.set(None),
            Ok(QuizOutcome::Finished(summary)) => {
                tracing::info!(score = summary.score, total = summary.total, "quiz finished");
                error.set(None);
                navigator.push(Route::Results {});
            }
            Err(err) => {
                tracing::error!(?err, ?intent, "quiz intent rejected");
                error.set(Some(err));
            }
        }
    });

    let on_quit = use_callback(move |()| {
        active.clear();
        navigator.push(Route::Start {});
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = evt.data.key().to_string();
        if key == "Enter" {
            evt.prevent_default();
            dispatch_intent.call(QuizIntent::Primary);
            return;
        }
        let option_count = active
            .0
            .read()
            .as_ref()
            .and_then(|vm| vm.screen())
            .map_or(0, |screen| screen.options.len());
        if let Some(index) = option_index_for_key(&key).filter(|i| *i < option_count) {
            evt.prevent_default();
            dispatch_intent.call(QuizIntent::Select(index));
        }
    });

    let screen = active.0.read().as_ref().and_then(|vm| vm.screen());

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: move |evt| on_key.call(evt),
            match screen {
                Some(screen) => rsx! {
                    QuestionBox { screen, on_intent: dispatch_intent }
                    if let Some(err) = error() {
                        p { class: "error", "{err.message()}" }
                    }
                },
                None => rsx! {
                    p { "{ViewError::NoActiveQuiz.message()}" }
                },
            }
            button {
                class: "btn btn-ghost",
                id: "quit-quiz-btn",
                r#type: "button",
                onclick: move |_| on_quit.call(()),
                "Back to start"
            }
        }
    }
}

#[component]
fn QuestionBox(screen: QuizScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let QuizScreenVm {
        counter_label,
        question_text,
        options,
        verdict,
        rationale,
        primary,
        primary_enabled,
    } = screen;
    let locked = verdict.is_some();

    rsx! {
        div { class: "question-box", id: "question-box",
            p { class: "question-counter", id: "question-counter", "{counter_label}" }
            h3 { class: "question-text", id: "question-text", "{question_text}" }
            ul { class: "options-list", id: "options-list",
                for option in options {
                    OptionItem {
                        key: "{option.index}",
                        index: option.index,
                        text: option.text,
                        class: option.class,
                        locked,
                        on_intent,
                    }
                }
            }
            if let Some(verdict) = verdict {
                p { class: "verdict", "{verdict}" }
            }
            if let Some(rationale) = rationale {
                div { class: "rationale",
                    strong { "Explanation" }
                    p { "{rationale}" }
                }
            }
            button {
                class: "btn btn-primary",
                id: "next-button",
                r#type: "button",
                disabled: !primary_enabled,
                onclick: move |_| on_intent.call(QuizIntent::Primary),
                "{primary.label()}"
            }
        }
    }
}

#[component]
fn OptionItem(
    index: usize,
    text: String,
    class: String,
    locked: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        li {
            class: "{class}",
            "data-index": "{index}",
            "aria-disabled": "{locked}",
            onclick: move |_| {
                if !locked {
                    on_intent.call(QuizIntent::Select(index));
                }
            },
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::option_index_for_key;

    #[test]
    fn digit_keys_map_to_zero_based_options() {
        assert_eq!(option_index_for_key("1"), Some(0));
        assert_eq!(option_index_for_key("4"), Some(3));
        assert_eq!(option_index_for_key("0"), None);
        assert_eq!(option_index_for_key("a"), None);
    }
}
