use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::{Question, QuizSession};
use serde_json::Value;
use services::{QuizService, StaticSource};

use crate::context::{ActiveQuiz, UiApp, build_app_context};
use crate::views::{ExplanationView, QuizView, ResultView, StartView};
use crate::vm::QuizVm;

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Quiz,
    Result,
    Explanation,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    active: Option<QuizVm>,
    active_slot: Rc<Cell<Option<ActiveQuiz>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);

    let initial = props.active.clone();
    let active = use_signal(move || initial);
    let active = use_context_provider(|| ActiveQuiz(active));
    props.active_slot.set(Some(active));

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
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Result => rsx! { ResultView {} },
        ViewKind::Explanation => rsx! { ExplanationView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_service: Arc<QuizService>,
    active_slot: Rc<Cell<Option<ActiveQuiz>>>,
}

impl ViewHarness {
    /// The active-quiz handle provided to the views; available after `rebuild`.
    pub fn active(&self) -> ActiveQuiz {
        self.active_slot.get().expect("harness rendered")
    }

    /// Run `f` against the current active quiz, if any.
    pub fn with_active<O>(&self, f: impl FnOnce(Option<&QuizVm>) -> O) -> O {
        let active = self.active();
        self.dom.in_runtime(|| f(active.0.peek().as_ref()))
    }

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

    /// Rebuild, then let pending resources settle.
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

/// Build a harness whose quiz service serves `data`, optionally with a quiz
/// already in progress.
pub fn setup_view_harness(view: ViewKind, data: Value, active: Option<QuizVm>) -> ViewHarness {
    let quiz_service = Arc::new(QuizService::new(Arc::new(StaticSource::new(data))));
    let app = Arc::new(TestApp {
        quiz_service: Arc::clone(&quiz_service),
    });

    let active_slot = Rc::new(Cell::new(None));
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            active,
            active_slot: Rc::clone(&active_slot),
        },
    );

    ViewHarness {
        dom,
        quiz_service,
        active_slot,
    }
}

/// A quiz over fixed questions, each with options "a", "b", "c".
pub fn quiz_vm(answers: &[usize]) -> QuizVm {
    let sample = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            Question::new(
                format!("Which rule applies to case {}?", i + 1),
                vec!["a".into(), "b".into(), "c".into()],
                *answer,
                format!("Because of rule {}", i + 1),
            )
            .expect("valid question")
        })
        .collect();
    QuizVm::new(QuizSession::start(sample).expect("non-empty sample"))
}
