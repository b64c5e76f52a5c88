use quiz_core::QuizPhase;
use serde_json::{Value, json};
use services::PoolStatus;

use super::test_harness::{ViewKind, quiz_vm, setup_view_harness};
use crate::views::ViewError;
use crate::vm::{QuizIntent, QuizVm};

fn quiz_data(count: usize) -> Value {
    let questions: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "question": format!("Q{i}"),
                "options": ["yes", "no"],
                "answer": 0,
                "rationale": "",
            })
        })
        .collect();
    json!({
        "questions": questions,
        "notes": [{
            "icon": "🏹",
            "title": "Archery contest",
            "subtitle": "Classical Japanese",
            "source": "Exam scope",
            "sections": [{
                "heading": "People",
                "points": ["Korechika **turned pale**"],
            }],
        }],
    })
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_renders_pool_size() {
    let mut harness = setup_view_harness(ViewKind::Start, quiz_data(8), None);
    harness.settle().await;

    let html = harness.render();
    let expected = "8 questions available. Each quiz asks 5.";
    assert!(html.contains(expected), "missing {expected} in {html}");
    assert!(html.contains("Start quiz"), "missing start button in {html}");
    assert_eq!(
        harness.quiz_service.pool_status(),
        PoolStatus::Ready { questions: 8 }
    );
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(ViewKind::Start, json!({ "questions": [] }), None);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("load-error"), "missing error block in {html}");
    assert!(
        html.contains("The question data is empty or malformed."),
        "missing error message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_question() {
    let vm = quiz_vm(&[1, 2, 0]);
    let mut harness = setup_view_harness(ViewKind::Quiz, quiz_data(3), Some(vm));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing counter in {html}");
    assert!(
        html.contains("Which rule applies to case 1?"),
        "missing question text in {html}"
    );
    assert!(html.contains("Submit answer"), "missing submit label in {html}");
    assert!(!html.contains("Explanation"), "rationale shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_locked_answer() {
    let mut vm = quiz_vm(&[1, 2, 0]);
    vm.dispatch(QuizIntent::Select(0)).unwrap();
    vm.dispatch(QuizIntent::Primary).unwrap();

    let mut harness = setup_view_harness(ViewKind::Quiz, quiz_data(3), Some(vm));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Incorrect"), "missing verdict in {html}");
    assert!(html.contains("Because of rule 1"), "missing rationale in {html}");
    assert!(html.contains("option correct"), "missing correct style in {html}");
    assert!(html.contains("option incorrect"), "missing incorrect style in {html}");
    assert!(html.contains("Next question"), "missing next label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_without_quiz() {
    let mut harness = setup_view_harness(ViewKind::Quiz, quiz_data(3), None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("No quiz in progress."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_score() {
    let mut vm = quiz_vm(&[0, 1]);
    for choice in [0, 0] {
        vm.dispatch(QuizIntent::Select(choice)).unwrap();
        vm.dispatch(QuizIntent::Primary).unwrap();
        vm.dispatch(QuizIntent::Primary).unwrap();
    }

    let mut harness = setup_view_harness(ViewKind::Result, quiz_data(2), Some(vm));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("You got 1 of 2 correct!"), "missing score in {html}");
    assert!(html.contains("Answered 2 of 2"), "missing answered count in {html}");
    assert!(html.contains("answer-row correct"), "missing correct row in {html}");
    assert!(html.contains("answer-row incorrect"), "missing incorrect row in {html}");
    assert!(html.contains("Try again"), "missing retry in {html}");
    assert!(html.contains("Back to start"), "missing back button in {html}");
}

fn finished_quiz() -> QuizVm {
    let mut vm = quiz_vm(&[0, 1]);
    for choice in [0, 1] {
        vm.dispatch(QuizIntent::Select(choice)).unwrap();
        vm.dispatch(QuizIntent::Primary).unwrap();
        vm.dispatch(QuizIntent::Primary).unwrap();
    }
    vm
}

#[tokio::test(flavor = "current_thread")]
async fn try_again_replaces_finished_quiz_with_fresh_one() {
    let mut harness = setup_view_harness(ViewKind::Result, quiz_data(8), Some(finished_quiz()));
    harness.quiz_service.load_pool().await.unwrap();
    harness.rebuild();
    assert_eq!(
        harness.with_active(|vm| vm.map(QuizVm::phase)),
        Some(QuizPhase::Finished)
    );

    let active = harness.active();
    let service = harness.quiz_service.clone();
    harness.dom.in_runtime(|| active.restart(&service)).unwrap();

    let fresh = harness.with_active(|vm| {
        vm.map(|vm| {
            let session = vm.session();
            (session.score(), session.position(), session.total(), vm.phase())
        })
    });
    assert_eq!(fresh, Some((0, 0, 5, QuizPhase::AwaitingSelection)));
}

#[tokio::test(flavor = "current_thread")]
async fn restart_before_load_keeps_current_quiz() {
    let mut harness = setup_view_harness(ViewKind::Result, quiz_data(8), Some(finished_quiz()));
    harness.rebuild();

    let active = harness.active();
    let service = harness.quiz_service.clone();
    let err = harness.dom.in_runtime(|| active.restart(&service)).unwrap_err();
    assert_eq!(err, ViewError::NotReady);
    assert_eq!(
        harness.with_active(|vm| vm.map(QuizVm::phase)),
        Some(QuizPhase::Finished)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn back_to_start_abandons_quiz() {
    let mut harness = setup_view_harness(ViewKind::Quiz, quiz_data(3), Some(quiz_vm(&[0, 1])));
    harness.rebuild();
    assert!(harness.with_active(|vm| vm.is_some()));

    let active = harness.active();
    harness.dom.in_runtime(|| active.clear());
    assert!(harness.with_active(|vm| vm.is_none()));
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_drops_quiz_in_progress() {
    let mut harness = setup_view_harness(ViewKind::Start, quiz_data(3), Some(quiz_vm(&[0, 1])));
    harness.settle().await;

    assert!(harness.with_active(|vm| vm.is_none()));
}

#[tokio::test(flavor = "current_thread")]
async fn explanation_view_smoke_renders_note_cards() {
    let mut harness = setup_view_harness(ViewKind::Explanation, quiz_data(2), None);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Archery contest"), "missing title in {html}");
    assert!(html.contains("People"), "missing heading in {html}");
    assert!(
        html.contains("<strong>turned pale</strong>"),
        "missing rendered markdown in {html}"
    );
}
