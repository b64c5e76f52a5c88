mod notes_vm;
mod quiz_vm;

pub use notes_vm::{
    NoteCardVm, NoteSectionVm, map_note_cards, markdown_to_html, sanitize_html,
};
pub use quiz_vm::{
    AnswerRowVm, OptionVm, PrimaryAction, QuizIntent, QuizOutcome, QuizScreenVm, QuizVm,
    ResultScreenVm, score_label, start_quiz,
};
