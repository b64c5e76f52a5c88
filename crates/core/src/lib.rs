#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Grading, InvalidDataError, NextStep, NoteSection, OptionStyle, QUIZ_COUNT, Question,
    QuestionError, QuestionPool, QuestionRecord, QuizPhase, QuizProgress, QuizSession,
    QuizSummary, RecordedAnswer, SessionError, StudyNote, parse_notes,
};
