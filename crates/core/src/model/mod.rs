mod notes;
mod pool;
mod question;
mod session;

pub use notes::{NoteSection, StudyNote, parse_notes};
pub use pool::{InvalidDataError, QUIZ_COUNT, QuestionPool};
pub use question::{Question, QuestionError, QuestionRecord};
pub use session::{
    Grading, NextStep, OptionStyle, QuizPhase, QuizProgress, QuizSession, QuizSummary,
    RecordedAnswer, SessionError,
};
