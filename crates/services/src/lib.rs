#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::RandomSource;

pub use error::SessionError;
pub use sessions::{
    Advance, AnswerRecord, ChoiceMark, ChoiceView, MistakeView, QuestionView, QuizSession,
    ResultView, SessionProgress,
};
