mod progress;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{Advance, AnswerRecord, QuizSession};
pub use view::{ChoiceMark, ChoiceView, MistakeView, QuestionView, ResultView, choice_mark};
