mod bank;
mod choice;
mod question;

pub use bank::{BankError, QuestionBank};
pub use choice::{CHOICE_COUNT, Choice};
pub use question::{Question, QuestionError};
