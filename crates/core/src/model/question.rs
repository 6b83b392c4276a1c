use thiserror::Error;

use crate::model::Choice;
use crate::model::choice::CHOICE_COUNT;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("choice must be 1, 2 or 3 (got {0})")]
    ChoiceOutOfRange(u8),

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("choice {0} cannot be empty")]
    EmptyChoice(Choice),
}

/// A single three-choice quiz question.
///
/// Immutable once built; a session only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: [String; CHOICE_COUNT],
    correct: Choice,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyChoice` when
    /// the prompt or any choice is blank after trimming.
    pub fn new(
        prompt: impl Into<String>,
        choices: [String; CHOICE_COUNT],
        correct: Choice,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        for choice in Choice::ALL {
            if choices[choice.index()].trim().is_empty() {
                return Err(QuestionError::EmptyChoice(choice));
            }
        }

        Ok(Self {
            prompt,
            choices,
            correct,
        })
    }

    /// Builds a question from built-in text that is known to be valid.
    pub(crate) fn from_static(
        prompt: &str,
        choices: [&str; CHOICE_COUNT],
        correct: Choice,
    ) -> Self {
        Self {
            prompt: prompt.to_string(),
            choices: choices.map(str::to_string),
            correct,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String; CHOICE_COUNT] {
        &self.choices
    }

    /// Text of the given choice.
    #[must_use]
    pub fn choice_text(&self, choice: Choice) -> &str {
        &self.choices[choice.index()]
    }

    #[must_use]
    pub fn correct_choice(&self) -> Choice {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, choice: Choice) -> bool {
        self.correct == choice
    }
}
