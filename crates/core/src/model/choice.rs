use std::fmt;

use crate::model::QuestionError;

/// Number of choices offered by every question.
pub const CHOICE_COUNT: usize = 3;

/// One of the three answer slots of a question, numbered 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Choice(u8);

impl Choice {
    pub const FIRST: Choice = Choice(1);
    pub const SECOND: Choice = Choice(2);
    pub const THIRD: Choice = Choice(3);

    /// All choices in display order.
    pub const ALL: [Choice; CHOICE_COUNT] = [Self::FIRST, Self::SECOND, Self::THIRD];

    /// Creates a choice from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::ChoiceOutOfRange` if `number` is not 1, 2 or 3.
    pub fn new(number: u8) -> Result<Self, QuestionError> {
        match number {
            1..=3 => Ok(Self(number)),
            _ => Err(QuestionError::ChoiceOutOfRange(number)),
        }
    }

    /// Returns the 1-based number shown to the user.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns the 0-based slot index.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Choice {
    type Error = QuestionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        choice.0
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_one_to_three() {
        assert_eq!(Choice::new(1).unwrap(), Choice::FIRST);
        assert_eq!(Choice::new(3).unwrap().index(), 2);
        assert_eq!(Choice::new(0), Err(QuestionError::ChoiceOutOfRange(0)));
        assert_eq!(Choice::new(4), Err(QuestionError::ChoiceOutOfRange(4)));
    }

    #[test]
    fn all_is_in_display_order() {
        let numbers: Vec<u8> = Choice::ALL.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
