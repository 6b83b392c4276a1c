use quiz_core::model::Choice;
use quiz_core::rank::percentage;
use quiz_core::RankResult;

use super::service::QuizSession;

/// How a choice should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Unmarked,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView<'a> {
    pub choice: Choice,
    pub text: &'a str,
    pub mark: ChoiceMark,
}

/// Everything a renderer needs to draw the active question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// 1-based, for display.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub choices: Vec<ChoiceView<'a>>,
    pub answered: bool,
    pub is_last: bool,
    pub score: usize,
}

/// A question the player got wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MistakeView<'a> {
    pub prompt: &'a str,
    pub chosen: &'a str,
    pub correct: &'a str,
}

/// End-of-session summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<'a> {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub rank: RankResult,
    pub mistakes: Vec<MistakeView<'a>>,
}

/// Mark for `choice` given the question's correct answer and the selection.
///
/// Nothing is marked until an answer is in; after that the correct choice is
/// always marked, plus the selected one if it was wrong.
#[must_use]
pub fn choice_mark(choice: Choice, correct: Choice, selected: Option<Choice>) -> ChoiceMark {
    match selected {
        None => ChoiceMark::Unmarked,
        Some(_) if choice == correct => ChoiceMark::Correct,
        Some(picked) if picked == choice => ChoiceMark::Wrong,
        Some(_) => ChoiceMark::Unmarked,
    }
}

impl QuizSession {
    /// Read-only snapshot of the current question.
    #[must_use]
    pub fn question_view(&self) -> QuestionView<'_> {
        let question = self.current_question();
        let correct = question.correct_choice();
        let selected = self.selected();
        let choices = Choice::ALL
            .into_iter()
            .map(|choice| ChoiceView {
                choice,
                text: question.choice_text(choice),
                mark: choice_mark(choice, correct, selected),
            })
            .collect();

        QuestionView {
            number: self.current_position() + 1,
            total: self.total(),
            prompt: question.prompt(),
            choices,
            answered: selected.is_some(),
            is_last: self.is_last_question(),
            score: self.score(),
        }
    }

    /// Summary of a finished session, `None` while still in progress.
    #[must_use]
    pub fn result_view(&self) -> Option<ResultView<'_>> {
        let rank = self.rank()?;
        let mistakes = self
            .answers()
            .iter()
            .filter(|record| !record.was_correct)
            .map(|record| {
                let question = &self.order()[record.position];
                MistakeView {
                    prompt: question.prompt(),
                    chosen: question.choice_text(record.chosen),
                    correct: question.choice_text(record.correct),
                }
            })
            .collect();

        Some(ResultView {
            score: self.score(),
            total: self.total(),
            percentage: percentage(self.score(), self.total()),
            rank,
            mistakes,
        })
    }
}
