use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Choice, Question, QuestionBank};
use quiz_core::{RandomSource, RankResult, rank};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// A locked-in answer for one question of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    /// 0-based position in the shuffled order.
    pub position: usize,
    pub chosen: Choice,
    pub correct: Choice,
    pub was_correct: bool,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Now showing the question at `position` (0-based).
    Next { position: usize },
    /// There were no more questions; the session is over.
    Finished(RankResult),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through a shuffled question bank.
///
/// The order is drawn once when the session starts and again on `restart`,
/// never while answering. Each question accepts exactly one answer, and the
/// session only moves on once that answer is in.
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    random: RandomSource,
    order: Vec<Question>,
    current: usize,
    selected: Option<Choice>,
    score: usize,
    finished: bool,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Start a session over `bank`, shuffling with `random`.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, mut random: RandomSource) -> Self {
        let order = random.shuffled(bank.questions());
        log::info!(
            "quiz session started with {} questions (seeded: {})",
            order.len(),
            random.is_seeded()
        );
        Self {
            bank,
            random,
            order,
            current: 0,
            selected: None,
            score: 0,
            finished: false,
            answers: Vec::new(),
        }
    }

    /// Throw away all progress and start over with a freshly drawn order.
    pub fn restart(&mut self) {
        self.order = self.random.shuffled(self.bank.questions());
        self.current = 0;
        self.selected = None;
        self.score = 0;
        self.finished = false;
        self.answers.clear();
        log::info!("quiz session restarted");
    }

    /// Lock in `choice` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` once the session is over and
    /// `SessionError::AlreadyAnswered` if the current question already has an
    /// answer. Neither changes the session.
    pub fn select_answer(&mut self, choice: Choice) -> Result<&AnswerRecord, SessionError> {
        if self.finished {
            log::warn!("ignoring answer {choice}: session finished");
            return Err(SessionError::Finished);
        }
        if self.selected.is_some() {
            log::warn!(
                "ignoring answer {choice}: question {} already answered",
                self.current
            );
            return Err(SessionError::AlreadyAnswered {
                position: self.current,
            });
        }

        let correct = self.order[self.current].correct_choice();
        let was_correct = correct == choice;
        self.selected = Some(choice);
        if was_correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            position: self.current,
            chosen: choice,
            correct,
            was_correct,
        });
        log::debug!(
            "question {} answered with {choice} (correct: {was_correct}, score: {})",
            self.current,
            self.score
        );

        self.answers.last().ok_or(SessionError::Unanswered {
            position: self.current,
        })
    }

    /// Move past the current, answered question.
    ///
    /// On the last question this finishes the session and leaves the current
    /// question and its answer in place for the result screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` if the session is already over and
    /// `SessionError::Unanswered` if the current question has no answer yet.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.finished {
            log::warn!("ignoring advance: session finished");
            return Err(SessionError::Finished);
        }
        if self.selected.is_none() {
            log::warn!("ignoring advance: question {} not answered", self.current);
            return Err(SessionError::Unanswered {
                position: self.current,
            });
        }

        if self.current + 1 < self.order.len() {
            self.current += 1;
            self.selected = None;
            log::debug!("advanced to question {}", self.current);
            return Ok(Advance::Next {
                position: self.current,
            });
        }

        self.finished = true;
        let result = rank(self.score, self.total());
        log::info!(
            "quiz session finished: {}/{} ({:?})",
            self.score,
            self.total(),
            result.tier
        );
        Ok(Advance::Finished(result))
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.order[self.current]
    }

    /// 0-based position of the current question in the shuffled order.
    #[must_use]
    pub fn current_position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn selected(&self) -> Option<Choice> {
        self.selected
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether advancing from here would finish the session.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.order.len()
    }

    /// The order questions are asked in for this session.
    #[must_use]
    pub fn order(&self) -> &[Question] {
        &self.order
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = self.answered_count();
        SessionProgress {
            total: self.total(),
            answered,
            remaining: self.total().saturating_sub(answered),
            score: self.score,
            is_finished: self.finished,
        }
    }

    /// The final rank, available once the session has finished.
    #[must_use]
    pub fn rank(&self) -> Option<RankResult> {
        self.finished.then(|| rank(self.score, self.total()))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("total", &self.order.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("score", &self.score)
            .field("finished", &self.finished)
            .field("answers_len", &self.answers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::RankTier;
    use quiz_core::random::fixed_seed_source;

    fn build_session() -> QuizSession {
        QuizSession::new(Arc::new(QuestionBank::reference()), fixed_seed_source())
    }

    fn wrong_choice(question: &Question) -> Choice {
        Choice::ALL
            .into_iter()
            .find(|c| *c != question.correct_choice())
            .unwrap()
    }

    /// Answer every question, getting the first `correct` of them right.
    fn play(session: &mut QuizSession, correct: usize) -> Advance {
        let mut last = None;
        for i in 0..session.total() {
            let question = session.current_question();
            let choice = if i < correct {
                question.correct_choice()
            } else {
                wrong_choice(question)
            };
            session.select_answer(choice).unwrap();
            last = Some(session.advance().unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn new_session_starts_fresh() {
        let session = build_session();
        assert_eq!(session.total(), 10);
        assert_eq!(session.current_position(), 0);
        assert_eq!(session.selected(), None);
        assert_eq!(session.score(), 0);
        assert!(!session.is_finished());
        assert!(session.rank().is_none());
    }

    #[test]
    fn order_is_a_permutation_of_the_bank() {
        let bank = QuestionBank::reference();
        let session = build_session();
        assert_eq!(session.order().len(), bank.len());
        for question in bank.questions() {
            assert_eq!(
                session.order().iter().filter(|q| *q == question).count(),
                1
            );
        }
    }

    #[test]
    fn correct_answer_scores_once() {
        let mut session = build_session();
        let correct = session.current_question().correct_choice();

        let record = *session.select_answer(correct).unwrap();
        assert!(record.was_correct);
        assert_eq!(record.position, 0);
        assert_eq!(session.score(), 1);

        let err = session.select_answer(correct).unwrap_err();
        assert_eq!(err, SessionError::AlreadyAnswered { position: 0 });
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn second_answer_does_not_change_selection() {
        let mut session = build_session();
        let wrong = wrong_choice(session.current_question());
        let correct = session.current_question().correct_choice();

        session.select_answer(wrong).unwrap();
        assert!(session.select_answer(correct).is_err());
        assert_eq!(session.selected(), Some(wrong));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = build_session();
        let err = session.advance().unwrap_err();
        assert_eq!(err, SessionError::Unanswered { position: 0 });
        assert_eq!(session.current_position(), 0);
    }

    #[test]
    fn advance_moves_one_step_and_clears_selection() {
        let mut session = build_session();
        session.select_answer(Choice::FIRST).unwrap();
        assert_eq!(session.advance().unwrap(), Advance::Next { position: 1 });
        assert_eq!(session.current_position(), 1);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn advance_on_last_question_finishes_in_place() {
        let mut session = build_session();
        for _ in 0..session.total() - 1 {
            session.select_answer(Choice::SECOND).unwrap();
            session.advance().unwrap();
        }
        assert!(session.is_last_question());
        session.select_answer(Choice::THIRD).unwrap();

        let outcome = session.advance().unwrap();
        assert!(matches!(outcome, Advance::Finished(_)));
        assert!(session.is_finished());
        assert_eq!(session.current_position(), 9);
        assert_eq!(session.selected(), Some(Choice::THIRD));

        assert_eq!(session.advance().unwrap_err(), SessionError::Finished);
        assert_eq!(
            session.select_answer(Choice::FIRST).unwrap_err(),
            SessionError::Finished
        );
        assert_eq!(session.current_position(), 9);
    }

    #[test]
    fn all_correct_is_doctor() {
        let mut session = build_session();
        let outcome = play(&mut session, 10);
        assert_eq!(session.score(), 10);
        let Advance::Finished(result) = outcome else {
            panic!("expected finished, got {outcome:?}");
        };
        assert_eq!(result.tier, RankTier::Doctor);
        assert_eq!(session.rank(), Some(result));
    }

    #[test]
    fn six_correct_is_third_tier() {
        let mut session = build_session();
        play(&mut session, 6);
        assert_eq!(session.score(), 6);
        assert_eq!(session.rank().unwrap().tier, RankTier::Good);
    }

    #[test]
    fn three_correct_is_lowest_tier() {
        let mut session = build_session();
        play(&mut session, 3);
        assert_eq!(session.score(), 3);
        assert_eq!(session.rank().unwrap().tier, RankTier::Novice);
    }

    #[test]
    fn score_never_exceeds_answered() {
        let mut session = build_session();
        for _ in 0..session.total() {
            let correct = session.current_question().correct_choice();
            for _ in 0..3 {
                let _ = session.select_answer(correct);
                assert!(session.score() <= session.answered_count());
            }
            session.advance().unwrap();
        }
        assert_eq!(session.score(), session.total());
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = build_session();
        play(&mut session, 4);
        assert!(session.is_finished());

        session.restart();
        assert_eq!(session.current_position(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected(), None);
        assert!(!session.is_finished());
        assert!(session.answers().is_empty());
        assert_eq!(session.total(), 10);
    }

    #[test]
    fn restart_draws_a_new_order() {
        let mut session = build_session();
        let first = session.order().to_vec();
        let mut changed = false;
        for _ in 0..5 {
            session.restart();
            changed |= session.order() != first.as_slice();
        }
        assert!(changed);
    }

    #[test]
    fn progress_tracks_answers() {
        let mut session = build_session();
        let correct = session.current_question().correct_choice();
        assert!(!session.is_answered());
        session.select_answer(correct).unwrap();
        assert!(session.is_answered());
        let progress = session.progress();
        assert_eq!(progress.total, 10);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, 9);
        assert_eq!(progress.score, 1);
        assert!(!progress.is_finished);
    }
}
