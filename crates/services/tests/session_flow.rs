use std::sync::Arc;

use quiz_core::model::{Choice, QuestionBank};
use quiz_core::{RandomSource, RankTier};
use services::{Advance, ChoiceMark, QuizSession, SessionError};

fn answer_all(session: &mut QuizSession, pick_correct: impl Fn(usize) -> bool) {
    while !session.is_finished() {
        let position = session.current_position();
        let question = session.current_question();
        let choice = if pick_correct(position) {
            question.correct_choice()
        } else {
            Choice::ALL
                .into_iter()
                .find(|c| !question.is_correct(*c))
                .unwrap()
        };
        session.select_answer(choice).unwrap();
        session.advance().unwrap();
    }
}

#[test]
fn full_session_then_restart() {
    let bank = Arc::new(QuestionBank::reference());
    let mut session = QuizSession::new(Arc::clone(&bank), RandomSource::seeded(42));

    answer_all(&mut session, |position| position % 2 == 0);

    let result = session.result_view().unwrap();
    assert_eq!(result.score, 5);
    assert_eq!(result.total, 10);
    assert_eq!(result.rank.tier, RankTier::Fair);
    assert_eq!(result.mistakes.len(), 5);

    session.restart();
    assert!(!session.is_finished());
    assert_eq!(session.progress().answered, 0);
    assert_eq!(session.question_view().number, 1);

    answer_all(&mut session, |_| true);
    assert_eq!(session.rank().unwrap().tier, RankTier::Doctor);
}

#[test]
fn double_click_counts_once() {
    let bank = Arc::new(QuestionBank::reference());
    let mut session = QuizSession::new(bank, RandomSource::seeded(7));
    let correct = session.current_question().correct_choice();

    session.select_answer(correct).unwrap();
    let second = session.select_answer(correct);

    assert_eq!(second.unwrap_err(), SessionError::AlreadyAnswered { position: 0 });
    assert_eq!(session.score(), 1);
    let view = session.question_view();
    assert_eq!(view.choices[correct.index()].mark, ChoiceMark::Correct);
    assert_eq!(session.advance().unwrap(), Advance::Next { position: 1 });
}

#[test]
fn same_seed_replays_same_order() {
    let bank = Arc::new(QuestionBank::reference());
    let a = QuizSession::new(Arc::clone(&bank), RandomSource::seeded(1234));
    let b = QuizSession::new(Arc::clone(&bank), RandomSource::seeded(1234));
    assert_eq!(a.order(), b.order());
}

#[test]
fn custom_bank_from_json() {
    let raw = r#"[
        { "prompt": "Largest planet?", "choices": ["Mars", "Jupiter", "Venus"], "correct_choice": 2 },
        { "prompt": "H2O is?", "choices": ["Water", "Salt", "Air"], "correct_choice": 1 }
    ]"#;
    let bank = Arc::new(QuestionBank::from_json_str(raw).unwrap());
    let mut session = QuizSession::new(bank, RandomSource::seeded(3));
    assert_eq!(session.total(), 2);

    answer_all(&mut session, |position| position == 0);
    assert_eq!(session.score(), 1);
    assert_eq!(session.rank().unwrap().tier, RankTier::Fair);
}
