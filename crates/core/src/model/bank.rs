use serde::Deserialize;
use thiserror::Error;

use crate::model::choice::CHOICE_COUNT;
use crate::model::{Choice, Question, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank must contain at least one question")]
    Empty,

    #[error("question #{index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("malformed question bank: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a single question.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    prompt: String,
    choices: [String; CHOICE_COUNT],
    correct_choice: u8,
}

impl QuestionRecord {
    fn validate(self) -> Result<Question, QuestionError> {
        let correct = Choice::new(self.correct_choice)?;
        Question::new(self.prompt, self.choices, correct)
    }
}

/// Ordered, non-empty set of questions a session draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    /// Parse a bank from a JSON array of
    /// `{ "prompt": .., "choices": [.., .., ..], "correct_choice": 1..=3 }`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` for malformed JSON, `BankError::InvalidQuestion`
    /// naming the first bad record, or `BankError::Empty` for an empty array.
    pub fn from_json_str(raw: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .validate()
                    .map_err(|source| BankError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("parsed question bank with {} questions", questions.len());
        Self::new(questions)
    }

    /// The built-in ten question bank.
    #[must_use]
    pub fn reference() -> Self {
        let questions = REFERENCE_QUESTIONS
            .iter()
            .map(|(prompt, choices, correct)| Question::from_static(prompt, *choices, *correct))
            .collect();
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

type StaticQuestion = (&'static str, [&'static str; CHOICE_COUNT], Choice);

const REFERENCE_QUESTIONS: [StaticQuestion; 10] = [
    (
        "しずかちゃんの父親の名前は？",
        ["源義雄（みなもと よしお）", "源高志（みなもと たかし）", "源忠雄（みなもと ただお）"],
        Choice::FIRST,
    ),
    (
        "のび太の父・野比のび助の会社での役職は？",
        ["課長", "課長代理", "社長"],
        Choice::SECOND,
    ),
    (
        "ジャイアンがみんなを集めて開催することといえば？",
        ["ジャイアンコンサート", "ジャイアンフェス", "ジャイアンリサイタル"],
        Choice::THIRD,
    ),
    (
        "劇場版1作目のタイトルは？",
        ["のび太の宇宙開拓史", "のび太の宇宙戦争", "のび太の恐竜"],
        Choice::THIRD,
    ),
    (
        "しずかちゃんは1日に何回お風呂に入る？",
        ["2回", "3回", "5回"],
        Choice::SECOND,
    ),
    (
        "ドラミちゃんの好きな食べ物は？",
        ["メロンパン", "シチュー", "ショートケーキ"],
        Choice::FIRST,
    ),
    (
        "のび太の得意技は？",
        ["昼寝", "あやとり", "ピアノ"],
        Choice::FIRST,
    ),
    (
        "ドラえもんは何ミリ浮いている？",
        ["2.3ミリ", "3ミリ", "3.5ミリ"],
        Choice::SECOND,
    ),
    (
        "タイムマシンが作られたのは？",
        ["2008年", "2058年", "2128年"],
        Choice::FIRST,
    ),
    (
        "ドラえもんの体重は？",
        ["100.0キロ", "129.3キロ", "183.0キロ"],
        Choice::SECOND,
    ),
];
