use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The five fixed question formats. Declaration order is the allocation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema,
)]
pub enum QuestionType {
    A, // multiple choice, meaning of a word
    B, // multiple choice, meaning of a word inside an example sentence
    C, // multiple choice, fill in the blank
    D, // free text, definition to word
    E, // free text, fill in the blank
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::A,
        QuestionType::B,
        QuestionType::C,
        QuestionType::D,
        QuestionType::E,
    ];

    pub fn letter(self) -> &'static str {
        match self {
            QuestionType::A => "A",
            QuestionType::B => "B",
            QuestionType::C => "C",
            QuestionType::D => "D",
            QuestionType::E => "E",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "A" => Some(QuestionType::A),
            "B" => Some(QuestionType::B),
            "C" => Some(QuestionType::C),
            "D" => Some(QuestionType::D),
            "E" => Some(QuestionType::E),
            _ => None,
        }
    }

    /// Position in [`QuestionType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn expects_choices(self) -> bool {
        matches!(self, QuestionType::A | QuestionType::B | QuestionType::C)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Either one free-text answer or the set of choice strings that count as correct.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum AnswerKey {
    Single(String),
    MultipleAcceptable(Vec<String>),
}

impl AnswerKey {
    /// A key nobody could ever match: blank string, empty list, or a list with a blank entry.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerKey::Single(answer) => answer.trim().is_empty(),
            AnswerKey::MultipleAcceptable(answers) => {
                answers.is_empty() || answers.iter().any(|a| a.trim().is_empty())
            }
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::Single(answer) => f.write_str(answer),
            AnswerKey::MultipleAcceptable(answers) => f.write_str(&answers.join(", ")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question_type: QuestionType,
    pub prompt: String,
    pub choices: Option<Vec<String>>, // None renders as free text
    pub answer: AnswerKey,
    pub explanation: String,
}

impl Question {
    pub fn is_multiple_choice(&self) -> bool {
        self.choices.is_some()
    }
}
