use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, ScoreResult, Word},
};

/// Everything one user works on between opening the page and leaving it.
///
/// Transitions are methods so the lifecycle rules live in one place:
/// a new quiz wipes answers and the previous score, answers are
/// finalized by submission, and nothing here talks to the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub extracted_words: Vec<Word>,
    pub words: Vec<Word>,
    pub quiz: Option<Quiz>,
    pub user_answers: BTreeMap<usize, String>,
    pub submitted: bool,
    pub score: Option<ScoreResult>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            extracted_words: Vec::new(),
            words: Vec::new(),
            quiz: None,
            user_answers: BTreeMap::new(),
            submitted: false,
            score: None,
            created_at: now,
            modified_at: now,
        }
    }

    /// A fresh extraction becomes both the editable base list and the working list.
    pub fn set_extracted_words(&mut self, words: Vec<Word>) {
        self.extracted_words = words.clone();
        self.words = words;
        self.touch();
    }

    pub fn replace_words(&mut self, words: Vec<Word>) {
        self.words = words;
        self.touch();
    }

    pub fn install_quiz(&mut self, quiz: Quiz) {
        self.quiz = Some(quiz);
        self.user_answers.clear();
        self.submitted = false;
        self.score = None;
        self.touch();
    }

    pub fn record_answer(&mut self, index: usize, answer: String) -> AppResult<()> {
        let quiz = self
            .quiz
            .as_ref()
            .ok_or_else(|| AppError::Conflict("No quiz has been generated yet".to_string()))?;

        if self.submitted {
            return Err(AppError::Conflict(
                "Answers are final once the quiz is submitted".to_string(),
            ));
        }

        if index >= quiz.len() {
            return Err(AppError::ValidationError(format!(
                "Question index {} is out of range (quiz has {} questions)",
                index,
                quiz.len()
            )));
        }

        self.user_answers.insert(index, answer);
        self.touch();
        Ok(())
    }

    pub fn mark_submitted(&mut self, score: ScoreResult) {
        self.submitted = true;
        self.score = Some(score);
        self.touch();
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
