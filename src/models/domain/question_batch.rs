use std::fmt;

use crate::models::domain::{Question, QuestionType};

/// Something wrong with one entry (or the size) of a generated batch.
/// These are reported back to the user instead of failing the whole quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchIssue {
    pub question_type: QuestionType,
    pub position: Option<usize>,
    pub reason: String,
}

impl fmt::Display for BatchIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "type {} question {}: {}",
                self.question_type,
                position + 1,
                self.reason
            ),
            None => write!(f, "type {}: {}", self.question_type, self.reason),
        }
    }
}

/// The validated result of one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBatch {
    pub question_type: QuestionType,
    pub requested: usize,
    pub questions: Vec<Question>,
    pub issues: Vec<BatchIssue>,
}

impl QuestionBatch {
    pub fn new(question_type: QuestionType, requested: usize) -> Self {
        Self {
            question_type,
            requested,
            questions: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn note(&mut self, position: Option<usize>, reason: impl Into<String>) {
        self.issues.push(BatchIssue {
            question_type: self.question_type,
            position,
            reason: reason.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_render_one_based_positions() {
        let mut batch = QuestionBatch::new(QuestionType::B, 2);
        batch.note(Some(0), "missing field `answer`");
        batch.note(None, "requested 2 questions, kept 1");

        let rendered: Vec<String> = batch.issues.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "type B question 1: missing field `answer`",
                "type B: requested 2 questions, kept 1"
            ]
        );
    }
}
