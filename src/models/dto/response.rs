use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::domain::{AnswerKey, QuestionType, Quota, QuizPlan, ScoreResult, Session, Word},
    services::{answer_grader, quiz_planner},
};

/// A question as shown to the user. The key, explanation and verdict stay
/// hidden until the quiz is submitted.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub index: usize,
    pub question_type: QuestionType,
    pub prompt: String,
    pub choices: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<AnswerKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub id: Uuid,
    pub extracted_words: Vec<Word>,
    pub words: Vec<Word>,
    pub word_count: usize,
    pub planned_question_count: usize,
    pub questions: Vec<QuestionDto>,
    pub answers: BTreeMap<usize, String>,
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreResult>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        let verdicts = match (&session.quiz, session.submitted) {
            (Some(quiz), true) => Some(answer_grader::grade_quiz(quiz, &session.user_answers)),
            _ => None,
        };

        let questions = session
            .quiz
            .map(|quiz| {
                quiz.questions
                    .into_iter()
                    .enumerate()
                    .map(|(index, question)| {
                        let correct = verdicts.as_ref().and_then(|v| v.get(index).copied());
                        let revealed = correct.is_some();
                        QuestionDto {
                            index,
                            question_type: question.question_type,
                            prompt: question.prompt,
                            choices: question.choices,
                            answer: revealed.then_some(question.answer),
                            explanation: revealed.then_some(question.explanation),
                            correct,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        SessionDto {
            id: session.id,
            word_count: session.words.len(),
            planned_question_count: quiz_planner::total_for_words(&session.words),
            extracted_words: session.extracted_words,
            words: session.words,
            questions,
            answers: session.user_answers,
            submitted: session.submitted,
            score: session.score,
            created_at: session.created_at,
            modified_at: session.modified_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizPlanDto {
    pub total: usize,
    pub quotas: Vec<Quota>,
}

impl From<&QuizPlan> for QuizPlanDto {
    fn from(plan: &QuizPlan) -> Self {
        QuizPlanDto {
            total: plan.total(),
            quotas: plan.quotas(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuizResponse {
    pub plan: QuizPlanDto,
    pub question_count: usize,
    pub warnings: Vec<String>,
    pub session: SessionDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub correct: usize,
    pub total: usize,
    pub message: String,
    pub session: SessionDto,
}

impl SubmissionResponse {
    pub fn new(score: ScoreResult, session: SessionDto) -> Self {
        SubmissionResponse {
            correct: score.correct,
            total: score.total,
            message: format!("Score: {} / {}", score.correct, score.total),
            session,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub message: String,
}
