use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerKey, Question, QuestionBatch, QuestionType},
};

/// Keys every generated question must carry, `choices` included even when null.
pub const REQUIRED_QUESTION_FIELDS: [&str; 5] =
    ["type", "question", "choices", "answer", "explanation"];

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ExtractionPayload {
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuestionPayload {
    #[serde(rename = "type")]
    pub question_type: String,
    pub question: String,
    pub choices: Option<Vec<String>>,
    pub answer: AnswerKey,
    pub explanation: String,
}

/// Shape the generation prompt asks for; its JSON schema is embedded in the prompt.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct QuestionBatchPayload {
    pub questions: Vec<GeneratedQuestionPayload>,
}

// Entries stay untyped until each one is checked on its own.
#[derive(Debug, Deserialize)]
struct QuestionBatchEnvelope {
    questions: Vec<Value>,
}

pub fn parse_extraction(content: &str) -> AppResult<Vec<String>> {
    let payload: ExtractionPayload = serde_json::from_str(content).map_err(|e| {
        AppError::CollaboratorResponse(format!(
            "word extraction reply is not {{\"words\": [string, ...]}}: {}",
            e
        ))
    })?;

    Ok(payload.words)
}

/// Parses one generation reply. A reply that is not `{"questions": [...]}`
/// fails outright; individual bad entries are skipped and noted on the batch.
pub fn parse_question_batch(
    content: &str,
    question_type: QuestionType,
    requested: usize,
) -> AppResult<QuestionBatch> {
    let envelope: QuestionBatchEnvelope = serde_json::from_str(content).map_err(|e| {
        AppError::CollaboratorResponse(format!(
            "type {} reply is not {{\"questions\": [...]}}: {}",
            question_type, e
        ))
    })?;

    let mut batch = QuestionBatch::new(question_type, requested);
    for (position, entry) in envelope.questions.into_iter().enumerate() {
        match payload_from_entry(entry) {
            Ok(payload) => match payload.into_question(question_type) {
                Ok((question, note)) => {
                    if let Some(note) = note {
                        batch.note(Some(position), note);
                    }
                    batch.questions.push(question);
                }
                Err(reason) => batch.note(Some(position), format!("skipped, {}", reason)),
            },
            Err(reason) => batch.note(Some(position), format!("skipped, {}", reason)),
        }
    }

    Ok(batch)
}

fn payload_from_entry(entry: Value) -> Result<GeneratedQuestionPayload, String> {
    let object = entry
        .as_object()
        .ok_or_else(|| "entry is not a JSON object".to_string())?;

    if let Some(missing) = REQUIRED_QUESTION_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(format!("missing field `{}`", missing));
    }

    serde_json::from_value(entry).map_err(|e| e.to_string())
}

impl GeneratedQuestionPayload {
    /// Validates the entry for the type it was requested as. The second value
    /// is a note worth surfacing even though the question is kept.
    pub fn into_question(
        self,
        requested: QuestionType,
    ) -> Result<(Question, Option<String>), String> {
        let prompt = self.question.trim().to_string();
        if prompt.is_empty() {
            return Err("question text is empty".to_string());
        }

        if self.answer.is_blank() {
            return Err("answer is empty".to_string());
        }

        // An empty choice list renders as free text
        let choices = self.choices.filter(|choices| !choices.is_empty());

        if let (Some(choices), AnswerKey::MultipleAcceptable(accepted)) = (&choices, &self.answer) {
            if !accepted.iter().any(|a| choices.contains(a)) {
                return Err("no accepted answer appears among the choices".to_string());
            }
        }

        let note = match QuestionType::from_letter(&self.question_type) {
            Some(returned) if returned == requested => None,
            _ => Some(format!(
                "returned as type '{}', kept as type {}",
                self.question_type, requested
            )),
        };

        Ok((
            Question {
                question_type: requested,
                prompt,
                choices,
                answer: self.answer,
                explanation: self.explanation.trim().to_string(),
            },
            note,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::raw_question_json;
    use serde_json::json;

    #[test]
    fn extraction_reply_yields_words() {
        let words = parse_extraction(r#"{"words": ["local", "succeed"]}"#).expect("valid reply");
        assert_eq!(words, vec!["local", "succeed"]);
    }

    #[test]
    fn extraction_reply_with_wrong_shape_is_a_collaborator_error() {
        for content in [
            "not json at all",
            r#"{"vocabulary": ["local"]}"#,
            r#"{"words": "local"}"#,
            r#"{"words": [1, 2]}"#,
            r#"["local"]"#,
        ] {
            let err = parse_extraction(content).unwrap_err();
            assert!(
                matches!(err, AppError::CollaboratorResponse(_)),
                "expected collaborator error for {}",
                content
            );
        }
    }

    #[test]
    fn well_formed_batch_parses_every_entry() {
        let content = json!({
            "questions": [raw_question_json("A"), raw_question_json("A")]
        })
        .to_string();

        let batch = parse_question_batch(&content, QuestionType::A, 2).expect("valid batch");

        assert_eq!(batch.questions.len(), 2);
        assert!(batch.issues.is_empty());
        assert_eq!(
            batch.questions[0].answer,
            AnswerKey::MultipleAcceptable(vec!["nearby".to_string()])
        );
    }

    #[test]
    fn batch_without_questions_key_is_a_collaborator_error() {
        let err = parse_question_batch(r#"{"items": []}"#, QuestionType::B, 1).unwrap_err();
        assert!(matches!(err, AppError::CollaboratorResponse(_)));

        let err = parse_question_batch("{", QuestionType::B, 1).unwrap_err();
        assert!(matches!(err, AppError::CollaboratorResponse(_)));
    }

    #[test]
    fn malformed_entries_are_skipped_and_noted() {
        let mut missing_answer = raw_question_json("C");
        missing_answer
            .as_object_mut()
            .expect("fixture is an object")
            .remove("answer");
        let mut missing_choices = raw_question_json("C");
        missing_choices
            .as_object_mut()
            .expect("fixture is an object")
            .remove("choices");

        let content = json!({
            "questions": [
                raw_question_json("C"),
                missing_answer,
                "just a string",
                missing_choices,
                { "type": "C", "question": "Pick", "choices": null, "answer": 7, "explanation": "" }
            ]
        })
        .to_string();

        let batch = parse_question_batch(&content, QuestionType::C, 5).expect("envelope is valid");

        assert_eq!(batch.questions.len(), 1);
        assert_eq!(batch.issues.len(), 4);
        let positions: Vec<Option<usize>> = batch.issues.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert!(batch.issues[0].reason.contains("`answer`"));
        assert!(batch.issues[2].reason.contains("`choices`"));
    }

    #[test]
    fn null_or_empty_choices_mean_free_text() {
        let content = json!({
            "questions": [
                { "type": "D", "question": "Word for 'state' starting with s", "choices": null, "answer": "status", "explanation": "" },
                { "type": "D", "question": "Fill: the ___ path", "choices": [], "answer": "straight", "explanation": "" }
            ]
        })
        .to_string();

        let batch = parse_question_batch(&content, QuestionType::D, 2).expect("valid batch");

        assert!(batch.questions.iter().all(|q| !q.is_multiple_choice()));
        assert!(batch.issues.is_empty());
    }

    #[test]
    fn list_answer_missing_from_choices_is_rejected() {
        let content = json!({
            "questions": [{
                "type": "A",
                "question": "What does 'local' mean?",
                "choices": ["nearby", "distant"],
                "answer": ["Nearby"],
                "explanation": ""
            }]
        })
        .to_string();

        let batch = parse_question_batch(&content, QuestionType::A, 1).expect("envelope is valid");

        assert!(batch.questions.is_empty());
        assert!(batch.issues[0].reason.contains("choices"));
    }

    #[test]
    fn blank_answer_or_prompt_is_rejected() {
        let content = json!({
            "questions": [
                { "type": "E", "question": "  ", "choices": null, "answer": "x", "explanation": "" },
                { "type": "E", "question": "Fill the blank", "choices": null, "answer": " ", "explanation": "" }
            ]
        })
        .to_string();

        let batch = parse_question_batch(&content, QuestionType::E, 2).expect("envelope is valid");

        assert!(batch.questions.is_empty());
        assert_eq!(batch.issues.len(), 2);
    }

    #[test]
    fn drifted_type_is_kept_under_requested_type_with_a_note() {
        let content = json!({ "questions": [raw_question_json("b")] }).to_string();

        let batch = parse_question_batch(&content, QuestionType::A, 1).expect("valid batch");

        assert_eq!(batch.questions[0].question_type, QuestionType::A);
        assert_eq!(batch.issues.len(), 1);
        assert!(batch.issues[0].reason.contains("kept as type A"));
    }

    #[test]
    fn lowercase_matching_type_letter_is_accepted_silently() {
        let content = json!({ "questions": [raw_question_json("a")] }).to_string();

        let batch = parse_question_batch(&content, QuestionType::A, 1).expect("valid batch");
        assert!(batch.issues.is_empty());
    }
}
