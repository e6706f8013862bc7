#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{AnswerKey, Question, QuestionType, Word};

    /// Builds a word list, skipping anything that would not parse
    pub fn words(raw: &[&str]) -> Vec<Word> {
        raw.iter().filter_map(|w| Word::parse(w)).collect()
    }

    /// A type D question whose answer is a single string
    pub fn free_text_question(answer: &str) -> Question {
        Question {
            question_type: QuestionType::D,
            prompt: format!("Type the word that starts with '{}'", &answer[..1]),
            choices: None,
            answer: AnswerKey::Single(answer.to_string()),
            explanation: format!("The answer is '{}'", answer),
        }
    }

    /// A type A question with four choices and a list answer key
    pub fn choice_question(correct: &str) -> Question {
        Question {
            question_type: QuestionType::A,
            prompt: format!("Which is the meaning of '{}'?", correct),
            choices: Some(vec![
                correct.to_string(),
                "distractor one".to_string(),
                "distractor two".to_string(),
                "distractor three".to_string(),
            ]),
            answer: AnswerKey::MultipleAcceptable(vec![correct.to_string()]),
            explanation: format!("'{}' is correct", correct),
        }
    }

    /// A single question entry as the model would return it
    pub fn raw_question_json(question_type: &str) -> serde_json::Value {
        serde_json::json!({
            "type": question_type,
            "question": "What does 'local' mean?",
            "choices": ["nearby", "distant", "foreign", "ancient"],
            "answer": ["nearby"],
            "explanation": "'local' relates to a particular nearby area"
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_words_normalizes() {
        let list = words(&["Local", " ", "succeed"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].as_str(), "local");
    }

    #[test]
    fn test_fixtures_choice_question_answer_is_a_choice() {
        let question = choice_question("nearby");
        assert!(question.is_multiple_choice());
        assert_eq!(
            question.choices.as_ref().map(|c| c[0].as_str()),
            Some("nearby")
        );
    }
}
