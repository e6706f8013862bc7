use std::collections::BTreeMap;

use crate::models::domain::{AnswerKey, Question, Quiz, ScoreResult};

/// List keys come from choice questions and need the exact choice string.
/// Single keys are typed by hand, so case and surrounding whitespace are forgiven.
pub fn is_correct(question: &Question, candidate: &str) -> bool {
    match &question.answer {
        AnswerKey::MultipleAcceptable(accepted) => accepted.iter().any(|a| a == candidate),
        AnswerKey::Single(answer) => candidate.trim().to_lowercase() == answer.to_lowercase(),
    }
}

/// Grades every question; unanswered ones count as an empty answer.
pub fn grade_quiz(quiz: &Quiz, answers: &BTreeMap<usize, String>) -> Vec<bool> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let candidate = answers.get(&index).map(String::as_str).unwrap_or("");
            is_correct(question, candidate)
        })
        .collect()
}

pub fn score_quiz(quiz: &Quiz, answers: &BTreeMap<usize, String>) -> ScoreResult {
    let correct = grade_quiz(quiz, answers).into_iter().filter(|c| *c).count();
    ScoreResult {
        correct,
        total: quiz.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuestionType;
    use crate::test_utils::fixtures::{choice_question, free_text_question};

    fn list_keyed(accepted: &[&str]) -> Question {
        Question {
            question_type: QuestionType::B,
            prompt: "Which city?".to_string(),
            choices: Some(accepted.iter().map(|s| s.to_string()).collect()),
            answer: AnswerKey::MultipleAcceptable(accepted.iter().map(|s| s.to_string()).collect()),
            explanation: String::new(),
        }
    }

    #[test]
    fn list_key_accepts_any_listed_value() {
        let question = list_keyed(&["paris", "lyon"]);
        assert!(is_correct(&question, "paris"));
        assert!(is_correct(&question, "lyon"));
        assert!(!is_correct(&question, "nice"));
    }

    #[test]
    fn list_key_does_not_fold_case_or_whitespace() {
        let question = list_keyed(&["paris"]);
        assert!(!is_correct(&question, "Paris"));
        assert!(!is_correct(&question, " paris"));
    }

    #[test]
    fn single_key_folds_case_and_trims() {
        let question = free_text_question("status");
        assert!(is_correct(&question, " STATUS "));
        assert!(is_correct(&question, "Status"));
        assert!(!is_correct(&question, "state"));
    }

    #[test]
    fn single_key_in_mixed_case_still_matches() {
        let question = free_text_question("Succeed");
        assert!(is_correct(&question, "succeed"));
    }

    #[test]
    fn single_key_is_lowercased_but_not_trimmed() {
        let question = free_text_question(" Status ");
        assert!(!is_correct(&question, "status"));
        assert!(!is_correct(&question, " status "));
    }

    #[test]
    fn empty_answer_is_never_correct() {
        assert!(!is_correct(&free_text_question("status"), ""));
        assert!(!is_correct(&choice_question("nearby"), ""));
        assert!(!is_correct(&list_keyed(&["a", "b"]), ""));
    }

    #[test]
    fn score_counts_correct_answers_and_treats_missing_as_wrong() {
        let quiz = Quiz::new(vec![
            free_text_question("status"),
            choice_question("nearby"),
            free_text_question("local"),
        ]);
        let mut answers = BTreeMap::new();
        answers.insert(0, "Status".to_string());
        answers.insert(1, "distractor one".to_string());

        let result = score_quiz(&quiz, &answers);

        assert_eq!(result, ScoreResult { correct: 1, total: 3 });
        assert_eq!(grade_quiz(&quiz, &answers), vec![true, false, false]);
    }

    #[test]
    fn scoring_is_idempotent_and_leaves_answers_untouched() {
        let quiz = Quiz::new(vec![choice_question("nearby"), free_text_question("succeed")]);
        let mut answers = BTreeMap::new();
        answers.insert(0, "nearby".to_string());
        answers.insert(1, " succeed".to_string());
        let before = answers.clone();

        let first = score_quiz(&quiz, &answers);
        let second = score_quiz(&quiz, &answers);

        assert_eq!(first, second);
        assert_eq!(first.correct, 2);
        assert_eq!(answers, before);
    }

    #[test]
    fn empty_quiz_scores_zero_of_zero() {
        let quiz = Quiz::new(vec![]);
        assert_eq!(
            score_quiz(&quiz, &BTreeMap::new()),
            ScoreResult { correct: 0, total: 0 }
        );
    }
}
