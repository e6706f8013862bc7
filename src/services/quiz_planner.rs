use crate::models::domain::{QuestionType, QuizPlan, Word};

/// Every quiz carries this many questions beyond one per word.
pub const BONUS_QUESTIONS: usize = 2;

pub fn total_for_words(words: &[Word]) -> usize {
    words.len() + BONUS_QUESTIONS
}

/// Splits `total` as evenly as possible over A..E; the first `total % 5`
/// types in that fixed order get one extra question.
pub fn plan_for_total(total: usize) -> QuizPlan {
    let type_count = QuestionType::ALL.len();
    let base = total / type_count;
    let remainder = total % type_count;

    let mut quotas = [base; 5];
    for quota in quotas.iter_mut().take(remainder) {
        *quota += 1;
    }

    QuizPlan::from_quotas(quotas)
}

pub fn plan_for_words(words: &[Word]) -> QuizPlan {
    plan_for_total(total_for_words(words))
}
