use rand::{seq::SliceRandom, Rng};

use crate::models::domain::{QuestionBatch, Quiz};

#[derive(Debug, Clone)]
pub struct AssembledQuiz {
    pub quiz: Quiz,
    pub warnings: Vec<String>,
}

/// Concatenates the per-type batches and shuffles the result so a question's
/// position says nothing about its type. Batch problems become warnings;
/// short or long batches are reported, never padded or truncated.
pub fn assemble<R: Rng + ?Sized>(batches: Vec<QuestionBatch>, rng: &mut R) -> AssembledQuiz {
    let mut questions = Vec::new();
    let mut warnings = Vec::new();

    for batch in batches {
        warnings.extend(batch.issues.iter().map(ToString::to_string));

        if batch.questions.len() != batch.requested {
            warnings.push(format!(
                "type {}: requested {} questions, kept {}",
                batch.question_type,
                batch.requested,
                batch.questions.len()
            ));
        }

        questions.extend(batch.questions);
    }

    questions.shuffle(rng);

    AssembledQuiz {
        quiz: Quiz::new(questions),
        warnings,
    }
}
