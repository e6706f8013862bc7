use schemars::schema_for;

use crate::models::{
    domain::{QuestionType, Word},
    dto::model_payload::QuestionBatchPayload,
};

pub const WORD_EXTRACTION_PROMPT: &str = "You are a vocabulary extraction agent. The attached image contains English vocabulary words, for example a printed word list, a textbook page or a handwritten note.

## TASK

Extract every English word that appears in the image.

## RULES

- Lowercase every word
- Remove duplicates
- English words only: skip numbers, punctuation, page furniture and words in other languages
- Do not add words that are not visible in the image

## OUTPUT FORMAT

Return ONLY a JSON object of this exact shape, with no prose and no markdown:

{ \"words\": [\"word1\", \"word2\"] }";

pub const QUESTION_GENERATOR_PROMPT: &str = r#"You are a middle school English teacher writing a vocabulary test.

## QUESTION FORMATS

Follow the format of the requested type exactly.

A. (multiple choice) Meaning of a word.
   Example: Which of the following is the meaning of 'local'?

B. (multiple choice) Meaning of a word as used in an example sentence. Quote the sentence.
   Example: What does 'succeed' mean in the following sentence?
   The team didn't succeed in winning the game.

C. (multiple choice) Fill in the blank with the right word.
   Example: Which word best fills the blank?
   She is very ______ to go on that trip.

D. (short answer) Type the word from its meaning and first letter.
   Example: Type the English word that means 'condition' and starts with 's'.

E. (short answer) Fill in the blank by typing the word.
   Example: Type the word that best fills the blank.
   The car drives in a __________ path.

## ANSWER RULES

- Multiple choice (A, B, C): "choices" holds exactly four strings and "answer" is a list holding the correct choice copied character for character.
- Short answer (D, E): "choices" is null and "answer" is a single string.
- "explanation" briefly explains why the answer is correct.
- Only test words from the word list.

## OUTPUT FORMAT

Return ONLY a JSON object matching the schema below. No prose, no markdown."#;

/// Builds the request for one question type. Each call asks for a single
/// type so the model does not drift between formats or miscount.
pub fn question_generation_prompt(question_type: QuestionType, count: usize, words: &[Word]) -> String {
    let word_list = words
        .iter()
        .map(|w| format!("\"{}\"", w))
        .collect::<Vec<_>>()
        .join(", ");
    let schema = serde_json::to_string_pretty(&schema_for!(QuestionBatchPayload))
        .unwrap_or_default();

    format!(
        "{}\n\n{}\n\n## REQUEST\n\nWrite {} questions of type {}. Every question's \"type\" is \"{}\".\nWord list: [{}]",
        QUESTION_GENERATOR_PROMPT, schema, count, question_type, question_type, word_list
    )
}
