use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditWordsRequest {
    /// One entry per extracted word, as edited by the user (blank removes it).
    #[validate(length(max = 500))]
    #[serde(default)]
    pub words: Vec<String>,

    /// Free-text words added on top of the extraction, at most two.
    #[validate(length(max = 2))]
    #[serde(default)]
    pub additions: Vec<String>,
}

impl EditWordsRequest {
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .chain(self.additions.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    #[validate(length(max = 1000))]
    pub answer: String,
}
