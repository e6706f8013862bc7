use std::collections::HashSet;

use crate::models::domain::Word;

/// Trims, lowercases and drops blanks, keeping the first occurrence of each word.
pub fn normalize_words<I, S>(raw: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|candidate| Word::parse(candidate.as_ref()))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
