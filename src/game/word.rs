use serde::{Deserialize, Serialize};

/// One vocabulary prompt: a word with a missing letter and two candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub correct_letter: char,
    pub incorrect_letter: char,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, correct_letter: char, incorrect_letter: char) -> Self {
        Self {
            word: word.into(),
            correct_letter,
            incorrect_letter,
        }
    }
}
