use std::fmt;
use serde::{Deserialize, Serialize};

use crate::vocab_engine::helpers::synonym_prompt_label;

// ---------------------------------------------------------------------------
// Vocabulary entities
// ---------------------------------------------------------------------------

/// One vocabulary entry: an English term and its Thai translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub term: String,
    pub translation: String,
    pub parts_of_speech: Vec<String>,
}

impl WordEntry {
    /// Parts of speech joined for display, e.g. `"noun, verb"`.
    pub fn parts_label(&self) -> String {
        self.parts_of_speech.join(", ")
    }
}

/// A headword together with the words that can stand in for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub headword: String,
    pub translation: String,
    pub synonyms: Vec<String>,
}

impl SynonymGroup {
    /// Only groups with at least one synonym can produce a quiz question.
    pub fn is_quizzable(&self) -> bool {
        !self.synonyms.is_empty()
    }

    /// True for the headword itself or any of its synonyms.
    pub fn contains_word(&self, word: &str) -> bool {
        self.headword == word || self.synonyms.iter().any(|s| s == word)
    }
}

// ---------------------------------------------------------------------------
// Quiz types
// ---------------------------------------------------------------------------

/// Direction of a multiple-choice quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestMode {
    /// Prompt with the English term, answer with the Thai translation.
    SourceToTarget,
    /// Prompt with the Thai translation, answer with the English term.
    TargetToSource,
    /// Prompt with a headword, answer with one of its synonyms.
    Synonym,
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestMode::SourceToTarget => write!(f, "English → Thai"),
            TestMode::TargetToSource => write!(f, "Thai → English"),
            TestMode::Synonym        => write!(f, "Synonym"),
        }
    }
}

impl TestMode {
    /// Name of the collection this mode draws its prompts from.
    pub fn source_name(self) -> &'static str {
        match self {
            TestMode::SourceToTarget | TestMode::TargetToSource => "vocabulary entries",
            TestMode::Synonym => "synonym groups",
        }
    }
}

/// One multiple-choice question. `options` holds `correct_answer` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt_text: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    /// Translation shown next to a synonym headword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Question {
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }

    /// Prompt as displayed, with the hint in parentheses when present.
    pub fn display_prompt(&self) -> String {
        match &self.hint {
            Some(hint) => synonym_prompt_label(&self.prompt_text, hint),
            None => self.prompt_text.clone(),
        }
    }
}

/// The learner's response to one question. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub prompt_text: String,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

// ---------------------------------------------------------------------------
// Match board types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSide {
    /// The English term.
    Source,
    /// The Thai translation.
    Target,
}

impl fmt::Display for CardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSide::Source => write!(f, "source"),
            CardSide::Target => write!(f, "target"),
        }
    }
}

/// One face-up card on the matching board.
///
/// Two cards share a `pair_id` iff they are the two sides of the same entry.
/// `is_matched` only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCard {
    pub id: u32,
    pub display_text: String,
    pub side: CardSide,
    pub pair_id: u32,
    pub is_matched: bool,
}
