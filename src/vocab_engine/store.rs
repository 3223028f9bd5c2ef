//! In-memory snapshot of the two data files.
//!
//! ## Wire format
//!
//! `vocabulary.json` is a list of `{ "eng", "thai", "part" }` where `part` is
//! either one string or a list of strings. `synonym.json` is a list of
//! `{ "word", "thai", "synonyms": [...] }`.
//!
//! ## Duplicates
//!
//! The first entry for a given term (or headword) wins. Later duplicates are
//! dropped at load and listed in the [`LoadReport`], so lookups by term or
//! headword are never ambiguous.
//!
//! Translations may repeat (`cat` and `kitty` can both be `แมว`). They are
//! kept, and [`VocabularyStore::translation_groups`] folds them into one
//! prompt per translation for the reverse quiz.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{EngineError, Result};
use crate::vocab_engine::models::{SynonymGroup, WordEntry};

pub const VOCABULARY_FILE: &str = "vocabulary.json";
pub const SYNONYM_FILE: &str = "synonym.json";

// ---------------------------------------------------------------------------
// Raw records
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawParts {
    One(String),
    Many(Vec<String>),
}

impl Default for RawParts {
    fn default() -> Self {
        RawParts::Many(Vec::new())
    }
}

impl From<RawParts> for Vec<String> {
    fn from(parts: RawParts) -> Self {
        match parts {
            RawParts::One(p) if p.is_empty() => Vec::new(),
            RawParts::One(p) => vec![p],
            RawParts::Many(ps) => ps,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawWord {
    eng: String,
    thai: String,
    #[serde(default)]
    part: RawParts,
}

#[derive(Debug, Deserialize)]
struct RawSynonymGroup {
    word: String,
    #[serde(default)]
    thai: String,
    #[serde(default)]
    synonyms: Vec<String>,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// What happened while building the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub word_count: usize,
    pub group_count: usize,
    pub duplicate_terms: Vec<String>,
    pub duplicate_headwords: Vec<String>,
    /// Translations carried by more than one term.
    pub shared_translations: Vec<String>,
    /// Groups kept for listing but unusable as quiz sources.
    pub empty_groups: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    words: Vec<WordEntry>,
    groups: Vec<SynonymGroup>,
    report: LoadReport,
}

impl VocabularyStore {
    /// Build a store from already-decoded entries, applying the duplicate policy.
    pub fn from_parts(words: Vec<WordEntry>, groups: Vec<SynonymGroup>) -> Self {
        let mut report = LoadReport::default();

        let mut seen_terms = HashSet::new();
        let words: Vec<WordEntry> = words
            .into_iter()
            .filter(|w| {
                let fresh = seen_terms.insert(w.term.clone());
                if !fresh {
                    warn!(term = %w.term, "dropping duplicate vocabulary entry");
                    report.duplicate_terms.push(w.term.clone());
                }
                fresh
            })
            .collect();

        {
            let mut seen_translations = HashSet::new();
            for w in &words {
                if !seen_translations.insert(w.translation.as_str())
                    && !report.shared_translations.contains(&w.translation)
                {
                    debug!(translation = %w.translation, "translation shared by several terms");
                    report.shared_translations.push(w.translation.clone());
                }
            }
        }

        let mut seen_headwords = HashSet::new();
        let groups: Vec<SynonymGroup> = groups
            .into_iter()
            .filter(|g| {
                let fresh = seen_headwords.insert(g.headword.clone());
                if !fresh {
                    warn!(headword = %g.headword, "dropping duplicate synonym group");
                    report.duplicate_headwords.push(g.headword.clone());
                }
                fresh
            })
            .collect();

        for g in groups.iter().filter(|g| !g.is_quizzable()) {
            warn!(headword = %g.headword, "synonym group has no synonyms; excluded from quizzes");
            report.empty_groups.push(g.headword.clone());
        }

        report.word_count = words.len();
        report.group_count = groups.len();
        VocabularyStore { words, groups, report }
    }

    /// Decode both data files from their JSON text.
    pub fn from_json(vocabulary_json: &str, synonym_json: &str) -> Result<Self> {
        let raw_words: Vec<RawWord> =
            serde_json::from_str(vocabulary_json).map_err(|source| EngineError::Parse {
                source_name: VOCABULARY_FILE,
                source,
            })?;
        let raw_groups: Vec<RawSynonymGroup> =
            serde_json::from_str(synonym_json).map_err(|source| EngineError::Parse {
                source_name: SYNONYM_FILE,
                source,
            })?;

        let words = raw_words
            .into_iter()
            .map(|w| WordEntry {
                term: w.eng,
                translation: w.thai,
                parts_of_speech: w.part.into(),
            })
            .collect();
        let groups = raw_groups
            .into_iter()
            .map(|g| SynonymGroup {
                headword: g.word,
                translation: g.thai,
                synonyms: g.synonyms,
            })
            .collect();

        let store = Self::from_parts(words, groups);
        info!(
            words = store.report.word_count,
            groups = store.report.group_count,
            "vocabulary data loaded"
        );
        Ok(store)
    }

    /// Read `vocabulary.json` and `synonym.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| EngineError::Io { path, source })
        };
        let vocabulary = read(VOCABULARY_FILE)?;
        let synonyms = read(SYNONYM_FILE)?;
        Self::from_json(&vocabulary, &synonyms)
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Groups usable as synonym-quiz sources.
    pub fn quiz_groups(&self) -> Vec<&SynonymGroup> {
        self.groups.iter().filter(|g| g.is_quizzable()).collect()
    }

    pub fn terms(&self) -> Vec<String> {
        self.words.iter().map(|w| w.term.clone()).collect()
    }

    pub fn translations(&self) -> Vec<String> {
        self.words.iter().map(|w| w.translation.clone()).collect()
    }

    /// Each distinct translation with every term that carries it, in order
    /// of first appearance.
    pub fn translation_groups(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for w in &self.words {
            match groups.iter().position(|(t, _)| *t == w.translation) {
                Some(i) => groups[i].1.push(w.term.as_str()),
                None => groups.push((w.translation.as_str(), vec![w.term.as_str()])),
            }
        }
        groups
    }

    pub fn find_group(&self, headword: &str) -> Option<&SynonymGroup> {
        self.groups.iter().find(|g| g.headword == headword)
    }

    /// Vocabulary ordered case-insensitively by term.
    pub fn sorted_vocabulary(&self) -> Vec<&WordEntry> {
        let mut sorted: Vec<&WordEntry> = self.words.iter().collect();
        sorted.sort_by_cached_key(|w| w.term.to_lowercase());
        sorted
    }

    /// Sorted vocabulary split into two display columns; the left one takes
    /// the extra entry when the count is odd.
    pub fn vocabulary_columns(&self) -> (Vec<&WordEntry>, Vec<&WordEntry>) {
        let mut left = self.sorted_vocabulary();
        let mid = left.len().div_ceil(2);
        let right = left.split_off(mid);
        (left, right)
    }

    /// Synonym groups ordered case-insensitively by headword.
    pub fn sorted_synonyms(&self) -> Vec<&SynonymGroup> {
        let mut sorted: Vec<&SynonymGroup> = self.groups.iter().collect();
        sorted.sort_by_cached_key(|g| g.headword.to_lowercase());
        sorted
    }
}
