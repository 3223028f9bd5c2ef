use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::vocab_engine::{
    models::{Question, TestMode},
    options::{generate_options, generate_synonym_options},
    shuffle::{choose, sample},
    store::VocabularyStore,
};

/// How many questions the learner asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionCount {
    /// A typed-in count; zero falls back to the default.
    Custom(usize),
    /// Every item in the source collection.
    Max,
    /// Nothing chosen.
    #[default]
    Default,
}

impl QuestionCount {
    /// Resolve to a concrete count, clamped to `available`.
    pub fn resolve(self, available: usize, default: usize) -> usize {
        let wanted = match self {
            QuestionCount::Custom(n) if n > 0 => n,
            QuestionCount::Max => available,
            QuestionCount::Custom(_) | QuestionCount::Default => default,
        };
        wanted.min(available)
    }
}

/// Number of distinct prompts `mode` can draw from.
pub fn source_size(store: &VocabularyStore, mode: TestMode) -> usize {
    match mode {
        TestMode::SourceToTarget => store.words().len(),
        TestMode::TargetToSource => store.translation_groups().len(),
        TestMode::Synonym => store.quiz_groups().len(),
    }
}

/// Build up to `count` questions for `mode`, each from a distinct source item.
///
/// `count` is clamped to the source size, so asking for more than exists
/// yields every item once. An empty source collection is an error.
pub fn generate_questions<R: Rng + ?Sized>(
    store: &VocabularyStore,
    mode: TestMode,
    count: usize,
    option_count: usize,
    rng: &mut R,
) -> Result<Vec<Question>> {
    let available = source_size(store, mode);
    if available == 0 {
        return Err(EngineError::EmptySource { source_name: mode.source_name() });
    }
    let count = count.min(available);

    let questions: Vec<Question> = match mode {
        TestMode::SourceToTarget => {
            let pool = store.translations();
            sample(store.words(), count, rng)
                .into_iter()
                .map(|w| Question {
                    options: generate_options(&w.translation, &pool, option_count, rng),
                    prompt_text: w.term,
                    correct_answer: w.translation,
                    hint: None,
                })
                .collect()
        }
        TestMode::TargetToSource => {
            // One prompt per translation; terms sharing it never appear as distractors.
            let groups = store.translation_groups();
            sample(&groups, count, rng)
                .into_iter()
                .filter_map(|(translation, terms)| {
                    let correct = (*choose(&terms, rng)?).to_string();
                    let pool: Vec<String> = store
                        .words()
                        .iter()
                        .filter(|w| w.translation != translation)
                        .map(|w| w.term.clone())
                        .collect();
                    Some(Question {
                        options: generate_options(&correct, &pool, option_count, rng),
                        prompt_text: translation.to_string(),
                        correct_answer: correct,
                        hint: None,
                    })
                })
                .collect()
        }
        TestMode::Synonym => {
            let terms = store.terms();
            sample(&store.quiz_groups(), count, rng)
                .into_iter()
                .filter_map(|g| {
                    let correct = choose(&g.synonyms, rng)?.clone();
                    let options = generate_synonym_options(
                        &correct,
                        g,
                        store.groups(),
                        &terms,
                        option_count,
                        rng,
                    );
                    Some(Question {
                        prompt_text: g.headword.clone(),
                        correct_answer: correct,
                        options,
                        hint: (!g.translation.is_empty()).then(|| g.translation.clone()),
                    })
                })
                .collect()
        }
    };

    debug!(%mode, count = questions.len(), "generated questions");
    Ok(questions)
}
