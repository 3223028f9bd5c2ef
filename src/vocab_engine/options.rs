//! Answer option generation.
//!
//! Every option set holds the correct answer exactly once plus distinct
//! distractors drawn uniformly without replacement, then shuffled. When the
//! pool runs dry the set is simply shorter than requested.

use rand::Rng;
use tracing::warn;

use crate::vocab_engine::{
    helpers::dedup_preserving_order,
    models::SynonymGroup,
    shuffle::{draw, shuffle},
};

/// Options per question when nothing else is configured.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Build a shuffled option set for `correct` with distractors from `pool`.
pub fn generate_options<R: Rng + ?Sized>(
    correct: &str,
    pool: &[String],
    option_count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut options = vec![correct.to_string()];
    let mut available: Vec<String> = dedup_preserving_order(pool.iter().map(String::as_str))
        .into_iter()
        .filter(|o| o != correct)
        .collect();

    fill_from(&mut options, &mut available, option_count, rng);
    finish(options, option_count, correct, rng)
}

/// Build a shuffled option set for a synonym question.
///
/// Distractors come first from the synonym lists of *other* groups; only when
/// that tier is exhausted are plain vocabulary terms consulted. Neither tier
/// ever yields the headword or any synonym of `group`.
pub fn generate_synonym_options<R: Rng + ?Sized>(
    correct: &str,
    group: &SynonymGroup,
    all_groups: &[SynonymGroup],
    vocabulary_terms: &[String],
    option_count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut options = vec![correct.to_string()];

    let mut other_synonyms: Vec<String> = dedup_preserving_order(
        all_groups
            .iter()
            .filter(|g| g.headword != group.headword)
            .flat_map(|g| g.synonyms.iter().map(String::as_str)),
    )
    .into_iter()
    .filter(|w| !group.contains_word(w) && w != correct)
    .collect();
    fill_from(&mut options, &mut other_synonyms, option_count, rng);

    if options.len() < option_count {
        let mut vocab_words: Vec<String> =
            dedup_preserving_order(vocabulary_terms.iter().map(String::as_str))
                .into_iter()
                .filter(|w| !group.contains_word(w) && !options.contains(w))
                .collect();
        fill_from(&mut options, &mut vocab_words, option_count, rng);
    }

    finish(options, option_count, correct, rng)
}

/// Move random distractors from `available` into `options` until it is full.
fn fill_from<R: Rng + ?Sized>(
    options: &mut Vec<String>,
    available: &mut Vec<String>,
    option_count: usize,
    rng: &mut R,
) {
    while options.len() < option_count {
        match draw(available, rng) {
            Some(word) => options.push(word),
            None => break,
        }
    }
}

fn finish<R: Rng + ?Sized>(
    mut options: Vec<String>,
    option_count: usize,
    correct: &str,
    rng: &mut R,
) -> Vec<String> {
    if options.len() < option_count {
        warn!(
            correct,
            got = options.len(),
            wanted = option_count,
            "distractor pool exhausted; returning a short option set"
        );
    }
    shuffle(&mut options, rng);
    options
}
