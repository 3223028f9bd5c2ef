//! Small shared functions used by the generators, sessions and UI adapter.

use std::collections::HashSet;

/// Rounded percentage of `score` out of `total`; an empty quiz scores 0%.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Format elapsed seconds as zero-padded `mm:ss`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Drop repeated strings, keeping the first occurrence of each.
pub fn dedup_preserving_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(Into::into)
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Prompt as shown for synonym questions: `"happy (มีความสุข)"`.
///
/// Falls back to the bare headword when there is no translation.
pub fn synonym_prompt_label(headword: &str, translation: &str) -> String {
    if translation.is_empty() {
        headword.to_string()
    } else {
        format!("{headword} ({translation})")
    }
}
