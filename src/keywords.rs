//! Keyword frequency and density analysis.
//!
//! Body text is tokenized into lowercase words. The most frequent
//! non-stop-words form the keyword table, and an optional focus keyword
//! (single word or phrase) is located in the body and in the page's key
//! fields.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::result::{FocusKeyword, KeywordStat};

/// A word: letters or digits, optionally joined by inner apostrophes or hyphens.
#[allow(clippy::expect_used)]
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*").expect("valid regex")
});

/// Common English words excluded from the keyword table.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "can't", "cannot", "could", "did", "didn't", "do",
    "does", "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from",
    "further", "get", "got", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "isn't", "it",
    "it's", "its", "itself", "just", "let's", "like", "may", "me", "more", "most", "much",
    "must", "my", "myself", "new", "no", "nor", "not", "now", "of", "off", "on", "once",
    "one", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "that's", "the", "their",
    "theirs", "them", "themselves", "then", "there", "there's", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "us", "use", "used", "using",
    "very", "was", "wasn't", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "won't", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Split text into lowercase words.
///
/// Typographic apostrophes are folded to `'` so that `don’t` and `don't`
/// count as the same word.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase().replace('’', "'"))
        .collect()
}

/// Whether `word` is on the stop word list.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Build the keyword frequency table.
///
/// Stop words, purely numeric tokens and words shorter than `min_length`
/// chars are skipped. Rows are sorted by count (descending) then word, and
/// truncated to `limit`. Density is relative to all tokens, stop words
/// included.
#[must_use]
pub fn keyword_frequency(tokens: &[String], min_length: usize, limit: usize) -> Vec<KeywordStat> {
    if tokens.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if token.chars().count() < min_length
            || is_stop_word(token)
            || token.chars().all(|c| c.is_numeric())
        {
            continue;
        }
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<(&str, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows.truncate(limit);

    let total = tokens.len();
    rows.into_iter()
        .map(|(word, count)| KeywordStat {
            word: word.to_string(),
            count,
            density: density(count, total),
        })
        .collect()
}

/// Percentage of `total` taken by `count`, 0 for an empty page.
#[must_use]
pub fn density(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Count non-overlapping occurrences of `phrase` in `tokens`.
#[must_use]
pub fn count_phrase(tokens: &[String], phrase: &[String]) -> usize {
    if phrase.is_empty() || tokens.len() < phrase.len() {
        return 0;
    }

    let mut count = 0;
    let mut i = 0;
    while i + phrase.len() <= tokens.len() {
        if tokens[i..i + phrase.len()] == *phrase {
            count += 1;
            i += phrase.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Fields the focus keyword is looked up in.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordContext<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub h1: Option<&'a str>,
    pub url: Option<&'a str>,
}

/// Locate a focus keyword in the body tokens and the page's key fields.
///
/// Returns `None` when the keyword has no word characters.
#[must_use]
pub fn analyze_focus_keyword(
    keyword: &str,
    body_tokens: &[String],
    ctx: &KeywordContext<'_>,
) -> Option<FocusKeyword> {
    let phrase = tokenize(keyword);
    if phrase.is_empty() {
        return None;
    }

    let occurrences = count_phrase(body_tokens, &phrase);
    let contains = |field: Option<&str>| {
        field.is_some_and(|text| count_phrase(&tokenize(text), &phrase) > 0)
    };

    Some(FocusKeyword {
        keyword: phrase.join(" "),
        occurrences,
        density: density(occurrences * phrase.len(), body_tokens.len()),
        in_title: contains(ctx.title),
        in_description: contains(ctx.description),
        in_h1: contains(ctx.h1),
        in_url: ctx.url.is_some_and(|url| url_contains_phrase(url, &phrase)),
    })
}

/// URL slugs join words with `-` or `_`; compare on the joined form.
fn url_contains_phrase(url: &str, phrase: &[String]) -> bool {
    let haystack: String = url
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '+' | ' ' | '%'))
        .collect();
    let needle: String = phrase.concat().replace(['-', '\''], "");
    !needle.is_empty() && haystack.contains(&needle)
}
