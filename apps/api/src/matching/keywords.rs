use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words shorter than this carry too little signal to score on.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Common English function words dropped from every keyword set.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Whole alphabetic words only; tokens glued to digits or underscores are skipped.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]+\b").expect("valid regex"));

/// Unique lowercase keywords of a text.
pub type KeywordSet = HashSet<String>;

/// Extracts lowercase keywords of at least `min_len` letters, minus stop words.
pub fn extract_keywords(text: &str, min_len: usize) -> KeywordSet {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| word.len() >= min_len && !STOP_WORD_SET.contains(word))
        .map(String::from)
        .collect()
}
