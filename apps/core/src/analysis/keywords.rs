//! Keyword extraction by term frequency.
//!
//! Extracts the most frequent content words from a document. Ties keep the order in
//! which the words first appear, so the result is stable for a given text.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Stopwords for English language
const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
    "mine", "yours", "hers", "ours", "theirs", "this", "that", "these", "those", "who", "whom",
    "which", "what", "whose", "is", "am", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "in", "on", "at", "to", "from", "by", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above", "below", "up",
    "down", "out", "off", "over", "under", "again", "further", "here", "there", "where", "when",
    "why", "how", "all", "each", "every", "both", "few", "more", "most", "other", "some", "any",
    "no", "not", "only", "own", "same", "than", "too", "very", "just", "also", "now", "then",
    "once", "always", "never", "if", "because", "as", "until", "while", "although", "though",
    "yes", "maybe", "said", "time", "of", "within", "without", "upon", "such", "like", "many",
    "much", "well", "even", "still", "however", "therefore", "thus", "whether", "since", "per",
    "via", "include", "includes", "including", "show", "shows", "make", "made", "used", "using",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_EN.iter().copied().collect());

/// Whether `word` (any case) is in the fixed stop-word set
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}

/// Result of keyword extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The keyword, lowercased
    pub keyword: String,
    /// Raw frequency in the text
    pub frequency: usize,
    /// Share of the kept tokens this keyword accounts for
    pub score: f32,
}

/// Frequency-based keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default settings
    pub fn new() -> Self {
        Self::with_config(4, 8)
    }

    /// Create a keyword extractor with custom configuration
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            min_word_length,
            max_keywords,
        }
    }

    /// Tokenize text into lowercase candidate words, in document order
    fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split(|c: char| !c.is_alphanumeric() && c != '_' && c != '-')
            .map(|word| word.trim_matches(|c: char| c == '-' || c == '_'))
            .filter(move |word| {
                word.chars().count() >= self.min_word_length
                    && !word.chars().all(|c| c.is_numeric())
            })
            .map(|word| word.to_lowercase())
            .filter(|word| !STOPWORDS.contains(word.as_str()))
    }

    /// Extract the top N keywords from text
    pub fn extract(&self, text: &str, top_k: Option<usize>) -> Vec<KeywordResult> {
        let max_results = top_k.unwrap_or(self.max_keywords);

        // Entries stay in first-occurrence order; `index` points into them.
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut total = 0usize;

        for word in self.tokenize(text) {
            total += 1;
            match index.get(&word) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(word.clone(), entries.len());
                    entries.push((word, 1));
                }
            }
        }

        if total == 0 {
            return vec![];
        }

        // Stable sort: equal frequencies keep first-occurrence order
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        entries
            .into_iter()
            .take(max_results)
            .map(|(keyword, frequency)| KeywordResult {
                keyword,
                frequency,
                score: frequency as f32 / total as f32,
            })
            .collect()
    }

    /// Extract keywords and return just the strings
    pub fn extract_keywords(&self, text: &str, top_k: Option<usize>) -> Vec<String> {
        self.extract(text, top_k)
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }
}
