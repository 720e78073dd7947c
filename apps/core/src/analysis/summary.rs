//! Lead-sentence summary.

use regex::Regex;
use std::sync::LazyLock;

// A terminator only ends a sentence when followed by whitespace or the end of text,
// so "sales@corp.com" and "2.5" stay intact.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("Invalid regex: sentence end"));

/// Split text into sentences, keeping their terminating punctuation and collapsing
/// internal whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        let end = m.start() + m.as_str().trim_end().len();
        push_sentence(&mut sentences, &text[start..end]);
        start = m.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !normalized.is_empty() {
        sentences.push(normalized);
    }
}

/// Builds a summary from the first sentences of a document
#[derive(Debug, Clone)]
pub struct Summarizer {
    sentences: usize,
    max_chars: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(2, 300)
    }
}

impl Summarizer {
    pub fn new(sentences: usize, max_chars: usize) -> Self {
        Self {
            sentences,
            max_chars,
        }
    }

    /// First `sentences` sentences joined by a space (all of them when the text has
    /// fewer), cut to `max_chars` characters with a trailing "..." when longer.
    pub fn summarize(&self, text: &str) -> String {
        let summary = split_sentences(text)
            .into_iter()
            .take(self.sentences)
            .collect::<Vec<_>>()
            .join(" ");

        truncate_chars(&summary, self.max_chars)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
