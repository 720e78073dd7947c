//! Entity detection using regex patterns.
//!
//! Each entity kind is an independent pass over the text. Matches come back in
//! document order with duplicates removed (first occurrence kept).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Kind of entity a pattern extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Date,
    Percentage,
    Email,
    Number,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Date,
        EntityKind::Percentage,
        EntityKind::Email,
        EntityKind::Number,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Date => "Dates",
            EntityKind::Percentage => "Percentages",
            EntityKind::Email => "Emails",
            EntityKind::Number => "Numbers",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Entities found in a document, keyed by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub dates: Vec<String>,
    pub percentages: Vec<String>,
    pub emails: Vec<String>,
    pub numbers: Vec<String>,
}

impl Entities {
    pub fn get(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Date => &self.dates,
            EntityKind::Percentage => &self.percentages,
            EntityKind::Email => &self.emails,
            EntityKind::Number => &self.numbers,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, &[String])> {
        EntityKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, values)| values.is_empty())
    }
}

const MONTHS: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

// Date sub-patterns run independently and are merged by position, so a quarter
// like "Q3 2024" also contributes its year "2024".
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // 12/05/2024, 1-2-24
        Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-](?:\d{4}|\d{2})\b").expect("Invalid regex: numeric dates"),
        // 2024-03-15
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("Invalid regex: ISO dates"),
        // March 5, 2024
        Regex::new(&format!(r"(?i)\b{}\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b", MONTHS))
            .expect("Invalid regex: month-first dates"),
        // 5 March 2024
        Regex::new(&format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+{}\.?,?\s+\d{{4}}\b", MONTHS))
            .expect("Invalid regex: day-first dates"),
        // Q3 2024
        Regex::new(r"\b[Qq][1-4]\s+\d{4}\b").expect("Invalid regex: quarters"),
        // 1999, 2024
        Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid regex: years"),
    ]
});

static PERCENTAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?%").expect("Invalid regex: percentages"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid regex: emails")
});

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,3}(?:,\d{3})+(?:\.\d+)?\b|\b\d+(?:\.\d+)?\b").expect("Invalid regex: numbers")
});

/// Runs every entity pass over a text
#[derive(Debug, Clone, Default)]
pub struct EntityDetector;

impl EntityDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &str) -> Entities {
        Entities {
            dates: self.dates(text),
            percentages: self.percentages(text),
            emails: self.emails(text),
            numbers: self.numbers(text),
        }
    }

    pub fn dates(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, &str)> = DATE_PATTERNS
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.as_str())))
            .collect();
        // Stable: at equal offsets the earlier (more specific) pattern stays first
        found.sort_by_key(|(start, _)| *start);
        dedupe(found.into_iter().map(|(_, s)| s))
    }

    pub fn percentages(&self, text: &str) -> Vec<String> {
        dedupe(PERCENTAGE_PATTERN.find_iter(text).map(|m| m.as_str()))
    }

    pub fn emails(&self, text: &str) -> Vec<String> {
        dedupe(EMAIL_PATTERN.find_iter(text).map(|m| m.as_str()))
    }

    /// Bare numbers; a number directly followed by `%` is a percentage instead.
    pub fn numbers(&self, text: &str) -> Vec<String> {
        dedupe(
            NUMBER_PATTERN
                .find_iter(text)
                .filter(|m| !text[m.end()..].starts_with('%'))
                .map(|m| m.as_str()),
        )
    }
}

fn dedupe<'a>(matches: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .filter(|m| seen.insert(*m))
        .map(str::to_string)
        .collect()
}
