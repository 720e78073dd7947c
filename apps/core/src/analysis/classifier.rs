//! Document type classification using keyword-trigger rules.
//!
//! Rules are plain data: an ordered list of `(triggers, type)` pairs evaluated
//! first-match-wins. A document matching no rule is `Other`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Coarse category of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Academic Paper")]
    Academic,
    #[serde(rename = "Business Document")]
    Business,
    #[serde(rename = "Technical Document")]
    Technical,
    #[serde(rename = "Literary Work")]
    Literary,
    #[serde(rename = "General Document")]
    Other,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl DocumentType {
    /// Returns a human-readable label for the document type
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Academic => "Academic Paper",
            DocumentType::Business => "Business Document",
            DocumentType::Technical => "Technical Document",
            DocumentType::Literary => "Literary Work",
            DocumentType::Other => "General Document",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DocumentType::Academic => "📚",
            DocumentType::Business => "💼",
            DocumentType::Technical => "🛠️",
            DocumentType::Literary => "📖",
            DocumentType::Other => "📄",
        }
    }
}

/// One classification rule: any trigger word present selects `document_type`.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    document_type: DocumentType,
    triggers: Vec<String>,
    pattern: Regex,
}

impl ClassificationRule {
    /// Build a rule. Triggers match as whole words, case-insensitively; a space
    /// inside a trigger matches any run of whitespace.
    pub fn new(document_type: DocumentType, triggers: &[&str]) -> Result<Self, regex::Error> {
        let alternatives = triggers
            .iter()
            .map(|t| regex::escape(t.trim()).replace(' ', r"\s+"))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives))?;

        Ok(Self {
            document_type,
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            pattern,
        })
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn matches(&self, text: &str) -> bool {
        !self.triggers.is_empty() && self.pattern.is_match(text)
    }

    /// First trigger occurrence in the text, as written there
    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        if self.triggers.is_empty() {
            return None;
        }
        self.pattern.find(text).map(|m| m.as_str())
    }
}

// Compile rules once at startup; the trigger lists are constants so escaping cannot fail.
static DEFAULT_RULES: LazyLock<Vec<ClassificationRule>> = LazyLock::new(|| {
    vec![
        ClassificationRule::new(
            DocumentType::Academic,
            &[
                "abstract",
                "introduction",
                "methodology",
                "conclusion",
                "references",
                "bibliography",
                "hypothesis",
            ],
        )
        .expect("Invalid regex: academic triggers"),
        ClassificationRule::new(
            DocumentType::Business,
            &[
                "revenue",
                "quarterly",
                "executive",
                "business",
                "market",
                "strategy",
                "profit",
                "fiscal",
                "stakeholder",
            ],
        )
        .expect("Invalid regex: business triggers"),
        ClassificationRule::new(
            DocumentType::Technical,
            &[
                "installation",
                "configure",
                "configuration",
                "api",
                "troubleshooting",
                "system requirements",
                "endpoint",
                "database",
                "server",
            ],
        )
        .expect("Invalid regex: technical triggers"),
        ClassificationRule::new(DocumentType::Literary, &["chapter", "novel", "story"])
            .expect("Invalid regex: literary triggers"),
    ]
});

/// Outcome of a classification, with the trigger that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub document_type: DocumentType,
    pub matched_trigger: Option<String>,
}

/// First-match-wins classifier over an ordered rule list
#[derive(Debug, Clone)]
pub struct DocumentClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentClassifier {
    /// Create a classifier with the built-in Academic > Business > Technical > Literary rules
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.clone())
    }

    pub fn with_rules(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, text: &str) -> DocumentType {
        self.classify_detailed(text).document_type
    }

    pub fn classify_detailed(&self, text: &str) -> Classification {
        for rule in &self.rules {
            if let Some(trigger) = rule.first_match(text) {
                return Classification {
                    document_type: rule.document_type(),
                    matched_trigger: Some(trigger.to_lowercase()),
                };
            }
        }

        Classification {
            document_type: DocumentType::Other,
            matched_trigger: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academic_detection() {
        let classifier = DocumentClassifier::new();
        let text = "Abstract: we study things. References: [1] Someone, 2020.";
        assert_eq!(classifier.classify(text), DocumentType::Academic);
    }

    #[test]
    fn test_business_detection() {
        let classifier = DocumentClassifier::new();
        assert_eq!(
            classifier.classify("Revenue grew 15% in Q3 2024."),
            DocumentType::Business
        );
    }

    #[test]
    fn test_priority_order() {
        let classifier = DocumentClassifier::new();
        // Both academic and business triggers: academic is evaluated first.
        let result = classifier.classify_detailed("Market analysis. Conclusion: buy.");
        assert_eq!(result.document_type, DocumentType::Academic);
        assert_eq!(result.matched_trigger.as_deref(), Some("conclusion"));
    }

    #[test]
    fn test_whole_word_matching() {
        let classifier = DocumentClassifier::new();
        // "marketing" and "rapid" must not trigger "market" or "api"
        assert_eq!(
            classifier.classify("Rapid marketing ideas"),
            DocumentType::Other
        );
    }

    #[test]
    fn test_multiword_trigger() {
        let classifier = DocumentClassifier::new();
        assert_eq!(
            classifier.classify("Minimum system\nrequirements: 8GB RAM"),
            DocumentType::Technical
        );
    }

    #[test]
    fn test_default_other() {
        let classifier = DocumentClassifier::new();
        assert_eq!(classifier.classify("Hello there"), DocumentType::Other);
        assert_eq!(classifier.classify(""), DocumentType::Other);
    }

    #[test]
    fn test_custom_rules() {
        let rules = vec![
            ClassificationRule::new(DocumentType::Literary, &["once upon a time"]).unwrap(),
            ClassificationRule::new(DocumentType::Business, &[]).unwrap(),
        ];
        let classifier = DocumentClassifier::with_rules(rules);
        assert_eq!(
            classifier.classify("Once upon a  time there was a server"),
            DocumentType::Literary
        );
        assert_eq!(classifier.classify("anything"), DocumentType::Other);
    }

    #[test]
    fn test_type_serializes_as_label() {
        let json = serde_json::to_string(&DocumentType::Business).unwrap();
        assert_eq!(json, "\"Business Document\"");
    }
}
