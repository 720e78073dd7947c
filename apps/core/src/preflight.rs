//! Capability Check System
//!
//! Reports which extraction backends this build can use, so missing optional
//! support is visible up front rather than discovered on upload.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::DocumentFormat;
use crate::text_extract::TextExtractor;

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub details: Option<String>,
}

impl CheckResult {
    fn pass(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.to_string(),
            details: None,
        }
    }

    fn fail(name: &str, message: &str, details: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
            details,
        }
    }
}

/// Complete capability report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityReport {
    pub all_passed: bool,
    pub checks: Vec<CheckResult>,
    pub summary: String,
}

impl CapabilityReport {
    pub fn missing(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Check every backend registered in `extractor`
pub fn run_capability_checks(extractor: &TextExtractor) -> CapabilityReport {
    let mut checks: Vec<CheckResult> = extractor
        .backends()
        .map(|backend| {
            let name = format!("{} support", backend.format().label());
            if backend.is_available() {
                CheckResult::pass(&name, &format!("available via {}", backend.name()))
            } else {
                CheckResult::fail(
                    &name,
                    &format!("{} is not compiled in", backend.name()),
                    feature_hint(backend.format()),
                )
            }
        })
        .collect();

    checks.push(CheckResult::pass(
        "Readability scores",
        "built-in Flesch reading ease",
    ));

    let failed = checks.iter().filter(|c| !c.passed).count();
    let all_passed = failed == 0;
    let summary = if all_passed {
        "All document formats are supported".to_string()
    } else {
        format!("{} optional feature(s) unavailable", failed)
    };

    for check in &checks {
        if check.passed {
            info!("✅ {}: {}", check.name, check.message);
        } else {
            warn!("⚠️ {}: {}", check.name, check.message);
        }
    }

    CapabilityReport {
        all_passed,
        checks,
        summary,
    }
}

fn feature_hint(format: DocumentFormat) -> Option<String> {
    match format {
        DocumentFormat::Pdf => Some("rebuild with `--features pdf` for PDF support".to_string()),
        DocumentFormat::Docx => {
            Some("rebuild with `--features docx` for Word documents".to_string())
        }
        DocumentFormat::Text | DocumentFormat::Code => None,
    }
}
