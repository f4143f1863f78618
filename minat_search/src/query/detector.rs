//! Question detection for query intent analysis.
//!
//! A query that reads like a question ("bagaimana cara belajar efektif?")
//! gets an extra AI answer even when catalog matches exist.

use serde::{Deserialize, Serialize};

/// The detected intent of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// The user asks something: "apa", "bagaimana", "tips", ...
    Question,
    /// A plain statement of interest.
    #[default]
    Statement,
}

impl QueryIntent {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Question => "question",
            Self::Statement => "statement",
        }
    }

    #[must_use]
    pub const fn is_question(&self) -> bool {
        matches!(self, Self::Question)
    }
}

/// Default question markers.
#[must_use]
pub fn default_question_markers() -> Vec<String> {
    vec![
        "apa".to_string(),
        "bagaimana".to_string(),
        "kenapa".to_string(),
        "tips".to_string(),
        "cara".to_string(),
    ]
}

/// Substring-based question detector.
#[derive(Debug, Clone)]
pub struct QueryIntentDetector {
    markers: Vec<String>,
}

impl QueryIntentDetector {
    #[must_use]
    pub fn new(markers: Vec<String>) -> Self {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_question_markers())
    }

    /// Detect the intent of the raw query.
    #[must_use]
    pub fn detect(&self, raw_text: &str) -> QueryIntent {
        let lower = raw_text.to_lowercase();
        if self.markers.iter().any(|m| lower.contains(m.as_str())) {
            QueryIntent::Question
        } else {
            QueryIntent::Statement
        }
    }
}

impl Default for QueryIntentDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_questions() {
        let detector = QueryIntentDetector::with_defaults();
        assert_eq!(detector.detect("Cara belajar efektif?"), QueryIntent::Question);
        assert_eq!(detector.detect("Tips lulus cepat"), QueryIntent::Question);
        assert_eq!(detector.detect("saya suka menggambar"), QueryIntent::Statement);
    }

    #[test]
    fn substring_matching_is_loose() {
        // "apapun" contains "apa".
        let detector = QueryIntentDetector::with_defaults();
        assert!(detector.detect("suka apapun").is_question());
    }

    #[test]
    fn intent_names() {
        assert_eq!(QueryIntent::Question.as_str(), "question");
        assert_eq!(QueryIntent::default(), QueryIntent::Statement);
    }
}
