//! Lower-casing and negation stripping.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default negation markers, in the order they are applied.
#[must_use]
pub fn default_negation_markers() -> Vec<String> {
    vec![
        "tidak suka".to_string(),
        "benci".to_string(),
        "gak suka".to_string(),
        "anti".to_string(),
    ]
}

/// Configuration for query normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Marker phrases, applied in list order.
    #[serde(default = "default_negation_markers")]
    pub negation_markers: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            negation_markers: default_negation_markers(),
        }
    }
}

/// Removes words the user said they do not want.
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    markers: Vec<String>,
}

impl QueryNormalizer {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            markers: config
                .negation_markers
                .into_iter()
                .map(|m| m.to_lowercase())
                .filter(|m| !m.trim().is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(NormalizerConfig::default())
    }

    /// Lower-case `raw_text` and strip negated words.
    ///
    /// For each marker, in order, the first token after the marker's first
    /// occurrence is removed everywhere in the text, including inside longer
    /// words. Each marker sees the text as left by the previous ones.
    ///
    /// Example: "saya tidak suka hitung tapi suka gambar" ->
    /// "saya tidak suka  tapi suka gambar"
    #[must_use]
    pub fn normalize(&self, raw_text: &str) -> String {
        let mut text = raw_text.to_lowercase();

        for marker in &self.markers {
            let Some(unwanted) = Self::negated_token(&text, marker) else {
                continue;
            };
            debug!("Negation marker '{}' removes '{}'", marker, unwanted);
            text = text.replace(&unwanted, "");
        }

        text
    }

    /// First whitespace-delimited token following the first occurrence of `marker`.
    fn negated_token(text: &str, marker: &str) -> Option<String> {
        let (_, rest) = text.split_once(marker)?;
        rest.split_whitespace().next().map(str::to_string)
    }

    /// The marker phrases in application order.
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
