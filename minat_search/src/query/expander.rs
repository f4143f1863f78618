//! Keyword expansion for improved retrieval recall.
//!
//! Interest words rarely appear in course titles ("menggambar" vs
//! "Ilustrasi Digital"), so each matching lexicon keyword appends its block
//! of domain terms to the query.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::Lexicon;

/// Configuration for query expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryExpanderConfig {
    /// Whether expansion is enabled.
    #[serde(default = "default_expansion_enabled")]
    pub enabled: bool,
}

const fn default_expansion_enabled() -> bool {
    true
}

impl Default for QueryExpanderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Appends lexicon expansions to a normalized query.
#[derive(Debug, Clone)]
pub struct QueryExpander {
    enabled: bool,
}

impl QueryExpander {
    #[must_use]
    pub const fn new(config: &QueryExpanderConfig) -> Self {
        Self {
            enabled: config.enabled,
        }
    }

    #[must_use]
    pub const fn with_defaults() -> Self {
        Self { enabled: true }
    }

    /// Expand `normalized_text` with every lexicon entry it mentions.
    ///
    /// Keywords match as plain substrings of the normalized text. Each
    /// matching entry contributes its expansion once, in lexicon order.
    #[must_use]
    pub fn expand(&self, normalized_text: &str, lexicon: &Lexicon) -> String {
        let mut expanded = normalized_text.to_string();
        if !self.enabled {
            return expanded;
        }

        for entry in lexicon.matches(normalized_text) {
            debug!("Expanding keyword '{}'", entry.keyword);
            expanded.push(' ');
            expanded.push_str(&entry.expansion);
        }

        expanded
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self::with_defaults()
    }
}
