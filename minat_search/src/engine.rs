//! Recommendation pipeline.
//!
//! Runs the query stages and the ranking against one filtered catalog:
//! 1. Normalize: lower-case and strip negated words
//! 2. Expand: append lexicon terms for mentioned interests
//! 3. Index: build TF-IDF vectors over the records in scope
//! 4. Rank: cosine score, threshold, sort and cap
//!
//! An empty match list is the caller's cue to ask the AI assistant instead.

use minat_core::{CourseRecord, Query, ScoredMatch, SearchError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::index::CatalogIndex;
use crate::lexicon::Lexicon;
use crate::query::detector::{QueryIntent, QueryIntentDetector, default_question_markers};
use crate::query::expander::{QueryExpander, QueryExpanderConfig};
use crate::query::normalizer::{NormalizerConfig, QueryNormalizer, default_negation_markers};
use crate::ranker::{Ranker, RankingOptions};

/// Query-understanding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_negation_markers")]
    pub negation_markers: Vec<String>,
    #[serde(default = "default_question_markers")]
    pub question_markers: Vec<String>,
    #[serde(default)]
    pub expansion: QueryExpanderConfig,
    /// Replaces the built-in lexicon when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<Lexicon>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            negation_markers: default_negation_markers(),
            question_markers: default_question_markers(),
            expansion: QueryExpanderConfig::default(),
            lexicon: None,
        }
    }
}

/// Outcome of one recommendation request.
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub query: Query,
    pub intent: QueryIntent,
    pub matches: Vec<ScoredMatch<'a>>,
}

impl Recommendation<'_> {
    /// True when no course cleared the threshold.
    #[must_use]
    pub fn needs_fallback(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Course recommender over a read-only lexicon.
#[derive(Debug, Clone)]
pub struct Recommender {
    normalizer: QueryNormalizer,
    expander: QueryExpander,
    detector: QueryIntentDetector,
    lexicon: Lexicon,
    options: RankingOptions,
}

impl Recommender {
    #[must_use]
    pub fn new(config: SearchConfig, options: RankingOptions) -> Self {
        Self {
            normalizer: QueryNormalizer::new(NormalizerConfig {
                negation_markers: config.negation_markers,
            }),
            expander: QueryExpander::new(&config.expansion),
            detector: QueryIntentDetector::new(config.question_markers),
            lexicon: config.lexicon.unwrap_or_default(),
            options,
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SearchConfig::default(), RankingOptions::default())
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub const fn options(&self) -> RankingOptions {
        self.options
    }

    /// Normalize and expand `raw_text`.
    #[must_use]
    pub fn analyze(&self, raw_text: &str) -> Query {
        let normalized_text = self.normalizer.normalize(raw_text);
        let expanded_text = self.expander.expand(&normalized_text, &self.lexicon);
        debug!("Expanded query: {}", expanded_text);
        Query {
            raw_text: raw_text.to_string(),
            normalized_text,
            expanded_text,
        }
    }

    /// Rank `records` against `raw_text` with the default options.
    ///
    /// # Errors
    /// Returns [`SearchError::EmptyCorpus`] when `records` is empty.
    pub fn recommend<'a, I>(
        &self,
        raw_text: &str,
        records: I,
    ) -> Result<Recommendation<'a>, SearchError>
    where
        I: IntoIterator<Item = &'a CourseRecord>,
    {
        self.recommend_with(raw_text, records, self.options)
    }

    /// Rank `records` against `raw_text` with per-call options.
    ///
    /// # Errors
    /// Returns [`SearchError::EmptyCorpus`] when `records` is empty.
    pub fn recommend_with<'a, I>(
        &self,
        raw_text: &str,
        records: I,
        options: RankingOptions,
    ) -> Result<Recommendation<'a>, SearchError>
    where
        I: IntoIterator<Item = &'a CourseRecord>,
    {
        let query = self.analyze(raw_text);
        let intent = self.detector.detect(raw_text);

        let index = CatalogIndex::build(records)?;
        let query_vector = index.vectorize_query(&query.expanded_text);
        let matches = Ranker::new(options).rank(&query_vector, &index);

        info!(
            "Query '{}' ({}) matched {} of {} courses",
            raw_text,
            intent.as_str(),
            matches.len(),
            index.len()
        );

        Ok(Recommendation {
            query,
            intent,
            matches,
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconEntry;

    #[test]
    fn analyze_runs_both_stages() {
        let recommender = Recommender::with_defaults();
        let query = recommender.analyze("Saya BENCI masak tapi suka ngoding");

        assert_eq!(query.raw_text, "Saya BENCI masak tapi suka ngoding");
        assert_eq!(query.normalized_text, "saya benci  tapi suka ngoding");
        assert!(query.expanded_text.ends_with("programming python web"));
        assert!(!query.expanded_text.contains("culinary"));
    }

    #[test]
    fn custom_lexicon_replaces_builtin() {
        let config = SearchConfig {
            lexicon: Some(Lexicon::new(vec![LexiconEntry::new("kopi", "barista")])),
            ..SearchConfig::default()
        };
        let recommender = Recommender::new(config, RankingOptions::default());

        assert_eq!(recommender.lexicon().len(), 1);
        assert_eq!(recommender.analyze("suka kopi").expanded_text, "suka kopi barista");
        assert_eq!(recommender.analyze("suka masak").expanded_text, "suka masak");
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let records: Vec<CourseRecord> = Vec::new();
        let result = Recommender::with_defaults().recommend("apa saja", &records);
        assert_eq!(result.err(), Some(SearchError::EmptyCorpus));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn config_defaults_from_empty_json() {
        let config: SearchConfig =
            serde_json::from_str("{}").expect("empty object should deserialize");
        assert_eq!(config.negation_markers, default_negation_markers());
        assert!(config.expansion.enabled);
        assert!(config.lexicon.is_none());
    }
}
