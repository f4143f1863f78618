//! Cosine ranking with a relevance floor and a result cap.

use minat_core::ScoredMatch;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::{CatalogIndex, QueryVector};
use crate::scoring::cosine_similarity;

/// Threshold and cap applied to ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingOptions {
    /// Matches scoring at or below this are dropped.
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    /// Maximum number of matches returned.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

const fn default_min_score() -> f64 {
    0.15
}
const fn default_top_k() -> usize {
    5
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            top_k: default_top_k(),
        }
    }
}

impl RankingOptions {
    /// Override whichever fields are given.
    #[must_use]
    pub fn with_overrides(self, min_score: Option<f64>, top_k: Option<usize>) -> Self {
        Self {
            min_score: min_score.unwrap_or(self.min_score),
            top_k: top_k.unwrap_or(self.top_k),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    options: RankingOptions,
}

impl Ranker {
    #[must_use]
    pub const fn new(options: RankingOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> RankingOptions {
        self.options
    }

    /// Score every indexed course against `query` and keep the best.
    ///
    /// Only scores strictly above `min_score` survive. Results are sorted by
    /// descending score; equal scores keep catalog order. An empty result is
    /// not an error.
    #[must_use]
    pub fn rank<'a>(&self, query: &QueryVector, index: &CatalogIndex<'a>) -> Vec<ScoredMatch<'a>> {
        let RankingOptions { min_score, top_k } = self.options;
        if top_k == 0 || query.is_zero() {
            debug!("Nothing to rank: top_k={}, zero query={}", top_k, query.is_zero());
            return Vec::new();
        }

        let scores: Vec<f64> = index
            .vectors()
            .par_iter()
            .map(|doc| cosine_similarity(&query.0, doc))
            .collect();

        let mut matches: Vec<ScoredMatch<'a>> = index
            .records()
            .iter()
            .copied()
            .zip(scores)
            .filter(|(_, score)| *score > min_score)
            .map(|(course, score)| ScoredMatch { course, score })
            .collect();

        // Stable: ties keep catalog order.
        matches.par_sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(top_k);

        debug!(
            "Ranked {} documents, {} above {}",
            index.len(),
            matches.len(),
            min_score
        );

        matches
    }
}
