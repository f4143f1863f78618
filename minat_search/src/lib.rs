//! Query understanding and relevance ranking for the course catalog.
//!
//! The pipeline turns free text into a ranked list of courses:
//! - **`query`**: negation stripping, keyword expansion and intent detection
//! - **`lexicon`**: interest keywords mapped to related domain terms
//! - **`index`**: TF-IDF vector space over the filtered catalog
//! - **`ranker`**: cosine scoring, threshold and top-k policy
//! - **`engine`**: the whole pipeline behind one call

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

pub mod advice;
pub mod engine;
pub mod index;
pub mod lexicon;
pub mod query;
pub mod ranker;
mod scoring;
mod tokenizer;

pub use engine::{Recommendation, Recommender};
pub use index::{CatalogIndex, QueryVector};
pub use lexicon::{Lexicon, LexiconEntry};
pub use query::detector::{QueryIntent, QueryIntentDetector};
pub use query::expander::QueryExpander;
pub use query::normalizer::{QueryNormalizer, default_negation_markers};
pub use ranker::{Ranker, RankingOptions};
