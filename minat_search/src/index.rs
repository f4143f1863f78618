//! TF-IDF vector space over the filtered course catalog.
//!
//! The vocabulary and document frequencies come from the records in scope, so
//! an index is only valid for the exact subset it was built from. Narrowing
//! the catalog by program or semester means building a new index.
//!
//! Weighting:
//! - `tf(t, d)`: raw count of term `t` in document `d`
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
//! - weight = `tf * idf`

use std::collections::HashMap;

use minat_core::{CourseRecord, SearchError};
use tracing::debug;

use crate::scoring::SparseVector;
use crate::tokenizer::tokenize;

/// A query projected into an index's vector space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVector(pub(crate) SparseVector);

impl QueryVector {
    /// True when no query term is in the index vocabulary.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Term-weighted vectors for every record of one filtered corpus.
#[derive(Debug, Clone)]
pub struct CatalogIndex<'a> {
    records: Vec<&'a CourseRecord>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    documents: Vec<SparseVector>,
}

impl<'a> CatalogIndex<'a> {
    /// Build the index over the `combined_text` of `records`, keeping their order.
    ///
    /// # Errors
    /// Returns [`SearchError::EmptyCorpus`] when `records` is empty.
    pub fn build<I>(records: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = &'a CourseRecord>,
    {
        let records: Vec<&'a CourseRecord> = records.into_iter().collect();
        if records.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        let mut term_counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(records.len());

        for record in &records {
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for token in tokenize(record.combined_text()) {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token).or_insert(next_id);
                if id == doc_freq.len() {
                    doc_freq.push(0);
                }
                *counts.entry(id).or_insert(0) += 1;
            }
            for id in counts.keys() {
                doc_freq[*id] += 1;
            }
            term_counts.push(counts);
        }

        let n = records.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|df| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let documents = term_counts
            .into_iter()
            .map(|counts| Self::weigh(counts, &idf))
            .collect();

        debug!(
            "Built catalog index: {} documents, {} terms",
            records.len(),
            vocabulary.len()
        );

        Ok(Self {
            records,
            vocabulary,
            idf,
            documents,
        })
    }

    /// Project `expanded_text` into this index's vector space.
    ///
    /// Terms outside the corpus vocabulary carry no weight.
    #[must_use]
    pub fn vectorize_query(&self, expanded_text: &str) -> QueryVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokenize(expanded_text) {
            if let Some(id) = self.vocabulary.get(&token) {
                *counts.entry(*id).or_insert(0) += 1;
            }
        }
        QueryVector(Self::weigh(counts, &self.idf))
    }

    fn weigh(counts: HashMap<usize, usize>, idf: &[f64]) -> SparseVector {
        SparseVector::from_entries(
            counts
                .into_iter()
                .map(|(id, tf)| (id, tf as f64 * idf[id]))
                .collect(),
        )
    }

    /// Records in index order.
    #[must_use]
    pub fn records(&self) -> &[&'a CourseRecord] {
        &self.records
    }

    /// Number of indexed documents. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; an empty corpus cannot be indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|id| self.idf[*id])
    }

    /// Document vectors, parallel to [`Self::records`].
    pub(crate) fn vectors(&self) -> &[SparseVector] {
        &self.documents
    }
}
