use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No documents were given to index. Callers check for an empty filtered
    /// catalog before ranking.
    #[error("cannot build a catalog index from an empty corpus")]
    EmptyCorpus,
}
