//! Error types for the analysis layer.

use thiserror::Error;

/// Errors raised while deriving tables from an annotated document.
///
/// Everything else in the crate is total over well-formed input: empty
/// documents, empty vocabularies and empty alignment windows degrade to
/// empty results or default metrics instead of an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("sentence {sentence_id}, token {token_id}: governor at position {head} lies outside the sentence")]
    CrossSentenceHead {
        sentence_id: usize,
        token_id: usize,
        head: usize,
    },

    #[error("sentence {sentence_id} has no tokens")]
    EmptySentence { sentence_id: usize },

    #[error("invalid morphological feature '{0}' (expected Feature=Value)")]
    InvalidMorphFeature(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}
