//! Analysis engine over annotated documents
//!
//! This module is organized into the following submodules:
//! - `constants`: Defaults and labels shared across views
//! - `config`: Analysis configuration (AnalysisConfig)
//! - `core`: The Analyzer facade
//! - `dependency`: Sentence-relative dependency tables
//! - `vocabulary_matcher`: Core-vocabulary span overlay and coverage
//! - `labels`: Readable labels for morphological features and POS tags
//! - `tokens`: Token and morphology tables
//! - `similarity`: Ranking of caller-supplied word vectors

pub mod config;
pub mod constants;
pub mod core;
pub mod dependency;
pub mod labels;
pub mod similarity;
pub mod tokens;
pub mod vocabulary_matcher;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use config::AnalysisConfig;
pub use constants::*;
pub use self::core::Analyzer;
pub use dependency::DependencyTableBuilder;
pub use labels::{FeatureLabelMap, FEATURE_LABELS};
pub use similarity::{cosine_similarity, SimilarWord, SimilarityBand, VectorTable};
pub use tokens::{build_morphology_table, build_token_table, trim_whitespace_tokens};
pub use vocabulary_matcher::VocabularySpanMatcher;
