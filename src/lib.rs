pub mod data;
pub mod engine;
pub mod error;
pub mod results;
pub mod scoring;
pub mod types;

pub use data::{CoreVocabulary, Document, DocumentParser, MorphFeatures, Sentence, Token};
pub use engine::{AnalysisConfig, Analyzer, DependencyTableBuilder, FeatureLabelMap, VocabularySpanMatcher};
pub use error::AnalysisError;
pub use results::{CoverageReport, DependencyRow, DependencyTable, TokenTable};
pub use scoring::{AlignmentScore, AlignmentScorer, Normalizer};
pub use types::{LabeledSpan, Span};
