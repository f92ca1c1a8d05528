//! Scoring and inspection of U/V normalization output.
//!
//! - `alignment`: character-aligned accuracy, precision, recall and F1
//! - `highlight`: per-character change marks for display
//! - `normalizer`: the contract of the external rule engine

pub mod alignment;
pub mod highlight;
pub mod normalizer;

pub use alignment::{AlignmentScore, AlignmentScorer, ScoreSummary};
pub use highlight::{classify_changes, CharMark, MarkedChar};
pub use normalizer::{
    evaluate_reference, group_changes_by_rule, to_u_only, Evaluation, NormalizationResult,
    Normalizer, RuleChange,
};
