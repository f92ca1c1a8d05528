//! Contract of the external U/V rule engine and helpers around it

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::alignment::{AlignmentScore, AlignmentScorer};

/// One character rewritten by a named rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleChange {
    pub rule: String,
    /// Surrounding text, for display
    pub context: String,
    pub original: char,
    pub normalized: char,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub normalized: String,
    pub changes: Vec<RuleChange>,
}

/// An orthographic normalizer, e.g. the LatinCy U/V rule engine.
///
/// Implementations must keep the output character-aligned with the input.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> String {
        self.normalize_detailed(text).normalized
    }

    fn normalize_detailed(&self, text: &str) -> NormalizationResult;
}

/// Collapse the u/v distinction: every `v` becomes `u`, every `V` becomes `U`
pub fn to_u_only(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'v' => 'u',
            'V' => 'U',
            other => other,
        })
        .collect()
}

/// Changes grouped by rule name, rules in name order
pub fn group_changes_by_rule(changes: &[RuleChange]) -> BTreeMap<&str, Vec<&RuleChange>> {
    let mut by_rule: BTreeMap<&str, Vec<&RuleChange>> = BTreeMap::new();
    for change in changes {
        by_rule.entry(change.rule.as_str()).or_default().push(change);
    }
    by_rule
}

/// A reference run through u-only conversion, the normalizer and the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub source: String,
    pub normalized: String,
    pub score: AlignmentScore,
}

/// Evaluate a normalizer against correctly spelled reference text
pub fn evaluate_reference<N: Normalizer + ?Sized>(
    normalizer: &N,
    scorer: &AlignmentScorer,
    reference: &str,
) -> Evaluation {
    let source = to_u_only(reference);
    let normalized = normalizer.normalize(&source);
    let score = scorer.score(&source, &normalized, reference);
    Evaluation {
        source,
        normalized,
        score,
    }
}
