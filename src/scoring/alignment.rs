use serde::{Deserialize, Serialize};

use crate::engine::constants::AMBIGUOUS_PAIR;

/// Counts and metrics for one (source, normalized, reference) triple.
///
/// Only positions whose source character is, case-insensitively, one of
/// the ambiguous pair count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignmentScore {
    pub total_relevant: usize,
    pub correct: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub changes_needed: usize,
    pub changes_made: usize,
}

impl AlignmentScore {
    /// correct / relevant; 1.0 with nothing to score
    pub fn accuracy(&self) -> f64 {
        ratio_or_one(self.correct, self.total_relevant)
    }

    /// true positives / changes made; 1.0 when nothing was changed
    pub fn precision(&self) -> f64 {
        ratio_or_one(self.true_positives, self.changes_made)
    }

    /// true positives / changes needed; 1.0 when nothing needed changing
    pub fn recall(&self) -> f64 {
        ratio_or_one(self.true_positives, self.changes_needed)
    }

    /// Harmonic mean of precision and recall; 0.0 when both are zero
    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r > 0.0 {
            2.0 * p * r / (p + r)
        } else {
            0.0
        }
    }

    /// Counts plus the derived metrics, for reporting
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            counts: *self,
            accuracy: self.accuracy(),
            precision: self.precision(),
            recall: self.recall(),
            f1: self.f1(),
        }
    }
}

/// Serialized form of a score with its metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    #[serde(flatten)]
    pub counts: AlignmentScore,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

fn ratio_or_one(num: usize, den: usize) -> f64 {
    if den == 0 {
        1.0
    } else {
        num as f64 / den as f64
    }
}

/// Compares normalizer output with a reference, character by character
#[derive(Debug, Clone, Copy)]
pub struct AlignmentScorer {
    pair: (char, char),
}

impl Default for AlignmentScorer {
    fn default() -> Self {
        Self::new(AMBIGUOUS_PAIR)
    }
}

impl AlignmentScorer {
    /// A scorer for a lower-case character pair
    pub fn new(pair: (char, char)) -> Self {
        Self { pair }
    }

    fn is_relevant(&self, c: char) -> bool {
        c.to_lowercase().eq(std::iter::once(self.pair.0))
            || c.to_lowercase().eq(std::iter::once(self.pair.1))
    }

    /// Score the aligned prefix shared by all three strings.
    ///
    /// Strings of unequal length are cut to the shortest rather than
    /// rejected.
    pub fn score(&self, source: &str, normalized: &str, reference: &str) -> AlignmentScore {
        let src: Vec<char> = source.chars().collect();
        let norm: Vec<char> = normalized.chars().collect();
        let refr: Vec<char> = reference.chars().collect();
        let min_len = src.len().min(norm.len()).min(refr.len());
        if src.len() != norm.len() || src.len() != refr.len() {
            log::warn!(
                "Alignment lengths differ (source {}, normalized {}, reference {}); scoring first {} characters",
                src.len(),
                norm.len(),
                refr.len(),
                min_len
            );
        }

        let mut score = AlignmentScore::default();
        for i in 0..min_len {
            let (s, n, r) = (src[i], norm[i], refr[i]);
            if !self.is_relevant(s) {
                continue;
            }
            score.total_relevant += 1;

            let needed = s != r;
            let made = s != n;
            if needed {
                score.changes_needed += 1;
            }
            if made {
                score.changes_made += 1;
            }

            if n == r {
                score.correct += 1;
                if needed && made {
                    score.true_positives += 1;
                }
            } else if made && !needed {
                score.false_positives += 1;
            } else if needed && !made {
                score.false_negatives += 1;
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_correct_change() {
        let score = AlignmentScorer::default().score("lingva", "lingua", "lingua");
        assert_eq!(score.total_relevant, 1);
        assert_eq!(score.correct, 1);
        assert_eq!(score.true_positives, 1);
        assert!(close(score.accuracy(), 1.0));
        assert!(close(score.precision(), 1.0));
        assert!(close(score.recall(), 1.0));
        assert!(close(score.f1(), 1.0));
    }

    #[test]
    fn test_identity_scores_perfect() {
        let text = "Ita fac, mi Lucili: vindica te tibi";
        let source = text.replace('v', "u");
        let score = AlignmentScorer::default().score(&source, text, text);
        assert!(close(score.accuracy(), 1.0));
        assert!(close(score.f1(), 1.0));
    }

    #[test]
    fn test_nothing_needed_nothing_made() {
        let text = "tu cum tuum";
        let score = AlignmentScorer::default().score(text, text, text);
        assert_eq!(score.changes_needed, 0);
        assert_eq!(score.changes_made, 0);
        assert!(close(score.precision(), 1.0));
        assert!(close(score.recall(), 1.0));
        assert!(close(score.accuracy(), 1.0));
    }

    #[test]
    fn test_false_positive_and_negative() {
        // source u-only, reference "uva", system changed the wrong u
        let score = AlignmentScorer::default().score("uua", "vua", "uva");
        assert_eq!(score.total_relevant, 2);
        assert_eq!(score.correct, 0);
        assert_eq!(score.changes_needed, 1);
        assert_eq!(score.changes_made, 1);
        assert_eq!(score.false_positives, 1);
        assert_eq!(score.false_negatives, 1);
        assert_eq!(score.true_positives, 0);
        assert!(close(score.precision(), 0.0));
        assert!(close(score.recall(), 0.0));
        assert!(close(score.f1(), 0.0));
    }

    #[test]
    fn test_case_insensitive_relevance() {
        let score = AlignmentScorer::default().score("Uenit", "Venit", "Venit");
        assert_eq!(score.total_relevant, 1);
        assert_eq!(score.true_positives, 1);
    }

    #[test]
    fn test_truncates_to_shortest() {
        let score = AlignmentScorer::default().score("uia uia", "via", "via uia");
        assert_eq!(score.total_relevant, 1);
        assert_eq!(score.correct, 1);
    }

    #[test]
    fn test_empty_window_defaults() {
        let score = AlignmentScorer::default().score("", "", "");
        assert_eq!(score, AlignmentScore::default());
        assert!(close(score.accuracy(), 1.0));
        assert!(close(score.precision(), 1.0));
        assert!(close(score.recall(), 1.0));
        assert!(close(score.f1(), 1.0));
    }

    #[test]
    fn test_partial_recall() {
        // two consonantal u's needed, system only fixed one
        let score = AlignmentScorer::default().score("uiuus", "viuus", "vivus");
        assert_eq!(score.changes_needed, 2);
        assert_eq!(score.changes_made, 1);
        assert_eq!(score.true_positives, 1);
        assert_eq!(score.false_negatives, 1);
        assert!(close(score.precision(), 1.0));
        assert!(close(score.recall(), 0.5));
        assert!(close(score.f1(), 2.0 / 3.0));
        assert!(close(score.accuracy(), 2.0 / 3.0));
    }

    #[test]
    fn test_summary_serializes_flat() {
        let summary = AlignmentScorer::default().score("lingva", "lingua", "lingua").summary();
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["total_relevant"], 1);
        assert_eq!(json["f1"], 1.0);
    }
}
