//! Word similarity over caller-supplied vectors.
//!
//! Vectors come from the external model; this module only ranks them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Cosine of the angle between two vectors.
///
/// `None` when the lengths differ or either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a * norm_b))
}

/// Qualitative reading of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityBand {
    High,
    Moderate,
    Low,
}

impl SimilarityBand {
    pub fn from_score(score: f32) -> Self {
        if score > 0.7 {
            Self::High
        } else if score > 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::High => "highly similar",
            Self::Moderate => "moderately similar",
            Self::Low => "not very similar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarWord {
    pub word: String,
    pub score: f32,
}

/// Candidate words and their vectors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VectorTable {
    vectors: HashMap<String, Vec<f32>>,
}

impl VectorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the vector for a word
    pub fn insert(&mut self, word: impl Into<String>, vector: Vec<f32>) {
        self.vectors.insert(word.into(), vector);
    }

    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Similarity of two words in the table
    pub fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        cosine_similarity(self.get(a)?, self.get(b)?)
    }

    /// The `n` candidates closest to `vector`, best first, skipping `exclude`.
    ///
    /// Candidates whose similarity is undefined are left out. Ties are
    /// broken alphabetically so the ranking is stable.
    pub fn most_similar_to(&self, vector: &[f32], exclude: &str, n: usize) -> Vec<SimilarWord> {
        let mut results: Vec<SimilarWord> = self
            .vectors
            .iter()
            .filter(|(word, _)| word.as_str() != exclude)
            .filter_map(|(word, candidate)| {
                cosine_similarity(vector, candidate).map(|score| SimilarWord {
                    word: word.clone(),
                    score,
                })
            })
            .collect();
        results.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        results.truncate(n);
        results
    }

    /// The `n` candidates closest to a word already in the table
    pub fn most_similar(&self, word: &str, n: usize) -> Option<Vec<SimilarWord>> {
        let vector = self.get(word)?;
        Some(self.most_similar_to(vector, word, n))
    }
}

impl FromIterator<(String, Vec<f32>)> for VectorTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f32>)>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> VectorTable {
        let mut t = VectorTable::new();
        t.insert("rex", vec![1.0, 0.0, 0.0]);
        t.insert("regina", vec![0.9, 0.1, 0.0]);
        t.insert("regnum", vec![0.7, 0.7, 0.0]);
        t.insert("aqua", vec![0.0, 0.0, 1.0]);
        t
    }

    #[test]
    fn test_cosine_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap() - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap().abs() < 1e-6);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), None);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), None);
        assert_eq!(cosine_similarity(&[], &[]), None);
    }

    #[test]
    fn test_most_similar_ranks_and_excludes_query() {
        let results = table().most_similar("rex", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].word, "regina");
        assert_eq!(results[1].word, "regnum");
        assert!(results[0].score >= results[1].score);
        assert!(results.iter().all(|r| r.word != "rex"));
    }

    #[test]
    fn test_unknown_word() {
        assert!(table().most_similar("lupus", 3).is_none());
        assert!(table().similarity("rex", "lupus").is_none());
    }

    #[test]
    fn test_bands() {
        assert_eq!(SimilarityBand::from_score(0.71), SimilarityBand::High);
        assert_eq!(SimilarityBand::from_score(0.7), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::from_score(0.41), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::from_score(0.4), SimilarityBand::Low);
        assert_eq!(SimilarityBand::from_score(-0.2).describe(), "not very similar");
        let rex_aqua = table().similarity("rex", "aqua").unwrap();
        assert_eq!(SimilarityBand::from_score(rex_aqua), SimilarityBand::Low);
    }
}
