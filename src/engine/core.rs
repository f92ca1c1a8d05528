//! Core Analyzer struct: one entry point per dashboard view

use crate::data::{CoreVocabulary, Document, Sentence, CORE_VOCABULARY};
use crate::engine::config::AnalysisConfig;
use crate::engine::dependency::DependencyTableBuilder;
use crate::engine::labels::{FeatureLabelMap, FEATURE_LABELS};
use crate::engine::similarity::{SimilarWord, VectorTable};
use crate::engine::tokens::{build_morphology_table, build_token_table, trim_whitespace_tokens};
use crate::engine::vocabulary_matcher::VocabularySpanMatcher;
use crate::error::AnalysisError;
use crate::results::{CoverageReport, DependencyTable, MorphologyTable, TokenTable};
use crate::scoring::{evaluate_reference, AlignmentScore, AlignmentScorer, Evaluation, Normalizer};
use crate::types::LabeledSpan;

/// Derives every view from an annotated document.
///
/// Holds only configuration and borrowed read-only tables, so one analyzer
/// can serve any number of requests; each call allocates its own output.
#[derive(Debug, Clone)]
pub struct Analyzer<'t> {
    config: AnalysisConfig,
    vocabulary: &'t CoreVocabulary,
    labels: &'t FeatureLabelMap,
    scorer: AlignmentScorer,
}

impl Analyzer<'static> {
    /// An analyzer over the built-in core vocabulary and label tables
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_tables(config, &CORE_VOCABULARY, &FEATURE_LABELS)
    }
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl<'t> Analyzer<'t> {
    pub fn with_tables(
        config: AnalysisConfig,
        vocabulary: &'t CoreVocabulary,
        labels: &'t FeatureLabelMap,
    ) -> Self {
        Self {
            config,
            vocabulary,
            labels,
            scorer: AlignmentScorer::default(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn labels(&self) -> &FeatureLabelMap {
        self.labels
    }

    /// Flat token table, cut at `max_tokens`
    pub fn token_table(&self, doc: &Document) -> TokenTable {
        build_token_table(doc, self.config.max_tokens)
    }

    /// Sentence-relative dependency rows, cut at `max_tokens`
    pub fn dependency_table(&self, doc: &Document) -> Result<DependencyTable, AnalysisError> {
        DependencyTableBuilder::new(self.config.max_tokens).build(doc)
    }

    /// Sentences for the tree view, at most `max_sentences`
    pub fn tree_sentences<'d>(&self, doc: &'d Document) -> (&'d [Sentence], bool) {
        doc.limited_sentences(self.config.max_sentences)
    }

    /// Core-vocabulary spans and coverage over the whole document
    pub fn core_vocabulary(&self, doc: &Document) -> CoverageReport {
        VocabularySpanMatcher::new(self.vocabulary, self.config.core_label.as_str()).match_document(doc)
    }

    /// Readable morphology for content tokens
    pub fn morphology_table(&self, doc: &Document) -> MorphologyTable {
        build_morphology_table(doc, self.labels)
    }

    /// Input text trimmed to `morph_token_limit` words, before annotation
    pub fn trim_input(&self, text: &str) -> (String, bool) {
        trim_whitespace_tokens(text, self.config.morph_token_limit)
    }

    /// One string per sentence
    pub fn sentences(&self, doc: &Document) -> Vec<String> {
        doc.sentence_texts()
    }

    pub fn entities(&self, doc: &Document) -> Vec<LabeledSpan> {
        doc.entities()
    }

    pub fn score(&self, source: &str, normalized: &str, reference: &str) -> AlignmentScore {
        self.scorer.score(source, normalized, reference)
    }

    /// Run `normalizer` on the u-only form of `reference` and score the result
    pub fn evaluate<N: Normalizer + ?Sized>(&self, normalizer: &N, reference: &str) -> Evaluation {
        evaluate_reference(normalizer, &self.scorer, reference)
    }

    /// The configured number of nearest candidates to `word`
    pub fn most_similar(&self, vectors: &VectorTable, word: &str) -> Option<Vec<SimilarWord>> {
        vectors.most_similar(word, self.config.top_n())
    }
}
