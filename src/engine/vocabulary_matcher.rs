//! Core-vocabulary span overlay.
//!
//! Spans are computed next to the token sequence and never alter it: a run
//! of consecutive tokens whose lemmas are all in the vocabulary becomes one
//! labeled span, and every token in a span is flagged as covered.

use crate::data::{CoreVocabulary, Document, Token};
use crate::results::CoverageReport;
use crate::types::{LabeledSpan, Span};

/// Matches token lemmas against a closed vocabulary
#[derive(Debug, Clone)]
pub struct VocabularySpanMatcher<'v> {
    vocabulary: &'v CoreVocabulary,
    label: String,
}

impl<'v> VocabularySpanMatcher<'v> {
    pub fn new(vocabulary: &'v CoreVocabulary, label: impl Into<String>) -> Self {
        Self {
            vocabulary,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Overlay spans on every token of the document, in document order
    pub fn match_document(&self, doc: &Document) -> CoverageReport {
        self.match_tokens(doc.tokens())
    }

    /// Overlay spans on a token sequence; span bounds index into that sequence
    pub fn match_tokens<'a, I>(&self, tokens: I) -> CoverageReport
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut report = CoverageReport::default();
        let mut open: Option<usize> = None;
        let mut len = 0;

        for (idx, token) in tokens.into_iter().enumerate() {
            len = idx + 1;
            if !token.is_punct {
                report.content_tokens += 1;
            }

            let hit = self.vocabulary.contains(&token.lemma);
            report.covered.push(hit);
            match (hit, open) {
                (true, None) => open = Some(idx),
                (false, Some(start)) => {
                    self.close(&mut report, start, idx);
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            self.close(&mut report, start, len);
        }

        log::debug!(
            "Core vocabulary: {} spans over {} of {} content tokens",
            report.spans.len(),
            report.covered_tokens,
            report.content_tokens
        );
        report
    }

    fn close(&self, report: &mut CoverageReport, start: usize, end: usize) {
        report.covered_tokens += end - start;
        report
            .spans
            .push(LabeledSpan::new(Span::new(start, end), self.label.as_str()));
    }
}
