//! Sentence-relative dependency tables.
//!
//! The annotator exposes governors as document-absolute positions; rows
//! renumber tokens from 1 inside each sentence and express the governor in
//! that local numbering, with 0 for the root.

use crate::data::{Document, Sentence, Token};
use crate::error::AnalysisError;
use crate::results::{DependencyRow, DependencyTable};

/// Builds CoNLL-style rows from a segmented document
#[derive(Debug, Clone, Copy)]
pub struct DependencyTableBuilder {
    max_tokens: usize,
}

impl DependencyTableBuilder {
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    /// Build rows for the whole document, stopping once `max_tokens` rows
    /// have been emitted. Rows of a partially processed sentence are kept.
    pub fn build(&self, doc: &Document) -> Result<DependencyTable, AnalysisError> {
        let mut table = DependencyTable::default();

        for (sent_idx, sentence) in doc.sentences.iter().enumerate() {
            if table.rows.len() >= self.max_tokens {
                table.truncated = true;
                break;
            }
            let sent_id = sent_idx + 1;
            if sentence.is_empty() {
                return Err(AnalysisError::EmptySentence { sentence_id: sent_id });
            }

            for (tok_idx, token) in sentence.tokens.iter().enumerate() {
                if table.rows.len() >= self.max_tokens {
                    table.truncated = true;
                    break;
                }
                let head = local_head(sentence, sent_id, tok_idx + 1, token)?;
                table.rows.push(DependencyRow {
                    sent_id,
                    token_id: tok_idx + 1,
                    text: token.text.clone(),
                    lemma: token.lemma.clone(),
                    pos: token.pos.clone(),
                    tag: token.tag.clone(),
                    morph: token.morph.format_pairs(),
                    head,
                    dep: token.dep.clone(),
                    ent_type: token.ent_type.clone(),
                });
            }
        }

        table.tokens_processed = table.rows.len();
        if table.truncated {
            log::debug!(
                "Dependency table truncated at {} of {} tokens",
                table.tokens_processed,
                doc.num_tokens()
            );
        }
        Ok(table)
    }
}

/// Governor as a local id; positions are looked up, not assumed contiguous
fn local_head(
    sentence: &Sentence,
    sent_id: usize,
    token_id: usize,
    token: &Token,
) -> Result<usize, AnalysisError> {
    if token.is_root() {
        return Ok(0);
    }
    sentence
        .local_id(token.head)
        .ok_or(AnalysisError::CrossSentenceHead {
            sentence_id: sent_id,
            token_id,
            head: token.head,
        })
}
