use std::io::{BufReader, Read};

use anyhow::{anyhow, Result};

use crate::data::document::Document;
use crate::error::AnalysisError;

/// Parser for annotator output serialized as JSON, a JSON array or JSONL
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser {
    validate: bool,
}

impl DocumentParser {
    /// Create a parser that validates every parsed document
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Create a parser that returns documents as-is
    pub fn without_validation() -> Self {
        Self { validate: false }
    }

    /// Validate document structure before analysis.
    ///
    /// Sentences must be non-empty and token positions must run from 0
    /// without gaps across the whole document. Governor positions are
    /// checked later, sentence by sentence, by the dependency table.
    pub fn validate_document(&self, doc: &Document) -> Result<(), AnalysisError> {
        let mut expected = 0usize;
        for (sentence_idx, sentence) in doc.sentences.iter().enumerate() {
            if sentence.is_empty() {
                return Err(AnalysisError::EmptySentence {
                    sentence_id: sentence_idx + 1,
                });
            }
            for token in &sentence.tokens {
                if token.i != expected {
                    return Err(AnalysisError::InvalidDocument(format!(
                        "document '{}' sentence {}: token '{}' has position {} but {} was expected",
                        doc.id,
                        sentence_idx + 1,
                        token.text,
                        token.i,
                        expected
                    )));
                }
                expected += 1;
            }
        }
        Ok(())
    }

    /// Parse from a reader (handles a single document, an array of documents or JSONL)
    pub fn parse_reader<R: Read>(&self, mut reader: BufReader<R>) -> Result<Vec<Document>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse_json(&content)
    }

    /// Parse a string holding a single document, an array of documents or JSONL.
    ///
    /// When the JSONL fallback fails before reading any document, the error
    /// from reading the whole input as JSON is reported instead.
    pub fn parse_json(&self, json_str: &str) -> Result<Vec<Document>> {
        let docs = match Self::deserialize(json_str) {
            Ok(docs) => docs,
            Err(whole_err) => Self::deserialize_lines(json_str).map_err(|(line_no, parsed, line_err)| {
                if parsed == 0 {
                    anyhow::Error::new(AnalysisError::InvalidDocument(whole_err.to_string()))
                } else {
                    anyhow!("Failed to parse JSONL line {}: {}", line_no, line_err)
                }
            })?,
        };

        for doc in &docs {
            self.check(doc)?;
        }
        Ok(docs)
    }

    /// A single document, else an array; the error kept is the one that fits the input
    fn deserialize(json_str: &str) -> Result<Vec<Document>, serde_json::Error> {
        match serde_json::from_str::<Document>(json_str) {
            Ok(doc) => Ok(vec![doc]),
            Err(single_err) => match serde_json::from_str::<Vec<Document>>(json_str) {
                Ok(docs) => Ok(docs),
                Err(array_err) if json_str.trim_start().starts_with('[') => Err(array_err),
                Err(_) => Err(single_err),
            },
        }
    }

    /// One document per non-blank line. Errors carry the 1-based line number
    /// and how many documents were read before it.
    fn deserialize_lines(content: &str) -> Result<Vec<Document>, (usize, usize, serde_json::Error)> {
        let mut documents = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let doc = serde_json::from_str::<Document>(line)
                .map_err(|e| (line_no + 1, documents.len(), e))?;
            documents.push(doc);
        }
        Ok(documents)
    }

    fn check(&self, doc: &Document) -> Result<()> {
        if self.validate {
            self.validate_document(doc)?;
        }
        Ok(())
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}
