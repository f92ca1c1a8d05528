use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::types::{LabeledSpan, Span};

/// Ordered morphological features of a token, e.g. `Case=Nom|Number=Sing`.
///
/// Order is the annotator's order and is preserved everywhere; nothing in
/// the crate sorts features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MorphFeatures(Vec<(String, String)>);

impl MorphFeatures {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Parse the UD feature string form. The empty string and `_` mean no features.
    pub fn parse(ud: &str) -> Result<Self, AnalysisError> {
        let ud = ud.trim();
        if ud.is_empty() || ud == "_" {
            return Ok(Self::default());
        }
        ud.split('|')
            .map(|item| match item.split_once('=') {
                Some((feat, val)) if !feat.is_empty() => Ok((feat.to_string(), val.to_string())),
                _ => Err(AnalysisError::InvalidMorphFeature(item.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }

    pub fn get(&self, feature: &str) -> Option<&str> {
        self.iter().find(|(f, _)| *f == feature).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined `key=value` list in feature order, or the empty string.
    pub fn format_pairs(&self) -> String {
        self.iter()
            .map(|(f, v)| format!("{}={}", f, v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The UD `Feat=Val|Feat=Val` form
    pub fn to_ud_string(&self) -> String {
        self.iter()
            .map(|(f, v)| format!("{}={}", f, v))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl TryFrom<String> for MorphFeatures {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MorphFeatures> for String {
    fn from(value: MorphFeatures) -> Self {
        value.to_ud_string()
    }
}

impl fmt::Display for MorphFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_pairs())
    }
}

/// One token as produced by the external annotator.
///
/// `i` is the absolute position in the document and `head` the absolute
/// position of the syntactic governor (equal to `i` for a sentence root).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(default)]
    pub norm: String,
    #[serde(default)]
    pub lower: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub dep: String,
    #[serde(default)]
    pub morph: MorphFeatures,
    #[serde(default)]
    pub ent_type: String,
    pub i: usize,
    pub head: usize,
    #[serde(default)]
    pub is_punct: bool,
    #[serde(default)]
    pub is_space: bool,
    /// Whether the token is followed by whitespace in the source text
    #[serde(default)]
    pub whitespace: bool,
}

impl Token {
    /// A root token at position `i` with derived `norm`/`lower` forms and the
    /// surface form as lemma.
    pub fn new(text: &str, i: usize) -> Self {
        Self {
            text: text.to_string(),
            norm: text.to_lowercase(),
            lower: text.to_lowercase(),
            lemma: text.to_string(),
            pos: String::new(),
            tag: String::new(),
            dep: String::new(),
            morph: MorphFeatures::default(),
            ent_type: String::new(),
            i,
            head: i,
            is_punct: false,
            is_space: false,
            whitespace: true,
        }
    }

    pub fn with_lemma(mut self, lemma: &str) -> Self {
        self.lemma = lemma.to_string();
        self
    }

    pub fn with_pos(mut self, pos: &str, tag: &str) -> Self {
        self.pos = pos.to_string();
        self.tag = tag.to_string();
        self
    }

    pub fn with_head(mut self, head: usize, dep: &str) -> Self {
        self.head = head;
        self.dep = dep.to_string();
        self
    }

    pub fn with_morph(mut self, morph: MorphFeatures) -> Self {
        self.morph = morph;
        self
    }

    pub fn with_entity(mut self, ent_type: &str) -> Self {
        self.ent_type = ent_type.to_string();
        self
    }

    pub fn punct(mut self) -> Self {
        self.is_punct = true;
        self
    }

    pub fn is_root(&self) -> bool {
        self.head == self.i
    }
}

/// A sentence as segmented by the annotator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Absolute position of the first token
    pub fn start(&self) -> Option<usize> {
        self.tokens.first().map(|t| t.i)
    }

    /// Whether a token of this sentence sits at the absolute position
    pub fn contains_position(&self, position: usize) -> bool {
        self.local_id(position).is_some()
    }

    /// 1-based id, within this sentence, of the token at an absolute position
    pub fn local_id(&self, position: usize) -> Option<usize> {
        self.tokens.iter().position(|t| t.i == position).map(|idx| idx + 1)
    }

    /// Surface text rebuilt from tokens and their trailing whitespace
    pub fn text(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.text);
            if token.whitespace {
                out.push(' ');
            }
        }
        out.trim().to_string()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// An annotated document: the annotator's sentences in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: String,
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self {
            id: String::new(),
            sentences,
        }
    }

    /// All tokens in document order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }

    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// Surface text of each sentence, one entry per sentence
    pub fn sentence_texts(&self) -> Vec<String> {
        self.sentences.iter().map(Sentence::text).collect()
    }

    /// The first `max` sentences and whether any were cut
    pub fn limited_sentences(&self, max: usize) -> (&[Sentence], bool) {
        if self.sentences.len() > max {
            log::debug!("Showing first {} of {} sentences", max, self.sentences.len());
            (&self.sentences[..max], true)
        } else {
            (&self.sentences[..], false)
        }
    }

    /// Named entities as runs of tokens sharing a non-empty entity type.
    ///
    /// Spans use document token indices and never cross a sentence boundary.
    pub fn entities(&self) -> Vec<LabeledSpan> {
        let mut spans = Vec::new();
        let mut offset = 0;
        for sentence in &self.sentences {
            let mut current: Option<(usize, &str)> = None;
            for (idx, token) in sentence.tokens.iter().enumerate() {
                let pos = offset + idx;
                let label = token.ent_type.as_str();
                match current {
                    Some((_, open)) if open == label => {}
                    Some((start, open)) => {
                        spans.push(LabeledSpan::new(Span::new(start, pos), open));
                        current = (!label.is_empty()).then_some((pos, label));
                    }
                    None => {
                        current = (!label.is_empty()).then_some((pos, label));
                    }
                }
            }
            if let Some((start, open)) = current {
                spans.push(LabeledSpan::new(Span::new(start, offset + sentence.len()), open));
            }
            offset += sentence.len();
        }
        spans
    }
}
