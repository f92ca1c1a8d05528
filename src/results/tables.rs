use serde::{Deserialize, Serialize};

use crate::types::LabeledSpan;

/// One row of the flat token table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub text: String,
    pub norm: String,
    pub lower: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub dep: String,
    pub morph: String,
    pub ent_type: String,
}

impl TokenRow {
    pub const COLUMNS: [&'static str; 9] = [
        "text", "norm", "lower", "lemma", "pos", "tag", "dep", "morph", "ent_type",
    ];

    fn cells(&self) -> [&str; 9] {
        [
            self.text.as_str(),
            self.norm.as_str(),
            self.lower.as_str(),
            self.lemma.as_str(),
            self.pos.as_str(),
            self.tag.as_str(),
            self.dep.as_str(),
            self.morph.as_str(),
            self.ent_type.as_str(),
        ]
    }
}

/// The first `limit` tokens of a document, one row each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTable {
    pub rows: Vec<TokenRow>,
    /// Set when the document had more tokens than the limit
    pub truncated: bool,
}

impl TokenTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated export with a header line
    pub fn to_tsv(&self) -> String {
        write_tsv(&TokenRow::COLUMNS, self.rows.iter().map(|r| r.cells().map(str::to_string)))
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// One CoNLL-style row with sentence-relative numbering.
///
/// `head` is 0 for the sentence root and otherwise the 1-based `token_id`
/// of the governor in the same sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRow {
    pub sent_id: usize,
    pub token_id: usize,
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub morph: String,
    pub head: usize,
    pub dep: String,
    pub ent_type: String,
}

impl DependencyRow {
    pub const COLUMNS: [&'static str; 10] = [
        "sent_id", "token_id", "text", "lemma", "pos", "tag", "morph", "head", "dep", "ent_type",
    ];

    fn cells(&self) -> [String; 10] {
        [
            self.sent_id.to_string(),
            self.token_id.to_string(),
            self.text.clone(),
            self.lemma.clone(),
            self.pos.clone(),
            self.tag.clone(),
            self.morph.clone(),
            self.head.to_string(),
            self.dep.clone(),
            self.ent_type.clone(),
        ]
    }
}

/// Dependency rows for a document, possibly cut at a token limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTable {
    pub rows: Vec<DependencyRow>,
    /// Number of tokens turned into rows
    pub tokens_processed: usize,
    /// Set when the limit stopped processing before the end of the document
    pub truncated: bool,
}

impl DependencyTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows belonging to one sentence (1-based id)
    pub fn sentence(&self, sent_id: usize) -> impl Iterator<Item = &DependencyRow> {
        self.rows.iter().filter(move |r| r.sent_id == sent_id)
    }

    pub fn to_tsv(&self) -> String {
        write_tsv(&DependencyRow::COLUMNS, self.rows.iter().map(DependencyRow::cells))
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// A content token with readable part of speech and features
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphologyRow {
    pub token: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub features: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphologyTable {
    pub rows: Vec<MorphologyRow>,
}

impl MorphologyTable {
    pub const COLUMNS: [&'static str; 4] = ["Token", "Lemma", "POS", "Features"];

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_tsv(&self) -> String {
        write_tsv(
            &Self::COLUMNS,
            self.rows.iter().map(|r| {
                [r.token.clone(), r.lemma.clone(), r.pos.clone(), r.features.clone()]
            }),
        )
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// Core-vocabulary overlay for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub spans: Vec<LabeledSpan>,
    /// Per-token flag, indexed like the document's tokens
    pub covered: Vec<bool>,
    /// Tokens inside at least one span
    pub covered_tokens: usize,
    /// Non-punctuation tokens
    pub content_tokens: usize,
}

impl CoverageReport {
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// covered tokens / content tokens, 0.0 for a document without content tokens
    pub fn ratio(&self) -> f64 {
        if self.content_tokens == 0 {
            0.0
        } else {
            self.covered_tokens as f64 / self.content_tokens as f64
        }
    }

    pub fn is_covered(&self, token_idx: usize) -> bool {
        self.covered.get(token_idx).copied().unwrap_or(false)
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

fn write_tsv<R, I>(header: &[&str], rows: I) -> String
where
    R: AsRef<[String]>,
    I: Iterator<Item = R>,
{
    let mut out = header.join("\t");
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = row
            .as_ref()
            .iter()
            .map(|c| c.replace(['\t', '\n', '\r'], " "))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Span;

    fn row(text: &str) -> TokenRow {
        TokenRow {
            text: text.to_string(),
            norm: text.to_lowercase(),
            lower: text.to_lowercase(),
            lemma: text.to_lowercase(),
            pos: "NOUN".to_string(),
            tag: "noun".to_string(),
            dep: "obj".to_string(),
            morph: "Case=Acc, Number=Sing".to_string(),
            ent_type: String::new(),
        }
    }

    #[test]
    fn test_token_tsv() {
        let table = TokenTable {
            rows: vec![row("Tempus")],
            truncated: false,
        };
        let tsv = table.to_tsv();
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines[0], "text\tnorm\tlower\tlemma\tpos\ttag\tdep\tmorph\tent_type");
        assert_eq!(lines[1], "Tempus\ttempus\ttempus\ttempus\tNOUN\tnoun\tobj\tCase=Acc, Number=Sing\t");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_tsv_escapes_tabs() {
        let mut r = row("a\tb");
        r.norm = "x\ny".to_string();
        let table = TokenTable {
            rows: vec![r],
            truncated: false,
        };
        let tsv = table.to_tsv();
        assert!(tsv.lines().nth(1).unwrap().starts_with("a b\tx y\t"));
    }

    #[test]
    fn test_dependency_tsv_numbers() {
        let table = DependencyTable {
            rows: vec![DependencyRow {
                sent_id: 1,
                token_id: 2,
                text: "tempus".to_string(),
                lemma: "tempus".to_string(),
                pos: "NOUN".to_string(),
                tag: "noun".to_string(),
                morph: String::new(),
                head: 1,
                dep: "nsubj".to_string(),
                ent_type: String::new(),
            }],
            tokens_processed: 1,
            truncated: false,
        };
        assert_eq!(table.to_tsv().lines().nth(1), Some("1\t2\ttempus\ttempus\tNOUN\tnoun\t\t1\tnsubj\t"));
    }

    #[test]
    fn test_coverage_ratio() {
        let report = CoverageReport {
            spans: vec![LabeledSpan::new(Span::new(0, 1), "CORE")],
            covered: vec![true, false],
            covered_tokens: 1,
            content_tokens: 2,
        };
        assert!((report.ratio() - 0.5).abs() < 1e-9);
        assert!(report.is_covered(0));
        assert!(!report.is_covered(1));
        assert!(!report.is_covered(7));
        assert_eq!(CoverageReport::default().ratio(), 0.0);
    }
}
