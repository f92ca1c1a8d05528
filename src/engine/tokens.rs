//! Flat per-token views: the token table and the morphology table

use crate::data::Document;
use crate::engine::labels::FeatureLabelMap;
use crate::results::{MorphologyRow, MorphologyTable, TokenRow, TokenTable};

/// First `limit` tokens of the document as table rows
pub fn build_token_table(doc: &Document, limit: usize) -> TokenTable {
    let rows: Vec<TokenRow> = doc
        .tokens()
        .take(limit)
        .map(|token| TokenRow {
            text: token.text.clone(),
            norm: token.norm.clone(),
            lower: token.lower.clone(),
            lemma: token.lemma.clone(),
            pos: token.pos.clone(),
            tag: token.tag.clone(),
            dep: token.dep.clone(),
            morph: token.morph.format_pairs(),
            ent_type: token.ent_type.clone(),
        })
        .collect();
    let truncated = doc.num_tokens() > rows.len();
    TokenTable { rows, truncated }
}

/// Content tokens (no punctuation or whitespace) with readable labels
pub fn build_morphology_table(doc: &Document, labels: &FeatureLabelMap) -> MorphologyTable {
    let rows = doc
        .tokens()
        .filter(|t| !t.is_punct && !t.is_space)
        .map(|token| MorphologyRow {
            token: token.text.clone(),
            lemma: token.lemma.clone(),
            pos: labels.pos_label(&token.pos).to_string(),
            tag: token.tag.clone(),
            features: labels.format_readable(&token.morph),
        })
        .collect();
    MorphologyTable { rows }
}

/// Keep the first `limit` whitespace-separated words of `text`.
///
/// Returns the text untouched when it is within the limit, otherwise the
/// kept words joined by single spaces and `true`.
pub fn trim_whitespace_tokens(text: &str, limit: usize) -> (String, bool) {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > limit {
        log::debug!("Text trimmed to {} of {} words", limit, words.len());
        (words[..limit].join(" "), true)
    } else {
        (text.to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MorphFeatures, Sentence, Token};
    use crate::engine::labels::FEATURE_LABELS;

    fn arma_virumque() -> Document {
        Document::new(vec![Sentence::new(vec![
            Token::new("Arma", 0)
                .with_lemma("arma")
                .with_pos("NOUN", "noun")
                .with_head(2, "obj")
                .with_morph(MorphFeatures::parse("Case=Acc|Gender=Neut|Number=Plur").unwrap()),
            Token::new("virumque", 1)
                .with_lemma("vir")
                .with_pos("NOUN", "noun")
                .with_head(0, "conj"),
            Token::new("cano", 2)
                .with_lemma("cano")
                .with_pos("VERB", "verb")
                .with_morph(MorphFeatures::parse("Mood=Ind|Tense=Pres|Person=1").unwrap()),
            Token::new(",", 3).with_pos("PUNCT", "punc").with_head(2, "punct").punct(),
        ])])
    }

    #[test]
    fn test_token_table_rows() {
        let table = build_token_table(&arma_virumque(), 100);
        assert_eq!(table.len(), 4);
        assert!(!table.truncated);
        assert_eq!(table.rows[0].text, "Arma");
        assert_eq!(table.rows[0].lower, "arma");
        assert_eq!(table.rows[0].morph, "Case=Acc, Gender=Neut, Number=Plur");
        assert_eq!(table.rows[3].morph, "");
    }

    #[test]
    fn test_token_table_limit() {
        let table = build_token_table(&arma_virumque(), 2);
        assert_eq!(table.len(), 2);
        assert!(table.truncated);
        assert_eq!(table.rows[1].lemma, "vir");
    }

    #[test]
    fn test_morphology_table_skips_punctuation() {
        let table = build_morphology_table(&arma_virumque(), &FEATURE_LABELS);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0].pos, "Noun");
        assert_eq!(table.rows[0].features, "Case=Accusative, Gender=Neuter, Number=Plural");
        assert_eq!(table.rows[2].features, "Mood=Indicative, Tense=Present, Person=1st Person");
        assert_eq!(table.rows[1].features, "");
    }

    #[test]
    fn test_trim_whitespace_tokens() {
        let (text, trimmed) = trim_whitespace_tokens("Arma  virumque\ncano", 2);
        assert_eq!(text, "Arma virumque");
        assert!(trimmed);

        let (text, trimmed) = trim_whitespace_tokens("Arma virumque cano", 3);
        assert_eq!(text, "Arma virumque cano");
        assert!(!trimmed);
    }
}
