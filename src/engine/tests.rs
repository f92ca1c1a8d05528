//! End-to-end tests for the Analyzer over parsed annotator output.

use crate::data::{CoreVocabulary, DocumentParser};
use crate::engine::{AnalysisConfig, Analyzer, VectorTable, FEATURE_LABELS};
use crate::scoring::normalizer::tests::InitialUNormalizer;

const SENECA: &str = r#"{
    "id": "ep1",
    "sentences": [
        {"tokens": [
            {"text": "Ita", "lemma": "ita", "pos": "ADV", "dep": "advmod", "i": 0, "head": 1, "whitespace": true},
            {"text": "fac", "lemma": "facio", "pos": "VERB", "dep": "ROOT", "morph": "Mood=Imp|Number=Sing|Person=2",
             "i": 1, "head": 1, "whitespace": false},
            {"text": ",", "lemma": ",", "pos": "PUNCT", "dep": "punct", "i": 2, "head": 1, "is_punct": true, "whitespace": true},
            {"text": "mi", "lemma": "meus", "pos": "DET", "dep": "det", "i": 3, "head": 4, "whitespace": true},
            {"text": "Lucili", "lemma": "Lucilius", "pos": "PROPN", "dep": "vocative", "i": 4, "head": 1,
             "ent_type": "PER", "whitespace": false},
            {"text": ".", "lemma": ".", "pos": "PUNCT", "dep": "punct", "i": 5, "head": 1, "is_punct": true}
        ]},
        {"tokens": [
            {"text": "Vindica", "lemma": "uindico", "pos": "VERB", "dep": "ROOT", "morph": "Mood=Imp|Tense=Pres",
             "i": 6, "head": 6, "whitespace": true},
            {"text": "te", "lemma": "tu", "pos": "PRON", "dep": "obj", "i": 7, "head": 6, "whitespace": true},
            {"text": "tibi", "lemma": "tu", "pos": "PRON", "dep": "obl:arg", "i": 8, "head": 6, "whitespace": false},
            {"text": ".", "lemma": ".", "pos": "PUNCT", "dep": "punct", "i": 9, "head": 6, "is_punct": true}
        ]}
    ]
}"#;

fn seneca() -> crate::data::Document {
    DocumentParser::new()
        .parse_json(SENECA)
        .unwrap()
        .into_iter()
        .next()
        .unwrap()
}

#[test]
fn test_dependency_rows_end_to_end() {
    let analyzer = Analyzer::default();
    let table = analyzer.dependency_table(&seneca()).unwrap();

    assert_eq!(table.len(), 10);
    let heads: Vec<(usize, usize, usize)> = table.rows.iter().map(|r| (r.sent_id, r.token_id, r.head)).collect();
    assert_eq!(
        heads,
        vec![
            (1, 1, 2),
            (1, 2, 0),
            (1, 3, 2),
            (1, 4, 5),
            (1, 5, 2),
            (1, 6, 2),
            (2, 1, 0),
            (2, 2, 1),
            (2, 3, 1),
            (2, 4, 1),
        ]
    );
    assert_eq!(table.rows[1].morph, "Mood=Imp, Number=Sing, Person=2");
    assert_eq!(table.rows[4].ent_type, "PER");
}

#[test]
fn test_limits_come_from_config() {
    let config = AnalysisConfig {
        max_tokens: 7,
        max_sentences: 1,
        ..AnalysisConfig::default()
    };
    let analyzer = Analyzer::new(config);
    let doc = seneca();

    let deps = analyzer.dependency_table(&doc).unwrap();
    assert_eq!(deps.tokens_processed, 7);
    assert!(deps.truncated);
    assert!(deps.rows.len() <= analyzer.config().max_tokens);

    let tokens = analyzer.token_table(&doc);
    assert_eq!(tokens.len(), 7);

    let (sentences, truncated) = analyzer.tree_sentences(&doc);
    assert_eq!(sentences.len(), 1);
    assert!(truncated);
}

#[test]
fn test_core_vocabulary_over_document() {
    let report = Analyzer::default().core_vocabulary(&seneca());

    // uindico is not on the core list
    let covered: Vec<usize> = (0..10).filter(|&i| report.is_covered(i)).collect();
    assert_eq!(covered, vec![0, 1, 3, 7, 8]);
    assert_eq!(report.span_count(), 3);
    assert_eq!(report.spans[0].label, "CORE");
    assert_eq!(report.content_tokens, 7);
    assert!((report.ratio() - 5.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_custom_vocabulary_and_label() {
    let vocab = CoreVocabulary::from_lemmas(["tu"]);
    let config = AnalysisConfig {
        core_label: "PRON".to_string(),
        ..AnalysisConfig::default()
    };
    let analyzer = Analyzer::with_tables(config, &vocab, &FEATURE_LABELS);
    let report = analyzer.core_vocabulary(&seneca());

    assert_eq!(report.span_count(), 1);
    assert_eq!((report.spans[0].start(), report.spans[0].end()), (7, 9));
    assert_eq!(report.spans[0].label, "PRON");
}

#[test]
fn test_morphology_and_sentences() {
    let analyzer = Analyzer::default();
    let doc = seneca();

    let morph = analyzer.morphology_table(&doc);
    assert_eq!(morph.len(), 7);
    assert_eq!(morph.rows[1].features, "Mood=Imperative, Number=Singular, Person=2nd Person");
    assert_eq!(morph.rows[3].pos, "Proper Noun");

    assert_eq!(analyzer.sentences(&doc), vec!["Ita fac, mi Lucili.", "Vindica te tibi."]);
    let ents = analyzer.entities(&doc);
    assert_eq!(ents.len(), 1);
    assert_eq!(ents[0].label, "PER");
}

#[test]
fn test_evaluate_and_score() {
    let analyzer = Analyzer::default();
    let eval = analyzer.evaluate(&InitialUNormalizer, "Vindica te tibi");
    assert_eq!(eval.source, "Uindica te tibi");
    assert_eq!(eval.normalized, "Vindica te tibi");
    assert!((eval.score.f1() - 1.0).abs() < 1e-9);

    let score = analyzer.score("lingva", "lingua", "lingua");
    assert_eq!(score.correct, 1);
}

#[test]
fn test_similarity_uses_top_n() {
    let vectors: VectorTable = [
        ("rex".to_string(), vec![1.0, 0.0]),
        ("regina".to_string(), vec![0.9, 0.2]),
        ("regnum".to_string(), vec![0.6, 0.6]),
        ("aqua".to_string(), vec![0.0, 1.0]),
        ("ignis".to_string(), vec![-0.2, 1.0]),
    ]
    .into_iter()
    .collect();
    let analyzer = Analyzer::default();
    let similar = analyzer.most_similar(&vectors, "rex").unwrap();
    assert_eq!(similar.len(), 3);
    assert_eq!(similar[0].word, "regina");
}

#[test]
fn test_trim_input() {
    let config = AnalysisConfig {
        morph_token_limit: 3,
        ..AnalysisConfig::default()
    };
    let (text, trimmed) = Analyzer::new(config).trim_input("Arma virumque cano, Troiae qui primus");
    assert_eq!(text, "Arma virumque cano,");
    assert!(trimmed);
}
