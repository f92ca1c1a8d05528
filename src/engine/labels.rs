//! Human-readable labels for UD morphological features and POS tags.
//!
//! Value codes are keyed by their feature: `Imp` is "Imperfect" under
//! `Tense` and "Imperative" under `Mood`, `Sup` is "Superlative" under
//! `Degree` and "Supine" under `VerbForm`.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::data::MorphFeatures;

const VALUE_LABELS: &[(&str, &str, &str)] = &[
    ("Case", "Nom", "Nominative"),
    ("Case", "Gen", "Genitive"),
    ("Case", "Dat", "Dative"),
    ("Case", "Acc", "Accusative"),
    ("Case", "Abl", "Ablative"),
    ("Case", "Voc", "Vocative"),
    ("Case", "Loc", "Locative"),
    ("Number", "Sing", "Singular"),
    ("Number", "Plur", "Plural"),
    ("Gender", "Masc", "Masculine"),
    ("Gender", "Fem", "Feminine"),
    ("Gender", "Neut", "Neuter"),
    ("Tense", "Pres", "Present"),
    ("Tense", "Past", "Past"),
    ("Tense", "Fut", "Future"),
    ("Tense", "Imp", "Imperfect"),
    ("Tense", "Pqp", "Pluperfect"),
    ("Mood", "Ind", "Indicative"),
    ("Mood", "Sub", "Subjunctive"),
    ("Mood", "Imp", "Imperative"),
    ("Mood", "Inf", "Infinitive"),
    ("Voice", "Act", "Active"),
    ("Voice", "Pass", "Passive"),
    ("Person", "1", "1st Person"),
    ("Person", "2", "2nd Person"),
    ("Person", "3", "3rd Person"),
    ("Degree", "Pos", "Positive"),
    ("Degree", "Cmp", "Comparative"),
    ("Degree", "Sup", "Superlative"),
    ("VerbForm", "Fin", "Finite"),
    ("VerbForm", "Ger", "Gerund"),
    ("VerbForm", "Gdv", "Gerundive"),
    ("VerbForm", "Part", "Participle"),
    ("VerbForm", "Sup", "Supine"),
];

const FEATURE_NAMES: &[(&str, &str)] = &[
    ("Case", "Case"),
    ("Number", "Number"),
    ("Gender", "Gender"),
    ("Tense", "Tense"),
    ("Mood", "Mood"),
    ("Voice", "Voice"),
    ("Person", "Person"),
    ("Degree", "Degree"),
    ("VerbForm", "Verb Form"),
    ("Aspect", "Aspect"),
    ("NumType", "Numeral Type"),
    ("PronType", "Pronoun Type"),
    ("Poss", "Possessive"),
    ("Reflex", "Reflexive"),
];

const POS_NAMES: &[(&str, &str)] = &[
    ("NOUN", "Noun"),
    ("VERB", "Verb"),
    ("ADJ", "Adjective"),
    ("ADV", "Adverb"),
    ("PROPN", "Proper Noun"),
    ("PRON", "Pronoun"),
    ("DET", "Determiner"),
    ("ADP", "Adposition"),
    ("AUX", "Auxiliary"),
    ("CCONJ", "Coordinating Conjunction"),
    ("SCONJ", "Subordinating Conjunction"),
    ("NUM", "Numeral"),
    ("PART", "Particle"),
    ("INTJ", "Interjection"),
    ("PUNCT", "Punctuation"),
    ("X", "Other"),
];

/// Shared label tables, built on first use
pub static FEATURE_LABELS: LazyLock<FeatureLabelMap> = LazyLock::new(FeatureLabelMap::latin);

/// Static lookup from feature codes to display labels
#[derive(Debug, Clone, Default)]
pub struct FeatureLabelMap {
    values: HashMap<&'static str, HashMap<&'static str, &'static str>>,
    features: HashMap<&'static str, &'static str>,
    pos: HashMap<&'static str, &'static str>,
}

impl FeatureLabelMap {
    /// Labels for the Latin UD feature inventory
    pub fn latin() -> Self {
        let mut values: HashMap<&'static str, HashMap<&'static str, &'static str>> = HashMap::new();
        for &(feature, value, label) in VALUE_LABELS {
            values.entry(feature).or_default().insert(value, label);
        }
        Self {
            values,
            features: FEATURE_NAMES.iter().copied().collect(),
            pos: POS_NAMES.iter().copied().collect(),
        }
    }

    /// Label for a value under its feature; the raw code when unmapped
    pub fn value_label<'a>(&'a self, feature: &str, value: &'a str) -> &'a str {
        self.values
            .get(feature)
            .and_then(|by_value| by_value.get(value))
            .copied()
            .unwrap_or(value)
    }

    /// Label for the feature name itself; the raw name when unmapped
    pub fn feature_label<'a>(&'a self, feature: &'a str) -> &'a str {
        self.features.get(feature).copied().unwrap_or(feature)
    }

    /// Label for a UPOS tag; the raw tag when unmapped
    pub fn pos_label<'a>(&'a self, pos: &'a str) -> &'a str {
        self.pos.get(pos).copied().unwrap_or(pos)
    }

    /// `Case=Nominative, Number=Singular`, in feature order
    pub fn format_readable(&self, morph: &MorphFeatures) -> String {
        morph
            .iter()
            .map(|(feat, val)| format!("{}={}", self.feature_label(feat), self.value_label(feat, val)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// (feature label, value label) pairs for a detail view
    pub fn describe<'a>(&'a self, morph: &'a MorphFeatures) -> Vec<(&'a str, &'a str)> {
        morph
            .iter()
            .map(|(feat, val)| (self.feature_label(feat), self.value_label(feat, val)))
            .collect()
    }
}
