//! Defaults shared across the analysis views

/// Token rows shown by the token and dependency tables
pub const DEFAULT_MAX_TOKENS: usize = 100;

/// Sentences shown by per-sentence views
pub const DEFAULT_MAX_SENTENCES: usize = 10;

/// Whitespace tokens kept before the morphology and entity views run
pub const DEFAULT_MORPH_TOKEN_LIMIT: usize = 200;

/// Span label for core-vocabulary runs
pub const CORE_SPAN_LABEL: &str = "CORE";

pub const DEFAULT_SIMILARITY_TOP_N: usize = 3;
pub const MAX_SIMILARITY_TOP_N: usize = 10;

/// The character pair whose orthography the U/V normalizer resolves
pub const AMBIGUOUS_PAIR: (char, char) = ('u', 'v');
