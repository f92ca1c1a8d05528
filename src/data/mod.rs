pub mod core_vocabulary;
pub mod document;
pub mod parser;

pub use core_vocabulary::{CoreVocabulary, CORE_VOCABULARY};
pub use document::{Document, MorphFeatures, Sentence, Token};
pub use parser::DocumentParser;
