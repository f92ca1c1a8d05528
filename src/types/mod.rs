pub mod span;

pub use span::{LabeledSpan, Span};
