//! Result tables handed to presentation code

pub mod tables;

pub use tables::{
    CoverageReport, DependencyRow, DependencyTable, MorphologyRow, MorphologyTable, TokenRow,
    TokenTable,
};
