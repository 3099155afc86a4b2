//! Data types for the comparison pipeline.

pub mod bundle;
pub mod document;

pub use bundle::{CategoryResult, ComparisonBundle, ScorecardResponse};
pub use document::{CategorySnippet, CrossLink, GeneratedDocument, PageContent};
