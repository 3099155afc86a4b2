//! Assembled and rendered output types.

use serde::Serialize;

use crate::keywords::ComparisonPair;
use crate::types::bundle::ComparisonBundle;

/// Link to another generated comparison page from the same run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossLink {
    pub url: String,
    pub text: String,
}

/// Short promotional comparison for one catalog category.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySnippet {
    pub category: String,
    pub text: String,
    pub link: String,
    pub button_text: String,
}

/// Everything the renderer needs for one pair.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub pair: ComparisonPair,
    pub title: String,
    pub meta_description: String,

    /// Intro block, already HTML (wrapped in `<p>` tags)
    pub intro_html: String,

    pub bundle: ComparisonBundle,
    pub related: Vec<CrossLink>,
    pub score_summary: String,
    pub snippets: Vec<CategorySnippet>,
    pub closing: String,
}

/// One fully rendered output page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub filename: String,
    pub title: String,
    pub meta_description: String,
    pub html: String,
}
