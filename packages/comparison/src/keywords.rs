//! Keyword input handling and pair enumeration.
//!
//! A [`KeywordSet`] is the validated input for one generation run. Pair
//! order is load-bearing: pairs enumerate in `(first index, second index)`
//! order, and that order defines canonical pair identity for filenames and
//! cross-links.

use serde::Serialize;

use crate::error::ComparisonError;
use crate::slug::pair_filename;

/// Trim entries, drop blanks, and remove duplicates keeping the first
/// occurrence. Input order is otherwise preserved.
pub fn sanitize<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items: Vec<String> = Vec::new();
    for entry in raw {
        let trimmed = entry.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if items.iter().any(|existing| existing == trimmed) {
            continue;
        }
        items.push(trimmed.to_string());
    }
    items
}

/// Sanitize a comma-separated form field.
pub fn sanitize_list(raw: &str) -> Vec<String> {
    sanitize(raw.split(','))
}

/// Ordered set of distinct keywords to compare (minimum 2).
///
/// Immutable once built; every derived pair, filename, and cross-link in a
/// run comes from the same set.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    items: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set from raw user input.
    ///
    /// Fails with `InvalidInput` when fewer than 2 distinct non-empty
    /// entries remain after sanitizing.
    pub fn new<I, S>(raw: I) -> Result<Self, ComparisonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = sanitize(raw);
        if items.len() < 2 {
            return Err(ComparisonError::InvalidInput {
                reason: "Please provide at least 2 keywords".to_string(),
            });
        }
        Ok(Self { items })
    }

    /// Build a keyword set from a comma-separated form field.
    pub fn parse(raw: &str) -> Result<Self, ComparisonError> {
        Self::new(raw.split(','))
    }

    /// The sanitized keywords in input order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed set; kept for completeness.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All unordered pairs in `(first index, second index)` order.
    pub fn pairs(&self) -> Vec<ComparisonPair> {
        let mut pairs = Vec::with_capacity(self.items.len() * (self.items.len() - 1) / 2);
        for i in 0..self.items.len() {
            for j in (i + 1)..self.items.len() {
                pairs.push(ComparisonPair::new(&self.items[i], &self.items[j]));
            }
        }
        pairs
    }
}

/// One unordered pair, canonicalized to input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonPair {
    pub item1: String,
    pub item2: String,
}

impl ComparisonPair {
    /// Create a pair in canonical order.
    pub fn new(item1: impl Into<String>, item2: impl Into<String>) -> Self {
        Self {
            item1: item1.into(),
            item2: item2.into(),
        }
    }

    /// Canonical output filename for this pair.
    pub fn filename(&self) -> String {
        pair_filename(&self.item1, &self.item2)
    }

    /// Human-readable label ("X vs Y").
    pub fn label(&self) -> String {
        format!("{} vs {}", self.item1, self.item2)
    }

    /// Page title ("X vs Y [AI Analysis]").
    pub fn title(&self) -> String {
        format!("{} vs {} [AI Analysis]", self.item1, self.item2)
    }

    /// True when `other` covers the same two items, in either order.
    pub fn same_items(&self, other: &ComparisonPair) -> bool {
        (self.item1 == other.item1 && self.item2 == other.item2)
            || (self.item1 == other.item2 && self.item2 == other.item1)
    }
}
