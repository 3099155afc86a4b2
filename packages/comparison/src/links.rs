//! Related-comparison link selection.

use crate::keywords::{ComparisonPair, KeywordSet};
use crate::types::document::CrossLink;

/// Maximum number of related links per page.
pub const MAX_RELATED_LINKS: usize = 3;

/// At most this many priority links lead the list.
const MAX_PRIORITY_LINKS: usize = 2;

/// Select up to three links to other pages from the same run.
///
/// Pairs whose url or label still mentions one of the current items come
/// first (at most two), topped up with the remaining pairs in enumeration
/// order. The current pair is excluded in either item order, so every link
/// points at a page this run generates.
pub fn related_links(current: &ComparisonPair, keywords: &KeywordSet) -> Vec<CrossLink> {
    let mut priority: Vec<CrossLink> = Vec::new();
    let mut other: Vec<CrossLink> = Vec::new();

    for pair in keywords.pairs() {
        if pair.same_items(current) {
            continue;
        }

        let link = CrossLink {
            url: pair.filename(),
            text: pair.label(),
        };

        let mentions_current = link.url.contains(current.item1.as_str())
            || link.url.contains(current.item2.as_str())
            || link.text.contains(current.item1.as_str())
            || link.text.contains(current.item2.as_str());

        if mentions_current {
            priority.push(link);
        } else {
            other.push(link);
        }
    }

    priority.truncate(MAX_PRIORITY_LINKS);
    let mut links = priority;
    for link in other {
        if links.len() >= MAX_RELATED_LINKS {
            break;
        }
        links.push(link);
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_keywords_yield_two_priority_plus_one_other() {
        let keywords = KeywordSet::new(["A", "B", "C", "D"]).unwrap();
        let current = ComparisonPair::new("A", "B");

        let links = related_links(&current, &keywords);

        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["a-vs-c.html", "a-vs-d.html", "c-vs-d.html"]);
        assert_eq!(links[2].text, "C vs D");
    }

    #[test]
    fn test_current_pair_is_never_linked() {
        let keywords = KeywordSet::new(["A", "B", "C", "D"]).unwrap();

        for pair in keywords.pairs() {
            let links = related_links(&pair, &keywords);
            for link in &links {
                assert_ne!(link.url, pair.filename());
            }
        }
    }

    #[test]
    fn test_reversed_current_pair_is_also_excluded() {
        let keywords = KeywordSet::new(["A", "B", "C"]).unwrap();
        // Reversed relative to the enumeration order
        let current = ComparisonPair::new("B", "A");

        let links = related_links(&current, &keywords);
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["a-vs-c.html", "b-vs-c.html"]);
    }

    #[test]
    fn test_never_more_than_three_links() {
        let keywords =
            KeywordSet::new(["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"]).unwrap();
        let current = ComparisonPair::new("Alpha", "Beta");

        let links = related_links(&current, &keywords);
        assert_eq!(links.len(), MAX_RELATED_LINKS);
    }

    #[test]
    fn test_excess_priority_links_are_dropped_not_demoted() {
        // Every remaining pair mentions Alpha or Beta, so priority overflows
        let keywords = KeywordSet::new(["Alpha", "Beta", "Gamma", "Delta"]).unwrap();
        let current = ComparisonPair::new("Gamma", "Delta");

        let links = related_links(&current, &keywords);
        // Priority: Alpha vs Beta, Alpha vs Gamma... all five mention
        // Gamma or Delta except Alpha vs Beta, which is the only "other".
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["alpha-vs-gamma.html", "alpha-vs-delta.html", "alpha-vs-beta.html"]
        );
    }

    #[test]
    fn test_two_keywords_have_no_related_links() {
        let keywords = KeywordSet::new(["Freelancing", "Dropshipping"]).unwrap();
        let current = ComparisonPair::new("Freelancing", "Dropshipping");

        assert!(related_links(&current, &keywords).is_empty());
    }
}
