//! Slug derivation for output filenames.
//!
//! Filenames are a pure function of the pair's items, so every link built
//! anywhere in a run points at a file that run actually produces.

/// Lowercase, URL-safe slug of a keyword.
///
/// ASCII alphanumerics are kept (lowercased); every other run of
/// characters collapses to a single hyphen, stripped at both ends.
pub fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Canonical output filename for a pair of keywords.
pub fn pair_filename(item1: &str, item2: &str) -> String {
    format!("{}-vs-{}.html", slug(item1), slug(item2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slug_lowercases() {
        assert_eq!(slug("Freelancing"), "freelancing");
        assert_eq!(slug("DROPSHIPPING"), "dropshipping");
    }

    #[test]
    fn test_slug_collapses_runs_to_single_hyphen() {
        assert_eq!(slug("Affiliate   Marketing"), "affiliate-marketing");
        assert_eq!(slug("Print-on-Demand"), "print-on-demand");
        assert_eq!(slug("AI & Automation!"), "ai-automation");
    }

    #[test]
    fn test_slug_strips_ends() {
        assert_eq!(slug("  Blogging  "), "blogging");
        assert_eq!(slug("---YouTube---"), "youtube");
    }

    #[test]
    fn test_slug_keeps_digits() {
        assert_eq!(slug("Web 3.0"), "web-3-0");
    }

    #[test]
    fn test_pair_filename() {
        assert_eq!(
            pair_filename("Freelancing", "Dropshipping"),
            "freelancing-vs-dropshipping.html"
        );
        assert_eq!(
            pair_filename("Affiliate Marketing", "Print on Demand"),
            "affiliate-marketing-vs-print-on-demand.html"
        );
    }

    proptest! {
        #[test]
        fn test_slug_is_deterministic(input in ".*") {
            prop_assert_eq!(slug(&input), slug(&input));
        }

        #[test]
        fn test_slug_is_idempotent(input in ".*") {
            let once = slug(&input);
            prop_assert_eq!(slug(&once), once);
        }

        #[test]
        fn test_slug_output_is_url_safe(input in ".*") {
            let s = slug(&input);
            prop_assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!s.starts_with('-'));
            prop_assert!(!s.ends_with('-'));
        }
    }
}
