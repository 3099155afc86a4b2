//! HTML rendering for assembled page content.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::types::document::{CategorySnippet, CrossLink, GeneratedDocument, PageContent};

const PAGE_TEMPLATE: &str = include_str!("assets/page.hbs");

/// Template context. Every slot the page template references is bound here,
/// so rendering runs with strict mode on.
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    title: &'a str,
    meta_description: &'a str,
    item1: &'a str,
    item2: &'a str,
    intro: &'a str,
    categories: Vec<CategoryRow<'a>>,
    item1_performance: String,
    item2_performance: String,
    overall_score: String,
    overall_winner: Option<&'a str>,
    winning_reason: &'a str,
    related: &'a [CrossLink],
    score_summary: &'a str,
    snippets: &'a [CategorySnippet],
    closing: &'a str,
}

#[derive(Debug, Serialize)]
struct CategoryRow<'a> {
    name: &'a str,
    item1_details: &'a str,
    item2_details: &'a str,
    item1_score: f64,
    item2_score: f64,
    item1_wins: bool,
    item2_wins: bool,
}

/// Render one comparison page.
///
/// Pure function over the content: equal input produces byte-equal output.
/// Rows keep the order of `content.bundle.categories`.
pub fn render(content: &PageContent) -> Result<GeneratedDocument> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    let categories = content
        .bundle
        .categories
        .iter()
        .map(|category| CategoryRow {
            name: &category.name,
            item1_details: &category.item1_details,
            item2_details: &category.item2_details,
            item1_score: category.item1_score,
            item2_score: category.item2_score,
            item1_wins: category.winner == content.pair.item1,
            item2_wins: category.winner == content.pair.item2,
        })
        .collect();

    let context = PageContext {
        title: &content.title,
        meta_description: &content.meta_description,
        item1: &content.pair.item1,
        item2: &content.pair.item2,
        intro: &content.intro_html,
        categories,
        item1_performance: format!("{:.1}", content.bundle.item1_performance),
        item2_performance: format!("{:.1}", content.bundle.item2_performance),
        overall_score: format!("{:.1}", content.bundle.overall_score),
        overall_winner: content.bundle.overall_winner.as_deref(),
        winning_reason: &content.bundle.winning_reason,
        related: &content.related,
        score_summary: &content.score_summary,
        snippets: &content.snippets,
        closing: &content.closing,
    };

    let html = handlebars.render_template(PAGE_TEMPLATE, &context)?;

    Ok(GeneratedDocument {
        filename: content.pair.filename(),
        title: content.title.clone(),
        meta_description: content.meta_description.clone(),
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::ComparisonPair;
    use crate::types::bundle::{CategoryResult, ComparisonBundle};

    fn sample_content() -> PageContent {
        let pair = ComparisonPair::new("Freelancing", "Dropshipping");
        PageContent {
            title: pair.title(),
            meta_description: "A data-driven look at two paths.".to_string(),
            pair,
            intro_html: "<p>Two popular paths, <b>one</b> clear breakdown.</p>".to_string(),
            bundle: ComparisonBundle {
                categories: vec![
                    CategoryResult {
                        name: "Scalability".to_string(),
                        item1_details: "Limited by billable hours.".to_string(),
                        item2_details: "Grows with ad spend.".to_string(),
                        item1_score: 41.0,
                        item2_score: 55.0,
                        winner: "Dropshipping".to_string(),
                    },
                    CategoryResult {
                        name: "Immediate Earnings".to_string(),
                        item1_details: "Paid per delivered project.".to_string(),
                        item2_details: "Slow until a store converts.".to_string(),
                        item1_score: 57.0,
                        item2_score: 33.0,
                        winner: "Freelancing".to_string(),
                    },
                ],
                item1_performance: 49.0,
                item2_performance: 44.0,
                overall_score: 52.5,
                overall_winner: Some("Freelancing".to_string()),
                winning_reason: "Faster first payout for beginners".to_string(),
            },
            related: vec![CrossLink {
                url: "freelancing-vs-blogging.html".to_string(),
                text: "Freelancing vs Blogging".to_string(),
            }],
            score_summary: "Freelancing leads by a small margin.".to_string(),
            snippets: vec![CategorySnippet {
                category: "Market Demand".to_string(),
                text: "Clients keep hiring; stores keep competing.".to_string(),
                link: "https://matchupai.com/market-demand/".to_string(),
                button_text: "Best Methods with High Market Demand".to_string(),
            }],
            closing: "Run your own comparison on Matchup AI.".to_string(),
        }
    }

    #[test]
    fn test_render_binds_every_slot() {
        let document = render(&sample_content()).unwrap();

        assert_eq!(document.filename, "freelancing-vs-dropshipping.html");
        assert_eq!(document.title, "Freelancing vs Dropshipping [AI Analysis]");
        assert!(document.html.contains("<title>Freelancing vs Dropshipping [AI Analysis]</title>"));
        assert!(document
            .html
            .contains(r#"content="A data-driven look at two paths.""#));
        // Intro is substituted raw
        assert!(document
            .html
            .contains("<p>Two popular paths, <b>one</b> clear breakdown.</p>"));
        assert!(document.html.contains("49.0%"));
        assert!(document.html.contains("44.0%"));
        assert!(document.html.contains("52.5"));
        assert!(document.html.contains("Faster first payout for beginners"));
        assert!(document.html.contains(r#"href="freelancing-vs-blogging.html""#));
        assert!(document.html.contains("Freelancing leads by a small margin."));
        assert!(document.html.contains("Clients keep hiring; stores keep competing."));
        assert!(document.html.contains("Best Methods with High Market Demand"));
        assert!(document.html.contains("Run your own comparison on Matchup AI."));
        assert!(document.html.contains(r#"href="styles.css""#));
    }

    #[test]
    fn test_render_keeps_category_order() {
        let document = render(&sample_content()).unwrap();

        let first = document.html.find("Scalability").unwrap();
        let second = document.html.find("Immediate Earnings").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_marks_row_winners() {
        let document = render(&sample_content()).unwrap();

        // One winner column per row, on the row winner's side
        assert_eq!(document.html.matches("winner-column").count(), 2);
        assert_eq!(document.html.matches("winner-badge").count(), 2);
    }

    #[test]
    fn test_render_escapes_text_slots() {
        let mut content = sample_content();
        content.score_summary = "Scores < 60 are \"normal\" here.".to_string();

        let document = render(&content).unwrap();
        assert!(!document.html.contains("Scores < 60"));
        assert!(document.html.contains("Scores &lt; 60"));
    }

    #[test]
    fn test_render_omits_verdict_winner_without_one() {
        let mut content = sample_content();
        content.bundle = ComparisonBundle::neutral();

        let document = render(&content).unwrap();
        assert!(!document.html.contains("Faster first payout"));
        assert!(document.html.contains("Both methods have their unique advantages"));
        assert!(document.html.contains("50.0"));
    }
}
