//! Content assembly for one comparison pair.
//!
//! Issues the fixed sequence of generation calls (intro, scorecard, score
//! summary, snippets, closing), parses the scorecard, and substitutes the
//! per-block fallback copy when a call fails or returns garbage. Block
//! failures are isolated: they never abort the pair or the run.

use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regex::Regex;
use tracing::warn;

use crate::error::{BlockError, GenerationError};
use crate::generator::{GenerateOptions, TextGenerator};
use crate::keywords::{ComparisonPair, KeywordSet};
use crate::links::related_links;
use crate::prompts::{self, SnippetCategory, SNIPPET_CATEGORIES};
use crate::scores;
use crate::types::bundle::{ComparisonBundle, ScorecardResponse};
use crate::types::document::{CategorySnippet, PageContent};

/// Number of snippet categories chosen per page.
pub const SNIPPETS_PER_PAGE: usize = 6;

const TEMPERATURE: f32 = 0.7;
const INTRO_MAX_TOKENS: u32 = 200;
const SCORECARD_MAX_TOKENS: u32 = 1500;
const SUMMARY_MAX_TOKENS: u32 = 150;
const SNIPPET_MAX_TOKENS: u32 = 100;
const CLOSING_MAX_TOKENS: u32 = 200;

const META_DESCRIPTION_LIMIT: usize = 155;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Assembles the full content bundle for pairs of one run.
pub struct ContentAssembler<'a, G> {
    generator: &'a G,
    model: String,
    snippet_seed: Option<u64>,
}

impl<'a, G: TextGenerator> ContentAssembler<'a, G> {
    /// Create an assembler generating with the given model.
    pub fn new(generator: &'a G, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            snippet_seed: None,
        }
    }

    /// Seed the snippet category selection for reproducible output.
    pub fn with_snippet_seed(mut self, seed: Option<u64>) -> Self {
        self.snippet_seed = seed;
        self
    }

    /// Assemble all content for one pair.
    ///
    /// Infallible: every block that cannot be generated falls back to its
    /// deterministic copy.
    pub async fn assemble(&self, pair: &ComparisonPair, keywords: &KeywordSet) -> PageContent {
        let intro_html = self.intro(pair).await;
        let bundle = self.scorecard(pair).await;
        let related = related_links(pair, keywords);
        let score_summary = self
            .score_summary(pair, bundle.item1_performance, bundle.item2_performance)
            .await;
        let snippets = self.snippets(pair).await;
        let closing = self.closing(pair).await;

        PageContent {
            title: pair.title(),
            meta_description: meta_description(&intro_html),
            pair: pair.clone(),
            intro_html,
            bundle,
            related,
            score_summary,
            snippets,
            closing,
        }
    }

    fn options(&self, max_tokens: u32) -> GenerateOptions {
        GenerateOptions::new(self.model.as_str())
            .temperature(TEMPERATURE)
            .max_tokens(max_tokens)
    }

    async fn generate(
        &self,
        prompt: String,
        options: GenerateOptions,
    ) -> Result<String, BlockError> {
        let text = self.generator.generate(&prompt, &options).await?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::EmptyCompletion.into());
        }
        Ok(trimmed.to_string())
    }

    async fn intro(&self, pair: &ComparisonPair) -> String {
        let prompt = prompts::format_intro_prompt(&pair.item1, &pair.item2);
        match self.generate(prompt, self.options(INTRO_MAX_TOKENS)).await {
            Ok(text) => format!("<p>{}</p>", text),
            Err(error) => {
                warn!(pair = %pair.label(), %error, "intro generation failed, using fallback");
                format!(
                    "<p>Compare {} vs {} - A Comprehensive Analysis</p>",
                    pair.item1, pair.item2
                )
            }
        }
    }

    async fn scorecard(&self, pair: &ComparisonPair) -> ComparisonBundle {
        let prompt = prompts::format_scorecard_prompt(&pair.item1, &pair.item2);
        let options = self
            .options(SCORECARD_MAX_TOKENS)
            .system(prompts::SCORECARD_SYSTEM_PROMPT);

        let response = match self.generate(prompt, options).await {
            Ok(text) => parse_scorecard(&text, pair),
            Err(error) => Err(error),
        };

        match response {
            Ok(scorecard) => {
                let performance = scores::aggregate(&scorecard.categories);
                ComparisonBundle {
                    categories: scorecard.categories,
                    item1_performance: performance.item1,
                    item2_performance: performance.item2,
                    overall_score: performance.overall,
                    overall_winner: Some(scorecard.overall_winner),
                    winning_reason: scorecard.winning_reason,
                }
            }
            Err(error) => {
                warn!(pair = %pair.label(), %error, "scorecard generation failed, using neutral fallback");
                ComparisonBundle::neutral()
            }
        }
    }

    async fn score_summary(&self, pair: &ComparisonPair, score1: f64, score2: f64) -> String {
        let prompt =
            prompts::format_score_summary_prompt(&pair.item1, &pair.item2, score1, score2);
        match self.generate(prompt, self.options(SUMMARY_MAX_TOKENS)).await {
            Ok(text) => text,
            Err(error) => {
                warn!(pair = %pair.label(), %error, "score summary generation failed, using fallback");
                let leader = if score1 > score2 {
                    &pair.item1
                } else {
                    &pair.item2
                };
                format!(
                    "Based on our analysis, {} achieved {:.1}% while {} reached {:.1}%. For beginners, {} offers better starting opportunities.",
                    pair.item1, score1, pair.item2, score2, leader
                )
            }
        }
    }

    async fn snippets(&self, pair: &ComparisonPair) -> Vec<CategorySnippet> {
        let chosen: Vec<&SnippetCategory> = match self.snippet_seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                SNIPPET_CATEGORIES
                    .choose_multiple(&mut rng, SNIPPETS_PER_PAGE)
                    .collect()
            }
            None => {
                let mut rng = rand::thread_rng();
                SNIPPET_CATEGORIES
                    .choose_multiple(&mut rng, SNIPPETS_PER_PAGE)
                    .collect()
            }
        };

        let mut snippets = Vec::with_capacity(chosen.len());
        for category in chosen {
            let prompt = prompts::format_snippet_prompt(&pair.item1, &pair.item2, category.name);
            let text = match self.generate(prompt, self.options(SNIPPET_MAX_TOKENS)).await {
                Ok(text) => text,
                Err(error) => {
                    warn!(
                        pair = %pair.label(),
                        category = category.name,
                        %error,
                        "snippet generation failed, using fallback"
                    );
                    format!(
                        "{} and {} both have their unique approaches to {}. Each method offers different advantages depending on your specific situation.",
                        pair.item1,
                        pair.item2,
                        category.name.to_lowercase()
                    )
                }
            };

            snippets.push(CategorySnippet {
                category: category.name.to_string(),
                text,
                link: category.link.to_string(),
                button_text: category.button_text.to_string(),
            });
        }
        snippets
    }

    async fn closing(&self, pair: &ComparisonPair) -> String {
        let prompt = prompts::format_closing_prompt(&pair.item1, &pair.item2);
        match self.generate(prompt, self.options(CLOSING_MAX_TOKENS)).await {
            Ok(text) => text,
            Err(error) => {
                warn!(pair = %pair.label(), %error, "closing generation failed, using fallback");
                format!(
                    "Interested in exploring {} vs {} with current data and trends? Matchup AI provides comprehensive analysis to help you evaluate different opportunities. Whether you're comparing various methods or exploring new possibilities, Matchup AI offers detailed insights to support your decision-making process.",
                    pair.item1, pair.item2
                )
            }
        }
    }
}

/// Parse and validate a scorecard response.
///
/// Tolerates a Markdown code fence around the JSON. An empty category
/// list, or any winner label matching neither item, is a schema violation.
pub fn parse_scorecard(raw: &str, pair: &ComparisonPair) -> Result<ScorecardResponse, BlockError> {
    let response: ScorecardResponse = serde_json::from_str(raw.trim())
        .or_else(|_| serde_json::from_str(strip_code_fences(raw)))
        .map_err(|e| BlockError::MalformedResponse(e.to_string()))?;

    if response.categories.is_empty() {
        return Err(BlockError::MalformedResponse(
            "no categories in response".to_string(),
        ));
    }

    for category in &response.categories {
        if category.winner != pair.item1 && category.winner != pair.item2 {
            return Err(BlockError::MalformedResponse(format!(
                "category winner '{}' is not one of the pair",
                category.winner
            )));
        }
    }

    if response.overall_winner != pair.item1 && response.overall_winner != pair.item2 {
        return Err(BlockError::MalformedResponse(format!(
            "overall winner '{}' is not one of the pair",
            response.overall_winner
        )));
    }

    Ok(response)
}

/// Strip a wrapping Markdown code fence, if present.
fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Meta description derived from the intro block: tags stripped, truncated
/// to 155 characters with a trailing ellipsis when longer.
pub fn meta_description(intro_html: &str) -> String {
    let clean = HTML_TAG.replace_all(intro_html, "");
    let clean = clean.trim();

    if clean.chars().count() > META_DESCRIPTION_LIMIT {
        let truncated: String = clean.chars().take(META_DESCRIPTION_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        clean.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scorecard_json, MockGenerator};

    fn pair() -> ComparisonPair {
        ComparisonPair::new("Freelancing", "Dropshipping")
    }

    fn keywords() -> KeywordSet {
        KeywordSet::new(["Freelancing", "Dropshipping"]).unwrap()
    }

    #[test]
    fn test_parse_scorecard_accepts_plain_json() {
        let raw = scorecard_json(
            &pair(),
            &[("Scalability", 45.0, 52.0), ("Market Demand", 50.0, 40.0)],
            "Dropshipping",
            "Simpler early workflow",
        );

        let parsed = parse_scorecard(&raw, &pair()).unwrap();
        assert_eq!(parsed.categories.len(), 2);
        assert_eq!(parsed.overall_winner, "Dropshipping");
    }

    #[test]
    fn test_parse_scorecard_accepts_fenced_json() {
        let raw = format!(
            "```json\n{}\n```",
            scorecard_json(&pair(), &[("Scalability", 45.0, 52.0)], "Freelancing", "ok")
        );

        let parsed = parse_scorecard(&raw, &pair()).unwrap();
        assert_eq!(parsed.categories.len(), 1);
    }

    #[test]
    fn test_parse_scorecard_rejects_unknown_winner() {
        let raw = scorecard_json(&pair(), &[("Scalability", 45.0, 52.0)], "Etsy", "nope");

        let result = parse_scorecard(&raw, &pair());
        assert!(matches!(result, Err(BlockError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_scorecard_rejects_empty_categories() {
        let raw = r#"{"categories": [], "overall_winner": "Freelancing", "winning_reason": "x"}"#;

        let result = parse_scorecard(raw, &pair());
        assert!(matches!(result, Err(BlockError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_scorecard_rejects_non_json() {
        let result = parse_scorecard("I could not produce JSON, sorry.", &pair());
        assert!(matches!(result, Err(BlockError::MalformedResponse(_))));
    }

    #[test]
    fn test_meta_description_strips_tags() {
        assert_eq!(
            meta_description("<p>Compare <b>A</b> and B</p>"),
            "Compare A and B"
        );
    }

    #[test]
    fn test_meta_description_truncates_long_intros() {
        let long = format!("<p>{}</p>", "x".repeat(300));
        let description = meta_description(&long);
        assert_eq!(description.chars().count(), 155 + 3);
        assert!(description.ends_with("..."));
    }

    #[tokio::test]
    async fn test_assemble_uses_generated_content() {
        let mock = MockGenerator::new()
            .with_reply("SEO-friendly", "An even-handed look at two popular paths.")
            .with_reply(
                "across the following categories",
                scorecard_json(
                    &pair(),
                    &[("Scalability", 40.0, 60.0), ("Market Demand", 60.0, 40.0)],
                    "Dropshipping",
                    "Less client management overhead",
                ),
            )
            .with_reply("Want more options?", "Scores are close; start with what fits you.")
            .with_reply("Write a short comparison", "Both paths reward consistency.")
            .with_reply("real-time data", "Keep exploring with Matchup AI.");

        let assembler = ContentAssembler::new(&mock, "gpt-4");
        let content = assembler.assemble(&pair(), &keywords()).await;

        assert_eq!(content.title, "Freelancing vs Dropshipping [AI Analysis]");
        assert_eq!(
            content.intro_html,
            "<p>An even-handed look at two popular paths.</p>"
        );
        assert_eq!(content.meta_description, "An even-handed look at two popular paths.");
        assert_eq!(content.bundle.categories.len(), 2);
        assert_eq!(content.bundle.item1_performance, 50.0);
        assert_eq!(content.bundle.overall_score, 50.0);
        assert_eq!(content.bundle.overall_winner.as_deref(), Some("Dropshipping"));
        assert_eq!(content.snippets.len(), SNIPPETS_PER_PAGE);
        assert_eq!(content.closing, "Keep exploring with Matchup AI.");
        // Two keywords only, so no related pages exist
        assert!(content.related.is_empty());
    }

    #[tokio::test]
    async fn test_assemble_survives_total_generation_failure() {
        let mock = MockGenerator::failing("rate limited");

        let assembler = ContentAssembler::new(&mock, "gpt-4");
        let content = assembler.assemble(&pair(), &keywords()).await;

        assert_eq!(
            content.intro_html,
            "<p>Compare Freelancing vs Dropshipping - A Comprehensive Analysis</p>"
        );
        assert!(content.bundle.categories.is_empty());
        assert_eq!(content.bundle.overall_score, 50.0);
        assert!(content.bundle.overall_winner.is_none());
        assert_eq!(
            content.score_summary,
            "Based on our analysis, Freelancing achieved 50.0% while Dropshipping reached 50.0%. For beginners, Dropshipping offers better starting opportunities."
        );
        assert_eq!(content.snippets.len(), SNIPPETS_PER_PAGE);
        for snippet in &content.snippets {
            assert!(snippet.text.contains("both have their unique approaches"));
        }
        assert!(content.closing.contains("Matchup AI"));
    }

    #[tokio::test]
    async fn test_failed_block_is_isolated() {
        let mock = MockGenerator::new()
            .with_reply("SEO-friendly", "A clear look at both options.")
            .with_failure("across the following categories", "model overloaded")
            .with_reply("Want more options?", "Neither dominates; pick by preference.")
            .with_reply("Write a short comparison", "Closely matched in practice.")
            .with_reply("real-time data", "Compare more with Matchup AI.");

        let assembler = ContentAssembler::new(&mock, "gpt-4");
        let content = assembler.assemble(&pair(), &keywords()).await;

        // Scorecard fell back to neutral, everything else kept generated copy
        assert!(content.bundle.categories.is_empty());
        assert_eq!(content.bundle.winning_reason, "Both methods have their unique advantages");
        assert_eq!(content.intro_html, "<p>A clear look at both options.</p>");
        assert_eq!(content.score_summary, "Neither dominates; pick by preference.");
    }

    #[tokio::test]
    async fn test_assemble_passes_block_budgets() {
        let mock = MockGenerator::new();
        let assembler = ContentAssembler::new(&mock, "gpt-4");
        assembler.assemble(&pair(), &keywords()).await;

        let calls = mock.calls();
        // intro + scorecard + summary + six snippets + closing
        assert_eq!(calls.len(), 4 + SNIPPETS_PER_PAGE);
        assert_eq!(calls[0].max_tokens, 200);
        assert_eq!(calls[1].max_tokens, 1500);
        assert_eq!(calls[2].max_tokens, 150);
        assert_eq!(calls[calls.len() - 1].max_tokens, 200);
        assert!(calls.iter().all(|c| c.model == "gpt-4"));
    }

    #[tokio::test]
    async fn test_seeded_snippet_selection_is_reproducible() {
        let mock = MockGenerator::new();
        let assembler = ContentAssembler::new(&mock, "gpt-4").with_snippet_seed(Some(7));

        let first = assembler.assemble(&pair(), &keywords()).await;
        let second = assembler.assemble(&pair(), &keywords()).await;

        let names = |content: &PageContent| {
            content
                .snippets
                .iter()
                .map(|s| s.category.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
    }
}
