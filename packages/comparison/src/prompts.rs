//! Prompt catalog for comparison page generation.
//!
//! Prompts are fixed templates filled by simple placeholder replacement,
//! so the same pair always produces the same prompt text. Copy is aimed at
//! complete beginners and worded to stay clear of Google's YMYL policy.

/// The twelve categories scored in every comparison.
pub const SCORING_CATEGORIES: [&str; 12] = [
    "Ease of Starting & Doing",
    "Minimal or Zero Investment",
    "Scalability",
    "Passive Income Potential",
    "Market Demand",
    "Competition Level",
    "Immediate Earnings",
    "Long-Term Stability",
    "Risk of Failure",
    "Opportunity for Newcomers",
    "Adaptability to Changes",
    "Global Reach & Accessibility",
];

/// One entry in the snippet catalog: a site category with its landing page
/// and button caption.
#[derive(Debug, Clone)]
pub struct SnippetCategory {
    pub name: &'static str,
    pub link: &'static str,
    pub button_text: &'static str,
}

/// Categories eligible for the short comparison snippets. Six of these are
/// chosen per page.
pub static SNIPPET_CATEGORIES: [SnippetCategory; 8] = [
    SnippetCategory {
        name: "Ease of Starting & Doing",
        link: "https://matchupai.com/ease-of-starting/",
        button_text: "Easiest Methods to Start",
    },
    SnippetCategory {
        name: "Minimal or Zero Investment",
        link: "https://matchupai.com/minimal-investment/",
        button_text: "Best Methods with Minimal Investment",
    },
    SnippetCategory {
        name: "Passive Income Potential",
        link: "https://matchupai.com/passive-income-potential/",
        button_text: "Best Methods with Passive Income Potential",
    },
    SnippetCategory {
        name: "Market Demand",
        link: "https://matchupai.com/market-demand/",
        button_text: "Best Methods with High Market Demand",
    },
    SnippetCategory {
        name: "Competition Level",
        link: "https://matchupai.com/competition-level/",
        button_text: "Methods with Lowest Competition",
    },
    SnippetCategory {
        name: "Immediate Earnings",
        link: "https://matchupai.com/immediate-earnings/",
        button_text: "Best Immediate Earning Methods",
    },
    SnippetCategory {
        name: "Risk of Failure",
        link: "https://matchupai.com/risk-of-failure/",
        button_text: "Lowest Risk Methods to Start",
    },
    SnippetCategory {
        name: "Skills & Experience Needed",
        link: "https://matchupai.com/skills-and-experience/",
        button_text: "Best Methods for your Skills",
    },
];

/// System message for the scorecard call.
pub const SCORECARD_SYSTEM_PROMPT: &str = "You are a helpful assistant that responds only in valid JSON format with detailed comparisons between two options.";

/// Prompt for the SEO intro paragraph.
pub const INTRO_PROMPT: &str = r#"Re-write this in a meaningful, engaging, and SEO-friendly way. Ensure content avoids triggering Google's YMYL (Your Money or Your Life) policy.

"Get the most accurate and unbiased AI-driven comparison of {item1} and {item2}. Unlike human opinions, Matchup AI analyzes real-time data and trends to give you the clearest answer on which is the better choice. Explore expert AI insights now!""#;

/// Prompt for the structured category scorecard.
pub const SCORECARD_PROMPT: &str = r#"Compare {item1} vs {item2} across the following categories for COMPLETE BEGINNERS. For each category:

1. Provide separate descriptions for {item1} and {item2} (30-40 words each) focusing on beginner-friendliness.
2. Provide VERY CHALLENGING scores (20-60) for each option. Even excellent beginner methods should rarely exceed 60%.
3. Determine which option performs better for beginners in this category.

Remember: Be very strict with scoring. Starting any online method is extremely difficult for beginners.

Also provide a SHORT explanation (15-25 words) of why the overall winner is better for beginners.

Categories:
{categories}

Format the response as JSON with this structure:
{
    "categories": [
        {
            "name": "category name",
            "item1_details": "Specific details about {item1} for this category (beginner-focused)",
            "item2_details": "Specific details about {item2} for this category (beginner-focused)",
            "item1_score": 45,
            "item2_score": 52,
            "winner": "{item1} or {item2}"
        }
    ],
    "overall_winner": "The overall better option for beginners",
    "winning_reason": "Short explanation why winner is better for beginners"
}

IMPORTANT:
- Respond ONLY with the JSON structure
- Focus on beginner-friendliness in all descriptions
- Scores should be very challenging (20-60 range maximum)
- Winner should be exactly "{item1}" or "{item2}" (no other variations)
- Winning reason should be SHORT (15-25 words only)"#;

/// Prompt for the score summary passage.
pub const SCORE_SUMMARY_PROMPT: &str = r#"Re-write this in another meaningful way. Avoid words and phrases that might trigger Google YMYL policy.

"According to Matchup AI, {item1} scores {score1}%, while {item2} scores {score2}% - meaning neither is ideal right now. However, if you're a beginner with no clear direction, {leader} is the better choice. Want more options? Select one from the buttons below.""#;

/// Prompt for one short category snippet.
pub const SNIPPET_PROMPT: &str = r#"Write a short comparison (30-40 words) between {item1} and {item2} specifically for "{category}" category. Focus on which method performs better and why. Do not include scores or percentages."#;

/// Prompt for the closing passage.
pub const CLOSING_PROMPT: &str = r#"Re-write this in another meaningful way. Avoid words and phrases that might trigger Google YMYL policy.

"Want to compare {item1} vs. {item2} with real-time data, considering the latest news and trends? Matchup AI is the most reliable tool to give you accurate insights before deciding on your next online money-making strategy.
And if you need to compare anything else - whether it's financial markets, tech trends, or any topic in the universe - Matchup AI has you covered. Try it now and make smarter decisions with confidence!""#;

/// Format the intro prompt.
pub fn format_intro_prompt(item1: &str, item2: &str) -> String {
    INTRO_PROMPT
        .replace("{item1}", item1)
        .replace("{item2}", item2)
}

/// Format the scorecard prompt with the full category list.
pub fn format_scorecard_prompt(item1: &str, item2: &str) -> String {
    SCORECARD_PROMPT
        .replace("{item1}", item1)
        .replace("{item2}", item2)
        .replace("{categories}", &SCORING_CATEGORIES.join("\n"))
}

/// Format the score summary prompt with aggregate percentages.
pub fn format_score_summary_prompt(item1: &str, item2: &str, score1: f64, score2: f64) -> String {
    let leader = if score1 > score2 { item1 } else { item2 };
    SCORE_SUMMARY_PROMPT
        .replace("{item1}", item1)
        .replace("{item2}", item2)
        .replace("{score1}", &format!("{:.1}", score1))
        .replace("{score2}", &format!("{:.1}", score2))
        .replace("{leader}", leader)
}

/// Format the snippet prompt for one catalog category.
pub fn format_snippet_prompt(item1: &str, item2: &str, category: &str) -> String {
    SNIPPET_PROMPT
        .replace("{item1}", item1)
        .replace("{item2}", item2)
        .replace("{category}", category)
}

/// Format the closing prompt.
pub fn format_closing_prompt(item1: &str, item2: &str) -> String {
    CLOSING_PROMPT
        .replace("{item1}", item1)
        .replace("{item2}", item2)
}
