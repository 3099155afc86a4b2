//! Deterministic test double for the text-generation interface.
//!
//! Not gated behind `cfg(test)` so downstream crates can drive the pipeline
//! in their own tests without a live API key.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::generator::{GenerateOptions, TextGenerator};
use crate::keywords::ComparisonPair;

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

/// One recorded generation call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
}

/// Mock [`TextGenerator`] with canned, pattern-matched replies.
///
/// Rules are checked in registration order; the first whose pattern is a
/// substring of the prompt wins. With no matching rule the mock echoes the
/// prompt's first line, so unscripted calls still succeed deterministically.
/// State lives behind `Arc`s, so clones share rules and the call log.
#[derive(Default, Clone)]
pub struct MockGenerator {
    rules: Arc<RwLock<Vec<(String, MockReply)>>>,
    fail_all: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

impl MockGenerator {
    /// Mock that answers every call with the default echo reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that fails every call with an API error.
    pub fn failing(message: impl Into<String>) -> Self {
        let mock = Self::default();
        *mock.fail_all.write().unwrap() = Some(message.into());
        mock
    }

    /// Reply with `text` for prompts containing `pattern`.
    pub fn with_reply(self, pattern: impl Into<String>, text: impl Into<String>) -> Self {
        self.rules
            .write()
            .unwrap()
            .push((pattern.into(), MockReply::Text(text.into())));
        self
    }

    /// Fail with an API error for prompts containing `pattern`.
    pub fn with_failure(self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules
            .write()
            .unwrap()
            .push((pattern.into(), MockReply::Failure(message.into())));
        self
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls recorded so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, GenerationError> {
        self.calls.write().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            model: options.model.clone(),
            max_tokens: options.max_tokens,
        });

        if let Some(message) = self.fail_all.read().unwrap().as_ref() {
            return Err(GenerationError::Api(message.clone()));
        }

        let rules = self.rules.read().unwrap();
        for (pattern, reply) in rules.iter() {
            if prompt.contains(pattern.as_str()) {
                return match reply {
                    MockReply::Text(text) => Ok(text.clone()),
                    MockReply::Failure(message) => Err(GenerationError::Api(message.clone())),
                };
            }
        }

        let first_line = prompt.lines().next().unwrap_or_default();
        Ok(format!("Generated text for: {}", first_line))
    }
}

/// Build scorecard JSON in the wire shape the assembler parses.
///
/// Each row is `(category name, item1 score, item2 score)`; the row winner
/// is derived from the scores, ties going to the pair's first item.
pub fn scorecard_json(
    pair: &ComparisonPair,
    rows: &[(&str, f64, f64)],
    overall_winner: &str,
    winning_reason: &str,
) -> String {
    let categories: Vec<serde_json::Value> = rows
        .iter()
        .map(|&(name, item1_score, item2_score)| {
            let winner = if item1_score >= item2_score {
                &pair.item1
            } else {
                &pair.item2
            };
            serde_json::json!({
                "name": name,
                "item1_details": format!("How {} fares on {}", pair.item1, name),
                "item2_details": format!("How {} fares on {}", pair.item2, name),
                "item1_score": item1_score,
                "item2_score": item2_score,
                "winner": winner,
            })
        })
        .collect();

    serde_json::json!({
        "categories": categories,
        "overall_winner": overall_winner,
        "winning_reason": winning_reason,
    })
    .to_string()
}
