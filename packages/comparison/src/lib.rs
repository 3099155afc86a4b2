//! Pairwise Comparison Page Generation
//!
//! Turns a list of keywords (online earning methods, tools, anything
//! comparable) into a static site of head-to-head comparison pages. Every
//! unordered pair gets one HTML document with AI-written copy, a scored
//! category table, cross-links to related pages, and promotional snippets,
//! plus a shared stylesheet and a downloadable ZIP of the whole set.
//!
//! # Design
//!
//! - Generation is best-effort per block: a failed API call degrades one
//!   section to deterministic fallback copy, never the page or the run
//! - The pipeline depends on the [`TextGenerator`] trait, so everything is
//!   testable offline with [`testing::MockGenerator`]
//! - Rendering is a pure function over [`PageContent`], with every slot
//!   bound under Handlebars strict mode
//!
//! # Usage
//!
//! ```rust,ignore
//! use comparison::{KeywordSet, Pipeline, PipelineConfig};
//! use comparison::OpenAiGenerator;
//!
//! let generator = OpenAiGenerator::from_env()?;
//! let keywords = KeywordSet::parse("Freelancing, Dropshipping, Blogging")?;
//!
//! let pipeline = Pipeline::new(generator);
//! let documents = pipeline.run(&keywords).await?;
//! comparison::packager::write_site(&documents, "output".as_ref())?;
//! ```
//!
//! # Modules
//!
//! - [`keywords`] - Input sanitization and pair enumeration
//! - [`generator`] - The text-generation abstraction
//! - [`prompts`] - Prompt catalog and scoring/snippet categories
//! - [`assembler`] - Per-pair content assembly with fallbacks
//! - [`scores`] - Performance aggregation
//! - [`links`] - Cross-link selection
//! - [`render`] - Handlebars page rendering
//! - [`packager`] - Site directory and ZIP output
//! - [`pipeline`] - End-to-end orchestration
//! - [`testing`] - Deterministic mock generator

pub mod assembler;
pub mod error;
pub mod generator;
pub mod keywords;
pub mod links;
pub mod packager;
pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod scores;
pub mod slug;
pub mod testing;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

// Re-export core types at crate root
pub use error::{BlockError, ComparisonError, GenerationError, Result};
pub use generator::{GenerateOptions, TextGenerator};
pub use keywords::{sanitize, sanitize_list, ComparisonPair, KeywordSet};
pub use pipeline::{Pipeline, PipelineConfig, DEFAULT_MODEL};
pub use slug::{pair_filename, slug};
pub use types::{
    bundle::{CategoryResult, ComparisonBundle, ScorecardResponse},
    document::{CategorySnippet, CrossLink, GeneratedDocument, PageContent},
};

#[cfg(feature = "openai")]
pub use ai::OpenAiGenerator;
