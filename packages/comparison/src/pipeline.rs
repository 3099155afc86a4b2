//! End-to-end orchestration: a keyword set in, rendered documents out.

use tracing::info;

use crate::assembler::ContentAssembler;
use crate::error::Result;
use crate::generator::TextGenerator;
use crate::keywords::KeywordSet;
use crate::packager;
use crate::render;
use crate::types::document::GeneratedDocument;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Run-level configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Model identifier passed to every generation call
    pub model: String,

    /// Seed for snippet category selection; random when unset
    pub snippet_seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            snippet_seed: None,
        }
    }
}

impl PipelineConfig {
    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Pin the snippet selection seed.
    pub fn with_snippet_seed(mut self, seed: u64) -> Self {
        self.snippet_seed = Some(seed);
        self
    }
}

/// The comparison pipeline: enumerates pairs, assembles content for each,
/// and renders the documents.
pub struct Pipeline<G> {
    generator: G,
    config: PipelineConfig,
}

impl<G: TextGenerator> Pipeline<G> {
    /// Pipeline with default configuration.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            config: PipelineConfig::default(),
        }
    }

    /// Pipeline with explicit configuration.
    pub fn with_config(generator: G, config: PipelineConfig) -> Self {
        Self { generator, config }
    }

    /// Generate one document per unordered pair of keywords.
    ///
    /// Generation failures inside a page fall back per block and never fail
    /// the run; only rendering and packaging problems surface as errors.
    pub async fn run(&self, keywords: &KeywordSet) -> Result<Vec<GeneratedDocument>> {
        let assembler = ContentAssembler::new(&self.generator, self.config.model.as_str())
            .with_snippet_seed(self.config.snippet_seed);

        let pairs = keywords.pairs();
        info!(
            keywords = keywords.len(),
            pairs = pairs.len(),
            model = %self.config.model,
            "starting comparison run"
        );

        let mut documents = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            let content = assembler.assemble(pair, keywords).await;
            let document = render::render(&content)?;
            info!(filename = %document.filename, "generated comparison page");
            documents.push(document);
        }
        Ok(documents)
    }

    /// Run and package the result as an in-memory ZIP archive.
    pub async fn run_to_archive(&self, keywords: &KeywordSet) -> Result<Vec<u8>> {
        let documents = self.run(keywords).await?;
        packager::archive(&documents)
    }
}
