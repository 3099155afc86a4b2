//! Live text-generation backends, gated behind the `openai` feature.

mod openai;

pub use openai::OpenAiGenerator;
