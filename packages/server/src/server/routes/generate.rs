//! Bulk generation of the comparison archive.

use axum::extract::Extension;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use comparison::{packager, KeywordSet, Pipeline};

use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    /// Comma-separated keywords
    #[serde(default)]
    pub keywords: String,
}

/// Generate one page per keyword pair and return the ZIP archive.
///
/// Generation failures inside pages degrade to fallback copy and still
/// produce an archive; only rendering or packaging failures become 500s.
pub async fn generate_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Response, ApiError> {
    let keywords = KeywordSet::parse(&form.keywords)?;

    let pipeline = Pipeline::with_config(state.generator.clone(), state.pipeline_config.clone());
    let bytes = pipeline.run_to_archive(&keywords).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", packager::ARCHIVE_NAME),
        ),
    ];
    Ok((headers, bytes).into_response())
}
