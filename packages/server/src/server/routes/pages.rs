//! Landing page, comparison preview, and single-page download.

use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use chrono::Local;
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};

use comparison::{slug, KeywordSet};

use crate::server::error::ApiError;

const PREVIEW_TEMPLATE: &str = include_str!("../assets/preview.hbs");
const DOWNLOAD_TEMPLATE: &str = include_str!("../assets/download.hbs");

/// Form payload shared by `/compare` and `/download`.
#[derive(Debug, Deserialize)]
pub struct CompareForm {
    #[serde(default)]
    pub category: String,

    /// Comma-separated method names
    #[serde(default)]
    pub methods: String,
}

/// One planned comparison page.
#[derive(Debug, Serialize)]
struct PlannedPage {
    url: String,
    label: String,
}

#[derive(Debug, Serialize)]
struct PreviewContext<'a> {
    category: &'a str,
    methods: &'a [String],
    methods_raw: String,
    planned: Vec<PlannedPage>,
}

#[derive(Debug, Serialize)]
struct DownloadContext<'a> {
    category: &'a str,
    methods: &'a [String],
    planned: Vec<PlannedPage>,
    current_date: &'a str,
}

/// Landing page with the comparison forms.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Preview the comparison set for a category.
///
/// Accepts a single method; pair planning only kicks in from two methods
/// up, while generation itself stays behind `/generate`'s stricter check.
pub async fn compare_handler(Form(form): Form<CompareForm>) -> Result<Html<String>, ApiError> {
    let category = form.category.trim();
    let methods = comparison::sanitize_list(&form.methods);

    if category.is_empty() {
        return Err(ApiError::BadRequest("Please provide a category".to_string()));
    }
    if methods.is_empty() {
        return Err(ApiError::BadRequest(
            "Please provide at least 1 method".to_string(),
        ));
    }

    let context = PreviewContext {
        category,
        methods: &methods,
        methods_raw: methods.join(", "),
        planned: planned_pages(&methods),
    };
    let html = render_page(PREVIEW_TEMPLATE, &context)?;
    Ok(Html(html))
}

/// Download the comparison plan as a standalone HTML document.
pub async fn download_handler(Form(form): Form<CompareForm>) -> Result<Response, ApiError> {
    let category = form.category.trim();
    let methods = comparison::sanitize_list(&form.methods);

    if category.is_empty() || methods.is_empty() {
        return Err(ApiError::BadRequest("Invalid data".to_string()));
    }

    let current_date = Local::now().format("%B %d, %Y").to_string();
    let context = DownloadContext {
        category,
        methods: &methods,
        planned: planned_pages(&methods),
        current_date: &current_date,
    };
    let html = render_page(DOWNLOAD_TEMPLATE, &context)?;

    let filename = format!("{}-comparison.html", slug(category));
    let headers = [
        (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, html).into_response())
}

fn planned_pages(methods: &[String]) -> Vec<PlannedPage> {
    KeywordSet::new(methods)
        .map(|set| {
            set.pairs()
                .iter()
                .map(|pair| PlannedPage {
                    url: pair.filename(),
                    label: pair.label(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn render_page<T: Serialize>(template: &str, context: &T) -> Result<String, ApiError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .render_template(template, context)
        .map_err(|e| ApiError::Internal(e.to_string()))
}
