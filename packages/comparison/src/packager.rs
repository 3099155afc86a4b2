//! Output packaging: site directory writes and the downloadable ZIP.
//!
//! Every package ships the shared stylesheet next to the pages, so each
//! generated document can link it with a relative path.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::types::document::GeneratedDocument;

/// Stylesheet shipped with every package.
pub const STYLESHEET: &str = include_str!("assets/styles.css");

/// Name of the stylesheet entry, referenced by each page's `<link>`.
pub const STYLESHEET_NAME: &str = "styles.css";

/// Default name of the downloadable archive.
pub const ARCHIVE_NAME: &str = "comparison_pages.zip";

/// Write the stylesheet and all documents into `out_dir`, creating it if
/// needed. Existing files with the same names are overwritten.
pub fn write_site(documents: &[GeneratedDocument], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(STYLESHEET_NAME), STYLESHEET)?;
    for document in documents {
        fs::write(out_dir.join(&document.filename), &document.html)?;
    }
    info!(dir = %out_dir.display(), pages = documents.len(), "wrote comparison site");
    Ok(())
}

/// Build the ZIP archive in memory: the stylesheet first, then every
/// document at the archive root.
pub fn archive(documents: &[GeneratedDocument]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(STYLESHEET_NAME, options)?;
    writer.write_all(STYLESHEET.as_bytes())?;

    for document in documents {
        writer.start_file(document.filename.as_str(), options)?;
        writer.write_all(document.html.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Build the archive and write it to `path`.
pub fn write_archive(documents: &[GeneratedDocument], path: &Path) -> Result<()> {
    let bytes = archive(documents)?;
    fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote comparison archive");
    Ok(())
}
