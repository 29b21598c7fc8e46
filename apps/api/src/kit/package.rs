//! Zip packaging for the downloadable kit.

use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::kit::renderer::KitArtifact;

/// File name offered to the browser.
pub const ARCHIVE_NAME: &str = "ai_design_kit.zip";

pub const HTML_ENTRY: &str = "index.html";
pub const CSS_ENTRY: &str = "style.css";
pub const JS_ENTRY: &str = "script.js";

#[derive(Debug, Error)]
pub enum KitError {
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bundles the artifact as `index.html`, `style.css`, `script.js`, in that order.
///
/// Entry timestamps are pinned, so equal artifacts produce equal bytes.
pub fn package(artifact: &KitArtifact) -> Result<Vec<u8>, KitError> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in [
        (HTML_ENTRY, &artifact.html),
        (CSS_ENTRY, &artifact.css),
        (JS_ENTRY, &artifact.js),
    ] {
        writer.start_file(name, options)?;
        writer.write_all(contents.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}
