//! Manuscript sources.
//!
//! Turns an uploaded document into the plain text the segmenter consumes.
//! Two kinds are supported: plain text (decoded as UTF-8, falling back to
//! Windows-1252) and Word `.docx` files. Anything else fails with
//! [`Error::Extraction`].
//!
//! Extraction happens before any [`BookModel`](crate::BookModel) exists, so
//! a failed upload never disturbs a previously built model.

mod docx;

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::util::decode_text;

/// ZIP local file header magic.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// The kind of document a manuscript arrives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    PlainText,
    Docx,
}

impl SourceKind {
    /// Detect the kind from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "text" | "md" => Some(SourceKind::PlainText),
            "docx" => Some(SourceKind::Docx),
            _ => None,
        }
    }

    /// Guess the kind from the leading bytes.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(ZIP_MAGIC) {
            SourceKind::Docx
        } else {
            SourceKind::PlainText
        }
    }
}

/// Extract plain text from a document of the given kind.
pub fn extract_text(bytes: &[u8], kind: SourceKind) -> Result<String> {
    debug!(?kind, bytes = bytes.len(), "extracting text");
    let text = match kind {
        SourceKind::PlainText => decode_text(bytes, None).into_owned(),
        SourceKind::Docx => docx::extract_docx(bytes).map_err(|e| match e {
            Error::Extraction(_) => e,
            other => Error::Extraction(format!("unreadable .docx: {other}")),
        })?,
    };
    info!(?kind, characters = text.chars().count(), "extracted manuscript");
    Ok(text)
}

/// Read a manuscript from disk, choosing the reader from its extension.
///
/// Files without an extension are sniffed.
pub fn read_manuscript(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let declared = match path.extension() {
        Some(_) => Some(SourceKind::from_path(path).ok_or_else(|| {
            Error::Extraction(format!("unsupported file type: {}", path.display()))
        })?),
        None => None,
    };

    let bytes = std::fs::read(path)?;
    let kind = declared.unwrap_or_else(|| SourceKind::sniff(&bytes));
    extract_text(&bytes, kind)
}
