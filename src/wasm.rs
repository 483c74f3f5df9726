//! WASM bindings for browser-based manuscript compilation.
//!
//! This module exposes the pipeline to JavaScript via wasm-bindgen. Saving
//! the returned bytes (e.g. through a Blob download) is left to the caller.

use wasm_bindgen::prelude::*;

use crate::book::BookModel;
use crate::export::{self, Format};
use crate::segment::segment;
use crate::source::{SourceKind, extract_text};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn parse_format(format: &str) -> Result<Format, JsValue> {
    format
        .parse::<Format>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract text from an uploaded document (`.txt` or `.docx` bytes).
#[wasm_bindgen]
pub fn manuscript_text(data: &[u8]) -> Result<String, JsValue> {
    extract_text(data, SourceKind::sniff(data)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Titles of the chapters detected in `text`, in order.
#[wasm_bindgen]
pub fn chapter_titles(text: &str) -> Vec<String> {
    segment(text).into_iter().map(|c| c.title).collect()
}

/// Compile `text` and export it in `format` (`kindle`, `universal` or `pdf`).
///
/// Returns the artifact bytes.
#[wasm_bindgen]
pub fn export_book(text: &str, title: &str, author: &str, format: &str) -> Result<Vec<u8>, JsValue> {
    let format = parse_format(format)?;
    let book = BookModel::from_chapters(segment(text))
        .with_title(title)
        .with_author(author);

    let artifact = export::export(&book, format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(artifact.data)
}

/// Suggested download filename for a book titled `title`.
#[wasm_bindgen]
pub fn artifact_filename(title: &str, format: &str) -> Result<String, JsValue> {
    Ok(export::artifact_filename(title, parse_format(format)?))
}
