//! Error types for folio operations.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while reading a manuscript or exporting a book.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The source document could not be turned into plain text.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A book field that must be present before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Chapters,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Chapters => "chapters",
        })
    }
}

/// Export was requested for a book that is missing required fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Book is not ready for export, missing: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = ValidationError {
            missing: vec![Field::Author, Field::Chapters],
        };
        assert_eq!(
            err.to_string(),
            "Book is not ready for export, missing: author, chapters"
        );
    }

    #[test]
    fn test_validation_converts_into_error() {
        let err: Error = ValidationError {
            missing: vec![Field::Title],
        }
        .into();
        assert!(matches!(err, Error::Validation(_)));
    }
}
