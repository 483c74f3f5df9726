//! Export of a [`BookModel`] to a distributable artifact.
//!
//! A [`Format`] selects one of the generators through an explicit dispatch
//! table:
//!
//! | format      | generator                      | extension |
//! |-------------|--------------------------------|-----------|
//! | `kindle`    | [`Generator::PackageManifest`] | `.epub`   |
//! | `universal` | [`Generator::PackageManifest`] | `.epub`   |
//! | `pdf`       | [`Generator::Printable`]       | `.html`   |
//!
//! `kindle` and `universal` share a generator and differ only in their
//! label and description.
//!
//! # Example
//!
//! ```
//! use folio::{BookModel, Format, segment};
//! use folio::export::export;
//!
//! let book = BookModel::from_chapters(segment("Chapter 1\nHello world."))
//!     .with_title("T")
//!     .with_author("A");
//!
//! let artifact = export(&book, Format::Kindle)?;
//! assert_eq!(artifact.filename, "T.epub");
//! # Ok::<(), folio::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::book::BookModel;
use crate::error::Result;

mod container;
mod package;
mod printable;

pub use container::{book_identifier, package_container};
pub use package::{
    LANGUAGE, MODIFIED, PackageConfig, PackageLayout, build_package, build_package_with,
    chapter_href, chapter_id,
};
pub use printable::{PageSize, PrintConfig, build_printable, build_printable_with};

/// Filename stem used when a book has no title.
pub const FALLBACK_STEM: &str = "book";

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Kindle,
    Universal,
    Pdf,
}

/// The generator that produces a format's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    PackageManifest,
    Printable,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Kindle, Format::Universal, Format::Pdf];

    /// Dispatch table entry for this format.
    pub fn generator(self) -> Generator {
        match self {
            Format::Kindle => Generator::PackageManifest,
            Format::Universal => Generator::PackageManifest,
            Format::Pdf => Generator::Printable,
        }
    }

    /// Identifier accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Kindle => "kindle",
            Format::Universal => "universal",
            Format::Pdf => "pdf",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Format::Kindle => "Kindle E-Book (.EPUB)",
            Format::Universal => "Universal E-Book (.EPUB)",
            Format::Pdf => "Premium PDF (Print/Digital)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Format::Kindle => {
                "Text-focused with clean typography and high contrast, for Kindle readers."
            }
            Format::Universal => {
                "Fluid-layout interior with a linked table of contents, for all e-readers."
            }
            Format::Pdf => "A4 or US Letter with 0.5in margins, page break per chapter.",
        }
    }

    pub fn extension(self) -> &'static str {
        self.generator().extension()
    }
}

impl Generator {
    pub fn extension(self) -> &'static str {
        match self {
            Generator::PackageManifest => "epub",
            Generator::Printable => "html",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            Generator::PackageManifest => "application/epub+zip",
            Generator::Printable => "text/html",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A format identifier that is not `kindle`, `universal` or `pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown format '{}' (expected kindle, universal or pdf)",
            self.0
        )
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// A generated file, ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested filename, `{title}.{ext}`.
    pub filename: String,
    pub media_type: &'static str,
    pub format: Format,
    pub data: Vec<u8>,
}

impl Artifact {
    /// The payload as text, or `None` if it is not valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

/// Configuration for export.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub package: PackageConfig,
    pub print: PrintConfig,
}

/// Dispatches a book to the generator for a requested format.
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExportConfig,
    validate: bool,
}

impl Exporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: ExportConfig::default(),
            validate: true,
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Skip the export-readiness check. Used for drafts and previews.
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Export `book` in `format`.
    ///
    /// Fails with [`Error::Validation`](crate::Error::Validation) before any
    /// generator runs when the title, author or chapters are missing.
    pub fn export(&self, book: &BookModel, format: Format) -> Result<Artifact> {
        if self.validate
            && let Err(err) = book.validate()
        {
            debug!(%format, missing = ?err.missing, "export rejected");
            return Err(err.into());
        }

        let generator = format.generator();
        debug!(%format, ?generator, chapters = book.chapters.len(), "exporting");

        let data = match generator {
            Generator::PackageManifest => match self.config.package.layout {
                PackageLayout::Manifest => {
                    build_package_with(book, &self.config.package).into_bytes()
                }
                PackageLayout::Container => package_container(book, &self.config.package)?,
            },
            Generator::Printable => build_printable_with(book, &self.config.print).into_bytes(),
        };

        let artifact = Artifact {
            filename: artifact_filename(&book.title, format),
            media_type: generator.media_type(),
            format,
            data,
        };
        info!(
            filename = %artifact.filename,
            bytes = artifact.data.len(),
            "export complete"
        );
        Ok(artifact)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Export `book` in `format` with default settings.
pub fn export(book: &BookModel, format: Format) -> Result<Artifact> {
    Exporter::new().export(book, format)
}

/// Suggested filename for a book exported in `format`.
///
/// Path separators in the title are replaced so the name stays a single
/// path component.
pub fn artifact_filename(title: &str, format: Format) -> String {
    let stem = if title.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        title.replace(['/', '\\'], "_")
    };
    format!("{stem}.{}", format.extension())
}
