//! EPUB package document generation.
//!
//! Produces the OPF package document describing a book: Dublin Core
//! metadata, a manifest with one navigation item plus one XHTML item per
//! chapter, and a spine giving the reading order.
//!
//! The package document references `toc.xhtml` and `chapter<N>.xhtml`
//! without containing them. Use [`PackageLayout::Container`] to have the
//! exporter write those resources into a ZIP container as well.

use std::fmt::Write;

use crate::book::BookModel;
use crate::util::escape_if;

/// Language tag written to every package.
pub const LANGUAGE: &str = "en";

/// Fixed `dcterms:modified` value, so output is reproducible.
pub const MODIFIED: &str = "2025-07-16T00:00:00Z";

/// What the package exporter emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageLayout {
    /// Only the package document, as text.
    #[default]
    Manifest,
    /// A ZIP container holding the package document and every resource it
    /// references.
    Container,
}

/// Configuration for package export.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    pub layout: PackageLayout,
    /// XML-escape title, author and chapter text. When false, values are
    /// interpolated verbatim and markup in them passes through.
    /// Container output is always escaped.
    pub escape_text: bool,
    /// Compression level for deflate (0-9, default 6). Container only.
    pub compression_level: Option<u32>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            layout: PackageLayout::Manifest,
            escape_text: true,
            compression_level: None,
        }
    }
}

/// Manifest id of the `n`th chapter (1-indexed).
pub fn chapter_id(n: usize) -> String {
    format!("chapter{n}")
}

/// Manifest href of the `n`th chapter (1-indexed).
pub fn chapter_href(n: usize) -> String {
    format!("chapter{n}.xhtml")
}

/// Build the package document for `book` with default settings.
///
/// # Example
///
/// ```
/// use folio::{BookModel, Chapter};
/// use folio::export::build_package;
///
/// let book = BookModel::from_chapters(vec![Chapter::new("Chapter 1", "Hi.")])
///     .with_title("T")
///     .with_author("A");
/// let opf = build_package(&book);
/// assert!(opf.contains(r#"<itemref idref="chapter1"/>"#));
/// ```
pub fn build_package(book: &BookModel) -> String {
    build_package_with(book, &PackageConfig::default())
}

/// Build the package document for `book`.
pub fn build_package_with(book: &BookModel, config: &PackageConfig) -> String {
    generate_opf(book, config.escape_text, None)
}

/// Generate content.opf. `identifier` adds a `dc:identifier` and the
/// matching `unique-identifier` attribute.
pub(crate) fn generate_opf(book: &BookModel, escape: bool, identifier: Option<&str>) -> String {
    let mut opf = String::new();

    opf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    match identifier {
        Some(_) => opf.push_str(
            "<package xmlns=\"http://www.idpf.org/2007/opf\" version=\"3.0\" unique-identifier=\"BookId\">\n",
        ),
        None => opf.push_str("<package xmlns=\"http://www.idpf.org/2007/opf\" version=\"3.0\">\n"),
    }
    opf.push_str("  <metadata xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\n");

    let _ = writeln!(opf, "    <dc:title>{}</dc:title>", escape_if(&book.title, escape));
    let _ = writeln!(opf, "    <dc:creator>{}</dc:creator>", escape_if(&book.author, escape));
    let _ = writeln!(opf, "    <dc:language>{LANGUAGE}</dc:language>");
    if let Some(id) = identifier {
        let _ = writeln!(opf, "    <dc:identifier id=\"BookId\">{id}</dc:identifier>");
    }
    let _ = writeln!(opf, "    <meta property=\"dcterms:modified\">{MODIFIED}</meta>");
    opf.push_str("  </metadata>\n");

    opf.push_str("  <manifest>\n");
    opf.push_str(
        "    <item id=\"toc\" href=\"toc.xhtml\" media-type=\"application/xhtml+xml\" properties=\"nav\"/>\n",
    );
    for n in 1..=book.chapters.len() {
        let _ = writeln!(
            opf,
            "    <item id=\"{}\" href=\"{}\" media-type=\"application/xhtml+xml\"/>",
            chapter_id(n),
            chapter_href(n)
        );
    }
    opf.push_str("  </manifest>\n");

    opf.push_str("  <spine>\n");
    for n in 1..=book.chapters.len() {
        let _ = writeln!(opf, "    <itemref idref=\"{}\"/>", chapter_id(n));
    }
    opf.push_str("  </spine>\n");

    opf.push_str("</package>\n");
    opf
}
