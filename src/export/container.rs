//! ZIP container packaging.
//!
//! Wraps the package document together with the navigation document and
//! one XHTML file per chapter, laid out the way EPUB readers expect:
//!
//! ```text
//! mimetype                 (stored, first entry)
//! META-INF/container.xml
//! OEBPS/content.opf
//! OEBPS/toc.xhtml
//! OEBPS/chapter1.xhtml ... chapterN.xhtml
//! ```

use std::fmt::Write as _;
use std::io::{Cursor, Write};

use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::package::{PackageConfig, chapter_href, generate_opf};
use crate::book::{BookModel, Chapter};
use crate::error::Result;
use crate::util::escape_xml;

/// Container.xml template.
const CONTAINER_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;

/// Write `book` as a ZIP container and return its bytes.
pub fn package_container(book: &BookModel, config: &PackageConfig) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let compression_level = config.compression_level.unwrap_or(6);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(compression_level as i64));

    // mimetype must be first and uncompressed
    zip.start_file("mimetype", stored)?;
    zip.write_all(b"application/epub+zip")?;

    zip.start_file("META-INF/container.xml", deflated)?;
    zip.write_all(CONTAINER_XML)?;

    let identifier = book_identifier(book);
    let opf = generate_opf(book, true, Some(&identifier));
    zip.start_file("OEBPS/content.opf", deflated)?;
    zip.write_all(opf.as_bytes())?;

    zip.start_file("OEBPS/toc.xhtml", deflated)?;
    zip.write_all(generate_nav(book).as_bytes())?;

    for (i, chapter) in book.chapters.iter().enumerate() {
        let path = format!("OEBPS/{}", chapter_href(i + 1));
        zip.start_file(path, deflated)?;
        zip.write_all(generate_chapter(chapter).as_bytes())?;
    }

    let data = zip.finish()?.into_inner();
    debug!(
        chapters = book.chapters.len(),
        bytes = data.len(),
        "wrote container"
    );
    Ok(data)
}

/// Stable `urn:uuid` derived from title and author.
///
/// The same book always gets the same identifier, so repeated exports are
/// byte-identical.
pub fn book_identifier(book: &BookModel) -> String {
    let mut hasher = sha1_smol::Sha1::new();
    hasher.update(book.title.as_bytes());
    hasher.update(&[0]);
    hasher.update(book.author.as_bytes());
    let digest = hasher.digest().bytes();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    // Name-based (version 5) layout
    bytes[6] = (bytes[6] & 0x0f) | 0x50;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!(
        "urn:uuid:{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

fn xhtml_head(out: &mut String, title: &str) {
    out.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" xml:lang="en">
<head>
  <meta charset="UTF-8"/>
  <title>"#,
    );
    out.push_str(&escape_xml(title));
    out.push_str("</title>\n</head>\n");
}

/// Generate the EPUB 3 navigation document.
fn generate_nav(book: &BookModel) -> String {
    let mut nav = String::new();
    xhtml_head(&mut nav, &book.title);
    nav.push_str("<body>\n  <nav epub:type=\"toc\" id=\"toc\">\n    <h1>Contents</h1>\n    <ol>\n");
    for (i, chapter) in book.chapters.iter().enumerate() {
        let _ = writeln!(
            nav,
            "      <li><a href=\"{}\">{}</a></li>",
            chapter_href(i + 1),
            escape_xml(&chapter.title)
        );
    }
    nav.push_str("    </ol>\n  </nav>\n</body>\n</html>\n");
    nav
}

/// Generate a chapter document. Each non-blank body line becomes a paragraph.
fn generate_chapter(chapter: &Chapter) -> String {
    let mut doc = String::new();
    xhtml_head(&mut doc, &chapter.title);
    doc.push_str("<body>\n");
    let _ = writeln!(doc, "  <h1>{}</h1>", escape_xml(&chapter.title));
    for line in chapter.content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let _ = writeln!(doc, "  <p>{}</p>", escape_xml(line));
    }
    doc.push_str("</body>\n</html>\n");
    doc
}
