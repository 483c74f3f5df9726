//! Manuscript source tests.
//!
//! Reads `.txt` and `.docx` manuscripts from disk and feeds them through
//! segmentation.

use std::io::{Cursor, Write};

use folio::source::{SourceKind, extract_text};
use folio::{Error, read_manuscript, segment};
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Build a minimal `.docx` with one paragraph per entry.
fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for p in paragraphs {
        body.push_str("<w:p><w:r><w:t xml:space=\"preserve\">");
        body.push_str(p);
        body.push_str("</w:t></w:r></w:p>");
    }
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
<w:body>{body}</w:body></w:document>"
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(b"<?xml version=\"1.0\"?><Types/>").unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}

#[test]
fn test_read_plain_text_manuscript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.txt");
    std::fs::write(&path, "Chapter 1\nHello.\nChapter 2\nBye.").unwrap();

    let text = read_manuscript(&path).unwrap();
    let chapters = segment(&text);
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[1].content, "Bye.");
}

#[test]
fn test_read_docx_manuscript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.docx");
    std::fs::write(
        &path,
        docx_bytes(&["Chapter 1", "It began.", "Chapter 2", "It ended &amp; stopped."]),
    )
    .unwrap();

    let text = read_manuscript(&path).unwrap();
    let chapters = segment(&text);
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].title, "Chapter 1");
    assert_eq!(chapters[0].content, "It began.");
    assert_eq!(chapters[1].content, "It ended & stopped.");
}

#[test]
fn test_sniffs_files_without_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("upload");
    std::fs::write(&path, docx_bytes(&["Part 1", "Hi."])).unwrap();

    let text = read_manuscript(&path).unwrap();
    assert!(text.starts_with("Part 1\n\nHi."));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scan.pdf");
    std::fs::write(&path, b"%PDF-1.7").unwrap();

    assert!(matches!(read_manuscript(&path), Err(Error::Extraction(_))));
}

#[test]
fn test_docx_without_document_part() {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("other.xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"<x/>").unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    match extract_text(&bytes, SourceKind::Docx) {
        Err(Error::Extraction(msg)) => assert!(msg.contains("word/document.xml")),
        other => panic!("expected extraction error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = read_manuscript(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}
