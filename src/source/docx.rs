use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

/// Main document part of a WordprocessingML package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the raw text of a `.docx` file.
///
/// Paragraphs are followed by a blank line, `w:br`/`w:cr` become line
/// breaks and `w:tab` becomes a tab. All formatting is dropped.
pub(super) fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut file) => {
            file.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => {
            return Err(Error::Extraction(format!("missing {DOCUMENT_PART}")));
        }
        Err(e) => return Err(e.into()),
    }

    document_text(&xml)
}

/// Collect text runs from `word/document.xml`.
fn document_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut out = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            // `w:tab` also defines tab stops in `w:pPr`; only run content counts.
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" if in_run => out.push('\t'),
                b"br" | b"cr" if in_run => out.push('\n'),
                b"p" => out.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    out.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if in_text {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    if let Some(c) = resolve_entity(&entity) {
                        out.push(c);
                    }
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => out.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(out)
}

/// Resolve a predefined or numeric character reference (without `&`/`;`).
fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "apos" => Some('\''),
        "quot" => Some('"'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
