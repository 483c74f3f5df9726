//! Print-styled HTML generation.
//!
//! The printable document is a single HTML page meant for "print to PDF" or
//! a downstream HTML-to-PDF converter. Page geometry and fonts are embedded
//! as CSS. Every chapter section carries a page break, the first one
//! included.

use std::fmt::Write;

use crate::book::BookModel;
use crate::util::escape_if;

/// Paper size written into the `@page` rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    A4,
    /// US Letter, 8.5x11in.
    Letter,
}

impl PageSize {
    fn css(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "letter",
        }
    }
}

/// Configuration for printable export.
#[derive(Debug, Clone)]
pub struct PrintConfig {
    pub page_size: PageSize,
    /// HTML-escape title, author and chapter text. When false, markup in
    /// the manuscript is emitted verbatim.
    pub escape_text: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            escape_text: true,
        }
    }
}

const TEXT_COLOR: &str = "#2d2d2d";
const TEXT_LIGHT_COLOR: &str = "#5a5a5a";
const PRIMARY_COLOR: &str = "#7068af";

/// Build the printable document for `book` with default settings.
pub fn build_printable(book: &BookModel) -> String {
    build_printable_with(book, &PrintConfig::default())
}

/// Build the printable document for `book`.
pub fn build_printable_with(book: &BookModel, config: &PrintConfig) -> String {
    let escape = config.escape_text;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n    <style>\n");
    let _ = writeln!(
        html,
        "        @page {{ size: {}; margin: 0.5in; }}",
        config.page_size.css()
    );
    let _ = writeln!(
        html,
        "        body {{ font-family: 'Times New Roman', serif; color: {TEXT_COLOR}; }}"
    );
    let _ = writeln!(
        html,
        "        .title {{ font-size: 24px; text-align: center; margin-bottom: 20px; color: {PRIMARY_COLOR}; }}"
    );
    let _ = writeln!(
        html,
        "        .author {{ font-size: 18px; text-align: center; margin-bottom: 30px; color: {TEXT_LIGHT_COLOR}; }}"
    );
    let _ = writeln!(
        html,
        "        .chapter-title {{ font-size: 18px; font-weight: bold; margin-top: 30px; color: {PRIMARY_COLOR}; }}"
    );
    html.push_str("        .chapter-content { line-height: 1.6; margin-bottom: 20px; }\n");
    html.push_str("        .page-break { page-break-before: always; }\n");
    html.push_str("    </style>\n</head>\n<body>\n");

    let _ = writeln!(
        html,
        "    <h1 class=\"title\">{}</h1>",
        escape_if(&book.title, escape)
    );
    let _ = writeln!(
        html,
        "    <p class=\"author\">by {}</p>",
        escape_if(&book.author, escape)
    );

    for chapter in &book.chapters {
        html.push_str("    <div class=\"page-break\">\n");
        let _ = writeln!(
            html,
            "        <h2 class=\"chapter-title\">{}</h2>",
            escape_if(&chapter.title, escape)
        );
        let _ = writeln!(
            html,
            "        <div class=\"chapter-content\">{}</div>",
            line_breaks_to_br(&escape_if(&chapter.content, escape))
        );
        html.push_str("    </div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Replace each line break (`\r\n`, `\n`, or a lone `\r`) with `<br>`.
fn line_breaks_to_br(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str("<br>");
            }
            '\n' => out.push_str("<br>"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Chapter;

    fn book() -> BookModel {
        BookModel::from_chapters(vec![
            Chapter::new("Chapter 1", "Hello\nworld."),
            Chapter::new("Chapter 2", "Goodbye."),
        ])
        .with_title("T")
        .with_author("A")
    }

    #[test]
    fn test_line_breaks_to_br() {
        assert_eq!(line_breaks_to_br("a\nb"), "a<br>b");
        assert_eq!(line_breaks_to_br("a\r\nb\rc"), "a<br>b<br>c");
        assert_eq!(line_breaks_to_br("a\n\nb"), "a<br><br>b");
        assert_eq!(line_breaks_to_br("plain"), "plain");
    }

    #[test]
    fn test_title_and_author_blocks() {
        let html = build_printable(&book());
        assert!(html.contains("<h1 class=\"title\">T</h1>"));
        assert!(html.contains("<p class=\"author\">by A</p>"));
    }

    #[test]
    fn test_every_chapter_gets_page_break() {
        let html = build_printable(&book());
        assert_eq!(html.matches("<div class=\"page-break\">").count(), 2);

        let first_break = html.find("<div class=\"page-break\">").unwrap();
        let first_heading = html.find("<h2 class=\"chapter-title\">Chapter 1</h2>").unwrap();
        assert!(first_break < first_heading);
    }

    #[test]
    fn test_content_line_breaks() {
        let html = build_printable(&book());
        assert!(html.contains("<div class=\"chapter-content\">Hello<br>world.</div>"));
    }

    #[test]
    fn test_page_geometry() {
        let html = build_printable(&book());
        assert!(html.contains("@page { size: A4; margin: 0.5in; }"));
        assert!(html.contains("font-family: 'Times New Roman', serif"));

        let letter = build_printable_with(
            &book(),
            &PrintConfig {
                page_size: PageSize::Letter,
                ..Default::default()
            },
        );
        assert!(letter.contains("@page { size: letter; margin: 0.5in; }"));
    }

    #[test]
    fn test_markup_escaped_by_default() {
        let book = BookModel::from_chapters(vec![Chapter::new("1.", "<script>x</script>\nnext")])
            .with_title("A & B")
            .with_author("C");

        let html = build_printable(&book);
        assert!(html.contains("<h1 class=\"title\">A &amp; B</h1>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;<br>next"));
        assert!(!html.contains("<script>"));

        let raw = build_printable_with(
            &book,
            &PrintConfig {
                escape_text: false,
                ..Default::default()
            },
        );
        assert!(raw.contains("<script>x</script><br>next"));
    }
}
