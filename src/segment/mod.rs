//! Chapter segmentation.
//!
//! Splits an undifferentiated manuscript into titled chapters. The text is
//! tokenized into lines; a line opens a new chapter when one of the
//! configured [`HeadingPattern`]s matches at its start. The marker becomes
//! the chapter title and everything up to the next marker becomes its body.
//!
//! # Example
//!
//! ```
//! use folio::segment::segment;
//!
//! let chapters = segment("Chapter 1\nHello world.\nChapter 2\nGoodbye.");
//! assert_eq!(chapters.len(), 2);
//! assert_eq!(chapters[0].title, "Chapter 1");
//! assert_eq!(chapters[1].content, "Goodbye.");
//! ```

mod heading;

pub use heading::HeadingPattern;

use memchr::memchr2_iter;

use crate::book::Chapter;

/// Title used when no heading is found anywhere in the text.
pub const FALLBACK_TITLE: &str = "Chapter 1";

/// Title of the chapter holding text before the first heading, when kept.
pub const PREAMBLE_TITLE: &str = "Introduction";

/// What to do with text that appears before the first heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreamblePolicy {
    /// Drop it.
    #[default]
    Discard,
    /// Emit it as a leading chapter titled [`PREAMBLE_TITLE`] when non-blank.
    Keep,
}

/// Configuration for segmentation.
#[derive(Debug, Clone, Default)]
pub struct SegmenterConfig {
    pub preamble: PreamblePolicy,
}

/// Splits manuscripts into chapters.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    patterns: Vec<HeadingPattern>,
}

/// A heading occurrence, as byte offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    start: usize,
    end: usize,
}

impl Segmenter {
    /// Create a segmenter recognizing [`HeadingPattern::DEFAULT`].
    pub fn new() -> Self {
        Self {
            config: SegmenterConfig::default(),
            patterns: HeadingPattern::DEFAULT.to_vec(),
        }
    }

    pub fn with_config(mut self, config: SegmenterConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the set of recognized heading conventions.
    pub fn with_patterns(mut self, patterns: impl IntoIterator<Item = HeadingPattern>) -> Self {
        self.patterns = patterns.into_iter().collect();
        self
    }

    /// Split `text` into chapters in source order.
    ///
    /// Always returns at least one chapter.
    pub fn segment(&self, text: &str) -> Vec<Chapter> {
        let markers = self.markers(text);

        let Some(first) = markers.first() else {
            return vec![Chapter::new(FALLBACK_TITLE, text.trim())];
        };

        let mut chapters = Vec::with_capacity(markers.len() + 1);

        if self.config.preamble == PreamblePolicy::Keep {
            let preamble = text[..first.start].trim();
            if !preamble.is_empty() {
                chapters.push(Chapter::new(PREAMBLE_TITLE, preamble));
            }
        }

        for (i, marker) in markers.iter().enumerate() {
            let body_end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            chapters.push(Chapter::new(
                text[marker.start..marker.end].trim(),
                text[marker.end..body_end].trim(),
            ));
        }

        chapters
    }

    fn markers(&self, text: &str) -> Vec<Marker> {
        line_starts(text)
            .filter_map(|start| {
                let line = &text[start..];
                self.patterns
                    .iter()
                    .find_map(|p| p.match_prefix(line))
                    .map(|len| Marker {
                        start,
                        end: start + len,
                    })
            })
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `text` into chapters using the default heading conventions.
pub fn segment(text: &str) -> Vec<Chapter> {
    Segmenter::new().segment(text)
}

/// Byte offsets at which lines begin.
///
/// `\n`, `\r\n` and a lone `\r` each end a line.
fn line_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = text.as_bytes();
    let breaks = memchr2_iter(b'\n', b'\r', bytes)
        .filter(move |&i| !(bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n')))
        .map(|i| i + 1);
    std::iter::once(0)
        .chain(breaks)
        .filter(move |&start| start < bytes.len())
}
