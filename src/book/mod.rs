use crate::error::{Field, ValidationError};

/// A titled section of a manuscript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Chapter {
    /// Heading label, trimmed.
    pub title: String,
    /// Body text. May contain line breaks, may be empty.
    pub content: String,
}

/// Structured representation of a manuscript.
///
/// A `BookModel` is a value: "editing" the title or author produces a new
/// model via the `with_*` methods instead of mutating shared state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct BookModel {
    pub title: String,
    pub author: String,
    /// Chapters in source order.
    pub chapters: Vec<Chapter>,
}

/// Size summary of a book, as shown alongside a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookStats {
    /// Characters in the manuscript the book was segmented from.
    pub characters: usize,
    pub chapters: usize,
}

impl Chapter {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The first `max_chars` characters of the body, for previews.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

impl BookModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from segmented chapters.
    pub fn from_chapters(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = chapters;
        self
    }

    /// Fields that must be filled in before this book can be exported.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(Field::Title);
        }
        if self.author.is_empty() {
            missing.push(Field::Author);
        }
        if self.chapters.is_empty() {
            missing.push(Field::Chapters);
        }
        missing
    }

    pub fn is_export_ready(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check export preconditions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Size summary for a book segmented from `source`.
    ///
    /// The character count covers the whole manuscript, including headings
    /// and any text before the first heading.
    pub fn stats(&self, source: &str) -> BookStats {
        BookStats {
            characters: source.chars().count(),
            chapters: self.chapters.len(),
        }
    }
}
