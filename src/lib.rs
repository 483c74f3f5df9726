//! # folio
//!
//! Compile plain-text manuscripts into ebooks.
//!
//! ## Pipeline
//!
//! 1. Extract text from the uploaded document ([`read_manuscript`],
//!    [`source::extract_text`]), or bring your own string.
//! 2. Split it into chapters with [`segment`].
//! 3. Wrap the chapters in a [`BookModel`] with a title and author.
//! 4. [`export`] it as a [`Format`]: an EPUB package document for `kindle`
//!    and `universal`, print-ready HTML for `pdf`.
//!
//! ## Quick Start
//!
//! ```
//! use folio::{BookModel, Format, export, segment};
//!
//! let text = "Chapter 1\nHello world.\nChapter 2\nGoodbye.";
//! let book = BookModel::from_chapters(segment(text))
//!     .with_title("T")
//!     .with_author("A");
//!
//! let artifact = export(&book, Format::Pdf)?;
//! assert_eq!(artifact.filename, "T.html");
//! # Ok::<(), folio::Error>(())
//! ```

pub mod book;
pub mod error;
pub mod export;
pub mod segment;
pub mod source;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use book::{BookModel, BookStats, Chapter};
pub use error::{Error, Field, Result, ValidationError};
pub use export::{Artifact, Exporter, Format, export};
pub use segment::segment;
pub use source::read_manuscript;
