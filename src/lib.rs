//! # chapbook
//!
//! Convert plain-text manuscripts into EPUB ebooks.
//!
//! ## Features
//!
//! - Regex-driven chapter detection with a `title` capture group
//! - Blank-line or indented-line paragraph conventions
//! - EPUB 3 output with an NCX fallback for older reading systems
//! - Deterministic layout: the same manuscript always yields the same
//!   chapter paths and package identifier
//!
//! ## Quick Start
//!
//! ```no_run
//! use chapbook::Converter;
//!
//! let text = std::fs::read_to_string("manuscript.txt").unwrap();
//! Converter::new("My Book", "en-US")
//!     .with_heading_pattern(r"CHAPTER (?<title>[IVXLC]+)")
//!     .unwrap()
//!     .convert_to_file(&text, "my-book.epub")
//!     .unwrap();
//! ```
//!
//! ## How manuscripts are read
//!
//! The manuscript is split into lines. Lines matching the ignore pattern are
//! dropped; each line matching the heading pattern starts a new chapter named
//! by its `title` capture; everything else is chapter body. Bodies are then
//! split into paragraphs, either on blank lines (the default) or on indented
//! lines:
//!
//! ```
//! use chapbook::text::{ParagraphMode, split_paragraphs};
//!
//! let flowed = "A paragraph\nwrapped over lines.\n\nAnother paragraph.";
//! assert_eq!(
//!     split_paragraphs(flowed, ParagraphMode::BlankLine),
//!     vec!["A paragraph wrapped over lines.", "Another paragraph."],
//! );
//! ```

pub mod book;
mod convert;
pub mod error;
pub mod ocf;
pub mod render;
pub mod text;
pub mod util;

pub use convert::Converter;
pub use error::{Error, Result};
pub use render::{EpubRenderer, Renderer};
pub use text::ParagraphMode;
