//! Manuscript analysis: paragraph splitting and chapter segmentation.
//!
//! The functions here make every *decision* about document structure. They
//! work on plain `\n`-separated text and know nothing about markup or
//! archives, which keeps them trivially testable.

mod paragraph;
mod segment;

pub use paragraph::{ParagraphMode, split_paragraphs};
pub use segment::{HeadingPattern, IgnorePattern, segment_chapters};
