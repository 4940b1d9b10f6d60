//! Document model for a converted book.

mod manifest;
mod navigation;

pub use manifest::{ManifestEntry, PackageManifest, build_manifest};
pub use navigation::{NavEntry, NavigationSet, build_navigation};

use crate::text::{ParagraphMode, split_paragraphs};

/// A chapter recovered from the manuscript: its heading title and the raw
/// lines of its body.
///
/// The title is empty for text that precedes the first heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub body: Vec<String>,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }

    /// True when the body holds no visible content.
    pub fn is_blank(&self) -> bool {
        self.body.iter().all(|line| line.trim().is_empty())
    }

    /// Split the body lines into display paragraphs.
    pub fn paragraphs(&self, mode: ParagraphMode) -> Vec<String> {
        split_paragraphs(&self.body.join("\n"), mode)
    }
}

/// A chapter rendered to markup, with its archive path assigned.
#[derive(Debug, Clone)]
pub struct ChapterFile {
    pub path: String,
    pub title: String,
    pub markup: String,
}

/// Archive path for a chapter by 1-based ordinal: `chapter-0001.xhtml`,
/// `chapter-0002.xhtml`, ...
///
/// Ordinals are assigned in discovery order once segmentation is complete,
/// so the paths are contiguous and deterministic for a given manuscript.
pub fn chapter_path(ordinal: usize) -> String {
    format!("chapter-{ordinal:04}.xhtml")
}

/// Package identifier derived from the book title.
///
/// The identifier is the lowercase hex MD5 digest of the title, so
/// regenerating a book with the same title yields the same identifier and
/// reading systems treat it as the same publication.
pub fn identifier(title: &str) -> String {
    format!("{:x}", md5::compute(title))
}
