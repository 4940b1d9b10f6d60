//! Markup rendering for the packaged documents.
//!
//! The [`Renderer`] trait is the seam between document *derivation* and
//! document *wording*: everything upstream decides what a document must say
//! (titles, paragraphs, entries, manifest fields), and a renderer decides
//! how to say it. [`EpubRenderer`] is the built-in implementation producing
//! EPUB 3 markup; tests substitute stubs to observe exactly what each
//! document is asked to contain.

mod markup;

pub use markup::EpubRenderer;

use crate::book::{NavEntry, PackageManifest};
use crate::error::Result;

/// Renders each document identity packaged into the archive.
///
/// Every method returns `Result` so an implementation can refuse to render;
/// the conversion aborts without writing anything.
pub trait Renderer {
    /// The OCF container descriptor pointing at the package document.
    fn container(&self, opf_path: &str) -> Result<String>;

    /// The package document: metadata, file listing, and reading order.
    fn package_document(&self, manifest: &PackageManifest) -> Result<String>;

    /// A single chapter: its title (possibly empty) and paragraphs.
    fn content_document(&self, title: &str, paragraphs: &[String]) -> Result<String>;

    /// The primary navigation document.
    fn navigation(&self, title: &str, entries: &[NavEntry]) -> Result<String>;

    /// The fallback navigation document for older reading systems.
    fn fallback_navigation(
        &self,
        identifier: &str,
        title: &str,
        entries: &[NavEntry],
    ) -> Result<String>;
}
