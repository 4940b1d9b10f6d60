//! Navigation document derivation.

use crate::book::ChapterFile;
use crate::error::Result;
use crate::ocf::{NAV_PATH, NCX_PATH};
use crate::render::Renderer;

/// One entry in the reading-order navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub path: String,
    pub title: String,
}

/// The pair of navigation documents packaged alongside the chapters.
#[derive(Debug, Clone)]
pub struct NavigationSet {
    pub primary_path: String,
    pub fallback_path: String,
    pub primary_markup: String,
    pub fallback_markup: String,
}

/// Derive navigation entries and render both navigation documents.
///
/// A single-chapter book gets one entry labeled with the book title rather
/// than the chapter's own heading, which for an unheaded manuscript would be
/// empty. Multi-chapter books list every chapter under its own title,
/// rendered verbatim even when empty.
pub fn build_navigation<R: Renderer>(
    renderer: &R,
    identifier: &str,
    title: &str,
    chapters: &[ChapterFile],
) -> Result<NavigationSet> {
    let entries = nav_entries(title, chapters);
    Ok(NavigationSet {
        primary_path: NAV_PATH.to_string(),
        fallback_path: NCX_PATH.to_string(),
        primary_markup: renderer.navigation(title, &entries)?,
        fallback_markup: renderer.fallback_navigation(identifier, title, &entries)?,
    })
}

fn nav_entries(title: &str, chapters: &[ChapterFile]) -> Vec<NavEntry> {
    if let [only] = chapters {
        return vec![NavEntry {
            path: only.path.clone(),
            title: title.to_string(),
        }];
    }
    chapters
        .iter()
        .map(|chapter| NavEntry {
            path: chapter.path.clone(),
            title: chapter.title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EpubRenderer;

    fn chapter_file(path: &str, title: &str) -> ChapterFile {
        ChapterFile {
            path: path.to_string(),
            title: title.to_string(),
            markup: String::new(),
        }
    }

    #[test]
    fn test_single_chapter_uses_book_title() {
        let chapters = [chapter_file("chapter-0001.xhtml", "")];
        let entries = nav_entries("My Book", &chapters);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "chapter-0001.xhtml");
        assert_eq!(entries[0].title, "My Book");
    }

    #[test]
    fn test_single_chapter_overrides_chapter_title() {
        // Even a titled chapter yields the book title when it stands alone.
        let chapters = [chapter_file("chapter-0001.xhtml", "I")];
        let entries = nav_entries("My Book", &chapters);
        assert_eq!(entries[0].title, "My Book");
    }

    #[test]
    fn test_multiple_chapters_use_their_own_titles() {
        let chapters = [
            chapter_file("chapter-0001.xhtml", ""),
            chapter_file("chapter-0002.xhtml", "Two"),
        ];
        let entries = nav_entries("My Book", &chapters);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[1].title, "Two");
    }

    #[test]
    fn test_build_navigation_paths_and_markup() {
        let chapters = [
            chapter_file("chapter-0001.xhtml", "One"),
            chapter_file("chapter-0002.xhtml", "Two"),
        ];
        let nav = build_navigation(&EpubRenderer, "uid-123", "My Book", &chapters)
            .expect("navigation renders");
        assert_eq!(nav.primary_path, "nav.xhtml");
        assert_eq!(nav.fallback_path, "toc.ncx");
        assert!(nav.primary_markup.contains("chapter-0002.xhtml"));
        assert!(nav.fallback_markup.contains("uid-123"));
    }
}
