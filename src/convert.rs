//! The conversion pipeline from manuscript text to EPUB archive.

use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use crate::book::{self, ChapterFile};
use crate::error::Result;
use crate::ocf;
use crate::render::{EpubRenderer, Renderer};
use crate::text::{HeadingPattern, IgnorePattern, ParagraphMode, segment_chapters};
use crate::util::normalize_newlines;

/// Converts plain-text manuscripts into EPUB archives.
///
/// A converter holds the book metadata and segmentation settings; the
/// `convert*` methods each run the whole pipeline over one manuscript.
/// Pattern-taking builder methods compile their regex up front, so a bad
/// pattern fails before any input is read.
///
/// # Example
///
/// ```
/// use chapbook::{Converter, ParagraphMode};
///
/// let epub = Converter::new("My Book", "en-US")
///     .with_paragraph_mode(ParagraphMode::BlankLine)
///     .with_heading_pattern(r"Chapter (?<title>\d+)")?
///     .convert("Chapter 1\nIt begins.\n\nIt continues.")?;
/// assert!(!epub.is_empty());
/// # Ok::<(), chapbook::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    title: String,
    language: String,
    mode: ParagraphMode,
    heading: Option<HeadingPattern>,
    ignore: Option<IgnorePattern>,
}

impl Converter {
    /// Create a converter for a book with the given title and language tag.
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            mode: ParagraphMode::default(),
            heading: None,
            ignore: None,
        }
    }

    /// Set how paragraph boundaries are recognized.
    pub fn with_paragraph_mode(mut self, mode: ParagraphMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the pattern matching chapter heading lines.
    ///
    /// The pattern must contain a `title` named capture group and is matched
    /// against whole lines.
    pub fn with_heading_pattern(mut self, pattern: &str) -> Result<Self> {
        self.heading = Some(HeadingPattern::new(pattern)?);
        Ok(self)
    }

    /// Set the pattern matching lines to drop from the manuscript.
    pub fn with_ignore_pattern(mut self, pattern: &str) -> Result<Self> {
        self.ignore = Some(IgnorePattern::new(pattern)?);
        Ok(self)
    }

    /// Convert manuscript text into EPUB archive bytes.
    pub fn convert(&self, text: &str) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.convert_to_writer(text, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Convert manuscript text, writing the archive to `writer`.
    pub fn convert_to_writer<W: Write + Seek>(&self, text: &str, writer: W) -> Result<()> {
        self.convert_with_renderer(text, &EpubRenderer, writer)
    }

    /// Convert manuscript text to a file on disk.
    ///
    /// The archive is assembled in memory and moved into place through a
    /// temporary sibling, so a failed run leaves no partial file at the
    /// destination.
    pub fn convert_to_file<P: AsRef<Path>>(&self, text: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.convert(text)?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Err(e) = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Convert manuscript text with a custom [`Renderer`].
    ///
    /// This is the substitution point for alternative markup: the pipeline
    /// runs unchanged and every document is worded by `renderer`.
    pub fn convert_with_renderer<R: Renderer, W: Write + Seek>(
        &self,
        text: &str,
        renderer: &R,
        writer: W,
    ) -> Result<()> {
        let text = normalize_newlines(text);
        let identifier = book::identifier(&self.title);

        let chapters = segment_chapters(&text, self.heading.as_ref(), self.ignore.as_ref());
        log::debug!(
            "segmented {} chapter(s), splitting paragraphs on {}",
            chapters.len(),
            self.mode
        );

        let files = chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| -> Result<ChapterFile> {
                let paragraphs = chapter.paragraphs(self.mode);
                Ok(ChapterFile {
                    path: book::chapter_path(index + 1),
                    title: chapter.title.clone(),
                    markup: renderer.content_document(&chapter.title, &paragraphs)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let navigation = book::build_navigation(renderer, &identifier, &self.title, &files)?;
        let manifest =
            book::build_manifest(&self.title, &self.language, &identifier, &navigation, &files);
        let package_document = renderer.package_document(&manifest)?;

        ocf::write_archive(writer, renderer, &package_document, &navigation, &files)?;
        log::debug!("packed {} chapter file(s)", files.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{NavEntry, PackageManifest};
    use crate::error::Error;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_invalid_heading_pattern_fails_before_conversion() {
        let err = Converter::new("T", "en")
            .with_heading_pattern(r"no title group here")
            .unwrap_err();
        assert!(matches!(err, Error::MissingTitleGroup(_)));

        let err = Converter::new("T", "en")
            .with_heading_pattern(r"(?<title>[")
            .unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_invalid_ignore_pattern_fails_before_conversion() {
        assert!(Converter::new("T", "en").with_ignore_pattern(r"(").is_err());
    }

    #[test]
    fn test_convert_produces_readable_archive() {
        let epub = Converter::new("My Book", "en")
            .convert("Some text.\n\nMore text.")
            .expect("conversion succeeds");

        let mut archive = ZipArchive::new(Cursor::new(epub)).expect("valid zip");
        assert_eq!(archive.len(), 6);
        let mut entry = archive.by_name("chapter-0001.xhtml").expect("chapter");
        let mut markup = String::new();
        entry.read_to_string(&mut markup).expect("readable");
        assert!(markup.contains("<p>Some text.</p>"));
        assert!(markup.contains("<p>More text.</p>"));
    }

    #[test]
    fn test_convert_normalizes_crlf_input() {
        let epub = Converter::new("My Book", "en")
            .with_heading_pattern(r"# (?<title>.+)")
            .unwrap()
            .convert("# One\r\nfirst\r\n# Two\r\nsecond")
            .expect("conversion succeeds");

        let mut archive = ZipArchive::new(Cursor::new(epub)).expect("valid zip");
        let mut entry = archive.by_name("chapter-0002.xhtml").expect("chapter two");
        let mut markup = String::new();
        entry.read_to_string(&mut markup).expect("readable");
        assert!(markup.contains("<h1>Two</h1>"));
        assert!(markup.contains("<p>second</p>"));
    }

    /// Renderer that refuses to render chapter bodies.
    struct SulkingRenderer;

    impl Renderer for SulkingRenderer {
        fn container(&self, _opf_path: &str) -> Result<String> {
            Ok(String::new())
        }

        fn package_document(&self, _manifest: &PackageManifest) -> Result<String> {
            Ok(String::new())
        }

        fn content_document(&self, _title: &str, _paragraphs: &[String]) -> Result<String> {
            Err(Error::Render("not today".to_string()))
        }

        fn navigation(&self, _title: &str, _entries: &[NavEntry]) -> Result<String> {
            Ok(String::new())
        }

        fn fallback_navigation(
            &self,
            _identifier: &str,
            _title: &str,
            _entries: &[NavEntry],
        ) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_renderer_failure_aborts_with_nothing_written() {
        let mut cursor = Cursor::new(Vec::new());
        let err = Converter::new("T", "en")
            .convert_with_renderer("text", &SulkingRenderer, &mut cursor)
            .unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert!(cursor.get_ref().is_empty());
    }
}
