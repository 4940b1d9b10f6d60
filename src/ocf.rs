//! OCF (zip) archive packing.

use std::io::{Seek, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::book::{ChapterFile, NavigationSet};
use crate::error::Result;
use crate::render::Renderer;

/// Archive path of the media type declaration.
pub const MIMETYPE_PATH: &str = "mimetype";
/// Contents of the `mimetype` entry.
pub const MIMETYPE: &str = "application/epub+zip";
/// Archive path of the container descriptor.
pub const CONTAINER_PATH: &str = "META-INF/container.xml";
/// Archive path of the package document.
pub const OPF_PATH: &str = "content.opf";
/// Archive path of the primary navigation document.
pub const NAV_PATH: &str = "nav.xhtml";
/// Archive path of the fallback navigation document.
pub const NCX_PATH: &str = "toc.ncx";

/// Pack the rendered documents into an OCF zip archive.
///
/// Entry order is fixed: `mimetype` first and uncompressed, then the
/// container descriptor, the package document, both navigation documents,
/// and the chapters in reading order. Entry paths use forward slashes and
/// the archive stays within plain (non-ZIP64) zip limits.
pub fn write_archive<W: Write + Seek, R: Renderer>(
    writer: W,
    renderer: &R,
    package_document: &str,
    navigation: &NavigationSet,
    chapters: &[ChapterFile],
) -> Result<()> {
    let mut zip = ZipWriter::new(writer);

    let options_stored =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let options_deflate =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    // mimetype must be first and uncompressed
    zip.start_file(MIMETYPE_PATH, options_stored)?;
    zip.write_all(MIMETYPE.as_bytes())?;

    let container = renderer.container(OPF_PATH)?;
    zip.start_file(CONTAINER_PATH, options_deflate)?;
    zip.write_all(container.as_bytes())?;

    zip.start_file(OPF_PATH, options_deflate)?;
    zip.write_all(package_document.as_bytes())?;

    zip.start_file(navigation.primary_path.as_str(), options_deflate)?;
    zip.write_all(navigation.primary_markup.as_bytes())?;

    zip.start_file(navigation.fallback_path.as_str(), options_deflate)?;
    zip.write_all(navigation.fallback_markup.as_bytes())?;

    for chapter in chapters {
        zip.start_file(chapter.path.as_str(), options_deflate)?;
        zip.write_all(chapter.markup.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}
