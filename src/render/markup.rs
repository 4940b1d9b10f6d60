//! Built-in EPUB 3 markup generation.

use crate::book::{NavEntry, PackageManifest};
use crate::error::Result;
use crate::render::Renderer;

/// The built-in renderer, producing EPUB 3 documents with an NCX fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpubRenderer;

impl Renderer for EpubRenderer {
    fn container(&self, opf_path: &str) -> Result<String> {
        Ok(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="{}" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#,
            escape_xml(opf_path)
        ))
    }

    fn package_document(&self, manifest: &PackageManifest) -> Result<String> {
        let nav_id = path_stem(&manifest.navigation_path);
        let ncx_id = path_stem(&manifest.fallback_navigation_path);

        let mut opf = String::new();
        opf.push_str(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="uid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
"#,
        );

        opf.push_str(&format!(
            "    <dc:identifier id=\"uid\">{}</dc:identifier>\n",
            escape_xml(&manifest.identifier)
        ));
        opf.push_str(&format!(
            "    <dc:title>{}</dc:title>\n",
            escape_xml(&manifest.title)
        ));
        opf.push_str(&format!(
            "    <dc:language>{}</dc:language>\n",
            escape_xml(&manifest.language)
        ));
        opf.push_str(&format!(
            "    <meta property=\"dcterms:modified\">{}</meta>\n",
            escape_xml(&manifest.modified)
        ));

        opf.push_str("  </metadata>\n  <manifest>\n");

        opf.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"application/xhtml+xml\" properties=\"nav\"/>\n",
            nav_id,
            escape_xml(&manifest.navigation_path)
        ));
        opf.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"application/x-dtbncx+xml\"/>\n",
            ncx_id,
            escape_xml(&manifest.fallback_navigation_path)
        ));
        for file in &manifest.files {
            opf.push_str(&format!(
                "    <item id=\"{}\" href=\"{}\" media-type=\"application/xhtml+xml\"/>\n",
                escape_xml(&file.id),
                escape_xml(&file.path)
            ));
        }

        opf.push_str(&format!("  </manifest>\n  <spine toc=\"{ncx_id}\">\n"));

        for file in &manifest.files {
            opf.push_str(&format!(
                "    <itemref idref=\"{}\"/>\n",
                escape_xml(&file.id)
            ));
        }

        opf.push_str("  </spine>\n</package>\n");
        Ok(opf)
    }

    fn content_document(&self, title: &str, paragraphs: &[String]) -> Result<String> {
        let mut doc = String::new();
        doc.push_str(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
  <head>
"#,
        );
        doc.push_str(&format!("    <title>{}</title>\n", escape_xml(title)));
        doc.push_str("  </head>\n  <body>\n");

        if !title.is_empty() {
            doc.push_str(&format!("    <h1>{}</h1>\n", escape_xml(title)));
        }
        for paragraph in paragraphs {
            doc.push_str(&format!("    <p>{}</p>\n", escape_xml(paragraph)));
        }

        doc.push_str("  </body>\n</html>\n");
        Ok(doc)
    }

    fn navigation(&self, title: &str, entries: &[NavEntry]) -> Result<String> {
        let mut nav = String::new();
        nav.push_str(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops">
  <head>
"#,
        );
        nav.push_str(&format!("    <title>{}</title>\n", escape_xml(title)));
        nav.push_str(
            r#"  </head>
  <body>
    <nav epub:type="toc">
      <ol>
"#,
        );

        for entry in entries {
            nav.push_str(&format!(
                "        <li><a href=\"{}\">{}</a></li>\n",
                escape_xml(&entry.path),
                escape_xml(&entry.title)
            ));
        }

        nav.push_str("      </ol>\n    </nav>\n  </body>\n</html>\n");
        Ok(nav)
    }

    fn fallback_navigation(
        &self,
        identifier: &str,
        title: &str,
        entries: &[NavEntry],
    ) -> Result<String> {
        let mut ncx = String::new();
        ncx.push_str(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
"#,
        );
        ncx.push_str(&format!(
            "    <meta name=\"dtb:uid\" content=\"{}\"/>\n",
            escape_xml(identifier)
        ));
        ncx.push_str(
            r#"    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle>
"#,
        );
        ncx.push_str(&format!("    <text>{}</text>\n", escape_xml(title)));
        ncx.push_str("  </docTitle>\n  <navMap>\n");

        for (index, entry) in entries.iter().enumerate() {
            let play_order = index + 1;
            ncx.push_str(&format!(
                "    <navPoint id=\"navpoint-{play_order}\" playOrder=\"{play_order}\">\n"
            ));
            ncx.push_str(&format!(
                "      <navLabel>\n        <text>{}</text>\n      </navLabel>\n",
                escape_xml(&entry.title)
            ));
            ncx.push_str(&format!(
                "      <content src=\"{}\"/>\n",
                escape_xml(&entry.path)
            ));
            ncx.push_str("    </navPoint>\n");
        }

        ncx.push_str("  </navMap>\n</ncx>\n");
        Ok(ncx)
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// The path minus its extension, for use as an XML id.
fn path_stem(path: &str) -> &str {
    match path.rfind('.') {
        Some(dot) => &path[..dot],
        None => path,
    }
}
