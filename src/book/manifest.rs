//! Package manifest assembly.

use chrono::Utc;

use crate::book::{ChapterFile, NavigationSet};

/// Everything the package document needs to know about the book.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    pub title: String,
    pub language: String,
    pub identifier: String,
    /// Last-modified instant in UTC, `YYYY-MM-DDThh:mm:ssZ`.
    pub modified: String,
    pub navigation_path: String,
    pub fallback_navigation_path: String,
    /// Chapter files in reading order.
    pub files: Vec<ManifestEntry>,
}

/// A content file reference: XML id plus archive path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    pub path: String,
}

/// Assemble the manifest for a converted book.
///
/// The modification timestamp is taken from the wall clock at call time;
/// everything else is a pure function of the inputs. The language tag is
/// passed through as given.
pub fn build_manifest(
    title: &str,
    language: &str,
    identifier: &str,
    navigation: &NavigationSet,
    chapters: &[ChapterFile],
) -> PackageManifest {
    let files = chapters
        .iter()
        .map(|chapter| ManifestEntry {
            id: file_id(&chapter.path),
            path: chapter.path.clone(),
        })
        .collect();

    PackageManifest {
        title: title.to_string(),
        language: language.to_string(),
        identifier: identifier.to_string(),
        modified: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        navigation_path: navigation.primary_path.clone(),
        fallback_navigation_path: navigation.fallback_path.clone(),
        files,
    }
}

/// Manifest id for an archive path: the path minus its extension.
fn file_id(path: &str) -> String {
    match path.rfind('.') {
        Some(dot) => path[..dot].to_string(),
        None => path.to_string(),
    }
}
