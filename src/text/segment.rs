//! Regex-driven chapter segmentation.
//!
//! Heading and ignore patterns match whole lines, like a line-oriented grep
//! with both ends anchored. A heading pattern must expose the chapter name
//! through a `title` named capture group; that requirement is checked when
//! the pattern is built, before any text is read.

use regex::Regex;

use crate::book::Chapter;
use crate::error::{Error, Result};

/// A validated pattern matching chapter heading lines.
///
/// The pattern is anchored to the full line and must contain a named capture
/// group `title`; construction fails otherwise.
///
/// # Examples
///
/// ```
/// use chapbook::text::HeadingPattern;
///
/// let heading = HeadingPattern::new(r"CHAPTER (?<title>[IVXLC]+)").unwrap();
/// assert_eq!(heading.title_of("CHAPTER XII"), Some("XII".to_string()));
/// assert_eq!(heading.title_of("see CHAPTER XII"), None);
///
/// assert!(HeadingPattern::new(r"CHAPTER \d+").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    regex: Regex,
}

impl HeadingPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = full_line(pattern)?;
        if !regex.capture_names().flatten().any(|name| name == "title") {
            return Err(Error::MissingTitleGroup(pattern.to_string()));
        }
        Ok(Self { regex })
    }

    /// The captured title if the whole line is a heading, `None` otherwise.
    ///
    /// A `title` group that matched nothing (an empty alternative, say)
    /// yields an empty title rather than a miss.
    pub fn title_of(&self, line: &str) -> Option<String> {
        self.regex.captures(line).map(|caps| {
            caps.name("title")
                .map(|m| m.as_str())
                .unwrap_or_default()
                .to_string()
        })
    }
}

/// A pattern matching lines that are dropped from the manuscript entirely.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    regex: Regex,
}

impl IgnorePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: full_line(pattern)?,
        })
    }

    /// True when the whole line matches.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Compile a pattern that must match a complete line.
///
/// The raw pattern is compiled first so errors cite the user's input rather
/// than the anchored wrapper.
fn full_line(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)?;
    Ok(Regex::new(&format!(r"\A(?:{pattern})\z"))?)
}

/// Split manuscript text into chapters.
///
/// Lines matching `ignore` are dropped before anything else. Each remaining
/// line either matches `heading` and starts a new chapter named by the
/// captured title, or is appended to the chapter under accumulation. Text
/// before the first heading accumulates in an untitled chapter.
///
/// When a heading arrives while the current chapter holds no visible
/// content, that chapter is discarded: a manuscript that opens with a
/// heading produces no empty preamble chapter, and back-to-back headings
/// keep only the last one.
///
/// Without a heading pattern the whole text is one untitled chapter.
pub fn segment_chapters(
    text: &str,
    heading: Option<&HeadingPattern>,
    ignore: Option<&IgnorePattern>,
) -> Vec<Chapter> {
    let mut chapters = vec![Chapter::new("")];

    for line in text.split('\n') {
        if ignore.is_some_and(|pattern| pattern.is_match(line)) {
            continue;
        }
        match heading.and_then(|pattern| pattern.title_of(line)) {
            Some(title) => {
                if chapters.last().is_some_and(Chapter::is_blank) {
                    chapters.pop();
                }
                chapters.push(Chapter::new(title));
            }
            None => {
                if let Some(current) = chapters.last_mut() {
                    current.body.push(line.to_string());
                }
            }
        }
    }

    chapters
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn heading(pattern: &str) -> HeadingPattern {
        HeadingPattern::new(pattern).expect("valid heading pattern")
    }

    #[test]
    fn test_heading_pattern_requires_title_group() {
        let err = HeadingPattern::new(r"Chapter \d+").unwrap_err();
        assert!(matches!(err, Error::MissingTitleGroup(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_heading_pattern_rejects_malformed_regex() {
        let err = HeadingPattern::new(r"Chapter (?<title>[").unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_ignore_pattern_rejects_malformed_regex() {
        assert!(IgnorePattern::new(r"(").is_err());
    }

    #[test]
    fn test_heading_matches_whole_line_only() {
        let pattern = heading(r"Chapter (?<title>\d+)");
        assert_eq!(pattern.title_of("Chapter 12"), Some("12".to_string()));
        assert_eq!(pattern.title_of("Chapter 12 begins"), None);
        assert_eq!(pattern.title_of("see Chapter 12"), None);
    }

    #[test]
    fn test_heading_alternation_still_matches_whole_line() {
        // Anchoring must not commit to the shorter alternative.
        let pattern = heading(r"(?<title>I|II|III)");
        assert_eq!(pattern.title_of("II"), Some("II".to_string()));
        assert_eq!(pattern.title_of("III"), Some("III".to_string()));
    }

    #[test]
    fn test_heading_title_group_may_be_empty() {
        let pattern = heading(r"\* (?<title>.*)");
        assert_eq!(pattern.title_of("* "), Some(String::new()));
    }

    #[test]
    fn test_heading_title_group_outside_match_yields_empty() {
        let pattern = heading(r"(?:(?<title>PART [A-Z]+)|BREAK)");
        assert_eq!(pattern.title_of("PART ONE"), Some("PART ONE".to_string()));
        assert_eq!(pattern.title_of("BREAK"), Some(String::new()));
    }

    #[test]
    fn test_ignore_matches_whole_line_only() {
        let pattern = IgnorePattern::new(r"\d+").expect("valid ignore pattern");
        assert!(pattern.is_match("42"));
        assert!(!pattern.is_match("page 42"));
    }

    #[test]
    fn test_no_heading_pattern_yields_single_untitled_chapter() {
        let chapters = segment_chapters("line one\nline two", None, None);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "");
        assert_eq!(chapters[0].body, vec!["line one", "line two"]);
    }

    #[test]
    fn test_segments_into_titled_chapters() {
        let text = "# One\nfirst body\n# Two\nsecond body\nmore";
        let chapters = segment_chapters(text, Some(&heading(r"# (?<title>.+)")), None);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "One");
        assert_eq!(chapters[0].body, vec!["first body"]);
        assert_eq!(chapters[1].title, "Two");
        assert_eq!(chapters[1].body, vec!["second body", "more"]);
    }

    #[test]
    fn test_blank_preamble_is_discarded() {
        let text = "\n  \n# One\nbody";
        let chapters = segment_chapters(text, Some(&heading(r"# (?<title>.+)")), None);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "One");
    }

    #[test]
    fn test_preamble_with_content_is_kept_untitled() {
        let text = "a foreword\n# One\nbody";
        let chapters = segment_chapters(text, Some(&heading(r"# (?<title>.+)")), None);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "");
        assert_eq!(chapters[0].body, vec!["a foreword"]);
        assert_eq!(chapters[1].title, "One");
    }

    #[test]
    fn test_consecutive_headings_keep_only_the_last() {
        let text = "# One\n# Two\nbody";
        let chapters = segment_chapters(text, Some(&heading(r"# (?<title>.+)")), None);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Two");
        assert_eq!(chapters[0].body, vec!["body"]);
    }

    #[test]
    fn test_trailing_heading_keeps_empty_chapter() {
        let text = "# One\nbody\n# Two";
        let chapters = segment_chapters(text, Some(&heading(r"# (?<title>.+)")), None);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].title, "Two");
        assert!(chapters[1].body.is_empty());
    }

    #[test]
    fn test_ignored_lines_are_dropped_before_segmentation() {
        let text = "# One\nbody\nPage 3\nmore";
        let ignore = IgnorePattern::new(r"Page \d+").expect("valid ignore pattern");
        let chapters = segment_chapters(text, Some(&heading(r"# (?<title>.+)")), Some(&ignore));
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].body, vec!["body", "more"]);
    }

    #[test]
    fn test_ignored_heading_does_not_start_a_chapter() {
        let text = "body\n# skip me\nmore";
        let ignore = IgnorePattern::new(r"# skip.*").expect("valid ignore pattern");
        let chapters = segment_chapters(text, Some(&heading(r"# (?<title>.+)")), Some(&ignore));
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].body, vec!["body", "more"]);
    }

    proptest! {
        /// Every non-ignored input line survives segmentation, either as a
        /// chapter title or as a body line, in input order.
        #[test]
        fn prop_headed_groups_reconstruct(
            groups in prop::collection::vec(
                ("[A-Za-z][a-z ]{0,11}", prop::collection::vec("[a-z]{1,12}", 1..4)),
                1..6,
            )
        ) {
            let pattern = heading(r"# (?<title>.+)");
            let mut text = String::new();
            for (title, lines) in &groups {
                text.push_str("# ");
                text.push_str(title);
                text.push('\n');
                text.push_str(&lines.join("\n"));
                text.push('\n');
            }
            let text = text.trim_end_matches('\n');

            let chapters = segment_chapters(text, Some(&pattern), None);
            prop_assert_eq!(chapters.len(), groups.len());
            for (chapter, (title, lines)) in chapters.iter().zip(&groups) {
                prop_assert_eq!(&chapter.title, title);
                prop_assert_eq!(&chapter.body, lines);
            }
        }

        /// Chapter bodies concatenated in order reproduce the non-heading
        /// input lines exactly. Content lines are never blank, so no
        /// chapter is discarded with lines still in it.
        #[test]
        fn prop_body_lines_cover_input(
            lines in prop::collection::vec(
                prop_oneof![
                    Just("# Heading".to_string()),
                    "[a-z][a-z ]{0,11}",
                ],
                0..20,
            )
        ) {
            let pattern = heading(r"# (?<title>.+)");
            let text = lines.join("\n");
            let chapters = segment_chapters(&text, Some(&pattern), None);

            // Compare against the line set the segmenter actually sees:
            // splitting "" yields one empty line, not zero lines.
            let expected: Vec<&str> = text
                .split('\n')
                .filter(|line| pattern.title_of(line).is_none())
                .collect();
            let collected: Vec<&str> = chapters
                .iter()
                .flat_map(|c| c.body.iter().map(String::as_str))
                .collect();
            prop_assert_eq!(collected, expected);
        }
    }
}
