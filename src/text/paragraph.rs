//! Paragraph recovery from flowed plain text.

use std::fmt;

/// How paragraph boundaries are marked in the manuscript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphMode {
    /// Paragraphs are separated by one or more blank lines. Line breaks
    /// inside a paragraph are soft wraps and become spaces.
    #[default]
    BlankLine,
    /// A new paragraph starts on a line indented with a tab or at least two
    /// spaces. Line breaks inside a paragraph are kept (runs collapsed).
    IndentedLine,
}

impl ParagraphMode {
    /// The canonical separator for this mode.
    ///
    /// Joining split paragraphs with this string and splitting again returns
    /// the same paragraphs.
    pub fn separator(self) -> &'static str {
        match self {
            ParagraphMode::BlankLine => "\n\n",
            ParagraphMode::IndentedLine => "\n\t",
        }
    }
}

impl fmt::Display for ParagraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParagraphMode::BlankLine => write!(f, "blank-line"),
            ParagraphMode::IndentedLine => write!(f, "indented-line"),
        }
    }
}

/// Split flowed text into trimmed, non-empty paragraphs.
///
/// In [`ParagraphMode::BlankLine`] the text is split on blank lines and each
/// paragraph's internal line breaks are replaced with spaces. In
/// [`ParagraphMode::IndentedLine`] the text is split where a line break is
/// followed by a tab or two or more spaces (the indentation is consumed) and
/// newline runs inside a paragraph collapse to a single newline.
///
/// Whitespace-only segments are dropped in both modes, so no returned
/// paragraph is empty.
///
/// # Examples
///
/// ```
/// use chapbook::text::{ParagraphMode, split_paragraphs};
///
/// let text = "It was a dark\nand stormy night.\n\nSuddenly, a shot rang out.";
/// assert_eq!(
///     split_paragraphs(text, ParagraphMode::BlankLine),
///     vec!["It was a dark and stormy night.", "Suddenly, a shot rang out."],
/// );
///
/// let text = "It was a dark\nand stormy night.\n\tSuddenly, a shot rang out.";
/// assert_eq!(
///     split_paragraphs(text, ParagraphMode::IndentedLine),
///     vec!["It was a dark\nand stormy night.", "Suddenly, a shot rang out."],
/// );
/// ```
pub fn split_paragraphs(text: &str, mode: ParagraphMode) -> Vec<String> {
    match mode {
        ParagraphMode::BlankLine => split_blank_line(text),
        ParagraphMode::IndentedLine => split_indented_line(text),
    }
}

fn split_blank_line(text: &str) -> Vec<String> {
    text.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| block.replace('\n', " ").trim().to_string())
        .collect()
}

fn split_indented_line(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr::memchr(b'\n', &bytes[pos..]) {
        let newline = pos + offset;
        let after = newline + 1;

        if bytes.get(after) == Some(&b'\t') {
            push_block(&mut paragraphs, &text[start..newline]);
            start = after + 1;
            pos = start;
        } else {
            // A run of two or more spaces also starts a paragraph; the
            // whole run is part of the separator.
            let mut end = after;
            while bytes.get(end) == Some(&b' ') {
                end += 1;
            }
            if end - after >= 2 {
                push_block(&mut paragraphs, &text[start..newline]);
                start = end;
                pos = start;
            } else {
                pos = newline + 1;
            }
        }
    }

    push_block(&mut paragraphs, &text[start..]);
    paragraphs
}

/// Collapse newline runs, trim, and keep the block if anything remains.
fn push_block(paragraphs: &mut Vec<String>, block: &str) {
    let mut collapsed = String::with_capacity(block.len());
    let mut prev_newline = false;
    for ch in block.chars() {
        if ch == '\n' {
            if !prev_newline {
                collapsed.push(ch);
            }
            prev_newline = true;
        } else {
            collapsed.push(ch);
            prev_newline = false;
        }
    }

    let trimmed = collapsed.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
}
