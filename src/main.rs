//! chapbook - plain text to EPUB converter

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use chapbook::util::decode_text;
use chapbook::{Converter, ParagraphMode};

#[derive(Parser)]
#[command(name = "chapbook")]
#[command(version, about = "Convert plain text manuscripts into EPUB ebooks", long_about = None)]
#[command(after_help = "EXAMPLES:
    chapbook book.txt \"My Book\" en-US book.epub
    chapbook -c 'CHAPTER (?<title>[IVXLC]+)' book.txt \"My Book\" en book.epub
    chapbook -t -i '[0-9]+' scan.txt \"My Book\" sv-SE book.epub")]
struct Cli {
    /// Input manuscript (plain text)
    #[arg(value_name = "INPUT")]
    input_file: String,

    /// Title of the book
    #[arg(value_name = "TITLE")]
    title: String,

    /// The language of the book, for example en-US or sv-SE
    #[arg(value_name = "LANGUAGE")]
    language: String,

    /// Output EPUB file
    #[arg(value_name = "OUTPUT")]
    output_file: String,

    /// Use indented lines as the start of paragraphs instead of a blank line
    #[arg(short = 't', long)]
    split_on_tabs: bool,

    /// A regex matching chapter heading lines; use the group "title" to capture the chapter name
    #[arg(short = 'c', long, value_name = "REGEX")]
    chapter_regex: Option<String>,

    /// A regex matching lines to be ignored and not included in the epub
    #[arg(short = 'i', long, value_name = "REGEX")]
    ignore_regex: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> chapbook::Result<()> {
    let mode = if cli.split_on_tabs {
        ParagraphMode::IndentedLine
    } else {
        ParagraphMode::BlankLine
    };

    // Patterns compile here, before the input file is touched.
    let mut converter = Converter::new(cli.title.as_str(), cli.language.as_str())
        .with_paragraph_mode(mode);
    if let Some(pattern) = &cli.chapter_regex {
        converter = converter.with_heading_pattern(pattern)?;
    }
    if let Some(pattern) = &cli.ignore_regex {
        converter = converter.with_ignore_pattern(pattern)?;
    }

    let bytes = fs::read(&cli.input_file)?;
    let text = decode_text(&bytes);
    converter.convert_to_file(&text, &cli.output_file)?;
    log::info!("wrote {}", cli.output_file);
    Ok(())
}
