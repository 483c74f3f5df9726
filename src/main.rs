//! folio - compile a manuscript into an ebook

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::export::{ExportConfig, Exporter, PackageConfig, PackageLayout, PageSize, PrintConfig};
use folio::segment::{PreamblePolicy, Segmenter, SegmenterConfig};
use folio::{BookModel, Format, read_manuscript};

/// Characters of each chapter shown by `--info`.
const EXCERPT_CHARS: usize = 150;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Compile a manuscript into an ebook", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio draft.docx -t \"My Book\" -a \"Me\"                Write My Book.epub
    folio draft.txt out.html -t T -a A --format pdf      Write print-ready HTML
    folio draft.txt -i                                   Show detected chapters")]
struct Cli {
    /// Manuscript file (.txt, .md or .docx)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to the title with the format's extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Book title
    #[arg(short, long, default_value = "")]
    title: String,

    /// Book author
    #[arg(short, long, default_value = "")]
    author: String,

    /// Output format: kindle, universal or pdf
    #[arg(short, long, default_value = "kindle")]
    format: Format,

    /// Write a full ZIP container instead of the package document alone
    #[arg(long)]
    container: bool,

    /// Keep text before the first chapter heading as an introduction
    #[arg(long)]
    keep_preamble: bool,

    /// Use US Letter paper for pdf output
    #[arg(long)]
    letter: bool,

    /// Emit title, author and chapter text without escaping markup
    #[arg(long)]
    raw: bool,

    /// Show the detected chapters without exporting
    #[arg(short, long)]
    info: bool,

    /// Print the segmented book as JSON without exporting
    #[arg(long, conflicts_with = "info")]
    json: bool,

    /// Log progress (overridden by FOLIO_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "folio=info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let text = read_manuscript(&cli.input).map_err(|e| e.to_string())?;

    let preamble = if cli.keep_preamble {
        PreamblePolicy::Keep
    } else {
        PreamblePolicy::Discard
    };
    let chapters = Segmenter::new()
        .with_config(SegmenterConfig { preamble })
        .segment(&text);

    let book = BookModel::from_chapters(chapters)
        .with_title(cli.title.trim())
        .with_author(cli.author.trim());

    if cli.info {
        show_info(&cli.input, &text, &book);
        return Ok(());
    }
    if cli.json {
        let json = serde_json::to_string_pretty(&book).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let config = ExportConfig {
        package: PackageConfig {
            layout: if cli.container {
                PackageLayout::Container
            } else {
                PackageLayout::Manifest
            },
            escape_text: !cli.raw,
            ..Default::default()
        },
        print: PrintConfig {
            page_size: if cli.letter {
                PageSize::Letter
            } else {
                PageSize::A4
            },
            escape_text: !cli.raw,
        },
    };

    let artifact = Exporter::new()
        .with_config(config)
        .export(&book, cli.format)
        .map_err(|e| e.to_string())?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&artifact.filename));
    std::fs::write(&output, &artifact.data)
        .map_err(|e| format!("{}: {e}", output.display()))?;

    if !cli.quiet {
        println!(
            "Wrote {} ({}, {} chapters)",
            output.display(),
            cli.format.label(),
            book.chapters.len()
        );
    }
    Ok(())
}

fn show_info(path: &Path, text: &str, book: &BookModel) {
    let stats = book.stats(text);
    println!("File: {}", path.display());
    if !book.title.is_empty() {
        println!("Title: {}", book.title);
    }
    if !book.author.is_empty() {
        println!("Author: {}", book.author);
    }
    println!(
        "{} characters, {} chapters detected",
        stats.characters, stats.chapters
    );
    for (i, chapter) in book.chapters.iter().enumerate() {
        let excerpt = chapter.excerpt(EXCERPT_CHARS).replace('\n', " ");
        if excerpt.len() < chapter.content.len() {
            println!("{:>3}. {}: {excerpt}...", i + 1, chapter.title);
        } else {
            println!("{:>3}. {}: {excerpt}", i + 1, chapter.title);
        }
    }
}
