//! docfmt CLI - markup formatting and page layout tool

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use docfmt::{
    auto_format, paginate, render, render_html, text_stats, JsonFormat, PageConstraints,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "docfmt")]
#[command(version)]
#[command(about = "Format lightweight markup and lay it out into pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup to preview HTML
    Html {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render markup to plain text (markers stripped)
    Text {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render the parsed document as JSON
    Json {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Lay the source out into fixed-size pages
    Pages {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Maximum line width in characters
        #[arg(long, default_value = "80")]
        width: usize,

        /// Maximum lines per page
        #[arg(long, default_value = "40")]
        lines: usize,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show character, word, and line counts
    Stats {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Auto-format the source text (whitespace cleanup)
    Fmt {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Rewrite the file in place instead of printing
        #[arg(long)]
        write: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> docfmt::Result<()> {
    match cli.command {
        Commands::Html { input, output } => {
            let source = read_source(&input)?;
            let html = render_html(&source)?;
            emit(&html, output.as_deref())
        }
        Commands::Text { input, output } => {
            let source = read_source(&input)?;
            let doc = render(&source);
            let text = docfmt::render::to_text(&doc, &RenderOptions::default())?;
            emit(&text, output.as_deref())
        }
        Commands::Json {
            input,
            compact,
            output,
        } => {
            let source = read_source(&input)?;
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = docfmt::render::to_json(&render(&source), format)?;
            emit(&json, output.as_deref())
        }
        Commands::Pages {
            input,
            width,
            lines,
            output,
        } => {
            let source = read_source(&input)?;
            let pages = paginate(&source, &PageConstraints::new(width, lines))?;
            let mut dump = String::new();
            for page in &pages {
                dump.push_str(&format!("--- page {} ---\n", page.number));
                dump.push_str(&page.plain_text());
                dump.push('\n');
            }
            emit(dump.trim_end(), output.as_deref())
        }
        Commands::Stats { input } => {
            let source = read_source(&input)?;
            let stats = text_stats(&source);
            println!("{}: {}", "characters".bold(), stats.characters);
            println!("{}: {}", "words".bold(), stats.words);
            println!("{}: {}", "lines".bold(), stats.lines);
            Ok(())
        }
        Commands::Fmt { input, write } => {
            let source = read_source(&input)?;
            let formatted = auto_format(&source);
            if write {
                fs::write(&input, &formatted)?;
                println!("{} {}", "formatted".green().bold(), input.display());
                Ok(())
            } else {
                println!("{}", formatted);
                Ok(())
            }
        }
    }
}

fn read_source(path: &std::path::Path) -> docfmt::Result<String> {
    let source = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", source.len(), path.display());
    Ok(source)
}

/// Print to stdout or write to a file with a confirmation message.
fn emit(content: &str, output: Option<&std::path::Path>) -> docfmt::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "wrote".green().bold(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
