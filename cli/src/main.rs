//! textsift CLI - structure analysis over extracted PDF text

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use textsift::{DocumentAnalysis, ExtractedDocument, OpRegistry};

#[derive(Parser)]
#[command(name = "textsift")]
#[command(version)]
#[command(about = "Analyze extracted PDF text: structure, tables, search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate statistics and document-type classification
    Analyze {
        /// Input text file (extracted PDF text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page count reported by the decoder
        #[arg(short, long, default_value = "1")]
        pages: u32,

        /// Output JSON instead of a field listing
        #[arg(long)]
        json: bool,
    },

    /// Detect table-like structures per page
    Tables {
        /// Input text file (extracted PDF text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page count reported by the decoder
        #[arg(short, long, default_value = "1")]
        pages: u32,

        /// Output JSON instead of tab-joined rows
        #[arg(long)]
        json: bool,
    },

    /// Search for a literal term across pages
    Search {
        /// Input text file (extracted PDF text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Term to search for (matched literally, case-insensitive)
        #[arg(value_name = "TERM")]
        term: String,

        /// Page count reported by the decoder
        #[arg(short, long, default_value = "1")]
        pages: u32,

        /// Output JSON instead of one line per hit
        #[arg(long)]
        json: bool,
    },

    /// Convert to Markdown with a metadata header
    #[command(alias = "md")]
    Markdown {
        /// Input text file (extracted PDF text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page count reported by the decoder
        #[arg(short, long, default_value = "1")]
        pages: u32,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show a short document summary
    Summary {
        /// Input text file (extracted PDF text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page count reported by the decoder
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },

    /// Show the text attributed to one page
    Page {
        /// Input text file (extracted PDF text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page number (1-indexed)
        #[arg(value_name = "PAGE")]
        page: u32,

        /// Page count reported by the decoder
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },

    /// List the operations exposed by the registry
    Ops,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> textsift::Result<()> {
    match command {
        Commands::Analyze { input, pages, json } => {
            let analysis = load(&input, pages)?;
            let report = analysis.structure()?;
            if json {
                println!("{}", to_pretty_json(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Tables { input, pages, json } => {
            let analysis = load(&input, pages)?;
            let tables = analysis.tables();
            if json {
                println!("{}", to_pretty_json(&tables)?);
            } else if tables.is_empty() {
                println!("No tables found");
            } else {
                for table in &tables {
                    println!(
                        "{}",
                        format!("-- page {} ({} rows) --", table.page, table.row_count())
                            .cyan()
                    );
                    println!("{}", table.plain_text());
                }
            }
        }
        Commands::Search {
            input,
            term,
            pages,
            json,
        } => {
            let analysis = load(&input, pages)?;
            let hits = analysis.search(&term)?;
            if json {
                println!("{}", to_pretty_json(&hits)?);
            } else if hits.is_empty() {
                println!("No matches");
            } else {
                for hit in &hits {
                    println!(
                        "{} {}",
                        format!("p{}:{}", hit.page, hit.position).green(),
                        hit.context
                    );
                }
            }
        }
        Commands::Markdown {
            input,
            pages,
            output,
        } => {
            let analysis = load(&input, pages)?;
            let markdown = analysis.to_markdown();
            match output {
                Some(path) => {
                    fs::write(&path, markdown)?;
                    println!("{} {}", "wrote".green(), path.display());
                }
                None => println!("{}", markdown),
            }
        }
        Commands::Summary { input, pages } => {
            let analysis = load(&input, pages)?;
            println!("{}", analysis.summary());
        }
        Commands::Page { input, page, pages } => {
            let analysis = load(&input, pages)?;
            println!("{}", analysis.page_text(page)?);
        }
        Commands::Ops => {
            let registry = OpRegistry::with_defaults();
            for name in registry.names() {
                if let Some(op) = registry.get(name) {
                    println!("{:<20} {}", name.bold(), op.description());
                }
            }
        }
    }
    Ok(())
}

fn load(input: &PathBuf, pages: u32) -> textsift::Result<DocumentAnalysis> {
    let text = fs::read_to_string(input)?;
    log::debug!(
        "loaded {} ({} bytes, {} pages)",
        input.display(),
        text.len(),
        pages
    );
    let document = ExtractedDocument::new(text, pages)?;
    DocumentAnalysis::of(document)
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> textsift::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| textsift::Error::Other(e.to_string()))
}

fn print_report(report: &textsift::StructureReport) {
    println!("{:<24} {}", "pages".bold(), report.page_count);
    println!("{:<24} {}", "characters".bold(), report.total_characters);
    println!("{:<24} {}", "words".bold(), report.total_words);
    println!("{:<24} {}", "lines".bold(), report.total_lines);
    println!("{:<24} {}", "paragraphs".bold(), report.total_paragraphs);
    println!(
        "{:<24} {}",
        "avg words/page".bold(),
        report.average_words_per_page
    );
    println!(
        "{:<24} {}",
        "potential headings".bold(),
        report.potential_headings
    );
    println!(
        "{:<24} {}",
        "potential table lines".bold(),
        report.potential_table_lines
    );
    println!("{:<24} {}", "document type".bold(), report.document_type);
    println!("{:<24} {}", "has numbers".bold(), report.has_numbers);
    println!(
        "{:<24} {}",
        "has special chars".bold(),
        report.has_special_characters
    );
}
