//! slate-html - HTML normalizer and document converter

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use slate_html::{Document, Error, HtmlSerializer, Result, normalize};

#[derive(Parser)]
#[command(name = "slate-html")]
#[command(version, about = "Normalize editor HTML and convert it to and from documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    slate-html normalize pasted.html             Print normalized HTML
    slate-html deserialize --normalize a.html    Print the document as JSON
    slate-html serialize doc.json                Print HTML for a JSON document
    cat a.html | slate-html roundtrip            Normalize, deserialize, serialize")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log debug output from every pass
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print normalized HTML
    Normalize {
        /// Input HTML file (stdin if omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print the document tree of an HTML file as JSON
    Deserialize {
        /// Input HTML file (stdin if omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Normalize before deserializing
        #[arg(short, long)]
        normalize: bool,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print HTML for a JSON document tree
    Serialize {
        /// Input JSON file (stdin if omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Normalize, deserialize and serialize again
    Roundtrip {
        /// Input HTML file (stdin if omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "slate_html=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn run(command: Command) -> Result<()> {
    let serializer = HtmlSerializer::new();
    match command {
        Command::Normalize { input } => {
            println!("{}", normalize(&read_input(input.as_deref())?));
        }
        Command::Deserialize {
            input,
            normalize: normalize_first,
            pretty,
        } => {
            let mut html = read_input(input.as_deref())?;
            if normalize_first {
                html = normalize(&html);
            }
            let doc = serializer.deserialize(&html);
            let json = if pretty {
                serde_json::to_string_pretty(&doc)?
            } else {
                serde_json::to_string(&doc)?
            };
            println!("{json}");
        }
        Command::Serialize { input } => {
            let json = read_input(input.as_deref())?;
            let doc: Document = serde_json::from_str(&json)?;
            if doc.nodes.is_empty() {
                return Err(Error::InvalidDocument("document has no nodes".into()));
            }
            println!("{}", serializer.serialize(&doc));
        }
        Command::Roundtrip { input } => {
            let html = normalize(&read_input(input.as_deref())?);
            let doc = serializer.deserialize(&html);
            println!("{}", serializer.serialize(&doc));
        }
    }
    Ok(())
}

/// Read a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
