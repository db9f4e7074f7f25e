use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser as ClapParser, Subcommand};
use classmark::cli::{self, CliError, Mode, RunOptions};
use classmark::{MAX_NESTING_DEPTH, ScanOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "classmark")]
#[command(about = "Classmark - markdown with class annotations, tokenized and rendered to HTML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Input text (reads --file or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Read input from a file
    #[arg(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Deepest allowed nesting of class annotations
    #[arg(
        long,
        default_value_t = MAX_NESTING_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_NESTING_DEPTH as u64)
    )]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token tree as JSON
    Parse {
        #[command(flatten)]
        source: InputArgs,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render to HTML
    Render {
        #[command(flatten)]
        source: InputArgs,

        /// Treat the input as a JSON token tree instead of markup
        #[arg(long)]
        from_json: bool,
    },

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'classmark docs' to list topics)
        topic: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { source, pretty } => run(source, Mode::Parse { pretty }),
        Commands::Render { source, from_json } => {
            let mode = if from_json {
                Mode::RenderJson
            } else {
                Mode::Render
            };
            run(source, mode)
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => cli::get_doc_topic(&topic).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(source: InputArgs, mode: Mode) -> Result<(), CliError> {
    let input = match (source.input, source.file) {
        (Some(s), _) => Some(s),
        (None, Some(path)) => Some(std::fs::read_to_string(path)?),
        (None, None) if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        (None, None) => None,
    };

    let options = RunOptions {
        mode,
        input,
        scan: ScanOptions {
            max_nesting_depth: source.max_depth,
        },
    };

    println!("{}", cli::execute(&options)?);
    Ok(())
}
